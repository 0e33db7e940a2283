pub mod annotate;
pub mod boundary;
pub mod clean;
pub mod morphology;
pub mod number;
pub mod parser;
pub mod token;

use headmix_protocol::{
    HeadlineId, HeadlineRecord, Lexicon, MorphTag, ParsedHeadline, PosClass, Provenance, Token, VerbTag,
};
use rayon::prelude::*;
use tracing::{debug, info, warn};

pub use annotate::{AnnotationError, Annotator, LexiconAnnotator};
pub use boundary::{Boundary, Disqualifier, VerbBoundaryLocator, Window, DISQUALIFIERS};
pub use clean::clean_headline;
pub use number::NumberClassifier;

/// Admission rules applied once a boundary has been found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Headlines with fewer tokens are dropped.
    pub min_words: usize,
    pub max_subject_tokens: usize,
    /// The subject must contain a noun, proper noun, pronoun or numeral.
    pub require_subject_content: bool,
    /// Drop headlines that open with a gerund ("Building a better ...").
    pub reject_leading_gerund: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            min_words: 4,
            max_subject_tokens: 15,
            require_subject_content: true,
            reject_leading_gerund: true,
        }
    }
}

/// Outcome of parsing a batch of headlines.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// In input order.
    pub parsed: Vec<ParsedHeadline>,
    /// Headlines with no usable split.
    pub rejected: usize,
    /// Annotation failures by input index.
    pub failures: Vec<(usize, AnnotationError)>,
}

/// Tag for a verb the annotator did not tag as one, read off its ending.
fn tag_from_surface(surface: &str) -> VerbTag {
    let lower = surface.to_lowercase();
    if lower.ends_with("ing") {
        VerbTag::Gerund
    } else if lower.ends_with("ed") {
        VerbTag::Past
    } else if lower.ends_with('s') && !lower.ends_with("ss") {
        VerbTag::Present3Sg
    } else {
        VerbTag::Base
    }
}

fn is_content(token: &Token) -> bool {
    token.pos.is_nominal() || token.pos == PosClass::Numeral
}

/// Splits headlines into subject and predicate.
pub struct HeadlineParser<A> {
    annotator: A,
    locator: VerbBoundaryLocator,
    classifier: NumberClassifier,
    options: ParseOptions,
}

impl<A: Annotator> HeadlineParser<A> {
    pub fn new(annotator: A, lexicon: &Lexicon) -> Self {
        Self {
            annotator,
            locator: VerbBoundaryLocator::from_lexicon(lexicon),
            classifier: NumberClassifier::from_lexicon(lexicon),
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_locator(mut self, locator: VerbBoundaryLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Parses one headline.
    ///
    /// `Ok(None)` means the headline has no usable split and should be left
    /// out of the pool; `Err` means the annotator itself failed.
    pub fn parse(&self, id: HeadlineId, record: &HeadlineRecord) -> Result<Option<ParsedHeadline>, AnnotationError> {
        let text = clean_headline(&record.text);
        let tokens = self.annotator.annotate(&text)?;

        if tokens.len() < self.options.min_words {
            debug!(%id, rule = "too-short", "headline rejected");
            return Ok(None);
        }
        let leading_gerund = tokens.first().map_or(false, |t| t.tag == MorphTag::Gerund);
        if self.options.reject_leading_gerund && leading_gerund {
            debug!(%id, rule = "leading-gerund", "headline rejected");
            return Ok(None);
        }

        let Some(boundary) = self.locator.locate(&tokens, &self.annotator) else {
            return Ok(None);
        };
        let split = boundary.index;
        let subject = &tokens[..split];

        if subject.len() > self.options.max_subject_tokens {
            debug!(%id, rule = "subject-too-long", "headline rejected");
            return Ok(None);
        }
        if self.options.require_subject_content && !subject.iter().any(is_content) {
            debug!(%id, rule = "subject-without-content", "headline rejected");
            return Ok(None);
        }

        let verb_tag = VerbTag::from_morph(boundary.verb.tag).unwrap_or_else(|| tag_from_surface(&boundary.verb.text));
        let number = self.classifier.classify(subject);
        let provenance = Provenance {
            original_text: text,
            source: record.source.clone(),
            link: record.link.clone(),
        };

        Ok(ParsedHeadline::new(id, provenance, tokens, split, verb_tag, number))
    }

    /// Parses every record in parallel. Annotation failures are collected
    /// per index and never abort the batch.
    pub fn parse_batch(&self, records: &[HeadlineRecord]) -> BatchReport {
        let results: Vec<_> = records
            .par_iter()
            .enumerate()
            .map(|(i, record)| (i, self.parse(HeadlineId::new(i as u32), record)))
            .collect();

        let mut report = BatchReport::default();
        for (i, result) in results {
            match result {
                Ok(Some(parsed)) => report.parsed.push(parsed),
                Ok(None) => report.rejected += 1,
                Err(err) => {
                    warn!(index = i, error = %err, "annotation failed");
                    report.failures.push((i, err));
                }
            }
        }

        info!(
            parsed = report.parsed.len(),
            rejected = report.rejected,
            failed = report.failures.len(),
            "headline batch parsed"
        );
        report
    }
}
