use headmix_protocol::{DepRelation, Lexicon, MorphTag, PosClass, Token};
use thiserror::Error;

use crate::morphology::WordAnalyzer;
use crate::parser::parse_with_spans;
use crate::token::RawToken;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    #[error("headline is empty after cleaning")]
    EmptyInput,
    #[error("annotator output is malformed: {0}")]
    Malformed(String),
    #[error("annotation backend failed: {0}")]
    Backend(String),
}

/// Turns headline text into annotated tokens.
///
/// Implementations may wrap a statistical pipeline (tags, lemmas and
/// dependency labels) or work from word lists alone; the rest of the
/// engine only sees [`Token`]s.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<Vec<Token>, AnnotationError>;

    /// Whether `token` can head a predicate.
    fn is_verb(&self, token: &Token) -> bool {
        matches!(token.pos, PosClass::Verb | PosClass::Auxiliary)
    }
}

impl<F> Annotator for F
where
    F: Fn(&str) -> Result<Vec<Token>, AnnotationError> + Send + Sync,
{
    fn annotate(&self, text: &str) -> Result<Vec<Token>, AnnotationError> {
        self(text)
    }
}

/// Annotation from the lexicon alone. No dependency parse is produced, so
/// every token's relation is [`DepRelation::Unknown`].
#[derive(Debug, Clone)]
pub struct LexiconAnnotator {
    words: WordAnalyzer,
}

impl LexiconAnnotator {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self { words: WordAnalyzer::from_lexicon(lexicon) }
    }

    pub fn words(&self) -> &WordAnalyzer {
        &self.words
    }
}

/// Most words capitalised: "Scientists Discover New Species".
fn is_title_case(words: &[&str]) -> bool {
    let capitalised = words
        .iter()
        .filter(|w| w.chars().next().map_or(false, char::is_uppercase))
        .count();
    words.len() > 1 && capitalised * 5 >= words.len() * 3
}

impl Annotator for LexiconAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<Token>, AnnotationError> {
        let raw = parse_with_spans(text);
        if raw.is_empty() {
            return Err(AnnotationError::EmptyInput);
        }

        let words: Vec<&str> = raw
            .iter()
            .filter_map(|(_, r)| match r {
                RawToken::Word(w) => Some(*w),
                _ => None,
            })
            .collect();
        let title_case = is_title_case(&words);

        let mut tokens = Vec::with_capacity(raw.len());
        for (i, (span, raw_token)) in raw.iter().enumerate() {
            let index = i as u32;
            let surface = &text[span.start..span.end];
            let space_after = text[span.end..].starts_with(char::is_whitespace);

            let token = match raw_token {
                RawToken::Word(w) => {
                    let analysis = self.words.analyze(w, i, title_case);
                    Token::new(index, surface, analysis.pos, analysis.tag, analysis.lemma, DepRelation::Unknown)
                        .with_morph(analysis.extra)
                }
                RawToken::Possessive(_) => Token::new(
                    index,
                    surface,
                    PosClass::Particle,
                    MorphTag::PossessiveMarker,
                    "'s",
                    DepRelation::Unknown,
                ),
                RawToken::Punct(c) => Token::new(
                    index,
                    surface,
                    PosClass::Punctuation,
                    MorphTag::Punctuation,
                    c.to_string(),
                    DepRelation::Unknown,
                ),
            };
            tokens.push(token.with_space_after(space_after));
        }
        Ok(tokens)
    }

    /// Auxiliaries, or any word the lexicon accepts as verb evidence.
    fn is_verb(&self, token: &Token) -> bool {
        match token.pos {
            PosClass::Auxiliary => true,
            PosClass::Punctuation | PosClass::Numeral => false,
            _ => self.words.verb_evidence(&token.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headmix_protocol::{render, MorphFlags, Number};

    fn annotator() -> LexiconAnnotator {
        LexiconAnnotator::new(&Lexicon::english())
    }

    #[test]
    fn test_annotate_spacing_round_trips() {
        let text = "Biden's plan, explained: what's next?";
        let tokens = annotator().annotate(text).unwrap();
        assert_eq!(render(&tokens), text);
        assert_eq!(tokens[1].tag, MorphTag::PossessiveMarker);
        assert!(!tokens[0].space_after);
    }

    #[test]
    fn test_annotate_empty_is_error() {
        assert_eq!(annotator().annotate("   "), Err(AnnotationError::EmptyInput));
    }

    #[test]
    fn test_pronoun_number() {
        let tokens = annotator().annotate("They resign").unwrap();
        assert_eq!(tokens[0].morph.number(), Some(Number::Plural));
        assert!(tokens[1].morph.contains(MorphFlags::PRESENT));
    }

    #[test]
    fn test_is_verb() {
        let a = annotator();
        let tokens = a.annotate("The report detailed 3 losses").unwrap();
        let verbs: Vec<bool> = tokens.iter().map(|t| a.is_verb(t)).collect();
        assert_eq!(verbs, vec![false, true, true, false, false]);
    }

    #[test]
    fn test_closure_annotator() {
        let fixed = |text: &str| -> Result<Vec<Token>, AnnotationError> {
            Ok(vec![Token::new(0, text, PosClass::Verb, MorphTag::Base, text, DepRelation::Root)])
        };
        let tokens = fixed.annotate("go").unwrap();
        assert!(fixed.is_verb(&tokens[0]));
    }
}
