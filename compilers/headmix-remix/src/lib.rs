pub mod config;
pub mod pairer;
pub mod rng;

use std::collections::HashSet;

use headmix_ecs::components::DependencyRole;
use headmix_ecs::AgreementWorld;
use headmix_morph::{Synthesizer, VerbForm};
use headmix_protocol::{
    render, Combination, DiagnosticFlags, Lexicon, MorphFlags, Number, ParsedHeadline, PosClass, Token,
};
use thiserror::Error;
use tracing::{debug, info};

pub use config::{RemixConfig, TenseMatchMode};
pub use pairer::{plan_pairs, PairPlan, Pairing};
pub use rng::SimpleRng;

#[derive(Debug, Error)]
pub enum RemixError {
    #[error("target count must be at least 1, got {0}")]
    InvalidTargetCount(usize),
    #[error("invalid remix configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Recombines the subjects and predicates of parsed headlines.
#[derive(Debug, Clone)]
pub struct Remixer {
    synthesizer: Synthesizer,
    config: RemixConfig,
}

impl Remixer {
    pub fn new(config: RemixConfig, lexicon: &Lexicon) -> Result<Self, RemixError> {
        config.validate()?;
        Ok(Self {
            synthesizer: Synthesizer::from_lexicon(lexicon),
            config,
        })
    }

    pub fn config(&self) -> &RemixConfig {
        &self.config
    }

    /// Produces up to `target_count` combinations with a shuffled predicate
    /// order. Fewer come back when the pool cannot supply enough distinct
    /// pairs.
    pub fn generate(&self, pool: &[ParsedHeadline]) -> Vec<Combination> {
        let mut rng = match self.config.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_clock(),
        };
        let mut order: Vec<usize> = (0..pool.len()).collect();
        rng.shuffle(&mut order);
        self.generate_with_order(pool, &order)
    }

    /// Like [`generate`](Self::generate) with a caller-chosen predicate order.
    pub fn generate_with_order(&self, pool: &[ParsedHeadline], order: &[usize]) -> Vec<Combination> {
        let plan = plan_pairs(pool, order, self.config.target_count);
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(plan.pairs.len());

        for pairing in &plan.pairs {
            let combination = self.combine(&pool[pairing.subject], &pool[pairing.predicate]);
            if !seen.insert(combination.headline_text.clone()) {
                debug!(text = %combination.headline_text, "duplicate combination skipped");
                continue;
            }
            out.push(combination);
        }

        info!(
            requested = self.config.target_count,
            emitted = out.len(),
            repairs = plan.repairs,
            self_pairs = plan.self_pairs,
            "remix batch complete"
        );
        out
    }

    /// Puts `predicate`'s predicate after `subject`'s subject, re-inflecting
    /// the verb for the new subject.
    pub fn combine(&self, subject: &ParsedHeadline, predicate: &ParsedHeadline) -> Combination {
        let reference = match self.config.tense_mode {
            TenseMatchMode::MatchSubjectVerbTense => subject.verb_tag(),
            TenseMatchMode::PreservePredicateTense => predicate.verb_tag(),
        };
        let number = subject.subject_number();
        let verb = predicate.verb();
        let form = VerbForm {
            surface: &verb.text,
            lemma: predicate.verb_lemma(),
            tag: predicate.verb_tag(),
        };
        let conjugation = self.synthesizer.conjugate(&form, reference, number == Number::Plural);

        let mut diagnostics = DiagnosticFlags::empty();
        if conjugation.fallback {
            diagnostics |= DiagnosticFlags::SYNTHESIS_FALLBACK;
        }
        if !self.agrees(subject, number, predicate.verb_lemma(), &conjugation.form) {
            diagnostics |= DiagnosticFlags::NUMBER_MISMATCH;
        }

        let mut headline_text = format!("{} {}", subject.subject_text(), conjugation.form);
        let tail = predicate.predicate_tail();
        if !tail.is_empty() {
            if verb.space_after {
                headline_text.push(' ');
            }
            headline_text.push_str(&render(tail));
        }

        Combination {
            headline_text,
            subject: subject.provenance().clone(),
            predicate: predicate.provenance().clone(),
            diagnostics,
        }
    }

    /// Runs the agreement checks over the new sentence's subject and verb.
    fn agrees(&self, subject: &ParsedHeadline, number: Number, lemma: &str, form: &str) -> bool {
        let mut world = AgreementWorld::new();

        let verb_number = self.synthesizer.number_of(lemma, form);
        let verb = world.add_token(form, lemma, verb_number.map_or(MorphFlags::empty(), Number::flags));
        let phrase = world.add_token(subject.subject_text(), "", number.flags());
        world.set_dependency(phrase, verb, DependencyRole::Subject);

        // A determiner right before the head noun must agree with it.
        let tokens = subject.subject();
        if let Some(head) = tokens.iter().rposition(is_head_candidate) {
            if let Some(det) = head.checked_sub(1).map(|i| &tokens[i]) {
                if det.pos == PosClass::Determiner {
                    let noun = &tokens[head];
                    let noun_entity = world.add_token(noun.text.clone(), noun.lemma.clone(), noun.morph);
                    let det_entity = world.add_token(det.text.clone(), det.lemma.clone(), det.morph);
                    world.set_dependency(det_entity, noun_entity, DependencyRole::Modifier);
                }
            }
        }

        let errors = world.validate();
        for error in &errors {
            debug!(kind = ?error.kind, source = %error.source, target = %error.target, "agreement error");
        }
        errors.is_empty()
    }
}

fn is_head_candidate(token: &Token) -> bool {
    matches!(token.pos, PosClass::Noun | PosClass::ProperNoun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use headmix_parser::{HeadlineParser, LexiconAnnotator};
    use headmix_protocol::{DepRelation, HeadlineId, HeadlineRecord, MorphTag, Provenance, VerbTag};
    use proptest::prelude::*;

    fn pool(texts: &[&str]) -> Vec<ParsedHeadline> {
        let lexicon = Lexicon::english();
        let parser = HeadlineParser::new(LexiconAnnotator::new(&lexicon), &lexicon);
        let records: Vec<HeadlineRecord> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| HeadlineRecord::new(*t, "Wire", format!("https://example.org/{}", i)))
            .collect();
        let report = parser.parse_batch(&records);
        assert_eq!(report.parsed.len(), texts.len(), "every test headline must parse");
        report.parsed
    }

    fn remixer(mode: TenseMatchMode, target_count: usize) -> Remixer {
        let config = RemixConfig { tense_mode: mode, target_count, seed: Some(11) };
        Remixer::new(config, &Lexicon::english()).unwrap()
    }

    fn texts(combinations: &[Combination]) -> Vec<&str> {
        combinations.iter().map(|c| c.headline_text.as_str()).collect()
    }

    #[test]
    fn test_repaired_order_preserves_predicate_tense() {
        let pool = pool(&[
            "Scientists discover new species",
            "Mayor resigns over budget scandal",
            "Local councils ban plastic bags",
        ]);
        let out = remixer(TenseMatchMode::PreservePredicateTense, 3).generate_with_order(&pool, &[0, 2, 1]);

        assert_eq!(
            texts(&out),
            vec![
                "Scientists ban plastic bags",
                "Mayor discovers new species",
                "Local councils resign over budget scandal",
            ]
        );
        assert!(out.iter().all(|c| c.subject.original_text != c.predicate.original_text));
        assert!(out.iter().all(|c| !c.is_low_confidence()));
        assert_eq!(out[1].predicate.link, "https://example.org/0");
    }

    #[test]
    fn test_tense_modes() {
        let pool = pool(&["Mayor took the blame again", "Scientists discover new species"]);

        let matched = remixer(TenseMatchMode::MatchSubjectVerbTense, 2).generate_with_order(&pool, &[1, 0]);
        assert_eq!(texts(&matched), vec!["Mayor discovered new species", "Scientists take the blame again"]);

        let preserved = remixer(TenseMatchMode::PreservePredicateTense, 2).generate_with_order(&pool, &[1, 0]);
        assert_eq!(texts(&preserved), vec!["Mayor discovers new species", "Scientists took the blame again"]);
    }

    #[test]
    fn test_past_modal_keeps_its_tense() {
        let pool = pool(&["Scientists discover new species", "Banks could face new fines"]);
        let out = remixer(TenseMatchMode::PreservePredicateTense, 2).generate_with_order(&pool, &[1, 0]);

        assert_eq!(texts(&out), vec!["Scientists could face new fines", "Banks discover new species"]);
        assert!(out.iter().all(|c| c.diagnostics.is_empty()));
    }

    #[test]
    fn test_determiner_mismatch_flagged() {
        let pool = pool(&["This councils ban plastic bags", "Scientists discover new species"]);
        let out = remixer(TenseMatchMode::PreservePredicateTense, 2).generate_with_order(&pool, &[1, 0]);

        assert!(out[0].headline_text.starts_with("This councils discover"));
        assert_eq!(out[0].diagnostics, DiagnosticFlags::NUMBER_MISMATCH);
        assert!(out[1].diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_text_skipped() {
        let pool = pool(&[
            "Mayor resigns over budget scandal",
            "Mayor quits over budget scandal",
            "Scientists discover new species",
            "Researchers discover new species",
        ]);
        let out = remixer(TenseMatchMode::PreservePredicateTense, 4).generate_with_order(&pool, &[2, 3, 0, 1]);

        assert_eq!(
            texts(&out),
            vec![
                "Mayor discovers new species",
                "Scientists resign over budget scandal",
                "Researchers quit over budget scandal",
            ]
        );
    }

    #[test]
    fn test_pool_exhaustion_returns_fewer() {
        let pool = pool(&["Scientists discover new species", "Mayor resigns over budget scandal"]);
        let out = remixer(TenseMatchMode::PreservePredicateTense, 50).generate(&pool);
        assert!(out.len() <= 2);
        assert!(remixer(TenseMatchMode::PreservePredicateTense, 50).generate(&pool[..1]).is_empty());
    }

    #[test]
    fn test_number_mismatch_flagged() {
        // The subject's own verb is a gerund, so the predicate verb is kept as is.
        let pool = pool(&["Markets reeling after crash overnight", "Mayor resigns over budget scandal"]);
        let out = remixer(TenseMatchMode::MatchSubjectVerbTense, 2).generate_with_order(&pool, &[1, 0]);

        assert_eq!(out[0].headline_text, "Markets resigns over budget scandal");
        assert_eq!(out[0].diagnostics, DiagnosticFlags::NUMBER_MISMATCH);
        assert!(out[0].is_low_confidence());
    }

    #[test]
    fn test_synthesis_fallback_flagged() {
        let provenance = |text: &str| Provenance { original_text: text.into(), source: "Feed".into(), link: String::new() };
        let subject = pool(&["Local councils ban plastic bags"]).remove(0);
        let odd = ParsedHeadline::new(
            HeadlineId::new(9),
            provenance("Stocks 2x again"),
            vec![
                Token::new(0, "Stocks", PosClass::Noun, MorphTag::NounPlural, "stock", DepRelation::NominalSubject),
                Token::new(1, "2x", PosClass::Verb, MorphTag::Present3Sg, "2x", DepRelation::Root),
                Token::new(2, "again", PosClass::Adverb, MorphTag::Adverb, "again", DepRelation::Other),
            ],
            1,
            VerbTag::Present3Sg,
            Number::Plural,
        )
        .unwrap();

        let combination = remixer(TenseMatchMode::PreservePredicateTense, 1).combine(&subject, &odd);
        assert_eq!(combination.headline_text, "Local councils 2x again");
        assert!(combination.diagnostics.contains(DiagnosticFlags::SYNTHESIS_FALLBACK));
    }

    #[test]
    fn test_zero_target_rejected() {
        let config = RemixConfig { target_count: 0, ..RemixConfig::default() };
        assert!(matches!(Remixer::new(config, &Lexicon::english()), Err(RemixError::InvalidTargetCount(0))));
    }

    proptest! {
        #[test]
        fn test_batch_invariants(seed in any::<u64>(), count in 1usize..8) {
            let pool = pool(&[
                "Scientists discover new species",
                "Mayor resigns over budget scandal",
                "Local councils ban plastic bags",
                "Mayor took the blame again",
                "Researchers discover new species",
                "Markets reeling after crash overnight",
            ]);
            let config = RemixConfig { tense_mode: TenseMatchMode::PreservePredicateTense, target_count: count, seed: Some(seed) };
            let out = Remixer::new(config, &Lexicon::english()).unwrap().generate(&pool);

            prop_assert!(out.len() <= count);
            let unique: HashSet<&str> = out.iter().map(|c| c.headline_text.as_str()).collect();
            prop_assert_eq!(unique.len(), out.len());
            for c in &out {
                prop_assert_ne!(&c.subject.original_text, &c.predicate.original_text);
            }
        }
    }
}
