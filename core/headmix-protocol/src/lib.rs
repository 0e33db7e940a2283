#![no_std] // Shared by the no_std morphology crate

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod morphology;

// Re-export core types for convenience
pub use ids::{HeadlineId, TokenId};
pub use morphology::*;

pub mod model;
pub use model::*;

pub mod lexicon;
pub use lexicon::{IrregularEntry, Lexicon, LexiconError};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rkyv::to_bytes;

    #[test]
    fn test_lexicon_archive_round_trip() {
        let lexicon = Lexicon::english();

        let bytes = to_bytes::<_, 4096>(&lexicon).expect("Failed to serialize Lexicon");
        let loaded = Lexicon::from_archive(&bytes).expect("Failed to load Lexicon archive");

        assert_eq!(lexicon, loaded);
        assert_eq!(loaded.irregular("be").and_then(|e| e.past_plural.as_deref()), Some("were"));
    }

    #[test]
    fn test_corrupt_archive_is_rejected() {
        let garbage = [0xFFu8; 7];
        assert_eq!(Lexicon::from_archive(&garbage), Err(LexiconError::Corrupt));
    }

    #[test]
    fn test_empty_lexicon_is_rejected() {
        let mut lexicon = Lexicon::english();
        lexicon.irregular_verbs.clear();
        lexicon.common_verbs.clear();

        let bytes = to_bytes::<_, 1024>(&lexicon).expect("Failed to serialize Lexicon");
        assert_eq!(Lexicon::from_archive(&bytes), Err(LexiconError::Empty));
    }

    #[test]
    fn test_id_layout() {
        // HeadlineId(u32) should be exactly 4 bytes
        assert_eq!(core::mem::size_of::<HeadlineId>(), 4);
        assert_eq!(u32::from(TokenId::new(7)), 7);
    }

    #[test]
    fn test_english_lexicon_contents() {
        let lexicon = Lexicon::english();
        assert!(lexicon.never_verbs.iter().any(|w| w == "report"));
        assert!(lexicon.common_verbs.iter().any(|w| w == "discovers"));
        assert!(lexicon.common_verbs.iter().any(|w| w == "resign"));
        assert!(lexicon.common_verbs.iter().any(|w| w == "worried"));
        assert!(!lexicon.common_verbs.iter().any(|w| w == "the"));
    }

    #[test]
    fn test_tag_features() {
        assert_eq!(MorphTag::from_penn("NNS").features().number(), Some(Number::Plural));
        assert_eq!(MorphTag::from_penn("VBZ").features().number(), Some(Number::Singular));
        assert_eq!(MorphTag::from_penn("VBN").features(), MorphFlags::PAST | MorphFlags::PARTICIPLE);
        assert!(MorphTag::from_penn("PRP$").features().contains(MorphFlags::POSSESSIVE));
        assert_eq!(VerbTag::from_morph(MorphTag::from_penn("NN")), None);
        assert_eq!(VerbTag::PastParticiple.tense(), Tense::Past);
        assert_eq!(VerbTag::Base.tense(), Tense::Present);
    }

    #[test]
    fn test_parsed_headline_invariants() {
        let provenance = Provenance {
            original_text: "Scientists discover new species".into(),
            source: "Feed".into(),
            link: "https://example.org/1".into(),
        };
        let tokens = vec![
            Token::new(0, "Scientists", PosClass::Noun, MorphTag::NounPlural, "scientist", DepRelation::NominalSubject),
            Token::new(1, "discover", PosClass::Verb, MorphTag::PresentNon3Sg, "discover", DepRelation::Root),
            Token::new(2, "species", PosClass::Noun, MorphTag::NounPlural, "species", DepRelation::DirectObject),
        ];

        assert!(ParsedHeadline::new(HeadlineId(0), provenance.clone(), tokens.clone(), 0, VerbTag::PresentNon3Sg, Number::Plural).is_none());
        assert!(ParsedHeadline::new(HeadlineId(0), provenance.clone(), tokens.clone(), 3, VerbTag::PresentNon3Sg, Number::Plural).is_none());

        let parsed = ParsedHeadline::new(HeadlineId(0), provenance, tokens, 1, VerbTag::PresentNon3Sg, Number::Plural).unwrap();
        assert_eq!(parsed.subject().len(), 1);
        assert_eq!(parsed.verb().text, "discover");
        assert_eq!(parsed.predicate()[0], *parsed.verb());
        assert_eq!(parsed.subject_text(), "Scientists");
        assert_eq!(render(parsed.predicate_tail()), "species");
    }
}
