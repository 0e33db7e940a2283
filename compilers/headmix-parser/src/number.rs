use std::collections::HashSet;

use headmix_protocol::{Lexicon, Number, Token};

/// Decides whether a subject span is grammatically plural.
///
/// Rules, first match wins:
/// 1. a coordinating "and" anywhere makes it plural;
/// 2. a leading plural quantifier ("several", "many") makes it plural;
/// 3. the last noun, proper noun or pronoun decides by its number feature;
/// 4. otherwise the last word is plural if it ends in a single "s".
#[derive(Debug, Clone)]
pub struct NumberClassifier {
    plural_quantifiers: HashSet<String>,
}

impl NumberClassifier {
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        Self {
            plural_quantifiers: lexicon.plural_quantifiers.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn classify(&self, span: &[Token]) -> Number {
        Number::from_plural(self.is_plural(span))
    }

    pub fn is_plural(&self, span: &[Token]) -> bool {
        if span.iter().any(|t| t.is("and")) {
            return true;
        }
        if span.first().map_or(false, |t| self.plural_quantifiers.contains(&t.lower())) {
            return true;
        }
        let last_nominal = span.iter().rev().find(|t| t.pos.is_nominal());
        if let Some(number) = last_nominal.and_then(|t| t.morph.number()) {
            return number == Number::Plural;
        }

        let last_word = span
            .iter()
            .rev()
            .map(|t| t.text.chars().filter(|c| c.is_alphabetic()).collect::<String>().to_lowercase())
            .find(|w| !w.is_empty());
        match last_word {
            Some(w) => w.len() > 3 && w.ends_with('s') && !w.ends_with("ss"),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headmix_protocol::{DepRelation, MorphFlags, MorphTag, PosClass};

    fn classifier() -> NumberClassifier {
        NumberClassifier::from_lexicon(&Lexicon::english())
    }

    fn word(i: u32, text: &str, pos: PosClass, tag: MorphTag) -> Token {
        Token::new(i, text, pos, tag, text.to_lowercase(), DepRelation::Unknown)
    }

    #[test]
    fn test_coordination_is_plural() {
        let span = vec![
            word(0, "Mayor", PosClass::Noun, MorphTag::Noun),
            word(1, "and", PosClass::Conjunction, MorphTag::Conjunction),
            word(2, "aide", PosClass::Noun, MorphTag::Noun),
        ];
        assert_eq!(classifier().classify(&span), Number::Plural);
    }

    #[test]
    fn test_quantifier_is_plural() {
        let span = vec![
            word(0, "Several", PosClass::Adjective, MorphTag::Adjective),
            word(1, "staff", PosClass::Noun, MorphTag::Noun),
        ];
        assert!(classifier().is_plural(&span));
    }

    #[test]
    fn test_last_nominal_decides() {
        let span = vec![
            word(0, "Head", PosClass::Noun, MorphTag::Noun),
            word(1, "of", PosClass::Adposition, MorphTag::Preposition),
            word(2, "Police", PosClass::ProperNoun, MorphTag::ProperNounPlural),
        ];
        assert!(classifier().is_plural(&span));

        let span = vec![word(0, "They", PosClass::Pronoun, MorphTag::Pronoun).with_morph(MorphFlags::PLURAL)];
        assert!(classifier().is_plural(&span));

        let span = vec![word(0, "Texas", PosClass::ProperNoun, MorphTag::ProperNoun)];
        assert!(!classifier().is_plural(&span));
    }

    #[test]
    fn test_surface_fallback() {
        // A pronoun without number features falls through to the surface rule.
        let span = vec![word(0, "You", PosClass::Pronoun, MorphTag::Pronoun)];
        assert!(!classifier().is_plural(&span));

        let span = vec![
            word(0, "Top", PosClass::Adjective, MorphTag::Adjective),
            word(1, "10", PosClass::Numeral, MorphTag::Cardinal),
            word(2, "picks", PosClass::Other, MorphTag::Other),
            word(3, ":", PosClass::Punctuation, MorphTag::Punctuation),
        ];
        assert!(classifier().is_plural(&span));
        assert!(!classifier().is_plural(&[word(0, "Boss", PosClass::Other, MorphTag::Other)]));
        assert!(!classifier().is_plural(&[]));
    }
}
