//! Verb boundary location: where a headline's subject ends and its
//! predicate begins.
//!
//! Candidates are scanned left to right from the second token. A candidate
//! is rejected by the first [`Disqualifier`] that applies to it; the first
//! survivor the annotator accepts as a verb is the boundary.

use std::collections::HashSet;
use std::fmt;

use headmix_protocol::{Lexicon, MorphFlags, MorphTag, PosClass, Token};
use tracing::{debug, trace};

use crate::annotate::Annotator;

/// A candidate position and the tokens around it.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    pub tokens: &'a [Token],
    pub index: usize,
    never_verbs: &'a HashSet<String>,
}

impl<'a> Window<'a> {
    pub fn candidate(&self) -> &'a Token {
        &self.tokens[self.index]
    }

    /// The token `back` positions before the candidate.
    pub fn before(&self, back: usize) -> Option<&'a Token> {
        self.index.checked_sub(back).map(|i| &self.tokens[i])
    }

    pub fn after(&self) -> Option<&'a Token> {
        self.tokens.get(self.index + 1)
    }

    pub fn is_never_verb(&self, token: &Token) -> bool {
        let letters: String = token.text.chars().filter(|c| c.is_alphabetic()).collect();
        self.never_verbs.contains(&letters.to_lowercase())
    }
}

/// A named rule that rules out a verb candidate.
#[derive(Clone, Copy)]
pub struct Disqualifier {
    pub name: &'static str,
    pub applies: fn(&Window<'_>) -> bool,
}

impl fmt::Debug for Disqualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Disqualifier").field(&self.name).finish()
    }
}

fn is_gerund(token: &Token) -> bool {
    token.tag == MorphTag::Gerund
}

fn is_participle(token: &Token) -> bool {
    token.tag == MorphTag::PastParticiple
}

fn is_preposition(token: &Token) -> bool {
    token.pos == PosClass::Adposition || token.tag == MorphTag::Preposition
}

fn is_noun(token: &Token) -> bool {
    matches!(token.pos, PosClass::Noun | PosClass::ProperNoun)
}

fn never_verb(w: &Window<'_>) -> bool {
    w.is_never_verb(w.candidate())
}

fn after_infinitive_to(w: &Window<'_>) -> bool {
    w.before(1).map_or(false, |t| t.is("to"))
}

/// "NASA", "U.S": two or more letters, none lowercase.
fn acronym(w: &Window<'_>) -> bool {
    let text = &w.candidate().text;
    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    letters >= 2 && !text.chars().any(char::is_lowercase)
}

fn gerund_nominal_dependency(w: &Window<'_>) -> bool {
    is_gerund(w.candidate()) && w.candidate().dep.is_nominal_argument()
}

fn gerund_after_preposition(w: &Window<'_>) -> bool {
    is_gerund(w.candidate()) && w.before(1).map_or(false, is_preposition)
}

fn gerund_after_adjective_preposition(w: &Window<'_>) -> bool {
    is_gerund(w.candidate())
        && w.before(2).map_or(false, |t| t.pos == PosClass::Adjective)
        && w.before(1).map_or(false, is_preposition)
}

fn gerund_after_possessive(w: &Window<'_>) -> bool {
    is_gerund(w.candidate()) && w.before(1).map_or(false, |t| t.morph.contains(MorphFlags::POSSESSIVE))
}

fn participle_noun_modifier(w: &Window<'_>) -> bool {
    is_participle(w.candidate()) && w.candidate().dep.is_noun_modifier()
}

fn participle_before_preposition(w: &Window<'_>) -> bool {
    is_participle(w.candidate()) && w.after().map_or(false, is_preposition)
}

/// "Man in custody charged": the participle follows a noun that closes a
/// prepositional phrase attached to an earlier noun.
fn participle_after_noun_preposition(w: &Window<'_>) -> bool {
    is_participle(w.candidate())
        && w.before(1).map_or(false, is_noun)
        && w.before(2).map_or(false, is_preposition)
        && w.before(3).map_or(false, is_noun)
}

/// "The report detailed ...": determiner or adjective, noun, participle.
fn participle_reduced_relative(w: &Window<'_>) -> bool {
    is_participle(w.candidate())
        && w.before(1).map_or(false, is_noun)
        && w.before(2).map_or(false, |t| matches!(t.pos, PosClass::Adjective | PosClass::Determiner))
}

/// The disqualifiers in the order they are tried.
pub const DISQUALIFIERS: &[Disqualifier] = &[
    Disqualifier { name: "never-verb", applies: never_verb },
    Disqualifier { name: "after-infinitive-to", applies: after_infinitive_to },
    Disqualifier { name: "acronym", applies: acronym },
    Disqualifier { name: "gerund-nominal-dependency", applies: gerund_nominal_dependency },
    Disqualifier { name: "gerund-after-preposition", applies: gerund_after_preposition },
    Disqualifier { name: "gerund-after-adjective-preposition", applies: gerund_after_adjective_preposition },
    Disqualifier { name: "gerund-after-possessive", applies: gerund_after_possessive },
    Disqualifier { name: "participle-noun-modifier", applies: participle_noun_modifier },
    Disqualifier { name: "participle-before-preposition", applies: participle_before_preposition },
    Disqualifier { name: "participle-after-noun-preposition", applies: participle_after_noun_preposition },
    Disqualifier { name: "participle-reduced-relative", applies: participle_reduced_relative },
];

/// The split point of a headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary<'t> {
    pub index: usize,
    pub verb: &'t Token,
}

#[derive(Debug, Clone)]
pub struct VerbBoundaryLocator {
    never_verbs: HashSet<String>,
    question_words: HashSet<String>,
    rules: Vec<Disqualifier>,
}

impl VerbBoundaryLocator {
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        Self {
            never_verbs: lexicon.never_verbs.iter().map(|w| w.to_lowercase()).collect(),
            question_words: lexicon.question_words.iter().map(|w| w.to_lowercase()).collect(),
            rules: DISQUALIFIERS.to_vec(),
        }
    }

    /// Appends a rule after the built-in ones.
    pub fn with_rule(mut self, rule: Disqualifier) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Disqualifier] {
        &self.rules
    }

    /// Name of the first rule that rules out `tokens[index]`, if any.
    pub fn disqualified_by(&self, tokens: &[Token], index: usize) -> Option<&'static str> {
        let window = Window { tokens, index, never_verbs: &self.never_verbs };
        self.rules.iter().find(|rule| (rule.applies)(&window)).map(|rule| rule.name)
    }

    /// Finds the first verb that can start a predicate.
    ///
    /// Questions ("Why ...", "How to ...") have no subject/predicate split
    /// and yield `None`, as do headlines where every candidate is ruled out.
    pub fn locate<'t, A: Annotator + ?Sized>(&self, tokens: &'t [Token], annotator: &A) -> Option<Boundary<'t>> {
        let first = tokens.first()?;
        if first.is("how") && tokens.get(1).map_or(false, |t| t.is("to")) {
            debug!(rule = "how-to", "headline rejected");
            return None;
        }
        if self.question_words.contains(&first.lower()) {
            debug!(rule = "interrogative", word = %first.text, "headline rejected");
            return None;
        }

        for (index, token) in tokens.iter().enumerate().skip(1) {
            if let Some(rule) = self.disqualified_by(tokens, index) {
                trace!(index, word = %token.text, rule, "candidate disqualified");
                continue;
            }
            if annotator.is_verb(token) {
                return Some(Boundary { index, verb: token });
            }
        }
        debug!(rule = "no-verb", "headline rejected");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::LexiconAnnotator;
    use headmix_protocol::DepRelation;

    fn lexicon_annotator() -> LexiconAnnotator {
        LexiconAnnotator::new(&Lexicon::english())
    }

    fn locator() -> VerbBoundaryLocator {
        VerbBoundaryLocator::from_lexicon(&Lexicon::english())
    }

    fn split(text: &str) -> Option<usize> {
        let annotator = lexicon_annotator();
        let tokens = annotator.annotate(text).unwrap();
        locator().locate(&tokens, &annotator).map(|b| b.index)
    }

    fn tok(i: u32, text: &str, pos: &str, tag: &str, dep: &str) -> Token {
        Token::new(
            i,
            text,
            PosClass::from_label(pos),
            MorphTag::from_penn(tag),
            text.to_lowercase(),
            DepRelation::from_label(dep),
        )
    }

    #[test]
    fn test_simple_split() {
        assert_eq!(split("Scientists discover new species"), Some(1));
    }

    #[test]
    fn test_never_verb_and_reduced_relative() {
        assert_eq!(split("The report detailed losses"), None);
    }

    #[test]
    fn test_participle_before_preposition() {
        let annotator = lexicon_annotator();
        let tokens = annotator.annotate("Officials charged with corruption resign").unwrap();
        let boundary = locator().locate(&tokens, &annotator).unwrap();
        assert_eq!(boundary.index, 4);
        assert_eq!(boundary.verb.text, "resign");
        assert_eq!(locator().disqualified_by(&tokens, 1), Some("participle-before-preposition"));
    }

    #[test]
    fn test_questions_rejected() {
        assert_eq!(split("How to survive a heatwave"), None);
        assert_eq!(split("Why markets fell today"), None);
    }

    #[test]
    fn test_acronym_skipped() {
        assert_eq!(split("Officials at NASA announce launch"), Some(3));
    }

    #[test]
    fn test_gerund_guards() {
        let annotator = lexicon_annotator();
        let loc = locator();

        // "Fans hesitant about giving up tickets": ADJ ADP VBG
        let tokens = vec![
            tok(0, "Fans", "NOUN", "NNS", "nsubj"),
            tok(1, "hesitant", "ADJ", "JJ", "amod"),
            tok(2, "about", "ADP", "IN", "prep"),
            tok(3, "giving", "VERB", "VBG", "pcomp"),
            tok(4, "up", "ADP", "RP", "prt"),
            tok(5, "tickets", "NOUN", "NNS", "dobj"),
        ];
        assert_eq!(loc.disqualified_by(&tokens, 3), Some("gerund-nominal-dependency"));
        assert!(loc.locate(&tokens, &annotator).is_none());

        let tokens = vec![
            tok(0, "Her", "PRON", "PRP$", "poss"),
            tok(1, "planning", "VERB", "VBG", "ROOT"),
        ];
        assert_eq!(loc.disqualified_by(&tokens, 1), Some("gerund-after-possessive"));
    }

    #[test]
    fn test_participle_guards() {
        let loc = locator();
        let tokens = vec![
            tok(0, "Man", "NOUN", "NN", "nsubj"),
            tok(1, "in", "ADP", "IN", "prep"),
            tok(2, "custody", "NOUN", "NN", "pobj"),
            tok(3, "charged", "VERB", "VBN", "ROOT"),
        ];
        assert_eq!(loc.disqualified_by(&tokens, 3), Some("participle-after-noun-preposition"));

        let tokens = vec![
            tok(0, "Losses", "NOUN", "NNS", "nsubj"),
            tok(1, "reported", "VERB", "VBN", "acl"),
        ];
        assert_eq!(loc.disqualified_by(&tokens, 1), Some("participle-noun-modifier"));

        let tokens = vec![
            tok(0, "Losses", "NOUN", "NNS", "nsubj"),
            tok(1, "reported", "VERB", "VBD", "ROOT"),
        ];
        assert_eq!(loc.disqualified_by(&tokens, 1), None);
    }

    #[test]
    fn test_rule_order_is_stable() {
        let names: Vec<&str> = locator().rules().iter().map(|r| r.name).collect();
        assert_eq!(names.first(), Some(&"never-verb"));
        assert_eq!(names.last(), Some(&"participle-reduced-relative"));
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn test_custom_rule() {
        fn no_says(w: &Window<'_>) -> bool {
            w.candidate().is("says")
        }
        let loc = locator().with_rule(Disqualifier { name: "no-says", applies: no_says });
        let annotator = lexicon_annotator();
        let tokens = annotator.annotate("Mayor says budget passes").unwrap();
        assert_eq!(loc.locate(&tokens, &annotator).map(|b| b.index), Some(3));
    }
}
