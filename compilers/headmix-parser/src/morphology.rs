//! Lexicon-only word analysis: part of speech, fine tag and lemma for a
//! single word, without a statistical model.

use std::collections::HashSet;

use headmix_morph::{strip_third_singular, IrregularTable};
use headmix_protocol::{Lexicon, MorphFlags, MorphTag, PosClass, VerbTag};

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "amid", "among", "around", "as", "at",
    "before", "behind", "below", "beside", "between", "beyond", "by", "despite", "during", "for",
    "from", "in", "inside", "into", "near", "of", "off", "on", "onto", "out", "over", "past",
    "since", "than", "through", "toward", "towards", "under", "until", "upon", "via", "with",
    "within", "without",
];

// (word, number) where the determiner shows one.
const DETERMINERS: &[(&str, Option<bool>)] = &[
    ("the", None), ("a", Some(false)), ("an", Some(false)), ("this", Some(false)),
    ("that", Some(false)), ("these", Some(true)), ("those", Some(true)), ("each", Some(false)),
    ("every", Some(false)), ("another", Some(false)), ("no", None), ("any", None),
    ("some", None), ("all", None), ("both", Some(true)), ("many", Some(true)),
    ("several", Some(true)), ("few", Some(true)), ("most", None),
];

const POSSESSIVE_DETERMINERS: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

const PRONOUNS: &[(&str, Option<bool>)] = &[
    ("i", Some(false)), ("you", None), ("he", Some(false)), ("she", Some(false)),
    ("it", Some(false)), ("we", Some(true)), ("they", Some(true)), ("me", Some(false)),
    ("him", Some(false)), ("us", Some(true)), ("them", Some(true)), ("someone", Some(false)),
    ("everyone", Some(false)), ("nobody", Some(false)), ("anyone", Some(false)),
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "while", "because", "if", "although"];

const WH_PRONOUNS: &[&str] = &["who", "what", "which", "whose", "whom"];
const WH_ADVERBS: &[&str] = &["where", "when", "why", "how"];

const MODALS: &[&str] = &["will", "can", "may", "must", "shall", "would", "could", "might", "should"];

// Irregular forms the verb table does not list, with their lemma.
const IRREGULAR_FORMS: &[(&str, &str, MorphTag)] = &[
    ("been", "be", MorphTag::PastParticiple),
    ("being", "be", MorphTag::Gerund),
    ("done", "do", MorphTag::PastParticiple),
    ("gone", "go", MorphTag::PastParticiple),
    ("taken", "take", MorphTag::PastParticiple),
    ("given", "give", MorphTag::PastParticiple),
    ("shown", "show", MorphTag::PastParticiple),
    ("broken", "break", MorphTag::PastParticiple),
    ("begun", "begin", MorphTag::PastParticiple),
    ("fallen", "fall", MorphTag::PastParticiple),
    ("risen", "rise", MorphTag::PastParticiple),
    ("known", "know", MorphTag::PastParticiple),
    ("seen", "see", MorphTag::PastParticiple),
    ("chosen", "choose", MorphTag::PastParticiple),
    ("beaten", "beat", MorphTag::PastParticiple),
    ("grown", "grow", MorphTag::PastParticiple),
    ("fled", "flee", MorphTag::Past),
    ("flees", "flee", MorphTag::Present3Sg),
    ("tied", "tie", MorphTag::PastParticiple),
    ("tying", "tie", MorphTag::Gerund),
    ("dying", "die", MorphTag::Gerund),
];

const ADVERBS: &[&str] = &["not", "never", "also", "now", "still", "just", "again", "soon", "finally", "already"];

const ADJECTIVES: &[&str] = &[
    "new", "old", "former", "top", "big", "young", "local", "senior", "major", "key", "first",
    "last", "next", "global", "national", "federal", "public", "private", "rare", "huge", "hesitant",
    "british", "american", "chinese", "european",
];

/// What the lexicon can tell about one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordAnalysis {
    pub pos: PosClass,
    pub tag: MorphTag,
    pub lemma: String,
    /// Features beyond those implied by `tag` (pronoun and determiner number).
    pub extra: MorphFlags,
}

impl WordAnalysis {
    fn new(pos: PosClass, tag: MorphTag, lemma: impl Into<String>) -> Self {
        Self { pos, tag, lemma: lemma.into(), extra: MorphFlags::empty() }
    }

    fn with_number(mut self, plural: Option<bool>) -> Self {
        self.extra = match plural {
            Some(true) => MorphFlags::PLURAL,
            Some(false) => MorphFlags::SINGULAR,
            None => MorphFlags::empty(),
        };
        self
    }
}

fn lookup<T: Copy>(table: &[(&str, T)], word: &str) -> Option<T> {
    table.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().map_or(false, char::is_uppercase)
}

/// Word-level analysis backed by the lexicon's verb lists.
#[derive(Debug, Clone)]
pub struct WordAnalyzer {
    irregular: IrregularTable,
    common_verbs: HashSet<String>,
    never_verbs: HashSet<String>,
    skip_words: HashSet<String>,
}

impl WordAnalyzer {
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        let set = |words: &[String]| words.iter().map(|w| w.to_lowercase()).collect::<HashSet<_>>();
        Self {
            irregular: IrregularTable::from_lexicon(lexicon),
            common_verbs: set(&lexicon.common_verbs),
            never_verbs: set(&lexicon.never_verbs),
            skip_words: set(&lexicon.skip_words),
        }
    }

    /// Lexical evidence that `word` can be a verb: a known form, or a
    /// regular "-ed"/"-ing" ending on a word long enough to carry one.
    /// Function words never qualify.
    pub fn verb_evidence(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        if self.skip_words.contains(&lower) {
            return false;
        }
        if self.common_verbs.contains(&lower) || self.irregular.analyze(&lower).is_some() {
            return true;
        }
        lower.chars().count() >= 5 && (lower.ends_with("ed") || lower.ends_with("ing"))
    }

    /// Analyses one word. `position` is its index in the headline and
    /// `title_case` says whether capitals carry no information.
    pub fn analyze(&self, word: &str, position: usize, title_case: bool) -> WordAnalysis {
        let lower = word.to_lowercase();

        if word.chars().any(|c| c.is_ascii_digit()) {
            return WordAnalysis::new(PosClass::Numeral, MorphTag::Cardinal, lower);
        }
        if let Some(plural) = lookup(DETERMINERS, &lower) {
            return WordAnalysis::new(PosClass::Determiner, MorphTag::Determiner, lower).with_number(plural);
        }
        if POSSESSIVE_DETERMINERS.contains(&lower.as_str()) {
            return WordAnalysis::new(PosClass::Pronoun, MorphTag::PossessivePronoun, lower);
        }
        if let Some(plural) = lookup(PRONOUNS, &lower) {
            return WordAnalysis::new(PosClass::Pronoun, MorphTag::Pronoun, lower).with_number(plural);
        }
        if lower == "to" {
            return WordAnalysis::new(PosClass::Particle, MorphTag::InfinitiveTo, lower);
        }
        if PREPOSITIONS.contains(&lower.as_str()) {
            return WordAnalysis::new(PosClass::Adposition, MorphTag::Preposition, lower);
        }
        if CONJUNCTIONS.contains(&lower.as_str()) {
            return WordAnalysis::new(PosClass::Conjunction, MorphTag::Conjunction, lower);
        }
        if WH_PRONOUNS.contains(&lower.as_str()) {
            return WordAnalysis::new(PosClass::Pronoun, MorphTag::WhWord, lower);
        }
        if WH_ADVERBS.contains(&lower.as_str()) {
            return WordAnalysis::new(PosClass::Adverb, MorphTag::WhWord, lower);
        }
        if ADVERBS.contains(&lower.as_str()) {
            return WordAnalysis::new(PosClass::Adverb, MorphTag::Adverb, lower);
        }
        if ADJECTIVES.contains(&lower.as_str()) {
            return WordAnalysis::new(PosClass::Adjective, MorphTag::Adjective, lower);
        }
        // "Boeing", "Beijing": a capital and no known verb under the suffix.
        if !title_case && is_capitalized(word) && self.has_unknown_verb_stem(&lower) {
            return WordAnalysis::new(PosClass::ProperNoun, MorphTag::ProperNoun, word);
        }
        if let Some(analysis) = self.analyze_verb(&lower) {
            return analysis;
        }

        // Names are taken as singular: "Texas", "Reuters".
        if position > 0 && !title_case && is_capitalized(word) {
            return WordAnalysis::new(PosClass::ProperNoun, MorphTag::ProperNoun, word);
        }
        if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
            return WordAnalysis::new(PosClass::Noun, MorphTag::NounPlural, lower);
        }
        WordAnalysis::new(PosClass::Noun, MorphTag::Noun, lower)
    }

    fn analyze_verb(&self, lower: &str) -> Option<WordAnalysis> {
        if self.never_verbs.contains(lower) {
            return None;
        }
        if let Some((_, lemma, tag)) = IRREGULAR_FORMS.iter().find(|(form, _, _)| *form == lower) {
            let pos = if *lemma == "be" { PosClass::Auxiliary } else { PosClass::Verb };
            return Some(WordAnalysis::new(pos, *tag, *lemma));
        }
        if let Some((entry, tag)) = self.irregular.analyze(lower) {
            let (pos, tag) = if MODALS.contains(&entry.lemma.as_str()) {
                (PosClass::Auxiliary, MorphTag::Modal)
            } else if matches!(entry.lemma.as_str(), "be" | "have" | "do") {
                (PosClass::Auxiliary, verb_morph(tag))
            } else {
                (PosClass::Verb, verb_morph(tag))
            };
            return Some(WordAnalysis::new(pos, tag, entry.lemma.clone()));
        }
        if !self.verb_evidence(lower) {
            return None;
        }

        let (tag, lemma) = if let Some(stem) = lower.strip_suffix("ing") {
            (MorphTag::Gerund, self.restore_stem(stem))
        } else if let Some(stem) = lower.strip_suffix("ied") {
            (MorphTag::PastParticiple, format!("{}y", stem))
        } else if let Some(stem) = lower.strip_suffix("ed") {
            // Regular "-ed" is ambiguous between past and participle; the
            // participle reading keeps the reduced-relative guards in force.
            (MorphTag::PastParticiple, self.restore_stem(stem))
        } else if lower.ends_with('s') && !lower.ends_with("ss") {
            (MorphTag::Present3Sg, strip_third_singular(lower))
        } else {
            (MorphTag::PresentNon3Sg, lower.to_string())
        };
        Some(WordAnalysis::new(PosClass::Verb, tag, lemma))
    }

    /// An "-ing"/"-ed" word whose stem is neither a listed verb nor an
    /// irregular lemma.
    fn has_unknown_verb_stem(&self, lower: &str) -> bool {
        let known_form = self.common_verbs.contains(lower)
            || self.irregular.analyze(lower).is_some()
            || IRREGULAR_FORMS.iter().any(|(form, _, _)| *form == lower);
        if known_form {
            return false;
        }
        let lemma = if let Some(stem) = lower.strip_suffix("ing") {
            self.restore_stem(stem)
        } else if let Some(stem) = lower.strip_suffix("ied") {
            format!("{}y", stem)
        } else if let Some(stem) = lower.strip_suffix("ed") {
            self.restore_stem(stem)
        } else {
            return false;
        };
        !self.common_verbs.contains(&lemma) && self.irregular.get(&lemma).is_none()
    }

    /// Recovers a base form from a stem left by "-ed"/"-ing":
    /// "discover" stays, "decid" -> "decide", "plann" -> "plan".
    fn restore_stem(&self, stem: &str) -> String {
        if self.common_verbs.contains(stem) {
            return stem.to_string();
        }
        let with_e = format!("{}e", stem);
        if self.common_verbs.contains(&with_e) {
            return with_e;
        }
        let mut chars = stem.chars().rev();
        if let (Some(a), Some(b)) = (chars.next(), chars.next()) {
            if a == b && !matches!(a, 'l' | 's' | 'e' | 'o') {
                return stem[..stem.len() - a.len_utf8()].to_string();
            }
        }
        stem.to_string()
    }

    pub fn irregular(&self) -> &IrregularTable {
        &self.irregular
    }
}

fn verb_morph(tag: VerbTag) -> MorphTag {
    match tag {
        VerbTag::Base => MorphTag::Base,
        VerbTag::Past => MorphTag::Past,
        VerbTag::PastParticiple => MorphTag::PastParticiple,
        VerbTag::Gerund => MorphTag::Gerund,
        VerbTag::Present3Sg => MorphTag::Present3Sg,
        VerbTag::PresentNon3Sg => MorphTag::PresentNon3Sg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> WordAnalyzer {
        WordAnalyzer::from_lexicon(&Lexicon::english())
    }

    #[test]
    fn test_closed_classes() {
        let a = analyzer();
        assert_eq!(a.analyze("The", 0, false).pos, PosClass::Determiner);
        assert_eq!(a.analyze("with", 3, false).tag, MorphTag::Preposition);
        assert_eq!(a.analyze("their", 3, false).tag, MorphTag::PossessivePronoun);
        assert_eq!(a.analyze("to", 3, false).tag, MorphTag::InfinitiveTo);

        let they = a.analyze("They", 0, false);
        assert_eq!(they.pos, PosClass::Pronoun);
        assert_eq!(they.extra, MorphFlags::PLURAL);
    }

    #[test]
    fn test_verbs() {
        let a = analyzer();
        let resign = a.analyze("resign", 4, false);
        assert_eq!((resign.pos, resign.tag, resign.lemma.as_str()), (PosClass::Verb, MorphTag::PresentNon3Sg, "resign"));

        let charged = a.analyze("charged", 1, false);
        assert_eq!((charged.tag, charged.lemma.as_str()), (MorphTag::PastParticiple, "charge"));

        let were = a.analyze("were", 1, false);
        assert_eq!((were.pos, were.tag, were.lemma.as_str()), (PosClass::Auxiliary, MorphTag::Past, "be"));

        let will = a.analyze("will", 1, false);
        assert_eq!((will.pos, will.tag), (PosClass::Auxiliary, MorphTag::Modal));

        let discovers = a.analyze("discovers", 1, false);
        assert_eq!((discovers.tag, discovers.lemma.as_str()), (MorphTag::Present3Sg, "discover"));

        assert_eq!(a.analyze("planning", 1, false).lemma, "plan");
        assert_eq!(a.analyze("deciding", 1, false).lemma, "decide");
        assert_eq!(a.analyze("been", 2, false).tag, MorphTag::PastParticiple);

        let could = a.analyze("could", 1, false);
        assert_eq!((could.pos, could.tag, could.lemma.as_str()), (PosClass::Auxiliary, MorphTag::Modal, "could"));
        assert_eq!(a.analyze("Should", 0, false).lemma, "should");
    }

    #[test]
    fn test_capitalised_suffix_names() {
        let a = analyzer();
        assert_eq!(a.analyze("Boeing", 0, false).tag, MorphTag::ProperNoun);
        assert_eq!(a.analyze("Beijing", 2, false).tag, MorphTag::ProperNoun);
        assert_eq!(a.analyze("Building", 0, false).tag, MorphTag::Gerund);
        assert_eq!(a.analyze("Planning", 0, false).tag, MorphTag::Gerund);
        assert_eq!(a.analyze("boeing", 1, false).tag, MorphTag::Gerund);
    }

    #[test]
    fn test_never_verb_is_a_noun() {
        let a = analyzer();
        let report = a.analyze("report", 1, false);
        assert_eq!((report.pos, report.tag), (PosClass::Noun, MorphTag::Noun));
        assert!(a.verb_evidence("report"));
    }

    #[test]
    fn test_nouns() {
        let a = analyzer();
        assert_eq!(a.analyze("losses", 3, false).tag, MorphTag::NounPlural);
        assert_eq!(a.analyze("species", 3, false).tag, MorphTag::NounPlural);
        assert_eq!(a.analyze("boss", 3, false).tag, MorphTag::Noun);
        assert_eq!(a.analyze("Texas", 2, false).tag, MorphTag::ProperNoun);
        assert_eq!(a.analyze("Officials", 2, true).tag, MorphTag::NounPlural);
        assert_eq!(a.analyze("Mayor", 0, false).tag, MorphTag::Noun);
    }

    #[test]
    fn test_verb_evidence() {
        let a = analyzer();
        assert!(a.verb_evidence("discover"));
        assert!(a.verb_evidence("Jumped"));
        assert!(!a.verb_evidence("red"));
        assert!(!a.verb_evidence("the"));
        assert!(!a.verb_evidence("species"));
    }
}
