#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Coarse part-of-speech class (Universal Dependencies style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum PosClass {
    Noun = 0,
    ProperNoun = 1,
    Pronoun = 2,
    Verb = 3,
    Auxiliary = 4,
    Adjective = 5,
    Adverb = 6,
    Determiner = 7,
    Adposition = 8,
    Conjunction = 9,
    Particle = 10,
    Numeral = 11,
    Punctuation = 12,
    Other = 13,
}

impl PosClass {
    /// Parses a UD coarse tag (`NOUN`, `PROPN`, `AUX`, ...).
    pub fn from_label(label: &str) -> Self {
        match label {
            "NOUN" => PosClass::Noun,
            "PROPN" => PosClass::ProperNoun,
            "PRON" => PosClass::Pronoun,
            "VERB" => PosClass::Verb,
            "AUX" => PosClass::Auxiliary,
            "ADJ" => PosClass::Adjective,
            "ADV" => PosClass::Adverb,
            "DET" => PosClass::Determiner,
            "ADP" => PosClass::Adposition,
            "CCONJ" | "CONJ" | "SCONJ" => PosClass::Conjunction,
            "PART" => PosClass::Particle,
            "NUM" => PosClass::Numeral,
            "PUNCT" => PosClass::Punctuation,
            _ => PosClass::Other,
        }
    }

    /// Nouns, proper nouns and pronouns: the tokens that carry a subject's number.
    pub fn is_nominal(self) -> bool {
        matches!(self, PosClass::Noun | PosClass::ProperNoun | PosClass::Pronoun)
    }
}

/// Fine-grained morphological tag (Penn Treebank inventory, collapsed where
/// the engine makes no distinction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum MorphTag {
    Base = 0,
    Past = 1,
    Gerund = 2,
    PastParticiple = 3,
    Present3Sg = 4,
    PresentNon3Sg = 5,
    Modal = 6,
    Noun = 7,
    NounPlural = 8,
    ProperNoun = 9,
    ProperNounPlural = 10,
    Pronoun = 11,
    PossessivePronoun = 12,
    PossessiveMarker = 13,
    Determiner = 14,
    Adjective = 15,
    Preposition = 16,
    Conjunction = 17,
    InfinitiveTo = 18,
    WhWord = 19,
    Cardinal = 20,
    Adverb = 21,
    Punctuation = 22,
    Other = 23,
}

impl MorphTag {
    /// Parses a Penn Treebank tag (`VBZ`, `NNS`, `PRP$`, ...).
    pub fn from_penn(tag: &str) -> Self {
        match tag {
            "VB" => MorphTag::Base,
            "VBD" => MorphTag::Past,
            "VBG" => MorphTag::Gerund,
            "VBN" => MorphTag::PastParticiple,
            "VBZ" => MorphTag::Present3Sg,
            "VBP" => MorphTag::PresentNon3Sg,
            "MD" => MorphTag::Modal,
            "NN" => MorphTag::Noun,
            "NNS" => MorphTag::NounPlural,
            "NNP" => MorphTag::ProperNoun,
            "NNPS" => MorphTag::ProperNounPlural,
            "PRP" => MorphTag::Pronoun,
            "PRP$" => MorphTag::PossessivePronoun,
            "POS" => MorphTag::PossessiveMarker,
            "DT" | "PDT" => MorphTag::Determiner,
            "JJ" | "JJR" | "JJS" => MorphTag::Adjective,
            "IN" => MorphTag::Preposition,
            "CC" => MorphTag::Conjunction,
            "TO" => MorphTag::InfinitiveTo,
            "WDT" | "WP" | "WP$" | "WRB" => MorphTag::WhWord,
            "CD" => MorphTag::Cardinal,
            "RB" | "RBR" | "RBS" | "RP" => MorphTag::Adverb,
            "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "HYPH" | "NFP" => MorphTag::Punctuation,
            _ => MorphTag::Other,
        }
    }

    /// Morphological features implied by the tag alone.
    pub fn features(self) -> MorphFlags {
        match self {
            MorphTag::Base => MorphFlags::BASE,
            MorphTag::Past => MorphFlags::PAST,
            MorphTag::Gerund => MorphFlags::GERUND,
            MorphTag::PastParticiple => MorphFlags::PAST | MorphFlags::PARTICIPLE,
            MorphTag::Present3Sg => MorphFlags::PRESENT | MorphFlags::THIRD_PERSON | MorphFlags::SINGULAR,
            MorphTag::PresentNon3Sg => MorphFlags::PRESENT,
            MorphTag::Noun => MorphFlags::SINGULAR,
            MorphTag::NounPlural => MorphFlags::PLURAL,
            MorphTag::ProperNoun => MorphFlags::SINGULAR | MorphFlags::PROPER,
            MorphTag::ProperNounPlural => MorphFlags::PLURAL | MorphFlags::PROPER,
            MorphTag::PossessivePronoun | MorphTag::PossessiveMarker => MorphFlags::POSSESSIVE,
            _ => MorphFlags::empty(),
        }
    }
}

/// Dependency relation of a token to its governor (ClearNLP labels as
/// emitted by common English pipelines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum DepRelation {
    Root = 0,
    NominalSubject = 1,
    PassiveSubject = 2,
    DirectObject = 3,
    PrepObject = 4,
    PrepComplement = 5,
    Attribute = 6,
    AdjectivalModifier = 7,
    AdjectivalClause = 8,
    RelativeClause = 9,
    Auxiliary = 10,
    Other = 11,
    /// The annotator produced no parse (lexicon-only annotation).
    Unknown = 12,
}

impl DepRelation {
    pub fn from_label(label: &str) -> Self {
        match label {
            "ROOT" | "root" => DepRelation::Root,
            "nsubj" | "csubj" => DepRelation::NominalSubject,
            "nsubjpass" | "csubjpass" => DepRelation::PassiveSubject,
            "dobj" | "obj" => DepRelation::DirectObject,
            "pobj" => DepRelation::PrepObject,
            "pcomp" => DepRelation::PrepComplement,
            "attr" | "acomp" | "oprd" => DepRelation::Attribute,
            "amod" => DepRelation::AdjectivalModifier,
            "acl" => DepRelation::AdjectivalClause,
            "relcl" => DepRelation::RelativeClause,
            "aux" | "auxpass" => DepRelation::Auxiliary,
            "" => DepRelation::Unknown,
            _ => DepRelation::Other,
        }
    }

    /// Object of a preposition, subject, object or predicate complement.
    pub fn is_nominal_argument(self) -> bool {
        matches!(
            self,
            DepRelation::PrepObject
                | DepRelation::PrepComplement
                | DepRelation::NominalSubject
                | DepRelation::PassiveSubject
                | DepRelation::DirectObject
                | DepRelation::Attribute
        )
    }

    /// Adjectival or clausal modification of a noun.
    pub fn is_noun_modifier(self) -> bool {
        matches!(
            self,
            DepRelation::AdjectivalModifier | DepRelation::AdjectivalClause | DepRelation::RelativeClause
        )
    }
}

/// The inflection of the verb at a headline's split point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum VerbTag {
    Base = 0,
    Past = 1,
    PastParticiple = 2,
    Gerund = 3,
    Present3Sg = 4,
    PresentNon3Sg = 5,
}

impl VerbTag {
    pub fn from_morph(tag: MorphTag) -> Option<Self> {
        match tag {
            MorphTag::Base => Some(VerbTag::Base),
            MorphTag::Past => Some(VerbTag::Past),
            MorphTag::PastParticiple => Some(VerbTag::PastParticiple),
            MorphTag::Gerund => Some(VerbTag::Gerund),
            MorphTag::Present3Sg => Some(VerbTag::Present3Sg),
            MorphTag::PresentNon3Sg => Some(VerbTag::PresentNon3Sg),
            // Modals inflect like present-tense auxiliaries.
            MorphTag::Modal => Some(VerbTag::PresentNon3Sg),
            _ => None,
        }
    }

    /// The tense a verb with this tag imposes when used as a reference.
    pub fn tense(self) -> Tense {
        match self {
            VerbTag::Past | VerbTag::PastParticiple => Tense::Past,
            VerbTag::Gerund => Tense::Gerund,
            VerbTag::Base | VerbTag::Present3Sg | VerbTag::PresentNon3Sg => Tense::Present,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum Tense {
    Present = 0,
    Past = 1,
    Gerund = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum Number {
    Singular = 0,
    Plural = 1,
}

impl Number {
    pub fn from_plural(plural: bool) -> Self {
        if plural {
            Number::Plural
        } else {
            Number::Singular
        }
    }

    pub fn flags(self) -> MorphFlags {
        match self {
            Number::Singular => MorphFlags::SINGULAR,
            Number::Plural => MorphFlags::PLURAL,
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct MorphFlags: u32 {
        // Number (Bits 0-1)
        const SINGULAR = 1;
        const PLURAL = 2;

        // Person (Bit 2)
        const THIRD_PERSON = 4;

        // Verb form (Bits 3-7)
        const BASE = 8;
        const PRESENT = 16;
        const PAST = 32;
        const PARTICIPLE = 64;
        const GERUND = 128;

        // Nominal (Bits 8-9)
        const POSSESSIVE = 256;
        const PROPER = 512;
    }
}

impl MorphFlags {
    pub const NUMBER: MorphFlags = MorphFlags::SINGULAR.union(MorphFlags::PLURAL);

    /// The grammatical number carried by these flags, if exactly one is set.
    pub fn number(self) -> Option<Number> {
        match self.intersection(MorphFlags::NUMBER) {
            f if f == MorphFlags::SINGULAR => Some(Number::Singular),
            f if f == MorphFlags::PLURAL => Some(Number::Plural),
            _ => None,
        }
    }
}
