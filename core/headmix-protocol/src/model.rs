use crate::ids::{HeadlineId, TokenId};
use crate::morphology::{DepRelation, MorphFlags, MorphTag, Number, PosClass, VerbTag};
use alloc::string::String;
use alloc::vec::Vec;

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One annotated word or punctuation mark.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Token {
    pub index: TokenId,
    pub text: String,
    pub pos: PosClass,
    pub tag: MorphTag,
    pub morph: MorphFlags,
    pub lemma: String,
    pub dep: DepRelation,
    /// Whether the source text had whitespace after this token.
    pub space_after: bool,
}

impl Token {
    pub fn new(
        index: u32,
        text: impl Into<String>,
        pos: PosClass,
        tag: MorphTag,
        lemma: impl Into<String>,
        dep: DepRelation,
    ) -> Self {
        Self {
            index: TokenId::new(index),
            text: text.into(),
            pos,
            tag,
            morph: tag.features(),
            lemma: lemma.into(),
            dep,
            space_after: true,
        }
    }

    /// Adds features the tag alone does not carry (e.g. pronoun number).
    pub fn with_morph(mut self, flags: MorphFlags) -> Self {
        self.morph |= flags;
        self
    }

    pub fn with_space_after(mut self, space_after: bool) -> Self {
        self.space_after = space_after;
        self
    }

    pub fn is(&self, word: &str) -> bool {
        self.text.eq_ignore_ascii_case(word)
    }

    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Rebuilds surface text from tokens, honouring the original spacing.
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        out.push_str(&token.text);
        if token.space_after && i + 1 < tokens.len() {
            out.push(' ');
        }
    }
    out
}

/// Where a headline came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Provenance {
    pub original_text: String,
    pub source: String,
    pub link: String,
}

/// A raw headline as delivered by a feed collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct HeadlineRecord {
    pub text: String,
    pub source: String,
    pub link: String,
}

impl HeadlineRecord {
    pub fn new(text: impl Into<String>, source: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            link: link.into(),
        }
    }
}

/// A headline split at its verb boundary.
///
/// The subject is never empty and the predicate always starts with the
/// boundary verb; `new` refuses any split that would break either rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeadline {
    id: HeadlineId,
    provenance: Provenance,
    subject: Vec<Token>,
    predicate: Vec<Token>,
    verb_tag: VerbTag,
    subject_number: Number,
}

impl ParsedHeadline {
    pub fn new(
        id: HeadlineId,
        provenance: Provenance,
        mut tokens: Vec<Token>,
        split: usize,
        verb_tag: VerbTag,
        subject_number: Number,
    ) -> Option<Self> {
        if split == 0 || split >= tokens.len() {
            return None;
        }
        let predicate = tokens.split_off(split);
        Some(Self {
            id,
            provenance,
            subject: tokens,
            predicate,
            verb_tag,
            subject_number,
        })
    }

    pub fn id(&self) -> HeadlineId {
        self.id
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn original_text(&self) -> &str {
        &self.provenance.original_text
    }

    pub fn subject(&self) -> &[Token] {
        &self.subject
    }

    pub fn predicate(&self) -> &[Token] {
        &self.predicate
    }

    pub fn verb(&self) -> &Token {
        &self.predicate[0]
    }

    /// Predicate tokens after the verb.
    pub fn predicate_tail(&self) -> &[Token] {
        &self.predicate[1..]
    }

    pub fn verb_lemma(&self) -> &str {
        &self.verb().lemma
    }

    pub fn verb_tag(&self) -> VerbTag {
        self.verb_tag
    }

    pub fn subject_number(&self) -> Number {
        self.subject_number
    }

    pub fn subject_text(&self) -> String {
        render(&self.subject)
    }
}

bitflags! {
    /// Quality signals attached to a generated sentence.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct DiagnosticFlags: u8 {
        /// No inflection rule applied; the verb was copied unchanged.
        const SYNTHESIS_FALLBACK = 1;
        /// The new sentence fails a number agreement check: the subject
        /// against the synthesized verb, or a subject determiner against its
        /// head noun.
        const NUMBER_MISMATCH = 2;
    }
}

/// A recombined sentence and the two headlines it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Combination {
    pub headline_text: String,
    pub subject: Provenance,
    pub predicate: Provenance,
    pub diagnostics: DiagnosticFlags,
}

impl Combination {
    pub fn is_low_confidence(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
