#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod rules;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use headmix_protocol::{IrregularEntry, Lexicon, Number, Tense, VerbTag};

pub use rules::{is_inflectable, match_case, regular_past, strip_third_singular, third_singular};

/// Irregular verb forms keyed by lowercase lemma.
#[derive(Debug, Clone, Default)]
pub struct IrregularTable {
    entries: BTreeMap<String, IrregularEntry>,
}

impl IrregularTable {
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        let entries = lexicon
            .irregular_verbs
            .iter()
            .map(|e| (e.lemma.to_lowercase(), e.clone()))
            .collect();
        Self { entries }
    }

    pub fn get(&self, lemma: &str) -> Option<&IrregularEntry> {
        self.entries.get(lemma)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reverse lookup: which lemma and tag does a surface form belong to?
    /// "has" -> (have, Present3Sg), "were" -> (be, Past).
    ///
    /// A surface that is itself a lemma resolves to that entry first, so
    /// "could" stays "could" rather than the past of "can".
    pub fn analyze(&self, surface: &str) -> Option<(&IrregularEntry, VerbTag)> {
        let lower = surface.to_lowercase();
        if let Some(entry) = self.entries.get(&lower) {
            return Some((entry, VerbTag::Base));
        }
        for entry in self.entries.values() {
            if lower == entry.singular && entry.singular != entry.plural {
                return Some((entry, VerbTag::Present3Sg));
            }
            let is_past = lower == entry.past || entry.past_plural.as_deref() == Some(lower.as_str());
            if is_past && lower != entry.lemma {
                return Some((entry, VerbTag::Past));
            }
            if lower == entry.plural {
                let tag = if lower == entry.lemma { VerbTag::Base } else { VerbTag::PresentNon3Sg };
                return Some((entry, tag));
            }
            if lower == entry.lemma {
                return Some((entry, VerbTag::Base));
            }
        }
        None
    }
}

/// The verb being re-inflected, as it appeared in its source headline.
#[derive(Debug, Clone, Copy)]
pub struct VerbForm<'a> {
    pub surface: &'a str,
    pub lemma: &'a str,
    pub tag: VerbTag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjugation {
    pub form: String,
    /// No rule applied and `form` is the untouched source surface.
    pub fallback: bool,
}

impl Conjugation {
    fn kept(surface: &str) -> Self {
        Self { form: surface.to_string(), fallback: false }
    }

    fn fallback(surface: &str) -> Self {
        Self { form: surface.to_string(), fallback: true }
    }

    fn synthesized(surface: &str, form: &str) -> Self {
        Self { form: match_case(surface, form), fallback: false }
    }
}

/// Produces inflected verb forms for a target tense and number.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    irregular: IrregularTable,
}

impl Synthesizer {
    pub fn new(irregular: IrregularTable) -> Self {
        Self { irregular }
    }

    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        Self::new(IrregularTable::from_lexicon(lexicon))
    }

    pub fn irregular(&self) -> &IrregularTable {
        &self.irregular
    }

    /// Inflects `verb` for a subject of the given number, in the tense the
    /// `reference` tag implies.
    ///
    /// Gerunds are never re-inflected, and a verb already in the past keeps
    /// its regular past form (English past has no number distinction).
    pub fn conjugate(&self, verb: &VerbForm<'_>, reference: VerbTag, plural: bool) -> Conjugation {
        let tense = reference.tense();
        if verb.tag == VerbTag::Gerund || tense == Tense::Gerund {
            return Conjugation::kept(verb.surface);
        }

        let lemma = verb.lemma.to_lowercase();
        if let Some(entry) = self.irregular.get(&lemma) {
            let form = match tense {
                Tense::Past if plural => entry.past_plural.as_deref().unwrap_or(&entry.past),
                Tense::Past => entry.past.as_str(),
                Tense::Present if plural => entry.plural.as_str(),
                Tense::Present => entry.singular.as_str(),
                Tense::Gerund => verb.surface,
            };
            return Conjugation::synthesized(verb.surface, form);
        }

        if !is_inflectable(&lemma) {
            return Conjugation::fallback(verb.surface);
        }

        let already_past = matches!(verb.tag, VerbTag::Past | VerbTag::PastParticiple);
        let form = match tense {
            Tense::Past if already_past => return Conjugation::kept(verb.surface),
            Tense::Past => regular_past(&lemma),
            Tense::Present if plural => match verb.tag {
                VerbTag::Present3Sg => strip_third_singular(&verb.surface.to_lowercase()),
                _ => lemma.clone(),
            },
            Tense::Present => match verb.tag {
                VerbTag::Present3Sg => return Conjugation::kept(verb.surface),
                _ => third_singular(&lemma),
            },
            Tense::Gerund => return Conjugation::kept(verb.surface),
        };
        Conjugation::synthesized(verb.surface, &form)
    }

    /// The number a finite verb form agrees with, if it shows one.
    pub fn number_of(&self, lemma: &str, form: &str) -> Option<Number> {
        let lemma = lemma.to_lowercase();
        let form = form.to_lowercase();

        if let Some(entry) = self.irregular.get(&lemma) {
            if entry.singular != entry.plural {
                if form == entry.singular {
                    return Some(Number::Singular);
                }
                if form == entry.plural {
                    return Some(Number::Plural);
                }
            }
            return match entry.past_plural.as_deref() {
                Some(pp) if form == pp => Some(Number::Plural),
                Some(_) if form == entry.past => Some(Number::Singular),
                _ => None,
            };
        }

        if !is_inflectable(&lemma) {
            return None;
        }
        if form == lemma {
            Some(Number::Plural)
        } else if form == third_singular(&lemma) {
            Some(Number::Singular)
        } else {
            None
        }
    }
}
