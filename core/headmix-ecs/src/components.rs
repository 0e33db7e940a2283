use hecs::Entity;
use headmix_protocol::MorphFlags;

/// Surface data about the token (Source of Truth)
#[derive(Debug, Clone)]
pub struct TokenData {
    pub text: String,
    pub lemma: String,
}

/// Grammatical state (Bitflags wrapper)
/// Wrapped in a struct so it can be a distinct Component in hecs
#[derive(Debug, Clone, Copy)]
pub struct Morphology {
    pub flags: MorphFlags,
}

impl Morphology {
    pub fn new(flags: MorphFlags) -> Self {
        Self { flags }
    }
}

/// The syntactic role of a word relative to its head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyRole {
    Subject,
    Modifier,
}

/// The dependency edge from a token to its head
#[derive(Debug, Clone, Copy)]
pub struct Syntax {
    pub head: Entity,
    pub role: DependencyRole,
}
