pub mod components;
pub mod systems;

use hecs::{World, Entity};
use components::{TokenData, Morphology, Syntax, DependencyRole};
use headmix_protocol::MorphFlags;
use systems::agreement::{check_agreement, AgreementError};

/// A sentence as a set of token entities linked by dependency edges.
pub struct AgreementWorld {
    world: World,
}

impl Default for AgreementWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl AgreementWorld {
    pub fn new() -> Self {
        Self { world: World::new() }
    }

    /// Expose the inner hecs World for external systems
    pub fn inner(&self) -> &World {
        &self.world
    }

    /// Add a word to the sentence
    pub fn add_token(&mut self, text: impl Into<String>, lemma: impl Into<String>, flags: MorphFlags) -> Entity {
        self.world.spawn((
            TokenData { text: text.into(), lemma: lemma.into() },
            Morphology::new(flags),
        ))
    }

    /// Link `child` to its syntactic head
    pub fn set_dependency(&mut self, child: Entity, head: Entity, role: DependencyRole) {
        // insert_one only fails for despawned entities, which this world never has
        let _ = self.world.insert_one(child, Syntax { head, role });
    }

    /// Run all validation systems
    pub fn validate(&self) -> Vec<AgreementError> {
        check_agreement(&self.world)
    }
}
