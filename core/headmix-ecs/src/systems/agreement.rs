use hecs::World;
use crate::components::{Morphology, Syntax, DependencyRole, TokenData};
use headmix_protocol::MorphFlags;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgreementKind {
    SubjectVerb,
    DeterminerNoun,
}

#[derive(Debug, Clone)]
pub struct AgreementError {
    pub kind: AgreementKind,
    pub source: String,
    pub target: String,
    pub details: String,
}

pub fn check_agreement(world: &World) -> Vec<AgreementError> {
    let mut errors = Vec::new();

    // 1. Subject-Verb Agreement
    errors.extend(check_role(world, DependencyRole::Subject, AgreementKind::SubjectVerb));

    // 2. Determiner-Noun Agreement
    errors.extend(check_role(world, DependencyRole::Modifier, AgreementKind::DeterminerNoun));

    errors
}

/// Compares the number of every dependent in `role` with the number of its head.
/// Tokens that show no number are never reported.
fn check_role(world: &World, role: DependencyRole, kind: AgreementKind) -> Vec<AgreementError> {
    let mut errors = Vec::new();

    for (_id, (dep_morph, syntax, dep_token)) in world.query::<(&Morphology, &Syntax, &TokenData)>().iter() {
        if syntax.role != role {
            continue;
        }

        // Note: In hecs, random access is O(1) via world.get
        let Ok(head_morph) = world.get::<&Morphology>(syntax.head) else {
            continue;
        };

        let dep_num = dep_morph.flags.intersection(MorphFlags::NUMBER);
        let head_num = head_morph.flags.intersection(MorphFlags::NUMBER);

        if !dep_num.is_empty() && !head_num.is_empty() && dep_num != head_num {
            let head_text = world.get::<&TokenData>(syntax.head)
                .map(|t| t.text.clone())
                .unwrap_or_else(|_| "Unknown".to_string());

            errors.push(AgreementError {
                kind: kind.clone(),
                source: dep_token.text.clone(),
                target: head_text,
                details: format!("Number mismatch: {:?} vs {:?}", dep_num, head_num),
            });
        }
    }
    errors
}
