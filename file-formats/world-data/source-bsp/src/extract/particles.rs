//! Particle systems referenced by entities

use crate::entity::Entity;

/// Every `effect_name` value, in entity order
pub fn particles(entities: &[Entity]) -> Vec<String> {
    entities
        .iter()
        .flat_map(Entity::unique_pairs)
        .filter(|(key, _)| key.eq_ignore_ascii_case("effect_name"))
        .map(|(_, value)| value.to_string())
        .collect()
}
