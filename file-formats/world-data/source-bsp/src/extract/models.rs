//! Models referenced by entities

use super::require_classname;
use crate::Result;
use crate::entity::Entity;
use crate::vocabulary::KeyVocabulary;

/// Model spawned by `item_sodacan` and `env_beverage`
pub const SODA_CAN_MODEL: &str = "models/can.mdl";

/// Model used by `tf_projectile_throwable`
pub const THROWABLE_MODEL: &str = "models/props_gameplay/small_loaf.mdl";

/// Build the entity model list
pub fn entity_models(entities: &[Entity], vocabulary: &KeyVocabulary) -> Result<Vec<String>> {
    let mut models = Vec::new();

    for (index, entity) in entities.iter().enumerate() {
        if entity.is_empty() {
            continue;
        }
        let classname = require_classname(entity, index)?;

        for (key, value) in entity.unique_pairs() {
            if classname.starts_with("func") {
                // Brush entities reference their own geometry
                if key == "gibmodel" {
                    models.push(value.to_string());
                }
            } else if !classname.starts_with("trigger") && !classname.contains("sprite") {
                if vocabulary.is_model_key(key) {
                    models.push(value.to_string());
                } else if value == "item_sodacan" || value == "env_beverage" {
                    models.push(SODA_CAN_MODEL.to_string());
                } else if value == "tf_projectile_throwable" {
                    models.push(THROWABLE_MODEL.to_string());
                }
            }
        }
    }

    log::debug!("{} entity models", models.len());
    Ok(models)
}
