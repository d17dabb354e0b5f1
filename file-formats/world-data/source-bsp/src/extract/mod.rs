//! Asset references derived from entity key/values
//!
//! Every extractor walks the first-wins view of each entity, except the
//! screen overlay scan which looks at every raw pair.

use crate::entity::Entity;
use crate::{Error, Result};

pub mod materials;
pub mod models;
pub mod particles;
pub mod sounds;

pub use materials::entity_textures;
pub use models::entity_models;
pub use particles::particles;
pub use sounds::entity_sounds;

/// Classname of the entity at `index`, which every entity must carry
pub(crate) fn require_classname(entity: &Entity, index: usize) -> Result<&str> {
    entity
        .classname()
        .ok_or(Error::MissingClassname { entity: index })
}
