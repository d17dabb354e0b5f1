//! Entity key vocabularies
//!
//! Which entity keys name sounds, models or materials differs between games,
//! so the tables are supplied by the integration. They start out empty.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key tables used to classify entity key/value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeyVocabulary {
    /// Keys whose value is a sound path, matched against the lowercased key
    pub sound_keys: HashSet<String>,
    /// Keys whose value is a model path, matched exactly
    pub model_keys: HashSet<String>,
    /// Keys whose value is a material path, matched against the lowercased key
    pub material_keys: HashSet<String>,
}

impl KeyVocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Add sound keys
    pub fn with_sound_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sound_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Add model keys
    pub fn with_model_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.model_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Add material keys
    pub fn with_material_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.material_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Whether `key` names a sound
    pub fn is_sound_key(&self, key: &str) -> bool {
        self.sound_keys.contains(&key.to_lowercase())
    }

    /// Whether `key` names a model
    pub fn is_model_key(&self, key: &str) -> bool {
        self.model_keys.contains(key)
    }

    /// Whether `key` names a material
    pub fn is_material_key(&self, key: &str) -> bool {
        self.material_keys.contains(&key.to_lowercase())
    }

    /// True when no table has any entries
    pub fn is_empty(&self) -> bool {
        self.sound_keys.is_empty() && self.model_keys.is_empty() && self.material_keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_rules() {
        let vocab = KeyVocabulary::new()
            .with_sound_keys(["message"])
            .with_model_keys(["model"])
            .with_material_keys(["texture"]);

        assert!(vocab.is_sound_key("Message"));
        assert!(vocab.is_material_key("TEXTURE"));
        assert!(vocab.is_model_key("model"));
        assert!(!vocab.is_model_key("Model"));
    }

    #[test]
    fn test_empty_by_default() {
        let vocab = KeyVocabulary::default();
        assert!(vocab.is_empty());
        assert!(!vocab.is_sound_key("message"));
    }
}
