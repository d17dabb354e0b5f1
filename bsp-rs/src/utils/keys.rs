//! Loading key vocabularies from disk

use anyhow::{Context, Result};
use source_bsp::KeyVocabulary;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a vocabulary from a `.json`, `.yaml` or `.yml` file
pub fn load_vocabulary(path: &Path) -> Result<KeyVocabulary> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let vocabulary = match extension.as_deref() {
        Some("json") => serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse JSON vocabulary: {}", path.display()))?,
        Some("yaml" | "yml") => serde_yaml_ng::from_reader(reader)
            .with_context(|| format!("Failed to parse YAML vocabulary: {}", path.display()))?,
        _ => anyhow::bail!(
            "Unsupported vocabulary format: {} (expected .json, .yaml or .yml)",
            path.display()
        ),
    };

    log::debug!("Loaded key vocabulary from {}", path.display());
    Ok(vocabulary)
}
