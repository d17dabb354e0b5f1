//! Entity lump tokenizer
//!
//! The entity lump is a text block of brace-delimited records, each holding
//! one `"key" "value"` pair per line:
//!
//! ```text
//! {
//! "classname" "worldspawn"
//! "skyname" "sky_day01_01"
//! }
//! ```
//!
//! Braces only delimit records when a newline follows them; anywhere else
//! they are part of the text (map authors use them in file names).

use crate::{Error, Result};
use std::collections::HashSet;

const LCURLY: u8 = b'{';
const RCURLY: u8 = b'}';
const NEWLINE: u8 = b'\n';

/// A decoded entity: its key/value pairs in file order
///
/// Duplicate keys are kept. Lookups by key see the first occurrence only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entity {
    pairs: Vec<(String, String)>,
}

impl Entity {
    /// Create an entity from ordered pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Append a key/value pair
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Every pair in file order, duplicates included
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Pairs with the first occurrence of each key, in file order
    pub fn unique_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut seen = HashSet::new();
        self.pairs
            .iter()
            .filter(move |(k, _)| seen.insert(k.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Value of the first pair with this key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The `classname` value, if any
    pub fn classname(&self) -> Option<&str> {
        self.get("classname")
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.unique_pairs().count()
    }

    /// Whether the entity has no pairs at all
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Decode the raw entity lump into entities
pub fn parse_entities(data: &[u8]) -> Result<Vec<Entity>> {
    let mut entities = Vec::new();
    let mut record = Vec::new();

    for (i, &byte) in data.iter().enumerate() {
        let next = data.get(i + 1).copied();
        match byte {
            LCURLY => {
                if next.is_some_and(|b| b != NEWLINE) {
                    record.push(byte);
                }
            }
            RCURLY => {
                if next.is_some_and(|b| b != NEWLINE) {
                    record.push(byte);
                    continue;
                }
                let text = decode_ascii(&record);
                entities.push(parse_record(&text, entities.len())?);
                record.clear();
            }
            _ => record.push(byte),
        }
    }

    log::debug!("Decoded {} entities", entities.len());
    Ok(entities)
}

fn parse_record(text: &str, index: usize) -> Result<Entity> {
    let mut entity = Entity::default();
    for line in split_unquoted_lines(text) {
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split('"');
        match (fields.nth(1), fields.nth(1)) {
            (Some(key), Some(value)) => entity.push(key, value),
            _ => return Err(Error::malformed_line(index, line)),
        }
    }
    Ok(entity)
}

/// Split on newlines that are followed by an even number of quotes
///
/// A newline inside a quoted value always has an odd number of quotes
/// after it, so quoted values survive intact.
pub fn split_unquoted_lines(text: &str) -> Vec<&str> {
    let mut remaining_quotes = text.bytes().filter(|&b| b == b'"').count();
    let mut lines = Vec::new();
    let mut start = 0;

    for (i, byte) in text.bytes().enumerate() {
        match byte {
            b'"' => remaining_quotes -= 1,
            b'\n' if remaining_quotes % 2 == 0 => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    lines.push(&text[start..]);
    lines
}

/// Decode bytes as ASCII, replacing anything outside the range with `?`
pub(crate) fn decode_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_entity() {
        let entities = parse_entities(b"{\n\"classname\" \"worldspawn\"\n}\n").unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].get("classname"), Some("worldspawn"));
        assert_eq!(
            entities[0].pairs(),
            &[("classname".to_string(), "worldspawn".to_string())]
        );
    }

    #[test]
    fn test_literal_braces() {
        let data = b"{\n\"classname\" \"info_target\"\n\"targetname\" \"a}b{c\"\n}\n";
        let entities = parse_entities(data).unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].get("targetname"), Some("a}b{c"));
    }

    #[test]
    fn test_duplicate_keys() {
        let data = b"{\n\"classname\" \"path_track\"\n\"origin\" \"0 0 0\"\n\"origin\" \"1 1 1\"\n}\n";
        let entities = parse_entities(data).unwrap();
        let entity = &entities[0];
        assert_eq!(entity.pairs().len(), 3);
        assert_eq!(entity.get("origin"), Some("0 0 0"));
        assert_eq!(entity.len(), 2);
        let unique: Vec<_> = entity.unique_pairs().collect();
        assert_eq!(
            unique,
            vec![("classname", "path_track"), ("origin", "0 0 0")]
        );
    }

    #[test]
    fn test_multiple_entities_and_trailing_nul() {
        let data = b"{\n\"classname\" \"worldspawn\"\n}\n{\n\"classname\" \"light\"\n}\n\0";
        let entities = parse_entities(data).unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[1].classname(), Some("light"));
    }

    #[test]
    fn test_closing_brace_at_end_of_lump() {
        let entities = parse_entities(b"{\n\"classname\" \"light\"\n}").unwrap();
        assert_eq!(entities.len(), 1);
    }

    #[test]
    fn test_malformed_line() {
        let err = parse_entities(b"{\n\"classname\"\n}\n").unwrap_err();
        assert!(matches!(err, Error::MalformedEntityLine { entity: 0, .. }));
    }

    #[test]
    fn test_newline_inside_quotes() {
        let lines = split_unquoted_lines("\"message\" \"line one\nline two\"\n\"k\" \"v\"");
        assert_eq!(
            lines,
            vec!["\"message\" \"line one\nline two\"", "\"k\" \"v\""]
        );
    }

    #[test]
    fn test_non_ascii_bytes() {
        assert_eq!(decode_ascii(b"caf\xc3\xa9"), "caf??");
    }
}
