//! Error types for the BSP library

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for BSP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a BSP map
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error occurred (truncated input surfaces as `UnexpectedEof`)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A lump directory entry points outside of any addressable range
    #[error("Invalid lump {index}: offset {offset}, length {length}")]
    InvalidLump {
        /// Directory index of the lump
        index: usize,
        /// Offset stored in the directory
        offset: i32,
        /// Length stored in the directory
        length: i32,
    },

    /// The game lump has no static prop sub-lump
    #[error("Game lump does not contain a static prop sub-lump")]
    MissingStaticPropLump,

    /// A static prop instance references a model outside the dictionary
    #[error(
        "Static prop {instance} references model {model_index}, but the dictionary has {model_count} entries"
    )]
    InvalidStaticProp {
        /// Index of the offending prop instance
        instance: usize,
        /// Model index read from the instance
        model_index: u16,
        /// Number of entries in the model dictionary
        model_count: usize,
    },

    /// No entity with classname `worldspawn` exists
    #[error("Map has no worldspawn entity")]
    MissingWorldspawn,

    /// An entity line could not be split into a key and a value
    #[error("Malformed key/value line in entity {entity}: {line:?}")]
    MalformedEntityLine {
        /// Index of the entity being decoded
        entity: usize,
        /// The offending line
        line: String,
    },

    /// An entity has no `classname` key
    #[error("Entity {entity} has no classname")]
    MissingClassname {
        /// Index of the entity
        entity: usize,
    },

    /// Listing a slideshow material directory failed
    #[error("Failed to list slideshow directory {}: {source}", path.display())]
    SlideshowDirectory {
        /// Directory that was being listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Create a malformed entity line error
    pub fn malformed_line(entity: usize, line: impl Into<String>) -> Self {
        Error::MalformedEntityLine {
            entity,
            line: line.into(),
        }
    }

    /// Check if this error indicates a structurally broken map file
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::InvalidLump { .. }
                | Error::MissingStaticPropLump
                | Error::InvalidStaticProp { .. }
                | Error::MissingWorldspawn
                | Error::MalformedEntityLine { .. }
        ) || matches!(self, Error::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::malformed_line(3, "\"classname\"");
        assert_eq!(
            err.to_string(),
            "Malformed key/value line in entity 3: \"\\\"classname\\\"\""
        );

        let err = Error::InvalidLump {
            index: 35,
            offset: -4,
            length: 16,
        };
        assert_eq!(err.to_string(), "Invalid lump 35: offset -4, length 16");
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::MissingWorldspawn.is_structural());
        assert!(Error::Io(io::Error::from(io::ErrorKind::UnexpectedEof)).is_structural());
        assert!(!Error::Io(io::Error::from(io::ErrorKind::PermissionDenied)).is_structural());
        assert!(!Error::MissingClassname { entity: 0 }.is_structural());
    }
}
