//! Decoder for Source engine BSP map files.
//!
//! This crate reads the parts of a `.bsp` map that reference external
//! assets and turns them into the file paths a packaging tool has to ship
//! with the map: brush and entity materials, static prop and entity models,
//! sounds and particle systems.
//!
//! Only three lumps are decoded: the entity text (lump 0), the game lump
//! with its static props (lump 35), and the texture string table (lump 43).
//!
//! # Examples
//!
//! ```no_run
//! use source_bsp::{BspReader, KeyVocabulary};
//!
//! # fn main() -> source_bsp::Result<()> {
//! let reader = BspReader::new(KeyVocabulary::new().with_model_keys(["model"]));
//! let assets = reader.read_file("maps/cp_badlands.bsp")?;
//!
//! println!("{assets}");
//! for (index, name) in assets.static_props.names.iter().enumerate() {
//!     println!("{name}: skins {:?}", assets.skins_for(index));
//! }
//! # Ok(())
//! # }
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod entity;
pub mod error;
pub mod extract;
pub mod game_lump;
pub mod header;
pub mod reader;
pub mod texture;
pub mod vocabulary;

pub use entity::{Entity, parse_entities};
pub use error::{Error, Result};
pub use game_lump::{GameLumpDirectory, GameLumpEntry, STATIC_PROP_LUMP_ID, StaticProps};
pub use header::{FormatVariant, LUMP_COUNT, LumpDirectory, LumpEntry, LumpIndex};
pub use reader::{BspAssets, BspReader};
pub use vocabulary::KeyVocabulary;
