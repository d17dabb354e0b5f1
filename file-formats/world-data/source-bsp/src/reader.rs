//! Full decode of a map into its asset references

use crate::entity::{Entity, parse_entities};
use crate::extract;
use crate::game_lump::{StaticProps, read_static_props};
use crate::header::{LumpDirectory, LumpIndex};
use crate::texture::{map_base_name, texture_list, worldspawn};
use crate::vocabulary::KeyVocabulary;
use crate::{Error, Result};
use std::fmt;
use std::fs;
use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};

/// Decodes maps with a fixed vocabulary and game folder
///
/// # Examples
///
/// ```no_run
/// use source_bsp::{BspReader, KeyVocabulary};
///
/// # fn main() -> source_bsp::Result<()> {
/// let vocabulary = KeyVocabulary::new()
///     .with_model_keys(["model"])
///     .with_sound_keys(["message"]);
/// let reader = BspReader::new(vocabulary).with_game_folder("/games/tf");
/// let assets = reader.read_file("maps/ctf_2fort.bsp")?;
/// for path in assets.all_paths() {
///     println!("{path}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct BspReader {
    vocabulary: KeyVocabulary,
    game_folder: Option<PathBuf>,
}

impl BspReader {
    /// Create a reader with the given key vocabulary
    pub fn new(vocabulary: KeyVocabulary) -> Self {
        Self {
            vocabulary,
            game_folder: None,
        }
    }

    /// Set the game folder used to resolve slideshow directories
    pub fn with_game_folder(mut self, path: impl Into<PathBuf>) -> Self {
        self.game_folder = Some(path.into());
        self
    }

    /// The key vocabulary in use
    pub fn vocabulary(&self) -> &KeyVocabulary {
        &self.vocabulary
    }

    /// The configured game folder
    pub fn game_folder(&self) -> Option<&Path> {
        self.game_folder.as_deref()
    }

    /// Read and decode a map file
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<BspAssets> {
        let path = path.as_ref();
        log::info!("Reading {}", path.display());
        let data = fs::read(path)?;
        self.read(&mut Cursor::new(data), map_base_name(path))
    }

    /// Decode a map from any seekable source
    ///
    /// `map_name` is the map's base name, used for the menu photo material.
    pub fn read<R: Read + Seek>(&self, source: &mut R, map_name: &str) -> Result<BspAssets> {
        let directory = LumpDirectory::read(source)?;

        let entity_data = directory.read_lump(source, LumpIndex::ENTITIES)?;
        let entities = parse_entities(&entity_data)?;

        let entity_models = extract::entity_models(&entities, &self.vocabulary)?;

        let game_lump = directory
            .lump(LumpIndex::GAME_LUMP)
            .copied()
            .unwrap_or_default();
        let game_lump_offset = u64::try_from(game_lump.offset).map_err(|_| Error::InvalidLump {
            index: LumpIndex::GAME_LUMP,
            offset: game_lump.offset,
            length: game_lump.length,
        })?;
        let static_props = read_static_props(source, game_lump_offset)?;

        let particles = extract::particles(&entities);

        let entity_textures =
            extract::entity_textures(&entities, &self.vocabulary, self.game_folder())?;
        let string_data = directory.read_lump(source, LumpIndex::TEXDATA_STRING_DATA)?;
        let textures = texture_list(&string_data, &entities, map_name)?;

        let entity_sounds = extract::entity_sounds(&entities, &self.vocabulary);

        Ok(BspAssets {
            directory,
            entities,
            static_props,
            entity_models,
            particles,
            textures,
            entity_textures,
            entity_sounds,
        })
    }
}

/// Everything decoded from one map
#[derive(Debug, Clone)]
pub struct BspAssets {
    /// Lump directory and format variant
    pub directory: LumpDirectory,
    /// Entities in file order
    pub entities: Vec<Entity>,
    /// Static prop models and their skins
    pub static_props: StaticProps,
    /// Models referenced by entities
    pub entity_models: Vec<String>,
    /// Particle systems referenced by entities
    pub particles: Vec<String>,
    /// Brush textures plus skybox, detail and menu photo materials
    pub textures: Vec<String>,
    /// Materials referenced by entities
    pub entity_textures: Vec<String>,
    /// Sounds referenced by entities
    pub entity_sounds: Vec<String>,
}

impl BspAssets {
    /// Non-empty static prop model names
    pub fn models(&self) -> Vec<&str> {
        self.static_props.models().collect()
    }

    /// Skins used by a static prop dictionary entry
    pub fn skins_for(&self, model_index: usize) -> &[i32] {
        self.static_props.skins_for(model_index)
    }

    /// The `worldspawn` entity
    pub fn worldspawn(&self) -> Option<&Entity> {
        worldspawn(&self.entities).ok()
    }

    /// Every referenced path: textures, entity textures, static prop models,
    /// entity models, sounds, then particles
    pub fn all_paths(&self) -> impl Iterator<Item = &str> {
        self.textures
            .iter()
            .chain(&self.entity_textures)
            .map(String::as_str)
            .chain(self.static_props.models())
            .chain(
                self.entity_models
                    .iter()
                    .chain(&self.entity_sounds)
                    .chain(&self.particles)
                    .map(String::as_str),
            )
    }
}

impl fmt::Display for BspAssets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BSP v{} ({}): {} entities, {} static prop models, {} textures, {} entity textures, {} entity models, {} sounds, {} particles",
            self.directory.version,
            self.directory.variant,
            self.entities.len(),
            self.static_props.models().count(),
            self.textures.len(),
            self.entity_textures.len(),
            self.entity_models.len(),
            self.entity_sounds.len(),
            self.particles.len()
        )
    }
}
