//! Asset dependency listing

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use std::path::{Path, PathBuf};

use source_bsp::{BspAssets, BspReader, KeyVocabulary};

use crate::cli::OutputFormat;
use crate::utils::load_vocabulary;

/// A static prop model and the skins placed with it
#[derive(Debug, Serialize)]
struct StaticPropModel<'a> {
    name: &'a str,
    skins: &'a [i32],
}

/// JSON form of a decoded map
#[derive(Debug, Serialize)]
struct AssetReport<'a> {
    map: String,
    version: i32,
    static_props: Vec<StaticPropModel<'a>>,
    entity_models: &'a [String],
    particles: &'a [String],
    textures: &'a [String],
    entity_textures: &'a [String],
    entity_sounds: &'a [String],
}

impl<'a> AssetReport<'a> {
    fn new(path: &Path, assets: &'a BspAssets) -> Self {
        let static_props = assets
            .static_props
            .names
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.is_empty())
            .map(|(index, name)| StaticPropModel {
                name,
                skins: assets.skins_for(index),
            })
            .collect();

        Self {
            map: path.display().to_string(),
            version: assets.directory.version,
            static_props,
            entity_models: &assets.entity_models,
            particles: &assets.particles,
            textures: &assets.textures,
            entity_textures: &assets.entity_textures,
            entity_sounds: &assets.entity_sounds,
        }
    }
}

pub fn execute(
    path: PathBuf,
    keys: Option<PathBuf>,
    game_dir: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let vocabulary = match &keys {
        Some(keys) => load_vocabulary(keys)?,
        None => KeyVocabulary::default(),
    };
    if vocabulary.is_empty() {
        log::warn!("No key vocabulary given, entity key rules are disabled");
    }

    let mut reader = BspReader::new(vocabulary);
    if let Some(game_dir) = game_dir {
        reader = reader.with_game_folder(game_dir);
    }

    let assets = reader
        .read_file(&path)
        .with_context(|| format!("Failed to decode map: {}", path.display()))?;

    match format {
        OutputFormat::Json => {
            let report = AssetReport::new(&path, &assets);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => print_text(&path, &assets),
    }

    Ok(())
}

fn print_section(title: &str, items: &[String]) {
    println!(
        "\n{} ({})",
        style(title).bold().underlined(),
        style(items.len()).green()
    );
    for item in items {
        println!("  {item}");
    }
}

fn print_text(path: &Path, assets: &BspAssets) {
    println!("{}", style(path.display()).cyan());
    println!("{assets}");

    println!(
        "\n{} ({})",
        style("Static prop models").bold().underlined(),
        style(assets.models().len()).green()
    );
    for (index, name) in assets.static_props.names.iter().enumerate() {
        if !name.is_empty() {
            println!("  {name} skins {:?}", assets.skins_for(index));
        }
    }

    print_section("Entity models", &assets.entity_models);
    print_section("Particles", &assets.particles);
    print_section("Textures", &assets.textures);
    print_section("Entity materials", &assets.entity_textures);
    print_section("Sounds", &assets.entity_sounds);
}
