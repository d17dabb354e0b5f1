//! Materials referenced by entities

use super::require_classname;
use crate::entity::Entity;
use crate::vocabulary::KeyVocabulary;
use crate::{Error, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const SCREEN_OVERLAY_COMMAND: &str = "r_screenoverlay ";

/// Build the entity texture list
///
/// `game_folder` is where `vgui_slideshow_display` directories are looked
/// up; without it slideshows contribute nothing.
pub fn entity_textures(
    entities: &[Entity],
    vocabulary: &KeyVocabulary,
    game_folder: Option<&Path>,
) -> Result<Vec<String>> {
    let mut textures = Vec::new();

    for (index, entity) in entities.iter().enumerate() {
        let mut materials = Vec::new();

        for (key, value) in entity.unique_pairs() {
            if vocabulary.is_material_key(key) {
                materials.push(value.to_string());
                if key.to_lowercase().starts_with("team_icon") {
                    materials.push(format!("{value}_locked"));
                }
            }
        }

        let classname = require_classname(entity, index)?;

        if classname.contains("sprite") {
            if let Some(model) = entity.get("model") {
                materials.push(model.to_string());
            }
        }

        if classname.contains("item_teamflag") {
            if let Some(trail) = entity.get("flag_trail") {
                materials.push(format!("effects/{trail}"));
                materials.push(format!("effects/{trail}_red"));
                materials.push(format!("effects/{trail}_blu"));
            }
            if let Some(icon) = entity.get("flag_icon") {
                materials.push(format!("vgui/{icon}"));
                materials.push(format!("vgui/{icon}_red"));
                materials.push(format!("vgui/{icon}_blu"));
            }
        }

        // Both are hardcoded in the game
        if classname.contains("env_funnel") {
            materials.push("sprites/flare6.vmt".to_string());
        }
        if classname.contains("env_embers") {
            materials.push("particle/fire.vmt".to_string());
        }

        if classname.contains("vgui_slideshow_display") {
            if let Some(directory) = entity.get("directory") {
                materials.extend(slideshow_materials(game_folder, directory)?);
            }
        }

        textures.extend(materials.iter().map(|m| format_material(m)));
    }

    let mut seen = HashSet::new();
    for entity in entities {
        for (_, value) in entity.pairs() {
            if let Some(overlay) = screen_overlay(value) {
                let overlay = overlay.strip_suffix(".vmt").unwrap_or(overlay);
                if seen.insert(overlay) {
                    textures.push(format!("materials/{overlay}.vmt"));
                }
            }
        }
    }

    log::debug!("{} entity textures", textures.len());
    Ok(textures)
}

/// Append `.vmt` unless the name already has a material or sprite extension
pub fn format_material(material: &str) -> String {
    if material.ends_with(".vmt") || material.ends_with(".spr") {
        format!("materials/{material}")
    } else {
        format!("materials/{material}.vmt")
    }
}

/// The material named by the first `r_screenoverlay <material>,` command
pub fn screen_overlay(value: &str) -> Option<&str> {
    value.match_indices(SCREEN_OVERLAY_COMMAND).find_map(|(pos, _)| {
        let rest = &value[pos + SCREEN_OVERLAY_COMMAND.len()..];
        match rest.find(',') {
            Some(end) if end > 0 => Some(&rest[..end]),
            _ => None,
        }
    })
}

/// Every `.vmt` directly inside `<game folder>/materials/vgui/<directory>`
///
/// The path is built by concatenation so a leading `/` on `directory` does
/// not replace the game folder.
fn slideshow_materials(game_folder: Option<&Path>, directory: &str) -> Result<Vec<String>> {
    let Some(game_folder) = game_folder else {
        log::debug!("No game folder configured, skipping slideshow directory {directory}");
        return Ok(Vec::new());
    };

    let path = PathBuf::from(format!(
        "{}/materials/vgui/{directory}",
        game_folder.display()
    ));
    if !path.is_dir() {
        log::debug!("Slideshow directory {} does not exist", path.display());
        return Ok(Vec::new());
    }

    let listing_error = |source| Error::SlideshowDirectory {
        path: path.clone(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(&path).map_err(listing_error)? {
        let entry = entry.map_err(listing_error)?;
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(".vmt") {
                names.push(name.to_string());
            }
        }
    }
    names.sort();

    Ok(names
        .into_iter()
        .map(|name| format!("/vgui/{directory}/{name}"))
        .collect())
}
