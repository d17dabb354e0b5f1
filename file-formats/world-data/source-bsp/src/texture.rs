//! Brush texture list

use crate::entity::{Entity, decode_ascii};
use crate::{Error, Result};
use std::path::Path;

/// Directional suffixes of the six skybox faces
pub const SKYBOX_SUFFIXES: [&str; 6] = ["bk", "dn", "ft", "lf", "rt", "up"];

/// Map name used for the menu photo: the file name cut at its first `.`
pub fn map_base_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .unwrap_or_default()
}

/// Format a texture string table name as a material path
pub fn material_path(name: &str) -> String {
    // Names in the root of the material directory start with '/'
    if name.starts_with('/') {
        format!("materials{name}.vmt")
    } else {
        format!("materials/{name}.vmt")
    }
}

/// Build the brush texture list
///
/// `string_data` is the raw texture string lump. Every NUL-separated field
/// is formatted, so the lump's trailing NUL yields `materials/.vmt`. Skybox,
/// detail material and menu photo paths are added from `worldspawn`.
pub fn texture_list(string_data: &[u8], entities: &[Entity], map_name: &str) -> Result<Vec<String>> {
    let mut textures: Vec<String> = decode_ascii(string_data)
        .split('\0')
        .map(material_path)
        .collect();

    let worldspawn = worldspawn(entities)?;

    if let Some(skyname) = worldspawn.get("skyname") {
        for suffix in SKYBOX_SUFFIXES {
            textures.push(format!("materials/skybox/{skyname}{suffix}.vmt"));
            textures.push(format!("materials/skybox/{skyname}_hdr{suffix}.vmt"));
        }
    }

    if let Some(detail) = worldspawn.get("detailmaterial") {
        textures.push(format!("materials/{detail}.vmt"));
    }

    textures.push(format!("materials/vgui/maps/menu_photos_{map_name}.vmt"));

    log::debug!("{} brush textures", textures.len());
    Ok(textures)
}

/// The first entity whose classname is exactly `worldspawn`
pub fn worldspawn(entities: &[Entity]) -> Result<&Entity> {
    entities
        .iter()
        .find(|e| e.classname() == Some("worldspawn"))
        .ok_or(Error::MissingWorldspawn)
}
