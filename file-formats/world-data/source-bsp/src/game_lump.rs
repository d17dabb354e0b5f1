//! Game lump directory and static prop decoding

use crate::entity::decode_ascii;
use crate::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

/// Static prop sub-lump identifier: FourCC `sprp`, stored as the bytes `prps`
pub const STATIC_PROP_LUMP_ID: i32 = 1936749168;

/// Width of one entry in the static prop model dictionary
pub const MODEL_NAME_LENGTH: usize = 128;

/// Origin and angles that precede the model index in every prop instance
const PROP_ORIGIN_ANGLES_SIZE: i64 = 24;

/// One entry of the game lump directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLumpEntry {
    /// Sub-lump identifier
    pub id: i32,
    /// Sub-lump flags
    pub flags: u16,
    /// Sub-lump version
    pub version: u16,
    /// Absolute file offset of the sub-lump
    pub offset: i32,
    /// Length of the sub-lump in bytes
    pub length: i32,
}

impl GameLumpEntry {
    /// The identifier as its four on-disk characters
    pub fn fourcc(&self) -> String {
        decode_ascii(&self.id.to_le_bytes())
    }
}

/// Directory of sub-lumps stored in lump 35
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameLumpDirectory {
    entries: Vec<GameLumpEntry>,
    static_prop_index: Option<usize>,
}

impl GameLumpDirectory {
    /// Read the sub-lump directory at the reader's current position
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let count = reader.read_i32::<LittleEndian>()?;
        let mut entries = Vec::with_capacity(count.clamp(0, 64) as usize);
        let mut static_prop_index = None;

        for i in 0..count.max(0) as usize {
            let id = reader.read_i32::<LittleEndian>()?;
            if id == STATIC_PROP_LUMP_ID {
                static_prop_index = Some(i);
            }
            let flags = reader.read_u16::<LittleEndian>()?;
            let version = reader.read_u16::<LittleEndian>()?;
            let offset = reader.read_i32::<LittleEndian>()?;
            let length = reader.read_i32::<LittleEndian>()?;
            entries.push(GameLumpEntry {
                id,
                flags,
                version,
                offset,
                length,
            });
        }

        log::debug!("Game lump holds {} sub-lumps", entries.len());
        Ok(Self {
            entries,
            static_prop_index,
        })
    }

    /// All sub-lump entries in directory order
    pub fn entries(&self) -> &[GameLumpEntry] {
        &self.entries
    }

    /// The last entry carrying the given identifier
    pub fn find(&self, id: i32) -> Option<&GameLumpEntry> {
        self.entries.iter().rev().find(|e| e.id == id)
    }

    /// The static prop sub-lump, if the map has one
    pub fn static_props(&self) -> Option<&GameLumpEntry> {
        self.static_prop_index.map(|i| &self.entries[i])
    }
}

/// Static prop model dictionary and the skins each model is placed with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticProps {
    /// Model dictionary, NUL padding removed
    pub names: Vec<String>,
    /// Number of prop instances in the map
    pub prop_count: i32,
    /// Distinct skins per dictionary entry, in first-seen order
    ///
    /// Empty when the map places no props.
    pub skins: Vec<Vec<i32>>,
}

impl StaticProps {
    /// Decode the static prop sub-lump described by `entry`
    pub fn read<R: Read + Seek>(reader: &mut R, entry: &GameLumpEntry) -> Result<Self> {
        let start = u64::try_from(entry.offset).map_err(|_| invalid_range(entry))?;
        reader.seek(SeekFrom::Start(start))?;

        let model_count = reader.read_i32::<LittleEndian>()?.max(0) as usize;
        let mut names = Vec::with_capacity(model_count.min(4096));
        let mut buf = [0u8; MODEL_NAME_LENGTH];
        for _ in 0..model_count {
            reader.read_exact(&mut buf)?;
            names.push(decode_ascii(&buf).trim_matches('\0').to_string());
        }

        let leaf_count = reader.read_i32::<LittleEndian>()?;
        reader.seek(SeekFrom::Current(i64::from(leaf_count) * 2))?;

        let prop_count = reader.read_i32::<LittleEndian>()?;
        if prop_count <= 0 {
            log::debug!("{model_count} static prop models, no instances");
            return Ok(Self {
                names,
                prop_count,
                skins: Vec::new(),
            });
        }

        let base = reader.stream_position()? as i64;
        let end = i64::from(entry.offset) + i64::from(entry.length);
        let stride = (end - base) / i64::from(prop_count);
        log::debug!("{model_count} static prop models, {prop_count} instances of {stride} bytes");

        let mut skins = vec![Vec::new(); model_count];
        for instance in 0..prop_count as usize {
            let pos = instance as i64 * stride + base + PROP_ORIGIN_ANGLES_SIZE;
            let pos = u64::try_from(pos).map_err(|_| invalid_range(entry))?;
            reader.seek(SeekFrom::Start(pos))?;

            let model_index = reader.read_u16::<LittleEndian>()?;
            reader.seek(SeekFrom::Current(6))?;
            let skin = reader.read_i32::<LittleEndian>()?;

            let model_skins = skins.get_mut(model_index as usize).ok_or(
                Error::InvalidStaticProp {
                    instance,
                    model_index,
                    model_count,
                },
            )?;
            if !model_skins.contains(&skin) {
                model_skins.push(skin);
            }
        }

        Ok(Self {
            names,
            prop_count,
            skins,
        })
    }

    /// Non-empty model names, in dictionary order
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Skins placed for a dictionary entry
    pub fn skins_for(&self, model_index: usize) -> &[i32] {
        self.skins.get(model_index).map_or(&[], Vec::as_slice)
    }
}

fn invalid_range(entry: &GameLumpEntry) -> Error {
    Error::InvalidLump {
        index: crate::header::LumpIndex::GAME_LUMP,
        offset: entry.offset,
        length: entry.length,
    }
}

/// Read the game lump at `offset` and decode its static props
pub fn read_static_props<R: Read + Seek>(reader: &mut R, offset: u64) -> Result<StaticProps> {
    reader.seek(SeekFrom::Start(offset))?;
    let directory = GameLumpDirectory::read(reader)?;
    let entry = *directory
        .static_props()
        .ok_or(Error::MissingStaticPropLump)?;
    StaticProps::read(reader, &entry)
}
