//! BSP header and lump directory parsing

use crate::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::fmt;
use std::io::{Read, Seek, SeekFrom};

/// Number of entries in the lump directory
pub const LUMP_COUNT: usize = 64;

/// Header version used by Left 4 Dead 2 style maps
pub const ALTERNATE_ORDER_VERSION: i32 = 21;

/// Directory indices of the lumps this crate decodes
pub struct LumpIndex;

impl LumpIndex {
    /// Entity key/value text
    pub const ENTITIES: usize = 0;
    /// Game lump container (static props live here)
    pub const GAME_LUMP: usize = 35;
    /// NUL-separated brush texture names
    pub const TEXDATA_STRING_DATA: usize = 43;
}

/// Layout of the lump directory entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVariant {
    /// `offset, length, version, fourCC`
    Standard,
    /// `version, offset, length, fourCC`
    AlternateOrder,
}

impl FormatVariant {
    /// Decide the variant from the version and the integer that follows it
    pub fn detect(version: i32, next: i32) -> Self {
        if next == 0 && version == ALTERNATE_ORDER_VERSION {
            FormatVariant::AlternateOrder
        } else {
            FormatVariant::Standard
        }
    }
}

impl fmt::Display for FormatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatVariant::Standard => write!(f, "standard"),
            FormatVariant::AlternateOrder => write!(f, "alternate order"),
        }
    }
}

/// A single lump directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LumpEntry {
    /// Absolute file offset of the lump
    pub offset: i32,
    /// Length of the lump in bytes
    pub length: i32,
}

/// The fixed 64-entry lump directory following the file header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumpDirectory {
    /// Header version field
    pub version: i32,
    /// Detected directory layout
    pub variant: FormatVariant,
    entries: [LumpEntry; LUMP_COUNT],
}

impl LumpDirectory {
    /// Read the header and the complete lump directory
    ///
    /// The reader is positioned at the start of the file first. Running out
    /// of input before all 64 entries are read fails the whole read.
    pub fn read<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        // Skip the magic
        reader.seek(SeekFrom::Start(4))?;
        let version = reader.read_i32::<LittleEndian>()?;

        let next = reader.read_i32::<LittleEndian>()?;
        let variant = FormatVariant::detect(version, next);
        reader.seek(SeekFrom::Current(-4))?;

        log::debug!("BSP version {version}, {variant} lump directory");

        let mut entries = [LumpEntry::default(); LUMP_COUNT];
        for entry in entries.iter_mut() {
            *entry = match variant {
                FormatVariant::Standard => {
                    let offset = reader.read_i32::<LittleEndian>()?;
                    let length = reader.read_i32::<LittleEndian>()?;
                    reader.seek(SeekFrom::Current(8))?;
                    LumpEntry { offset, length }
                }
                FormatVariant::AlternateOrder => {
                    reader.seek(SeekFrom::Current(4))?;
                    let offset = reader.read_i32::<LittleEndian>()?;
                    let length = reader.read_i32::<LittleEndian>()?;
                    reader.seek(SeekFrom::Current(4))?;
                    LumpEntry { offset, length }
                }
            };
        }

        // Seeking past the end succeeds silently, so make sure the last
        // skipped field actually exists.
        let end = reader.stream_position()?;
        let len = reader.seek(SeekFrom::End(0))?;
        if end > len {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "lump directory is truncated",
            )));
        }

        Ok(Self {
            version,
            variant,
            entries,
        })
    }

    /// Get a directory entry by index
    pub fn lump(&self, index: usize) -> Option<&LumpEntry> {
        self.entries.get(index)
    }

    /// All 64 directory entries
    pub fn entries(&self) -> &[LumpEntry; LUMP_COUNT] {
        &self.entries
    }

    /// Read the raw bytes of a lump with an absolute seek
    pub fn read_lump<R: Read + Seek>(&self, reader: &mut R, index: usize) -> Result<Vec<u8>> {
        let entry = self.lump(index).copied().unwrap_or_default();
        let invalid = || Error::InvalidLump {
            index,
            offset: entry.offset,
            length: entry.length,
        };

        if index >= LUMP_COUNT {
            return Err(invalid());
        }
        let offset = u64::try_from(entry.offset).map_err(|_| invalid())?;
        let length = usize::try_from(entry.length).map_err(|_| invalid())?;

        log::trace!("Reading lump {index}: {length} bytes at 0x{offset:08X}");

        reader.seek(SeekFrom::Start(offset))?;
        let mut data = vec![0u8; length];
        reader.read_exact(&mut data)?;
        Ok(data)
    }
}
