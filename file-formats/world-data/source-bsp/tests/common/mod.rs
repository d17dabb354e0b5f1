//! Common test utilities: an in-memory BSP builder

#![allow(dead_code)]

use source_bsp::{LUMP_COUNT, LumpIndex, STATIC_PROP_LUMP_ID};

/// Size of the header: magic, version, 64 directory entries, map revision
pub const HEADER_SIZE: usize = 8 + LUMP_COUNT * 16 + 4;

/// Bytes of one static prop instance (version 10 layout)
pub const PROP_SIZE: usize = 76;

/// A static prop placement
#[derive(Debug, Clone, Copy)]
pub struct Prop {
    pub model: u16,
    pub skin: i32,
}

/// Builds minimal maps with the three decoded lumps
#[derive(Debug, Clone)]
pub struct BspBuilder {
    version: i32,
    alternate_order: bool,
    entities: Vec<u8>,
    textures: Vec<String>,
    models: Vec<String>,
    leaves: usize,
    props: Vec<Prop>,
    prop_size: usize,
    static_prop_lump: bool,
}

impl Default for BspBuilder {
    fn default() -> Self {
        Self {
            version: 20,
            alternate_order: false,
            entities: b"{\n\"classname\" \"worldspawn\"\n}\n\0".to_vec(),
            textures: Vec::new(),
            models: Vec::new(),
            leaves: 0,
            props: Vec::new(),
            prop_size: PROP_SIZE,
            static_prop_lump: true,
        }
    }
}

impl BspBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the version 21 layout with the version field first
    pub fn alternate_order(mut self) -> Self {
        self.version = 21;
        self.alternate_order = true;
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    pub fn entities(mut self, text: &str) -> Self {
        self.entities = text.as_bytes().to_vec();
        self.entities.push(0);
        self
    }

    pub fn textures(mut self, names: &[&str]) -> Self {
        self.textures = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn models(mut self, names: &[&str]) -> Self {
        self.models = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn leaves(mut self, count: usize) -> Self {
        self.leaves = count;
        self
    }

    pub fn props(mut self, props: &[(u16, i32)]) -> Self {
        self.props = props
            .iter()
            .map(|&(model, skin)| Prop { model, skin })
            .collect();
        self
    }

    pub fn prop_size(mut self, size: usize) -> Self {
        self.prop_size = size;
        self
    }

    pub fn without_static_props(mut self) -> Self {
        self.static_prop_lump = false;
        self
    }

    fn static_prop_payload(&self) -> Vec<u8> {
        let mut payload = Vec::new();
        payload.extend(&(self.models.len() as i32).to_le_bytes());
        for model in &self.models {
            let mut name = [0u8; 128];
            name[..model.len()].copy_from_slice(model.as_bytes());
            payload.extend(&name);
        }
        payload.extend(&(self.leaves as i32).to_le_bytes());
        payload.extend(vec![0u8; self.leaves * 2]);
        payload.extend(&(self.props.len() as i32).to_le_bytes());
        for prop in &self.props {
            let mut instance = vec![0u8; self.prop_size];
            instance[24..26].copy_from_slice(&prop.model.to_le_bytes());
            instance[32..36].copy_from_slice(&prop.skin.to_le_bytes());
            payload.extend(instance);
        }
        payload
    }

    fn game_lump(&self, offset: usize) -> Vec<u8> {
        let mut data = Vec::new();
        let payload = self.static_prop_payload();
        let id = if self.static_prop_lump {
            STATIC_PROP_LUMP_ID
        } else {
            i32::from_le_bytes(*b"prpd")
        };

        data.extend(&1i32.to_le_bytes());
        data.extend(&id.to_le_bytes());
        data.extend(&0u16.to_le_bytes());
        data.extend(&10u16.to_le_bytes());
        let payload_offset = offset + 4 + 16;
        data.extend(&(payload_offset as i32).to_le_bytes());
        data.extend(&(payload.len() as i32).to_le_bytes());
        data.extend(payload);
        data
    }

    fn texture_data(&self) -> Vec<u8> {
        let mut data = Vec::new();
        for name in &self.textures {
            data.extend(name.as_bytes());
            data.push(0);
        }
        data
    }

    /// Serialize the map
    pub fn build(&self) -> Vec<u8> {
        let mut lumps: Vec<(usize, Vec<u8>)> = Vec::new();
        let mut body = Vec::new();
        let mut offset = HEADER_SIZE;

        lumps.push((LumpIndex::ENTITIES, self.entities.clone()));
        lumps.push((LumpIndex::TEXDATA_STRING_DATA, self.texture_data()));

        let mut directory = vec![(0i32, 0i32); LUMP_COUNT];
        for (index, data) in lumps {
            directory[index] = (offset as i32, data.len() as i32);
            offset += data.len();
            body.extend(data);
        }

        let game_lump = self.game_lump(offset);
        directory[LumpIndex::GAME_LUMP] = (offset as i32, game_lump.len() as i32);
        body.extend(game_lump);

        let mut data = Vec::with_capacity(HEADER_SIZE + body.len());
        data.extend(b"VBSP");
        data.extend(&self.version.to_le_bytes());
        for (lump_offset, length) in directory {
            let lump_version = 0i32;
            let fourcc = [0u8; 4];
            if self.alternate_order {
                data.extend(&lump_version.to_le_bytes());
                data.extend(&lump_offset.to_le_bytes());
                data.extend(&length.to_le_bytes());
                data.extend(&fourcc);
            } else {
                data.extend(&lump_offset.to_le_bytes());
                data.extend(&length.to_le_bytes());
                data.extend(&lump_version.to_le_bytes());
                data.extend(&fourcc);
            }
        }
        data.extend(&1i32.to_le_bytes()); // map revision
        data.extend(body);
        data
    }
}
