//! Formatting utilities

use humansize::{DECIMAL, format_size};

/// Format file size in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Human readable name of a well-known lump
pub fn lump_name(index: usize) -> &'static str {
    match index {
        0 => "entities",
        1 => "planes",
        2 => "texdata",
        3 => "vertexes",
        5 => "nodes",
        6 => "texinfo",
        7 => "faces",
        10 => "leafs",
        12 => "edges",
        14 => "models",
        29 => "physcollide",
        35 => "game lump",
        40 => "pakfile",
        43 => "texdata string data",
        44 => "texdata string table",
        _ => "",
    }
}
