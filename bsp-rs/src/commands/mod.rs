//! Command implementations

pub mod assets;
pub mod entities;
pub mod info;
