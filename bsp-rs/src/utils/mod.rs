//! Shared utilities for the bsp-rs CLI

pub mod format;
pub mod keys;
pub mod table;

pub use format::*;
pub use keys::*;
pub use table::*;
