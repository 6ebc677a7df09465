//! Settings layer for glyphsmith
//!
//! This module concentrates everything configuration-shaped: the storage
//! abstraction with its two backends, and the typed store with its fixed-key
//! accessors and record collections. Built-in defaults answer reads before
//! anything has been persisted.

pub mod backend;
pub mod defaults;
pub mod persistence;
pub mod store;

pub use backend::{MemoryBackend, SettingsBackend, SettingsValue};
pub use persistence::FileBackend;
pub use store::{GlyphSet, MarkColor, Settings};

/// Settings errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Settings could not be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid color string: {value:?}")]
    InvalidColor { value: String },
}
