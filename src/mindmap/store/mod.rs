//! # Storage Layer
//!
//! A mind map lives in one JSON file. The [`MapStore`] trait is the seam between
//! the commands that touch storage (`new`, `load`, `save`, `export`) and the
//! place the bytes actually go.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage on the local filesystem. Parent
//!   directories are created on write.
//! - [`memory::InMemoryStore`]: a path-keyed map of documents, for tests. It
//!   still goes through the JSON codec so round-trips are exercised.
//!
//! ## Load Errors
//!
//! `load` keeps three failures apart so callers can start fresh only when the
//! file is genuinely absent:
//!
//! - [`MindmapError::NotFound`](crate::error::MindmapError::NotFound): nothing at that path
//! - [`MindmapError::InvalidFormat`](crate::error::MindmapError::InvalidFormat): the file exists but is not a valid map
//! - [`MindmapError::Io`](crate::error::MindmapError::Io): the read itself failed
//!
//! Whole documents are read and written; there is no locking and no partial
//! write.

use crate::error::Result;
use crate::tree::MindMap;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait MapStore {
    /// Whether something already occupies `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read and decode the map stored at `path`.
    fn load(&self, path: &Path) -> Result<MindMap>;

    /// Encode and write `map` to `path`, replacing what was there.
    fn save(&mut self, map: &MindMap, path: &Path) -> Result<()>;

    /// Write a plain text rendering (used by export).
    fn write_text(&mut self, path: &Path, content: &str) -> Result<()>;
}
