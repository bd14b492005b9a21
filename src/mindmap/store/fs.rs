use super::MapStore;
use crate::codec;
use crate::error::{MindmapError, Result};
use crate::tree::MindMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(MindmapError::Io)?;
            }
        }
        Ok(())
    }
}

impl MapStore for FileStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn load(&self, path: &Path) -> Result<MindMap> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => MindmapError::NotFound(path.to_path_buf()),
            _ => MindmapError::Io(e),
        })?;
        let map = codec::from_json(&content)?;
        debug!(path = %path.display(), nodes = map.len(), "loaded mind map");
        Ok(map)
    }

    fn save(&mut self, map: &MindMap, path: &Path) -> Result<()> {
        self.ensure_parent(path)?;
        let content = codec::to_json(map)?;
        fs::write(path, content).map_err(MindmapError::Io)?;
        debug!(path = %path.display(), nodes = map.len(), "saved mind map");
        Ok(())
    }

    fn write_text(&mut self, path: &Path, content: &str) -> Result<()> {
        self.ensure_parent(path)?;
        fs::write(path, content).map_err(MindmapError::Io)?;
        debug!(path = %path.display(), bytes = content.len(), "wrote text export");
        Ok(())
    }
}
