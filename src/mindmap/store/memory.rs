use super::MapStore;
use crate::codec;
use crate::error::{MindmapError, Result};
use crate::tree::MindMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw contents stored at `path`, if any.
    pub fn contents(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Place raw contents at `path`, bypassing the codec.
    pub fn put_raw(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl MapStore for InMemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn load(&self, path: &Path) -> Result<MindMap> {
        let content = self
            .files
            .get(path)
            .ok_or_else(|| MindmapError::NotFound(path.to_path_buf()))?;
        codec::from_json(content)
    }

    fn save(&mut self, map: &MindMap, path: &Path) -> Result<()> {
        let content = codec::to_json(map)?;
        self.files.insert(path.to_path_buf(), content);
        Ok(())
    }

    fn write_text(&mut self, path: &Path, content: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::tree::MindMap;

    /// Builds small maps by text. `child` hangs a node under the root,
    /// `grandchild` under the first node carrying `parent_text`.
    pub struct MapFixture {
        map: MindMap,
    }

    impl MapFixture {
        pub fn new(root_text: &str) -> Self {
            let mut map = MindMap::new();
            map.create_root(root_text).unwrap();
            Self { map }
        }

        pub fn child(mut self, text: &str) -> Self {
            let root = self.map.root_id().unwrap().clone();
            self.map.insert_child(root.as_str(), text).unwrap();
            self
        }

        pub fn grandchild(mut self, parent_text: &str, text: &str) -> Self {
            let parent = self
                .map
                .preorder()
                .into_iter()
                .find(|n| n.text == parent_text)
                .map(|n| n.id.clone())
                .unwrap();
            self.map.insert_child(parent.as_str(), text).unwrap();
            self
        }

        pub fn build(self) -> MindMap {
            self.map
        }
    }
}
