use crate::commands::Outcome;
use crate::error::MindmapError;
use crate::store::MapStore;
use crate::tree::MindMap;
use std::path::Path;

pub fn run<S: MapStore>(store: &S, path: &Path) -> Outcome<MindMap> {
    match store.load(path) {
        Ok(map) => Outcome::success(
            map,
            format!("Mind map loaded successfully from '{}'.", path.display()),
        ),
        Err(MindmapError::NotFound(_)) => Outcome::not_found(format!(
            "File '{}' not found. Starting with an empty map.",
            path.display()
        )),
        Err(e @ MindmapError::InvalidFormat(_)) => Outcome::error(format!(
            "Invalid map data format in '{}'. {}",
            path.display(),
            e
        )),
        Err(e) => Outcome::error(format!(
            "Could not read file '{}'. {}",
            path.display(),
            e
        )),
    }
}
