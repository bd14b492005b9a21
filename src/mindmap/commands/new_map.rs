use crate::commands::Outcome;
use crate::store::MapStore;
use crate::tree::MindMap;
use std::path::Path;

pub fn run<S: MapStore>(store: &mut S, title: &str, path: &Path, force: bool) -> Outcome<MindMap> {
    if store.exists(path) && !force {
        return Outcome::already_exists(format!(
            "File '{}' already exists. Use --force to overwrite.",
            path.display()
        ));
    }

    let mut map = MindMap::new();
    let root_id = match map.create_root(title) {
        Ok(root) => root.id.clone(),
        Err(e) => return Outcome::error(format!("Error creating root: {}", e)),
    };

    match store.save(&map, path) {
        Ok(()) => Outcome::success(
            map,
            format!(
                "Created new mind map '{}' in '{}'. Root ID: {}",
                title,
                path.display(),
                root_id
            ),
        ),
        Err(e) => Outcome::error(format!(
            "New map created in memory, but failed to save: {}",
            e
        )),
    }
}
