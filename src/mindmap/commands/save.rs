use crate::commands::Outcome;
use crate::store::MapStore;
use crate::tree::MindMap;
use std::path::Path;

pub fn run<S: MapStore>(store: &mut S, map: &MindMap, path: &Path) -> Outcome<()> {
    match store.save(map, path) {
        Ok(()) => Outcome::success(
            (),
            format!("Mind map saved successfully to '{}'", path.display()),
        ),
        Err(e) => Outcome::error(format!(
            "Could not write to file '{}'. {}",
            path.display(),
            e
        )),
    }
}
