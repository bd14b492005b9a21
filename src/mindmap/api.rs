//! # Session API
//!
//! [`MindmapApi`] is the single entry point for every mind map operation,
//! regardless of the UI driving it. It owns one session: a store, the path of
//! the map file and the map itself. Nothing is process-global; a front end
//! creates a session and passes it to whatever handles user input.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the command layer
//! - **Persists** the map after every successful mutation
//! - **Tracks** the session file across `new`, `load` and `save`
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Terminal I/O**: no stdout or stderr; outcomes carry their messages
//!
//! ## Generic Over MapStore
//!
//! `MindmapApi<S: MapStore>` runs against `FileStore` in production and
//! `InMemoryStore` in tests, so session behavior is tested without touching
//! the filesystem.

use crate::commands::{self, search::SearchHit, Outcome};
use crate::model::{Node, NodeId};
use crate::store::MapStore;
use crate::tree::MindMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct MindmapApi<S: MapStore> {
    store: S,
    path: PathBuf,
    map: MindMap,
}

impl<S: MapStore> MindmapApi<S> {
    /// Starts a session on `path` with an empty map. Call [`load`](Self::load)
    /// to pick up what is already there.
    pub fn new(store: S, path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            path: path.into(),
            map: MindMap::new(),
        }
    }

    pub fn map(&self) -> &MindMap {
        &self.map
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reloads the session file. A missing file leaves an empty map and
    /// reports `NotFound`; any other failure keeps the current map.
    pub fn load(&mut self) -> Outcome<()> {
        let outcome = commands::load::run(&self.store, &self.path);
        self.adopt_loaded(outcome)
    }

    /// Switches the session to `path` and loads it. The session only moves to
    /// `path` if it was read or is absent.
    pub fn load_from(&mut self, path: impl Into<PathBuf>) -> Outcome<()> {
        let path = path.into();
        let outcome = commands::load::run(&self.store, &path);
        if outcome.is_success() || matches!(outcome, Outcome::NotFound { .. }) {
            self.path = path;
        }
        self.adopt_loaded(outcome)
    }

    fn adopt_loaded(&mut self, outcome: Outcome<MindMap>) -> Outcome<()> {
        match outcome {
            Outcome::Success { result, message } => {
                info!(path = %self.path.display(), nodes = result.len(), "session loaded");
                self.map = result;
                Outcome::success((), message)
            }
            Outcome::NotFound { message } => {
                self.map = MindMap::new();
                Outcome::not_found(message)
            }
            other => other.map(|_| ()),
        }
    }

    pub fn save(&mut self) -> Outcome<()> {
        commands::save::run(&mut self.store, &self.map, &self.path)
    }

    /// Saves to `path` and makes it the session file.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Outcome<()> {
        let path = path.into();
        let outcome = commands::save::run(&mut self.store, &self.map, &path);
        if outcome.is_success() {
            self.path = path;
        }
        outcome
    }

    /// Creates a map titled `title` at `path` (or the session file) and makes
    /// it the session. Returns the new root id.
    pub fn new_map(&mut self, title: &str, path: Option<PathBuf>, force: bool) -> Outcome<NodeId> {
        let path = path.unwrap_or_else(|| self.path.clone());
        match commands::new_map::run(&mut self.store, title, &path, force) {
            Outcome::Success { result, message } => {
                info!(path = %path.display(), "new mind map");
                let root_id = result.root_id().cloned();
                self.map = result;
                self.path = path;
                match root_id {
                    Some(id) => Outcome::success(id, message),
                    None => Outcome::error("New map has no root."),
                }
            }
            other => other.map(|_| NodeId::from("")),
        }
    }

    pub fn add_node(&mut self, text: &str, parent_id: Option<&str>) -> Outcome<Node> {
        let outcome = commands::add::run(&mut self.map, text, parent_id);
        self.persist(outcome)
    }

    pub fn delete_node(&mut self, id: &str, confirm_root_delete: bool) -> Outcome<()> {
        let outcome = commands::delete::run(&mut self.map, id, confirm_root_delete);
        self.persist(outcome)
    }

    pub fn edit_node(&mut self, id: &str, new_text: &str) -> Outcome<String> {
        let outcome = commands::edit::run(&mut self.map, id, new_text);
        self.persist(outcome)
    }

    pub fn move_node(&mut self, id: &str, new_parent_id: &str) -> Outcome<()> {
        let outcome = commands::move_node::run(&mut self.map, id, new_parent_id);
        self.persist(outcome)
    }

    pub fn search(&self, term: &str) -> Outcome<Vec<SearchHit>> {
        commands::search::run(&self.map, term)
    }

    pub fn list(&self) -> Outcome<Option<String>> {
        commands::list::run(&self.map)
    }

    pub fn export(&mut self, target: Option<&Path>) -> Outcome<Option<String>> {
        commands::export::run(&mut self.store, &self.map, target)
    }

    /// Writes the map after a successful mutation. A failed write turns the
    /// outcome into an error; the in-memory change stays.
    fn persist<T>(&mut self, outcome: Outcome<T>) -> Outcome<T> {
        if !outcome.is_success() {
            return outcome;
        }
        match self.store.save(&self.map, &self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), nodes = self.map.len(), "autosaved");
                outcome
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "autosave failed");
                Outcome::error(format!(
                    "{} But saving to '{}' failed: {}",
                    outcome.message(),
                    self.path.display(),
                    e
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Status;
    use crate::store::memory::InMemoryStore;

    fn session() -> MindmapApi<InMemoryStore> {
        let mut api = MindmapApi::new(InMemoryStore::new(), "map.json");
        assert!(api.new_map("Project X", None, false).is_success());
        api
    }

    /// A store whose writes always fail.
    struct ReadOnlyStore;

    impl MapStore for ReadOnlyStore {
        fn exists(&self, _path: &Path) -> bool {
            false
        }
        fn load(&self, path: &Path) -> crate::error::Result<MindMap> {
            Err(crate::error::MindmapError::NotFound(path.to_path_buf()))
        }
        fn save(&mut self, _map: &MindMap, _path: &Path) -> crate::error::Result<()> {
            Err(crate::error::MindmapError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
        fn write_text(&mut self, _path: &Path, _content: &str) -> crate::error::Result<()> {
            self.save(&MindMap::new(), Path::new(""))
        }
    }

    #[test]
    fn new_map_becomes_session() {
        let api = session();
        assert_eq!(api.map().root().unwrap().text, "Project X");
        assert!(api.store().exists(Path::new("map.json")));
    }

    #[test]
    fn mutations_autosave() {
        let mut api = session();
        let task = api.add_node("Task 1", None).into_result().unwrap();
        api.edit_node(task.id.as_str(), "Task one");

        let saved = api.store().load(Path::new("map.json")).unwrap();
        assert_eq!(&saved, api.map());
        assert_eq!(saved.get(task.id.as_str()).unwrap().text, "Task one");
    }

    #[test]
    fn failed_mutation_is_not_saved() {
        let mut api = session();
        let before = api.store().contents(Path::new("map.json")).unwrap().to_string();

        assert_eq!(api.add_node("x", Some("missing")).status(), Status::NotFound);
        assert_eq!(api.store().contents(Path::new("map.json")).unwrap(), before);
    }

    #[test]
    fn load_missing_gives_empty_map() {
        let mut api = session();
        let outcome = api.load_from("other.json");
        assert_eq!(outcome.status(), Status::NotFound);
        assert!(api.map().is_empty());
        assert_eq!(api.path(), Path::new("other.json"));
    }

    #[test]
    fn load_malformed_keeps_session() {
        let mut store = InMemoryStore::new();
        store.put_raw("bad.json", "{ nope");
        let mut api = MindmapApi::new(store, "map.json");
        api.new_map("Keep", None, false);

        let outcome = api.load_from("bad.json");
        assert_eq!(outcome.status(), Status::Error);
        assert_eq!(api.path(), Path::new("map.json"));
        assert_eq!(api.map().root().unwrap().text, "Keep");
    }

    #[test]
    fn save_as_moves_session() {
        let mut api = session();
        assert!(api.save_as("copy.json").is_success());
        assert_eq!(api.path(), Path::new("copy.json"));

        let mut reopened = MindmapApi::new(InMemoryStore::new(), "copy.json");
        assert_eq!(reopened.load().status(), Status::NotFound);

        let mut same_store = api;
        assert!(same_store.load().is_success());
        assert_eq!(same_store.map().root().unwrap().text, "Project X");
    }

    #[test]
    fn new_map_respects_existing_file() {
        let mut api = session();
        let outcome = api.new_map("Other", None, false);
        assert_eq!(outcome.status(), Status::AlreadyExists);
        assert_eq!(api.map().root().unwrap().text, "Project X");

        assert!(api.new_map("Other", None, true).is_success());
        assert_eq!(api.map().root().unwrap().text, "Other");
    }

    #[test]
    fn depth_scenario() {
        let mut api = session();
        let task = api.add_node("Task 1", None).into_result().unwrap();
        let sub = api
            .add_node("Subtask 1.1", Some(task.id.as_str()))
            .into_result()
            .unwrap();
        let outcome = api.add_node("Too deep", Some(sub.id.as_str()));
        assert_eq!(outcome.status(), Status::MaxDepthReached);
        assert_eq!(api.map().len(), 3);
    }

    #[test]
    fn save_failure_becomes_error() {
        let mut api = MindmapApi::new(ReadOnlyStore, "map.json");
        api.map.create_root("R").unwrap();

        let outcome = api.add_node("A", None);
        assert_eq!(outcome.status(), Status::Error);
        assert!(outcome.message().contains("read-only"));
        assert_eq!(api.map().len(), 2);
    }

    #[test]
    fn export_and_list_read_the_session() {
        let mut api = session();
        api.add_node("A", None);

        let listed = api.list().into_result().unwrap().unwrap();
        assert!(listed.contains("(ID: "));

        assert!(api.export(Some(Path::new("out.txt"))).is_success());
        assert_eq!(
            api.store().contents(Path::new("out.txt")),
            Some("Project X [ROOT]\n└── A")
        );
        assert_eq!(api.search("a").result().unwrap().len(), 1);
    }
}
