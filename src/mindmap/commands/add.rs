use crate::commands::Outcome;
use crate::error::MindmapError;
use crate::model::Node;
use crate::tree::{MindMap, MAX_DEPTH};

/// Adds `text` under `parent_id`, or under the root when no parent is given.
pub fn run(map: &mut MindMap, text: &str, parent_id: Option<&str>) -> Outcome<Node> {
    let parent_id = match parent_id {
        Some(id) => id.to_string(),
        None => match map.root_id() {
            Some(root) => root.to_string(),
            None => {
                return Outcome::error("Map is empty. Cannot add node without a specified parent.")
            }
        },
    };

    let Some(parent) = map.get(&parent_id) else {
        return Outcome::not_found(format!("Parent node with ID '{}' not found.", parent_id));
    };
    let parent_label = format!("node '{}' (ID: {})", parent.text, parent.id);

    if parent.depth >= MAX_DEPTH {
        return Outcome::max_depth_reached(format!(
            "Cannot add child to {}. Parent is already at max depth ({}) for having children.",
            parent_label, MAX_DEPTH
        ));
    }

    match map.insert_child(&parent_id, text) {
        Ok(node) => {
            let message = format!(
                "Added node '{}' (ID: {}) under {}.",
                text, node.id, parent_label
            );
            Outcome::success(node.clone(), message)
        }
        Err(e @ MindmapError::DepthExceeded { .. }) => Outcome::max_depth_reached(format!(
            "Failed to add node '{}' under {}. {}",
            text, parent_label, e
        )),
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Status;
    use crate::store::memory::fixtures::MapFixture;

    #[test]
    fn defaults_to_root() {
        let mut map = MapFixture::new("Root").build();
        let outcome = run(&mut map, "Child", None);

        let node = outcome.into_result().unwrap();
        assert_eq!(node.depth, 1);
        assert_eq!(node.parent_id.as_ref(), map.root_id());
        assert_eq!(map.root().unwrap().children_ids, vec![node.id]);
    }

    #[test]
    fn empty_map_without_parent_is_error() {
        let mut map = MindMap::new();
        let outcome = run(&mut map, "Orphan", None);
        assert_eq!(outcome.status(), Status::Error);
        assert!(map.is_empty());
    }

    #[test]
    fn unknown_parent_is_not_found() {
        let mut map = MapFixture::new("Root").build();
        let outcome = run(&mut map, "Child", Some("missing"));
        assert_eq!(outcome.status(), Status::NotFound);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn third_level_is_max_depth() {
        let mut map = MindMap::new();
        map.create_root("Project X").unwrap();

        let task = run(&mut map, "Task 1", None).into_result().unwrap();
        let subtask = run(&mut map, "Subtask 1.1", Some(task.id.as_str()))
            .into_result()
            .unwrap();
        assert_eq!(subtask.depth, 2);

        let before = map.clone();
        let outcome = run(&mut map, "Too deep", Some(subtask.id.as_str()));
        assert_eq!(outcome.status(), Status::MaxDepthReached);
        assert!(outcome.message().contains("Subtask 1.1"));
        assert_eq!(map, before);
    }

    #[test]
    fn empty_text_is_accepted() {
        let mut map = MapFixture::new("Root").build();
        assert!(run(&mut map, "", None).is_success());
    }
}
