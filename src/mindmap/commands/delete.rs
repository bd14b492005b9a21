use crate::commands::Outcome;
use crate::tree::MindMap;

/// Deletes a node and everything under it. Deleting the root clears the map
/// and needs `confirm_root_delete`.
pub fn run(map: &mut MindMap, id: &str, confirm_root_delete: bool) -> Outcome<()> {
    let Some(node) = map.get(id) else {
        return Outcome::not_found(format!("Node with ID '{}' not found for deletion.", id));
    };

    if node.is_root() && !confirm_root_delete {
        return Outcome::invalid_operation(format!(
            "Confirmation required to delete the root node '{}'. This will clear the map.",
            node.text
        ));
    }

    if map.delete_subtree(id) {
        Outcome::success((), format!("Deleted node ID '{}' and its children.", id))
    } else {
        Outcome::error(format!("Failed to delete node ID '{}'.", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Status;
    use crate::store::memory::fixtures::MapFixture;

    #[test]
    fn deletes_subtree() {
        let mut map = MapFixture::new("R").child("A").grandchild("A", "A1").child("B").build();
        let a = map.find_by_text("A")[0].id.clone();

        assert!(run(&mut map, a.as_str(), false).is_success());
        assert_eq!(map.len(), 2);
        map.verify().unwrap();
    }

    #[test]
    fn unknown_id() {
        let mut map = MapFixture::new("R").build();
        assert_eq!(run(&mut map, "nope", false).status(), Status::NotFound);
    }

    #[test]
    fn root_needs_confirmation() {
        let mut map = MapFixture::new("R").child("A").build();
        let root = map.root_id().unwrap().clone();

        let outcome = run(&mut map, root.as_str(), false);
        assert_eq!(outcome.status(), Status::InvalidOperation);
        assert_eq!(map.len(), 2);

        assert!(run(&mut map, root.as_str(), true).is_success());
        assert!(map.is_empty());
        assert!(map.root().is_none());
    }
}
