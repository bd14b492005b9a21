use crate::commands::Outcome;
use crate::tree::MindMap;

/// Replaces a node's text. The success payload is the old text.
pub fn run(map: &mut MindMap, id: &str, new_text: &str) -> Outcome<String> {
    match map.set_text(id, new_text) {
        Some(old_text) => {
            let message = format!(
                "Node ID '{}' text changed from '{}' to '{}'.",
                id, old_text, new_text
            );
            Outcome::success(old_text, message)
        }
        None => Outcome::not_found(format!("Node with ID '{}' not found for editing.", id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Status;
    use crate::store::memory::fixtures::MapFixture;

    #[test]
    fn returns_previous_text() {
        let mut map = MapFixture::new("Draft").build();
        let root = map.root_id().unwrap().clone();

        let outcome = run(&mut map, root.as_str(), "Final");
        assert_eq!(outcome.result().map(String::as_str), Some("Draft"));
        assert_eq!(map.root().unwrap().text, "Final");
    }

    #[test]
    fn unknown_id() {
        let mut map = MapFixture::new("Draft").build();
        assert_eq!(run(&mut map, "nope", "x").status(), Status::NotFound);
        assert_eq!(map.root().unwrap().text, "Draft");
    }
}
