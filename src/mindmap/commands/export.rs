use crate::commands::Outcome;
use crate::model::NodeId;
use crate::store::MapStore;
use crate::tree::MindMap;
use std::path::Path;

const BRANCH: &str = "├── ";
const CORNER: &str = "└── ";
const BAR: &str = "│   ";
const GAP: &str = "    ";

/// Renders the tree as a connector diagram:
///
/// ```text
/// R [ROOT]
/// ├── A
/// │   └── A1
/// └── B
/// ```
///
/// With `show_ids`, each line also carries `(ID: ...)`. Returns `None` for an
/// empty map.
pub fn render(map: &MindMap, show_ids: bool) -> Option<String> {
    let root = map.root()?;
    let label = |text: &str, id: &NodeId| {
        if show_ids {
            format!("{} (ID: {})", text, id)
        } else {
            text.to_string()
        }
    };

    let mut lines = vec![format!("{} [ROOT]", label(&root.text, &root.id))];
    let mut stack: Vec<(&NodeId, String, bool)> = Vec::new();
    push_children(&mut stack, &root.children_ids, "");

    while let Some((id, indent, is_last)) = stack.pop() {
        let Some(node) = map.get(id.as_str()) else {
            continue;
        };
        let connector = if is_last { CORNER } else { BRANCH };
        lines.push(format!("{}{}{}", indent, connector, label(&node.text, &node.id)));

        let child_indent = format!("{}{}", indent, if is_last { GAP } else { BAR });
        push_children(&mut stack, &node.children_ids, &child_indent);
    }

    Some(lines.join("\n"))
}

/// Pushes in reverse so the first child pops first.
fn push_children<'a>(stack: &mut Vec<(&'a NodeId, String, bool)>, children: &'a [NodeId], indent: &str) {
    let last = children.len().saturating_sub(1);
    for (i, child) in children.iter().enumerate().rev() {
        stack.push((child, indent.to_string(), i == last));
    }
}

pub fn run<S: MapStore>(store: &mut S, map: &MindMap, target: Option<&Path>) -> Outcome<Option<String>> {
    let Some(content) = render(map, false) else {
        return Outcome::success(None, "Map is empty, nothing to export.");
    };

    match target {
        Some(path) => match store.write_text(path, &content) {
            Ok(()) => Outcome::success(
                None,
                format!("Mind map exported as text tree to: {}", path.display()),
            ),
            Err(e) => Outcome::error(format!(
                "Error writing export file '{}': {}",
                path.display(),
                e
            )),
        },
        None => Outcome::success(Some(content), "Mind map export content generated."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::MapFixture;
    use crate::store::memory::InMemoryStore;

    fn sample() -> MindMap {
        MapFixture::new("R")
            .child("A")
            .child("B")
            .grandchild("A", "A1")
            .build()
    }

    #[test]
    fn renders_connectors() {
        let expected = "R [ROOT]\n├── A\n│   └── A1\n└── B";
        assert_eq!(render(&sample(), false).unwrap(), expected);
    }

    #[test]
    fn last_child_suppresses_bar() {
        let map = MapFixture::new("R")
            .child("A")
            .child("B")
            .grandchild("B", "B1")
            .grandchild("B", "B2")
            .build();
        let expected = "R [ROOT]\n├── A\n└── B\n    ├── B1\n    └── B2";
        assert_eq!(render(&map, false).unwrap(), expected);
    }

    #[test]
    fn ids_are_appended_when_asked() {
        let map = sample();
        let root_id = map.root_id().unwrap().clone();
        let rendered = render(&map, true).unwrap();
        assert!(rendered.starts_with(&format!("R (ID: {}) [ROOT]", root_id)));
        assert_eq!(rendered.lines().count(), 4);
    }

    #[test]
    fn returns_content_without_target() {
        let mut store = InMemoryStore::new();
        let outcome = run(&mut store, &sample(), None);
        assert_eq!(
            outcome.result().unwrap().as_deref(),
            Some("R [ROOT]\n├── A\n│   └── A1\n└── B")
        );
    }

    #[test]
    fn writes_to_target() {
        let mut store = InMemoryStore::new();
        let path = Path::new("tree.txt");
        let outcome = run(&mut store, &sample(), Some(path));

        assert!(outcome.is_success());
        assert_eq!(outcome.result(), Some(&None));
        assert!(store.contents(path).unwrap().starts_with("R [ROOT]"));
    }

    #[test]
    fn empty_map_is_success_without_content() {
        let mut store = InMemoryStore::new();
        let outcome = run(&mut store, &MindMap::new(), Some(Path::new("tree.txt")));
        assert!(outcome.is_success());
        assert_eq!(outcome.result(), Some(&None));
        assert!(!store.exists(Path::new("tree.txt")));
    }
}
