use crate::commands::export::render;
use crate::commands::Outcome;
use crate::tree::MindMap;

/// The tree diagram with node ids, for picking ids to pass to other commands.
pub fn run(map: &MindMap) -> Outcome<Option<String>> {
    match render(map, true) {
        Some(diagram) => Outcome::success(Some(diagram), format!("{} node(s).", map.len())),
        None => Outcome::success(None, "Mind map is empty."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::MapFixture;

    #[test]
    fn lists_with_ids() {
        let map = MapFixture::new("R").child("A").build();
        let a = map.find_by_text("A")[0].id.clone();

        let outcome = run(&map);
        let diagram = outcome.result().unwrap().as_ref().unwrap();
        assert!(diagram.contains(&format!("└── A (ID: {})", a)));
    }

    #[test]
    fn empty_map() {
        let outcome = run(&MindMap::new());
        assert!(outcome.is_success());
        assert_eq!(outcome.result(), Some(&None));
        assert_eq!(outcome.message(), "Mind map is empty.");
    }
}
