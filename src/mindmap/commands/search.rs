use crate::commands::Outcome;
use crate::model::Node;
use crate::tree::MindMap;

/// A matching node and the chain of nodes from the root down to it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub node: Node,
    pub path: Vec<Node>,
}

impl SearchHit {
    /// `Root -> Parent -> Node`
    pub fn path_label(&self) -> String {
        self.path
            .iter()
            .map(|n| n.text.as_str())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

pub fn run(map: &MindMap, term: &str) -> Outcome<Vec<SearchHit>> {
    let hits: Vec<SearchHit> = map
        .find_by_text(term)
        .into_iter()
        .map(|node| SearchHit {
            node: node.clone(),
            path: map
                .path_to_root(node.id.as_str())
                .unwrap_or_default()
                .into_iter()
                .cloned()
                .collect(),
        })
        .collect();

    if hits.is_empty() {
        return Outcome::success(hits, format!("No nodes found containing text '{}'.", term));
    }

    let message = format!("Found {} node(s) containing '{}'.", hits.len(), term);
    Outcome::success(hits, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::MapFixture;

    #[test]
    fn pairs_each_hit_with_its_path() {
        let map = MapFixture::new("Garden")
            .child("Plant tomatoes")
            .child("Water")
            .grandchild("Water", "Tomato bed")
            .build();

        let outcome = run(&map, "tomato");
        let hits = outcome.result().unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].path_label(), "Garden -> Plant tomatoes");
        assert_eq!(hits[1].path_label(), "Garden -> Water -> Tomato bed");
        assert_eq!(hits[1].path.last().unwrap(), &hits[1].node);
        assert!(outcome.message().starts_with("Found 2"));
    }

    #[test]
    fn no_match_is_still_success() {
        let map = MapFixture::new("Garden").build();
        let outcome = run(&map, "cactus");
        assert!(outcome.is_success());
        assert!(outcome.result().unwrap().is_empty());
        assert!(outcome.message().contains("No nodes found"));
    }
}
