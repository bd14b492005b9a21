//! JSON document codec for [`MindMap`].
//!
//! ```text
//! {
//!   "root_id": "<id>" | null,
//!   "nodes": { "<id>": {"id", "text", "parent_id", "children_ids", "depth"} }
//! }
//! ```
//!
//! Decoding never yields a half-built map: any problem with the document is an
//! [`MindmapError::InvalidFormat`] and nothing is returned.

use crate::error::{MindmapError, Result};
use crate::model::{Node, NodeId};
use crate::tree::MindMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Serialize, Deserialize)]
struct MapDocument {
    #[serde(default)]
    root_id: Option<NodeId>,
    #[serde(default)]
    nodes: BTreeMap<NodeId, Node>,
}

pub fn to_json(map: &MindMap) -> Result<String> {
    let document = match map.root_id() {
        Some(root_id) => MapDocument {
            root_id: Some(root_id.clone()),
            nodes: map.nodes().map(|n| (n.id.clone(), n.clone())).collect(),
        },
        None => MapDocument {
            root_id: None,
            nodes: BTreeMap::new(),
        },
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn from_json(content: &str) -> Result<MindMap> {
    let document: MapDocument = serde_json::from_str(content)
        .map_err(|e| MindmapError::InvalidFormat(e.to_string()))?;

    let nodes: HashMap<NodeId, Node> = document
        .nodes
        .into_iter()
        .map(|(key, mut node)| {
            node.id = key.clone();
            (key, node)
        })
        .collect();

    match &document.root_id {
        Some(root_id) if !nodes.contains_key(root_id) => {
            return Err(MindmapError::InvalidFormat(format!(
                "root node ID '{}' not found",
                root_id
            )));
        }
        None if !nodes.is_empty() => {
            return Err(MindmapError::InvalidFormat(
                "nodes exist but no root_id specified".to_string(),
            ));
        }
        _ => {}
    }

    let map = MindMap::from_parts(nodes, document.root_id);
    map.verify()?;
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::MapFixture;
    use crate::tree::strategies::arb_map;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    #[test]
    fn empty_map_shape() {
        let json: Value = serde_json::from_str(&to_json(&MindMap::new()).unwrap()).unwrap();
        assert_eq!(json, json!({"root_id": null, "nodes": {}}));
    }

    #[test]
    fn empty_document_round_trips() {
        let map = from_json(&to_json(&MindMap::new()).unwrap()).unwrap();
        assert_eq!(map, MindMap::new());
    }

    #[test]
    fn populated_map_round_trips() {
        let map = MapFixture::new("Project X")
            .child("Task 1")
            .child("Task 2")
            .grandchild("Task 1", "Subtask 1.1")
            .build();
        let restored = from_json(&to_json(&map).unwrap()).unwrap();
        assert_eq!(restored, map);
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

        #[test]
        fn generated_maps_round_trip(map in arb_map()) {
            let encoded = to_json(&map).unwrap();
            let restored = from_json(&encoded).unwrap();
            prop_assert_eq!(restored, map);
        }
    }

    #[test]
    fn node_fields_are_written() {
        let map = MapFixture::new("R").child("A").build();
        let json: Value = serde_json::from_str(&to_json(&map).unwrap()).unwrap();
        let root_id = json["root_id"].as_str().unwrap();
        let root = &json["nodes"][root_id];
        assert_eq!(root["text"], "R");
        assert_eq!(root["parent_id"], Value::Null);
        assert_eq!(root["depth"], 0);
        assert_eq!(root["children_ids"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn decodes_handwritten_document() {
        let doc = json!({
            "root_id": "r",
            "nodes": {
                "r": {"id": "r", "text": "Root", "parent_id": null, "children_ids": ["a"], "depth": 0},
                "a": {"id": "a", "text": "A", "parent_id": "r", "children_ids": [], "depth": 1}
            }
        });
        let map = from_json(&doc.to_string()).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a").unwrap().parent_id, Some(NodeId::from("r")));
    }

    #[test]
    fn key_wins_over_record_id() {
        let doc = json!({
            "root_id": "r",
            "nodes": {"r": {"id": "other", "text": "Root"}}
        });
        let map = from_json(&doc.to_string()).unwrap();
        assert_eq!(map.root().unwrap().id.as_str(), "r");
    }

    #[test]
    fn rejects_unknown_root() {
        let doc = json!({"root_id": "x", "nodes": {}});
        assert!(matches!(
            from_json(&doc.to_string()),
            Err(MindmapError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_nodes_without_root() {
        let doc = json!({"root_id": null, "nodes": {"a": {"id": "a", "text": "A"}}});
        assert!(matches!(
            from_json(&doc.to_string()),
            Err(MindmapError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_missing_text() {
        let doc = json!({"root_id": "r", "nodes": {"r": {"id": "r"}}});
        assert!(matches!(
            from_json(&doc.to_string()),
            Err(MindmapError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            from_json("{ not json"),
            Err(MindmapError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_inconsistent_links() {
        let doc = json!({
            "root_id": "r",
            "nodes": {
                "r": {"id": "r", "text": "Root", "children_ids": ["a"]},
                "a": {"id": "a", "text": "A", "parent_id": "b", "depth": 1},
                "b": {"id": "b", "text": "B", "parent_id": "r", "depth": 1}
            }
        });
        assert!(matches!(
            from_json(&doc.to_string()),
            Err(MindmapError::InvalidFormat(_))
        ));
    }
}
