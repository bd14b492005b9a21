use crate::commands::Outcome;
use crate::error::MindmapError;
use crate::tree::MindMap;

pub fn run(map: &mut MindMap, id: &str, new_parent_id: &str) -> Outcome<()> {
    let Some(node) = map.get(id) else {
        return Outcome::not_found(format!("Node to move (ID: {}) not found.", id));
    };
    let Some(new_parent) = map.get(new_parent_id) else {
        return Outcome::not_found(format!("New parent node (ID: {}) not found.", new_parent_id));
    };
    let node_text = node.text.clone();
    let parent_text = new_parent.text.clone();

    match map.reparent(id, new_parent_id) {
        Ok(()) => Outcome::success(
            (),
            format!(
                "Moved node '{}' (ID: {}) under '{}' (ID: {}).",
                node_text, id, parent_text, new_parent_id
            ),
        ),
        Err(MindmapError::DepthExceeded { text, depth }) => Outcome::max_depth_reached(format!(
            "Moving '{}' would place '{}' at depth {}, exceeding max depth ({}).",
            node_text,
            text,
            depth,
            crate::tree::MAX_DEPTH
        )),
        Err(e) => e.into(),
    }
}
