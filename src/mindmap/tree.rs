//! # The Mind Map Tree
//!
//! [`MindMap`] is an arena: a single `HashMap` from [`NodeId`] to [`Node`] that
//! owns every node, plus the id of the root. Edges are ids, never references,
//! so every traversal is an explicit walk through the map. That keeps the
//! interesting checks (cycle detection, subtree depth planning) visible and
//! bounded.
//!
//! ## Invariants
//!
//! After every completed operation:
//!
//! 1. The tree is empty (no nodes, no root) or exactly one node has no parent
//!    and it is the root.
//! 2. Every node sits one level below its parent; the root is at depth 0.
//! 3. No node is deeper than [`MAX_DEPTH`].
//! 4. Parent and child links agree, and each id is listed under exactly one
//!    parent.
//! 5. Every node is reachable from the root and there are no cycles.
//!
//! [`MindMap::verify`] checks all five and is used when loading a file.
//!
//! ## Failure Leaves No Trace
//!
//! Operations that can be rejected (`insert_child`, `reparent`) do all of their
//! validation before touching the arena. A rejected move leaves the map equal
//! to what it was before the call.
//!
//! ## Deleting the Root
//!
//! Deleting the root clears the entire arena. Any node that survived would be
//! unreachable, and the tree has no way to adopt orphans.

use crate::error::{MindmapError, Result};
use crate::model::{Node, NodeId};
use std::collections::{HashMap, HashSet, VecDeque};

/// Root is 0, so a map holds root, children and grandchildren.
pub const MAX_DEPTH: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MindMap {
    nodes: HashMap<NodeId, Node>,
    root: Option<NodeId>,
}

impl MindMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a map from stored parts as-is. Callers check the result with
    /// [`MindMap::verify`].
    pub(crate) fn from_parts(nodes: HashMap<NodeId, Node>, root: Option<NodeId>) -> Self {
        Self { nodes, root }
    }

    pub fn root_id(&self) -> Option<&NodeId> {
        self.root.as_ref()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref().and_then(|id| self.nodes.get(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn create_root(&mut self, text: impl Into<String>) -> Result<&Node> {
        if self.root.is_some() {
            return Err(MindmapError::AlreadyInitialized);
        }

        let node = Node::new(text, None, 0);
        let id = node.id.clone();
        self.root = Some(id.clone());
        Ok(&*self.nodes.entry(id).or_insert(node))
    }

    pub fn insert_child(&mut self, parent_id: &str, text: impl Into<String>) -> Result<&Node> {
        let parent = self
            .nodes
            .get_mut(parent_id)
            .ok_or_else(|| MindmapError::NodeNotFound(parent_id.into()))?;

        let text = text.into();
        let depth = parent.depth + 1;
        if depth > MAX_DEPTH {
            return Err(MindmapError::DepthExceeded { text, depth });
        }

        let node = Node::new(text, Some(parent.id.clone()), depth);
        let id = node.id.clone();
        parent.children_ids.push(id.clone());
        Ok(&*self.nodes.entry(id).or_insert(node))
    }

    /// Replaces a node's text and hands back the previous text.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Option<String> {
        self.nodes
            .get_mut(id)
            .map(|node| std::mem::replace(&mut node.text, text.into()))
    }

    /// Removes a node and its whole subtree. Returns false if `id` is unknown.
    pub fn delete_subtree(&mut self, id: &str) -> bool {
        let Some(node) = self.nodes.get(id) else {
            return false;
        };
        let node_id = node.id.clone();
        let parent_id = node.parent_id.clone();

        let mut doomed = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![node_id.clone()];
        while let Some(current) = stack.pop() {
            if !seen.insert(current.clone()) {
                continue;
            }
            if let Some(node) = self.nodes.get(&current) {
                stack.extend(node.children_ids.iter().cloned());
                doomed.push(current);
            }
        }

        if let Some(parent) = parent_id.as_ref().and_then(|p| self.nodes.get_mut(p)) {
            parent.children_ids.retain(|child| child != &node_id);
        }
        for id in &doomed {
            self.nodes.remove(id);
        }

        if self.root.as_ref() == Some(&node_id) {
            self.root = None;
            self.nodes.clear();
        }
        true
    }

    /// Nodes reachable from the root, parents before children, siblings in
    /// stored order.
    pub fn preorder(&self) -> Vec<&Node> {
        let mut ordered = Vec::with_capacity(self.nodes.len());
        let mut seen = HashSet::new();
        let mut stack: Vec<&NodeId> = self.root.iter().collect();
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            ordered.push(node);
            stack.extend(node.children_ids.iter().rev());
        }
        ordered
    }

    /// Case-insensitive substring search over node text, in display order.
    pub fn find_by_text(&self, needle: &str) -> Vec<&Node> {
        let needle = needle.to_lowercase();
        self.preorder()
            .into_iter()
            .filter(|node| node.text.to_lowercase().contains(&needle))
            .collect()
    }

    /// The chain from the root down to `id`, inclusive. `None` if the id is
    /// unknown or a parent link dangles.
    pub fn path_to_root(&self, id: &str) -> Option<Vec<&Node>> {
        let mut current = self.nodes.get(id)?;
        let mut path = vec![current];
        let mut seen = HashSet::from([&current.id]);

        while let Some(parent_id) = &current.parent_id {
            current = self.nodes.get(parent_id)?;
            if !seen.insert(&current.id) {
                return None;
            }
            path.push(current);
        }

        path.reverse();
        Some(path)
    }

    /// Moves `id` (and its subtree) under `new_parent_id`.
    ///
    /// Rejections, in order: moving the root, moving under the current parent,
    /// moving under itself, moving under one of its own descendants, and any
    /// subtree node landing deeper than [`MAX_DEPTH`]. All checks run before
    /// the first write.
    pub fn reparent(&mut self, id: &str, new_parent_id: &str) -> Result<()> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| MindmapError::NodeNotFound(id.into()))?;
        let new_parent = self
            .nodes
            .get(new_parent_id)
            .ok_or_else(|| MindmapError::NodeNotFound(new_parent_id.into()))?;

        if node.is_root() {
            return Err(MindmapError::InvalidOperation(
                "Cannot move the root node.".to_string(),
            ));
        }
        if node.parent_id.as_ref() == Some(&new_parent.id) {
            return Err(MindmapError::InvalidOperation(
                "Node is already under the specified parent.".to_string(),
            ));
        }
        if new_parent.id == node.id {
            return Err(MindmapError::InvalidOperation(
                "Cannot move a node under itself.".to_string(),
            ));
        }
        if self.is_ancestor_or_self(&node.id, &new_parent.id) {
            return Err(MindmapError::InvalidOperation(format!(
                "Cannot move '{}' under '{}'. This would create a circular dependency.",
                node.text, new_parent.text
            )));
        }

        let planned = self.plan_depths(node, new_parent.depth + 1)?;

        let node_id = node.id.clone();
        let old_parent_id = node.parent_id.clone();
        let new_parent_id = new_parent.id.clone();

        if let Some(old_parent) = old_parent_id.as_ref().and_then(|p| self.nodes.get_mut(p)) {
            old_parent.children_ids.retain(|child| child != &node_id);
        }
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.parent_id = Some(new_parent_id.clone());
        }
        if let Some(new_parent) = self.nodes.get_mut(&new_parent_id) {
            if !new_parent.children_ids.contains(&node_id) {
                new_parent.children_ids.push(node_id.clone());
            }
        }
        for (id, depth) in planned {
            if let Some(node) = self.nodes.get_mut(&id) {
                node.depth = depth;
            }
        }
        Ok(())
    }

    /// Walks parent links up from `start`, looking for `ancestor`.
    fn is_ancestor_or_self(&self, ancestor: &NodeId, start: &NodeId) -> bool {
        let mut seen = HashSet::new();
        let mut cursor = self.nodes.get(start);
        while let Some(current) = cursor {
            if &current.id == ancestor {
                return true;
            }
            if !seen.insert(&current.id) {
                return false;
            }
            cursor = current.parent_id.as_ref().and_then(|p| self.nodes.get(p));
        }
        false
    }

    /// New depth for every node in the subtree if its root moved to `new_depth`.
    fn plan_depths<'a>(
        &'a self,
        subtree_root: &'a Node,
        new_depth: usize,
    ) -> Result<Vec<(NodeId, usize)>> {
        let base = subtree_root.depth;
        let mut planned = Vec::new();
        let mut seen = HashSet::new();
        let mut queue: VecDeque<&NodeId> = VecDeque::from([&subtree_root.id]);

        while let Some(id) = queue.pop_front() {
            if !seen.insert(id) {
                continue;
            }
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            let depth = new_depth + node.depth.saturating_sub(base);
            if depth > MAX_DEPTH {
                return Err(MindmapError::DepthExceeded {
                    text: node.text.clone(),
                    depth,
                });
            }
            planned.push((node.id.clone(), depth));
            queue.extend(node.children_ids.iter());
        }
        Ok(planned)
    }

    /// Checks every structural invariant, reporting the first violation.
    pub fn verify(&self) -> Result<()> {
        let invalid = |msg: String| MindmapError::InvalidFormat(msg);

        let Some(root_id) = &self.root else {
            if self.nodes.is_empty() {
                return Ok(());
            }
            return Err(invalid("nodes exist but no root is set".to_string()));
        };
        let root = self
            .nodes
            .get(root_id)
            .ok_or_else(|| invalid(format!("root node '{}' not found", root_id)))?;
        if root.parent_id.is_some() {
            return Err(invalid(format!("root node '{}' has a parent", root_id)));
        }
        if root.depth != 0 {
            return Err(invalid(format!("root node '{}' is not at depth 0", root_id)));
        }

        let mut seen = HashSet::from([root_id]);
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if node.depth > MAX_DEPTH {
                return Err(invalid(format!(
                    "node '{}' is at depth {}, beyond max depth ({})",
                    node.id, node.depth, MAX_DEPTH
                )));
            }
            for child_id in &node.children_ids {
                let child = self.nodes.get(child_id).ok_or_else(|| {
                    invalid(format!(
                        "node '{}' lists missing child '{}'",
                        node.id, child_id
                    ))
                })?;
                if child.parent_id.as_ref() != Some(&node.id) {
                    return Err(invalid(format!(
                        "node '{}' is listed under '{}' but points elsewhere",
                        child_id, node.id
                    )));
                }
                if child.depth != node.depth + 1 {
                    return Err(invalid(format!(
                        "node '{}' has depth {}, expected {}",
                        child_id,
                        child.depth,
                        node.depth + 1
                    )));
                }
                if !seen.insert(child_id) {
                    return Err(invalid(format!(
                        "node '{}' is listed more than once",
                        child_id
                    )));
                }
                stack.push(child);
            }
        }

        if seen.len() != self.nodes.len() {
            return Err(invalid(format!(
                "{} node(s) are not reachable from the root",
                self.nodes.len() - seen.len()
            )));
        }
        Ok(())
    }
}
