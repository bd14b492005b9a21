//! # Domain Model: Nodes and Node Identity
//!
//! A [`Node`] is a single line of text in the map. It carries no behavior: the
//! structural rules (depth ceiling, parent/child consistency) live in
//! [`crate::tree::MindMap`], which owns every node.
//!
//! ## Identity
//!
//! Node ids are opaque strings. New nodes get a v4 UUID; nodes loaded from a
//! file keep whatever id the file declares. Users type ids on the command line,
//! so [`NodeId`] borrows as `str` and every tree lookup accepts a plain `&str`.
//!
//! ## Stored Shape
//!
//! ```text
//! {"id": "...", "text": "...", "parent_id": "..." | null, "children_ids": [...], "depth": 0}
//! ```
//!
//! `parent_id`, `children_ids` and `depth` may be missing in a stored record
//! and default to `null`, `[]` and `0`. `id` and `text` are required.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub text: String,
    #[serde(default)]
    pub parent_id: Option<NodeId>,
    #[serde(default)]
    pub children_ids: Vec<NodeId>,
    #[serde(default)]
    pub depth: usize,
}

impl Node {
    pub fn new(text: impl Into<String>, parent_id: Option<NodeId>, depth: usize) -> Self {
        Self {
            id: NodeId::generate(),
            text: text.into(),
            parent_id,
            children_ids: Vec::new(),
            depth,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
