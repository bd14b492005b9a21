use crate::model::NodeId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MindmapError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Mind map already has a root node")]
    AlreadyInitialized,

    #[error("'{text}' would be at depth {depth}, exceeding max depth ({})", crate::tree::MAX_DEPTH)]
    DepthExceeded { text: String, depth: usize },

    #[error("{0}")]
    InvalidOperation(String),

    #[error("Invalid map data: {0}")]
    InvalidFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MindmapError>;
