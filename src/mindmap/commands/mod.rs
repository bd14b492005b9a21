//! # Command Layer
//!
//! Each action lives in its own submodule and exposes a `run` function that
//! validates a request against a [`MindMap`](crate::tree::MindMap), performs
//! the mutation if it is allowed, and returns an [`Outcome`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr, colors or prompts
//! - **Persistence policy**: saving after a mutation is the session's job
//!   (see [`crate::api`]); only `new`, `load`, `save` and `export` touch a store
//! - **Panicking or erroring on expected conditions**: a missing node, a depth
//!   overflow or an invalid move is an `Outcome` variant, not an `Err`
//!
//! ## Outcomes
//!
//! [`Outcome<T>`] has one variant per status. Only `Success` carries a payload,
//! and every variant carries the message a front end shows the user.
//!
//! ## Command Modules
//!
//! - [`new_map`]: Create a map with a root and write it out
//! - [`load`]: Read a map from storage
//! - [`save`]: Write a map to storage
//! - [`add`]: Add a node (under root by default)
//! - [`list`]: Render the tree with node ids
//! - [`delete`]: Delete a node and its subtree
//! - [`search`]: Find nodes by text, with their paths
//! - [`edit`]: Change a node's text
//! - [`move_node`]: Reparent a node
//! - [`export`]: Render the tree as a connector diagram

use crate::error::MindmapError;
use serde::Serialize;
use std::fmt;

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod load;
pub mod move_node;
pub mod new_map;
pub mod save;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Error,
    NotFound,
    AlreadyExists,
    MaxDepthReached,
    InvalidOperation,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Success => "SUCCESS",
            Status::Error => "ERROR",
            Status::NotFound => "NOT_FOUND",
            Status::AlreadyExists => "ALREADY_EXISTS",
            Status::MaxDepthReached => "MAX_DEPTH_REACHED",
            Status::InvalidOperation => "INVALID_OPERATION",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success { result: T, message: String },
    Error { message: String },
    NotFound { message: String },
    AlreadyExists { message: String },
    MaxDepthReached { message: String },
    InvalidOperation { message: String },
}

impl<T> Outcome<T> {
    pub fn success(result: T, message: impl Into<String>) -> Self {
        Self::Success {
            result,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    pub fn max_depth_reached(message: impl Into<String>) -> Self {
        Self::MaxDepthReached {
            message: message.into(),
        }
    }

    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            Self::Success { .. } => Status::Success,
            Self::Error { .. } => Status::Error,
            Self::NotFound { .. } => Status::NotFound,
            Self::AlreadyExists { .. } => Status::AlreadyExists,
            Self::MaxDepthReached { .. } => Status::MaxDepthReached,
            Self::InvalidOperation { .. } => Status::InvalidOperation,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. }
            | Self::Error { message }
            | Self::NotFound { message }
            | Self::AlreadyExists { message }
            | Self::MaxDepthReached { message }
            | Self::InvalidOperation { message } => message,
        }
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            Self::Success { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn into_result(self) -> Option<T> {
        match self {
            Self::Success { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Transforms the success payload, keeping the status and message.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success { result, message } => Outcome::Success {
                result: f(result),
                message,
            },
            Self::Error { message } => Outcome::Error { message },
            Self::NotFound { message } => Outcome::NotFound { message },
            Self::AlreadyExists { message } => Outcome::AlreadyExists { message },
            Self::MaxDepthReached { message } => Outcome::MaxDepthReached { message },
            Self::InvalidOperation { message } => Outcome::InvalidOperation { message },
        }
    }

    /// Replaces the message, keeping the status and payload.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::Success { result, .. } => Self::Success { result, message },
            Self::Error { .. } => Self::Error { message },
            Self::NotFound { .. } => Self::NotFound { message },
            Self::AlreadyExists { .. } => Self::AlreadyExists { message },
            Self::MaxDepthReached { .. } => Self::MaxDepthReached { message },
            Self::InvalidOperation { .. } => Self::InvalidOperation { message },
        }
    }
}

impl<T> From<MindmapError> for Outcome<T> {
    fn from(err: MindmapError) -> Self {
        let message = err.to_string();
        match err {
            MindmapError::NodeNotFound(_) | MindmapError::NotFound(_) => Self::not_found(message),
            MindmapError::AlreadyExists(_) | MindmapError::AlreadyInitialized => {
                Self::already_exists(message)
            }
            MindmapError::DepthExceeded { .. } => Self::max_depth_reached(message),
            MindmapError::InvalidOperation(_) => Self::invalid_operation(message),
            MindmapError::InvalidFormat(_)
            | MindmapError::Config(_)
            | MindmapError::Io(_)
            | MindmapError::Serialization(_) => Self::error(message),
        }
    }
}
