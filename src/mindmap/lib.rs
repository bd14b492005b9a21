//! # Mindmap Architecture
//!
//! Mindmap is a **UI-agnostic outliner library**: a depth-limited tree of text
//! nodes that can be created, edited, moved, searched, persisted and exported.
//! The CLI is one client of it, not the application itself.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - One-shot commands and the interactive shell              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (api.rs)                                     │
//! │  - One store, one file path, one map                        │
//! │  - Saves after every successful mutation                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validates requests, returns a tagged Outcome             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Tree (tree.rs, model.rs)                                   │
//! │  - Arena of nodes keyed by id, structural invariants        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - MapStore trait: FileStore, InMemoryStore                 │
//! │  - JSON document codec                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout or stderr and never exits
//! the process. Expected failures (a missing node, a move that would create a
//! cycle, a node past the depth ceiling) come back as
//! [`Outcome`](commands::Outcome) variants with a user-facing message.
//! Storage and codec failures are [`MindmapError`](error::MindmapError)s.
//!
//! Logging happens only at the I/O boundary: the stores, session persistence
//! and the CLI. The tree and the commands stay silent.
//!
//! ## Testing Strategy
//!
//! 1. **Tree and commands**: thorough unit tests, built on
//!    `store::memory::fixtures::MapFixture`.
//! 2. **Session** (`api.rs`): autosave and session-file tracking against
//!    `InMemoryStore`.
//! 3. **CLI**: end-to-end tests in `tests/` drive the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade
//! - [`commands`]: One module per action, plus `Outcome`
//! - [`tree`]: The node arena and its invariants
//! - [`model`]: `Node` and `NodeId`
//! - [`codec`]: JSON encoding of a map
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Data directory and default map file
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the shell and printing for the binary (not part of the lib API)

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod tree;
