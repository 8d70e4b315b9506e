//! # sqlstash-service
//!
//! Business logic service layer for SQLStash. Services materialize snippet
//! and folder entities from the filesystem backend, orchestrate CRUD
//! operations, and resolve the path transitions behind renames and moves.
//!
//! Services follow constructor injection — the backend is provided at
//! construction time via an `Arc` reference. There is no locking and no
//! cross-request coordination: the filesystem is the only shared state,
//! last write wins, and multi-step operations are not atomic.

pub mod folder;
pub mod snippet;

pub use folder::FolderService;
pub use snippet::{SnippetService, UpdateSnippetRequest};
