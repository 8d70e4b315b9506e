//! # sqlstash-entity
//!
//! Domain entity models for SQLStash. Entities are *materialized* from the
//! filesystem rather than loaded from a database: only a snippet's name,
//! SQL body, and containing folder survive a round trip through disk;
//! everything else is rebuilt with defaults on every read.

pub mod folder;
pub mod snippet;

pub use folder::Folder;
pub use snippet::{CreateSnippet, Snippet, SnippetContent, Visibility};
