//! Snippet CRUD and move/rename resolution.

pub mod relocate;
pub mod service;

pub use service::{SnippetService, UpdateSnippetRequest};
