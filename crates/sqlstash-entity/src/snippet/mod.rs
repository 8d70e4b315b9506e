//! Snippet entity.

pub mod model;

pub use model::{CreateSnippet, Snippet, SnippetContent, Visibility, SNIPPET_EXTENSION};
