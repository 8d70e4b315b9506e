//! Snippet entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sqlstash_core::types::{ContentId, FolderId, SnippetId};

/// File extension under which snippet bodies are persisted.
pub const SNIPPET_EXTENSION: &str = "sql";

/// Default owner id applied to every materialized entity.
pub const DEFAULT_OWNER_ID: i64 = 1;

/// Default project id applied to every materialized entity.
pub const DEFAULT_PROJECT_ID: i64 = 1;

/// Who can see a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible to the owning user only.
    #[default]
    User,
    /// Visible to everyone in the project.
    Public,
}

impl Visibility {
    /// Return the visibility as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Public => "public",
        }
    }
}

/// The SQL body of a snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetContent {
    /// Content revision identifier. Random — not stable across reads.
    pub id: ContentId,
    /// The SQL text, stored verbatim.
    pub sql: String,
}

/// A named unit of SQL text.
///
/// Only `name`, `content.sql`, and `folder_id` are authoritative: they are
/// the fields recovered from disk. Everything else is rebuilt with defaults
/// on every read, so edits to those fields are not durable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    /// Identifier derived from the snippet's file name (not its full path).
    /// Stable only as long as the name is unchanged.
    pub id: SnippetId,
    /// Snippet name, unique within its containing folder (enforced only by
    /// filename collision on disk).
    pub name: String,
    /// Free-form description. Not persisted.
    pub description: Option<String>,
    /// Favorite flag. Not persisted.
    pub favorite: bool,
    /// Visibility. Not persisted.
    pub visibility: Visibility,
    /// Owning project. Not persisted.
    pub project_id: i64,
    /// Owning user. Not persisted.
    pub owner_id: i64,
    /// Containing folder; `None` means the store root.
    pub folder_id: Option<FolderId>,
    /// The SQL body.
    pub content: SnippetContent,
    /// When the entity was built (not when the file was created).
    pub created_at: DateTime<Utc>,
    /// When the entity was built.
    pub updated_at: DateTime<Utc>,
}

impl Snippet {
    /// Build a snippet from its on-disk representation.
    ///
    /// `file_name` is the base name of the backing file, extension included;
    /// the id is derived from it, and the `name` is the same string with one
    /// trailing `.sql` suffix stripped. All non-persisted fields get their
    /// defaults and fresh timestamps.
    pub fn from_file(file_name: &str, sql: impl Into<String>, folder_id: Option<FolderId>) -> Self {
        let now = Utc::now();
        Self {
            id: SnippetId::from_name(file_name),
            name: strip_extension(file_name).to_string(),
            description: None,
            favorite: false,
            visibility: Visibility::default(),
            project_id: DEFAULT_PROJECT_ID,
            owner_id: DEFAULT_OWNER_ID,
            folder_id,
            content: SnippetContent {
                id: ContentId::new(),
                sql: sql.into(),
            },
            created_at: now,
            updated_at: now,
        }
    }

    /// The base name of the file backing this snippet.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, SNIPPET_EXTENSION)
    }
}

/// Data required to create a new snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSnippet {
    /// Snippet name (without the `.sql` extension).
    pub name: String,
    /// The SQL text.
    pub sql: String,
    /// Containing folder; `None` places the snippet at the store root.
    pub folder_id: Option<FolderId>,
}

/// Strip one trailing `.sql` suffix, if present.
fn strip_extension(file_name: &str) -> &str {
    file_name
        .strip_suffix(SNIPPET_EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(file_name)
}
