//! Store backend trait — the raw filesystem contract of the snippet store.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Metadata about a single directory entry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StoreEntry {
    /// Entry name (file or directory base name).
    pub name: String,
    /// Path relative to the store root.
    pub path: String,
    /// Whether this entry is a directory.
    pub is_directory: bool,
}

/// Trait for the filesystem backend of the snippet store.
///
/// The trait is defined here in `sqlstash-core` and implemented in
/// `sqlstash-store`. All paths are relative to the store root. Absent
/// entities surface as `ErrorKind::NotFound`; every other I/O failure
/// surfaces as `ErrorKind::Storage` with the underlying error attached.
/// No operation retries internally — single-attempt semantics throughout.
#[async_trait]
pub trait StoreBackend: Send + Sync + std::fmt::Debug + 'static {
    /// Read a file into a UTF-8 string.
    async fn read_to_string(&self, path: &str) -> AppResult<String>;

    /// Write bytes to a file, creating or overwriting it. Missing parent
    /// directories are created.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Remove a file. An absent file is a `NotFound` error; callers that
    /// want idempotent deletion swallow that kind themselves.
    async fn remove_file(&self, path: &str) -> AppResult<()>;

    /// Remove a directory and all its contents recursively. An absent
    /// directory is a `NotFound` error.
    async fn remove_dir(&self, path: &str) -> AppResult<()>;

    /// Create a directory, including any missing intermediate segments.
    /// No error if it already exists.
    async fn create_dir(&self, path: &str) -> AppResult<()>;

    /// Check whether a file or directory exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// List the immediate entries of a directory (non-recursive). The empty
    /// path lists the store root.
    async fn list(&self, path: &str) -> AppResult<Vec<StoreEntry>>;
}
