//! Shared test helpers for service integration tests.

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use sqlstash_core::traits::store::StoreBackend;
use sqlstash_service::{FolderService, SnippetService};
use sqlstash_store::LocalStore;

/// Test context: a tempdir-rooted store plus the services under test.
pub struct TestStash {
    /// Keeps the temporary root alive for the duration of the test.
    _root: TempDir,
    /// Absolute path of the store root.
    root_path: PathBuf,
    /// Snippet service under test.
    pub snippets: SnippetService,
    /// Folder service under test.
    pub folders: FolderService,
}

impl TestStash {
    /// Create a fresh store in a temporary directory.
    pub async fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create tempdir");
        let root_path = root.path().to_path_buf();

        let store: Arc<dyn StoreBackend> = Arc::new(
            LocalStore::new(root_path.to_str().expect("utf-8 tempdir path"))
                .await
                .expect("Failed to init store"),
        );

        Self {
            _root: root,
            root_path,
            snippets: SnippetService::new(Arc::clone(&store)),
            folders: FolderService::new(store),
        }
    }

    /// Absolute path of an entry relative to the store root.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root_path.join(rel)
    }

    /// Whether a file or directory physically exists under the root.
    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// Write a snippet body straight to disk, bypassing the services.
    pub fn write_raw_snippet(&self, rel: &str, sql: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        let body = serde_json::to_string_pretty(sql).expect("Failed to encode body");
        std::fs::write(&path, body).expect("Failed to write snippet file");
    }

    /// Read a persisted snippet body back from disk.
    pub fn read_raw_snippet(&self, rel: &str) -> String {
        let raw = std::fs::read_to_string(self.path(rel)).expect("Failed to read snippet file");
        serde_json::from_str(&raw).expect("Snippet body is not a JSON-quoted string")
    }

    /// Count the entries (files and directories) directly under a path.
    pub fn count_entries(&self, rel: &str) -> usize {
        std::fs::read_dir(self.path(rel))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}
