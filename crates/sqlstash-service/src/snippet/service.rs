//! Snippet CRUD operations against the filesystem store.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info};

use sqlstash_core::error::{AppError, ErrorKind};
use sqlstash_core::result::AppResult;
use sqlstash_core::traits::store::StoreBackend;
use sqlstash_core::types::{FolderId, SnippetId};
use sqlstash_entity::snippet::{CreateSnippet, Snippet, SNIPPET_EXTENSION};

use crate::folder::FolderService;

use super::relocate::{self, MovePlan};

/// Handles snippet CRUD against the store backend.
///
/// The directory tree is the index: every read operation rescans the store,
/// and lookups by id are linear in the total snippet count. Acceptable at
/// local-development scale.
#[derive(Debug, Clone)]
pub struct SnippetService {
    /// Filesystem backend.
    store: Arc<dyn StoreBackend>,
    /// Folder service, used to resolve folder ids to directory names.
    folders: FolderService,
}

/// Data for updating a snippet.
///
/// Every field defaults to "keep the existing value". The folder field is
/// doubly optional: `None` keeps the current folder, `Some(None)` moves the
/// snippet to the store root, `Some(Some(id))` moves it into that folder.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateSnippetRequest {
    /// New snippet name.
    pub name: Option<String>,
    /// New SQL body.
    pub sql: Option<String>,
    /// New containing folder.
    pub folder_id: Option<Option<FolderId>>,
}

impl SnippetService {
    /// Creates a new snippet service over the given backend.
    pub fn new(store: Arc<dyn StoreBackend>) -> Self {
        let folders = FolderService::new(Arc::clone(&store));
        Self { store, folders }
    }

    /// Lists every snippet in the store.
    ///
    /// Walks the directory tree depth-first. Files in a subdirectory are
    /// tagged with the derived id of their *immediate* parent directory —
    /// only one level of folder association is tracked, so a snippet two
    /// levels deep still carries the innermost directory's id. Root-level
    /// files carry no folder id. Order reflects traversal order and is not
    /// guaranteed stable. Any directory or file read failure propagates;
    /// there are no partial results.
    pub async fn list_snippets(&self) -> AppResult<Vec<Snippet>> {
        let suffix = format!(".{SNIPPET_EXTENSION}");
        let mut snippets = Vec::new();
        let mut pending: Vec<(String, Option<FolderId>)> = vec![(String::new(), None)];

        while let Some((dir, folder_id)) = pending.pop() {
            for entry in self.store.list(&dir).await? {
                if entry.is_directory {
                    pending.push((entry.path, Some(FolderId::from_name(&entry.name))));
                } else if entry.name.ends_with(&suffix) {
                    let raw = self.store.read_to_string(&entry.path).await?;
                    let sql = decode_body(&raw, &entry.path)?;
                    snippets.push(Snippet::from_file(&entry.name, sql, folder_id));
                }
            }
        }

        Ok(snippets)
    }

    /// Gets a single snippet by id.
    ///
    /// Convenience lookup over [`Self::list_snippets`]; O(total snippet
    /// count) per call.
    pub async fn get_snippet(&self, id: SnippetId) -> AppResult<Snippet> {
        self.list_snippets()
            .await?
            .into_iter()
            .find(|snippet| snippet.id == id)
            .ok_or_else(|| AppError::not_found(format!("Snippet not found: {id}")))
    }

    /// Creates a new snippet.
    ///
    /// The target folder is resolved strictly: a `folder_id` that does not
    /// match an existing folder fails with `NotFound` before anything is
    /// written. The returned snippet's identity is derived from the file
    /// name — it is independent of anything the caller supplies.
    pub async fn create_snippet(&self, req: CreateSnippet) -> AppResult<Snippet> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Snippet name cannot be empty"));
        }

        let folders = self.folders.list_folders().await?;
        let folder = relocate::resolve_folder_strict(&folders, req.folder_id)?;

        let path = relocate::snippet_path(folder, &req.name);
        self.store.write(&path, encode_body(&req.sql)?).await?;

        let snippet = Snippet::from_file(
            &relocate::snippet_file_name(&req.name),
            req.sql,
            folder.map(|folder| folder.id),
        );

        info!(snippet_id = %snippet.id, path = %path, "Snippet created");

        Ok(snippet)
    }

    /// Updates a snippet's content, name, and/or containing folder.
    ///
    /// Each field of the request defaults to the existing value. The old
    /// path is resolved from the snippet's current folder id leniently (a
    /// folder id that no longer resolves is treated as the root); the new
    /// path from the effective folder id strictly (`NotFound` short-circuits
    /// before any write). The body is written to the new path, then the old
    /// file is deleted when the paths differ — its absence is tolerated, but
    /// any other deletion failure surfaces as `PartialMove`, meaning the
    /// content now exists at both paths.
    ///
    /// Because identity is name-derived, renaming a snippet changes its id;
    /// the returned snippet carries the new one.
    pub async fn update_snippet(
        &self,
        id: SnippetId,
        req: UpdateSnippetRequest,
    ) -> AppResult<Snippet> {
        let current = self.get_snippet(id).await?;

        if let Some(name) = &req.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Snippet name cannot be empty"));
            }
        }

        let effective_name = req.name.unwrap_or_else(|| current.name.clone());
        let effective_sql = req.sql.unwrap_or_else(|| current.content.sql.clone());
        let effective_folder_id = match req.folder_id {
            Some(folder_id) => folder_id,
            None => current.folder_id,
        };

        let folders = self.folders.list_folders().await?;
        let plan = MovePlan::compute(
            &folders,
            &current.name,
            current.folder_id,
            &effective_name,
            effective_folder_id,
        )?;

        self.store.write(&plan.dest, encode_body(&effective_sql)?).await?;

        if plan.relocates() {
            match self.store.remove_file(&plan.source).await {
                Ok(()) => {}
                Err(e) if e.kind == ErrorKind::NotFound => {
                    // Old copy already gone; nothing to clean up.
                    debug!(path = %plan.source, "Old snippet file already absent");
                }
                Err(e) => {
                    return Err(AppError::with_source(
                        ErrorKind::PartialMove,
                        format!(
                            "Snippet written to {} but the old copy at {} could not be removed",
                            plan.dest, plan.source
                        ),
                        e,
                    ));
                }
            }
        }

        let snippet = Snippet::from_file(
            &relocate::snippet_file_name(&effective_name),
            effective_sql,
            effective_folder_id,
        );

        info!(
            snippet_id = %snippet.id,
            from = %plan.source,
            to = %plan.dest,
            "Snippet updated"
        );

        Ok(snippet)
    }

    /// Deletes a snippet by id. Idempotent: an id that resolves to nothing,
    /// or a file that is already gone, is a successful no-op. Any other
    /// I/O failure propagates.
    pub async fn delete_snippet(&self, id: SnippetId) -> AppResult<()> {
        let Some(snippet) = self
            .list_snippets()
            .await?
            .into_iter()
            .find(|snippet| snippet.id == id)
        else {
            debug!(snippet_id = %id, "Snippet already absent, nothing to delete");
            return Ok(());
        };

        let folders = self.folders.list_folders().await?;
        let folder = relocate::resolve_folder_lenient(&folders, snippet.folder_id);
        let path = relocate::snippet_path(folder, &snippet.name);

        match self.store.remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind == ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }

        info!(snippet_id = %id, path = %path, "Snippet deleted");

        Ok(())
    }
}

/// Encode a SQL body for persistence: a JSON-quoted string, pretty-printed.
fn encode_body(sql: &str) -> AppResult<Bytes> {
    let encoded = serde_json::to_string_pretty(sql)?;
    Ok(Bytes::from(encoded))
}

/// Decode a persisted snippet body.
fn decode_body(raw: &str, path: &str) -> AppResult<String> {
    serde_json::from_str(raw).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("Snippet body is not a JSON-quoted string: {path}"),
            e,
        )
    })
}
