//! Path resolution for snippet moves and renames.
//!
//! A snippet's storage path is a function of its name and its containing
//! folder, so an update that changes either one relocates the backing file.
//! [`MovePlan::compute`] turns the current and effective name/folder pair
//! into the old and new relative paths; the service then writes the new
//! path and deletes the old one when they differ.

use sqlstash_core::error::AppError;
use sqlstash_core::result::AppResult;
use sqlstash_core::types::FolderId;
use sqlstash_entity::folder::Folder;
use sqlstash_entity::snippet::SNIPPET_EXTENSION;

/// The backing file name for a snippet name.
pub(crate) fn snippet_file_name(name: &str) -> String {
    format!("{name}.{SNIPPET_EXTENSION}")
}

/// The storage path of a snippet, relative to the store root.
pub(crate) fn snippet_path(folder: Option<&Folder>, name: &str) -> String {
    match folder {
        Some(folder) => format!("{}/{}", folder.name, snippet_file_name(name)),
        None => snippet_file_name(name),
    }
}

/// Resolve a folder id against the folder list, leniently.
///
/// An id that no longer resolves to a real folder is treated as the store
/// root. Used for the *current* location of a snippet, where a stale or
/// deeply nested folder id must not wedge the operation.
pub(crate) fn resolve_folder_lenient(
    folders: &[Folder],
    id: Option<FolderId>,
) -> Option<&Folder> {
    id.and_then(|id| folders.iter().find(|folder| folder.id == id))
}

/// Resolve a folder id against the folder list, strictly.
///
/// Used for the *target* location: an id that does not resolve fails with
/// `NotFound` naming the id, before anything is written.
pub(crate) fn resolve_folder_strict(
    folders: &[Folder],
    id: Option<FolderId>,
) -> AppResult<Option<&Folder>> {
    match id {
        None => Ok(None),
        Some(id) => folders
            .iter()
            .find(|folder| folder.id == id)
            .map(Some)
            .ok_or_else(|| AppError::not_found(format!("Folder not found: {id}"))),
    }
}

/// The old and new storage paths of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    /// Where the snippet file currently lives.
    pub source: String,
    /// Where the snippet file will live after the update.
    pub dest: String,
}

impl MovePlan {
    /// Compute the path transition for an update.
    ///
    /// The source is resolved from the snippet's current name and folder id
    /// (lenient — an unresolvable folder falls back to the root); the
    /// destination from the effective name and folder id (strict).
    pub fn compute(
        folders: &[Folder],
        current_name: &str,
        current_folder_id: Option<FolderId>,
        effective_name: &str,
        effective_folder_id: Option<FolderId>,
    ) -> AppResult<Self> {
        let current_folder = resolve_folder_lenient(folders, current_folder_id);
        let target_folder = resolve_folder_strict(folders, effective_folder_id)?;

        Ok(Self {
            source: snippet_path(current_folder, current_name),
            dest: snippet_path(target_folder, effective_name),
        })
    }

    /// Whether the update relocates the file (and the old copy must go).
    pub fn relocates(&self) -> bool {
        self.source != self.dest
    }
}
