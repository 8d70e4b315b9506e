//! Folder CRUD operations against the filesystem store.

use std::sync::Arc;

use tracing::info;

use sqlstash_core::error::AppError;
use sqlstash_core::result::AppResult;
use sqlstash_core::traits::store::StoreBackend;
use sqlstash_core::types::FolderId;
use sqlstash_entity::folder::Folder;

/// Manages folder CRUD. A folder IS a directory under the store root.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Filesystem backend.
    store: Arc<dyn StoreBackend>,
}

impl FolderService {
    /// Creates a new folder service over the given backend.
    pub fn new(store: Arc<dyn StoreBackend>) -> Self {
        Self { store }
    }

    /// Lists all folders.
    ///
    /// Only the immediate subdirectories of the store root are folders;
    /// directories nested below the first level are invisible to this call
    /// (though snippet listing does descend into them).
    pub async fn list_folders(&self) -> AppResult<Vec<Folder>> {
        let folders = self
            .store
            .list("")
            .await?
            .into_iter()
            .filter(|entry| entry.is_directory)
            .map(|entry| Folder::from_dir(entry.name))
            .collect();
        Ok(folders)
    }

    /// Creates a new folder, including any missing intermediate segments.
    pub async fn create_folder(&self, name: &str) -> AppResult<Folder> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        self.store.create_dir(name).await?;

        let folder = Folder::from_dir(name);

        info!(folder_id = %folder.id, name = %folder.name, "Folder created");

        Ok(folder)
    }

    /// Deletes a folder and everything beneath it.
    ///
    /// Strict, unlike snippet deletion: an id that resolves to no folder
    /// fails with `NotFound`, and a directory that vanished between
    /// resolution and removal is re-raised under the same taxonomy.
    pub async fn delete_folder(&self, id: FolderId) -> AppResult<()> {
        let folder = self
            .list_folders()
            .await?
            .into_iter()
            .find(|folder| folder.id == id)
            .ok_or_else(|| AppError::not_found(format!("Folder not found: {id}")))?;

        self.store.remove_dir(&folder.name).await.map_err(|e| {
            if e.is_not_found() {
                AppError::not_found(format!("Folder not found: {id}"))
            } else {
                e
            }
        })?;

        info!(folder_id = %id, name = %folder.name, "Folder deleted");

        Ok(())
    }
}
