//! Folder entity model.

use serde::{Deserialize, Serialize};

use sqlstash_core::types::FolderId;

use crate::snippet::model::{DEFAULT_OWNER_ID, DEFAULT_PROJECT_ID};

/// A named grouping of snippets, backed by a directory under the store root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    /// Identifier derived from the folder's name.
    pub id: FolderId,
    /// Directory name. Must be unique among siblings for the derived id to
    /// stay meaningful.
    pub name: String,
    /// Parent folder. The store models a single level of folder
    /// association, so this is always `None` in practice.
    pub parent_id: Option<FolderId>,
    /// Owning user. Not persisted.
    pub owner_id: i64,
    /// Owning project. Not persisted.
    pub project_id: i64,
}

impl Folder {
    /// Build a folder from its directory name.
    pub fn from_dir(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: FolderId::from_name(&name),
            name,
            parent_id: None,
            owner_id: DEFAULT_OWNER_ID,
            project_id: DEFAULT_PROJECT_ID,
        }
    }

    /// Check if this is a root-level folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dir_derives_id() {
        let a = Folder::from_dir("Reports");
        let b = Folder::from_dir("Reports");
        assert_eq!(a.id, b.id);
        assert_ne!(a.id, Folder::from_dir("Archive").id);
    }

    #[test]
    fn test_from_dir_defaults() {
        let folder = Folder::from_dir("Reports");
        assert_eq!(folder.name, "Reports");
        assert!(folder.is_root());
        assert_eq!(folder.owner_id, DEFAULT_OWNER_ID);
        assert_eq!(folder.project_id, DEFAULT_PROJECT_ID);
    }
}
