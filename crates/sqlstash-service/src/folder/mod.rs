//! Folder CRUD.

pub mod service;

pub use service::FolderService;
