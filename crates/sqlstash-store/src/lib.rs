//! # sqlstash-store
//!
//! Filesystem backend for SQLStash. The [`LocalStore`] is the sole owner of
//! filesystem interaction: root bootstrap, directory listing, file
//! read/write/delete, and directory create/remove.

pub mod local;

pub use local::LocalStore;
