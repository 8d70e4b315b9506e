//! Core trait definitions.

pub mod store;

pub use store::{StoreBackend, StoreEntry};
