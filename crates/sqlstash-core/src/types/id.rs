//! Newtype wrappers around [`uuid::Uuid`] for all domain entity identifiers.
//!
//! Using distinct types prevents accidentally passing a `FolderId` where a
//! `SnippetId` is expected. Snippet and folder identifiers are not assigned
//! at creation and stored — they are *derived* from names via
//! [`deterministic_uuid`], so the same name always maps to the same id and
//! no lookup table is needed. The flip side is that renaming an entity
//! changes its identity; callers that need rename-stable identity must keep
//! their own id-to-path index.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Derive a UUID from an arbitrary string, deterministically.
///
/// The SHA-256 digest of the input seeds the 16 random bytes of a v4 UUID;
/// [`uuid::Builder::from_random_bytes`] then stamps the version nibble (`4`)
/// and the RFC 4122 variant bits, so the result renders in the canonical
/// 8-4-4-4-12 layout. Pure and total over all inputs, including the empty
/// string. Distinct inputs collide only if SHA-256 does.
pub fn deterministic_uuid(name: &str) -> Uuid {
    let digest = Sha256::digest(name.as_bytes());
    let mut seed = [0u8; 16];
    seed.copy_from_slice(&digest[..16]);
    uuid::Builder::from_random_bytes(seed).into_uuid()
}

/// Macro to define a newtype ID wrapper around `Uuid`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Derive the identifier for the given name.
            ///
            /// Deterministic: the same name always yields the same id.
            pub fn from_name(name: &str) -> Self {
                Self(deterministic_uuid(name))
            }

            /// Create an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Return the inner UUID value.
            pub fn into_uuid(self) -> Uuid {
                self.0
            }

            /// Return a reference to the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a snippet, derived from its file name.
    SnippetId
);

define_id!(
    /// Unique identifier for a folder, derived from its directory name.
    FolderId
);

define_id!(
    /// Identifier for a snippet's content revision. Random — a fresh one is
    /// minted every time a snippet entity is built.
    ContentId
);
