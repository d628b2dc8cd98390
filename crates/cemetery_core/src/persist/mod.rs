//! Persistence adapters for the burial-space collection.
//!
//! # Responsibility
//! - Define the `load`/`save` contract the catalog store depends on.
//! - Serialize the full collection as JSON under one named slot.
//!
//! # Invariants
//! - `load` never fails: missing or malformed state degrades to empty.
//! - `save` always writes the whole collection, never a delta.

use crate::db::DbError;
use crate::model::space::BurialSpace;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod codec;
pub mod memory;
pub mod sqlite;

/// Slot name used when callers do not pick one.
pub const DEFAULT_STORAGE_SLOT: &str = "cemeteryItems";

pub type PersistResult<T> = Result<T, PersistError>;

/// Write-side persistence failure.
#[derive(Debug)]
pub enum PersistError {
    Db(DbError),
    Encode(serde_json::Error),
    /// Connection has not been migrated to the slot schema.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode catalog payload: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "storage connection not initialized: expected schema version {expected_version}, got {actual_version}"
            ),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<DbError> for PersistError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Durable key-value storage for the catalog collection.
pub trait PersistenceAdapter {
    /// Returns the stored collection in insertion order, or empty.
    fn load(&self) -> Vec<BurialSpace>;
    /// Replaces the stored collection.
    fn save(&mut self, records: &[BurialSpace]) -> PersistResult<()>;
}

impl<P: PersistenceAdapter + ?Sized> PersistenceAdapter for Box<P> {
    fn load(&self) -> Vec<BurialSpace> {
        (**self).load()
    }

    fn save(&mut self, records: &[BurialSpace]) -> PersistResult<()> {
        (**self).save(records)
    }
}
