//! In-memory persistence adapter.
//!
//! Holds the last saved payload as text, so it exercises the same codec
//! path as durable storage. Used by tests and ephemeral catalogs.

use crate::model::space::BurialSpace;
use crate::persist::codec::{decode_or_empty, encode_records};
use crate::persist::{PersistResult, PersistenceAdapter, DEFAULT_STORAGE_SLOT};

#[derive(Debug, Clone, Default)]
pub struct InMemoryPersistence {
    payload: Option<String>,
    save_count: usize,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slot with arbitrary text, malformed payloads included.
    pub fn with_raw_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
            save_count: 0,
        }
    }

    /// Last saved payload, if any.
    pub fn raw_payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Number of successful `save` calls since construction.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl PersistenceAdapter for InMemoryPersistence {
    fn load(&self) -> Vec<BurialSpace> {
        self.payload
            .as_deref()
            .map(|payload| decode_or_empty(DEFAULT_STORAGE_SLOT, payload))
            .unwrap_or_default()
    }

    fn save(&mut self, records: &[BurialSpace]) -> PersistResult<()> {
        self.payload = Some(encode_records(records)?);
        self.save_count += 1;
        Ok(())
    }
}
