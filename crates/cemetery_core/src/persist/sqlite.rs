//! SQLite-backed key-value slot adapter.
//!
//! # Responsibility
//! - Store the serialized collection as one row of `storage_slots`.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Construction rejects connections that were not migrated.
//! - Read failures degrade to an empty collection and are logged.

use crate::db::migrations::{current_user_version, latest_version};
use crate::model::space::BurialSpace;
use crate::persist::codec::{decode_or_empty, encode_records};
use crate::persist::{PersistError, PersistResult, PersistenceAdapter, DEFAULT_STORAGE_SLOT};
use crate::store::clock::{Clock, SystemClock};
use log::{debug, error, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::time::Instant;

/// Durable slot store over a migrated SQLite connection.
pub struct SqliteSlotStore {
    conn: Connection,
    slot: String,
}

impl SqliteSlotStore {
    /// Wraps a connection using the default `cemeteryItems` slot.
    pub fn try_new(conn: Connection) -> PersistResult<Self> {
        Self::with_slot(conn, DEFAULT_STORAGE_SLOT)
    }

    /// Wraps a connection using a caller-chosen slot name.
    pub fn with_slot(conn: Connection, slot: impl Into<String>) -> PersistResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_user_version(&conn)?;
        if actual_version < expected_version {
            return Err(PersistError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        Ok(Self {
            conn,
            slot: slot.into(),
        })
    }

    pub fn slot(&self) -> &str {
        self.slot.as_str()
    }

    /// Borrows the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Returns the stored payload text, if the slot exists.
    pub fn raw_payload(&self) -> PersistResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM storage_slots WHERE slot_key = ?1;",
                [self.slot.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }
}

impl PersistenceAdapter for SqliteSlotStore {
    fn load(&self) -> Vec<BurialSpace> {
        match self.raw_payload() {
            Ok(Some(payload)) => decode_or_empty(&self.slot, &payload),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(
                    "event=slot_load module=persist status=degraded slot={} error={}",
                    self.slot, err
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, records: &[BurialSpace]) -> PersistResult<()> {
        let started_at = Instant::now();
        let payload = encode_records(records)?;

        let result = self.conn.execute(
            "INSERT INTO storage_slots (slot_key, payload, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(slot_key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![self.slot.as_str(), payload, SystemClock.now_ms()],
        );

        match result {
            Ok(_) => {
                debug!(
                    "event=slot_save module=persist status=ok slot={} records={} duration_ms={}",
                    self.slot,
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=slot_save module=persist status=error slot={} records={} error={}",
                    self.slot,
                    records.len(),
                    err
                );
                Err(err.into())
            }
        }
    }
}
