//! JSON payload codec for the stored collection.

use crate::model::space::BurialSpace;
use crate::persist::PersistResult;
use log::warn;

/// Serializes the full collection to the slot payload.
pub fn encode_records(records: &[BurialSpace]) -> PersistResult<String> {
    Ok(serde_json::to_string(records)?)
}

/// Parses a slot payload strictly.
pub fn decode_records(payload: &str) -> serde_json::Result<Vec<BurialSpace>> {
    serde_json::from_str(payload)
}

/// Parses a slot payload, degrading to an empty collection on bad input.
///
/// A JSON `null` payload is treated as "no prior state".
pub fn decode_or_empty(slot: &str, payload: &str) -> Vec<BurialSpace> {
    if payload.trim().is_empty() || payload.trim() == "null" {
        return Vec::new();
    }

    match decode_records(payload) {
        Ok(records) => records,
        Err(err) => {
            warn!(
                "event=slot_decode module=persist status=degraded slot={} payload_len={} error_line={} error_column={}",
                slot,
                payload.len(),
                err.line(),
                err.column()
            );
            Vec::new()
        }
    }
}
