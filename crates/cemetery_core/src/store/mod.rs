//! Catalog record store.
//!
//! # Responsibility
//! - Own the ordered burial-space collection and expose CRUD.
//! - Persist the full collection through an injected adapter after every write.
//! - Re-derive list/stats views on request.
//!
//! # Invariants
//! - Ids are unique for the store lifetime.
//! - Only the store holds a mutable handle to the collection.

pub mod catalog_store;
pub mod clock;

pub use catalog_store::{CatalogStore, CatalogView, StoreError, StoreResult};
pub use clock::{Clock, FixedClock, SystemClock};
