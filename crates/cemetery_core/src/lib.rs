//! Core domain logic for the cemetery burial-space catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod config;
pub mod db;
pub mod filter;
pub mod logging;
pub mod model;
pub mod persist;
pub mod stats;
pub mod store;

pub use config::{open_catalog, BootstrapError, CatalogConfig};
pub use filter::{apply_filters, FilterParseError, FilterSpec, StatusFilter};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::person::{NewPerson, Person, PersonId, PersonRole};
pub use model::space::{
    BurialSpace, BurialSpaceKind, BurialSpacePatch, Category, InputValidationError,
    NewBurialSpace, Priority, SpaceId, SpaceSummary,
};
pub use persist::memory::InMemoryPersistence;
pub use persist::sqlite::SqliteSlotStore;
pub use persist::{PersistError, PersistResult, PersistenceAdapter, DEFAULT_STORAGE_SLOT};
pub use stats::{compute_stats, compute_system_stats, SpaceStats, SystemStats};
pub use store::{
    CatalogStore, CatalogView, Clock, FixedClock, StoreError, StoreResult, SystemClock,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
