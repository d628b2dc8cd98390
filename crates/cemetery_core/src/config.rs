//! Catalog configuration and bootstrap.
//!
//! # Responsibility
//! - Collect the few knobs a host needs: database path, slot name, logging.
//! - Wire logging, storage and the store together in one call.
//!
//! # Invariants
//! - Logging is initialized only when `log_dir` is set.
//! - The returned store has already loaded prior state.

use crate::db::{open_db, DbError};
use crate::logging::{default_log_level, init_logging, LoggingError};
use crate::persist::sqlite::SqliteSlotStore;
use crate::persist::{PersistError, DEFAULT_STORAGE_SLOT};
use crate::store::CatalogStore;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const DEFAULT_DB_FILE_NAME: &str = "cemetery.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// SQLite file holding the storage slot.
    pub db_path: PathBuf,
    /// Key under which the collection is stored.
    pub storage_slot: String,
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` leaves logging off.
    pub log_dir: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            storage_slot: DEFAULT_STORAGE_SLOT.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CatalogConfig {
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    pub fn with_storage_slot(mut self, slot: impl Into<String>) -> Self {
        self.storage_slot = slot.into();
        self
    }

    pub fn with_logging(mut self, level: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        self.log_level = level.into();
        self.log_dir = Some(log_dir.into());
        self
    }
}

#[derive(Debug)]
pub enum BootstrapError {
    Logging(LoggingError),
    Db(DbError),
    Persist(PersistError),
}

impl Display for BootstrapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Persist(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BootstrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Persist(err) => Some(err),
        }
    }
}

impl From<LoggingError> for BootstrapError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<DbError> for BootstrapError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<PersistError> for BootstrapError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// Opens a SQLite-backed catalog as described by `config`.
pub fn open_catalog(config: &CatalogConfig) -> Result<CatalogStore<SqliteSlotStore>, BootstrapError> {
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }

    let conn = open_db(&config.db_path)?;
    let adapter = SqliteSlotStore::with_slot(conn, config.storage_slot.as_str())?;
    Ok(CatalogStore::open(adapter))
}
