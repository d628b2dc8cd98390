//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `cemetery_core` linkage against a real SQLite slot.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `cemetery_cli [DB_PATH]` (defaults to `cemetery.sqlite3`).

use cemetery_core::{core_version, open_catalog, CatalogConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut config = CatalogConfig::default();
    if let Some(db_path) = std::env::args().nth(1) {
        config = config.with_db_path(db_path);
    }

    println!("cemetery_core version={}", core_version());

    match open_catalog(&config) {
        Ok(store) => {
            let stats = store.stats();
            println!(
                "catalog db={} slot={} total={} active={} inactive={}",
                config.db_path.display(),
                config.storage_slot,
                stats.total,
                stats.active,
                stats.inactive
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=cli_open module=cli status=error error={err}");
            eprintln!("failed to open catalog: {err}");
            ExitCode::FAILURE
        }
    }
}
