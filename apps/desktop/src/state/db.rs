//! # Database State
//!
//! Wraps the `Database` handle together with the runtime that drives it.
//!
//! ## Runtime
//! sqlx is async, the window is not. Each command handler future is driven
//! to completion with `block_on` on a current-thread runtime, so a statement
//! always finishes before the next key event is read.
//!
//! ## Usage
//! ```rust,ignore
//! let db = DbState::open(DbConfig::new("inventory.db"))?;
//! let rows = db.run(db.inner().items().list(&CategoryFilter::All))?;
//! db.close();
//! ```

use std::future::Future;

use tokio::runtime::{Builder, Runtime};
use tracing::info;

use crate::error::AppError;
use inventory_db::{Database, DbConfig};

/// The process-wide storage handle plus its executor.
#[derive(Debug)]
pub struct DbState {
    db: Database,
    runtime: Runtime,
}

impl DbState {
    /// Builds the runtime and opens the database (schema included).
    pub fn open(config: DbConfig) -> Result<Self, AppError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let db = runtime.block_on(Database::new(config))?;

        info!("Database connected and schema ready");
        Ok(DbState { db, runtime })
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }

    /// Runs a future to completion on the UI thread.
    pub fn run<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Closes the connection. Called once, on shutdown.
    pub fn close(&self) {
        self.run(self.db.close());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory_and_close() {
        let db = DbState::open(DbConfig::in_memory()).unwrap();
        assert!(db.run(db.inner().health_check()));

        db.close();
        assert!(!db.run(db.inner().health_check()));
    }
}
