//! # Inventory Desktop Library
//!
//! Core library for the inventory window: a single-screen CRUD front end over
//! one SQLite table.
//!
//! ## Module Organization
//! ```text
//! inventory_desktop_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database + runtime wrapper
//! │   ├── app.rs      ◄─── Focus, buttons, status line
//! │   ├── form.rs     ◄─── The four entry fields
//! │   ├── list.rs     ◄─── Displayed rows, cursor, marks
//! │   ├── filter.rs   ◄─── Category selector
//! │   └── config.rs   ◄─── Paths from the environment
//! ├── commands/
//! │   ├── mod.rs      ◄─── Action + dispatch
//! │   └── item.rs     ◄─── View/Add/Update/Delete handlers
//! ├── ui/
//! │   ├── mod.rs      ◄─── Terminal setup & event loop
//! │   ├── input.rs    ◄─── Key map
//! │   └── render.rs   ◄─── Frame layout
//! └── error.rs        ◄─── ApiError / AppError
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod ui;

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::AppError;
use inventory_db::DbConfig;
use state::{AppState, ConfigState, DbState, DEFAULT_LOG_FILTER};

/// Runs the application until the window is closed.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Read configuration ───────────────────────────────────────────────► │
/// │     • INVENTORY_DB_PATH, INVENTORY_LOG_PATH, defaults otherwise         │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to the log file       │
/// │     • Default: info,inventory=debug,sqlx=warn; override with RUST_LOG   │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite, one connection, table created if missing                  │
/// │                                                                         │
/// │  4. Populate filter and load the "All" view                           │
/// │                                                                         │
/// │  5. Event loop until Close, then close the connection                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), AppError> {
    let config = ConfigState::from_env();
    init_tracing(&config)?;

    info!(?config, "Starting Inventory Desktop");

    let db = DbState::open(DbConfig::new(config.database_path.clone()))?;

    let mut state = AppState::new();
    commands::startup(&db, &mut state);

    let result = ui::run(&db, &mut state);

    db.close();
    info!("Database connection closed");
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=inventory_db=trace` - Show trace for the storage crate only
/// - Default: [`DEFAULT_LOG_FILTER`]
fn init_tracing(config: &ConfigState) -> Result<(), AppError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
        .map_err(|e| AppError::Logging(format!("{}: {e}", config.log_path.display())))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
