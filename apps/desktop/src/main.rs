//! # Inventory Desktop Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inventory Desktop                                │
//! │                                                                         │
//! │  main.rs ────► calls inventory_desktop_lib::run(), maps the outcome     │
//! │                to an exit code                                          │
//! │                                                                         │
//! │  lib.rs ─────► config, logging, database, event loop                    │
//! │                                                                         │
//! │  inventory.db (local file, one `inventory` table)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exits with status 1 when startup or the terminal fails.

use std::process::ExitCode;

fn main() -> ExitCode {
    match inventory_desktop_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Inventory Desktop exited with an error");
            eprintln!("inventory-desktop: {err}");
            ExitCode::FAILURE
        }
    }
}
