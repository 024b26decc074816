//! # State Module
//!
//! Everything the window and the command handlers share.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────────────────┐  ┌──────────────┐  │
//! │  │   DbState    │  │          AppState            │  │ ConfigState  │  │
//! │  │              │  │  ┌──────────┐ ┌───────────┐  │  │              │  │
//! │  │  Database    │  │  │FormState │ │ ListView  │  │  │  db path     │  │
//! │  │  + runtime   │  │  └──────────┘ └───────────┘  │  │  log path    │  │
//! │  │              │  │  ┌──────────┐ focus, status  │  │              │  │
//! │  │              │  │  │FilterSel.│                │  │              │  │
//! │  │              │  │  └──────────┘                │  │              │  │
//! │  └──────────────┘  └──────────────────────────────┘  └──────────────┘  │
//! │                                                                         │
//! │  Everything runs on the UI thread, so nothing here is locked.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod config;
mod db;
mod filter;
mod form;
mod list;

pub use app::{AppState, Button, Focus, StatusLevel, StatusLine};
pub use config::{ConfigState, DEFAULT_LOG_FILTER};
pub use db::DbState;
pub use filter::FilterSelector;
pub use form::{FormField, FormState};
pub use list::{cells, ListView, COLUMNS};
