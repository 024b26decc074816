//! # Commands Module
//!
//! Everything a button or shortcut can trigger.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (Action, dispatch)
//! └── item.rs     ◄─── View, Add, Update, Delete handlers
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  key event ──► ui::input ──► Action                                     │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  dispatch(db, state, action)                                            │
//! │      │                                                                  │
//! │      │  db.run(item::add_item(db.inner(), state))   (block_on)          │
//! │      ▼                                                                  │
//! │  Ok(..)  ──► status line "Added item #7"                                │
//! │  Err(..) ──► status line "[ValidationError] ..." + log                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed command never ends the loop; only [`Action::Close`] does.

pub mod item;

use tracing::{debug, warn};

use crate::error::ApiResult;
use crate::state::{AppState, DbState};

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Reset the filter and show every row
    ViewAll,
    /// Re-run the view with the current filter choice
    ApplyFilter,
    Add,
    Update,
    Delete,
    Close,
}

/// Runs one action to completion and reports the outcome on the status line.
pub fn dispatch(db: &DbState, state: &mut AppState, action: Action) {
    debug!(?action, "Dispatching");

    let outcome: ApiResult<String> = match action {
        Action::ViewAll => db
            .run(item::view_all(db.inner(), state))
            .map(|count| showing(state, count)),
        Action::ApplyFilter => db
            .run(item::view_items(db.inner(), state))
            .map(|count| showing(state, count)),
        Action::Add => db
            .run(item::add_item(db.inner(), state))
            .map(|item| format!("Added item #{}", item.id)),
        Action::Update => db
            .run(item::update_visible(db.inner(), state))
            .map(|written| format!("Saved {}", items(written))),
        Action::Delete => db
            .run(item::delete_selected(db.inner(), state))
            .map(|deleted| match deleted {
                0 => "Nothing selected".to_string(),
                n => format!("Deleted {}", items(n)),
            }),
        Action::Close => {
            state.should_quit = true;
            return;
        }
    };

    match outcome {
        Ok(message) => state.info(message),
        Err(err) => {
            if err.is_validation() {
                warn!(?action, "Rejected input: {}", err.message);
            }
            state.error(err.to_string());
        }
    }
}

/// Fills the filter and shows every row. Called once before the first frame.
pub fn startup(db: &DbState, state: &mut AppState) {
    dispatch(db, state, Action::ViewAll);
}

fn showing(state: &AppState, count: usize) -> String {
    format!("Showing {} (filter: {})", items(count), state.filter.current())
}

fn items(count: usize) -> String {
    match count {
        1 => "1 item".to_string(),
        n => format!("{n} items"),
    }
}
