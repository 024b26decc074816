//! # Item Commands
//!
//! One handler per button. Each reads the form and list state, performs its
//! statements, and refreshes what the window shows.
//!
//! ## Update Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    update_visible                                       │
//! │                                                                         │
//! │  form loaded from  ──yes──► copy form values into that displayed row    │
//! │  the cursor row?                                                        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  for every displayed row (in order):                                   │
//! │      UPDATE inventory SET ... WHERE id = row.id                        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  refresh filter choices, re-run current filter                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Every visible row is re-saved, not only the edited one.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::ApiResult;
use crate::state::AppState;
use inventory_core::InventoryItem;
use inventory_db::Database;

/// Re-queries with the current filter and repopulates the list.
///
/// ## Returns
/// Number of rows now shown.
pub async fn view_items(db: &Database, state: &mut AppState) -> ApiResult<usize> {
    let start = Instant::now();
    let filter = state.filter.filter();

    let rows = db.items().list(&filter).await?;
    let count = rows.len();
    state.replace_rows(rows);

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count,
        filter = %filter.label(),
        "view_items complete"
    );
    Ok(count)
}

/// Resets the filter to `"All"` and shows every row.
pub async fn view_all(db: &Database, state: &mut AppState) -> ApiResult<usize> {
    state.filter.reset();
    populate_filter(db, state).await?;
    view_items(db, state).await
}

/// Rebuilds the filter choices from storage.
///
/// ## Returns
/// `true` if the previous choice disappeared and the selector fell back to
/// `"All"`.
pub async fn populate_filter(db: &Database, state: &mut AppState) -> ApiResult<bool> {
    let categories = db.items().distinct_categories().await?;
    debug!(count = categories.len(), "Loaded filter categories");

    Ok(state.filter.set_categories(categories))
}

/// Inserts the form values as a new row.
pub async fn add_item(db: &Database, state: &mut AppState) -> ApiResult<InventoryItem> {
    let fields = state.form.to_fields()?;

    let item = db.items().insert(&fields).await?;
    info!(id = item.id, "add_item complete");

    // The text now describes the new row, not the one under the cursor
    state.form.detach();

    populate_filter(db, state).await?;
    view_items(db, state).await?;
    Ok(item)
}

/// Re-saves every displayed row, with the form applied to the cursor row
/// when the form was loaded from that row.
///
/// ## Returns
/// Number of rows written.
pub async fn update_visible(db: &Database, state: &mut AppState) -> ApiResult<usize> {
    if state.form_matches_cursor() {
        let fields = state.form.to_fields()?;
        if let Some(id) = state.list.apply_to_cursor(fields) {
            debug!(id, "Form values applied to selected row");
        }
    }

    let rows = state.list.rows().to_vec();
    let mut written = 0;
    for row in &rows {
        if db.items().update(row.id, &row.fields()).await? {
            written += 1;
        } else {
            debug!(id = row.id, "Row vanished before update");
        }
    }
    info!(written, shown = rows.len(), "update_visible complete");

    populate_filter(db, state).await?;
    view_items(db, state).await?;
    Ok(written)
}

/// Deletes every selected row and removes it from the display.
///
/// ## Returns
/// Number of rows removed. `0` when nothing is selected.
pub async fn delete_selected(db: &Database, state: &mut AppState) -> ApiResult<usize> {
    let selection = state.list.selection();
    if selection.is_empty() {
        debug!("delete_selected with empty selection");
        return Ok(0);
    }

    let mut deleted = 0;
    for id in selection {
        if db.items().delete(id).await? {
            deleted += 1;
        }
        state.remove_row(id);
    }
    state.list.clear_marks();
    info!(deleted, "delete_selected complete");

    if populate_filter(db, state).await? {
        view_items(db, state).await?;
    }
    Ok(deleted)
}

// =============================================================================
// Unit Tests
// =============================================================================
