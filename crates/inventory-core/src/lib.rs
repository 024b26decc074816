//! # inventory-core: Pure Domain Logic for the Inventory Tool
//!
//! Types and rules shared by the storage layer and the desktop app.
//! Nothing in here touches the database, the file system or the terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Desktop Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Terminal Window (ratatui)                        │   │
//! │  │     Form Fields ──► Filter ──► Buttons ──► Item Table           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ key events                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Command Handlers                             │   │
//! │  │        add_item, update_visible, delete_selected, view          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ inventory-core (THIS CRATE) ★                     │   │
//! │  │   InventoryItem • ItemFields • CategoryFilter • coercion        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  inventory-db (Database Layer)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`types`] - Domain types (`InventoryItem`, `ItemFields`, `CategoryFilter`)
//! - [`error`] - Error types for domain operations
//! - [`validation`] - Coercion of form text into typed values
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::{CategoryFilter, ItemFields};
//! use inventory_core::validation::coerce_quantity;
//!
//! let quantity = coerce_quantity(" 5 ").unwrap();
//! let fields = ItemFields::new("N-1", "Tools", "Hammer", quantity);
//! assert_eq!(fields.quantity, 5);
//!
//! assert_eq!(CategoryFilter::from_choice(Some("All")), CategoryFilter::All);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Filter value meaning "no restriction".
///
/// A stored category that happens to be spelled `All` cannot be filtered on
/// by itself; choosing it shows every row.
pub const ALL_CATEGORIES: &str = "All";

/// Name of the single table the tool manages.
pub const INVENTORY_TABLE: &str = "inventory";
