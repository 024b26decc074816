//! # Validation Module
//!
//! Coercion of form text into typed values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Handling Layers                              │
//! │                                                                         │
//! │  Layer 1: Terminal form                                                │
//! │  └── Free text in every field                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command handler                                              │
//! │  └── THIS MODULE: quantity text → i64                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: SQLite                                                       │
//! │  └── No constraints beyond INTEGER PRIMARY KEY                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Text fields are taken verbatim (empty is allowed).
//!
//! ## Usage
//! ```rust
//! use inventory_core::validation::{coerce_fields, coerce_quantity};
//!
//! assert_eq!(coerce_quantity("12").unwrap(), 12);
//! assert!(coerce_quantity("twelve").is_err());
//!
//! let fields = coerce_fields("N-1", "Tools", "Hammer", "5").unwrap();
//! assert_eq!(fields.quantity, 5);
//! ```

use std::num::IntErrorKind;

use crate::error::ValidationError;
use crate::types::ItemFields;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses quantity text as a whole number.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - An optional sign is accepted (`-2` is a valid count correction)
/// - Empty text, decimals and letters are rejected
/// - Values outside `i64` are rejected as out of range
pub fn coerce_quantity(text: &str) -> ValidationResult<i64> {
    let trimmed = text.trim();

    trimmed.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValidationError::OutOfRange {
            field: "quantity".to_string(),
            value: trimmed.to_string(),
        },
        IntErrorKind::Empty => ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must not be empty".to_string(),
        },
        _ => ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: format!("'{}' is not a whole number", trimmed),
        },
    })
}

/// Builds `ItemFields` from raw form text.
pub fn coerce_fields(
    number: &str,
    category: &str,
    name: &str,
    quantity: &str,
) -> ValidationResult<ItemFields> {
    let quantity = coerce_quantity(quantity)?;
    Ok(ItemFields::new(number, category, name, quantity))
}

// =============================================================================
// Unit Tests
// =============================================================================
