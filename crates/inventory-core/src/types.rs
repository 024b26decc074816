//! # Domain Types
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  InventoryItem  │   │   ItemFields    │   │ CategoryFilter  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (storage)   │   │  number         │   │  All            │       │
//! │  │  number         │   │  category       │   │  Category(text) │       │
//! │  │  category       │   │  name           │   └─────────────────┘       │
//! │  │  name           │   │  quantity       │                             │
//! │  │  quantity       │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `InventoryItem` is what storage hands back; `ItemFields` is the mutable
//! part the user edits. The `id` is assigned by SQLite on insert and never
//! changes afterwards.

use serde::{Deserialize, Serialize};

use crate::ALL_CATEGORIES;

// =============================================================================
// Inventory Item
// =============================================================================

/// One row of the `inventory` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InventoryItem {
    /// Row id assigned by storage (INTEGER PRIMARY KEY).
    pub id: i64,

    /// Free-form identifier or stock code.
    pub number: String,

    /// Free-form grouping key, also the filter facet.
    pub category: String,

    /// Free-form description.
    pub name: String,

    /// Count of units on hand.
    pub quantity: i64,
}

impl InventoryItem {
    /// Builds an item from an id and its mutable fields.
    pub fn from_fields(id: i64, fields: ItemFields) -> Self {
        InventoryItem {
            id,
            number: fields.number,
            category: fields.category,
            name: fields.name,
            quantity: fields.quantity,
        }
    }

    /// Returns a copy of the mutable fields.
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            number: self.number.clone(),
            category: self.category.clone(),
            name: self.name.clone(),
            quantity: self.quantity,
        }
    }

    /// Overwrites the mutable fields, keeping `id`.
    pub fn apply(&mut self, fields: ItemFields) {
        self.number = fields.number;
        self.category = fields.category;
        self.name = fields.name;
        self.quantity = fields.quantity;
    }
}

// =============================================================================
// Item Fields
// =============================================================================

/// The four user-editable columns of an item.
///
/// No field is required: empty strings are stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub number: String,
    pub category: String,
    pub name: String,
    pub quantity: i64,
}

impl ItemFields {
    pub fn new(
        number: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
        quantity: i64,
    ) -> Self {
        ItemFields {
            number: number.into(),
            category: category.into(),
            name: name.into(),
            quantity,
        }
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// Restriction applied when listing items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No restriction.
    #[default]
    All,

    /// Exact, case-sensitive match on `category`.
    Category(String),
}

impl CategoryFilter {
    /// Interprets a filter selector value.
    ///
    /// ## Mapping
    /// ```text
    /// None          → All
    /// Some("All")   → All
    /// Some("Tools") → Category("Tools")
    /// ```
    ///
    /// The empty string is a real category (rows saved with a blank category)
    /// and is kept as a concrete filter.
    pub fn from_choice(choice: Option<&str>) -> Self {
        match choice {
            None => CategoryFilter::All,
            Some(ALL_CATEGORIES) => CategoryFilter::All,
            Some(category) => CategoryFilter::Category(category.to_string()),
        }
    }

    /// Returns the category to match, if any.
    pub fn category(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Category(category) => Some(category.as_str()),
        }
    }

    /// Whether an item passes this filter.
    pub fn matches(&self, item: &InventoryItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => item.category == *category,
        }
    }

    /// Label shown in the filter selector.
    pub fn label(&self) -> &str {
        self.category().unwrap_or(ALL_CATEGORIES)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn hammer() -> InventoryItem {
        InventoryItem::from_fields(1, ItemFields::new("N-1", "Tools", "Hammer", 5))
    }

    #[test]
    fn test_filter_from_choice() {
        assert_eq!(CategoryFilter::from_choice(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_choice(Some("All")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_choice(Some("Tools")),
            CategoryFilter::Category("Tools".to_string())
        );
        // Case-sensitive: "all" is a category, not the sentinel
        assert_eq!(
            CategoryFilter::from_choice(Some("all")),
            CategoryFilter::Category("all".to_string())
        );
    }

    #[test]
    fn test_filter_matches_exactly() {
        let item = hammer();
        assert!(CategoryFilter::All.matches(&item));
        assert!(CategoryFilter::Category("Tools".into()).matches(&item));
        assert!(!CategoryFilter::Category("tools".into()).matches(&item));
        assert!(!CategoryFilter::Category("Tool".into()).matches(&item));
    }

    #[test]
    fn test_filter_label() {
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(CategoryFilter::Category("Paint".into()).label(), "Paint");
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut item = hammer();
        item.apply(ItemFields::new("N-2", "Garden", "Rake", 3));

        assert_eq!(item.id, 1);
        assert_eq!(item.fields(), ItemFields::new("N-2", "Garden", "Rake", 3));
    }
}
