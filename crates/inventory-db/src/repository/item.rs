//! # Item Repository
//!
//! Database operations for inventory items.
//!
//! ## Key Operations
//! - Listing with an optional exact category filter
//! - Insert / update / delete keyed by `id`
//! - Distinct categories for the filter selector
//!
//! ## NULL Handling
//! Files written by other tools may hold NULLs. Reads coalesce text columns
//! to `''` and quantity to `0`, so every row decodes into an
//! `InventoryItem`.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use inventory_core::{CategoryFilter, InventoryItem, ItemFields};

/// Builds a SELECT over the item columns with the given tail.
macro_rules! select_items {
    ($tail:literal) => {
        concat!(
            "SELECT id, ",
            "COALESCE(CAST(number AS TEXT), '') AS number, ",
            "COALESCE(CAST(category AS TEXT), '') AS category, ",
            "COALESCE(CAST(name AS TEXT), '') AS name, ",
            "CAST(COALESCE(quantity, 0) AS INTEGER) AS quantity ",
            "FROM inventory ",
            $tail
        )
    };
}

/// Repository for item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ItemRepository::new(pool);
///
/// let item = repo.insert(&ItemFields::new("N-1", "Tools", "Hammer", 5)).await?;
/// repo.update(item.id, &ItemFields::new("N-1", "Tools", "Hammer", 3)).await?;
/// repo.delete(item.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Lists items in primary-key order.
    ///
    /// ## Arguments
    /// * `filter` - `All`, or an exact (case-sensitive) category
    pub async fn list(&self, filter: &CategoryFilter) -> DbResult<Vec<InventoryItem>> {
        debug!(filter = %filter.label(), "Listing items");

        let items = match filter.category() {
            Some(category) => {
                sqlx::query_as::<_, InventoryItem>(select_items!(
                    "WHERE category = ?1 ORDER BY id"
                ))
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, InventoryItem>(select_items!("ORDER BY id"))
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        debug!(count = items.len(), "List returned items");
        Ok(items)
    }

    /// Lists items for a raw selector value (`None` or `"All"` = no filter).
    pub async fn list_by_choice(&self, choice: Option<&str>) -> DbResult<Vec<InventoryItem>> {
        self.list(&CategoryFilter::from_choice(choice)).await
    }

    /// Gets an item by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(InventoryItem))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<InventoryItem>> {
        let item = sqlx::query_as::<_, InventoryItem>(select_items!("WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    /// Inserts a new item. Storage assigns the id.
    ///
    /// ## Returns
    /// * `Ok(InventoryItem)` - The stored row, including its new id
    pub async fn insert(&self, fields: &ItemFields) -> DbResult<InventoryItem> {
        debug!(number = %fields.number, category = %fields.category, "Inserting item");

        let result = sqlx::query(
            r#"
            INSERT INTO inventory (number, category, name, quantity)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(fields.number.as_str())
        .bind(fields.category.as_str())
        .bind(fields.name.as_str())
        .bind(fields.quantity)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Item inserted");

        Ok(InventoryItem::from_fields(id, fields.clone()))
    }

    /// Overwrites the four mutable fields of an item.
    ///
    /// ## Returns
    /// * `Ok(true)` - Row updated
    /// * `Ok(false)` - No row with this id (nothing changed)
    pub async fn update(&self, id: i64, fields: &ItemFields) -> DbResult<bool> {
        debug!(id, "Updating item");

        let result = sqlx::query(
            r#"
            UPDATE inventory SET
                number = ?2,
                category = ?3,
                name = ?4,
                quantity = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(fields.number.as_str())
        .bind(fields.category.as_str())
        .bind(fields.name.as_str())
        .bind(fields.quantity)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes an item.
    ///
    /// ## Returns
    /// * `Ok(true)` - Row removed
    /// * `Ok(false)` - No row with this id (nothing changed)
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting item");

        let result = sqlx::query("DELETE FROM inventory WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns each stored category once, in order of first appearance.
    ///
    /// NULL categories are skipped. The `"All"` sentinel is not included.
    pub async fn distinct_categories(&self) -> DbResult<Vec<String>> {
        let categories: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT CAST(category AS TEXT)
            FROM inventory
            WHERE category IS NOT NULL
            GROUP BY category
            ORDER BY MIN(id)
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Counts all items (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{Database, DbConfig};

    async fn repo() -> ItemRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().items()
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_ids() {
        let repo = repo().await;

        let first = repo
            .insert(&ItemFields::new("N-1", "Tools", "Hammer", 5))
            .await
            .unwrap();
        let second = repo
            .insert(&ItemFields::new("N-2", "Tools", "Saw", 2))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);

        let items = repo.list(&CategoryFilter::All).await.unwrap();
        assert_eq!(items, vec![first, second]);
    }

    #[tokio::test]
    async fn test_insert_accepts_empty_fields() {
        let repo = repo().await;

        let item = repo.insert(&ItemFields::default()).await.unwrap();
        let fetched = repo.get_by_id(item.id).await.unwrap().unwrap();

        assert_eq!(fetched.number, "");
        assert_eq!(fetched.quantity, 0);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let repo = repo().await;
        let item = repo
            .insert(&ItemFields::new("N-1", "Tools", "Hammer", 5))
            .await
            .unwrap();

        let changed = repo
            .update(item.id, &ItemFields::new("N-9", "Garden", "Rake", 1))
            .await
            .unwrap();
        assert!(changed);

        let fetched = repo.get_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, item.id);
        assert_eq!(fetched.fields(), ItemFields::new("N-9", "Garden", "Rake", 1));
    }

    #[tokio::test]
    async fn test_update_missing_id_is_noop() {
        let repo = repo().await;
        repo.insert(&ItemFields::new("N-1", "Tools", "Hammer", 5))
            .await
            .unwrap();

        let changed = repo
            .update(999, &ItemFields::new("X", "X", "X", 0))
            .await
            .unwrap();

        assert!(!changed);
        assert!(repo.get_by_id(999).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_row() {
        let repo = repo().await;
        let keep = repo
            .insert(&ItemFields::new("N-1", "Tools", "Hammer", 5))
            .await
            .unwrap();
        let gone = repo
            .insert(&ItemFields::new("N-2", "Tools", "Saw", 2))
            .await
            .unwrap();

        assert!(repo.delete(gone.id).await.unwrap());
        assert!(!repo.delete(gone.id).await.unwrap());

        let items = repo.list(&CategoryFilter::All).await.unwrap();
        assert_eq!(items, vec![keep]);
    }

    #[tokio::test]
    async fn test_filter_matches_exact_category() {
        let repo = repo().await;
        for (number, category) in [("1", "Tools"), ("2", "Paint"), ("3", "Tools"), ("4", "tools")] {
            repo.insert(&ItemFields::new(number, category, "x", 1))
                .await
                .unwrap();
        }

        let tools = repo
            .list(&CategoryFilter::Category("Tools".into()))
            .await
            .unwrap();
        let numbers: Vec<&str> = tools.iter().map(|i| i.number.as_str()).collect();
        assert_eq!(numbers, vec!["1", "3"]);

        let none = repo
            .list(&CategoryFilter::Category("Tool".into()))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_all_sentinel_equals_unfiltered() {
        let repo = repo().await;
        repo.insert(&ItemFields::new("1", "Tools", "x", 1)).await.unwrap();
        repo.insert(&ItemFields::new("2", "Paint", "y", 2)).await.unwrap();

        let unfiltered = repo.list_by_choice(None).await.unwrap();
        let all = repo.list_by_choice(Some("All")).await.unwrap();

        assert_eq!(unfiltered.len(), 2);
        assert_eq!(unfiltered, all);
    }

    #[tokio::test]
    async fn test_distinct_categories() {
        let repo = repo().await;
        for category in ["Tools", "Paint", "Tools", "Garden", "Paint"] {
            repo.insert(&ItemFields::new("n", category, "x", 1))
                .await
                .unwrap();
        }

        let categories = repo.distinct_categories().await.unwrap();
        assert_eq!(categories, vec!["Tools", "Paint", "Garden"]);

        let unique: HashSet<&String> = categories.iter().collect();
        assert_eq!(unique.len(), categories.len());
        assert!(!categories.iter().any(|c| c == "All"));
    }

    #[tokio::test]
    async fn test_null_columns_read_as_defaults() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        sqlx::query("INSERT INTO inventory (number) VALUES ('N-7')")
            .execute(db.pool())
            .await
            .unwrap();

        let items = db.items().list(&CategoryFilter::All).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].number, "N-7");
        assert_eq!(items[0].category, "");
        assert_eq!(items[0].quantity, 0);

        assert!(db.items().distinct_categories().await.unwrap().is_empty());
    }
}
