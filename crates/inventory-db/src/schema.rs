//! # Schema Bootstrap
//!
//! The tool has exactly one table and no migration path. The DDL below is
//! the same layout earlier versions of the tool wrote, so existing
//! `inventory.db` files open unchanged.
//!
//! ```text
//! inventory
//! ├── id        INTEGER PRIMARY KEY   (rowid alias, assigned on insert)
//! ├── number    TEXT
//! ├── category  TEXT
//! ├── name      TEXT
//! └── quantity  INTEGER
//! ```

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};
use inventory_core::INVENTORY_TABLE;

/// DDL for the `inventory` table.
pub const CREATE_INVENTORY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS inventory (
    id INTEGER PRIMARY KEY,
    number TEXT,
    category TEXT,
    name TEXT,
    quantity INTEGER
)
"#;

/// Creates the `inventory` table if it is absent.
///
/// ## Safety
/// - Idempotent: a no-op when the table already exists
/// - Never alters an existing table
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    sqlx::query(CREATE_INVENTORY_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    info!(table = INVENTORY_TABLE, "Schema ready");
    Ok(())
}

/// Whether the `inventory` table exists (for diagnostics).
pub async fn table_exists(pool: &SqlitePool) -> DbResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(INVENTORY_TABLE)
            .fetch_one(pool)
            .await?;

    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_schema_created_on_connect() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(table_exists(db.pool()).await.unwrap());
    }

    #[tokio::test]
    async fn test_schema_skipped_when_disabled() {
        let db = Database::new(DbConfig::in_memory().ensure_schema(false))
            .await
            .unwrap();

        assert!(!table_exists(db.pool()).await.unwrap());

        db.ensure_schema().await.unwrap();
        assert!(table_exists(db.pool()).await.unwrap());
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        sqlx::query("INSERT INTO inventory (number, category, name, quantity) VALUES ('a', 'b', 'c', 1)")
            .execute(db.pool())
            .await
            .unwrap();

        db.ensure_schema().await.unwrap();
        db.ensure_schema().await.unwrap();

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }
}
