//! Consumable type management

use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::{ConsumableInput, ConsumableOverview};

/// Columns selected for a [`ConsumableOverview`]
pub(crate) const OVERVIEW_SELECT: &str = r#"
    SELECT ct.id, ct.category_id, ct.name, ct.unit, ct.default_usage_rate,
           ct.usage_rate_period, ct.min_stock_level, ct.notes, ct.created_at,
           c.name AS category_name, c.icon AS category_icon,
           i.current_quantity, i.custom_usage_rate
    FROM consumable_types ct
    JOIN categories c ON ct.category_id = c.id
    LEFT JOIN inventory i ON ct.id = i.consumable_type_id
"#;

/// Consumable service for creating, editing and removing tracked goods
#[derive(Clone)]
pub struct ConsumableService {
    db: SqlitePool,
}

impl ConsumableService {
    /// Create a new ConsumableService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// List consumables with category and stock, optionally for one category
    pub async fn list(&self, category_id: Option<i64>) -> AppResult<Vec<ConsumableOverview>> {
        let sql = format!(
            "{} WHERE (?1 IS NULL OR ct.category_id = ?1) ORDER BY c.name, ct.name",
            OVERVIEW_SELECT
        );
        let items = sqlx::query_as::<_, ConsumableOverview>(&sql)
            .bind(category_id)
            .fetch_all(&self.db)
            .await?;
        Ok(items)
    }

    /// Get a single consumable with category and stock
    pub async fn get(&self, id: i64) -> AppResult<ConsumableOverview> {
        let sql = format!("{} WHERE ct.id = ?", OVERVIEW_SELECT);
        sqlx::query_as::<_, ConsumableOverview>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Consumable".to_string()))
    }

    /// Create a consumable together with its empty inventory record
    pub async fn create(&self, input: ConsumableInput) -> AppResult<i64> {
        let mut tx = self.db.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO consumable_types
                (category_id, name, unit, default_usage_rate, usage_rate_period, min_stock_level, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(input.category_id)
        .bind(input.name.trim())
        .bind(input.unit.trim())
        .bind(input.default_usage_rate)
        .bind(input.usage_rate_period.as_str())
        .bind(input.min_stock_level)
        .bind(&input.notes)
        .fetch_one(&mut *tx)
        .await
        .map_err(write_error)?;

        sqlx::query("INSERT INTO inventory (consumable_type_id, current_quantity) VALUES (?, 0.0)")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(consumable_id = id, name = %input.name.trim(), "Consumable created");
        Ok(id)
    }

    /// Replace every editable field of a consumable
    pub async fn update(&self, id: i64, input: ConsumableInput) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE consumable_types
            SET category_id = ?, name = ?, unit = ?, default_usage_rate = ?,
                usage_rate_period = ?, min_stock_level = ?, notes = ?
            WHERE id = ?
            "#,
        )
        .bind(input.category_id)
        .bind(input.name.trim())
        .bind(input.unit.trim())
        .bind(input.default_usage_rate)
        .bind(input.usage_rate_period.as_str())
        .bind(input.min_stock_level)
        .bind(&input.notes)
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(write_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Consumable".to_string()));
        }

        tracing::info!(consumable_id = id, "Consumable updated");
        Ok(())
    }

    /// Delete a consumable; its inventory, purchases and usage log cascade
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM consumable_types WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Consumable".to_string()));
        }

        tracing::info!(consumable_id = id, "Consumable deleted");
        Ok(())
    }
}

/// Unknown category or taken name
fn write_error(err: sqlx::Error) -> AppError {
    match AppError::on_missing(err, "Category") {
        AppError::DatabaseError(err) => AppError::on_duplicate(err, "name"),
        other => other,
    }
}
