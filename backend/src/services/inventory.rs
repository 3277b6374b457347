//! Stock level service: direct edits and usage-rate overrides

use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::{InventoryRecord, InventoryUpdate, UsageRateUpdate};

/// Inventory service for overwriting stock levels
#[derive(Clone)]
pub struct InventoryService {
    db: SqlitePool,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Overwrite the stock level and custom rate of a consumable.
    ///
    /// A missing inventory row is created, so consumables restored from
    /// older backups can still be edited. The upsert is a single statement,
    /// and an unknown consumable surfaces as a foreign-key violation.
    pub async fn set_quantity(
        &self,
        consumable_id: i64,
        input: InventoryUpdate,
    ) -> AppResult<InventoryRecord> {
        let record = sqlx::query_as::<_, InventoryRecord>(
            r#"
            INSERT INTO inventory (consumable_type_id, current_quantity, custom_usage_rate)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (consumable_type_id) DO UPDATE
            SET current_quantity = excluded.current_quantity,
                custom_usage_rate = excluded.custom_usage_rate,
                last_updated = CURRENT_TIMESTAMP
            RETURNING id, consumable_type_id, current_quantity, custom_usage_rate, last_updated
            "#,
        )
        .bind(consumable_id)
        .bind(input.current_quantity)
        .bind(input.custom_usage_rate)
        .fetch_one(&self.db)
        .await
        .map_err(|e| AppError::on_missing(e, "Consumable"))?;

        tracing::info!(
            consumable_id,
            quantity = input.current_quantity,
            "Inventory updated"
        );
        Ok(record)
    }

    /// Set or clear the custom usage rate, keeping the stock level
    pub async fn set_usage_rate(
        &self,
        consumable_id: i64,
        input: UsageRateUpdate,
    ) -> AppResult<InventoryRecord> {
        let record = sqlx::query_as::<_, InventoryRecord>(
            r#"
            INSERT INTO inventory (consumable_type_id, current_quantity, custom_usage_rate)
            VALUES (?1, 0.0, ?2)
            ON CONFLICT (consumable_type_id) DO UPDATE
            SET custom_usage_rate = excluded.custom_usage_rate,
                last_updated = CURRENT_TIMESTAMP
            RETURNING id, consumable_type_id, current_quantity, custom_usage_rate, last_updated
            "#,
        )
        .bind(consumable_id)
        .bind(input.usage_rate)
        .fetch_one(&self.db)
        .await
        .map_err(|e| AppError::on_missing(e, "Consumable"))?;

        tracing::info!(consumable_id, rate = ?input.usage_rate, "Usage rate updated");
        Ok(record)
    }
}
