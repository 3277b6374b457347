//! Usage log service

use shared::validate_positive_quantity;
use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::{HistoryQuery, NewUsage, UsageEntry};
use crate::services::purchase::adjust_stock;

#[derive(Clone)]
pub struct UsageService {
    db: SqlitePool,
}

impl UsageService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// List usage entries, newest first
    pub async fn list(&self, query: HistoryQuery) -> AppResult<Vec<UsageEntry>> {
        let entries = sqlx::query_as::<_, UsageEntry>(
            r#"
            SELECT u.id, u.consumable_type_id, u.quantity_used, u.usage_date, u.notes,
                   u.created_at,
                   ct.name AS consumable_name, ct.unit
            FROM usage_log u
            JOIN consumable_types ct ON u.consumable_type_id = ct.id
            WHERE (?1 IS NULL OR u.consumable_type_id = ?1)
            ORDER BY u.usage_date DESC, u.id DESC
            LIMIT ?2
            "#,
        )
        .bind(query.consumable_id)
        .bind(query.effective_limit())
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }

    /// Log consumption and take it out of stock
    pub async fn create(&self, input: NewUsage) -> AppResult<i64> {
        validate_positive_quantity(input.quantity_used)
            .map_err(|msg| AppError::invalid("quantity_used", msg))?;

        let usage_date = input
            .usage_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        // Insert first so the transaction starts out holding the write lock
        let mut tx = self.db.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO usage_log (consumable_type_id, quantity_used, usage_date, notes)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(input.consumable_type_id)
        .bind(input.quantity_used)
        .bind(usage_date)
        .bind(&input.notes)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::on_missing(e, "Consumable"))?;

        adjust_stock(&mut tx, input.consumable_type_id, -input.quantity_used).await?;

        tx.commit().await?;

        tracing::info!(
            usage_id = id,
            consumable_id = input.consumable_type_id,
            quantity = input.quantity_used,
            "Usage logged"
        );
        Ok(id)
    }
}
