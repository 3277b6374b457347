//! Purchase log service
//!
//! Logging a purchase adds its quantity to stock; deleting one takes the
//! same quantity back out, even if that leaves the stock negative.
//!
//! Every transaction opens with its write so SQLite takes the write lock
//! up front; a read first would make concurrent writers fail with
//! `SQLITE_BUSY` under WAL instead of waiting.

use shared::validate_positive_quantity;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::error::{AppError, AppResult};
use crate::models::{HistoryQuery, NewPurchase, PurchaseEntry};

/// Purchase service for the restocking history
#[derive(Clone)]
pub struct PurchaseService {
    db: SqlitePool,
}

impl PurchaseService {
    /// Create a new PurchaseService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// List purchases, newest first
    pub async fn list(&self, query: HistoryQuery) -> AppResult<Vec<PurchaseEntry>> {
        let purchases = sqlx::query_as::<_, PurchaseEntry>(
            r#"
            SELECT p.id, p.consumable_type_id, p.quantity, p.purchase_date, p.price,
                   p.notes, p.created_at,
                   ct.name AS consumable_name, ct.unit
            FROM purchases p
            JOIN consumable_types ct ON p.consumable_type_id = ct.id
            WHERE (?1 IS NULL OR p.consumable_type_id = ?1)
            ORDER BY p.purchase_date DESC, p.id DESC
            LIMIT ?2
            "#,
        )
        .bind(query.consumable_id)
        .bind(query.effective_limit())
        .fetch_all(&self.db)
        .await?;

        Ok(purchases)
    }

    /// Log a purchase and add it to the stock level
    pub async fn create(&self, input: NewPurchase) -> AppResult<i64> {
        validate_positive_quantity(input.quantity)
            .map_err(|msg| AppError::invalid("quantity", msg))?;

        let purchase_date = input
            .purchase_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let mut tx = self.db.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO purchases (consumable_type_id, quantity, purchase_date, price, notes)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(input.consumable_type_id)
        .bind(input.quantity)
        .bind(purchase_date)
        .bind(input.price)
        .bind(&input.notes)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::on_missing(e, "Consumable"))?;

        adjust_stock(&mut tx, input.consumable_type_id, input.quantity).await?;

        tx.commit().await?;

        tracing::info!(
            purchase_id = id,
            consumable_id = input.consumable_type_id,
            quantity = input.quantity,
            "Purchase logged"
        );
        Ok(id)
    }

    /// Delete a purchase and reverse its stock increment
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let (consumable_id, quantity) = sqlx::query_as::<_, (i64, f64)>(
            "DELETE FROM purchases WHERE id = ? RETURNING consumable_type_id, quantity",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Purchase".to_string()))?;

        adjust_stock(&mut tx, consumable_id, -quantity).await?;

        tx.commit().await?;

        tracing::info!(purchase_id = id, consumable_id, quantity, "Purchase deleted");
        Ok(())
    }
}

/// Add `delta` to a consumable's stock, creating the row if it is missing
pub(crate) async fn adjust_stock(
    tx: &mut Transaction<'_, Sqlite>,
    consumable_id: i64,
    delta: f64,
) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO inventory (consumable_type_id, current_quantity)
        VALUES (?1, ?2)
        ON CONFLICT (consumable_type_id) DO UPDATE
        SET current_quantity = current_quantity + excluded.current_quantity,
            last_updated = CURRENT_TIMESTAMP
        "#,
    )
    .bind(consumable_id)
    .bind(delta)
    .execute(&mut **tx)
    .await?;

    tracing::debug!(consumable_id, delta, "Stock adjusted");
    Ok(())
}
