//! Dashboard projection and headline stats

use chrono::{Duration, Local};
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::{sort_dashboard, ConsumableOverview, DashboardItem, InventoryStats};
use crate::services::consumable::OVERVIEW_SELECT;

/// Window, in days, counted as "recent" for purchases
const RECENT_PURCHASE_DAYS: i64 = 7;

/// Dashboard service
#[derive(Clone)]
pub struct DashboardService {
    db: SqlitePool,
}

impl DashboardService {
    /// Create a new DashboardService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Every consumable with its projection, most urgent first
    pub async fn dashboard(&self) -> AppResult<Vec<DashboardItem>> {
        let overviews = sqlx::query_as::<_, ConsumableOverview>(OVERVIEW_SELECT)
            .fetch_all(&self.db)
            .await?;

        let mut items: Vec<DashboardItem> = overviews
            .into_iter()
            .map(DashboardItem::from_overview)
            .collect();
        sort_dashboard(&mut items);

        Ok(items)
    }

    /// Headline counts
    pub async fn stats(&self) -> AppResult<InventoryStats> {
        let needs_purchase = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM consumable_types ct
            LEFT JOIN inventory i ON ct.id = i.consumable_type_id
            WHERE COALESCE(i.current_quantity, 0) <= ct.min_stock_level
            "#,
        )
        .fetch_one(&self.db)
        .await?;

        let total_items = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM consumable_types")
            .fetch_one(&self.db)
            .await?;

        let since = Local::now().date_naive() - Duration::days(RECENT_PURCHASE_DAYS);
        let recent_purchases =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM purchases WHERE purchase_date >= ?")
                .bind(since)
                .fetch_one(&self.db)
                .await?;

        Ok(InventoryStats {
            needs_purchase,
            total_items,
            recent_purchases,
        })
    }
}
