//! Category lookup

use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::Category;

#[derive(Clone)]
pub struct CategoryService {
    db: SqlitePool,
}

impl CategoryService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// List all categories ordered by name
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name, icon FROM categories ORDER BY name")
                .fetch_all(&self.db)
                .await?;
        Ok(categories)
    }
}
