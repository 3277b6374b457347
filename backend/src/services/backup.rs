//! Database backup and restore
//!
//! Backups are complete SQLite files produced with `VACUUM INTO`. A restore
//! attaches the uploaded file and replaces every row inside one transaction,
//! so a bad upload leaves the live data untouched.

use std::path::{Path, PathBuf};

use serde::Serialize;
use sqlx::{pool::PoolConnection, Connection, Sqlite, SqliteConnection, SqlitePool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

const ATTACHED_SCHEMA: &str = "restore_src";

/// Tables a backup must contain; `usage_log` is optional for older files
const REQUIRED_TABLES: [&str; 4] = ["categories", "consumable_types", "inventory", "purchases"];

/// Row counts copied by a restore
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RestoreSummary {
    pub categories: u64,
    pub consumables: u64,
    pub inventory: u64,
    pub purchases: u64,
    pub usage_entries: u64,
}

#[derive(Clone)]
pub struct BackupService {
    db: SqlitePool,
}

impl BackupService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Snapshot the database; returns the download filename and file bytes
    pub async fn export(&self) -> AppResult<(String, Vec<u8>)> {
        self.ensure_file_database().await?;

        let path = scratch_path();

        let vacuum = sqlx::query("VACUUM INTO ?")
            .bind(path.to_string_lossy().into_owned())
            .execute(&self.db)
            .await;
        let bytes = match vacuum {
            Ok(_) => tokio::fs::read(&path).await,
            Err(e) => {
                remove_scratch(&path).await;
                return Err(e.into());
            }
        };
        remove_scratch(&path).await;
        let bytes = bytes?;

        let filename = format!(
            "inventory-backup-{}.db",
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        tracing::info!(%filename, size = bytes.len(), "Backup created");
        Ok((filename, bytes))
    }

    /// Replace all data with the contents of an uploaded backup file
    pub async fn restore(&self, bytes: &[u8]) -> AppResult<RestoreSummary> {
        if !shared::is_sqlite_file(bytes) {
            return Err(AppError::InvalidBackup(
                "not a SQLite database".to_string(),
            ));
        }
        self.ensure_file_database().await?;

        let path = scratch_path();
        tokio::fs::write(&path, bytes).await?;

        let result = self.restore_from(&path).await;
        remove_scratch(&path).await;

        let summary = result?;
        tracing::info!(?summary, "Database restored from backup");
        Ok(summary)
    }

    /// An in-memory database can neither `VACUUM INTO` nor `ATTACH` a real file
    async fn ensure_file_database(&self) -> AppResult<()> {
        let file: String = sqlx::query_scalar(
            "SELECT COALESCE(file, '') FROM pragma_database_list WHERE name = 'main'",
        )
        .fetch_one(&self.db)
        .await?;

        if file.is_empty() {
            return Err(AppError::BackupUnavailable(
                "backup and restore need a file database".to_string(),
            ));
        }
        Ok(())
    }

    async fn restore_from(&self, path: &Path) -> AppResult<RestoreSummary> {
        let mut conn: PoolConnection<Sqlite> = self.db.acquire().await?;

        sqlx::query(&format!("ATTACH DATABASE ? AS {}", ATTACHED_SCHEMA))
            .bind(path.to_string_lossy().into_owned())
            .execute(&mut *conn)
            .await
            .map_err(|e| AppError::InvalidBackup(format!("cannot open file: {}", e)))?;

        let result = copy_attached(&mut conn).await;

        if let Err(e) = sqlx::query(&format!("DETACH DATABASE {}", ATTACHED_SCHEMA))
            .execute(&mut *conn)
            .await
        {
            tracing::error!("Failed to detach restore source: {}", e);
        }

        result
    }
}

/// Copy every row from the attached backup into the main schema
async fn copy_attached(conn: &mut SqliteConnection) -> AppResult<RestoreSummary> {
    let tables: Vec<String> = sqlx::query_scalar(&format!(
        "SELECT name FROM {}.sqlite_master WHERE type = 'table'",
        ATTACHED_SCHEMA
    ))
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| AppError::InvalidBackup(format!("unreadable database: {}", e)))?;

    if let Some(missing) = REQUIRED_TABLES
        .iter()
        .find(|table| !tables.iter().any(|t| t == *table))
    {
        return Err(AppError::InvalidBackup(format!("missing table '{}'", missing)));
    }
    let has_usage_log = tables.iter().any(|t| t == "usage_log");

    let mut tx = conn.begin().await?;

    for table in ["usage_log", "purchases", "inventory", "consumable_types", "categories"] {
        sqlx::query(&format!("DELETE FROM main.{}", table))
            .execute(&mut *tx)
            .await?;
    }

    let statements = copy_statements();
    let mut counts = [0u64; 5];
    for (i, sql) in statements.iter().enumerate() {
        if i == 4 && !has_usage_log {
            break;
        }
        counts[i] = sqlx::query(sql)
            .execute(&mut *tx)
            .await
            .map_err(into_backup_error)?
            .rows_affected();
    }

    tx.commit().await?;

    Ok(RestoreSummary {
        categories: counts[0],
        consumables: counts[1],
        inventory: counts[2],
        purchases: counts[3],
        usage_entries: counts[4],
    })
}

/// Inserts in parent-first order: categories, consumables, inventory, purchases, usage
fn copy_statements() -> [String; 5] {
    let src = ATTACHED_SCHEMA;
    [
        format!(
            "INSERT INTO main.categories (id, name, icon)
             SELECT id, name, COALESCE(icon, '📦') FROM {src}.categories"
        ),
        format!(
            "INSERT INTO main.consumable_types
                (id, category_id, name, unit, default_usage_rate, usage_rate_period,
                 min_stock_level, notes, created_at)
             SELECT id, category_id, name, COALESCE(unit, 'units'),
                    COALESCE(default_usage_rate, 1.0), COALESCE(usage_rate_period, 'week'),
                    COALESCE(min_stock_level, 1.0), notes,
                    COALESCE(created_at, CURRENT_TIMESTAMP)
             FROM {src}.consumable_types"
        ),
        format!(
            "INSERT INTO main.inventory
                (id, consumable_type_id, current_quantity, custom_usage_rate, last_updated)
             SELECT id, consumable_type_id, COALESCE(current_quantity, 0), custom_usage_rate,
                    COALESCE(last_updated, CURRENT_TIMESTAMP)
             FROM {src}.inventory"
        ),
        format!(
            "INSERT INTO main.purchases
                (id, consumable_type_id, quantity, purchase_date, price, notes, created_at)
             SELECT id, consumable_type_id, quantity, purchase_date, price, notes,
                    COALESCE(created_at, CURRENT_TIMESTAMP)
             FROM {src}.purchases"
        ),
        format!(
            "INSERT INTO main.usage_log
                (id, consumable_type_id, quantity_used, usage_date, notes, created_at)
             SELECT id, consumable_type_id, quantity_used, usage_date, notes,
                    COALESCE(created_at, CURRENT_TIMESTAMP)
             FROM {src}.usage_log"
        ),
    ]
}

/// Constraint and schema failures mean the file is bad, not the server
fn into_backup_error(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(db_err) => AppError::InvalidBackup(db_err.message().to_string()),
        other => AppError::DatabaseError(other),
    }
}

fn scratch_path() -> PathBuf {
    std::env::temp_dir().join(format!("inventory-backup-{}.db", Uuid::new_v4()))
}

async fn remove_scratch(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), "Failed to remove scratch file: {}", e);
        }
    }
}
