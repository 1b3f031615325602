//! Database initialization
//!
//! Creates the SQLite database and tables on first run. Every statement is
//! idempotent, so startup can run this unconditionally.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // WAL allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_land_records_table(&pool).await?;
    create_nondhs_table(&pool).await?;
    create_nondh_details_table(&pool).await?;
    create_owner_relations_table(&pool).await?;

    Ok(pool)
}

async fn create_land_records_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS land_records (
            id TEXT PRIMARY KEY,
            district TEXT NOT NULL,
            taluka TEXT NOT NULL,
            village TEXT NOT NULL,
            block_no TEXT,
            re_survey_no TEXT,
            s_no TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_land_records_location
         ON land_records(district, taluka, village)",
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_nondhs_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS nondhs (
            id TEXT PRIMARY KEY,
            land_record_id TEXT NOT NULL REFERENCES land_records(id) ON DELETE CASCADE,
            number TEXT NOT NULL,
            affected_s_nos TEXT NOT NULL DEFAULT '[]',
            position INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_nondhs_record ON nondhs(land_record_id)")
        .execute(pool)
        .await?;
    Ok(())
}

async fn create_nondh_details_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS nondh_details (
            id TEXT PRIMARY KEY,
            nondh_id TEXT NOT NULL REFERENCES nondhs(id) ON DELETE CASCADE,
            detail_type TEXT NOT NULL,
            date TEXT NOT NULL,
            parsed_date TEXT,
            vigat TEXT NOT NULL,
            status TEXT NOT NULL,
            invalid_reason TEXT,
            tenure TEXT NOT NULL,
            hukam_type TEXT,
            ganot TEXT,
            trans_date TEXT,
            amount REAL,
            old_owner TEXT,
            valid INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_details_nondh ON nondh_details(nondh_id)")
        .execute(pool)
        .await?;
    Ok(())
}

async fn create_owner_relations_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS owner_relations (
            id TEXT PRIMARY KEY,
            detail_id TEXT NOT NULL REFERENCES nondh_details(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            area_sq_m REAL NOT NULL,
            is_valid INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_owners_detail ON owner_relations(detail_id)")
        .execute(pool)
        .await?;
    Ok(())
}
