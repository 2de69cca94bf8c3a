//! Startup provisioning for the records table

use sqlx::SqlitePool;

/// Create the `records` table if it does not exist yet.
///
/// AUTOINCREMENT keeps ids of deleted records from being handed out again.
pub async fn ensure(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring records table exists");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            age INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
