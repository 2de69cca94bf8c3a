//! Record repository
//!
//! One parameterized statement per operation against the `records` table.
//! Writes take a `RecordInput`, so only validated data is persisted.

use sqlx::SqlitePool;

use crate::models::{Record, RecordInput};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: record '{id}'")]
    NotFound { id: i64 },
}

/// Record repository
pub struct RecordRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RecordRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a record and return it with the store-assigned id.
    pub async fn create(&self, input: RecordInput) -> Result<Record, DbError> {
        let result = sqlx::query("INSERT INTO records (name, age) VALUES (?, ?)")
            .bind(input.name())
            .bind(input.age())
            .execute(self.pool)
            .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, "record created");

        Ok(input.into_record(id))
    }

    /// Overwrite name and age of an existing record.
    pub async fn update(&self, id: i64, input: RecordInput) -> Result<Record, DbError> {
        let result = sqlx::query("UPDATE records SET name = ?, age = ? WHERE id = ?")
            .bind(input.name())
            .bind(input.age())
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        tracing::debug!(id, "record updated");
        Ok(input.into_record(id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM records WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        tracing::debug!(id, "record deleted");
        Ok(())
    }

    /// List every record, ordered by id.
    ///
    /// Rows are fetched in full before returning, so the cursor is closed
    /// by the time the caller sees the result. A row that fails to decode
    /// fails the whole list.
    pub async fn list(&self) -> Result<Vec<Record>, DbError> {
        let records = sqlx::query_as::<_, Record>("SELECT id, name, age FROM records ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(records)
    }

    /// Get a single record by id.
    pub async fn get(&self, id: i64) -> Result<Record, DbError> {
        sqlx::query_as::<_, Record>("SELECT id, name, age FROM records WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool_with_options, schema};

    async fn test_pool() -> SqlitePool {
        let pool = create_pool_with_options("sqlite::memory:", 1).await.unwrap();
        schema::ensure(&pool).await.unwrap();
        pool
    }

    fn input(name: &str, age: i64) -> RecordInput {
        RecordInput::new(name, age).unwrap()
    }

    #[tokio::test]
    async fn create_then_get_round_trip() {
        let pool = test_pool().await;
        let repo = RecordRepo::new(&pool);

        let created = repo.create(input("Alice", 30)).await.unwrap();
        assert_eq!(created.id, 1);

        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let pool = test_pool().await;
        let repo = RecordRepo::new(&pool);

        let a = repo.create(input("Alice", 30)).await.unwrap();
        let b = repo.create(input("Bob", 31)).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let pool = test_pool().await;
        let repo = RecordRepo::new(&pool);

        let a = repo.create(input("Alice", 30)).await.unwrap();
        repo.delete(a.id).await.unwrap();
        let b = repo.create(input("Bob", 31)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn update_keeps_id() {
        let pool = test_pool().await;
        let repo = RecordRepo::new(&pool);

        let created = repo.create(input("Alice", 30)).await.unwrap();
        let updated = repo.update(created.id, input("Bob", 31)).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(repo.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let pool = test_pool().await;
        let err = RecordRepo::new(&pool)
            .update(42, input("Bob", 31))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 42 }));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let pool = test_pool().await;
        let err = RecordRepo::new(&pool).delete(7).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 7 }));
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = RecordRepo::new(&pool);

        let created = repo.create(input("Alice", 30)).await.unwrap();
        repo.delete(created.id).await.unwrap();

        let err = repo.get(created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn list_empty_and_ordered() {
        let pool = test_pool().await;
        let repo = RecordRepo::new(&pool);
        assert!(repo.list().await.unwrap().is_empty());

        repo.create(input("Alice", 30)).await.unwrap();
        repo.create(input("Bob", 31)).await.unwrap();

        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn list_fails_on_undecodable_row() {
        let pool = test_pool().await;
        sqlx::query("INSERT INTO records (name, age) VALUES ('Mallory', 'old')")
            .execute(&pool)
            .await
            .unwrap();

        let err = RecordRepo::new(&pool).list().await.unwrap_err();
        assert!(matches!(err, DbError::Sqlx(_)));
    }

    #[tokio::test]
    async fn missing_table_is_store_error() {
        let pool = create_pool_with_options("sqlite::memory:", 1).await.unwrap();
        let err = RecordRepo::new(&pool)
            .create(input("Alice", 30))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Sqlx(_)));
    }
}
