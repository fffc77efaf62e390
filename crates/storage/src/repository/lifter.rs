use sqlx::SqlitePool;

use crate::dto::common::Paging;
use crate::error::Result;
use crate::models::Lifter;

/// Distinct (lifter, hometown) lookups by name pattern.
pub struct LifterRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LifterRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Number of distinct identities whose name matches the `LIKE` pattern.
    pub async fn count_matching(&self, pattern: &str) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM (
                SELECT 1
                FROM results
                WHERE lifter LIKE ?1
                GROUP BY lifter, hometown
            )
            "#,
        )
        .bind(pattern)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// One page of matching identities, sorted by name then hometown so
    /// same-name identities keep a fixed order across pages.
    pub async fn find_page(&self, pattern: &str, paging: &Paging) -> Result<Vec<Lifter>> {
        let lifters = sqlx::query_as::<_, Lifter>(
            r#"
            SELECT DISTINCT lifter, hometown
            FROM results
            WHERE lifter LIKE ?1
            ORDER BY lifter ASC, hometown ASC
            LIMIT ?2 OFFSET ?3
            "#,
        )
        .bind(pattern)
        .bind(paging.limit())
        .bind(paging.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(lifters)
    }
}
