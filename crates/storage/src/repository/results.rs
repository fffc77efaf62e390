use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::CompetitionResult;

/// Result rows of a single (lifter, hometown) identity.
pub struct ResultsRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ResultsRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Every result of the identity, most recent first.
    pub async fn list_for_identity(
        &self,
        lifter: &str,
        hometown: &str,
    ) -> Result<Vec<CompetitionResult>> {
        let results = sqlx::query_as::<_, CompetitionResult>(
            r#"
            SELECT date, meet_name, lifter, weight_class, competition_weight, hometown,
                   cj1, cj2, cj3, sn1, sn2, sn3, total, best_snatch, best_cleanjerk, url
            FROM results
            WHERE lifter = ?1 AND hometown = ?2
            ORDER BY date DESC
            "#,
        )
        .bind(lifter)
        .bind(hometown)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }
}
