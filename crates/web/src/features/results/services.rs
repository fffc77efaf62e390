use sqlx::SqlitePool;
use storage::{
    dto::results::{ResultsQuery, ResultsSummary},
    error::Result,
    services::results_aggregator,
};

/// Summarize the competition history of one lifter identity
pub async fn get_results_summary(
    pool: &SqlitePool,
    query: &ResultsQuery,
) -> Result<ResultsSummary> {
    results_aggregator::aggregate(pool, &query.name, &query.hometown).await
}
