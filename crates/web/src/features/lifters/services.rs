use sqlx::SqlitePool;
use storage::{
    dto::lifter::{LifterSearchQuery, LiftersResponse},
    error::Result,
    services::name_resolver,
};

/// Resolve a search query into one page of lifter identities
pub async fn search_lifters(
    pool: &SqlitePool,
    query: &LifterSearchQuery,
) -> Result<LiftersResponse> {
    name_resolver::resolve(pool, &query.name, query.page.as_deref()).await
}
