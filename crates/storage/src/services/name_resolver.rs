use sqlx::SqlitePool;

use crate::dto::common::{Paging, parse_page_token};
use crate::dto::lifter::{LiftersResponse, MIN_NAME_FRAGMENT_LEN};
use crate::error::{Result, StorageError};
use crate::repository::lifter::LifterRepository;

/// `LIKE` pattern for a name fragment: every space becomes a wildcard and the
/// fragment may appear anywhere in the stored name.
pub fn like_pattern(fragment: &str) -> String {
    format!("%{}%", fragment.replace(' ', "%"))
}

/// Resolve a free-text name fragment into one page of matching identities.
///
/// The distinct-identity count is queried first; when nothing matches, no
/// page query is issued at all.
pub async fn resolve(
    pool: &SqlitePool,
    name: &str,
    page_token: Option<&str>,
) -> Result<LiftersResponse> {
    if name.chars().count() < MIN_NAME_FRAGMENT_LEN {
        return Err(StorageError::Validation(format!(
            "Search name must be at least {MIN_NAME_FRAGMENT_LEN} characters"
        )));
    }

    tracing::debug!(name, page = ?page_token, "Resolving lifter names");

    let pattern = like_pattern(name);
    let repo = LifterRepository::new(pool);

    let total = repo.count_matching(&pattern).await?;
    if total == 0 {
        return Ok(LiftersResponse::empty(name));
    }

    let paging = Paging::new(parse_page_token(page_token), total);
    let lifters = repo.find_page(&pattern, &paging).await?;

    if lifters.len() != paging.expected_len() {
        tracing::warn!(
            name,
            page = paging.page(),
            expected = paging.expected_len(),
            found = lifters.len(),
            "Page size does not match the match count"
        );
    }

    tracing::info!(
        name,
        total,
        page = paging.page(),
        returned = lifters.len(),
        "Resolved lifter names"
    );

    Ok(LiftersResponse::from_page(name, lifters, &paging))
}
