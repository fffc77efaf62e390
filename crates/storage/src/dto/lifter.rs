use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::{PageInfo, Paging};
use crate::models::Lifter;

/// Shortest name fragment a search accepts.
pub const MIN_NAME_FRAGMENT_LEN: usize = 3;

/// Query string of a lifter name search.
///
/// `page` stays a raw string: a malformed token is not an error, it just
/// means the first page.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct LifterSearchQuery {
    #[validate(length(min = 3, message = "Search name must be at least 3 characters"))]
    pub name: String,
    pub page: Option<String>,
}

/// One page of (name, hometown) identities matching a name fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LiftersResponse {
    pub lifters: Vec<Lifter>,
    /// The fragment as the caller typed it.
    pub name: String,
    pub total: i64,
    /// 1-based page being returned, 0 when nothing matched.
    pub current: u32,
    pub total_pages: u32,
    pub pages: Vec<PageInfo>,
}

impl LiftersResponse {
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            lifters: Vec::new(),
            name: name.into(),
            total: 0,
            current: 0,
            total_pages: 0,
            pages: Vec::new(),
        }
    }

    pub fn from_page(name: impl Into<String>, lifters: Vec<Lifter>, paging: &Paging) -> Self {
        Self {
            lifters,
            name: name.into(),
            total: paging.total_items(),
            current: paging.page(),
            total_pages: paging.total_pages(),
            pages: paging.pages(),
        }
    }
}
