use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::lifter::{LifterSearchQuery, LiftersResponse},
};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/lifters",
    params(LifterSearchQuery),
    responses(
        (status = 200, description = "Lifters matching the name fragment", body = LiftersResponse),
        (status = 400, description = "Search name too short")
    ),
    tag = "lifters"
)]
pub async fn search_lifters(
    State(db): State<Database>,
    Query(query): Query<LifterSearchQuery>,
) -> WebResult<Response> {
    query.validate()?;

    let response = services::search_lifters(db.pool(), &query).await?;

    Ok(Json(response).into_response())
}
