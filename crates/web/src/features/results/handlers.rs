use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::results::{ResultsQuery, ResultsSummary},
};

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/results",
    params(ResultsQuery),
    responses(
        (status = 200, description = "Results summary for the lifter", body = ResultsSummary),
        (status = 400, description = "Missing name or hometown"),
        (status = 404, description = "No results for this lifter")
    ),
    tag = "results"
)]
pub async fn get_results(
    State(db): State<Database>,
    Query(query): Query<ResultsQuery>,
) -> WebResult<Response> {
    let summary = services::get_results_summary(db.pool(), &query).await?;

    Ok(Json(summary).into_response())
}
