use axum::Router;
use storage::Database;

use crate::features::{lifters, results};

pub fn router(db: Database) -> Router {
    Router::new()
        .nest("/api/lifters", lifters::routes::routes())
        .nest("/api/results", results::routes::routes())
        .with_state(db)
}
