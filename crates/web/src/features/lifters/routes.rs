use axum::{Router, routing::get};
use storage::Database;

use super::handlers::search_lifters;

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(search_lifters))
}
