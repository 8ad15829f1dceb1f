use axum::{Router, routing::post};

use super::handlers::submit;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(submit))
}
