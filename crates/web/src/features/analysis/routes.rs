use axum::{Router, routing::post};

use super::handlers::analyze_text;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(analyze_text))
}
