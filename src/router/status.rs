//! Public instance information.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::config::Configuration;

/// Handler for `GET /status.json`.
pub async fn status(
    State(config): State<Arc<Configuration>>,
) -> Json<Arc<Configuration>> {
    Json(config)
}
