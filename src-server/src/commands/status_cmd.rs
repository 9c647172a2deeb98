//! Status Command
//!
//! Document store connectivity probe. Always 200.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::repository::Strategy;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// Whether the document store is connected (false under the file strategy)
    pub connected: bool,
    pub strategy: Strategy,
}

pub async fn get_status(State(state): State<AppState>) -> Json<StatusReport> {
    Json(StatusReport {
        connected: state.repo.is_connected(),
        strategy: state.repo.strategy(),
    })
}
