use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use types::order::{OrderRequest, SubmissionResult};

/// `POST /orders` — submit one order and return its terminal result.
///
/// Validation failures come back as `rejected` results with a 200 status;
/// only malformed payloads and engine faults map to HTTP errors.
pub async fn submit_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderRequest>,
) -> Result<Json<SubmissionResult>, AppError> {
    let result = state.engine.submit(payload).await?;
    Ok(Json(result))
}
