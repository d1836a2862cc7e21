//! Defines the endpoint for the dashboard statistics.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{AppState, stores::TransactionStore};

use super::aggregation::compute_stats;

/// A route handler that computes the financial summary.
///
/// The summary is always computed from a fresh read of the full transaction
/// set; nothing is cached between requests.
pub async fn get_stats_endpoint<T: TransactionStore>(
    State(state): State<AppState<T>>,
) -> Response {
    match state.transaction_store.list() {
        Ok(transactions) => Json(compute_stats(&transactions)).into_response(),
        Err(error) => error.into_response(),
    }
}
