//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{delete, get},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    logging::logging_middleware,
    stats::get_stats_endpoint,
    stores::TransactionStore,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Requests that match no API route fall through to static files in
/// `static_dir`, which is where the compiled dashboard bundle is served from.
pub fn build_router<T: TransactionStore>(state: AppState<T>, static_dir: &str) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint::<T>).post(create_transaction_endpoint::<T>),
        )
        .route(
            endpoints::TRANSACTION,
            delete(delete_transaction_endpoint::<T>),
        )
        .route(endpoints::STATS_API, get(get_stats_endpoint::<T>))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
