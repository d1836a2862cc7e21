//! The API endpoint URIs.
//!
//! For the endpoint that takes a parameter, use [format_endpoint].

/// The route to list and create transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{id}";
/// The route for the dashboard statistics.
pub const STATS_API: &str = "/api/stats";

/// Replace the `{id}` parameter in `endpoint_path` with `id`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    endpoint_path.replace("{id}", &id.to_string())
}
