//! Defines the endpoint for listing all transactions.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{AppState, stores::TransactionStore};

/// A route handler that returns every transaction, most recent first.
pub async fn list_transactions_endpoint<T: TransactionStore>(
    State(state): State<AppState<T>>,
) -> Response {
    match state.transaction_store.list() {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use rusqlite::Connection;
    use rust_decimal::dec;
    use time::macros::datetime;

    use crate::{
        SqlAppState, SqliteTransactionStore, Transaction, create_app_state, endpoints,
        stores::TransactionStore,
        transaction::{NewTransaction, TransactionType},
    };

    use super::list_transactions_endpoint;

    fn get_test_server() -> (SqlAppState, TestServer) {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        let state = create_app_state(connection).expect("Could not create app state.");

        let app = Router::new()
            .route(
                endpoints::TRANSACTIONS_API,
                get(list_transactions_endpoint::<SqliteTransactionStore>),
            )
            .with_state(state.clone());

        let server = TestServer::new(app);

        (state, server)
    }

    #[tokio::test]
    async fn lists_transactions_most_recent_first() {
        let (state, server) = get_test_server();

        let older = state
            .transaction_store
            .create(
                NewTransaction::new(dec!(150.00), "Grocery Shopping", "Food", TransactionType::Expense)
                    .date(datetime!(2025-02-01 09:00:00 UTC)),
            )
            .unwrap();
        let newer = state
            .transaction_store
            .create(
                NewTransaction::new(dec!(5000.00), "Monthly Salary", "Salary", TransactionType::Income)
                    .date(datetime!(2025-02-28 09:00:00 UTC)),
            )
            .unwrap();

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        let transactions: Vec<Transaction> = response.json();
        assert_eq!(transactions, vec![newer, older]);
    }

    #[tokio::test]
    async fn lists_nothing_for_an_empty_store() {
        let (_state, server) = get_test_server();

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!([]));
    }
}
