//! Implements the state shared by the REST server's request handlers.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    stores::{SqliteTransactionStore, TransactionStore},
};

/// The state of the REST server.
///
/// The store is injected explicitly rather than accessed through a global so
/// that its lifecycle is tied to the server process and tests can substitute
/// their own implementation.
#[derive(Debug, Clone)]
pub struct AppState<T: TransactionStore> {
    /// The store holding the persisted transactions.
    pub transaction_store: T,
}

impl<T: TransactionStore> AppState<T> {
    /// Create a new [AppState] over the given transaction store.
    pub fn new(transaction_store: T) -> Self {
        Self { transaction_store }
    }
}

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SqlAppState = AppState<SqliteTransactionStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the table for the
/// transaction model.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_app_state(db_connection: Connection) -> Result<SqlAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));
    let transaction_store = SqliteTransactionStore::new(connection);

    Ok(AppState::new(transaction_store))
}
