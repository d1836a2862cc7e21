//! Defines the transaction store trait.

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Handles the persistence of transactions.
///
/// The production implementation is [super::SqliteTransactionStore]; the trait
/// exists so the request handlers can be exercised against a substitute store
/// in tests.
pub trait TransactionStore: Clone + Send + Sync + 'static {
    /// Retrieve all transactions, ordered by date descending (most recent
    /// first). Transactions sharing a date are ordered by ID descending.
    fn list(&self) -> Result<Vec<Transaction>, Error>;

    /// Persist a new transaction, assigning it a fresh unique ID.
    ///
    /// If the transaction has no date, the current time at the moment of the
    /// call is used.
    fn create(&self, new_transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Delete the transaction with the given ID.
    ///
    /// Deleting an ID that is not in the store is a no-op, not an error. The
    /// API layer decides whether absence should be visible to the client.
    fn delete(&self, id: TransactionId) -> Result<(), Error>;
}
