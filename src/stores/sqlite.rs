//! The SQLite-backed transaction store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, types::Type};
use rust_decimal::Decimal;
use time::{OffsetDateTime, UtcOffset};

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionId, TransactionType},
};

use super::TransactionStore;

/// Stores transactions in a SQLite database.
///
/// Amounts are persisted as decimal strings to keep their exact two decimal
/// places; dates are normalized to UTC so the textual date ordering matches
/// the chronological one.
#[derive(Debug, Clone)]
pub struct SqliteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteTransactionStore {
    /// Create a new transaction store that uses the given database connection.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SqliteTransactionStore {
    /// Retrieve all transactions ordered by date descending, then ID
    /// descending.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn list(&self) -> Result<Vec<Transaction>, Error> {
        let connection = self.connection.lock().unwrap();

        connection
            .prepare(
                "SELECT id, amount, description, category, type, date FROM \"transaction\" \
                 ORDER BY date DESC, id DESC",
            )?
            .query_map([], map_transaction_row)?
            .map(|transaction_result| transaction_result.map_err(Error::SqlError))
            .collect()
    }

    /// Persist a new transaction and return it with its assigned ID.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn create(&self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let date = new_transaction
            .date
            .unwrap_or_else(OffsetDateTime::now_utc)
            .to_offset(UtcOffset::UTC);

        let connection = self.connection.lock().unwrap();

        let transaction = connection
            .prepare(
                "INSERT INTO \"transaction\" (amount, description, category, type, date)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id, amount, description, category, type, date",
            )?
            .query_row(
                (
                    new_transaction.amount.to_string(),
                    &new_transaction.description,
                    &new_transaction.category,
                    new_transaction.transaction_type.as_str(),
                    date,
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    /// Delete a transaction by its ID, ignoring IDs that are not in the store.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn delete(&self, id: TransactionId) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        let rows_affected = connection.execute(
            "DELETE FROM \"transaction\" WHERE id = :id",
            &[(":id", &id)],
        )?;

        if rows_affected == 0 {
            tracing::debug!("Delete of transaction {id} matched no rows.");
        }

        Ok(())
    }
}

/// Map a database row to a [Transaction].
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;

    let amount_text: String = row.get(1)?;
    let amount = amount_text.parse::<Decimal>().map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(error))
    })?;

    let description = row.get(2)?;
    let category = row.get(3)?;

    let type_label: String = row.get(4)?;
    let transaction_type = TransactionType::parse(&type_label).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            Type::Text,
            format!("unknown transaction type {type_label:?}").into(),
        )
    })?;

    let date = row.get(5)?;

    Ok(Transaction {
        id,
        amount,
        description,
        category,
        transaction_type,
        date,
    })
}

#[cfg(test)]
mod sqlite_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use rust_decimal::dec;
    use time::{OffsetDateTime, macros::datetime};

    use crate::{
        db::initialize,
        stores::TransactionStore,
        transaction::{NewTransaction, TransactionType},
    };

    use super::SqliteTransactionStore;

    fn get_test_store() -> SqliteTransactionStore {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        SqliteTransactionStore::new(Arc::new(Mutex::new(connection)))
    }

    #[test]
    fn create_assigns_sequential_ids_starting_at_one() {
        let store = get_test_store();

        let first = store
            .create(NewTransaction::new(
                dec!(1.00),
                "first",
                "Other",
                TransactionType::Expense,
            ))
            .unwrap();
        let second = store
            .create(NewTransaction::new(
                dec!(2.00),
                "second",
                "Other",
                TransactionType::Expense,
            ))
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn create_defaults_date_to_now() {
        let store = get_test_store();

        let transaction = store
            .create(NewTransaction::new(
                dec!(9.99),
                "undated",
                "Other",
                TransactionType::Expense,
            ))
            .unwrap();

        let age = OffsetDateTime::now_utc() - transaction.date;
        assert!(
            age >= time::Duration::ZERO && age < time::Duration::seconds(5),
            "default date {} should be the time of the create call",
            transaction.date
        );
    }

    #[test]
    fn create_keeps_amount_precision() {
        let store = get_test_store();

        store
            .create(NewTransaction::new(
                dec!(0.10),
                "ten cents",
                "Other",
                TransactionType::Expense,
            ))
            .unwrap();

        let transactions = store.list().unwrap();
        assert_eq!(transactions[0].amount, dec!(0.10));
    }

    #[test]
    fn list_orders_by_date_descending_then_id_descending() {
        let store = get_test_store();

        let old = store
            .create(
                NewTransaction::new(dec!(1.00), "old", "Other", TransactionType::Expense)
                    .date(datetime!(2025-01-01 12:00:00 UTC)),
            )
            .unwrap();
        let tied_first = store
            .create(
                NewTransaction::new(dec!(2.00), "tied first", "Other", TransactionType::Expense)
                    .date(datetime!(2025-03-01 12:00:00 UTC)),
            )
            .unwrap();
        let tied_second = store
            .create(
                NewTransaction::new(dec!(3.00), "tied second", "Other", TransactionType::Expense)
                    .date(datetime!(2025-03-01 12:00:00 UTC)),
            )
            .unwrap();

        let got: Vec<i64> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|transaction| transaction.id)
            .collect();

        assert_eq!(got, vec![tied_second.id, tied_first.id, old.id]);
    }

    #[test]
    fn list_returns_empty_for_fresh_store() {
        let store = get_test_store();

        assert_eq!(store.list().unwrap(), vec![]);
    }

    #[test]
    fn delete_removes_the_transaction() {
        let store = get_test_store();
        let transaction = store
            .create(NewTransaction::new(
                dec!(5.00),
                "doomed",
                "Other",
                TransactionType::Expense,
            ))
            .unwrap();

        store.delete(transaction.id).unwrap();

        assert_eq!(store.list().unwrap(), vec![]);
    }

    #[test]
    fn delete_of_absent_id_is_a_no_op() {
        let store = get_test_store();

        assert_eq!(store.delete(42), Ok(()));
    }

    #[test]
    fn round_trips_all_fields() {
        let store = get_test_store();
        let date = datetime!(2025-06-15 08:45:30 UTC);

        let created = store
            .create(
                NewTransaction::new(
                    dec!(123.45),
                    "Concert tickets",
                    "Entertainment",
                    TransactionType::Expense,
                )
                .date(date),
            )
            .unwrap();

        let listed = store.list().unwrap();

        assert_eq!(listed, vec![created.clone()]);
        assert_eq!(created.amount, dec!(123.45));
        assert_eq!(created.description, "Concert tickets");
        assert_eq!(created.category, "Entertainment");
        assert_eq!(created.transaction_type, TransactionType::Expense);
        assert_eq!(created.date, date);
    }
}
