//! Populates a fresh database with demonstration data.

use rust_decimal::dec;

use crate::{Error, stores::TransactionStore};

use super::core::{NewTransaction, TransactionType};

/// Seed an empty store with a handful of demonstration transactions so a
/// first visit to the dashboard has something to show.
///
/// This is a one-time bootstrap side effect: a store that already holds any
/// transaction is left untouched.
///
/// # Errors
/// Returns an error if the store cannot be read or written.
pub fn seed_demo_data<T: TransactionStore>(store: &T) -> Result<(), Error> {
    if !store.list()?.is_empty() {
        return Ok(());
    }

    tracing::info!("Empty database, seeding demonstration transactions.");

    let demo_transactions = [
        NewTransaction::new(dec!(5000), "Monthly Salary", "Salary", TransactionType::Income),
        NewTransaction::new(dec!(1200), "Rent Payment", "Housing", TransactionType::Expense),
        NewTransaction::new(dec!(150), "Grocery Shopping", "Food", TransactionType::Expense),
        NewTransaction::new(dec!(60), "Internet Bill", "Utilities", TransactionType::Expense),
    ];

    for new_transaction in demo_transactions {
        store.create(new_transaction)?;
    }

    Ok(())
}

#[cfg(test)]
mod seed_tests {
    use rusqlite::Connection;
    use rust_decimal::dec;

    use crate::{
        SqliteTransactionStore, create_app_state, stores::TransactionStore,
        transaction::{NewTransaction, TransactionType},
    };

    use super::seed_demo_data;

    fn get_test_store() -> SqliteTransactionStore {
        let connection = Connection::open_in_memory().unwrap();
        let state = create_app_state(connection).unwrap();

        state.transaction_store
    }

    #[test]
    fn seeds_an_empty_store() {
        let store = get_test_store();

        seed_demo_data(&store).unwrap();

        let transactions = store.list().unwrap();
        assert_eq!(transactions.len(), 4);

        let incomes = transactions
            .iter()
            .filter(|transaction| transaction.transaction_type == TransactionType::Income)
            .count();
        assert_eq!(incomes, 1);
    }

    #[test]
    fn seeding_twice_does_not_duplicate() {
        let store = get_test_store();

        seed_demo_data(&store).unwrap();
        seed_demo_data(&store).unwrap();

        assert_eq!(store.list().unwrap().len(), 4);
    }

    #[test]
    fn leaves_a_non_empty_store_alone() {
        let store = get_test_store();
        store
            .create(NewTransaction::new(
                dec!(1.00),
                "existing",
                "Other",
                TransactionType::Expense,
            ))
            .unwrap();

        seed_demo_data(&store).unwrap();

        assert_eq!(store.list().unwrap().len(), 1);
    }
}
