//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` and `NewTransaction` models
//! - Validation and coercion of untrusted request bodies
//! - The HTTP endpoints for listing, creating and deleting transactions
//! - The demonstration data seeded into an empty database

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod seed;
pub(crate) mod validate;

pub use core::{NewTransaction, Transaction, TransactionId, TransactionType};
pub use seed::seed_demo_data;

pub(crate) use create_endpoint::create_transaction_endpoint;
pub(crate) use delete_endpoint::delete_transaction_endpoint;
pub(crate) use list_endpoint::list_transactions_endpoint;
