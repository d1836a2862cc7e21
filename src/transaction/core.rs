//! Defines the core data models for transactions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The database row ID of a transaction.
pub type TransactionId = i64;

/// Whether a transaction brings money in or sends it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned, e.g. salary or freelance work.
    Income,
    /// Money spent, e.g. rent or groceries.
    Expense,
}

impl TransactionType {
    /// The lowercase label used on the wire and in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Parse a stored label back into the enum.
    ///
    /// Returns `None` for anything other than `"income"` or `"expense"`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "income" => Some(TransactionType::Income),
            "expense" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

/// A single dated financial event, i.e. money that was either earned or spent.
///
/// Amounts are always positive; [Transaction::transaction_type] carries the
/// polarity. On the wire the amount is a plain JSON number and the date is an
/// RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store on creation.
    pub id: TransactionId,
    /// The amount of money earned or spent, always positive, fixed at two
    /// decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// A text description of what the transaction was for.
    pub description: String,
    /// A free-form category label, e.g. "Food", "Housing", "Salary".
    pub category: String,
    /// Whether this transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// A validated transaction that has not been persisted yet.
///
/// Produced by request body validation and consumed by
/// [crate::TransactionStore::create], which assigns the ID and fills in a
/// missing date with the current time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The amount of money earned or spent, always positive.
    pub amount: Decimal,
    /// A text description of what the transaction was for.
    pub description: String,
    /// A free-form category label.
    pub category: String,
    /// Whether this transaction is income or an expense.
    pub transaction_type: TransactionType,
    /// When the transaction happened. `None` means "now" at creation time.
    pub date: Option<OffsetDateTime>,
}

impl NewTransaction {
    /// Create a new transaction with the date left to the store to fill in.
    pub fn new(
        amount: Decimal,
        description: &str,
        category: &str,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            amount,
            description: description.to_owned(),
            category: category.to_owned(),
            transaction_type,
            date: None,
        }
    }

    /// Set an explicit date for the transaction.
    pub fn date(mut self, date: OffsetDateTime) -> Self {
        self.date = Some(date);
        self
    }
}
