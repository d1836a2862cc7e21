//! Transaction data aggregation for the dashboard.
//!
//! Provides the derived summary the dashboard cards and charts are drawn
//! from: income and expense totals, the running balance, and expenses grouped
//! by category. The summary is a pure function of the transaction set and is
//! recomputed in full on every query.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transaction::{Transaction, TransactionType};

/// The derived financial summary of a set of transactions.
///
/// Never persisted; see [compute_stats]. All amounts cross the wire as plain
/// JSON numbers under camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceStats {
    /// The sum of all income amounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    /// The sum of all expense amounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expenses: Decimal,
    /// Income minus expenses. Negative when more was spent than earned.
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    /// The summed expense amount per category. Categories without any expense
    /// are omitted rather than reported as zero.
    #[serde(with = "float_map")]
    pub expenses_by_category: HashMap<String, Decimal>,
}

/// Compute the financial summary of `transactions`.
///
/// A single pass sums income and expense amounts and accumulates the
/// per-category expense totals. The result depends only on the values in
/// `transactions`, not on their order. An empty slice yields zero totals and
/// an empty category map.
pub fn compute_stats(transactions: &[Transaction]) -> FinanceStats {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    let mut expenses_by_category: HashMap<String, Decimal> = HashMap::new();

    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => total_income += transaction.amount,
            TransactionType::Expense => {
                total_expenses += transaction.amount;
                *expenses_by_category
                    .entry(transaction.category.clone())
                    .or_insert(Decimal::ZERO) += transaction.amount;
            }
        }
    }

    FinanceStats {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        expenses_by_category,
    }
}

/// Serde helpers that put a category map on the wire as a JSON object of
/// plain numbers, mirroring what `rust_decimal::serde::float` does for the
/// scalar fields.
mod float_map {
    use std::collections::HashMap;

    use rust_decimal::{Decimal, prelude::ToPrimitive};
    use serde::{Deserialize, Deserializer, Serializer, ser::SerializeMap};

    pub fn serialize<S: Serializer>(
        map: &HashMap<String, Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut entries = serializer.serialize_map(Some(map.len()))?;

        for (category, total) in map {
            entries.serialize_entry(category, &total.to_f64().unwrap_or_default())?;
        }

        entries.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<HashMap<String, Decimal>, D::Error> {
        let raw = HashMap::<String, f64>::deserialize(deserializer)?;

        raw.into_iter()
            .map(|(category, total)| {
                Decimal::try_from(total)
                    .map(|total| (category, total))
                    .map_err(serde::de::Error::custom)
            })
            .collect()
    }
}
