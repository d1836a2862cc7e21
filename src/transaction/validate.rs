//! Validation and coercion of untrusted request bodies into [NewTransaction].
//!
//! The checks run in a fixed order (amount, description, category, type,
//! date) so the "first failing field" reported to the client is deterministic
//! regardless of how the JSON object was keyed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use time::{Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description};

use crate::Error;

use super::core::{NewTransaction, TransactionType};

/// Validate and coerce a JSON request body into a [NewTransaction].
///
/// Amounts are accepted as JSON numbers or numeric strings and rescaled to
/// two decimal places. Dates are accepted as RFC 3339 strings, bare
/// `YYYY-MM-DD` dates, or Unix timestamps in milliseconds; a missing date is
/// left for the store to fill in with the current time.
///
/// # Errors
/// Returns [Error::Validation] naming the first field that failed its check.
pub fn parse_new_transaction(body: &Value) -> Result<NewTransaction, Error> {
    let Some(fields) = body.as_object() else {
        return Err(invalid("body", "Expected a JSON object"));
    };

    let amount = parse_amount(fields.get("amount"))?;
    let description = parse_required_text(fields.get("description"), "description")?;
    let category = parse_required_text(fields.get("category"), "category")?;
    let transaction_type = parse_type(fields.get("type"))?;
    let date = parse_date(fields.get("date"))?;

    Ok(NewTransaction {
        amount,
        description,
        category,
        transaction_type,
        date,
    })
}

fn invalid(field: &'static str, message: &str) -> Error {
    Error::Validation {
        field,
        message: message.to_owned(),
    }
}

fn parse_amount(value: Option<&Value>) -> Result<Decimal, Error> {
    let amount = match value {
        None | Some(Value::Null) => return Err(invalid("amount", "Amount is required")),
        // Going through the literal text keeps the full decimal precision of
        // the request body instead of squeezing the value through an f64.
        Some(Value::Number(number)) => number.to_string().parse::<Decimal>(),
        Some(Value::String(text)) => text.trim().parse::<Decimal>(),
        Some(_) => return Err(invalid("amount", "Amount must be a number")),
    }
    .map_err(|_| invalid("amount", "Amount must be a number"))?;

    if amount <= Decimal::ZERO {
        return Err(invalid("amount", "Amount must be a positive number"));
    }

    Ok(amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

fn parse_required_text(value: Option<&Value>, field: &'static str) -> Result<String, Error> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.clone()),
        _ => Err(Error::Validation {
            field,
            message: format!("{} is required", capitalize(field)),
        }),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn parse_type(value: Option<&Value>) -> Result<TransactionType, Error> {
    value
        .and_then(Value::as_str)
        .and_then(TransactionType::parse)
        .ok_or_else(|| invalid("type", "Type must be either \"income\" or \"expense\""))
}

fn parse_date(value: Option<&Value>) -> Result<Option<OffsetDateTime>, Error> {
    let date = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(text)) => parse_date_text(text),
        Some(Value::Number(number)) => number
            .as_i64()
            .and_then(|milliseconds| {
                OffsetDateTime::from_unix_timestamp_nanos(milliseconds as i128 * 1_000_000).ok()
            })
            .ok_or(()),
        Some(_) => Err(()),
    }
    .map_err(|_| invalid("date", "Date must be a timestamp or a date string"))?;

    Ok(Some(date))
}

fn parse_date_text(text: &str) -> Result<OffsetDateTime, ()> {
    if let Ok(date) = OffsetDateTime::parse(text, &Rfc3339) {
        return Ok(date);
    }

    // Date pickers commonly submit a bare calendar date.
    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .map(|date| date.midnight().assume_utc())
        .map_err(|_| ())
}
