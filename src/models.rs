// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::utils::parse_amount;

/// Category assigned to records whose item name carries no usable prefix.
pub const DEFAULT_CATEGORY: &str = "General";

/// Categories the entry form offers for expenses.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "General",
    "Food",
    "Transport",
    "Rent",
    "Utilities",
    "Subscription",
    "Health",
    "Shopping",
    "Emergency",
    "Fun",
];

/// Categories the entry form offers for income.
pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Side Hustle",
    "Gift",
    "Investment",
    "Bonus",
    "Freelance",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Expense,
    Income,
}

impl EntryKind {
    pub fn from_amount(amount: Decimal) -> Self {
        if amount < Decimal::ZERO {
            Self::Expense
        } else {
            Self::Income
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }

    /// Category the entry form pre-selects for this side.
    pub fn default_category(self) -> &'static str {
        match self {
            Self::Expense => DEFAULT_CATEGORY,
            Self::Income => "Salary",
        }
    }
}

/// One ledger entry in the monthly working set.
///
/// `category` is a first-class field here; the backend still stores it as a
/// `"Category: Label"` prefix inside `item_name`, which [`Transaction::from_raw`]
/// splits apart when decoding legacy rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub category: String,
    pub label: String,
    /// Signed: negative is an expense, positive is income.
    pub amount: Decimal,
    pub kind: EntryKind,
    pub created_at: DateTime<Utc>,
    /// Ownership marker, carried through untouched. Filtering by owner is the
    /// repository's job.
    pub user_id: String,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }

    /// Decode one raw backend row, degrading field by field instead of
    /// failing: non-numeric amounts become zero, a missing category prefix
    /// falls back to "General", a missing `type` is derived from the amount
    /// sign, and an unreadable `created_at` lands on the Unix epoch so the
    /// record still counts toward balances without entering any dated bucket.
    pub fn from_raw(row: &Value) -> Self {
        let item_name = match row.get("item_name") {
            Some(Value::String(s)) => s.as_str(),
            _ => "",
        };
        let (category, label) = split_item_name(item_name);

        let amount = coerce_amount(row.get("amount"));

        let kind = match row.get("type").and_then(Value::as_str) {
            Some("income") => EntryKind::Income,
            Some("expense") => EntryKind::Expense,
            _ => EntryKind::from_amount(amount),
        };

        let created_at = match row.get("created_at").and_then(Value::as_str) {
            Some(s) => s.parse::<DateTime<Utc>>().unwrap_or_else(|_| {
                tracing::warn!("unreadable created_at '{}', using epoch", s);
                DateTime::UNIX_EPOCH
            }),
            None => DateTime::UNIX_EPOCH,
        };

        Transaction {
            id: raw_text(row, "id"),
            category,
            label,
            amount,
            kind,
            created_at,
            user_id: raw_text(row, "user_id"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload is not an array of records")]
    NotAnArray,
}

/// Decode a raw backend payload (a JSON array of transaction rows) into the
/// working set. Row-level anomalies degrade per [`Transaction::from_raw`];
/// only a structurally invalid payload is an error.
pub fn decode_records(payload: &str) -> Result<Vec<Transaction>, DecodeError> {
    let root: Value = serde_json::from_str(payload)?;
    let rows = root.as_array().ok_or(DecodeError::NotAnArray)?;
    Ok(rows.iter().map(Transaction::from_raw).collect())
}

/// Split a legacy `"Category: Label"` item name. Text before the first colon
/// is the category (trimmed, "General" when absent or blank); the remainder
/// is the free-text label.
pub fn split_item_name(item_name: &str) -> (String, String) {
    match item_name.split_once(':') {
        Some((prefix, rest)) => {
            let prefix = prefix.trim();
            let category = if prefix.is_empty() {
                DEFAULT_CATEGORY
            } else {
                prefix
            };
            (category.to_string(), rest.trim().to_string())
        }
        None => (DEFAULT_CATEGORY.to_string(), item_name.trim().to_string()),
    }
}

fn coerce_amount(v: Option<&Value>) -> Decimal {
    match v {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Decimal::from(i)
            } else {
                n.as_f64()
                    .and_then(|f| Decimal::try_from(f).ok())
                    .unwrap_or_else(|| {
                        tracing::warn!("non-numeric amount {}, coerced to 0", n);
                        Decimal::ZERO
                    })
            }
        }
        Some(Value::String(s)) => parse_amount(s),
        Some(other) => {
            if !other.is_null() {
                tracing::warn!("non-numeric amount {:?}, coerced to 0", other);
            }
            Decimal::ZERO
        }
        None => Decimal::ZERO,
    }
}

fn raw_text(row: &Value, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
