// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::models::{EntryKind, Transaction};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStat {
    pub name: String,
    /// Sum of absolute amounts in this category.
    pub value: Decimal,
    /// Share of the filtered total, 0..=100. Zero for every group when the
    /// filtered total is zero.
    pub percent: f64,
}

/// Per-category totals and shares for one side of the ledger, largest first.
///
/// The expense view keeps amounts below zero, the income view amounts above.
/// Ties keep the order categories were first encountered in the working set.
pub fn aggregate(transactions: &[Transaction], view: EntryKind) -> Vec<CategoryStat> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for t in transactions {
        let keep = match view {
            EntryKind::Expense => t.is_expense(),
            EntryKind::Income => t.is_income(),
        };
        if !keep {
            continue;
        }
        let slot = totals.entry(t.category.as_str()).or_insert_with(|| {
            order.push(t.category.as_str());
            Decimal::ZERO
        });
        *slot += t.amount.abs();
    }

    let total: Decimal = totals.values().copied().sum();
    let mut stats: Vec<CategoryStat> = order
        .iter()
        .map(|name| {
            let value = totals.get(name).copied().unwrap_or(Decimal::ZERO);
            let percent = if total > Decimal::ZERO {
                (value / total * Decimal::ONE_HUNDRED)
                    .to_f64()
                    .unwrap_or(0.0)
            } else {
                0.0
            };
            CategoryStat {
                name: (*name).to_string(),
                value,
                percent,
            }
        })
        .collect();

    // sort_by is stable, so equal values keep encounter order
    stats.sort_by(|a, b| b.value.cmp(&a.value));
    stats
}
