// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Transaction;

/// Length of the trailing daily net-flow window.
pub const TREND_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Daily net flow for the 7 calendar days ending on `now`'s date, oldest
/// first. Always exactly 7 points; days without activity are zero, so
/// callers may index the series positionally.
pub fn daily_net_series(transactions: &[Transaction], now: DateTime<Utc>) -> Vec<TrendPoint> {
    let today = now.date_naive();
    (0..TREND_WINDOW_DAYS)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            let value = transactions
                .iter()
                .filter(|t| t.created_at.date_naive() == date)
                .map(|t| t.amount)
                .sum();
            TrendPoint { date, value }
        })
        .collect()
}
