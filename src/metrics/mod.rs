// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod projection;
pub mod trend;

pub use categories::{CategoryStat, aggregate};
pub use projection::{BURN_WINDOW_DAYS, Projection, project};
pub use trend::{TREND_WINDOW_DAYS, TrendPoint, daily_net_series};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{EntryKind, Transaction};

/// Runway below which the dashboard flags the balance as critical.
pub const LOW_RUNWAY_DAYS: i64 = 5;

/// Everything the dashboard shows, derived from one monthly working set.
/// Ephemeral: recomputed on every data change, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub net_balance: Decimal,
    pub total_income: Decimal,
    pub daily_burn_rate: Decimal,
    pub weekly_allowance: Decimal,
    pub today_expense: Decimal,
    pub is_over_burn: bool,
    pub runway_days: i64,
    pub category_stats: Vec<CategoryStat>,
    pub trend: Vec<TrendPoint>,
}

impl MetricsSnapshot {
    pub fn is_low_runway(&self) -> bool {
        self.runway_days < LOW_RUNWAY_DAYS
    }
}

/// Derive the full metrics snapshot.
///
/// Pure over `(transactions, now, view)`: the input is never mutated and
/// identical inputs always produce an identical snapshot, so hosts may
/// recompute on every change or memoize at will.
pub fn compute(
    transactions: &[Transaction],
    now: DateTime<Utc>,
    view: EntryKind,
) -> MetricsSnapshot {
    tracing::debug!(
        "computing snapshot over {} transactions ({} view)",
        transactions.len(),
        view.as_str()
    );
    let p = project(transactions, now);
    MetricsSnapshot {
        net_balance: p.net_balance,
        total_income: p.total_income,
        daily_burn_rate: p.daily_burn_rate,
        weekly_allowance: p.weekly_allowance,
        today_expense: p.today_expense,
        is_over_burn: p.is_over_burn,
        runway_days: p.runway_days,
        category_stats: aggregate(transactions, view),
        trend: daily_net_series(transactions, now),
    }
}
