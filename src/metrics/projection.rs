// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::models::Transaction;

/// Fixed smoothing divisor for the daily spend allowance. Deliberately not
/// the number of days elapsed or remaining in the month.
pub const BURN_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub net_balance: Decimal,
    pub total_income: Decimal,
    pub daily_burn_rate: Decimal,
    pub weekly_allowance: Decimal,
    pub today_expense: Decimal,
    pub is_over_burn: bool,
    pub runway_days: i64,
}

/// Income, burn rate, and runway over the full working set.
pub fn project(transactions: &[Transaction], now: DateTime<Utc>) -> Projection {
    let net_balance: Decimal = transactions.iter().map(|t| t.amount).sum();
    let total_income: Decimal = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();

    let daily_burn_rate = total_income / Decimal::from(BURN_WINDOW_DAYS);
    let weekly_allowance = total_income / Decimal::from(4);

    let today = now.date_naive();
    let today_expense: Decimal = transactions
        .iter()
        .filter(|t| t.is_expense() && t.created_at.date_naive() == today)
        .map(|t| t.abs_amount())
        .sum();

    let is_over_burn = today_expense > daily_burn_rate && daily_burn_rate > Decimal::ZERO;

    // Saturates: non-positive balance or zero burn reports zero runway,
    // never a negative or unbounded figure.
    let runway_days = if net_balance > Decimal::ZERO && daily_burn_rate > Decimal::ZERO {
        (net_balance / daily_burn_rate)
            .floor()
            .to_i64()
            .unwrap_or(i64::MAX)
    } else {
        0
    };

    Projection {
        net_balance,
        total_income,
        daily_burn_rate,
        weekly_allowance,
        today_expense,
        is_over_burn,
        runway_days,
    }
}
