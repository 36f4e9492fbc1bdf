// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::models::Transaction;

/// Inclusive calendar-date range for one month's working set, first day
/// through last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthWindow {
    /// Window for the month containing `now`.
    pub fn containing(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let last = month_last_day(today.year(), today.month());
        MonthWindow {
            start: today.with_day(1).unwrap_or(today),
            end: today.with_day(last).unwrap_or(today),
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        let d = at.date_naive();
        self.start <= d && d <= self.end
    }
}

fn month_last_day(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
    }
}

/// Supplies the monthly working set, newest first.
///
/// Implemented by the host against whatever backend stores the ledger; the
/// metrics engine only ever sees the records this returns and never touches
/// storage itself.
pub trait TransactionSource {
    fn month_transactions(&self, window: &MonthWindow) -> Result<Vec<Transaction>>;
}
