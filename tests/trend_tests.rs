// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use ledgerpulse::metrics::{TREND_WINDOW_DAYS, daily_net_series};
use ledgerpulse::models::{EntryKind, Transaction};
use rust_decimal::Decimal;

fn now() -> DateTime<Utc> {
    "2026-08-06T15:00:00Z".parse().unwrap()
}

fn txn(id: &str, amount: i64, created_at: &str) -> Transaction {
    Transaction {
        id: id.into(),
        category: "General".into(),
        label: "Test".into(),
        amount: Decimal::from(amount),
        kind: EntryKind::from_amount(Decimal::from(amount)),
        created_at: created_at.parse().unwrap(),
        user_id: "u1".into(),
    }
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn empty_set_still_yields_seven_zero_days() {
    let series = daily_net_series(&[], now());
    assert_eq!(series.len(), TREND_WINDOW_DAYS as usize);
    for point in &series {
        assert_eq!(point.value, Decimal::ZERO);
    }
}

#[test]
fn window_ends_today_and_ascends() {
    let series = daily_net_series(&[], now());
    assert_eq!(series[0].date, date("2026-07-31"));
    assert_eq!(series[6].date, date("2026-08-06"));
    for pair in series.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}

#[test]
fn nets_bucket_by_calendar_date() {
    let txns = vec![
        txn("a1", -700, "2026-08-06T01:10:00Z"),
        txn("a2", 2000, "2026-08-06T22:45:00Z"),
        txn("a3", -300, "2026-08-05T12:00:00Z"),
        txn("a4", 500, "2026-07-31T08:00:00Z"),
    ];
    let series = daily_net_series(&txns, now());
    assert_eq!(series[6].value, Decimal::from(1300)); // today: -700 + 2000
    assert_eq!(series[5].value, Decimal::from(-300)); // yesterday
    assert_eq!(series[0].value, Decimal::from(500)); // six days back
    for point in &series[1..5] {
        assert_eq!(point.value, Decimal::ZERO);
    }
}

#[test]
fn records_before_the_window_are_ignored() {
    let txns = vec![txn("a1", -9999, "2026-07-30T12:00:00Z")];
    let series = daily_net_series(&txns, now());
    for point in &series {
        assert_eq!(point.value, Decimal::ZERO);
    }
}

#[test]
fn window_shifts_with_now() {
    let txns = vec![txn("a1", -100, "2026-08-01T12:00:00Z")];
    let aug_first: DateTime<Utc> = "2026-08-01T23:00:00Z".parse().unwrap();
    let series = daily_net_series(&txns, aug_first);
    assert_eq!(series[6].date, date("2026-08-01"));
    assert_eq!(series[6].value, Decimal::from(-100));
}
