// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerpulse::models::{EntryKind, Transaction};
use ledgerpulse::utils::{fingerprint, fmt_money, parse_amount};
use rust_decimal::Decimal;

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

#[test]
fn parse_amount_strips_separators() {
    assert_eq!(parse_amount("5,000"), Decimal::from(5000));
    assert_eq!(parse_amount("1,200.75"), "1200.75".parse::<Decimal>().unwrap());
}

#[test]
fn parse_amount_strips_currency_labels() {
    assert_eq!(parse_amount("TSh 2,500"), Decimal::from(2500));
    assert_eq!(parse_amount("$ 99"), Decimal::from(99));
}

#[test]
fn parse_amount_keeps_sign() {
    assert_eq!(parse_amount("-2,500"), Decimal::from(-2500));
}

#[test]
fn parse_amount_garbage_is_zero() {
    assert_eq!(parse_amount(""), Decimal::ZERO);
    assert_eq!(parse_amount("abc"), Decimal::ZERO);
    assert_eq!(parse_amount("12-34"), Decimal::ZERO);
}

#[test]
fn fmt_money_groups_thousands() {
    assert_eq!(fmt_money(&"1234.5".parse().unwrap(), "TSh"), "TSh 1,234.50");
    assert_eq!(
        fmt_money(&Decimal::from(1_000_000), "USD"),
        "USD 1,000,000.00"
    );
}

#[test]
fn fmt_money_negative_and_zero() {
    assert_eq!(fmt_money(&"-1234.5".parse().unwrap(), "TSh"), "TSh -1,234.50");
    assert_eq!(fmt_money(&Decimal::ZERO, "USD"), "USD 0.00");
}

#[test]
fn fingerprint_is_deterministic() {
    let a = vec![
        txn("a1", -500, "2026-08-06T10:00:00Z"),
        txn("a2", 900, "2026-08-05T10:00:00Z"),
    ];
    let b = a.clone();
    assert_eq!(fingerprint(&a), fingerprint(&b));
}

#[test]
fn fingerprint_sees_field_changes() {
    let a = vec![txn("a1", -500, "2026-08-06T10:00:00Z")];
    let mut b = a.clone();
    b[0].amount = Decimal::from(-501);
    assert_ne!(fingerprint(&a), fingerprint(&b));
}

#[test]
fn fingerprint_empty_set_is_stable() {
    assert_eq!(fingerprint(&[]), fingerprint(&[]));
}
