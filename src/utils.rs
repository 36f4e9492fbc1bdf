// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::models::Transaction;

static AMOUNT_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9.\-]").expect("static amount pattern"));

/// Parse a user-entered or wire amount string, tolerating currency symbols,
/// spaces, and thousands separators. Anything that still fails to parse
/// after cleanup yields zero.
pub fn parse_amount(s: &str) -> Decimal {
    let cleaned = AMOUNT_NOISE.replace_all(s, "");
    match cleaned.parse::<Decimal>() {
        Ok(d) => d,
        Err(_) => {
            if !s.trim().is_empty() {
                tracing::warn!("unparseable amount '{}', coerced to 0", s);
            }
            Decimal::ZERO
        }
    }
}

/// Format an amount behind its display currency label, with thousand
/// separators and 2 decimal places. The label is cosmetic; no conversion.
/// e.g. `fmt_money(&dec, "TSh")` → `"TSh 1,234.50"`
pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    let rounded = d.round_dp(2);
    let formatted = format!("{:.2}", rounded.abs());
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{} {}{}.{}", ccy, sign, with_commas, dec_part)
}

/// FNV-1a content fingerprint of a working set.
///
/// Hosts that memoize computed snapshots can key them on this; identical
/// inputs always hash identically, so a cached snapshot must equal what a
/// fresh recomputation would produce. Order-sensitive, matching the ordered
/// working set the repository supplies.
pub fn fingerprint(transactions: &[Transaction]) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for t in transactions {
        let line = format!(
            "{}|{}|{}|{}|{}|{}",
            t.id,
            t.category,
            t.label,
            t.amount,
            t.kind.as_str(),
            t.created_at.timestamp()
        );
        for &byte in line.as_bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x100000001b3);
        }
        hash ^= b'\n' as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
