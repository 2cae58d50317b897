// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDateTime;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use std::str::FromStr;

const SOURCE_DATETIME: &str = "%Y-%m-%d %H:%M:%S%.f";
const TARGET_DATETIME: &str = "%d.%m.%Y %H:%M:%S";

/// Minor-unit currency quoted in pence.
const PENCE: &str = "GBX";
const MAX_FRACTION_DIGITS: u32 = 10;
const LINK_ID_DIGITS: usize = 8;

/// `YYYY-MM-DD HH:MM:SS` with every field zero padded, optionally followed
/// by `.` and fractional digits. chrono alone accepts `2021-3-5` and a sign.
fn has_source_shape(s: &str) -> bool {
    const SHAPE: &[u8; 19] = b"dddd-dd-dd dd:dd:dd";
    let b = s.as_bytes();
    if b.len() < SHAPE.len() {
        return false;
    }
    let (head, frac) = b.split_at(SHAPE.len());
    let head_ok = head.iter().zip(SHAPE).all(|(c, want)| match want {
        b'd' => c.is_ascii_digit(),
        _ => c == want,
    });
    let frac_ok = match frac {
        [] => true,
        [b'.', digits @ ..] => !digits.is_empty() && digits.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    head_ok && frac_ok
}

pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    if !has_source_shape(s) {
        return None;
    }
    NaiveDateTime::parse_from_str(s, SOURCE_DATETIME).ok()
}

/// `2021-03-05 14:30:00` becomes `05.03.2021 14:30:00`; anything that does
/// not parse is returned as is.
pub fn reformat_date(s: &str) -> String {
    match parse_datetime(s) {
        Some(dt) => dt.format(TARGET_DATETIME).to_string(),
        None => s.to_string(),
    }
}

pub fn parse_decimal(s: &str) -> Option<Decimal> {
    // rust_decimal treats `_` as a digit separator
    if s.contains('_') {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// At most ten fraction digits, no trailing zeros. A negative value that
/// rounds to zero keeps its sign.
pub fn format_decimal(d: Decimal) -> String {
    let rounded = d.round_dp(MAX_FRACTION_DIGITS).normalize();
    if rounded.is_zero() {
        return if d.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    rounded.to_string()
}

/// Converts pence prices to pounds. Other currencies, and values that are
/// not numbers, pass through.
pub fn normalize_price(price: &str, currency: &str) -> String {
    if currency != PENCE {
        return price.to_string();
    }
    match parse_decimal(price) {
        Some(p) => {
            let mut pounds = p / Decimal::ONE_HUNDRED;
            pounds.set_sign_negative(price.starts_with('-'));
            format_decimal(pounds)
        }
        None => price.to_string(),
    }
}

/// Last eight digits of the trade id, or "1" when it has none.
pub fn link_id(trade_system_id: &str) -> String {
    let digits: Vec<char> = trade_system_id
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return "1".to_string();
    }
    let start = digits.len().saturating_sub(LINK_ID_DIGITS);
    digits[start..].iter().collect()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(json_flag: bool, v: &T) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    Ok(false)
}
