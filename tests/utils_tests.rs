// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use t212intel::utils::{link_id, normalize_price, reformat_date};

#[test]
fn dates_are_rewritten_day_first() {
    assert_eq!(reformat_date("2021-03-05 14:30:00"), "05.03.2021 14:30:00");
    assert_eq!(reformat_date("2024-12-31 23:59:59"), "31.12.2024 23:59:59");
}

#[test]
fn fractional_seconds_are_dropped() {
    assert_eq!(reformat_date("2021-03-05 14:30:00.123"), "05.03.2021 14:30:00");
}

#[test]
fn bad_dates_pass_through() {
    assert_eq!(reformat_date("N/A"), "N/A");
    assert_eq!(reformat_date(""), "");
    assert_eq!(reformat_date("05.03.2021 14:30:00"), "05.03.2021 14:30:00");
    assert_eq!(reformat_date("2021-02-30 10:00:00"), "2021-02-30 10:00:00");
}

#[test]
fn dates_must_be_zero_padded_and_unsigned() {
    assert_eq!(reformat_date("2021-3-5 14:30:00"), "2021-3-5 14:30:00");
    assert_eq!(reformat_date("2021-03-05 4:30:00"), "2021-03-05 4:30:00");
    assert_eq!(reformat_date("+2021-03-05 14:30:00"), "+2021-03-05 14:30:00");
    assert_eq!(reformat_date("2021-03-05 14:30:00."), "2021-03-05 14:30:00.");
    assert_eq!(reformat_date("2021-03-05 14:30:00Z"), "2021-03-05 14:30:00Z");
}

#[test]
fn pence_prices_become_pounds() {
    assert_eq!(normalize_price("150", "GBX"), "1.5");
    assert_eq!(normalize_price("200", "GBX"), "2");
    assert_eq!(normalize_price("2954.5", "GBX"), "29.545");
    assert_eq!(normalize_price("0", "GBX"), "0");
    assert_eq!(normalize_price("1000", "GBX"), "10");
}

#[test]
fn pence_prices_are_capped_at_ten_fraction_digits() {
    assert_eq!(normalize_price("0.0000000001", "GBX"), "0");
    assert_eq!(normalize_price("1.23456789012", "GBX"), "0.0123456789");
}

#[test]
fn other_currencies_pass_through() {
    assert_eq!(normalize_price("150", "GBP"), "150");
    assert_eq!(normalize_price("150.00", "USD"), "150.00");
    assert_eq!(normalize_price("150", "gbx"), "150");
}

#[test]
fn unparseable_pence_prices_pass_through() {
    assert_eq!(normalize_price("n/a", "GBX"), "n/a");
    assert_eq!(normalize_price("", "GBX"), "");
    assert_eq!(normalize_price("1_000", "GBX"), "1_000");
}

#[test]
fn negative_pence_prices_keep_their_sign() {
    assert_eq!(normalize_price("-150", "GBX"), "-1.5");
    assert_eq!(normalize_price("-0", "GBX"), "-0");
    assert_eq!(normalize_price("-0.0000000001", "GBX"), "-0");
}

#[test]
fn link_id_keeps_last_eight_digits() {
    assert_eq!(link_id("abc123456789def"), "23456789");
    assert_eq!(link_id("EOF12345678"), "12345678");
    assert_eq!(link_id("EOF42"), "42");
    assert_eq!(link_id("no-digits"), "1");
    assert_eq!(link_id(""), "1");
}

#[test]
fn link_id_collisions_are_kept() {
    assert_eq!(link_id("9912345678"), link_id("1112345678"));
    assert_eq!(link_id("alpha"), link_id("beta"));
    assert_eq!(link_id("abc123456789def"), link_id("abc123456789def"));
}
