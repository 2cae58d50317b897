// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fixed lookup tables for the Trading 212 → Intelinvest mapping.

use crate::models::AssetDefinition;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Trading 212 tickers that Intelinvest lists under an exchange-suffixed code.
pub static TICKER_REMAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("IGBE", "IGBE.L"),  // London Stock Exchange
        ("EPRA", "EPRA.PA"), // Euronext Paris
        ("XSGI", "DX2E.DE"), // Deutsche Börse
    ])
});

/// Tickers missing from the Intelinvest database. They are combined as
/// `TICKER:TICKER` and need a definition row in the output.
pub static CUSTOM_TICKERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| CUSTOM_ASSETS.keys().copied().collect());

// class, name, reference price, currency
type AssetRow = (&'static str, &'static str, &'static str, &'static str);

static CUSTOM_ASSETS: Lazy<HashMap<&'static str, AssetRow>> =
    Lazy::new(|| {
        HashMap::from([
            (
                "XMWX",
                ("ETF", "Xtrackers MSCI World ex USA UCITS ETF 1C", "29.54", "GBP"),
            ),
            (
                "HEMC",
                ("ETF", "HSBC MSCI Emerging Markets UCITS ETF USD (Acc)", "11.12", "GBP"),
            ),
            (
                "EMUG",
                ("ETF", "L&G ESG Emerging Markets Corporate Bond UCITS ETF", "6.61", "GBP"),
            ),
            (
                "V3GS",
                (
                    "ETF",
                    "Vanguard ESG Global Corporate Bond UCITS ETF GBP Hedged Accumulating",
                    "5.13",
                    "GBP",
                ),
            ),
        ])
    });

pub fn remap_ticker(ticker: &str) -> &str {
    TICKER_REMAP.get(ticker).copied().unwrap_or(ticker)
}

pub fn is_custom_ticker(ticker: &str) -> bool {
    CUSTOM_TICKERS.contains(ticker)
}

pub fn custom_asset(ticker: &str) -> Option<AssetDefinition> {
    CUSTOM_ASSETS
        .get_key_value(ticker)
        .map(|(t, (class, name, price, ccy))| AssetDefinition {
            r#type: class.to_string(),
            ticker: t.to_string(),
            name: name.to_string(),
            price: price.to_string(),
            currency: ccy.to_string(),
        })
}
