// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::{custom_asset, is_custom_ticker, remap_ticker};
use crate::models::{AssetDefinition, OperationType, OutputRecord, SourceRecord};
use crate::utils::{link_id, normalize_price, reformat_date};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    InterestOnCash,
    MarketBuy,
    MarketSell,
    Unrecognized,
}

impl ActionKind {
    pub fn parse(action: &str) -> Self {
        match action {
            "Interest on cash" => ActionKind::InterestOnCash,
            "Market buy" => ActionKind::MarketBuy,
            "Market sell" => ActionKind::MarketSell,
            _ => ActionKind::Unrecognized,
        }
    }

    fn is_trade(self) -> bool {
        matches!(self, ActionKind::MarketBuy | ActionKind::MarketSell)
    }
}

pub fn convert(records: &[SourceRecord]) -> Vec<OutputRecord> {
    records.iter().flat_map(convert_record).collect()
}

pub fn convert_record(record: &SourceRecord) -> Vec<OutputRecord> {
    match ActionKind::parse(&record.action) {
        ActionKind::InterestOnCash => interest(record),
        ActionKind::MarketBuy => trade(record, OperationType::ShareBuy),
        ActionKind::MarketSell => trade(record, OperationType::ShareSell),
        ActionKind::Unrecognized => Vec::new(),
    }
}

fn interest(record: &SourceRecord) -> Vec<OutputRecord> {
    let date = reformat_date(&record.time);
    let link = link_id(&record.id);
    let note = format!("Income deposit from {}", date);
    vec![
        OutputRecord::cash(
            OperationType::Income,
            &date,
            &record.total,
            &record.currency_total,
            String::new(),
            &link,
            &record.id,
        ),
        OutputRecord::cash(
            OperationType::MoneyDeposit,
            &date,
            &record.total,
            &record.currency_total,
            note,
            &link,
            &record.id,
        ),
    ]
}

fn trade(record: &SourceRecord, side: OperationType) -> Vec<OutputRecord> {
    let date = reformat_date(&record.time);
    let link = link_id(&record.id);
    let name = if record.name.is_empty() {
        &record.ticker
    } else {
        &record.name
    };
    let (cash_kind, note) = match side {
        OperationType::ShareSell => (
            OperationType::MoneyDeposit,
            format!("Proceeds from {}", name),
        ),
        _ => (OperationType::MoneyWithdraw, format!("Payment for {}", name)),
    };

    let share = OutputRecord {
        kind: side,
        date: date.clone(),
        ticker_isin: ticker_isin(&record.ticker, &record.isin),
        quantity: record.number_of_shares.clone(),
        price: normalize_price(&record.price_per_share, &record.currency_price_per_share),
        fee: "0".to_string(),
        nkd: String::new(),
        nominal: String::new(),
        currency: record.currency_total.clone(),
        fee_currency: record.currency_total.clone(),
        note: String::new(),
        link_id: link.clone(),
        trade_system_id: record.id.clone(),
    };
    let cash = OutputRecord::cash(
        cash_kind,
        &date,
        &record.total,
        &record.currency_total,
        note,
        &link,
        &record.id,
    );
    vec![share, cash]
}

/// Combines ticker and ISIN into Intelinvest's `TICKER:ISIN` field.
pub fn ticker_isin(ticker: &str, isin: &str) -> String {
    let ticker = remap_ticker(ticker);
    if ticker.is_empty() {
        return isin.to_string();
    }
    if isin.is_empty() {
        return ticker.to_string();
    }
    if is_custom_ticker(ticker) {
        return format!("{}:{}", ticker, ticker);
    }
    format!("{}:{}", ticker, isin)
}

/// Definitions for custom assets that at least one trade touches, sorted by
/// ticker.
pub fn extract_assets(records: &[SourceRecord]) -> Vec<AssetDefinition> {
    let used: BTreeSet<&str> = records
        .iter()
        .filter(|r| !r.ticker.is_empty() && ActionKind::parse(&r.action).is_trade())
        .map(|r| r.ticker.as_str())
        .collect();
    used.into_iter().filter_map(custom_asset).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub rows: BTreeMap<OperationType, usize>,
    pub total_rows: usize,
    pub assets: usize,
}

pub fn summarize(records: &[OutputRecord], assets: &[AssetDefinition]) -> ConversionSummary {
    let mut rows = BTreeMap::new();
    for r in records {
        *rows.entry(r.kind).or_insert(0) += 1;
    }
    ConversionSummary {
        rows,
        total_rows: records.len(),
        assets: assets.len(),
    }
}
