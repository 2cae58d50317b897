// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;
use std::fmt;

/// One row of a Trading 212 export. Every field is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRecord {
    pub action: String,
    pub time: String,
    pub isin: String,
    pub ticker: String,
    pub name: String,
    pub notes: String,
    pub id: String,
    pub number_of_shares: String,
    pub price_per_share: String,
    pub currency_price_per_share: String,
    pub exchange_rate: String,
    pub currency_result: String, // empty for compact exports
    pub total: String,
    pub currency_total: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Income,
    #[serde(rename = "MONEYDEPOSIT")]
    MoneyDeposit,
    #[serde(rename = "MONEYWITHDRAW")]
    MoneyWithdraw,
    ShareBuy,
    ShareSell,
}

impl OperationType {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationType::Income => "INCOME",
            OperationType::MoneyDeposit => "MONEYDEPOSIT",
            OperationType::MoneyWithdraw => "MONEYWITHDRAW",
            OperationType::ShareBuy => "SHARE_BUY",
            OperationType::ShareSell => "SHARE_SELL",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of an Intelinvest import file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub kind: OperationType,
    pub date: String,
    pub ticker_isin: String,
    pub quantity: String,
    pub price: String,
    pub fee: String,
    pub nkd: String,
    pub nominal: String,
    pub currency: String,
    pub fee_currency: String,
    pub note: String,
    pub link_id: String,
    pub trade_system_id: String,
}

impl OutputRecord {
    /// A cash-only row: no ticker, quantity or fee.
    pub fn cash(
        kind: OperationType,
        date: &str,
        amount: &str,
        currency: &str,
        note: String,
        link_id: &str,
        trade_system_id: &str,
    ) -> Self {
        Self {
            kind,
            date: date.to_string(),
            ticker_isin: String::new(),
            quantity: String::new(),
            price: amount.to_string(),
            fee: String::new(),
            nkd: String::new(),
            nominal: String::new(),
            currency: currency.to_string(),
            fee_currency: String::new(),
            note,
            link_id: link_id.to_string(),
            trade_system_id: trade_system_id.to_string(),
        }
    }

    pub fn to_row(&self) -> [&str; 13] {
        [
            self.kind.as_str(),
            &self.date,
            &self.ticker_isin,
            &self.quantity,
            &self.price,
            &self.fee,
            &self.nkd,
            &self.nominal,
            &self.currency,
            &self.fee_currency,
            &self.note,
            &self.link_id,
            &self.trade_system_id,
        ]
    }
}

/// A security the destination does not know yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDefinition {
    pub r#type: String,
    pub ticker: String,
    pub name: String,
    pub price: String,
    pub currency: String,
}

impl AssetDefinition {
    pub fn to_row(&self) -> [&str; 9] {
        [
            &self.r#type,
            &self.ticker,
            &self.name,
            &self.price,
            &self.currency,
            "", // url
            "", // selector
            "",
            "",
        ]
    }
}
