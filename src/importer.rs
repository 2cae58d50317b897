// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Reads Trading 212 CSV exports.
//!
//! Two layouts exist. Older exports carry a "Currency (Result)" column and
//! are at least 14 columns wide; newer ones drop it and are 13 wide, which
//! moves the total and its currency one column to the left.

use crate::error::{ConvertError, Result};
use crate::models::SourceRecord;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const MIN_COLUMNS: usize = 13;
const LEGACY_COLUMNS: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
    /// 13 columns, no result currency.
    Compact,
    /// 14 or more columns.
    Legacy,
}

impl SchemaVariant {
    /// `None` for rows too short to hold a record.
    pub fn detect(width: usize) -> Option<Self> {
        match width {
            w if w >= LEGACY_COLUMNS => Some(SchemaVariant::Legacy),
            w if w >= MIN_COLUMNS => Some(SchemaVariant::Compact),
            _ => None,
        }
    }

    fn total_idx(self) -> usize {
        match self {
            SchemaVariant::Compact => 11,
            SchemaVariant::Legacy => 12,
        }
    }

    fn currency_result_idx(self) -> Option<usize> {
        match self {
            SchemaVariant::Compact => None,
            SchemaVariant::Legacy => Some(11),
        }
    }

    /// Caller guarantees `row` is wide enough for this variant.
    pub fn record_from(self, row: &StringRecord) -> SourceRecord {
        let field = |i: usize| row.get(i).unwrap_or("").trim_start().to_string();
        let total = self.total_idx();
        SourceRecord {
            action: field(0),
            time: field(1),
            isin: field(2),
            ticker: field(3),
            name: field(4),
            notes: field(5),
            id: field(6),
            number_of_shares: field(7),
            price_per_share: field(8),
            currency_price_per_share: field(9),
            exchange_rate: field(10),
            currency_result: self.currency_result_idx().map(field).unwrap_or_default(),
            total: field(total),
            currency_total: field(total + 1),
        }
    }
}

pub fn parse_file(path: &Path) -> Result<Vec<SourceRecord>> {
    let file = File::open(path).map_err(|source| ConvertError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(file)
}

pub fn parse_reader<R: Read>(mut input: R) -> Result<Vec<SourceRecord>> {
    let mut raw = Vec::new();
    input
        .read_to_end(&mut raw)
        .map_err(|e| ConvertError::ReadCsv(e.into()))?;
    // csv reads an unterminated quote through to EOF instead of failing
    let quotes = raw.iter().filter(|&&b| b == b'"').count();
    if quotes % 2 != 0 {
        return Err(ConvertError::UnbalancedQuotes);
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_slice());

    let rows = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;
    if rows.len() < 2 {
        return Err(ConvertError::EmptyInput);
    }

    let mut compact = 0usize;
    let mut legacy = 0usize;
    let mut recs = Vec::with_capacity(rows.len() - 1);
    for row in rows.iter().skip(1) {
        let Some(variant) = SchemaVariant::detect(row.len()) else {
            continue;
        };
        match variant {
            SchemaVariant::Compact => compact += 1,
            SchemaVariant::Legacy => legacy += 1,
        }
        recs.push(variant.record_from(row));
    }
    tracing::debug!(compact, legacy, "parsed Trading 212 rows");
    Ok(recs)
}
