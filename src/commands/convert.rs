// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::converter::{self, ConversionSummary};
use crate::error::Result as ConvertResult;
use crate::utils::{maybe_print_json, pretty_table};
use crate::{exporter, importer};
use anyhow::{Context, Result};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub records_read: usize,
    pub summary: ConversionSummary,
}

/// Reads `input`, converts it and writes the result to `output`.
pub fn convert_file(input: &Path, output: &Path) -> ConvertResult<ConversionReport> {
    let records = importer::parse_file(input)?;
    tracing::info!(input = %input.display(), records = records.len(), "read Trading 212 export");

    let assets = converter::extract_assets(&records);
    let converted = converter::convert(&records);
    tracing::debug!(
        assets = assets.len(),
        rows = converted.len(),
        "converted records"
    );

    exporter::write_file(output, &assets, &converted)?;
    tracing::info!(output = %output.display(), "wrote Intelinvest file");

    Ok(ConversionReport {
        records_read: records.len(),
        summary: converter::summarize(&converted, &assets),
    })
}

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let input = m.get_one::<String>("input").unwrap().trim();
    let output = m.get_one::<String>("output").unwrap().trim();

    let report = convert_file(Path::new(input), Path::new(output))
        .with_context(|| format!("Convert {} to {}", input, output))?;
    println!("Converted {} records to {}", report.records_read, output);

    if m.get_flag("summary") || m.get_flag("json") {
        print_summary(&report.summary, m.get_flag("json"))?;
    }
    Ok(())
}

fn print_summary(summary: &ConversionSummary, json: bool) -> Result<()> {
    if maybe_print_json(json, summary)? {
        return Ok(());
    }
    let mut rows: Vec<Vec<String>> = summary
        .rows
        .iter()
        .map(|(kind, n)| vec![kind.to_string(), n.to_string()])
        .collect();
    rows.push(vec!["TOTAL".into(), summary.total_rows.to_string()]);
    rows.push(vec!["ASSET DEFINITIONS".into(), summary.assets.to_string()]);
    println!("{}", pretty_table(&["Type", "Rows"], rows));
    Ok(())
}
