// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Writes Intelinvest import files.

use crate::error::{ConvertError, Result};
use crate::models::{AssetDefinition, OutputRecord};
use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const FORMAT_VERSION: &str = "#CsvFormatVersion:v1";
pub const ASSETS_START: &str = "#AssetsDefinitionsStart.v1";
pub const ASSETS_END: &str = "#AssetsDefinitionsEnd";

fn row_writer<W: Write>(out: W) -> Writer<W> {
    WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(out)
}

fn write_err(section: &'static str) -> impl Fn(csv::Error) -> ConvertError {
    move |e| ConvertError::WriteOutput {
        section,
        source: e.into(),
    }
}

fn io_err(section: &'static str) -> impl Fn(std::io::Error) -> ConvertError {
    move |source| ConvertError::WriteOutput { section, source }
}

pub fn write_file(
    path: &Path,
    assets: &[AssetDefinition],
    records: &[OutputRecord],
) -> Result<()> {
    let file = File::create(path).map_err(|source| ConvertError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    let written = write_document(&mut out, assets, records);
    // flush even when the document failed half way
    let flushed = out.flush().map_err(io_err("file"));
    written.and(flushed)
}

pub fn write_document<W: Write>(
    mut out: W,
    assets: &[AssetDefinition],
    records: &[OutputRecord],
) -> Result<()> {
    writeln!(out, "{}", FORMAT_VERSION).map_err(io_err("header"))?;

    if !assets.is_empty() {
        writeln!(out, "{}", ASSETS_START).map_err(io_err("assets header"))?;
        let mut wtr = row_writer(&mut out);
        for asset in assets {
            wtr.write_record(asset.to_row()).map_err(write_err("asset"))?;
        }
        wtr.flush().map_err(io_err("asset"))?;
        drop(wtr);
        writeln!(out, "{}", ASSETS_END).map_err(io_err("assets end"))?;
        writeln!(out).map_err(io_err("empty line"))?;
    }

    let mut wtr = row_writer(&mut out);
    for record in records {
        wtr.write_record(record.to_row()).map_err(write_err("record"))?;
    }
    wtr.flush().map_err(io_err("record"))?;
    Ok(())
}
