// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use t212intel::catalog::custom_asset;
use t212intel::error::ConvertError;
use t212intel::exporter;
use t212intel::models::{OperationType, OutputRecord};
use std::io::{self, Write};
use tempfile::tempdir;

/// Accepts `budget` bytes, then fails every write.
struct FailingWriter {
    budget: usize,
    written: Vec<u8>,
}

impl FailingWriter {
    fn new(budget: usize) -> Self {
        Self {
            budget,
            written: Vec::new(),
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.len() > self.budget {
            return Err(io::Error::other("disk full"));
        }
        self.budget -= buf.len();
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

const VERSION_LINE: &str = "#CsvFormatVersion:v1\n";
const ASSETS_START_LINE: &str = "#AssetsDefinitionsStart.v1\n";

fn deposit(note: &str) -> OutputRecord {
    OutputRecord::cash(
        OperationType::MoneyDeposit,
        "05.03.2021 14:30:00",
        "0.37",
        "GBP",
        note.to_string(),
        "1",
        "interest",
    )
}

fn render(assets: &[t212intel::models::AssetDefinition], records: &[OutputRecord]) -> String {
    let mut buf = Vec::new();
    exporter::write_document(&mut buf, assets, records).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn document_without_assets_has_no_asset_section() {
    let out = render(&[], &[deposit("Income deposit")]);
    assert_eq!(
        out,
        "#CsvFormatVersion:v1\n\
         MONEYDEPOSIT;05.03.2021 14:30:00;;;0.37;;;;GBP;;Income deposit;1;interest\n"
    );
}

#[test]
fn asset_section_precedes_records() {
    let asset = custom_asset("XMWX").unwrap();
    let out = render(&[asset], &[deposit("n")]);
    assert_eq!(
        out,
        "#CsvFormatVersion:v1\n\
         #AssetsDefinitionsStart.v1\n\
         ETF;XMWX;Xtrackers MSCI World ex USA UCITS ETF 1C;29.54;GBP;;;;\n\
         #AssetsDefinitionsEnd\n\
         \n\
         MONEYDEPOSIT;05.03.2021 14:30:00;;;0.37;;;;GBP;;n;1;interest\n"
    );
}

#[test]
fn empty_document_is_just_the_version_marker() {
    assert_eq!(render(&[], &[]), "#CsvFormatVersion:v1\n");
}

#[test]
fn every_record_row_has_thirteen_fields() {
    let out = render(&[], &[deposit("a"), deposit("b")]);
    for line in out.lines().skip(1) {
        assert_eq!(line.split(';').count(), 13);
    }
}

#[test]
fn notes_with_delimiters_are_quoted() {
    let out = render(&[], &[deposit("a;b")]);
    assert!(out.contains(";\"a;b\";"));
}

#[test]
fn write_file_creates_the_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    exporter::write_file(&path, &[], &[deposit("x")]).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("#CsvFormatVersion:v1\n"));
    assert_eq!(contents.lines().count(), 2);
}

#[test]
fn write_file_fails_when_output_cannot_be_created() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.csv");
    let err = exporter::write_file(&path, &[], &[]).unwrap_err();
    assert!(matches!(err, ConvertError::CreateOutput { .. }));
}

#[test]
fn failing_record_write_is_fatal() {
    let mut out = FailingWriter::new(VERSION_LINE.len());
    let err = exporter::write_document(&mut out, &[], &[deposit("x")]).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::WriteOutput {
            section: "record",
            ..
        }
    ));
    assert_eq!(out.written, VERSION_LINE.as_bytes());
}

#[test]
fn failing_asset_write_is_fatal() {
    let asset = custom_asset("HEMC").unwrap();
    let mut out = FailingWriter::new(VERSION_LINE.len() + ASSETS_START_LINE.len());
    let err = exporter::write_document(&mut out, &[asset], &[deposit("x")]).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::WriteOutput {
            section: "asset",
            ..
        }
    ));
}

#[test]
fn failing_header_write_is_fatal() {
    let mut out = FailingWriter::new(0);
    let err = exporter::write_document(&mut out, &[], &[]).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::WriteOutput {
            section: "header",
            ..
        }
    ));
    assert!(err.to_string().contains("disk full"));
}

#[cfg(target_os = "linux")]
#[test]
fn write_file_reports_a_full_device() {
    let err = exporter::write_file(std::path::Path::new("/dev/full"), &[], &[deposit("x")])
        .unwrap_err();
    assert!(matches!(err, ConvertError::WriteOutput { .. }));
}
