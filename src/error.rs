// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conversion failures. Row-level data problems never end up here.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to open file {}: {source}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read CSV: {0}")]
    ReadCsv(#[from] csv::Error),

    #[error("failed to read CSV: unbalanced quotes")]
    UnbalancedQuotes,

    #[error("file is empty or contains only header")]
    EmptyInput,

    #[error("failed to create file {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {section}: {source}")]
    WriteOutput {
        section: &'static str,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
