// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command};

pub fn build_cli() -> Command {
    command!()
        .about("Convert a Trading 212 CSV export into an Intelinvest import file")
        .arg(
            Arg::new("input")
                .help("Trading 212 CSV export")
                .value_name("INPUT")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .help("Intelinvest CSV file to write")
                .value_name("OUTPUT")
                .required(true),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Print a table of written rows per operation type")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the summary as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v, -vv, -vvv)")
                .action(ArgAction::Count),
        )
}
