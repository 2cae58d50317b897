// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod converter;
pub mod error;
pub mod exporter;
pub mod importer;
pub mod logging;
pub mod models;
pub mod utils;
