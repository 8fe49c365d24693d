// fanout-rs: Extension-Bucketed Directory Copier
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for fanout-rs using clap derive.
//!
//! # Usage
//!
//! ```text
//! fanout [options] <SOURCE> [DESTINATION=dist]
//!   -m, --mode sequential|concurrent|parallel
//!   -j, --jobs N
//!   logging: -l/--log-level, --file-log-level, --log-file, --log-format
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::cli::global::GlobalOptions;
use crate::walk::WalkMode;

/// Copies a directory tree into one folder per file extension.
#[derive(Debug, Parser)]
#[command(
    name = "fanout",
    author,
    version,
    about = "Copies a directory tree into one folder per file extension",
    long_about = "fanout-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Recursively copies every regular file under SOURCE into\n\
                  DESTINATION/<extension>/<file name>. Extensions are lower-cased;\n\
                  files without one go to DESTINATION/no_extension. The source\n\
                  directory structure is not kept, so files with the same name\n\
                  overwrite each other.",
    after_help = "EXIT STATUS:\n\n\
                  1 if SOURCE does not exist or is not a directory, or DESTINATION\n\
                  cannot be created. 0 otherwise, even if individual files failed\n\
                  to copy; those failures are logged."
)]
pub struct Cli {
    /// Directory to copy from.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory to copy into.
    #[arg(value_name = "DESTINATION", default_value = "dist")]
    pub destination: PathBuf,

    /// How file copies are scheduled.
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = ModeArg::Concurrent)]
    pub mode: ModeArg,

    /// Concurrent mode: maximum copies in flight (0 = unlimited, default 256).
    /// Parallel mode: worker threads (0 = one per CPU, the default).
    #[arg(short = 'j', long = "jobs", value_name = "N")]
    pub jobs: Option<usize>,

    /// Logging options
    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Scheduling model for the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// One file at a time.
    Sequential,
    /// Overlapping async I/O on many files.
    Concurrent,
    /// Worker threads walking and copying in parallel.
    Parallel,
}

impl From<ModeArg> for WalkMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sequential => Self::Sequential,
            ModeArg::Concurrent => Self::Concurrent,
            ModeArg::Parallel => Self::Parallel,
        }
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
