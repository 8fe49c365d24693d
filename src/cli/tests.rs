// fanout-rs: Extension-Bucketed Directory Copier
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use crate::cli::global::LogFormatArg;
use crate::cli::{Cli, ModeArg};
use clap::Parser;

#[test]
fn test_parse_source_only_defaults() {
    let cli = Cli::try_parse_from(["fanout", "photos"]).unwrap();

    assert_eq!(cli.source, Path::new("photos"));
    assert_eq!(cli.destination, Path::new("dist"));
    assert_eq!(cli.mode, ModeArg::Concurrent);
    assert_eq!(cli.jobs, None);
    assert_eq!(cli.global.log_level, None);
    assert_eq!(cli.global.log_format, LogFormatArg::Text);
}

#[test]
fn test_parse_all_options() {
    let cli = Cli::try_parse_from([
        "fanout",
        "-m",
        "parallel",
        "-j",
        "8",
        "-l",
        "4",
        "--file-log-level",
        "5",
        "--log-file",
        "run.log",
        "--log-format",
        "json",
        "/data/in",
        "/data/out",
    ])
    .unwrap();

    assert_eq!(cli.source, Path::new("/data/in"));
    assert_eq!(cli.destination, Path::new("/data/out"));
    assert_eq!(cli.mode, ModeArg::Parallel);
    assert_eq!(cli.jobs, Some(8));
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.file_log_level, Some(5));
    assert_eq!(cli.global.log_file.as_deref(), Some(Path::new("run.log")));
    assert_eq!(cli.global.log_format, LogFormatArg::Json);
}

#[test]
fn test_parse_sequential_mode() {
    let cli = Cli::try_parse_from(["fanout", "--mode", "sequential", "src"]).unwrap();
    assert_eq!(cli.mode, ModeArg::Sequential);
}

#[test]
fn test_source_is_required() {
    assert!(Cli::try_parse_from(["fanout"]).is_err());
}

#[test]
fn test_rejects_out_of_range_log_level() {
    assert!(Cli::try_parse_from(["fanout", "-l", "7", "src"]).is_err());
}

#[test]
fn test_rejects_unknown_mode() {
    assert!(Cli::try_parse_from(["fanout", "--mode", "threaded", "src"]).is_err());
}

#[test]
fn test_rejects_extra_positional() {
    assert!(Cli::try_parse_from(["fanout", "a", "b", "c"]).is_err());
}
