// fanout-rs: Extension-Bucketed Directory Copier
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Parser;
use tempfile::TempDir;

use super::{build_walk_options, prepare_destination, run_copy_command, validate_source};
use crate::cli::Cli;
use crate::error::FanoutError;
use crate::walk::{DEFAULT_MAX_IN_FLIGHT, WalkMode};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("fanout").chain(args.iter().copied())).unwrap()
}

#[tokio::test]
async fn test_validate_source_accepts_directory() {
    let temp = temp_dir();
    assert!(validate_source(temp.path()).await.is_ok());
}

#[tokio::test]
async fn test_validate_source_rejects_missing_path() {
    let temp = temp_dir();
    let missing = temp.path().join("nope");

    let err = validate_source(&missing).await.unwrap_err();

    assert!(matches!(err, FanoutError::Source(_)));
    assert!(err.to_string().ends_with("does not exist or is not a directory"));
}

#[tokio::test]
async fn test_validate_source_rejects_file() {
    let temp = temp_dir();
    let file = temp.path().join("file.txt");
    std::fs::write(&file, "x").unwrap();

    assert!(matches!(
        validate_source(&file).await,
        Err(FanoutError::Source(_))
    ));
}

#[tokio::test]
async fn test_prepare_destination_creates_parents_and_is_idempotent() {
    let temp = temp_dir();
    let dest = temp.path().join("a/b/dist");

    prepare_destination(&dest).await.unwrap();
    prepare_destination(&dest).await.unwrap();

    assert!(dest.is_dir());
}

#[tokio::test]
async fn test_prepare_destination_fails_on_file() {
    let temp = temp_dir();
    let dest = temp.path().join("dist");
    std::fs::write(&dest, "in the way").unwrap();

    assert!(matches!(
        prepare_destination(&dest).await,
        Err(FanoutError::Destination(_))
    ));
}

#[test]
fn test_build_walk_options_jobs_per_mode() {
    let concurrent = build_walk_options(&cli(&["-j", "4", "src"]));
    assert_eq!(concurrent.mode(), WalkMode::Concurrent);
    assert_eq!(concurrent.max_in_flight(), 4);
    assert_eq!(concurrent.threads(), 0);

    let parallel = build_walk_options(&cli(&["-m", "parallel", "-j", "3", "src"]));
    assert_eq!(parallel.mode(), WalkMode::Parallel);
    assert_eq!(parallel.threads(), 3);
    assert_eq!(parallel.max_in_flight(), DEFAULT_MAX_IN_FLIGHT);

    let sequential = build_walk_options(&cli(&["-m", "sequential", "-j", "3", "src"]));
    assert_eq!(sequential.mode(), WalkMode::Sequential);
    assert!(sequential.logs_successes());

    let defaults = build_walk_options(&cli(&["src"]));
    assert_eq!(defaults.max_in_flight(), DEFAULT_MAX_IN_FLIGHT);
}

#[tokio::test]
async fn test_run_copy_command_missing_source_creates_no_destination() {
    let temp = temp_dir();
    let source = temp.path().join("missing");
    let dest = temp.path().join("out");

    let result = run_copy_command(&cli(&[
        source.to_str().unwrap(),
        dest.to_str().unwrap(),
    ]))
    .await;

    assert!(result.is_err());
    assert!(!dest.exists());
}

#[tokio::test]
async fn test_run_copy_command_copies_tree() {
    let temp = temp_dir();
    let source = temp.path().join("in");
    let dest = temp.path().join("out/nested");
    std::fs::create_dir_all(source.join("deep/er")).unwrap();
    std::fs::write(source.join("deep/er/song.MP3"), "la").unwrap();

    run_copy_command(&cli(&[
        "-m",
        "sequential",
        source.to_str().unwrap(),
        dest.to_str().unwrap(),
    ]))
    .await
    .unwrap();

    assert_eq!(std::fs::read_to_string(dest.join("mp3/song.MP3")).unwrap(), "la");
}
