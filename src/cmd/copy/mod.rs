// fanout-rs: Extension-Bucketed Directory Copier
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Copy command.
//!
//! ```text
//! validate_source --> prepare_destination --> walk::copy_tree --> "Completed in X.XX seconds"
//!   (fatal)             (fatal)                 (failures logged, never fatal)
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tokio::fs;
use tracing::{info, warn};

use crate::cli::Cli;
use crate::error::{DestinationError, FanoutResult, Result, SourceError};
use crate::walk::observer::TracingObserver;
use crate::walk::{WalkMode, WalkOptions, copy_tree};

/// Main handler for the copy command.
///
/// # Errors
///
/// Returns an error if the source is not an existing directory or the
/// destination cannot be created. Failures on individual files or
/// directories are logged and do not produce an error.
pub async fn run_copy_command(cli: &Cli) -> Result<()> {
    let started = Instant::now();

    validate_source(&cli.source).await?;
    prepare_destination(&cli.destination).await?;

    let options = build_walk_options(cli);
    let observer = Arc::new(TracingObserver::new(options.logs_successes()));
    copy_tree(&cli.source, &cli.destination, &options, observer).await?;

    info!("Completed in {:.2} seconds", started.elapsed().as_secs_f64());
    Ok(())
}

/// Checks that `source` exists and is a directory (symlinks are followed).
///
/// # Errors
///
/// Returns [`SourceError::Invalid`] otherwise.
pub async fn validate_source(source: &Path) -> FanoutResult<()> {
    match fs::metadata(source).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        _ => Err(SourceError::Invalid {
            path: source.to_path_buf(),
        }
        .into()),
    }
}

/// Creates the destination root and any missing parents.
///
/// # Errors
///
/// Returns [`DestinationError::Create`] if the directory cannot be created.
pub async fn prepare_destination(destination: &Path) -> FanoutResult<()> {
    fs::create_dir_all(destination).await.map_err(|source| {
        DestinationError::Create {
            path: destination.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Converts CLI arguments into walk options.
///
/// `--jobs` caps in-flight copies in concurrent mode and sets the thread
/// count in parallel mode.
#[must_use]
pub fn build_walk_options(cli: &Cli) -> WalkOptions {
    let mode = WalkMode::from(cli.mode);
    let builder = WalkOptions::builder().with_mode(mode);

    match (mode, cli.jobs) {
        (WalkMode::Concurrent, Some(jobs)) => builder.with_max_in_flight(jobs).build(),
        (WalkMode::Parallel, Some(jobs)) => builder.with_threads(jobs).build(),
        (WalkMode::Sequential, Some(_)) => {
            warn!("--jobs has no effect in sequential mode");
            builder.build()
        }
        (_, None) => builder.build(),
    }
}

#[cfg(test)]
mod tests;
