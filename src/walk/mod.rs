// fanout-rs: Extension-Bucketed Directory Copier
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tree walker / copier.
//!
//! ```text
//! copy_tree(source, dest, &WalkOptions, observer)
//!   Sequential  ignore::Walk          one file at a time
//!   Concurrent  tokio tasks           many copies in flight (semaphore cap)
//!   Parallel    ignore::WalkParallel  worker threads, flume --> observer
//!
//! every regular file:  classify --> create_dir_all(bucket) --> read --> write
//! directory failure:   DirectorySkipped, subtree abandoned
//! file failure:        CopyFailed, walk continues
//! symlinks / devices:  ignored
//! ```

pub mod concurrent;
pub mod copy;
pub mod observer;
pub mod parallel;
pub mod sequential;


use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use bon::Builder;
use ignore::WalkBuilder;
use tracing::debug;

use crate::error::{Result, ScanError};
use observer::{CopyObserver, WalkEvent};

/// Default cap on simultaneous copies in concurrent mode.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 256;

/// Scheduling model for a walk. All modes produce the same destination tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkMode {
    /// Single thread, one file read-then-written before the next.
    Sequential,
    /// Async tasks overlapping I/O across files.
    #[default]
    Concurrent,
    /// Worker threads enumerating and copying in parallel.
    Parallel,
}

impl std::fmt::Display for WalkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Concurrent => write!(f, "concurrent"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

/// Options for a walk.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Scheduling model
    #[builder(setters(name = with_mode), default)]
    mode: WalkMode,
    /// Copies in flight in concurrent mode (0 = unlimited)
    #[builder(setters(name = with_max_in_flight), default = DEFAULT_MAX_IN_FLIGHT)]
    max_in_flight: usize,
    /// Worker threads in parallel mode (0 = one per CPU)
    #[builder(setters(name = with_threads), default = 0)]
    threads: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    /// Returns the scheduling model.
    #[must_use]
    pub const fn mode(&self) -> WalkMode {
        self.mode
    }

    /// Returns the in-flight copy cap (0 = unlimited).
    #[must_use]
    pub const fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    /// Returns the worker thread count (0 = auto-detect).
    #[must_use]
    pub const fn threads(&self) -> usize {
        self.threads
    }

    /// Whether per-file successes deserve an `info` log line in this mode.
    #[must_use]
    pub const fn logs_successes(&self) -> bool {
        matches!(self.mode, WalkMode::Sequential)
    }
}

/// Copies every regular file under `source_root` into
/// `dest_root/<extension>/<file name>`.
///
/// Per-file and per-directory failures are reported to `observer` and never
/// stop the walk. `dest_root` must already exist.
///
/// # Errors
///
/// Returns an error only if a walker thread panicked.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use std::sync::Arc;
/// use fanout_rs::walk::{copy_tree, WalkOptions};
/// use fanout_rs::walk::observer::TracingObserver;
///
/// # async fn example() -> anyhow::Result<()> {
/// copy_tree(
///     Path::new("photos"),
///     Path::new("dist"),
///     &WalkOptions::default(),
///     Arc::new(TracingObserver::default()),
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn copy_tree(
    source_root: &Path,
    dest_root: &Path,
    options: &WalkOptions,
    observer: Arc<dyn CopyObserver>,
) -> Result<()> {
    let skip = nested_destination(source_root, dest_root).await;
    if let Some(dir) = &skip {
        observer.on_event(&WalkEvent::DestinationSkipped(dir.clone()));
    }

    debug!(
        source = %source_root.display(),
        destination = %dest_root.display(),
        mode = %options.mode(),
        "starting walk"
    );

    let source_root = source_root.to_path_buf();
    let dest_root = dest_root.to_path_buf();

    match options.mode() {
        WalkMode::Sequential => {
            tokio::task::spawn_blocking(move || {
                sequential::copy_tree_sequential(
                    &source_root,
                    &dest_root,
                    skip.as_deref(),
                    observer.as_ref(),
                );
            })
            .await
            .context("sequential walk panicked")?;
        }
        WalkMode::Concurrent => {
            concurrent::copy_tree_concurrent(
                source_root,
                dest_root,
                skip,
                options.max_in_flight(),
                observer,
            )
            .await;
        }
        WalkMode::Parallel => {
            let threads = options.threads();
            tokio::task::spawn_blocking(move || {
                parallel::copy_tree_parallel(
                    &source_root,
                    &dest_root,
                    skip.as_deref(),
                    threads,
                    observer.as_ref(),
                );
            })
            .await
            .context("parallel walk panicked")?;
        }
    }

    Ok(())
}

/// Returns the destination root as seen from `source_root` when it is
/// nested inside the source tree (and is not the source root itself).
async fn nested_destination(source_root: &Path, dest_root: &Path) -> Option<PathBuf> {
    let source = tokio::fs::canonicalize(source_root).await.ok()?;
    let dest = tokio::fs::canonicalize(dest_root).await.ok()?;
    let relative = dest.strip_prefix(&source).ok()?;
    if relative.as_os_str().is_empty() {
        return None;
    }
    Some(source_root.join(relative))
}

/// Builds an `ignore` walker that visits everything: no hidden-file or
/// ignore-file filtering, symlinks not followed.
pub(super) fn build_walker(root: &Path, skip: Option<&Path>) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.follow_links(false);

    if let Some(skip) = skip {
        let skip = skip.to_path_buf();
        builder.filter_entry(move |entry| entry.path() != skip.as_path());
    }

    builder
}

/// Converts an `ignore` walk error into a [`ScanError`] for the directory it
/// happened in (`fallback` when the error carries no path).
pub(super) fn scan_error(err: ignore::Error, fallback: &Path) -> ScanError {
    let dir = error_path(&err).unwrap_or(fallback).to_path_buf();
    let message = err.to_string();
    let source = err.into_io_error().unwrap_or_else(|| io::Error::other(message));
    ScanError::from_io(dir, source)
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Partial(errs) => errs.first().and_then(error_path),
        _ => None,
    }
}
