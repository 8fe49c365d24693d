// fanout-rs: Extension-Bucketed Directory Copier
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Walk events and the observers that consume them.
//!
//! ```text
//! walker --WalkEvent--> CopyObserver
//!                         TracingObserver    error/info/debug log lines
//!                         RecordingObserver  in-memory, for tests
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use tracing::{debug, error, info};

use super::copy::CopiedFile;
use crate::error::{CopyError, ScanError};

/// Something that happened during a walk.
#[derive(Debug)]
pub enum WalkEvent {
    /// A file was copied into its bucket.
    Copied(CopiedFile),
    /// A file could not be copied; the walk continues.
    CopyFailed(CopyError),
    /// A directory could not be enumerated; its subtree was skipped.
    DirectorySkipped(ScanError),
    /// The destination root lies inside the source tree and was not descended into.
    DestinationSkipped(PathBuf),
}

impl From<Result<CopiedFile, CopyError>> for WalkEvent {
    fn from(result: Result<CopiedFile, CopyError>) -> Self {
        match result {
            Ok(copied) => Self::Copied(copied),
            Err(err) => Self::CopyFailed(err),
        }
    }
}

/// Receives walk events. Called from whichever thread or task produced them.
pub trait CopyObserver: Send + Sync {
    fn on_event(&self, event: &WalkEvent);
}

/// Reports walk events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver {
    log_successes: bool,
}

impl TracingObserver {
    /// `log_successes` promotes per-file success lines from `debug` to `info`.
    #[must_use]
    pub const fn new(log_successes: bool) -> Self {
        Self { log_successes }
    }

    fn copied(&self, copied: &CopiedFile) {
        let (source, destination) = (copied.source().display(), copied.destination().display());
        if self.log_successes {
            info!(bytes = copied.bytes(), replaced = copied.replaced(), "Copied {source} -> {destination}");
        } else {
            debug!(bytes = copied.bytes(), replaced = copied.replaced(), "Copied {source} -> {destination}");
        }
    }
}

impl CopyObserver for TracingObserver {
    fn on_event(&self, event: &WalkEvent) {
        match event {
            WalkEvent::Copied(copied) => self.copied(copied),
            WalkEvent::CopyFailed(err) => {
                error!(error = %err, "Error copying {}", err.file().display());
            }
            WalkEvent::DirectorySkipped(ScanError::PermissionDenied { dir }) => {
                error!("Permission denied: {}", dir.display());
            }
            WalkEvent::DirectorySkipped(err @ ScanError::ReadDir { dir, .. }) => {
                error!(error = %err, "Error processing {}", dir.display());
            }
            WalkEvent::DestinationSkipped(dir) => {
                debug!(destination = %dir.display(), "destination is inside source, not descending");
            }
        }
    }
}

/// Owned, comparable snapshot of a [`WalkEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RecordedEvent {
    Copied {
        source: PathBuf,
        destination: PathBuf,
        bytes: usize,
        replaced: bool,
    },
    CopyFailed {
        file: PathBuf,
        message: String,
    },
    DirectorySkipped {
        dir: PathBuf,
        permission_denied: bool,
    },
    DestinationSkipped {
        dir: PathBuf,
    },
}

impl From<&WalkEvent> for RecordedEvent {
    fn from(event: &WalkEvent) -> Self {
        match event {
            WalkEvent::Copied(copied) => Self::Copied {
                source: copied.source().to_path_buf(),
                destination: copied.destination().to_path_buf(),
                bytes: copied.bytes(),
                replaced: copied.replaced(),
            },
            WalkEvent::CopyFailed(err) => Self::CopyFailed {
                file: err.file().to_path_buf(),
                message: err.to_string(),
            },
            WalkEvent::DirectorySkipped(err) => Self::DirectorySkipped {
                dir: err.dir().to_path_buf(),
                permission_denied: matches!(err, ScanError::PermissionDenied { .. }),
            },
            WalkEvent::DestinationSkipped(dir) => Self::DestinationSkipped { dir: dir.clone() },
        }
    }
}

/// Collects every event in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events received so far.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Destinations of successful copies, sorted.
    #[must_use]
    pub fn copied(&self) -> Vec<PathBuf> {
        let mut copied: Vec<PathBuf> = self
            .events()
            .into_iter()
            .filter_map(|event| match event {
                RecordedEvent::Copied { destination, .. } => Some(destination),
                _ => None,
            })
            .collect();
        copied.sort();
        copied
    }

    /// Source files whose copy failed, sorted.
    #[must_use]
    pub fn failed(&self) -> Vec<PathBuf> {
        let mut failed: Vec<PathBuf> = self
            .events()
            .into_iter()
            .filter_map(|event| match event {
                RecordedEvent::CopyFailed { file, .. } => Some(file),
                _ => None,
            })
            .collect();
        failed.sort();
        failed
    }

    /// Directories whose subtree was skipped, sorted.
    #[must_use]
    pub fn skipped_dirs(&self) -> Vec<PathBuf> {
        let mut skipped: Vec<PathBuf> = self
            .events()
            .into_iter()
            .filter_map(|event| match event {
                RecordedEvent::DirectorySkipped { dir, .. } => Some(dir),
                _ => None,
            })
            .collect();
        skipped.sort();
        skipped
    }

    /// Returns true if `path` was reported as a copy destination.
    #[must_use]
    pub fn was_copied_to(&self, path: &Path) -> bool {
        self.copied().iter().any(|copied| copied == path)
    }
}

impl CopyObserver for RecordingObserver {
    fn on_event(&self, event: &WalkEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.into());
    }
}
