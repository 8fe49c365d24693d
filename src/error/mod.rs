// fanout-rs: Extension-Bucketed Directory Copier
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!      FanoutError (16 bytes)
//!             |
//!       +-----+-----+
//!       |           |
//!       v           v
//!    Source    Destination
//!     Box          Box
//!
//! Fatal (abort before the walk):
//!   Source       Invalid (missing or not a directory)
//!   Destination  Create
//!
//! Recoverable (reported, never propagated):
//!   CopyError    CreateBucket, Read, Write     -> one file skipped
//!   ScanError    PermissionDenied, ReadDir     -> one subtree skipped
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`FanoutError`].
pub type FanoutResult<T> = std::result::Result<T, FanoutError>;

/// Top-level application error type.
///
/// Only fatal errors live here; per-file and per-directory failures are
/// reported through the walk observer instead. Sub-errors are boxed to keep
/// the enum small on the stack.
#[derive(Debug, Error)]
pub enum FanoutError {
    /// The source argument is unusable.
    #[error(transparent)]
    Source(#[from] Box<SourceError>),

    /// The destination root could not be prepared.
    #[error(transparent)]
    Destination(#[from] Box<DestinationError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for FanoutError {
                fn from(err: $error) -> Self {
                    FanoutError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    SourceError => Source,
    DestinationError => Destination,
}

// --- Source Errors ---

/// Problems with the source directory argument.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Source does not exist, or exists but is not a directory.
    #[error("{} does not exist or is not a directory", path.display())]
    Invalid { path: PathBuf },
}

// --- Destination Errors ---

/// Problems preparing the destination root.
#[derive(Debug, Error)]
pub enum DestinationError {
    /// Destination root could not be created.
    #[error("failed to create destination {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// --- Per-file Errors ---

/// Failure copying a single file. Reported and skipped.
#[derive(Debug, Error)]
pub enum CopyError {
    /// Bucket directory could not be created.
    #[error("failed to create bucket {} for {}: {source}", bucket.display(), file.display())]
    CreateBucket {
        file: PathBuf,
        bucket: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source file could not be read.
    #[error("failed to read {}: {source}", file.display())]
    Read {
        file: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination file could not be written.
    #[error("failed to write {} to {}: {source}", file.display(), destination.display())]
    Write {
        file: PathBuf,
        destination: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CopyError {
    /// Source file the failed copy was for.
    #[must_use]
    pub fn file(&self) -> &Path {
        match self {
            Self::CreateBucket { file, .. } | Self::Read { file, .. } | Self::Write { file, .. } => {
                file
            }
        }
    }

    /// Underlying I/O error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::CreateBucket { source, .. }
            | Self::Read { source, .. }
            | Self::Write { source, .. } => source,
        }
    }
}

// --- Per-subtree Errors ---

/// Failure enumerating a directory. The subtree is abandoned.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Directory is not readable by the current user.
    #[error("permission denied: {}", dir.display())]
    PermissionDenied { dir: PathBuf },

    /// Any other enumeration failure.
    #[error("failed to read directory {}: {source}", dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Classifies an enumeration failure, keeping permission denial distinct.
    #[must_use]
    pub fn from_io(dir: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { dir }
        } else {
            Self::ReadDir { dir, source }
        }
    }

    /// Directory whose subtree was skipped.
    #[must_use]
    pub fn dir(&self) -> &Path {
        match self {
            Self::PermissionDenied { dir } | Self::ReadDir { dir, .. } => dir,
        }
    }
}
