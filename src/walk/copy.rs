// fanout-rs: Extension-Bucketed Directory Copier
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Single-file copy primitive.
//!
//! Every copy is `create_dir_all(bucket)` --> read whole file --> write whole
//! file. Bucket creation is idempotent, so concurrent copies into the same
//! bucket never fail on each other.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::classify::CopyPlan;
use crate::error::CopyError;

/// A successfully copied file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    source: PathBuf,
    destination: PathBuf,
    bytes: usize,
    replaced: bool,
}

impl CopiedFile {
    /// Source file path.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Path the bytes were written to.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Number of bytes written.
    #[must_use]
    pub const fn bytes(&self) -> usize {
        self.bytes
    }

    /// Whether a file already existed at the destination and was overwritten.
    #[must_use]
    pub const fn replaced(&self) -> bool {
        self.replaced
    }

    fn new(plan: &CopyPlan, bytes: usize, replaced: bool) -> Self {
        Self {
            source: plan.source().to_path_buf(),
            destination: plan.destination().to_path_buf(),
            bytes,
            replaced,
        }
    }
}

/// Copies one file on the current thread.
///
/// # Errors
///
/// Returns a [`CopyError`] naming the step that failed. A failed write may
/// leave a partially written destination file behind.
pub fn copy_file_blocking(plan: &CopyPlan) -> Result<CopiedFile, CopyError> {
    std::fs::create_dir_all(plan.bucket()).map_err(|source| CopyError::CreateBucket {
        file: plan.source().to_path_buf(),
        bucket: plan.bucket().to_path_buf(),
        source,
    })?;

    let replaced = plan.destination().try_exists().unwrap_or(false);

    let content = std::fs::read(plan.source()).map_err(|source| CopyError::Read {
        file: plan.source().to_path_buf(),
        source,
    })?;

    std::fs::write(plan.destination(), &content).map_err(|source| CopyError::Write {
        file: plan.source().to_path_buf(),
        destination: plan.destination().to_path_buf(),
        source,
    })?;

    Ok(CopiedFile::new(plan, content.len(), replaced))
}

/// Copies one file, suspending at every filesystem call.
///
/// # Errors
///
/// Same as [`copy_file_blocking`].
pub async fn copy_file_async(plan: &CopyPlan) -> Result<CopiedFile, CopyError> {
    fs::create_dir_all(plan.bucket())
        .await
        .map_err(|source| CopyError::CreateBucket {
            file: plan.source().to_path_buf(),
            bucket: plan.bucket().to_path_buf(),
            source,
        })?;

    let replaced = fs::try_exists(plan.destination()).await.unwrap_or(false);

    let content = fs::read(plan.source())
        .await
        .map_err(|source| CopyError::Read {
            file: plan.source().to_path_buf(),
            source,
        })?;

    fs::write(plan.destination(), &content)
        .await
        .map_err(|source| CopyError::Write {
            file: plan.source().to_path_buf(),
            destination: plan.destination().to_path_buf(),
            source,
        })?;

    Ok(CopiedFile::new(plan, content.len(), replaced))
}
