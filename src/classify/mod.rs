// fanout-rs: Extension-Bucketed Directory Copier
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Maps file names to destination buckets.
//!
//! ```text
//! photo.JPG       --> jpg
//! archive.tar.gz  --> gz
//! README          --> no_extension
//! .gitignore      --> no_extension   (leading dot only)
//! trailing.       --> no_extension   (empty suffix)
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Bucket name for files without a usable extension.
pub const NO_EXTENSION: &str = "no_extension";

/// Returns the bucket name for a file.
///
/// Only the final component of `path` is inspected. The extension is the
/// suffix after the last `.`, lower-cased, without the dot.
#[must_use]
pub fn bucket_name_for<P: AsRef<Path>>(path: P) -> String {
    match path.as_ref().extension().map(OsStr::to_string_lossy) {
        Some(ext) if !ext.is_empty() => ext.to_lowercase(),
        _ => NO_EXTENSION.to_string(),
    }
}

/// Returns `dest_root/<bucket>` for a file.
#[must_use]
pub fn bucket_dir<P: AsRef<Path>>(dest_root: &Path, path: P) -> PathBuf {
    dest_root.join(bucket_name_for(path))
}

/// Where a single source file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlan {
    source: PathBuf,
    bucket: PathBuf,
    destination: PathBuf,
}

impl CopyPlan {
    /// Plans the copy of `source`, named `file_name`, under `dest_root`.
    ///
    /// `file_name` is passed separately because walkers already have it from
    /// the directory entry.
    #[must_use]
    pub fn new(source: PathBuf, file_name: &OsStr, dest_root: &Path) -> Self {
        let bucket = bucket_dir(dest_root, file_name);
        let destination = bucket.join(file_name);
        Self {
            source,
            bucket,
            destination,
        }
    }

    /// Source file path.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Bucket directory the file lands in.
    #[must_use]
    pub fn bucket(&self) -> &Path {
        &self.bucket
    }

    /// Final destination path (`bucket/<file_name>`).
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}
