// fanout-rs: Extension-Bucketed Directory Copier
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! One file at a time on the calling thread.

use std::path::Path;

use super::copy::copy_file_blocking;
use super::observer::{CopyObserver, WalkEvent};
use super::{build_walker, scan_error};
use crate::classify::CopyPlan;

/// Walks `source_root` depth-first and copies every regular file into its
/// bucket under `dest_root`, reading and writing each file to completion
/// before moving on.
///
/// `skip` is a directory inside the source tree that is not descended into.
pub fn copy_tree_sequential(
    source_root: &Path,
    dest_root: &Path,
    skip: Option<&Path>,
    observer: &dyn CopyObserver,
) {
    for entry_result in build_walker(source_root, skip).build() {
        match entry_result {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                let plan = CopyPlan::new(entry.path().to_path_buf(), entry.file_name(), dest_root);
                observer.on_event(&WalkEvent::from(copy_file_blocking(&plan)));
            }
            Err(e) => {
                observer.on_event(&WalkEvent::DirectorySkipped(scan_error(e, source_root)));
            }
        }
    }
}
