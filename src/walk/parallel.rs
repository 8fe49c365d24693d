// fanout-rs: Extension-Bucketed Directory Copier
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Multi-threaded walk using `ignore::WalkParallel`.
//!
//! ```text
//! worker threads (ignore)          reporter thread
//!   enumerate + copy  --flume-->   observer.on_event()
//! ```
//!
//! Workers copy files as they discover them. Events are funneled through a
//! bounded channel so the observer is only ever called from one thread.

use std::path::Path;
use std::thread;

use flume::bounded;
use ignore::WalkState;

use super::copy::copy_file_blocking;
use super::observer::{CopyObserver, WalkEvent};
use super::{build_walker, scan_error};
use crate::classify::CopyPlan;

/// Events buffered between workers and the reporter thread.
const EVENT_BUFFER: usize = 1000;

/// Walks `source_root` on `threads` worker threads (0 = one per CPU) and
/// copies every regular file into its bucket under `dest_root`.
///
/// Returns once every worker has finished and every event was reported.
pub fn copy_tree_parallel(
    source_root: &Path,
    dest_root: &Path,
    skip: Option<&Path>,
    threads: usize,
    observer: &dyn CopyObserver,
) {
    let (event_tx, event_rx) = bounded::<WalkEvent>(EVENT_BUFFER);

    let mut builder = build_walker(source_root, skip);
    builder.threads(threads);
    let parallel = builder.build_parallel();

    thread::scope(|scope| {
        scope.spawn(move || {
            for event in event_rx.iter() {
                observer.on_event(&event);
            }
        });

        parallel.run(|| {
            let event_tx = event_tx.clone();

            Box::new(move |entry_result| {
                let event = match entry_result {
                    Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => {
                        let plan =
                            CopyPlan::new(entry.path().to_path_buf(), entry.file_name(), dest_root);
                        WalkEvent::from(copy_file_blocking(&plan))
                    }
                    Ok(_) => return WalkState::Continue,
                    Err(e) => WalkEvent::DirectorySkipped(scan_error(e, source_root)),
                };
                // Send only fails if the reporter is gone; nothing left to tell.
                let _ = event_tx.send(event);
                WalkState::Continue
            })
        });

        // Drop the last sender so the reporter drains and exits
        drop(event_tx);
    });
}
