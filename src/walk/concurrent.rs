// fanout-rs: Extension-Bucketed Directory Copier
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cooperative walk on the tokio runtime.
//!
//! ```text
//! scan_dir(root)
//!   read_dir --> dir?  spawn scan_dir(child)
//!            --> file? reserve_slot, then spawn copy_one(plan, permit)
//! TaskTracker: close() after the root scan is spawned, wait() for all
//! ```
//!
//! Directory scans and copies are independent tasks; nothing orders them.
//! A scan waits for a free slot before spawning each copy, so the number of
//! live copy tasks never exceeds the cap.

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use tokio::fs;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio_util::task::TaskTracker;

use super::copy::copy_file_async;
use super::observer::{CopyObserver, WalkEvent};
use crate::classify::CopyPlan;
use crate::error::ScanError;

type ScanFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// State shared by every task of one walk.
struct WalkContext {
    dest_root: PathBuf,
    skip: Option<PathBuf>,
    limit: Option<Arc<Semaphore>>,
    observer: Arc<dyn CopyObserver>,
    tracker: TaskTracker,
}

/// Walks `source_root` and copies every regular file into its bucket under
/// `dest_root`, with up to `max_in_flight` copies outstanding (0 = no cap).
///
/// Returns when every spawned scan and copy has finished.
pub async fn copy_tree_concurrent(
    source_root: PathBuf,
    dest_root: PathBuf,
    skip: Option<PathBuf>,
    max_in_flight: usize,
    observer: Arc<dyn CopyObserver>,
) {
    let limit = in_flight_limit(max_in_flight);
    let tracker = TaskTracker::new();
    let ctx = Arc::new(WalkContext {
        dest_root,
        skip,
        limit,
        observer,
        tracker: tracker.clone(),
    });

    tracker.spawn(scan_dir(ctx, source_root));
    // Tasks spawned after close() are still waited on
    tracker.close();
    tracker.wait().await;
}

fn scan_dir(ctx: Arc<WalkContext>, dir: PathBuf) -> ScanFuture {
    Box::pin(async move {
        if let Err(e) = scan_entries(&ctx, &dir).await {
            ctx.observer
                .on_event(&WalkEvent::DirectorySkipped(ScanError::from_io(dir, e)));
        }
    })
}

async fn scan_entries(ctx: &Arc<WalkContext>, dir: &Path) -> io::Result<()> {
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        // Entry vanished or is unreadable: treat it like any other non-file
        let Ok(file_type) = entry.file_type().await else {
            continue;
        };
        let path = entry.path();

        if file_type.is_dir() {
            if ctx.skip.as_deref() == Some(path.as_path()) {
                continue;
            }
            ctx.tracker.spawn(scan_dir(Arc::clone(ctx), path));
        } else if file_type.is_file() {
            let plan = CopyPlan::new(path, &entry.file_name(), &ctx.dest_root);
            let permit = reserve_slot(ctx.limit.as_ref()).await;
            ctx.tracker.spawn(copy_one(Arc::clone(ctx), plan, permit));
        }
    }

    Ok(())
}

/// Semaphore bounding live copy tasks, or `None` when `max_in_flight` is 0.
pub(super) fn in_flight_limit(max_in_flight: usize) -> Option<Arc<Semaphore>> {
    (max_in_flight > 0)
        .then(|| Arc::new(Semaphore::new(max_in_flight.min(Semaphore::MAX_PERMITS))))
}

/// Waits for a free copy slot. The permit travels with the copy task.
pub(super) async fn reserve_slot(limit: Option<&Arc<Semaphore>>) -> Option<OwnedSemaphorePermit> {
    match limit {
        // The semaphore is never closed
        Some(limit) => Arc::clone(limit).acquire_owned().await.ok(),
        None => None,
    }
}

async fn copy_one(ctx: Arc<WalkContext>, plan: CopyPlan, _permit: Option<OwnedSemaphorePermit>) {
    let event = WalkEvent::from(copy_file_async(&plan).await);
    ctx.observer.on_event(&event);
}
