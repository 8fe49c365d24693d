// fanout-rs: Extension-Bucketed Directory Copier
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                                 validate, time
//!                                      |
//!                                      v
//!              ,------------------------------------,
//!              |                walk                |
//!              |  sequential | concurrent | parallel |
//!              |  copy primitive, observers         |
//!              '-----------------+------------------'
//!                                |
//!                                v
//!                            classify
//!                      file name --> bucket
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod classify;
pub mod cli;
pub mod cmd;
pub mod error;
pub mod logging;
pub mod walk;
