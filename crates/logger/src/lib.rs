#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logger/src/lib.rs
//!
//! # Overview
//!
//! `logger` is the core of the termlog workspace: a synchronous, leveled,
//! optionally colorized line logger that any number of OS threads can share
//! by reference. The crate supplies the [`Severity`] scale, the
//! [`SyncCell`] exclusion primitive the logger's mutable state lives in,
//! and the [`Logger`] itself; color capability decisions belong to the
//! sibling `console` crate.
//!
//! # Design
//!
//! The synchronized write path is the heart of the crate. A [`Logger`]
//! keeps three independent [`SyncCell`]s — minimum level, output sink,
//! quiet flag — and every `log` call acquires them in the fixed order
//! level → output → quiet, holding the output lock across the entire line.
//! Filtering happens before the sink lock is taken, so suppressed messages
//! cost one short critical section and no I/O. The color and brightness
//! hints are relaxed atomics by declaration: they tune presentation, not
//! correctness.
//!
//! # Invariants
//!
//! - A line's bytes (`timestamp [TAG]: message\n`) reach the sink under one
//!   continuous lock hold; concurrent callers never interleave mid-line.
//! - `minimum_level` and `quiet` are only ever observed in states committed
//!   under their cells' locks.
//! - Logging never propagates failure: write errors are swallowed and the
//!   next call starts fresh.
//!
//! # Examples
//!
//! ```
//! use logger::{Logger, Severity, log_info, log_warn};
//!
//! let logger = Logger::stderr();
//! logger.set_level(Severity::Info);
//!
//! log_info!(logger, "ready on port {}", 8080);
//! log_warn!(logger, "{} retries left", 2);
//! ```
//!
//! # See also
//!
//! - The `console` crate for capability probing and the ANSI/native color
//!   split.
//! - The optional `tracing` feature for routing `tracing` events through a
//!   shared logger.

mod logger;
mod macros;
mod severity;
mod sync_cell;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use console::{Color, ColorMode, ColorWriter, Terminal};
pub use logger::Logger;
pub use severity::{ParseSeverityError, Severity};
pub use sync_cell::{SyncCell, SyncCellGuard};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing};
