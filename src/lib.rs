#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `termlog` is a minimal thread-safe, leveled, colorized console logger.
//! A single [`Logger`] is constructed per output target (typically standard
//! error), shared by reference across threads, and emits one timestamped
//! line per call:
//!
//! ```text
//! 1722470400 [INFO]: listening on 0.0.0.0:873
//! ```
//!
//! On an interactive terminal the bracketed level tag is colorized — with
//! ANSI escape sequences where the terminal understands them, or through
//! the native console attribute API on a legacy Windows console. Redirected
//! output stays plain.
//!
//! This crate is a facade: the implementation lives in the `logger` and
//! `console` workspace members, re-exported here as one surface.
//!
//! # Examples
//!
//! ```
//! use termlog::{Logger, Severity, log_info, log_error};
//!
//! let logger = Logger::stderr();
//! logger.set_level(Severity::Info);
//!
//! log_info!(logger, "transfer complete: {} files", 42);
//! log_error!(logger, "link lost: {}", "timeout");
//!
//! // Silence everything without losing the configured level.
//! logger.set_quiet(true);
//! ```
//!
//! # Features
//!
//! - `serde`: Serialize/Deserialize on [`Severity`].
//! - `tracing`: a tracing-subscriber layer that routes `tracing` events
//!   through a shared [`Logger`].

pub use console::{Color, ColorMode, ColorWriter, Terminal};
pub use logger::{Logger, ParseSeverityError, Severity, SyncCell, SyncCellGuard};
pub use logger::{log_debug, log_error, log_fatal, log_info, log_trace, log_warn};
#[cfg(feature = "tracing")]
pub use logger::{LoggerLayer, init_tracing};
