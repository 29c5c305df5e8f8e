#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/console/src/lib.rs
//!
//! # Overview
//!
//! `console` provides the platform-facing half of the termlog workspace: it
//! decides once, per output handle, how colored text can be produced on that
//! handle, then applies and resets foreground colors on behalf of the logger.
//! Everything that must differ between an ANSI-capable terminal, a legacy
//! Windows console, and a redirected stream lives here so the logger crate
//! can stay free of platform branching (and of `unsafe` code).
//!
//! # Design
//!
//! Capability detection runs exactly once, when a [`ColorWriter`] is built
//! from an output handle via [`ColorWriter::detect`]. The probe result is a
//! [`ColorMode`]:
//!
//! - [`ColorMode::Ansi`]: the handle is an interactive terminal that
//!   understands SGR escape sequences; colors are written into the byte
//!   stream itself.
//! - `ColorMode::Native` (Windows only): the handle is an interactive legacy
//!   console without virtual terminal processing; colors are applied through
//!   `SetConsoleTextAttribute` and nothing color-related enters the stream.
//! - [`ColorMode::Disabled`]: the handle is not an interactive terminal;
//!   every color request is a no-op.
//!
//! On the native path the driver snapshots the console's default text
//! attributes at construction and restores that snapshot on reset.
//!
//! # Invariants
//!
//! - [`ColorWriter::set`] and [`ColorWriter::reset`] never append a newline
//!   or any text beyond the escape sequence itself.
//! - Callers invoke `set`/`reset` only while holding whatever lock also
//!   guards ordinary writes to the same handle; the driver itself adds no
//!   synchronization.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values, either from the
//! underlying writer or translated from the Windows console API. Callers in
//! the logging path are expected to discard them.

mod color;
mod driver;
mod mode;
#[cfg(windows)]
mod native;
mod terminal;

pub use color::Color;
pub use driver::ColorWriter;
pub use mode::ColorMode;
#[cfg(windows)]
pub use native::NativeConsole;
pub use terminal::Terminal;
