//! crates/logger/src/severity.rs
//! Ordered log severities with display names and color assignments.

use std::fmt;
use std::str::FromStr;

use console::Color;

/// Severity of a log message, ordered from least to most severe.
///
/// The derived [`Ord`] follows declaration order, so threshold checks are
/// plain comparisons: a message passes a configured minimum `min` exactly
/// when `severity >= min`.
///
/// # Examples
///
/// ```
/// use logger::Severity;
///
/// assert!(Severity::Trace < Severity::Debug);
/// assert!(Severity::Error >= Severity::Warn);
/// assert_eq!(Severity::Warn.to_string(), "WARN");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Fine-grained tracing output.
    Trace,
    /// Diagnostic detail useful while developing.
    Debug,
    /// Routine informational messages.
    Info,
    /// Something unexpected that the program can continue past.
    Warn,
    /// An operation failed.
    Error,
    /// The most severe label. Purely a label: logging at `Fatal` never
    /// terminates the process.
    Fatal,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Returns the fixed-width tag name rendered between brackets.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Returns the foreground color used for this severity's level tag.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Trace => Color::Blue,
            Self::Debug => Color::Cyan,
            Self::Info => Color::Green,
            Self::Warn => Color::Yellow,
            Self::Error => Color::Red,
            Self::Fatal => Color::Magenta,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when parsing a string that names no known severity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseSeverityError {
    token: String,
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: {:?}", self.token)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a severity from its display name, ignoring ASCII case.
    ///
    /// Hosts commonly read a threshold from an environment variable or a
    /// command-line flag; accepting `"warn"` as well as `"WARN"` keeps that
    /// glue code trivial.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| s.eq_ignore_ascii_case(severity.display_name()))
            .ok_or_else(|| ParseSeverityError {
                token: s.to_owned(),
            })
    }
}
