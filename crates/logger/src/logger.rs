//! crates/logger/src/logger.rs
//! The shared logger and its synchronized write path.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use console::{ColorWriter, Terminal};

use crate::severity::Severity;
use crate::sync_cell::SyncCell;

/// A thread-safe, leveled, optionally colorized line logger.
///
/// One `Logger` is constructed per output target and shared by reference
/// across however many threads care to log. Each mutable piece of state
/// lives in its own [`SyncCell`]; a single `log` call acquires the cells it
/// needs in the fixed order level → output → quiet and holds the output lock
/// for the whole line, so two concurrent calls can never interleave their
/// bytes. The color and brightness hints are deliberately relaxed atomics:
/// a racing update can at worst produce one line with a stale color choice,
/// never a torn line.
///
/// Logging never reports failure. Write errors to the sink are swallowed at
/// the end of the call; a logger must not become a new failure source for
/// its host.
///
/// # Examples
///
/// ```
/// use logger::{Logger, Severity};
///
/// let logger = Logger::stderr();
/// logger.set_level(Severity::Info);
/// logger.info(format_args!("starting up"));
/// logger.debug(format_args!("not printed: below Info"));
/// ```
#[derive(Debug)]
pub struct Logger<W> {
    level: SyncCell<Severity>,
    output: SyncCell<W>,
    quiet: SyncCell<bool>,
    use_color: AtomicBool,
    use_bright: AtomicBool,
    colors: ColorWriter,
}

impl Logger<io::Stderr> {
    /// Builds a logger for standard error with color requested, probing the
    /// handle for capability.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr(), true)
    }
}

impl Logger<io::Stdout> {
    /// Builds a logger for standard output with color requested, probing
    /// the handle for capability.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout(), true)
    }
}

impl<W: Write> Logger<W> {
    /// Builds a logger around `writer` with an initial color preference,
    /// probing the handle once for color capability.
    ///
    /// The probe happens eagerly, here; nothing about the platform is
    /// consulted again on the logging path. `use_color` seeds the runtime
    /// flag that [`set_color`](Self::set_color) adjusts later; actual
    /// colored output additionally requires the probe to find a capable
    /// terminal.
    #[must_use]
    pub fn new(writer: W, use_color: bool) -> Self
    where
        W: Terminal,
    {
        let colors = ColorWriter::detect(&writer);
        let logger = Self::with_color_writer(writer, colors);
        logger.set_color(use_color);
        logger
    }

    /// Builds a logger around `writer` with an explicit color driver.
    ///
    /// This is the constructor for sinks that cannot be probed (in-memory
    /// buffers in tests) or whose capability the embedder already knows.
    #[must_use]
    pub fn with_color_writer(writer: W, colors: ColorWriter) -> Self {
        Self {
            level: SyncCell::new(Severity::Trace),
            output: SyncCell::new(writer),
            quiet: SyncCell::new(false),
            use_color: AtomicBool::new(true),
            use_bright: AtomicBool::new(true),
            colors,
        }
    }

    /// Replaces the minimum severity; later calls filter against it.
    pub fn set_level(&self, level: Severity) {
        self.level.set(level);
    }

    /// Returns the current minimum severity.
    #[must_use]
    pub fn level(&self) -> Severity {
        self.level.get()
    }

    /// Silences or re-enables output without touching the level filter.
    ///
    /// While quiet, `log` still performs its level check and then emits
    /// nothing, so flipping the flag back restores exactly the prior
    /// filtering behavior.
    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.set(quiet);
    }

    /// Returns whether output is currently silenced.
    #[must_use]
    pub fn quiet(&self) -> bool {
        self.quiet.get()
    }

    /// Enables or disables colored level tags.
    ///
    /// A relaxed store: readers racing with this call may render one more
    /// line with the previous setting. Color additionally requires that the
    /// probed capability allows it; enabling color on a non-terminal sink
    /// changes nothing.
    pub fn set_color(&self, use_color: bool) {
        self.use_color.store(use_color, Ordering::Relaxed);
    }

    /// Enables or disables the bold/bright prefix on colored tags.
    ///
    /// The same relaxed-setting contract as [`set_color`](Self::set_color).
    /// Has no effect while color is off.
    pub fn set_bright(&self, use_bright: bool) {
        self.use_bright.store(use_bright, Ordering::Relaxed);
    }

    /// Returns the color driver this logger was constructed with.
    #[must_use]
    pub const fn color_writer(&self) -> &ColorWriter {
        &self.colors
    }

    /// Logs one line at `severity`.
    ///
    /// The line is `<epoch-seconds> [<TAG>]: <message>\n`, with the bracketed
    /// tag color-wrapped when color is on and the sink supports it. The
    /// whole line is emitted under one continuous hold of the output lock;
    /// concurrent callers serialize per line. I/O failures are discarded.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        let level = self.level.lock();
        if severity < *level {
            return;
        }
        let mut output = self.output.lock();
        let quiet = self.quiet.lock();
        if *quiet {
            return;
        }
        let _ = self.emit(&mut output, severity, args);
        // Guards drop here in reverse acquisition order: quiet, output, level.
    }

    fn emit(&self, writer: &mut W, severity: Severity, args: fmt::Arguments<'_>) -> io::Result<()> {
        write!(writer, "{} ", timestamp())?;
        if self.use_color.load(Ordering::Relaxed) && self.colors.is_enabled() {
            let bright = self.use_bright.load(Ordering::Relaxed);
            self.colors.set(writer, severity.color(), bright)?;
            write!(writer, "[{}]", severity.display_name())?;
            self.colors.reset(writer)?;
            write!(writer, ": ")?;
        } else {
            write!(writer, "[{}]: ", severity.display_name())?;
        }
        writer.write_fmt(args)?;
        writeln!(writer)
    }

    /// Logs at [`Severity::Trace`].
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Trace, args);
    }

    /// Logs at [`Severity::Debug`].
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args);
    }

    /// Logs at [`Severity::Info`].
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    /// Logs at [`Severity::Warn`].
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warn, args);
    }

    /// Logs at [`Severity::Error`].
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    /// Logs at [`Severity::Fatal`].
    ///
    /// `Fatal` is the most severe label and nothing more: the call returns
    /// normally and the process keeps running.
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Fatal, args);
    }

    /// Consumes the logger and returns the wrapped writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.output.into_inner()
    }
}

/// Whole seconds since the Unix epoch; a clock before the epoch reads 0.
fn timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_logger() -> Logger<Vec<u8>> {
        Logger::with_color_writer(Vec::new(), ColorWriter::disabled())
    }

    fn rendered(logger: Logger<Vec<u8>>) -> String {
        String::from_utf8(logger.into_writer()).expect("utf-8 output")
    }

    #[test]
    fn defaults_pass_everything() {
        let logger = plain_logger();
        assert_eq!(logger.level(), Severity::Trace);
        assert!(!logger.quiet());

        logger.trace(format_args!("lowest"));
        logger.fatal(format_args!("highest"));
        assert_eq!(rendered(logger).lines().count(), 2);
    }

    #[test]
    fn line_carries_timestamp_tag_and_message() {
        let logger = plain_logger();
        logger.info(format_args!("hello {} {}", "world", 12345));

        let output = rendered(logger);
        let line = output.strip_suffix('\n').expect("newline-terminated");
        let (timestamp, rest) = line.split_once(' ').expect("timestamp separator");
        assert!(timestamp.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(rest, "[INFO]: hello world 12345");
    }

    #[test]
    fn below_threshold_is_dropped() {
        let logger = plain_logger();
        logger.set_level(Severity::Warn);
        logger.info(format_args!("dropped"));
        logger.warn(format_args!("kept"));

        let output = rendered(logger);
        assert!(!output.contains("dropped"));
        assert!(output.contains("[WARN]: kept"));
    }

    #[test]
    fn quiet_suppresses_without_disturbing_filter() {
        let logger = plain_logger();
        logger.set_level(Severity::Info);
        logger.set_quiet(true);
        logger.error(format_args!("silenced"));
        logger.set_quiet(false);
        logger.debug(format_args!("still filtered"));
        logger.error(format_args!("audible"));

        let output = rendered(logger);
        assert!(!output.contains("silenced"));
        assert!(!output.contains("still filtered"));
        assert!(output.contains("[ERROR]: audible"));
    }

    #[test]
    fn fatal_does_not_terminate() {
        let logger = plain_logger();
        logger.fatal(format_args!("label only"));
        // Reaching this assertion is the point.
        assert!(rendered(logger).contains("[FATAL]: label only"));
    }

    #[test]
    fn color_disabled_by_capability_even_when_requested() {
        let logger = plain_logger();
        logger.set_color(true);
        logger.info(format_args!("plain"));
        assert!(!rendered(logger).contains('\x1b'));
    }

    #[test]
    fn colored_tag_is_bracketed_by_escapes() {
        let logger = Logger::with_color_writer(Vec::new(), ColorWriter::ansi());
        logger.set_bright(false);
        logger.info(format_args!("tinted"));

        let output = rendered(logger);
        assert!(output.contains("\x1b[32m[INFO]\x1b[0m: tinted"));
    }

    #[test]
    fn timestamp_is_after_epoch() {
        assert!(timestamp() > 0);
    }
}
