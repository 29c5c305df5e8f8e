//! crates/logger/src/macros.rs
//! Convenience macros wrapping the leveled logging methods.
//!
//! Each macro forwards its format string and arguments through
//! `format_args!`, so no intermediate `String` is allocated on the way to
//! the sink.

/// Log at trace severity.
///
/// # Example
/// ```ignore
/// log_trace!(logger, "entering {}", name);
/// ```
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace(::std::format_args!($($arg)*))
    };
}

/// Log at debug severity.
///
/// # Example
/// ```ignore
/// log_debug!(logger, "cache miss for {}", key);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(::std::format_args!($($arg)*))
    };
}

/// Log at info severity.
///
/// # Example
/// ```ignore
/// log_info!(logger, "listening on {}", addr);
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(::std::format_args!($($arg)*))
    };
}

/// Log at warn severity.
///
/// # Example
/// ```ignore
/// log_warn!(logger, "retrying after {}", err);
/// ```
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(::std::format_args!($($arg)*))
    };
}

/// Log at error severity.
///
/// # Example
/// ```ignore
/// log_error!(logger, "request failed: {}", err);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(::std::format_args!($($arg)*))
    };
}

/// Log at fatal severity. Emits a line; never aborts the process.
///
/// # Example
/// ```ignore
/// log_fatal!(logger, "unrecoverable state: {}", detail);
/// ```
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal(::std::format_args!($($arg)*))
    };
}
