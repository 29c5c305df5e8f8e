//! Integration tests for severity threshold filtering.
//!
//! These tests verify that a configured minimum level passes exactly the
//! severities at or above it, across the full (minimum, call) matrix, and
//! that setter calls behave idempotently.

mod util;

use logger::Severity;
use util::{parse_plain_lines, plain_logger};

// ============================================================================
// Threshold Matrix Tests
// ============================================================================

/// Verifies output is produced iff the call severity is >= the minimum,
/// for every (minimum, call) pair.
#[test]
fn output_iff_severity_at_or_above_minimum() {
    for minimum in Severity::ALL {
        for called in Severity::ALL {
            let (buf, logger) = plain_logger();
            logger.set_level(minimum);
            logger.log(called, format_args!("probe"));

            let lines = parse_plain_lines(&buf.text());
            if called >= minimum {
                assert_eq!(
                    lines.len(),
                    1,
                    "{called} should pass a minimum of {minimum}"
                );
                assert_eq!(lines[0].0, called.display_name());
            } else {
                assert!(
                    lines.is_empty(),
                    "{called} should be dropped below a minimum of {minimum}"
                );
            }
        }
    }
}

/// Verifies the default threshold is Trace: everything passes.
#[test]
fn default_minimum_passes_every_severity() {
    let (buf, logger) = plain_logger();
    for severity in Severity::ALL {
        logger.log(severity, format_args!("default"));
    }
    assert_eq!(parse_plain_lines(&buf.text()).len(), Severity::ALL.len());
}

/// Verifies raising the threshold applies to subsequent calls only.
#[test]
fn threshold_change_affects_later_calls() {
    let (buf, logger) = plain_logger();
    logger.info(format_args!("before"));
    logger.set_level(Severity::Error);
    logger.info(format_args!("after"));

    let output = buf.text();
    assert!(output.contains("before"));
    assert!(!output.contains("after"));
}

// ============================================================================
// Idempotence Tests
// ============================================================================

/// Verifies setting the same level twice is indistinguishable from once.
#[test]
fn set_level_is_idempotent() {
    let (buf, logger) = plain_logger();
    logger.set_level(Severity::Warn);
    logger.set_level(Severity::Warn);
    assert_eq!(logger.level(), Severity::Warn);

    logger.debug(format_args!("dropped"));
    logger.warn(format_args!("kept"));
    let lines = parse_plain_lines(&buf.text());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].1, "kept");
}

// ============================================================================
// Convenience Wrapper Tests
// ============================================================================

/// Verifies each leveled wrapper tags its line with the matching severity.
#[test]
fn wrappers_tag_lines_with_their_severity() {
    let (buf, logger) = plain_logger();
    logger.trace(format_args!("t"));
    logger.debug(format_args!("d"));
    logger.info(format_args!("i"));
    logger.warn(format_args!("w"));
    logger.error(format_args!("e"));
    logger.fatal(format_args!("f"));

    let tags: Vec<String> = parse_plain_lines(&buf.text())
        .into_iter()
        .map(|(tag, _)| tag)
        .collect();
    assert_eq!(tags, ["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"]);
}

/// Verifies the logging macros forward format arguments positionally.
#[test]
fn macros_format_positional_arguments() {
    let (buf, logger) = plain_logger();
    logger::log_info!(logger, "hello {} {}", "world", 12345);

    let lines = parse_plain_lines(&buf.text());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], ("INFO".to_owned(), "hello world 12345".to_owned()));
}
