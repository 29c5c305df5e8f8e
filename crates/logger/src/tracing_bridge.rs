//! crates/logger/src/tracing_bridge.rs
//! Bridge between the tracing crate and the termlog logger.
//!
//! This module provides a tracing-subscriber layer that forwards tracing
//! events to a shared [`Logger`]. It enables using standard Rust tracing
//! macros (trace!, debug!, info!, warn!, error!) in code that should end up
//! in the same timestamped, level-filtered stream as direct logger calls.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logger::{Logger, Severity, init_tracing};
//!
//! let logger = Arc::new(Logger::stderr());
//! logger.set_level(Severity::Info);
//! init_tracing(logger);
//!
//! // Now standard tracing macros flow through the logger.
//! tracing::info!("service started");
//! tracing::warn!("disk nearly full");
//! ```

use std::io::Write;
use std::sync::Arc;

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::logger::Logger;
use crate::severity::Severity;

/// A tracing layer that forwards events to a shared [`Logger`].
///
/// The event's [`Level`] maps onto the matching [`Severity`]; the logger's
/// own threshold and quiet flag then decide whether anything is emitted, so
/// tracing callers and direct callers obey one filter.
pub struct LoggerLayer<W> {
    logger: Arc<Logger<W>>,
}

impl<W> LoggerLayer<W> {
    /// Creates a layer that forwards events to `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger<W>>) -> Self {
        Self { logger }
    }

    /// Map a tracing level to the logger's severity scale.
    const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::TRACE => Severity::Trace,
            Level::DEBUG => Severity::Debug,
            Level::INFO => Severity::Info,
            Level::WARN => Severity::Warn,
            Level::ERROR => Severity::Error,
        }
    }
}

impl<S, W> Layer<S> for LoggerLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let severity = Self::severity_for(event.metadata().level());

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            self.logger.log(severity, format_args!("{message}"));
        }
    }
}

/// Visitor to extract the message field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global tracing subscriber that routes events to `logger`.
///
/// Panics if a global subscriber is already set, matching the behavior of
/// `tracing_subscriber`'s own `init` helpers. Tests that need isolation can
/// build the layer directly and use `tracing::subscriber::with_default`.
pub fn init_tracing<W>(logger: Arc<Logger<W>>)
where
    W: Write + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .init();
}
