//! Routes standard tracing macros through a shared Logger.
//!
//! Run with: cargo run --example tracing_demo --features tracing

use std::sync::Arc;

use logger::{Logger, Severity, init_tracing};

fn main() {
    let logger = Arc::new(Logger::stderr());
    logger.set_level(Severity::Debug);
    init_tracing(Arc::clone(&logger));

    tracing::trace!("filtered out: below the Debug threshold");
    tracing::debug!("resolving targets");
    tracing::info!("copied {} files", 3);
    tracing::warn!("slow sink: {}ms", 120);
    tracing::error!("giving up on {}", "peer");

    // Direct calls share the same stream and filter.
    logger.info(format_args!("direct and bridged lines interleave cleanly"));
}
