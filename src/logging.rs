//! Logging utilities for hclmap.
//!
//! This module provides structured logging helpers so that colormap
//! operations leave searchable, consistent traces.

use std::time::Instant;
use tracing::{debug, debug_span, error, info, warn};
use uuid::Uuid;

use crate::error::{HclmapError, Result};

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    // A subscriber may already be installed (tests, embedding applications).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log the start of a command-line operation on a colormap
pub fn log_operation_start(operation: &str, colormap: &str) {
    info!(operation = operation, colormap = colormap, "Starting operation");
}

/// Log the outcome of an operation started at `start_time`
pub fn log_operation_end<T>(operation: &str, start_time: Instant, result: &Result<T>) {
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    match result {
        Ok(_) => info!(operation = operation, duration_ms = duration_ms, "Operation completed"),
        Err(e) => warn!(
            operation = operation,
            duration_ms = duration_ms,
            error_kind = e.kind(),
            "Operation failed"
        ),
    }
}

/// Run `f` inside a span tagged with a fresh operation id, logging its duration
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let operation_id = generate_operation_id();
    let span = debug_span!("timed", operation = operation, operation_id = %operation_id);
    let _guard = span.enter();

    let start = Instant::now();
    let result = f();
    debug!(
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation finished"
    );

    result
}

/// Log a summary of the colormap about to be applied
pub fn log_colormap_summary(name: &str, control_points: usize, channels: usize, range: (f64, f64)) {
    info!(
        colormap = name,
        control_points = control_points,
        channels = channels,
        min_value = range.0,
        max_value = range.1,
        "Colormap resolved"
    );
}

/// Log an error with context
pub fn log_error(error: &HclmapError, context: &str) {
    error!(
        error = %error,
        error_kind = error.kind(),
        context = context,
        "Error occurred"
    );
}

/// Generate a unique operation ID
pub fn generate_operation_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_operation_id() {
        let id1 = generate_operation_id();
        let id2 = generate_operation_id();

        assert!(!id1.is_empty());
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_log_timed_operation() {
        // Functional check that the wrapper returns the closure's value
        let result = log_timed_operation("test_operation", || 6 * 7);

        assert_eq!(result, 42);
    }

    #[test]
    fn test_log_operation_end_accepts_failures() {
        let failed: Result<()> = Err(HclmapError::Config {
            message: "bad".to_string(),
        });
        log_operation_end("export", Instant::now(), &failed);
        log_operation_end("export", Instant::now(), &Ok(()));
    }

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        init_tracing("debug");
        init_tracing("info");
    }
}
