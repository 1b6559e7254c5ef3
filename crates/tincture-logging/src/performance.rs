// ABOUTME: Span-based operation timing
// ABOUTME: PerfTimer records elapsed time on drop and warns past an optional threshold

use std::time::{Duration, Instant};
use tracing::{Level, Span, field, span, warn};

/// Timer guard that records `elapsed_ms` on its span when dropped
pub struct PerfTimer {
    span: Span,
    start: Instant,
    operation: &'static str,
    warn_threshold: Option<Duration>,
}

impl PerfTimer {
    pub fn new(operation: &'static str) -> Self {
        let span = span!(
            Level::DEBUG,
            "perf_timer",
            operation = operation,
            elapsed_ms = field::Empty
        );

        Self {
            span,
            start: Instant::now(),
            operation,
            warn_threshold: None,
        }
    }

    /// Log a warning if the operation takes longer than `threshold`
    pub fn with_warn_threshold(mut self, threshold: Duration) -> Self {
        self.warn_threshold = Some(threshold);
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// The span timed by this guard, for entering or adding fields
    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        self.span.record("elapsed_ms", elapsed_ms);

        if let Some(threshold) = self.warn_threshold {
            if elapsed > threshold {
                warn!(
                    operation = self.operation,
                    elapsed_ms,
                    threshold_ms = threshold.as_secs_f64() * 1000.0,
                    "Slow operation detected"
                );
            }
        }
    }
}
