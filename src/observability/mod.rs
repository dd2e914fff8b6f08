//! Structured logging setup and traversal metrics.
//!
//! This module provides:
//! - [`init_logging`] — One-time structured logging setup with `RUST_LOG` support
//! - [`SearchMetrics`] — Counters collected by a single traversal

use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging with `RUST_LOG` environment variable support.
///
/// Defaults to `graphwalk=info` when `RUST_LOG` is not set. Graph construction
/// and traversal emit `debug`/`trace` events, so `RUST_LOG=graphwalk=trace`
/// shows every popped node. Subsequent calls are silently ignored.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("graphwalk=info"));

    // try_init so double-init in tests doesn't panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Counters for one traversal run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchMetrics {
    /// Nodes taken off the frontier and visited.
    pub pops: u64,
    /// Neighbours seen for the first time and pushed.
    pub discovered: u64,
    /// Neighbours ignored because they were already Grey or Black.
    pub skipped: u64,
    /// Already-seen neighbours found again by a shorter route and pushed
    /// again. Only depth-limited runs do this.
    pub reopened: u64,
    /// Largest frontier length observed.
    pub peak_frontier: usize,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Fraction of neighbour encounters that found an undiscovered node.
    pub fn discovery_rate(&self) -> f64 {
        let total = self.discovered + self.skipped;
        if total == 0 {
            return 0.0;
        }
        self.discovered as f64 / total as f64
    }

    pub(crate) fn observe_frontier(&mut self, len: usize) {
        self.peak_frontier = self.peak_frontier.max(len);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_does_not_panic() {
        init_logging();
        // Second call should also not panic (try_init ignores re-init).
        init_logging();
    }

    #[test]
    fn metrics_new_has_zero_values() {
        let m = SearchMetrics::new();
        assert_eq!(m.pops, 0);
        assert_eq!(m.discovered, 0);
        assert_eq!(m.skipped, 0);
        assert_eq!(m.reopened, 0);
        assert_eq!(m.peak_frontier, 0);
        assert_eq!(m, SearchMetrics::default());
    }

    #[test]
    fn metrics_to_json_contains_all_fields() {
        let m = SearchMetrics {
            pops: 6,
            discovered: 5,
            skipped: 2,
            reopened: 1,
            peak_frontier: 3,
        };
        let json = m.to_json();
        assert_eq!(json["pops"], 6);
        assert_eq!(json["discovered"], 5);
        assert_eq!(json["skipped"], 2);
        assert_eq!(json["reopened"], 1);
        assert_eq!(json["peak_frontier"], 3);
    }

    #[test]
    fn discovery_rate() {
        let m = SearchMetrics {
            discovered: 3,
            skipped: 1,
            ..SearchMetrics::default()
        };
        assert!((m.discovery_rate() - 0.75).abs() < f64::EPSILON);
        assert_eq!(SearchMetrics::new().discovery_rate(), 0.0);
    }

    #[test]
    fn observe_frontier_keeps_peak() {
        let mut m = SearchMetrics::new();
        m.observe_frontier(2);
        m.observe_frontier(5);
        m.observe_frontier(1);
        assert_eq!(m.peak_frontier, 5);
    }
}
