//! Duplicate-scan suppression
//!
//! A camera decodes the same label on many consecutive frames. Callers feed
//! every decoded frame through a [`DuplicateFilter`] and only classify the
//! ones it lets through. Only accepted (valid) scans arm the window, so a
//! misread never hides the good read that follows it.
//!
//! Time is passed in by the caller, which keeps the filter deterministic.

use std::time::{Duration, Instant};

/// Window used by the desktop scanner
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(3000);

/// Suppresses repeats of the last accepted code within a time window
#[derive(Debug, Clone)]
pub struct DuplicateFilter {
    window: Duration,
    last: Option<(String, Instant)>,
}

impl Default for DuplicateFilter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl DuplicateFilter {
    /// Create a filter with the given window
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// The suppression window
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Whether `code` repeats the last accepted code inside the window
    #[must_use]
    pub fn is_duplicate(&self, code: &str, now: Instant) -> bool {
        self.last.as_ref().is_some_and(|(last, at)| {
            last == code && now.saturating_duration_since(*at) < self.window
        })
    }

    /// Record `code` as accepted at `now`
    pub fn record(&mut self, code: &str, now: Instant) {
        self.last = Some((code.to_string(), now));
    }
}
