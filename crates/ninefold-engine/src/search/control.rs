//! Search control: stop flag and per-move time limit.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Controls when a search should stop.
///
/// Checked at every node. The external flag is read every time; the clock
/// only every 1024 nodes. Supports two modes:
/// - **Unbounded**: no time pressure, only responds to the external stop flag
/// - **Timed**: a hard limit measured from construction
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
    start: Instant,
    hard_limit: Option<Duration>,
}

impl SearchControl {
    /// Create control with no time limit.
    pub fn new_unbounded(stopped: Arc<AtomicBool>) -> Self {
        Self {
            stopped,
            start: Instant::now(),
            hard_limit: None,
        }
    }

    /// Create control with a hard time limit; the clock starts immediately.
    pub fn new_timed(stopped: Arc<AtomicBool>, hard: Duration) -> Self {
        Self {
            stopped,
            start: Instant::now(),
            hard_limit: Some(hard),
        }
    }

    /// Unbounded control or timed control, depending on `limit`.
    pub fn with_limit(stopped: Arc<AtomicBool>, limit: Option<Duration>) -> Self {
        match limit {
            Some(hard) => Self::new_timed(stopped, hard),
            None => Self::new_unbounded(stopped),
        }
    }

    /// Check whether the search should abort immediately.
    ///
    /// When the hard limit fires, the stop flag is set so subsequent calls
    /// return immediately without re-checking the clock.
    pub fn should_stop(&self, nodes: u64) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }

        if nodes & 1023 != 0 {
            return false;
        }

        if let Some(hard) = self.hard_limit
            && self.elapsed() >= hard
        {
            self.stopped.store(true, Ordering::Release);
            return true;
        }

        false
    }

    /// Whether the stop flag has been raised (externally or by the clock).
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Elapsed time since construction.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Reference to the shared stop flag.
    pub fn stop_flag(&self) -> &Arc<AtomicBool> {
        &self.stopped
    }
}

impl Default for SearchControl {
    fn default() -> Self {
        Self::new_unbounded(Arc::new(AtomicBool::new(false)))
    }
}
