//! Millisecond deadline tracking for frame-driven sequencers.
//!
//! Sequencers advance a [`Schedule`] by the frame delta and run every step
//! whose deadline has passed. Deadlines chain from the previous deadline, not
//! from "now", so a slow frame does not stretch the sequence.

/// Upper bound on steps run by a single `advance`, so zero-length delays
/// cannot spin forever.
pub const MAX_STEPS_PER_TICK: usize = 1024;

#[derive(Clone, Debug, Default)]
pub struct Schedule {
    now_ms: f64,
    deadline_ms: Option<f64>,
}

impl Schedule {
    #[inline]
    pub fn advance(&mut self, dt_ms: f64) {
        self.now_ms += dt_ms.max(0.0);
    }

    /// Whether the pending deadline has passed.
    #[inline]
    pub fn is_due(&self) -> bool {
        matches!(self.deadline_ms, Some(d) if d <= self.now_ms)
    }

    /// Next step `delay_ms` after the current (or last) deadline.
    #[inline]
    pub fn after(&mut self, delay_ms: f64) {
        let base = self.deadline_ms.unwrap_or(self.now_ms);
        self.deadline_ms = Some(base + delay_ms.max(0.0));
    }

    /// Next step `delay_ms` from now, dropping any pending deadline.
    #[inline]
    pub fn from_now(&mut self, delay_ms: f64) {
        self.deadline_ms = Some(self.now_ms + delay_ms.max(0.0));
    }

    #[inline]
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }
}
