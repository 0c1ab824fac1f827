//! # Reconnect backoff policy.
//!
//! [`BackoffPolicy`] controls how long the watch loop waits before
//! reconnecting after consecutive non-benign failures. The delay for the
//! Nth consecutive failure (N starting at 1) is `factor^N` seconds, clamped
//! to [`BackoffPolicy::max`]. The failure counter is owned by the watch
//! loop and resets to zero on any successful connection or benign
//! disconnect, so a healthy feed always starts back at the first delay.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use jobwatch::BackoffPolicy;
//!
//! let backoff = BackoffPolicy::default(); // factor=2.0, max=300s
//!
//! assert_eq!(backoff.delay(1), Duration::from_secs(2));
//! assert_eq!(backoff.delay(2), Duration::from_secs(4));
//! assert_eq!(backoff.delay(3), Duration::from_secs(8));
//!
//! // 2^9 = 512s — capped at max=300s
//! assert_eq!(backoff.delay(9), Duration::from_secs(300));
//! ```

use std::time::Duration;

/// Exponential reconnect backoff with a cap.
#[derive(Clone, Copy, Debug)]
pub struct BackoffPolicy {
    /// Multiplicative growth factor (`>= 1.0` recommended).
    pub factor: f64,
    /// Maximum delay cap.
    pub max: Duration,
}

impl Default for BackoffPolicy {
    /// Returns a policy with:
    /// - `factor = 2.0` (delays 2s, 4s, 8s, ...);
    /// - `max = 300s`.
    fn default() -> Self {
        Self {
            factor: 2.0,
            max: Duration::from_secs(300),
        }
    }
}

impl BackoffPolicy {
    /// Computes the delay for the given consecutive-failure count
    /// (1-indexed; the first failure waits `factor^1` seconds).
    ///
    /// The base delay is `factor^failures` seconds, clamped to
    /// [`BackoffPolicy::max`]. Overflowing or non-finite results clamp to
    /// `max` as well, so arbitrarily large counters stay safe.
    pub fn delay(&self, failures: u32) -> Duration {
        let max_secs = self.max.as_secs_f64();
        let clamped_exp = failures.min(i32::MAX as u32) as i32;
        let unclamped_secs = self.factor.powi(clamped_exp);

        if !unclamped_secs.is_finite() || unclamped_secs < 0.0 || unclamped_secs > max_secs {
            self.max
        } else {
            Duration::from_secs_f64(unclamped_secs)
        }
    }
}
