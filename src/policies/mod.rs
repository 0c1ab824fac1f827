//! Reconnect policy.
//!
//! ## Contents
//! - [`BackoffPolicy`] — how reconnect delays grow after consecutive
//!   non-benign failures (factor / max)
//!
//! ## Quick wiring
//! ```text
//! JobSetClient { backoff: BackoffPolicy }
//!      └─► watch::run_watch uses backoff.delay(failures) to schedule the
//!          next reconnect after a reported fault; benign disconnects skip
//!          the wait entirely.
//! ```
//!
//! ## Defaults
//! - `BackoffPolicy::default()` → factor=2.0, max=300s (2s, 4s, 8s, ... 300s).

mod backoff;

pub use backoff::BackoffPolicy;
