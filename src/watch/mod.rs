//! Resilient watching: handler contract and the reconnect loop.
//!
//! The only public API from this module is the handler side:
//! [`WatchHandler`] and the closure adapter [`FnHandler`]. The loop itself
//! is internal and driven through
//! [`JobSetClient::watch`](crate::JobSetClient::watch).
//!
//! Internal modules:
//! - [`handler`]: the caller-facing event/fault contract;
//! - [`watcher`]: connect → stream → disconnect → backoff state machine.

mod handler;
mod watcher;

pub use handler::{FnHandler, WatchHandler};
pub(crate) use watcher::run_watch;
