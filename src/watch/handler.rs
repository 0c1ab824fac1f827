//! # Watch handler trait and closure adapter.
//!
//! [`WatchHandler`] is the extension point a watch caller plugs its event
//! processing into. Both methods are invoked inline from the watch loop,
//! strictly in wire order, one item at a time.
//!
//! ## Contract
//! - [`WatchHandler::on_message`] receives every decoded item, including
//!   per-line decode errors ([`StreamItem::Error`]).
//! - [`WatchHandler::on_error`] receives operational faults (failed
//!   connects, failed reads). The default implementation ignores them; the
//!   loop retries regardless.
//! - A panicking handler is **not** caught: it propagates out of the watch
//!   call and ends the watch.

use async_trait::async_trait;

use crate::error::WatchFault;
use crate::events::StreamItem;

/// Contract for receiving watched events and operational faults.
///
/// Called inline from the watch loop; implementations should avoid blocking
/// the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait WatchHandler: Send {
    /// Handles the next stream item, in wire order.
    async fn on_message(&mut self, item: StreamItem);

    /// Observes an operational fault (the loop will back off and retry).
    ///
    /// Default: ignore.
    async fn on_error(&mut self, fault: &WatchFault) {
        let _ = fault;
    }
}

/// Function-backed handler implementation.
///
/// Wraps a closure invoked for every stream item; faults fall through to
/// the default no-op. Implement [`WatchHandler`] directly when fault
/// observation or async processing is needed.
///
/// # Example
/// ```
/// use jobwatch::{FnHandler, StreamItem};
///
/// let mut seen = Vec::new();
/// let handler = FnHandler::new(|item: StreamItem| {
///     seen.push(item);
/// });
/// # let _ = handler;
/// ```
#[derive(Debug)]
pub struct FnHandler<F> {
    f: F,
}

impl<F> FnHandler<F> {
    /// Creates a new function-backed handler.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F> WatchHandler for FnHandler<F>
where
    F: FnMut(StreamItem) + Send,
{
    async fn on_message(&mut self, item: StreamItem) {
        (self.f)(item);
    }
}
