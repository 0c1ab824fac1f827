//! # The reconnect/backoff watch loop.
//!
//! Keeps one job-set subscription alive indefinitely: connect, stream lines
//! to the handler, survive disconnects, resume from the last delivered
//! cursor. One sequential loop per watch call; the stream of the current
//! iteration is owned exclusively by that iteration and dropped on every
//! exit path.
//!
//! ## State flow
//! ```text
//! Connecting ──ok──► Streaming ──line──► handler.on_message ──► advance cursor
//!     │                  │
//!     │                  ├─ benign close / end of stream ──► Connecting (no wait)
//!     │                  └─ read fault ──► handler.on_error ──► backoff ──► Connecting
//!     ├─ benign close ──► Connecting (no wait)
//!     ├─ connect fault ──► handler.on_error ──► backoff ──► Connecting
//!     └─ cancelled (before connect / at read / during backoff) ──► return
//! ```
//!
//! ## Rules
//! - The loop only exits on cancellation; faults are always retried.
//! - The failure counter resets on any successful connection **and** on any
//!   benign disconnect; only consecutive non-benign failures grow the delay.
//! - The cursor advances only after an item was handed to the handler, and
//!   only to a non-empty id; reconnects always resume from the last
//!   known-good cursor.

use std::io;

use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{is_benign_read, WatchFault};
use crate::policies::BackoffPolicy;
use crate::source::EventSource;
use crate::stream::EventReader;
use crate::watch::handler::WatchHandler;

/// How one established stream ended.
enum StreamOutcome {
    /// Cancellation observed; the watch is over.
    Cancelled,
    /// The remote side closed the stream (or it ended). Reconnect, no wait.
    Disconnected,
    /// Reading failed for an operational reason. Report, back off, reconnect.
    Fault(io::Error),
}

/// Runs a watch until the token is cancelled.
///
/// Never returns a value: everything the caller sees flows through the
/// handler. See the module docs for the state flow.
pub(crate) async fn run_watch<S, H>(
    source: &S,
    job_set_id: &str,
    mut cursor: Option<String>,
    backoff: BackoffPolicy,
    token: CancellationToken,
    handler: &mut H,
) where
    S: EventSource,
    H: WatchHandler,
{
    let mut failures: u32 = 0;

    loop {
        if token.is_cancelled() {
            break;
        }

        let opened = tokio::select! {
            res = source.open(job_set_id, cursor.as_deref(), true) => res,
            _ = token.cancelled() => break,
        };

        let stream = match opened {
            Ok(stream) => {
                failures = 0;
                stream
            }
            Err(err) if err.is_benign() => {
                debug!(job_set_id, error = %err, "stream closed while connecting, reconnecting");
                failures = 0;
                continue;
            }
            Err(err) => {
                failures += 1;
                handler.on_error(&WatchFault::Connect(err)).await;
                if !wait_backoff(backoff, failures, &token).await {
                    break;
                }
                continue;
            }
        };

        let mut reader = EventReader::new(stream);
        let outcome = stream_lines(&mut reader, &mut cursor, &token, handler).await;
        // release the connection before any backoff wait
        drop(reader);

        match outcome {
            StreamOutcome::Cancelled => break,
            StreamOutcome::Disconnected => {
                debug!(job_set_id, "stream ended, reconnecting");
                failures = 0;
            }
            StreamOutcome::Fault(err) => {
                failures += 1;
                handler.on_error(&WatchFault::Read(err)).await;
                if !wait_backoff(backoff, failures, &token).await {
                    break;
                }
            }
        }
    }
}

/// Streams lines to the handler until the stream ends, faults, or the
/// watch is cancelled.
///
/// Delivery order is exactly wire order, one line at a time. The cursor is
/// advanced after the handler accepted the item, and only when the item
/// carries a non-empty id.
async fn stream_lines<R, H>(
    reader: &mut EventReader<R>,
    cursor: &mut Option<String>,
    token: &CancellationToken,
    handler: &mut H,
) -> StreamOutcome
where
    R: tokio::io::AsyncBufRead + Unpin,
    H: WatchHandler,
{
    loop {
        if token.is_cancelled() {
            return StreamOutcome::Cancelled;
        }

        let read = tokio::select! {
            res = reader.next() => res,
            _ = token.cancelled() => return StreamOutcome::Cancelled,
        };

        match read {
            Ok(Some(item)) => {
                let advanced = item.cursor().map(str::to_owned);
                handler.on_message(item).await;
                if let Some(id) = advanced {
                    *cursor = Some(id);
                }
            }
            Ok(None) => return StreamOutcome::Disconnected,
            Err(err) if is_benign_read(&err) => return StreamOutcome::Disconnected,
            Err(err) => return StreamOutcome::Fault(err),
        }
    }
}

/// Sleeps for the backoff delay of the given failure count, racing the
/// cancellation token. Returns `false` when cancellation won.
async fn wait_backoff(policy: BackoffPolicy, failures: u32, token: &CancellationToken) -> bool {
    let delay = policy.delay(failures);
    debug!(failures, delay_ms = delay.as_millis() as u64, "backoff before reconnect");

    tokio::select! {
        _ = time::sleep(delay) => true,
        _ = token.cancelled() => false,
    }
}
