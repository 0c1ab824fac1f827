//! # Public surface: one-shot reads and resilient watches.
//!
//! [`JobSetClient`] wraps an [`EventSource`] and exposes the two feed
//! operations:
//!
//! - [`JobSetClient::read_all`] — finite read of everything currently
//!   buffered for a job-set; connect failures propagate to the caller.
//! - [`JobSetClient::watch`] — keeps a subscription alive until the
//!   cancellation token fires; all operational errors are observational
//!   (reported through the handler), never propagated.
//!
//! Any number of watches may run concurrently off one client; each call
//! owns its own connection, cursor and failure counter.

use tokio_util::sync::CancellationToken;

use crate::error::ConnectError;
use crate::policies::BackoffPolicy;
use crate::source::EventSource;
use crate::stream::EventReader;
use crate::watch::{run_watch, WatchHandler};

/// Client for one job-scheduling event feed.
///
/// Cheap to construct; holds the transport and the reconnect policy.
#[derive(Debug)]
pub struct JobSetClient<S> {
    source: S,
    backoff: BackoffPolicy,
}

impl<S: EventSource> JobSetClient<S> {
    /// Creates a client over the given transport with the default backoff
    /// policy (2s, 4s, 8s, ... capped at 300s).
    pub fn new(source: S) -> Self {
        Self {
            source,
            backoff: BackoffPolicy::default(),
        }
    }

    /// Replaces the reconnect backoff policy.
    pub fn with_backoff(mut self, backoff: BackoffPolicy) -> Self {
        self.backoff = backoff;
        self
    }

    /// Opens a finite stream of the events currently buffered for
    /// `job_set_id`, starting after `from` (`None` = from the beginning).
    ///
    /// The returned reader is lazy and forward-only; per-line decode
    /// failures surface as [`StreamItem::Error`](crate::StreamItem::Error)
    /// items, exactly as in watch mode. Connection establishment failures
    /// propagate here — there is no retry loop on this path.
    pub async fn read_all(
        &self,
        job_set_id: &str,
        from: Option<&str>,
    ) -> Result<EventReader<S::Stream>, ConnectError> {
        let stream = self.source.open(job_set_id, from, false).await?;
        Ok(EventReader::new(stream))
    }

    /// Watches `job_set_id` until `token` is cancelled.
    ///
    /// Every decoded line is handed to `handler` in wire order; the resume
    /// cursor advances after delivery. Disconnects are survived: benign
    /// closes reconnect immediately, operational faults are reported to
    /// the handler and retried after capped exponential backoff. The call
    /// returns only on cancellation.
    ///
    /// Cancellation is observed before each connect, at the read await and
    /// during backoff waits: a read pending when the token fires is dropped
    /// along with its connection, so cancellation latency is bounded and no
    /// partial line is ever delivered.
    ///
    /// A panicking handler is not caught and will end the watch.
    pub async fn watch<H: WatchHandler>(
        &self,
        job_set_id: &str,
        from: Option<&str>,
        token: CancellationToken,
        handler: &mut H,
    ) {
        run_watch(
            &self.source,
            job_set_id,
            from.map(str::to_owned),
            self.backoff,
            token,
            handler,
        )
        .await;
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::events::StreamItem;
    use crate::watch::FnHandler;

    /// Replays one canned body per open, failing once the bodies run out.
    struct CannedSource {
        bodies: Mutex<Vec<&'static str>>,
        cancel_when_empty: CancellationToken,
    }

    #[async_trait]
    impl EventSource for CannedSource {
        type Stream = Cursor<Vec<u8>>;

        async fn open(
            &self,
            _job_set_id: &str,
            _from: Option<&str>,
            _watch: bool,
        ) -> Result<Self::Stream, ConnectError> {
            let mut bodies = self.bodies.lock().unwrap();
            if bodies.is_empty() {
                self.cancel_when_empty.cancel();
                return Err(ConnectError::Closed {
                    reason: "drained".to_string(),
                });
            }
            Ok(Cursor::new(bodies.remove(0).as_bytes().to_vec()))
        }
    }

    struct FailingSource;

    #[async_trait]
    impl EventSource for FailingSource {
        type Stream = Cursor<Vec<u8>>;

        async fn open(
            &self,
            _job_set_id: &str,
            _from: Option<&str>,
            _watch: bool,
        ) -> Result<Self::Stream, ConnectError> {
            Err(ConnectError::Failed {
                reason: "connection refused".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn read_all_yields_buffered_events_in_order() {
        let body = concat!(
            r#"{"result":{"submitted":{"jobId":"a","id":"1"}}}"#, "\n",
            r#"{"result":{"running":{"jobId":"a","id":"2"}}}"#, "\n",
        );
        let client = JobSetClient::new(CannedSource {
            bodies: Mutex::new(vec![body]),
            cancel_when_empty: CancellationToken::new(),
        });

        let mut reader = client.read_all("set-a", None).await.unwrap();
        let mut labels = Vec::new();
        while let Some(item) = reader.next().await.unwrap() {
            labels.push(item.message().unwrap().label());
        }
        assert_eq!(labels, ["submitted", "running"]);
    }

    #[tokio::test]
    async fn read_all_propagates_connect_errors() {
        let client = JobSetClient::new(FailingSource);
        let err = client.read_all("set-a", None).await.err().unwrap();
        assert_eq!(err.as_label(), "connect_failed");
    }

    #[tokio::test]
    async fn watch_delivers_through_a_closure_handler() {
        let token = CancellationToken::new();
        let client = JobSetClient::new(CannedSource {
            bodies: Mutex::new(vec![
                concat!(r#"{"result":{"succeeded":{"jobId":"a","id":"9"}}}"#, "\n"),
            ]),
            cancel_when_empty: token.clone(),
        });

        let mut seen: Vec<StreamItem> = Vec::new();
        let mut handler = FnHandler::new(|item: StreamItem| seen.push(item));
        client.watch("set-a", None, token, &mut handler).await;
        drop(handler);

        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].cursor(), Some("9"));
    }
}
