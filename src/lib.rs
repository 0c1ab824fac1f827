//! # jobwatch
//!
//! **jobwatch** is a resilient event-stream consumer for job-scheduling
//! feeds: it connects to a job-set's event feed, delivers ordered event
//! messages to a caller-supplied handler, and transparently survives
//! connection drops by reconnecting and resuming from the last delivered
//! message.
//!
//! ## Architecture
//! ```text
//!            ┌─────────────────────────────┐
//!            │ EventSource (caller's RPC   │
//!            │ layer: auth, HTTP, streams) │
//!            └──────────────┬──────────────┘
//!                           │ open(job_set, cursor, watch) → byte stream
//!                           ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  JobSetClient                                            │
//! │   ├─ read_all ──► EventReader (finite, lazy)             │
//! │   └─ watch ─────► watch loop (infinite, cancellable)     │
//! │        │                                                 │
//! │        │  Connecting ──► Streaming ──► (Disconnected)*   │
//! │        │       │  backoff: BackoffPolicy (2s..300s)      │
//! │        │       │  cursor: last delivered event id        │
//! │        ▼       ▼                                         │
//! │   WatchHandler::on_message / on_error                    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//! | Concern          | Behavior                                                              |
//! |------------------|-----------------------------------------------------------------------|
//! | **Ordering**     | Items are delivered in wire order, one line at a time, no buffering.   |
//! | **Resumption**   | The cursor advances only after delivery; reconnects resume from it.    |
//! | **Decode errors**| Per-line: an undecodable line is an `Error` item, the stream continues.|
//! | **Disconnects**  | Benign closes reconnect immediately; faults back off (capped, 300s).   |
//! | **Termination**  | A watch only returns on cancellation; faults are retried forever.      |
//! | **Cancellation** | Cooperative, observed before connect, at the read, and during backoff. |
//!
//! ## Example
//! ```no_run
//! use async_trait::async_trait;
//! use tokio_util::sync::CancellationToken;
//! use jobwatch::{ConnectError, EventSource, FnHandler, JobSetClient};
//!
//! /// Transport supplied by the surrounding RPC layer.
//! struct Feed;
//!
//! #[async_trait]
//! impl EventSource for Feed {
//!     type Stream = std::io::Cursor<Vec<u8>>;
//!
//!     async fn open(
//!         &self,
//!         job_set_id: &str,
//!         from: Option<&str>,
//!         watch: bool,
//!     ) -> Result<Self::Stream, ConnectError> {
//!         // open the HTTP-level stream here
//!         # let _ = (job_set_id, from, watch);
//!         unimplemented!()
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let client = JobSetClient::new(Feed);
//!     let token = CancellationToken::new();
//!
//!     let mut handler = FnHandler::new(|item: jobwatch::StreamItem| {
//!         if let Some(msg) = item.message() {
//!             println!("{} job={}", msg.label(), msg.event().job_id);
//!         }
//!     });
//!
//!     // runs until `token.cancel()` is called elsewhere
//!     client.watch("my-job-set", None, token, &mut handler).await;
//! }
//! ```

mod client;
mod error;
mod events;
mod policies;
mod source;
mod stream;
mod watch;

// ---- Public re-exports ----

pub use client::JobSetClient;
pub use error::{is_benign_read, ConnectError, WatchFault};
pub use events::{EventMessage, JobEvent, StreamItem};
pub use policies::BackoffPolicy;
pub use source::EventSource;
pub use stream::EventReader;
pub use watch::{FnHandler, WatchHandler};
