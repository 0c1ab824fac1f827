//! # Transport seam: opening event streams.
//!
//! [`EventSource`] is the boundary between this crate and the RPC layer that
//! owns authentication and transport setup. An implementation establishes
//! the HTTP-level stream for a job-set and hands back a line-oriented byte
//! stream; everything above that — decoding, resumption, reconnects — lives
//! here.
//!
//! Implementations map transport failures onto [`ConnectError`]:
//! [`ConnectError::Closed`] for a remote side ending the exchange early
//! (retried silently), [`ConnectError::Failed`] for everything else.

use async_trait::async_trait;
use tokio::io::AsyncBufRead;

use crate::error::ConnectError;

/// Contract for opening job-set event streams.
///
/// # Parameters
/// - `job_set_id`: the job-set whose feed to open.
/// - `from`: resumption cursor; `None` means from the beginning.
/// - `watch`: `false` returns a finite stream of currently buffered events;
///   `true` returns an open-ended stream kept alive until the server or
///   network ends it.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use jobwatch::{ConnectError, EventSource};
///
/// struct Canned(String);
///
/// #[async_trait]
/// impl EventSource for Canned {
///     type Stream = std::io::Cursor<Vec<u8>>;
///
///     async fn open(
///         &self,
///         _job_set_id: &str,
///         _from: Option<&str>,
///         _watch: bool,
///     ) -> Result<Self::Stream, ConnectError> {
///         Ok(std::io::Cursor::new(self.0.clone().into_bytes()))
///     }
/// }
/// ```
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Line-oriented byte stream produced by a successful open.
    type Stream: AsyncBufRead + Send + Unpin;

    /// Establishes an event stream for `job_set_id` starting after `from`.
    async fn open(
        &self,
        job_set_id: &str,
        from: Option<&str>,
        watch: bool,
    ) -> Result<Self::Stream, ConnectError>;
}
