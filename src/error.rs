//! Error types used by the stream client and the watch loop.
//!
//! This module defines two main error enums:
//!
//! - [`ConnectError`] — failures raised while establishing an event stream.
//! - [`WatchFault`] — operational faults reported to a watch handler.
//!
//! Both types provide helper methods (`as_label`) for logging/metrics, and
//! classification helpers ([`ConnectError::is_benign`], [`is_benign_read`])
//! that decide whether a failure is an expected stream-lifecycle event or an
//! operational fault worth backing off for.

use std::io;

use thiserror::Error;

/// # Errors raised while opening an event stream.
///
/// Returned by [`EventSource::open`](crate::EventSource::open). A `Closed`
/// error means the remote side ended the exchange early — expected behavior
/// for long-lived watch streams, retried without backoff and without
/// reporting a fault. Any `Failed` error is reported and backed off.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConnectError {
    /// The remote side closed the connection before or while the stream was
    /// being established. Treated as benign by the watch loop.
    #[error("stream closed by remote: {reason}")]
    Closed {
        /// Short description of how the close was observed.
        reason: String,
    },

    /// The connection attempt failed for any other reason (DNS, refused,
    /// protocol error, bad response status, ...).
    #[error("connect failed: {reason}")]
    Failed {
        /// The underlying failure message.
        reason: String,
    },
}

impl ConnectError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use jobwatch::ConnectError;
    ///
    /// let err = ConnectError::Failed { reason: "connection refused".into() };
    /// assert_eq!(err.as_label(), "connect_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConnectError::Closed { .. } => "connect_closed",
            ConnectError::Failed { .. } => "connect_failed",
        }
    }

    /// Indicates whether the failure is attributable to normal server-side
    /// stream lifecycle rather than an operational fault.
    ///
    /// Benign failures are retried immediately: no fault callback, no
    /// backoff, failure counter reset.
    ///
    /// # Example
    /// ```
    /// use jobwatch::ConnectError;
    ///
    /// let closed = ConnectError::Closed { reason: "eof".into() };
    /// assert!(closed.is_benign());
    ///
    /// let failed = ConnectError::Failed { reason: "refused".into() };
    /// assert!(!failed.is_benign());
    /// ```
    pub fn is_benign(&self) -> bool {
        matches!(self, ConnectError::Closed { .. })
    }
}

/// # Operational faults reported to [`WatchHandler::on_error`].
///
/// These never terminate a watch on their own: the loop reports the fault,
/// applies backoff, and reconnects from the last known-good cursor.
///
/// [`WatchHandler::on_error`]: crate::WatchHandler::on_error
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum WatchFault {
    /// A connection attempt failed (non-benign).
    #[error("connect: {0}")]
    Connect(#[from] ConnectError),

    /// Reading the next line from an established stream failed (non-benign).
    #[error("read: {0}")]
    Read(#[from] io::Error),
}

impl WatchFault {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            WatchFault::Connect(_) => "watch_connect_fault",
            WatchFault::Read(_) => "watch_read_fault",
        }
    }
}

/// Classifies a stream read error as benign (remote closed the stream) or an
/// operational fault.
///
/// Benign kinds cover the ways a server-side close or idle timeout surfaces
/// through the transport.
pub fn is_benign_read(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::UnexpectedEof
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::TimedOut
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_is_benign_failed_is_not() {
        assert!(ConnectError::Closed { reason: "eof".into() }.is_benign());
        assert!(!ConnectError::Failed { reason: "refused".into() }.is_benign());
    }

    #[test]
    fn benign_read_kinds() {
        for kind in [
            io::ErrorKind::UnexpectedEof,
            io::ErrorKind::ConnectionReset,
            io::ErrorKind::ConnectionAborted,
            io::ErrorKind::BrokenPipe,
            io::ErrorKind::TimedOut,
        ] {
            assert!(is_benign_read(&io::Error::new(kind, "x")), "{kind:?}");
        }
        assert!(!is_benign_read(&io::Error::new(io::ErrorKind::Other, "x")));
        assert!(!is_benign_read(&io::Error::new(
            io::ErrorKind::PermissionDenied,
            "x"
        )));
    }

    #[test]
    fn fault_labels() {
        let c = WatchFault::Connect(ConnectError::Failed { reason: "r".into() });
        assert_eq!(c.as_label(), "watch_connect_fault");
        let r = WatchFault::Read(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(r.as_label(), "watch_read_fault");
    }
}
