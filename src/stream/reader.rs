//! # Lazy line-by-line event decoding.
//!
//! [`EventReader`] turns a connected byte stream into a forward-only,
//! non-restartable sequence of [`StreamItem`]s, one per input line, in input
//! order. It buffers no more than one line at a time and terminates when the
//! underlying stream ends (finite reads) or runs indefinitely while a watch
//! connection stays open.
//!
//! ## Rules
//! - Per-line decode failures yield `Ok(Some(StreamItem::Error(..)))` and do
//!   **not** stop subsequent lines.
//! - Connection-level read failures surface as `Err(io::Error)`.
//! - Dropping the reader releases the underlying stream; abandoning the
//!   sequence early never leaks the connection.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::events::StreamItem;

/// Pull-based decoder over a newline-delimited event stream.
///
/// Owns the underlying stream exclusively; the connection is closed when the
/// reader is dropped.
pub struct EventReader<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> EventReader<R> {
    /// Wraps a connected byte stream.
    pub fn new(stream: R) -> Self {
        Self { lines: stream.lines() }
    }

    /// Reads and decodes the next line.
    ///
    /// Returns `Ok(Some(item))` for each line, `Ok(None)` at end of stream,
    /// and `Err` only when reading from the connection itself fails.
    pub async fn next(&mut self) -> io::Result<Option<StreamItem>> {
        match self.lines.next_line().await? {
            Some(line) => Ok(Some(StreamItem::decode(&line))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(input: &str) -> EventReader<&[u8]> {
        // `&[u8]` implements AsyncBufRead, no transport needed
        EventReader::new(input.as_bytes())
    }

    #[tokio::test]
    async fn yields_items_in_input_order() {
        let input = concat!(
            r#"{"result":{"submitted":{"jobId":"a","id":"1"}}}"#, "\n",
            r#"{"result":{"pending":{"jobId":"a","id":"2"}}}"#, "\n",
            r#"{"result":{"running":{"jobId":"a","id":"3"}}}"#, "\n",
        );
        let mut reader = reader(input);

        let mut cursors = Vec::new();
        while let Some(item) = reader.next().await.unwrap() {
            assert!(!item.is_error());
            cursors.push(item.cursor().unwrap().to_string());
        }
        assert_eq!(cursors, ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn malformed_line_does_not_stop_the_sequence() {
        let input = concat!(
            r#"{"result":{"queued":{"jobId":"a","id":"1"}}}"#, "\n",
            "{garbage\n",
            r#"{"result":{"running":{"jobId":"a","id":"2"}}}"#, "\n",
        );
        let mut reader = reader(input);

        let first = reader.next().await.unwrap().unwrap();
        assert_eq!(first.cursor(), Some("1"));

        let second = reader.next().await.unwrap().unwrap();
        assert!(second.is_error());

        let third = reader.next().await.unwrap().unwrap();
        assert_eq!(third.cursor(), Some("2"));

        assert!(reader.next().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_stream_ends_immediately() {
        let mut reader = reader("");
        assert!(reader.next().await.unwrap().is_none());
    }
}
