//! # Per-line stream items.
//!
//! Every line of an event stream decodes to exactly one [`StreamItem`]:
//! either a decoded [`EventMessage`] or an error string describing why this
//! line could not be delivered. Decode failures are per-line, never
//! per-stream — one malformed line must not abort the lines behind it.
//!
//! ## Wire shape
//! ```text
//! {"result": <message|null>, "error": <string|null>}
//! ```
//! Lines that fail to parse, carry a server-sent `error`, or carry neither
//! `result` nor `error` ("no event" anomaly) all become
//! [`StreamItem::Error`].

use serde::Deserialize;

use super::message::EventMessage;

/// One line's worth of stream output: a decoded message or a per-line error.
///
/// Exactly one of the two is present. Owned by whoever receives it off the
/// stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamItem {
    /// Successfully decoded event message.
    Message(EventMessage),
    /// The line could not be decoded, or the server reported an error for it.
    Error(String),
}

/// Wire wrapper for one line.
#[derive(Deserialize)]
struct WireMessage {
    #[serde(default)]
    result: Option<EventMessage>,
    #[serde(default)]
    error: Option<String>,
}

impl StreamItem {
    /// Decodes one newline-delimited wire line into a stream item.
    ///
    /// Never fails: malformed input becomes [`StreamItem::Error`] carrying
    /// the decode failure message.
    pub fn decode(line: &str) -> StreamItem {
        match serde_json::from_str::<WireMessage>(line) {
            Ok(WireMessage { error: Some(err), .. }) if !err.is_empty() => StreamItem::Error(err),
            Ok(WireMessage { result: Some(msg), .. }) => StreamItem::Message(msg),
            Ok(_) => StreamItem::Error("stream message contained no event".to_string()),
            Err(err) => StreamItem::Error(format!("malformed stream message: {err}")),
        }
    }

    /// Returns the resumption cursor carried by this item, if any.
    ///
    /// Error items and messages without a non-empty `id` yield `None`.
    pub fn cursor(&self) -> Option<&str> {
        match self {
            StreamItem::Message(msg) => msg.cursor(),
            StreamItem::Error(_) => None,
        }
    }

    /// Returns the decoded message, if this item carries one.
    pub fn message(&self) -> Option<&EventMessage> {
        match self {
            StreamItem::Message(msg) => Some(msg),
            StreamItem::Error(_) => None,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, StreamItem::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_result_line() {
        let item = StreamItem::decode(
            r#"{"result":{"running":{"jobId":"a","jobSetId":"s","queue":"q","id":"1"}}}"#,
        );
        assert_eq!(item.cursor(), Some("1"));
        assert_eq!(item.message().unwrap().label(), "running");
    }

    #[test]
    fn server_error_becomes_error_item() {
        let item = StreamItem::decode(r#"{"result":null,"error":"job set not found"}"#);
        assert_eq!(item, StreamItem::Error("job set not found".to_string()));
        assert_eq!(item.cursor(), None);
    }

    #[test]
    fn empty_message_is_an_anomaly() {
        let item = StreamItem::decode(r#"{"result":null,"error":null}"#);
        assert!(item.is_error());
        let item = StreamItem::decode(r#"{}"#);
        assert!(item.is_error());
    }

    #[test]
    fn malformed_json_becomes_error_item() {
        let item = StreamItem::decode("{not json");
        assert!(item.is_error());
    }

    #[test]
    fn unknown_event_key_becomes_error_item() {
        let item = StreamItem::decode(r#"{"result":{"rescheduled":{"jobId":"a"}}}"#);
        assert!(item.is_error());
    }

    #[test]
    fn empty_server_error_string_falls_through_to_result() {
        let item =
            StreamItem::decode(r#"{"result":{"queued":{"jobId":"a","id":"7"}},"error":""}"#);
        assert_eq!(item.cursor(), Some("7"));
    }
}
