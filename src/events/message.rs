//! # Job event data model.
//!
//! [`EventMessage`] is an explicit sum type over the event variants a
//! job-scheduling feed can emit. Every variant carries the same payload,
//! [`JobEvent`] — the common projection callers key resumption and routing
//! off (`job_id`, `job_set_id`, `queue`, `created`, plus the feed position
//! `id` used as a resumption cursor).
//!
//! ## Wire shape
//! One camelCase key per message, naming the variant:
//! ```text
//! {"running": {"jobId": "a", "jobSetId": "s", "queue": "q", "id": "1"}}
//! ```
//! Exactly one key must be present. Decoding is driven by whichever key is
//! on the wire; a message with zero keys (or more than one) fails to decode
//! and surfaces as a per-line decode anomaly, never as a silently picked
//! variant.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Common projection shared by every event variant.
///
/// Servers may omit fields on some variants; string fields default to empty
/// and timestamps to absent, so a sparse event still decodes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEvent {
    /// Job this event is about.
    #[serde(default)]
    pub job_id: String,
    /// Job-set the job belongs to.
    #[serde(default)]
    pub job_set_id: String,
    /// Queue the job was submitted to.
    #[serde(default)]
    pub queue: String,
    /// Server-assigned creation timestamp, when provided.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Feed position of this event, usable as a resumption cursor.
    #[serde(default)]
    pub id: Option<String>,
}

/// One decoded job lifecycle event.
///
/// Each variant wraps the same [`JobEvent`] payload; the variant itself is
/// the event type. Use [`EventMessage::event`] for the projection and
/// [`EventMessage::label`] for a stable wire-format name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventMessage {
    Submitted(JobEvent),
    Queued(JobEvent),
    Leased(JobEvent),
    LeaseReturned(JobEvent),
    LeaseExpired(JobEvent),
    Pending(JobEvent),
    Running(JobEvent),
    UnableToSchedule(JobEvent),
    Failed(JobEvent),
    Succeeded(JobEvent),
    Reprioritized(JobEvent),
    Cancelling(JobEvent),
    Cancelled(JobEvent),
    Terminated(JobEvent),
}

impl EventMessage {
    /// Returns the common projection of the populated variant.
    pub fn event(&self) -> &JobEvent {
        match self {
            EventMessage::Submitted(e)
            | EventMessage::Queued(e)
            | EventMessage::Leased(e)
            | EventMessage::LeaseReturned(e)
            | EventMessage::LeaseExpired(e)
            | EventMessage::Pending(e)
            | EventMessage::Running(e)
            | EventMessage::UnableToSchedule(e)
            | EventMessage::Failed(e)
            | EventMessage::Succeeded(e)
            | EventMessage::Reprioritized(e)
            | EventMessage::Cancelling(e)
            | EventMessage::Cancelled(e)
            | EventMessage::Terminated(e) => e,
        }
    }

    /// Returns the wire-format name of the variant (the JSON key it decodes
    /// from), for logs/metrics.
    pub fn label(&self) -> &'static str {
        match self {
            EventMessage::Submitted(_) => "submitted",
            EventMessage::Queued(_) => "queued",
            EventMessage::Leased(_) => "leased",
            EventMessage::LeaseReturned(_) => "leaseReturned",
            EventMessage::LeaseExpired(_) => "leaseExpired",
            EventMessage::Pending(_) => "pending",
            EventMessage::Running(_) => "running",
            EventMessage::UnableToSchedule(_) => "unableToSchedule",
            EventMessage::Failed(_) => "failed",
            EventMessage::Succeeded(_) => "succeeded",
            EventMessage::Reprioritized(_) => "reprioritized",
            EventMessage::Cancelling(_) => "cancelling",
            EventMessage::Cancelled(_) => "cancelled",
            EventMessage::Terminated(_) => "terminated",
        }
    }

    /// Returns the resumption cursor carried by this event, if any.
    ///
    /// An absent or empty `id` yields `None`; the watch loop then keeps the
    /// last known-good cursor.
    pub fn cursor(&self) -> Option<&str> {
        self.event().id.as_deref().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_variant_from_wire_key() {
        let msg: EventMessage = serde_json::from_str(
            r#"{"running":{"jobId":"a","jobSetId":"s","queue":"q","id":"1"}}"#,
        )
        .unwrap();

        assert!(matches!(msg, EventMessage::Running(_)));
        assert_eq!(msg.label(), "running");
        let ev = msg.event();
        assert_eq!(ev.job_id, "a");
        assert_eq!(ev.job_set_id, "s");
        assert_eq!(ev.queue, "q");
        assert_eq!(ev.created, None);
        assert_eq!(msg.cursor(), Some("1"));
    }

    #[test]
    fn decodes_camel_case_variant_names() {
        let msg: EventMessage =
            serde_json::from_str(r#"{"leaseReturned":{"jobId":"j","jobSetId":"s","queue":"q"}}"#)
                .unwrap();
        assert_eq!(msg.label(), "leaseReturned");

        let msg: EventMessage =
            serde_json::from_str(r#"{"unableToSchedule":{"jobId":"j","jobSetId":"s","queue":"q"}}"#)
                .unwrap();
        assert_eq!(msg.label(), "unableToSchedule");
    }

    #[test]
    fn decodes_created_timestamp() {
        let msg: EventMessage = serde_json::from_str(
            r#"{"succeeded":{"jobId":"j","jobSetId":"s","queue":"q","created":"2020-01-02T03:04:05Z"}}"#,
        )
        .unwrap();
        let created = msg.event().created.unwrap();
        assert_eq!(created.to_rfc3339(), "2020-01-02T03:04:05+00:00");
    }

    #[test]
    fn sparse_event_defaults_to_empty_fields() {
        let msg: EventMessage = serde_json::from_str(r#"{"cancelled":{}}"#).unwrap();
        let ev = msg.event();
        assert_eq!(ev.job_id, "");
        assert_eq!(ev.queue, "");
        assert_eq!(msg.cursor(), None);
    }

    #[test]
    fn empty_cursor_is_absent() {
        let msg: EventMessage =
            serde_json::from_str(r#"{"pending":{"jobId":"j","id":""}}"#).unwrap();
        assert_eq!(msg.cursor(), None);
    }

    #[test]
    fn unknown_variant_key_is_a_decode_error() {
        let res: Result<EventMessage, _> =
            serde_json::from_str(r#"{"rescheduled":{"jobId":"j"}}"#);
        assert!(res.is_err());
    }

    #[test]
    fn multiple_variant_keys_are_a_decode_error() {
        let res: Result<EventMessage, _> =
            serde_json::from_str(r#"{"running":{"jobId":"a"},"failed":{"jobId":"a"}}"#);
        assert!(res.is_err());
    }
}
