//! Event data model: messages, projections and per-line items.
//!
//! This module groups the **data model** of the event feed:
//!
//! ## Contents
//! - [`EventMessage`], [`JobEvent`] — the tagged union of event variants and
//!   the common projection every variant carries
//! - [`StreamItem`] — per-line result: decoded message or per-line error
//!
//! Decoding is pure data work; connection handling lives in
//! [`stream`](crate::stream) and [`watch`](crate::watch).

mod item;
mod message;

pub use item::StreamItem;
pub use message::{EventMessage, JobEvent};
