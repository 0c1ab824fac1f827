//! Stream decoding: byte stream in, [`StreamItem`]s out.
//!
//! ## Contents
//! - [`EventReader`] — lazy, forward-only decoder over any
//!   [`AsyncBufRead`](tokio::io::AsyncBufRead) byte stream
//!
//! Used both for one-shot "read everything currently buffered" reads and by
//! the watch loop for continuous streaming.
//!
//! [`StreamItem`]: crate::events::StreamItem

mod reader;

pub use reader::EventReader;
