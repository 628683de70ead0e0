//! Line protocol spoken by the host-side MQTT bridge.
//!
//! The board has no radio, so a small bridge on the host subscribes to
//! the broker and forwards every message over USB serial as one line:
//!
//! ```text
//! <topic> <payload>\n
//! ```
//!
//! The topic ends at the first whitespace; the rest of the line is the
//! payload.  `\r` is ignored so CRLF senders work too.

use heapless::Vec;

use crate::error::Error;
use crate::sensor::Delivery;

/// One forwarded message, borrowed from the line buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopicUpdate<'a> {
    pub topic: &'a str,
    pub payload: &'a str,
}

impl TopicUpdate<'_> {
    /// Resolve to a storable reading if the topic is one we track.
    pub fn delivery(&self) -> Option<Delivery> {
        Delivery::new(self.topic, self.payload)
    }
}

/// Split a bridge line into topic and payload. Blank lines give `None`.
pub fn parse_update(line: &str) -> Option<TopicUpdate<'_>> {
    let line = line.trim();
    let (topic, payload) = match line.split_once(char::is_whitespace) {
        Some((topic, payload)) => (topic, payload.trim()),
        None => (line, ""),
    };
    if topic.is_empty() {
        return None;
    }
    Some(TopicUpdate { topic, payload })
}

/// Accumulates serial bytes into newline-terminated lines.
pub struct LineBuffer<const N: usize> {
    buf: Vec<u8, N>,
    overflowed: bool,
    complete: bool,
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            overflowed: false,
            complete: false,
        }
    }

    /// Feed one byte. Returns the finished line when `byte` is `\n`.
    ///
    /// A line longer than `N` is reported as [`Error::BufferOverflow`]
    /// and dropped; a line that is not UTF-8 as [`Error::Malformed`].
    pub fn push(&mut self, byte: u8) -> Option<Result<&str, Error>> {
        if self.complete {
            self.buf.clear();
            self.complete = false;
        }

        match byte {
            b'\r' => None,
            b'\n' => {
                self.complete = true;
                if core::mem::take(&mut self.overflowed) {
                    return Some(Err(Error::BufferOverflow));
                }
                Some(core::str::from_utf8(&self.buf).map_err(|_| Error::Malformed))
            }
            _ => {
                if !self.overflowed && self.buf.push(byte).is_err() {
                    self.overflowed = true;
                }
                None
            }
        }
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
