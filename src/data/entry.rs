// src/data/entry.rs

//! Implements an [`Entry`], one timestamped log message from a CloudWatch
//! log export.

use crate::data::datetime::{
    datetime_parse_rfc3339,
    DateTimeL,
    DATETIME_PREFIX_LEN,
    MESSAGE_OFFSET,
};
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::str_to_String_noraw;

use std::fmt;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// A log message parsed from one line of a CloudWatch log export.
///
/// An `Entry` is only created from a line that begins with a datetime, see
/// [`Entry::from_line`]. The `message` is whatever followed; it may or may
/// not be JSON.
#[derive(Clone, PartialEq, Eq)]
pub struct Entry {
    /// The datetime parsed from the line prefix.
    dt: DateTimeL,
    /// The remainder of the line after the datetime and one separator.
    message: String,
}

impl fmt::Debug for Entry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("Entry")
            .field("dt", &self.dt)
            .field("message.len()", &self.message.len())
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for Entry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Entry {
    pub fn new(
        dt: DateTimeL,
        message: String,
    ) -> Entry {
        Entry { dt, message }
    }

    /// Parse a CloudWatch log line (without the trailing newline).
    ///
    /// The first [`DATETIME_PREFIX_LEN`] bytes must be an RFC 3339 datetime,
    /// followed by one separator byte, followed by the message. The
    /// message may be empty.
    ///
    /// Returns `None` for a line that is too short or has no parseable
    /// datetime prefix.
    pub fn from_line(line: &str) -> Option<Entry> {
        if line.len() < MESSAGE_OFFSET {
            defñ!("line.len() {} < {}; return None", line.len(), MESSAGE_OFFSET);
            return None;
        }
        // `get` fails rather than panics if a multi-byte char straddles
        // either offset
        let prefix: &str = line.get(..DATETIME_PREFIX_LEN)?;
        let message: &str = line.get(MESSAGE_OFFSET..)?;
        let dt: DateTimeL = datetime_parse_rfc3339(prefix)?;
        defñ!("dt {:?}, message {:?}", dt, str_to_String_noraw(message));

        Some(Entry::new(dt, String::from(message)))
    }

    /// The datetime of the log message.
    pub const fn dt(&self) -> &DateTimeL {
        &self.dt
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Consume the `Entry` returning the message.
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Sending side of the channel of [`Entry`], held by the file walking
/// thread.
pub type ChanSendEntry = ::crossbeam_channel::Sender<Entry>;

/// Receiving side of the channel of [`Entry`], held by the JSON filtering
/// thread.
pub type ChanRecvEntry = ::crossbeam_channel::Receiver<Entry>;
