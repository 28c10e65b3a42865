// src/data/datetime.rs

//! Functions to parse the datetime prefix of a CloudWatch log line.
//!
//! A CloudWatch log export line looks like
//!
//! ```text
//! 2018-03-29T14:40:23.417Z {"time":"2018-03-29T14:40:23Z","status":200}
//! ```
//!
//! The first 24 bytes are an [RFC 3339] datetime with milliseconds and
//! timezone `Z`.
//!
//! [RFC 3339]: https://www.rfc-editor.org/rfc/rfc3339

#[doc(hidden)]
pub use ::chrono::{DateTime, FixedOffset, Utc};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// DateTime typing used throughout _cwlib_. `L` is for "Local" though the
/// offset is whatever the log line declared.
pub type DateTimeL = DateTime<FixedOffset>;
pub type DateTimeLOpt = Option<DateTimeL>;

/// Length in bytes of the datetime prefix, e.g. `2018-03-29T14:40:23.417Z`.
pub const DATETIME_PREFIX_LEN: usize = 24;

/// Byte offset of the log message, one past the separator that follows the
/// datetime prefix.
pub const MESSAGE_OFFSET: usize = DATETIME_PREFIX_LEN + 1;

/// Byte offset of the date and time separator `T`.
const DATETIME_SEPARATOR_OFFSET: usize = 10;

/// Parse `data` as an RFC 3339 datetime, e.g. `2018-03-29T14:40:23.417Z` or
/// `2018-03-29T14:40:23+01:00`. Fractional seconds are optional.
///
/// Only the strict form is accepted: an uppercase `T` between date and
/// time, and an uppercase `Z` for UTC. `chrono` alone would also accept a
/// space or lowercase letters.
///
/// Returns `None` if `data` is not a datetime. Not an error, many log lines
/// are expected to fail.
pub fn datetime_parse_rfc3339(data: &str) -> DateTimeLOpt {
    let bytes: &[u8] = data.as_bytes();
    if bytes.get(DATETIME_SEPARATOR_OFFSET) != Some(&b'T') || bytes.last() == Some(&b'z') {
        defñ!("({:?}) not strict RFC 3339; return None", data);
        return None;
    }
    match DateTime::parse_from_rfc3339(data) {
        Ok(val) => {
            defñ!("({:?}) return Some({:?})", data, val);

            Some(val)
        }
        Err(_err) => {
            defñ!("({:?}) ParseError {}; return None", data, _err);

            None
        }
    }
}
