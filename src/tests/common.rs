// src/tests/common.rs

//! Common test data shared by the `*_tests.rs`.

#![allow(dead_code)]

use crate::data::datetime::{DateTimeL, FixedOffset};

use ::chrono::TimeZone;

/// A line with a JSON message.
pub const LINE_JSON_A1: &str = r#"2018-03-29T14:40:23.417Z {"a":1}"#;
/// A line with a message that is not JSON.
pub const LINE_NOT_JSON: &str = "2018-03-29T14:40:24.417Z not-json";
/// A line with a larger JSON message, like one from a web service.
pub const LINE_JSON_HTTP: &str = r#"2018-03-29T14:40:25.000Z {"time":"2018-03-29T14:40:23Z","src":"rl","status":200,"http_2xx":1,"len":11,"ms":162,"path":"/user/details"}"#;
/// A line that is too short to have a message.
pub const LINE_SHORT: &str = "2018-03-29T14:40:23.417Z";
/// A line with no datetime.
pub const LINE_NO_DATETIME: &str = "START RequestId: 8d1e6a5c-4d3c Version: $LATEST";

/// Message of [`LINE_JSON_A1`].
pub const MESG_JSON_A1: &str = r#"{"a":1}"#;
/// Message of [`LINE_JSON_HTTP`].
pub const MESG_JSON_HTTP: &str = r#"{"time":"2018-03-29T14:40:23Z","src":"rl","status":200,"http_2xx":1,"len":11,"ms":162,"path":"/user/details"}"#;

/// Contents of a log export with one JSON line and one non-JSON line.
pub const DATA_A: &str = "2018-03-29T14:40:23.417Z {\"a\":1}\n2018-03-29T14:40:24.417Z not-json\n";

/// Helper to create a `DateTimeL` at UTC.
pub fn dt_utc(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
    milli: u32,
) -> DateTimeL {
    let offset = FixedOffset::east_opt(0).unwrap();
    offset
        .with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
        + ::chrono::Duration::milliseconds(milli as i64)
}

/// Datetime of [`LINE_JSON_A1`].
pub fn dt_a1() -> DateTimeL {
    dt_utc(2018, 3, 29, 14, 40, 23, 417)
}
