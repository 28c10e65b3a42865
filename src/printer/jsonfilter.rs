// src/printer/jsonfilter.rs

//! The JSON filtering stage. Receives each [`Entry`] from the channel and
//! prints the message only if it is JSON.
//!
//! [`Entry`]: crate::data::entry::Entry

use crate::common::NLu8;
use crate::data::entry::{ChanRecvEntry, Entry};
use crate::readers::summary::FilterStats;

use std::io::{Result, Write};

use ::serde::de::IgnoredAny;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Is `message` syntactically valid JSON?
///
/// Any JSON value is accepted; object, array, string, number, `true`,
/// `false`, `null`. Whitespace around the value is allowed, anything else
/// after the value is not.
///
/// The value is skipped over, never built, so numbers outside the range of
/// `f64` (e.g. `1e400`) are still JSON. Skipping does not recurse, so
/// nesting depth is not limited.
pub fn is_json(message: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(message).is_ok()
}

/// Write the message of `entry` followed by a newline.
#[inline(always)]
fn write_message<W: Write>(
    writer: &mut W,
    entry: &Entry,
) -> Result<()> {
    writer.write_all(entry.message().as_bytes())?;
    writer.write_all(&[NLu8])
}

/// Receive every [`Entry`] from `chan_recv_entry` until the channel is
/// closed and empty. Write the message of each `Entry` that [`is_json`] to
/// `writer`, one per line, in the order received.
///
/// Messages that are not JSON are dropped.
///
/// Returns an `Err` only if writing fails. Returning drops nothing from the
/// channel, though the caller dropping `chan_recv_entry` will cause the
/// sender to fail.
///
/// [`Entry`]: crate::data::entry::Entry
pub fn filter_entries<W: Write>(
    chan_recv_entry: &ChanRecvEntry,
    writer: &mut W,
) -> Result<FilterStats> {
    defn!();
    let mut stats = FilterStats::default();

    // `iter` blocks until an `Entry` arrives and ends once all senders are
    // dropped and the channel is drained
    for entry in chan_recv_entry.iter() {
        stats.received();
        if !is_json(entry.message()) {
            defo!("not JSON {:?}", entry.message());
            continue;
        }
        if let Err(err) = write_message(writer, &entry) {
            defx!("write_message Error {:?}; {:?}", err, stats);
            return Err(err);
        }
        stats.printed(entry.dt());
    }
    writer.flush()?;
    defx!("{:?}", stats);

    Ok(stats)
}
