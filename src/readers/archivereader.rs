// src/readers/archivereader.rs

//! Reads lines from an already decompressed stream and sends each parsed
//! [`Entry`] through a channel.
//!
//! A last line with no trailing newline is still read and parsed, it is not
//! dropped as an incomplete line.
//!
//! [`Entry`]: crate::data::entry::Entry

use crate::common::{Count, NLu8};
use crate::data::entry::{ChanSendEntry, Entry};
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::str_to_String_noraw;

use std::borrow::Cow;
use std::io::{BufRead, Error, ErrorKind, Result};

use ::more_asserts::debug_assert_le;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Counts from reading one stream:
/// * count of non-blank lines read
/// * count of [`Entry`] extracted and sent
///
/// [`Entry`]: crate::data::entry::Entry
pub type ArchiveReadCounts = (Count, Count);

/// Result of [`read_archive_stream`].
///
/// The `Err` holds the counts reached before the error.
pub type ArchiveReadResult = std::result::Result<ArchiveReadCounts, (ArchiveReadCounts, Error)>;

/// Initial capacity of the line buffer. Most CloudWatch lines are shorter.
const LINE_CAPACITY: usize = 1024;

/// Read `reader` line by line until the end of the stream.
///
/// Lines that are blank after trimming whitespace are skipped and not
/// counted. Every other line is counted then parsed with
/// [`Entry::from_line`]; each `Entry` is sent through `chan_send_entry`
/// as it is found. Sending blocks while the channel is full.
///
/// Bytes are decoded as UTF-8, invalid sequences are replaced with
/// `U+FFFD`. The last line need not end with a newline.
///
/// An `Err` is returned for a read error or if the receiving side of the
/// channel is gone (`ErrorKind::BrokenPipe`). Reaching the end of the
/// stream is not an error.
pub fn read_archive_stream<R: BufRead>(
    mut reader: R,
    chan_send_entry: &ChanSendEntry,
) -> ArchiveReadResult {
    defn!();
    let mut lines_read: Count = 0;
    let mut entries_extracted: Count = 0;
    let mut buf: Vec<u8> = Vec::with_capacity(LINE_CAPACITY);

    loop {
        buf.clear();
        match reader.read_until(NLu8, &mut buf) {
            Ok(0) => {
                defo!("end of stream");
                break;
            }
            Ok(_) => {}
            Err(err) => {
                defx!("read_until() Error {:?}; lines_read {}, entries_extracted {}", err, lines_read, entries_extracted);
                return Err(((lines_read, entries_extracted), err));
            }
        }
        let line_cow: Cow<str> = String::from_utf8_lossy(&buf);
        let line: &str = line_cow.trim();
        if line.is_empty() {
            continue;
        }
        lines_read += 1;
        let entry: Entry = match Entry::from_line(line) {
            Some(val) => val,
            None => {
                defo!("line {} not an Entry {:?}", lines_read, str_to_String_noraw(line));
                continue;
            }
        };
        if let Err(_err) = chan_send_entry.send(entry) {
            defx!("chan_send_entry.send() failed {}; receiver is gone", _err);
            return Err((
                (lines_read, entries_extracted),
                Error::new(ErrorKind::BrokenPipe, "Entry channel receiver was dropped"),
            ));
        }
        entries_extracted += 1;
    }
    debug_assert_le!(entries_extracted, lines_read);
    defx!("return Ok(({}, {}))", lines_read, entries_extracted);

    Ok((lines_read, entries_extracted))
}
