// src/data/mod.rs

//! The `data` module is data containers for log messages read from
//! CloudWatch log exports.
//!
//! ## Definitions of data
//!
//! ### Line
//!
//! A "line" is a sequence of bytes in a decompressed log export that:
//!
//! * begins after a prior "line" or the beginning of the file.
//! * ends with a newline character `'\n'` or the end of the file.
//!
//! ### Entry
//!
//! An "entry" is a "line" that:
//!
//! * begins with a 24 byte RFC 3339 datetime, e.g. `2018-03-29T14:40:23.417Z`.
//! * has one separator byte after the datetime.
//! * has a message, everything after the separator.
//!
//! An "entry" is represented by an [`Entry`]. Lines that are not entries
//! are skipped.
//!
//! [`Entry`]: crate::data::entry::Entry

pub mod datetime;
pub mod entry;
