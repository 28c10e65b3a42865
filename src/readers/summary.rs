// src/readers/summary.rs

//! Implements the statistics tracking structs [`ReadStats`] and
//! [`FilterStats`].

use crate::common::Count;
use crate::data::datetime::{DateTimeL, DateTimeLOpt};

use std::fmt;

use ::more_asserts::debug_assert_le;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ReadStats
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Accumulated statistics of one walk of a directory tree by an
/// [`ArchiveWalker`].
///
/// Counts only increase during a walk. `entries_extracted` is never more
/// than `lines_read`.
///
/// For CLI option `--summary`.
///
/// [`ArchiveWalker`]: crate::readers::filewalker::ArchiveWalker
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReadStats {
    /// Count of filesystem entries visited, files and directories.
    pub files_visited: Count,
    /// Count of files decompressed and read.
    pub files_read: Count,
    /// Count of non-blank lines read across all files.
    pub lines_read: Count,
    /// Count of lines parsed into an [`Entry`].
    ///
    /// [`Entry`]: crate::data::entry::Entry
    pub entries_extracted: Count,
}

impl ReadStats {
    /// Fold in the counts returned by one call to [`read_archive_stream`].
    ///
    /// [`read_archive_stream`]: crate::readers::archivereader::read_archive_stream
    pub fn add_file(
        &mut self,
        lines_read: Count,
        entries_extracted: Count,
    ) {
        debug_assert_le!(entries_extracted, lines_read, "more entries than lines for one file");
        self.files_read += 1;
        self.lines_read += lines_read;
        self.entries_extracted += entries_extracted;
        debug_assert_le!(self.entries_extracted, self.lines_read, "more entries than lines");
    }
}

impl fmt::Display for ReadStats {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(
            f,
            "files visited {}, files read {}, lines read {}, entries extracted {}",
            self.files_visited, self.files_read, self.lines_read, self.entries_extracted,
        )
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FilterStats
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Accumulated statistics of the JSON filtering stage.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FilterStats {
    /// Count of [`Entry`] received from the channel.
    ///
    /// [`Entry`]: crate::data::entry::Entry
    pub entries_received: Count,
    /// Count of messages that were JSON and were printed.
    pub entries_printed: Count,
    /// Datetime of the first printed [`Entry`], in order of printing.
    ///
    /// [`Entry`]: crate::data::entry::Entry
    pub dt_first: DateTimeLOpt,
    /// Datetime of the last printed [`Entry`], in order of printing.
    ///
    /// [`Entry`]: crate::data::entry::Entry
    pub dt_last: DateTimeLOpt,
}

impl FilterStats {
    /// Note an [`Entry`] was received.
    ///
    /// [`Entry`]: crate::data::entry::Entry
    pub fn received(&mut self) {
        self.entries_received += 1;
    }

    /// Note an [`Entry`] with datetime `dt` was printed.
    ///
    /// [`Entry`]: crate::data::entry::Entry
    pub fn printed(
        &mut self,
        dt: &DateTimeL,
    ) {
        self.entries_printed += 1;
        debug_assert_le!(self.entries_printed, self.entries_received, "printed more than received");
        if self.dt_first.is_none() {
            self.dt_first = Some(*dt);
        }
        self.dt_last = Some(*dt);
    }
}

impl fmt::Display for FilterStats {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(
            f,
            "entries received {}, entries printed {}",
            self.entries_received, self.entries_printed,
        )
    }
}
