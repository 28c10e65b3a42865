// src/pipeline.rs

//! Drives a run: one [`ArchiveWalker`] sending each [`Entry`] through a
//! bounded channel to one JSON filtering thread.
//!
//! ```text
//!   main thread                          "jsonfilter" thread
//!   ArchiveWalker::read ──► bounded channel ──► filter_entries ──► writer
//! ```
//!
//! The walker runs on the calling thread. When the walker is done, the one
//! sender is dropped, closing the channel. The filtering thread drains the
//! channel and returns.
//!
//! When the channel is full the walker blocks until the filtering thread
//! receives. No `Entry` is ever dropped to relieve the channel.
//!
//! [`ArchiveWalker`]: crate::readers::filewalker::ArchiveWalker
//! [`Entry`]: crate::data::entry::Entry

use crate::common::{FPath, CHANNEL_CAPACITY};
use crate::data::entry::{ChanRecvEntry, ChanSendEntry, Entry};
use crate::printer::jsonfilter::filter_entries;
use crate::readers::filewalker::{ArchiveWalker, WalkResult};
use crate::readers::summary::{FilterStats, ReadStats};

use std::io::{Error, ErrorKind, Write};
use std::thread;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Name of the JSON filtering thread.
pub const THREAD_NAME_FILTER: &str = "jsonfilter";

/// Settings for one run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PipelineConfig {
    /// Directory (or one file) to search for gzipped log exports.
    pub path: FPath,
    /// Count of [`Entry`] the channel holds before the walker blocks.
    ///
    /// [`Entry`]: crate::data::entry::Entry
    pub channel_capacity: usize,
}

impl PipelineConfig {
    pub fn new(path: FPath) -> PipelineConfig {
        PipelineConfig {
            path,
            channel_capacity: CHANNEL_CAPACITY,
        }
    }
}

/// Everything known at the end of a run.
#[derive(Debug)]
pub struct PipelineSummary {
    /// Statistics from the walker, also when the walk stopped early.
    pub read_stats: ReadStats,
    /// Statistics from the filtering thread. `None` if the filtering thread
    /// failed.
    pub filter_stats: Option<FilterStats>,
    /// The one error that ended the run, if any.
    pub error: Option<Error>,
}

impl PipelineSummary {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Run the pipeline described by `config`, writing JSON messages to
/// `writer`.
///
/// Returns after the filtering thread has finished writing. Lines written
/// before an error are not retracted.
///
/// If the walker and the filtering thread both fail then the walker's
/// error is reported; a filtering failure is often the cause of the
/// walker's `ErrorKind::BrokenPipe`, in which case the filtering error is
/// reported instead.
pub fn run_pipeline<W: Write + Send>(
    config: &PipelineConfig,
    mut writer: W,
) -> PipelineSummary {
    defn!("({:?})", config);

    if config.channel_capacity == 0 {
        defx!("channel_capacity 0");
        return PipelineSummary {
            read_stats: ReadStats::default(),
            filter_stats: None,
            error: Some(Error::new(ErrorKind::InvalidInput, "channel capacity must be greater than 0")),
        };
    }

    let (chan_send_entry, chan_recv_entry): (ChanSendEntry, ChanRecvEntry) =
        crossbeam_channel::bounded::<Entry>(config.channel_capacity);
    let walker = ArchiveWalker::new(config.path.clone());

    let (walk_result, filter_result): (WalkResult, std::io::Result<FilterStats>) = thread::scope(|scope| {
        let filter_handle = match thread::Builder::new()
            .name(String::from(THREAD_NAME_FILTER))
            .spawn_scoped(scope, move || {
                // the receiver moves into this thread and is dropped when it
                // returns, so a failed writer disconnects the walker
                filter_entries(&chan_recv_entry, &mut writer)
            })
        {
            Ok(val) => val,
            Err(err) => {
                defo!("thread.name({:?}).spawn() failed {:?}", THREAD_NAME_FILTER, err);
                return ((ReadStats::default(), Some(err)), Err(Error::new(ErrorKind::Other, "no filter thread")));
            }
        };

        let walk_result: WalkResult = walker.read(&chan_send_entry);
        defo!("walker.read() returned {:?}", walk_result);
        // close the channel, the only sender
        drop(chan_send_entry);

        let filter_result: std::io::Result<FilterStats> = match filter_handle.join() {
            Ok(val) => val,
            Err(_panic) => Err(Error::new(
                ErrorKind::Other,
                format!("thread {:?} panicked", THREAD_NAME_FILTER),
            )),
        };

        (walk_result, filter_result)
    });

    let (read_stats, walk_err_opt) = walk_result;
    let (filter_stats, filter_err_opt) = match filter_result {
        Ok(val) => (Some(val), None),
        Err(err) => (None, Some(err)),
    };
    let error: Option<Error> = match (walk_err_opt, filter_err_opt) {
        (Some(walk_err), Some(filter_err)) => {
            if walk_err.kind() == ErrorKind::BrokenPipe {
                Some(filter_err)
            } else {
                Some(walk_err)
            }
        }
        (Some(walk_err), None) => Some(walk_err),
        (None, Some(filter_err)) => Some(filter_err),
        (None, None) => None,
    };
    defx!("read_stats {:?}, filter_stats {:?}, error {:?}", read_stats, filter_stats, error);

    PipelineSummary {
        read_stats,
        filter_stats,
        error,
    }
}
