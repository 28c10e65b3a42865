// src/readers/filewalker.rs

//! Walks a directory tree for gzipped CloudWatch log exports and reads
//! each one with [`read_archive_stream`].
//!
//! Any error stops the entire walk. One unreadable file or one corrupt
//! gzip file ends processing of all files; there is no skipping past a bad
//! file.
//!
//! [`read_archive_stream`]: crate::readers::archivereader::read_archive_stream

use crate::common::{err_from_err_path, FPath, SUFFIX_GZ};
use crate::data::entry::ChanSendEntry;
use crate::readers::archivereader::{read_archive_stream, ArchiveReadResult};
use crate::readers::filedecompressor::{open_gz, GzBufReader};
use crate::readers::helpers::{fpath_to_path, path_to_fpath};
use crate::readers::summary::ReadStats;

use std::io::{Error, ErrorKind};
use std::path::Path;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
use ::walkdir::{DirEntry, WalkDir};

/// Returned by [`ArchiveWalker::read`]:
/// * the statistics accumulated up to the end of the walk
/// * the error that stopped the walk, if any
pub type WalkResult = (ReadStats, Option<Error>);

/// Is the file name of `path` that of a gzipped log export?
pub fn is_archive_name(path: &Path) -> bool {
    match path.file_name() {
        Some(file_name) => file_name
            .to_string_lossy()
            .ends_with(SUFFIX_GZ),
        None => false,
    }
}

/// Reads every gzipped log export found under a path.
///
/// The path may be a directory, walked recursively, or one file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArchiveWalker {
    path: FPath,
}

impl ArchiveWalker {
    pub fn new(path: FPath) -> ArchiveWalker {
        ArchiveWalker { path }
    }

    pub fn path(&self) -> &FPath {
        &self.path
    }

    /// Walk the path, decompress and read each file with suffix
    /// [`SUFFIX_GZ`], and send every [`Entry`] found through
    /// `chan_send_entry`.
    ///
    /// Files are visited in file name order within each directory.
    /// Symbolic links to directories are not descended into. A symbolic
    /// link named like an archive is opened, following the link.
    ///
    /// The first error stops the walk and is returned with the statistics
    /// accumulated so far. Does not close the channel; that is for the
    /// owner of `chan_send_entry`.
    ///
    /// [`Entry`]: crate::data::entry::Entry
    pub fn read(
        &self,
        chan_send_entry: &ChanSendEntry,
    ) -> WalkResult {
        defn!("({:?})", self.path);
        let mut stats = ReadStats::default();

        for entry_res in WalkDir::new(fpath_to_path(&self.path))
            .follow_links(false)
            .sort_by_file_name()
        {
            stats.files_visited += 1;
            let dir_entry: DirEntry = match entry_res {
                Ok(val) => val,
                Err(err) => {
                    defx!("WalkDir Error {:?}; return {:?}", err, stats);
                    let fpath: FPath = match err.path() {
                        Some(path) => path_to_fpath(path),
                        None => self.path.clone(),
                    };
                    let err_io: Error = Error::from(err);
                    return (stats, Some(err_from_err_path(&err_io, &fpath, Some("(directory walk failed)"))));
                }
            };
            if dir_entry.file_type().is_dir() {
                defo!("skip directory {:?}", dir_entry.path());
                continue;
            }
            if !is_archive_name(dir_entry.path()) {
                defo!("skip not {:?} {:?}", SUFFIX_GZ, dir_entry.path());
                continue;
            }
            if let Err(err) = Self::read_file(dir_entry.path(), chan_send_entry, &mut stats) {
                defx!("read_file Error {:?}; return {:?}", err, stats);
                return (stats, Some(err));
            }
        }
        defx!("return {:?}", stats);

        (stats, None)
    }

    /// Decompress and read one file, folding its counts into `stats`.
    ///
    /// The file and decompressor are closed before returning.
    fn read_file(
        path: &Path,
        chan_send_entry: &ChanSendEntry,
        stats: &mut ReadStats,
    ) -> std::io::Result<()> {
        defn!("({:?})", path);
        let reader: GzBufReader = open_gz(path)?;
        let result: ArchiveReadResult = read_archive_stream(reader, chan_send_entry);
        match result {
            Ok((lines_read, entries_extracted)) => {
                stats.add_file(lines_read, entries_extracted);
                defx!("lines_read {}, entries_extracted {}", lines_read, entries_extracted);

                Ok(())
            }
            Err(((lines_read, entries_extracted), err)) => {
                stats.add_file(lines_read, entries_extracted);
                defx!("Error {:?}", err);
                if err.kind() == ErrorKind::BrokenPipe {
                    return Err(err);
                }

                Err(err_from_err_path(&err, &path_to_fpath(path), Some("(read failed)")))
            }
        }
    }
}
