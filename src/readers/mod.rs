// src/readers/mod.rs

//! "Readers" for _cwlib_.
//!
//! ## Overview of readers
//!
//! * An [`ArchiveWalker`] walks a directory tree for gzipped files.
//! * For each gzipped file, [`open_gz`] opens a decompressing reader.
//! * [`read_archive_stream`] reads the decompressed lines, creating and
//!   sending an [`Entry`] for each line that has a datetime prefix.
//! * The counts are accumulated in a [`ReadStats`].
//!
//! <br/>
//!
//! The _cwfilter_ binary program runs one `ArchiveWalker` on the main
//! thread, sending to one JSON filtering thread.
//!
//! [`ArchiveWalker`]: crate::readers::filewalker::ArchiveWalker
//! [`open_gz`]: crate::readers::filedecompressor::open_gz
//! [`read_archive_stream`]: crate::readers::archivereader::read_archive_stream
//! [`Entry`]: crate::data::entry::Entry
//! [`ReadStats`]: crate::readers::summary::ReadStats

pub mod archivereader;
pub mod filedecompressor;
pub mod filewalker;
pub mod helpers;
pub mod summary;
