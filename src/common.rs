// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

//! Common imports, type aliases, and other globals for _cwlib_.

pub use std::fs::File;
use std::io::Error;
pub use std::path::Path;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;

/// Single-byte newline char as u8
#[allow(non_upper_case_globals)]
pub const NLu8: u8 = b'\n';

/// File name suffix of a gzipped CloudWatch log export.
/// Only files with this suffix are decompressed and read.
pub const SUFFIX_GZ: &str = ".gz";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// counting and channels
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// General purpose counting type, used by the statistics structs.
pub type Count = u64;

/// Default number of [`Entry`] held in the channel between the file walking
/// thread and the filtering thread.
///
/// Large so that bursts of decompression do not wait on the printer.
///
/// [`Entry`]: crate::data::entry::Entry
pub const CHANNEL_CAPACITY: usize = 1024 * 1024;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// errors
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Create a new `Error` with the same `ErrorKind` as `error`, the message
/// extended with the offending `path` and an optional `mesg`.
///
/// `std::io::Error` cannot be cloned nor have its message amended, so a
/// new one is made.
pub fn err_from_err_path(
    error: &Error,
    path: &FPath,
    mesg: Option<&str>,
) -> Error {
    match mesg {
        Some(mesg_) => Error::new(error.kind(), format!("{} {} for file {:?}", error, mesg_, path)),
        None => Error::new(error.kind(), format!("{} for file {:?}", error, path)),
    }
}

/// Wrapper for [`err_from_err_path`] that returns `Err`.
pub fn err_from_err_path_result<T>(
    error: &Error,
    path: &FPath,
    mesg: Option<&str>,
) -> std::io::Result<T> {
    Err(err_from_err_path(error, path, mesg))
}
