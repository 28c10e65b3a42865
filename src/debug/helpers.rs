// src/debug/helpers.rs

//! Helper functions for testing: temporary directories holding plain and
//! gzipped log files.

use crate::common::FPath;
use crate::readers::helpers::path_to_fpath;

use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use ::flate2::write::GzEncoder;
use ::flate2::Compression;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

#[doc(hidden)]
pub use ::tempfile::TempDir;

/// `TempDir` instances default to this directory name prefix.
pub const STR_TEMPDIR_PREFIX: &str = "tmp-cwfilter-test-";

/// Create a new temporary directory. Removed when the returned `TempDir`
/// is dropped.
pub fn create_temp_dir() -> TempDir {
    match ::tempfile::Builder::new()
        .prefix(STR_TEMPDIR_PREFIX)
        .tempdir()
    {
        Ok(val) => val,
        Err(err) => {
            panic!("tempfile::Builder::new().tempdir() return Err {}", err);
        }
    }
}

/// Join `subpath` onto `tmpdir` creating any missing parent directories.
fn tmpdir_subpath(tmpdir: &TempDir, subpath: &str) -> PathBuf {
    let path: PathBuf = tmpdir.path().join(subpath);
    if let Some(parent) = path.parent() {
        if let Err(err) = create_dir_all(parent) {
            panic!("create_dir_all({:?}) return Err {}", parent, err);
        }
    }

    path
}

/// Write `data` as-is to `subpath` within `tmpdir`.
pub fn create_file_in_tmpdir(
    tmpdir: &TempDir,
    subpath: &str,
    data: &[u8],
) -> FPath {
    let path: PathBuf = tmpdir_subpath(tmpdir, subpath);
    defñ!("({:?}, {} bytes)", path, data.len());
    let mut file = match File::create(&path) {
        Ok(val) => val,
        Err(err) => {
            panic!("File::create({:?}) return Err {}", path, err);
        }
    };
    if let Err(err) = file.write_all(data) {
        panic!("File::write_all({:?}) return Err {}", path, err);
    }

    path_to_fpath(&path)
}

/// Compress `data` with gzip.
pub fn gzip_bytes(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::<u8>::new(), Compression::default());
    if let Err(err) = encoder.write_all(data) {
        panic!("GzEncoder::write_all() return Err {}", err);
    }
    match encoder.finish() {
        Ok(val) => val,
        Err(err) => {
            panic!("GzEncoder::finish() return Err {}", err);
        }
    }
}

/// Write `data` gzipped to `subpath` within `tmpdir`.
pub fn create_gz_file_in_tmpdir(
    tmpdir: &TempDir,
    subpath: &str,
    data: &str,
) -> FPath {
    create_file_in_tmpdir(tmpdir, subpath, &gzip_bytes(data.as_bytes()))
}

/// Testing helper to create a `TempDir` and the files within it.
/// Each file is a `(subpath, data)` pair; subpaths ending in `.gz` are
/// written gzipped.
pub fn create_files_and_tmpdir(files: &[(&str, &str)]) -> (TempDir, Vec<FPath>) {
    let tmpdir = create_temp_dir();
    let mut fpaths = Vec::<FPath>::with_capacity(files.len());
    for (subpath, data) in files.iter() {
        let fpath: FPath = if subpath.ends_with(crate::common::SUFFIX_GZ) {
            create_gz_file_in_tmpdir(&tmpdir, subpath, data)
        } else {
            create_file_in_tmpdir(&tmpdir, subpath, data.as_bytes())
        };
        fpaths.push(fpath);
    }

    (tmpdir, fpaths)
}

/// The `FPath` of the `TempDir`.
pub fn tmpdir_fpath(tmpdir: &TempDir) -> FPath {
    let path: &Path = tmpdir.path();

    path_to_fpath(path)
}
