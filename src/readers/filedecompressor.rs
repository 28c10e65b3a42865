// src/readers/filedecompressor.rs

//! The `filedecompressor` module opens gzipped files for streaming
//! decompression.

use crate::common::{err_from_err_path_result, File, FPath};
use crate::readers::helpers::path_to_fpath;

use std::io::{BufRead, BufReader, Result};
use std::path::Path;

// `flate2` is for gzip files.
use ::flate2::read::MultiGzDecoder;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Size of the buffer between the decompressor and the line reader.
pub const BUF_SZ: usize = 65536;

/// A decompressing line-oriented reader of one gzip file.
///
/// Dropping it closes the decompressor and the underlying `File`.
pub type GzBufReader = BufReader<MultiGzDecoder<File>>;

/// Open the gzip file at `path` for decompression.
///
/// Concatenated gzip members are read as one stream, the same as `gzip -d`.
///
/// The first block is decompressed before returning so that a file that is
/// not gzip, or a corrupt gzip header, is an `Err` here and not later
/// during line reading. A gzip file holding zero bytes of data is `Ok`.
pub fn open_gz(path: &Path) -> Result<GzBufReader> {
    defn!("({:?})", path);
    let fpath: FPath = path_to_fpath(path);

    let file: File = match File::open(path) {
        Ok(val) => val,
        Err(err) => {
            defx!("File::open({:?}) Error, return {:?}", path, err);
            return err_from_err_path_result::<GzBufReader>(&err, &fpath, Some("(open failed)"));
        }
    };
    defo!("file {:?}", file);

    let decoder: MultiGzDecoder<File> = MultiGzDecoder::new(file);
    let mut bufreader: GzBufReader = BufReader::with_capacity(BUF_SZ, decoder);
    match bufreader.fill_buf() {
        Ok(_buf) => {
            defo!("fill_buf() decompressed {} bytes", _buf.len());
        }
        Err(err) => {
            defx!("fill_buf() Error, return {:?}", err);
            return err_from_err_path_result::<GzBufReader>(&err, &fpath, Some("(gzip decompression failed)"));
        }
    }
    defx!("return Ok(GzBufReader)");

    Ok(bufreader)
}
