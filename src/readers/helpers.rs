// src/readers/helpers.rs

//! Conversions between [`FPath`] and `std::path::Path` for _Readers_.

use crate::common::{FPath, Path};

/// The lossy `FPath` of a `Path`, for messages and statistics.
pub fn path_to_fpath(path: &Path) -> FPath {
    path.to_string_lossy().into_owned()
}

pub fn fpath_to_path(fpath: &FPath) -> &Path {
    Path::new(fpath)
}
