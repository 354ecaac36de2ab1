//! Data-directory enumeration and tabular file discovery

pub mod filter;

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{ConversionError, ConversionResult};

/// Enumerate the data directories under `root`: the root itself first,
/// followed by every direct child that is a directory.
///
/// Depth 1 only, no name filtering. Order follows the underlying directory
/// listing and is filesystem-dependent, so it is not stable across
/// platforms. The caller owns the precondition that `root` exists; a bad
/// root surfaces as an IO error from the listing itself.
pub fn enumerate_data_dirs(root: &Path) -> ConversionResult<Vec<PathBuf>> {
    let mut data_dirs = Vec::new();

    for entry in WalkDir::new(root).min_depth(0).max_depth(1) {
        let entry = entry.map_err(|e| {
            let io = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "walk failed"));
            ConversionError::io(io, root)
        })?;
        if entry.file_type().is_dir() {
            data_dirs.push(entry.path().to_path_buf());
        }
    }

    Ok(data_dirs)
}

/// List the tabular files directly inside `dir`, in listing order.
///
/// Subdirectories and files with other extensions are silently excluded;
/// an empty result is valid and means the directory contributes nothing.
pub fn list_tabular_files(dir: &Path, extension: &str) -> ConversionResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    let entries = fs::read_dir(dir).map_err(|e| ConversionError::io(e, dir))?;
    for entry in entries {
        let entry = entry.map_err(|e| ConversionError::io(e, dir))?;
        let path = entry.path();
        if filter::is_tabular_file(&path, extension) {
            files.push(path);
        }
    }

    Ok(files)
}
