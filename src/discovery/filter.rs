use std::path::Path;

/// Return true if the path is a plain file with the given extension
pub fn is_tabular_file(path: &Path, extension: &str) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == extension)
}
