use std::path::{Path, PathBuf};

/// Map a data directory into its output directory.
/// The input root prefix is replaced by the output root; the input root is
/// always a prefix of a data directory, so the fallback only guards against
/// misuse.
pub fn map_data_dir(data_dir: &Path, input_root: &Path, output_root: &Path) -> PathBuf {
    let relative = data_dir.strip_prefix(input_root).unwrap_or(data_dir);
    output_root.join(relative)
}

/// Map an input file name into its output file name by swapping the
/// extension.
pub fn map_file_name(input_file: &Path, extension: &str) -> PathBuf {
    let mut out = PathBuf::from(input_file.file_name().unwrap_or(input_file.as_os_str()));
    out.set_extension(extension);
    out
}
