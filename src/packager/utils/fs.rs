//! File system helpers.

use std::path::Path;

/// Source folders above this many bytes (decimal GB) need confirmation.
pub const LARGE_FOLDER_THRESHOLD: u64 = 1_000_000_000;

/// Sums the sizes of all regular files below `path`.
///
/// Walks recursively without following symlinks. Returns 0 when `path`
/// cannot be enumerated (missing, not a directory, unreadable); unreadable
/// entries further down are skipped.
pub fn folder_size(path: &Path) -> u64 {
    walkdir::WalkDir::new(path)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}

/// True when `size` is strictly above [`LARGE_FOLDER_THRESHOLD`].
pub fn exceeds_large_folder_threshold(size: u64) -> bool {
    size > LARGE_FOLDER_THRESHOLD
}

/// Formats a byte count as decimal gigabytes, e.g. `"1.50 GB"`.
pub fn format_gigabytes(size: u64) -> String {
    format!("{:.2} GB", size as f64 / LARGE_FOLDER_THRESHOLD as f64)
}
