use rayon::prelude::*;
// Parallel iterators; the per-file byte sum below runs on rayon's thread pool.
use std::fs;
// Standard library file system module, used for metadata (size) lookups.
use std::path::Path;
// `Path` is the universal borrowed type for file system paths.
use walkdir::WalkDir;
// `WalkDir` performs the recursive directory traversal for the accumulator.

/// Computes the number of bytes occupied by `path`.
///
/// This is the size accumulator behind every category line in the report. It
/// is written to absorb every filesystem error rather than propagate it: a
/// path that cannot be measured simply contributes 0 bytes.
///
/// # Arguments
/// * `path` - A file or directory to measure.
///
/// # Returns
/// The total size in bytes:
/// * nonexistent path (including a broken symlink) → 0;
/// * regular file → its length, or 0 when the metadata cannot be read;
/// * directory → the sum of the lengths of every plain file reachable in the
///   tree. Symlinks and special files are never counted, unreadable entries
///   contribute 0, and a walk that fails at the root yields 0.
///
/// Never panics and never returns an error, whatever the filesystem does.
pub fn compute_size(path: &Path) -> u64 {
    if !path.exists() {
        return 0;
    }

    // A plain file (or a symlink pointing at one; `is_file` follows links,
    // as does the existence check above).
    if path.is_file() {
        return fs::metadata(path).map(|metadata| metadata.len()).unwrap_or(0);
    }

    // A directory: collect the plain-file entries first, then sum their sizes
    // in parallel. Entries that error out of the walk (permission denied,
    // deleted mid-walk) are dropped; symlinks inside the tree are not
    // followed, so they and anything behind them never contribute.
    let files: Vec<walkdir::DirEntry> = WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .collect();

    files
        .par_iter()
        .map(|entry| entry.metadata().map(|metadata| metadata.len()).unwrap_or(0))
        .sum()
}

/// Converts a byte count into the human-readable form used by the report.
///
/// Units are binary (1024-based) and chosen by strict threshold comparison,
/// never by rounding: a value below 1024 stays in bytes even if it would
/// round up to the next unit, and exactly 1024 moves up (`1.00KB`, not
/// `1024B`). Below 1 KiB the count is printed as a bare integer; from 1 KiB
/// upward with exactly two decimals. There is no space before the unit.
///
/// # Arguments
/// * `bytes` - The number of bytes to format.
///
/// # Returns
/// A `String` such as `"500B"`, `"1.00KB"`, `"2.37MB"`, or `"1.08GB"`.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    match bytes {
        b if b >= GB => format!("{:.2}GB", b as f64 / GB as f64),
        b if b >= MB => format!("{:.2}MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.2}KB", b as f64 / KB as f64),
        b => format!("{}B", b),
    }
}
