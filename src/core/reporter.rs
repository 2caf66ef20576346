use crate::core::categories::Category;
use crate::core::resolver;
use crate::log_debug;
use crate::utils::filesystem::{compute_size, format_bytes};
use colored::Colorize;
// Styled report output, matching the rest of the crate.
use std::path::Path;

/// Width of the label column in the per-category table.
const LABEL_WIDTH: usize = 30;
/// Width of the right-aligned size column.
const SIZE_WIDTH: usize = 15;

/// One table row: a category that exists under the user's home and holds
/// at least one byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryUsage {
    pub label: &'static str,
    pub bytes: u64,
}

/// The outcome of measuring every Edge category under one home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeScan {
    /// Non-empty categories, in table order.
    pub entries: Vec<CategoryUsage>,
    /// Sum of all entry sizes.
    pub total_bytes: u64,
    /// Whether any category path existed at all, empty or not. An installed
    /// but never-used Edge leaves empty directories behind; those still count
    /// as "found" even though they produce no table rows.
    pub found_any: bool,
}

/// Measures each category under `home`, in the order given.
///
/// Missing paths are skipped silently. Paths that exist set `found_any`,
/// but only those holding at least one byte become entries and contribute
/// to the total.
pub fn scan_home(home: &Path, categories: &[Category]) -> HomeScan {
    let mut entries = Vec::new();
    let mut total_bytes = 0;
    let mut found_any = false;

    for category in categories {
        let path = category.path_under(home);
        if !path.exists() {
            continue;
        }
        found_any = true;

        let bytes = compute_size(&path);
        if bytes > 0 {
            total_bytes += bytes;
            entries.push(CategoryUsage {
                label: category.label,
                bytes,
            });
        }
    }

    HomeScan {
        entries,
        total_bytes,
        found_any,
    }
}

/// Resolves `username`, measures the categories under their home, and prints
/// the per-user report block.
///
/// # Arguments
/// * `username` - The account to report on
/// * `categories` - The category table, printed in this order
///
/// # Returns
/// `false` when the user could not be resolved to a home directory, `true`
/// otherwise, including the case where the home exists but holds no Edge
/// data at all.
pub fn report(username: &str, categories: &[Category]) -> bool {
    let home = match resolver::resolve_home(username) {
        Some(home) => home,
        None => {
            println!(
                "{}",
                format!("✗ User '{username}' not found or home directory doesn't exist").red()
            );
            return false;
        }
    };
    log_debug!("resolved '{}' to {}", username, home.display());

    println!();
    println!("{}", "━".repeat(60).blue());
    println!("{}", format!("User: {username}").green());
    println!("{}", "━".repeat(60).blue());

    let scan = scan_home(&home, categories);

    if !scan.found_any {
        println!(
            "  {}",
            format!("⚠ No Microsoft Edge data found for user '{username}'")
                .yellow()
                .bold()
        );
        return true;
    }

    for entry in &scan.entries {
        println!(
            "  {:<lw$} {:>sw$}",
            format!("{}:", entry.label),
            format_bytes(entry.bytes),
            lw = LABEL_WIDTH,
            sw = SIZE_WIDTH,
        );
    }

    println!("{}", "─".repeat(62).blue());
    println!(
        "  {}",
        format!(
            "{:<lw$} {:>sw$}",
            "TOTAL:",
            format_bytes(scan.total_bytes),
            lw = LABEL_WIDTH,
            sw = SIZE_WIDTH,
        )
        .green()
    );
    println!("{}", "━".repeat(60).blue());

    true
}
