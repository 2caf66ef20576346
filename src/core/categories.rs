use std::path::{Path, PathBuf};

/// One tracked Microsoft Edge storage location: a display label plus the
/// path of that location relative to a user's home directory.
#[derive(Debug, Clone)]
pub struct Category {
    pub label: &'static str,
    pub relative_path: &'static str,
}

impl Category {
    /// Returns the absolute location of this category under `home`.
    pub fn path_under(&self, home: &Path) -> PathBuf {
        home.join(self.relative_path)
    }
}

/// The fixed table of Edge data locations, in report order.
///
/// Built once at startup and handed to the reporter by reference; the table
/// is never mutated. Some entries are directories, some are single files
/// (the cookie store, the preferences plist); the size accumulator handles
/// both.
pub fn edge_categories() -> Vec<Category> {
    vec![
        Category {
            label: "Application Support",
            relative_path: "Library/Application Support/Microsoft Edge",
        },
        Category {
            label: "Caches",
            relative_path: "Library/Caches/Microsoft Edge",
        },
        Category {
            label: "Cookies",
            relative_path: "Library/Cookies/com.microsoft.edgemac.binarycookies",
        },
        Category {
            label: "HTTPStorages",
            relative_path: "Library/HTTPStorages/com.microsoft.edgemac",
        },
        Category {
            label: "Preferences",
            relative_path: "Library/Preferences/com.microsoft.edgemac.plist",
        },
        Category {
            label: "Saved Application State",
            relative_path: "Library/Saved Application State/com.microsoft.edgemac.savedState",
        },
        Category {
            label: "WebKit",
            relative_path: "Library/WebKit/com.microsoft.edgemac",
        },
    ]
}
