use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::ignore::{IGNORE_FILE_NAME, IgnoreList};

/// A file found under the scanned root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiscoveredFile {
    /// Path as walked, i.e. `root` joined with `relative`.
    pub path: PathBuf,
    /// Path relative to the scanned root.
    pub relative: PathBuf,
}

/// Recursively lists every non-directory entry under `root`.
///
/// Entries listed in the root's ignore file are excluded, as is the ignore
/// file itself. Result order follows the walk and is not meaningful. The
/// first I/O error aborts the walk.
pub fn discover_files(root: &Path) -> Result<Vec<DiscoveredFile>> {
    let ignore = IgnoreList::load(root)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .with_context(|| format!("Path escapes root: {}", entry.path().display()))?
            .to_path_buf();
        let key = slash_path(&relative);

        if key == IGNORE_FILE_NAME || ignore.contains(&key) {
            tracing::debug!(path = %key, "ignored");
            continue;
        }

        files.push(DiscoveredFile {
            path: entry.into_path(),
            relative,
        });
    }

    tracing::debug!(root = %root.display(), count = files.len(), "discovered files");
    Ok(files)
}

/// Joins the components of `path` with `/`, whatever the platform separator.
pub fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
