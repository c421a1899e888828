use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Name of the per-project ignore file, looked up in the scanned root.
pub const IGNORE_FILE_NAME: &str = ".fasi7ignore";

/// Root-relative paths excluded from discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    entries: HashSet<String>,
}

impl IgnoreList {
    /// Reads `<root>/.fasi7ignore`.
    ///
    /// A missing file yields an empty list; any other read error is returned.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(IGNORE_FILE_NAME);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Self::parse(&contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read ignore file: {}", path.display())),
        }
    }

    /// One path per line; blank lines and `#` comments are skipped.
    pub fn parse(contents: &str) -> Self {
        let entries = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.strip_prefix("./").unwrap_or(line).to_string())
            .collect();
        Self { entries }
    }

    /// Returns `true` if `relative` (with `/` separators) is listed.
    pub fn contains(&self, relative: &str) -> bool {
        self.entries.contains(relative)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
