//! File system utilities.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Permissions applied to every written file (rw-r--r--).
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes `content` to `path`, creating any missing parent directories.
///
/// The content goes to a uniquely named temp file next to the target which is
/// then renamed over it, so an interrupted run never leaves a half-written
/// file behind.
pub fn write_output(path: &Path, content: &[u8]) -> Result<(), WriteError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })?;

    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let prefix = format!(".{file_name}.");

    let write = || -> io::Result<()> {
        let mut temp = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(parent)?;
        temp.write_all(content)?;
        set_output_permissions(temp.path())?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    };

    write().map_err(|source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn set_output_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(OUTPUT_MODE))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
const fn set_output_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}
