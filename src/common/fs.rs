//! Common file system operations with unified error handling

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, dir_create_failed, file_write_failed};

/// Create a directory and all its parents
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| dir_create_failed(path.display().to_string(), e.to_string()))
}

/// Write a file so that it only becomes visible once complete
///
/// The content is produced into a temporary file in the destination
/// directory and then renamed over `path`. Readers listing the directory
/// see either nothing or the finished file. The temporary file starts with
/// a dot, so listings that skip hidden files never pick it up.
pub fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> std::io::Result<()>,
{
    let write_failed = |reason: String| file_write_failed(path.display().to_string(), reason);

    let dir = path
        .parent()
        .ok_or_else(|| write_failed("path has no parent directory".to_string()))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| write_failed(e.to_string()))?;
    write(tmp.as_file_mut()).map_err(|e| write_failed(e.to_string()))?;
    tmp.as_file_mut()
        .flush()
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| write_failed(e.to_string()))?;

    // Temporary files are created owner-only; published assets are served
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(|e| write_failed(e.to_string()))?;
    }

    tmp.persist(path)
        .map_err(|e| write_failed(e.error.to_string()))?;

    Ok(())
}

/// Write a byte buffer atomically, see [`write_atomic`]
pub fn write_bytes_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    write_atomic(path, |file| file.write_all(bytes))
}
