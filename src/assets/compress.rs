//! Gzip siblings for published bundles
//!
//! Compression reads the bundle back from disk instead of reusing the
//! in-memory buffer, so it can run as a separate step over anything that
//! was published earlier.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tracing::debug;

use crate::common::fs::write_atomic;
use crate::error::{Result, file_read_failed};

/// Suffix appended to a bundle path for its compressed sibling
pub const COMPRESSED_SUFFIX: &str = ".gz";

/// `global-abc.css` -> `global-abc.css.gz`
pub fn compressed_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(COMPRESSED_SUFFIX);
    PathBuf::from(name)
}

/// Write a gzip-compressed copy of `path` next to it
///
/// Returns the compressed path. An existing sibling is left untouched,
/// since bundle paths are content-addressed.
pub fn compress_file(path: &Path) -> Result<PathBuf> {
    let target = compressed_path(path);
    if target.is_file() {
        debug!("{} already exists, skipping compression", target.display());
        return Ok(target);
    }

    let source = File::open(path)
        .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;
    let mut reader = BufReader::new(source);

    write_atomic(&target, |file| {
        let mut encoder = GzEncoder::new(file, Compression::best());
        io::copy(&mut reader, &mut encoder)?;
        encoder.finish()?;
        Ok(())
    })?;

    debug!("Compressed {} -> {}", path.display(), target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FragmentaError;
    use flate2::read::GzDecoder;
    use std::fs;
    use std::io::Read;
    use tempfile::TempDir;

    fn gunzip(path: &Path) -> Vec<u8> {
        let mut decoder = GzDecoder::new(File::open(path).unwrap());
        let mut out = Vec::new();
        decoder.read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_compressed_path_appends_suffix() {
        assert_eq!(
            compressed_path(Path::new("public/assets/styles/global-abc.css")),
            PathBuf::from("public/assets/styles/global-abc.css.gz")
        );
    }

    #[test]
    fn test_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app-abc.js");
        let body = b"\nvar a=1;\nvar b=2;".repeat(100);
        fs::write(&path, &body).unwrap();

        let target = compress_file(&path).unwrap();
        assert_eq!(target, compressed_path(&path));
        assert_eq!(gunzip(&target), body);
    }

    #[test]
    fn test_reads_bundle_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("global-abc.css");
        fs::write(&path, "\nA\nB").unwrap();

        let target = compress_file(&path).unwrap();
        assert_eq!(gunzip(&target), b"\nA\nB");
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = compress_file(&temp.path().join("missing.css"));
        assert!(matches!(result, Err(FragmentaError::FileReadFailed { .. })));
        assert!(!temp.path().join("missing.css.gz").exists());
    }

    #[test]
    fn test_existing_sibling_is_kept() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("global-abc.css");
        fs::write(&path, "\nA").unwrap();
        fs::write(compressed_path(&path), "sentinel").unwrap();

        compress_file(&path).unwrap();
        assert_eq!(fs::read(compressed_path(&path)).unwrap(), b"sentinel");
    }
}
