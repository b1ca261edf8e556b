//! BLAKE3 hashing utilities for content-addressed bundles

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;

use crate::error::{Result, file_read_failed};

/// Length of a hex-encoded BLAKE3 digest
pub const HASH_HEX_LEN: usize = 64;

/// Calculate the BLAKE3 hash of an in-memory buffer as lowercase hex
pub fn hash_bytes(content: &[u8]) -> String {
    blake3::hash(content).to_hex().to_string()
}

/// Calculate the BLAKE3 hash of a file as lowercase hex
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path)
        .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;

    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize().to_hex().to_string())
}

/// Check whether a string looks like a digest produced by [`hash_bytes`]
///
/// Only lowercase hex is accepted, so `.gz` siblings and hand-named files
/// in the output directory are never mistaken for bundles.
pub fn is_hex_digest(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
