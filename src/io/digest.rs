//! Content hashing, used to skip rewriting unchanged outputs.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

/// Computes SHA256 hash of a string, returning hex-encoded digest.
pub fn hexdigest_str(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Computes SHA256 hash of a file, returning hex-encoded digest.
pub fn hexdigest_file(path: &Path) -> io::Result<String> {
    let mut file = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Returns true if `path` exists and holds exactly `content`.
pub fn same_content(path: &Path, content: &str) -> bool {
    if !path.is_file() {
        return false;
    }
    match hexdigest_file(path) {
        Ok(digest) => digest == hexdigest_str(content),
        Err(e) => {
            tracing::debug!("Could not hash {}: {}", path.display(), e);
            false
        }
    }
}
