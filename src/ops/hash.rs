use std::fs::File;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::command::CommandError;
use crate::ops::fs::ensure_exists;

/// Streams the file through a SHA-256 hasher and returns the digest as a
/// lowercase hex string.
pub fn digest_file(path: &Path) -> Result<String, CommandError> {
    ensure_exists(path)?;
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;

    let digest = hasher.finalize();
    Ok(digest.iter().map(|byte| format!("{:02x}", byte)).collect())
}
