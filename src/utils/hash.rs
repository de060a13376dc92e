use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::Path;

pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// SHA-256 of a file's contents, as lowercase hex.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let data = fs::read(path)?;
    Ok(hash_bytes(&data))
}
