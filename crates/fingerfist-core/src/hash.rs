//! Content hashing for byte-identity checks across runs

use crate::error::{FingerfistError, Result};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;

/// A SHA-256 digest of a generated file's bytes.
///
/// Generated files are not kept in memory after they are written; their hash
/// is what a run reports, and what a second run is compared against.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Compute a hash from bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Hash a file on disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| FingerfistError::filesystem(path, e))?;
        Ok(Self::from_bytes(&data))
    }

    /// Lowercase hex digest
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Hex digest with algorithm prefix, e.g. `sha256:ab12...`
    pub fn to_prefixed_hex(&self) -> String {
        format!("sha256:{}", self.to_hex())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistent_hashing() {
        let h1 = ContentHash::from_bytes(b"# OGG Placeholder\n");
        let h2 = ContentHash::from_bytes(b"# OGG Placeholder\n");
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_different_content_different_hash() {
        let h1 = ContentHash::from_bytes(b"P3\n1 1\n255\n0 0 0\n");
        let h2 = ContentHash::from_bytes(b"P3\n1 1\n255\n0 0 1\n");
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_empty_input_digest() {
        // Zero-byte exclusion markers hash to the well-known empty digest
        let h = ContentHash::from_bytes(b"");
        assert_eq!(
            h.to_prefixed_hex(),
            "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_from_file_matches_bytes() {
        let path = std::env::temp_dir().join(format!(
            "fingerfist_hash_test_{}.txt",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&path, b"hello").unwrap();

        let from_file = ContentHash::from_file(&path).unwrap();
        assert_eq!(from_file, ContentHash::from_bytes(b"hello"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_file_missing_is_filesystem_error() {
        let path = std::env::temp_dir().join(format!(
            "fingerfist_hash_missing_{}",
            uuid::Uuid::new_v4()
        ));
        let err = ContentHash::from_file(&path).unwrap_err();
        assert!(matches!(err, FingerfistError::FilesystemError { .. }));
    }
}
