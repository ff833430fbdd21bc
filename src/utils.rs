//! Utility functions for file name generation and file system checks.

use rand::{rng, Rng};
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Generate a 32-character lowercase hex token.
///
/// Used as a collision-resistant opaque file name for downloaded images.
///
/// # Examples
///
/// ```ignore
/// let token = random_hex_token();
/// assert_eq!(token.len(), 32);
/// ```
pub fn random_hex_token() -> String {
    let mut r = rng();
    (0..16).map(|_| format!("{:02x}", r.random::<u8>())).collect()
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable
/// (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Image directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_hex_token_shape() {
        let token = random_hex_token();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!token.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_random_hex_tokens_differ() {
        let a = random_hex_token();
        let b = random_hex_token();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_missing_dir() {
        let base = tempfile::tempdir().unwrap();
        let nested = base.path().join("images").to_str().unwrap().to_string();
        ensure_writable_dir(&nested).await.unwrap();
        assert!(std::path::Path::new(&nested).is_dir());
    }
}
