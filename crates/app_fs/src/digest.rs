//! Streaming SHA-256 digest

use crate::Result;
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

const BUFFER_SIZE: usize = 64 * 1024;

/// Hash a file's contents in fixed-size chunks, returning the lowercase hex digest
pub async fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).await?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = file.read(&mut buffer).await?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
        total_bytes += bytes_read as u64;
    }

    let digest = format!("{:x}", hasher.finalize());
    tracing::debug!("Hashed {} bytes of {}", total_bytes, path.display());
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_known_digest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abc.txt");
        fs::write(&path, b"abc").unwrap();

        assert_eq!(
            sha256_file(&path).await.unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[tokio::test]
    async fn test_deterministic_and_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let mut data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        fs::write(&path, &data).unwrap();

        let first = sha256_file(&path).await.unwrap();
        let second = sha256_file(&path).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);

        data[123_456] ^= 1;
        fs::write(&path, &data).unwrap();
        assert_ne!(sha256_file(&path).await.unwrap(), first);
    }
}
