//! Brotli compression and decompression

use crate::{FsError, Result};
use async_compression::tokio::bufread::{BrotliDecoder, BrotliEncoder};
use async_compression::Level;
use std::path::Path;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

/// Quality used when none is configured
pub const DEFAULT_QUALITY: u32 = 9;

/// Highest quality Brotli accepts
pub const MAX_QUALITY: u32 = 11;

/// Open `dest` for writing, failing if it already exists
async fn create_exclusive(dest: &Path) -> Result<File> {
    Ok(OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .await?)
}

async fn finish<W: AsyncWrite + Unpin>(writer: &mut W) -> Result<()> {
    writer.flush().await?;
    writer.shutdown().await?;
    Ok(())
}

/// Stream `reader` into a new file at `dest`.
///
/// `dest` must not exist yet. If streaming fails after it was created the
/// partial file is removed, so a failed call leaves nothing behind.
async fn write_exclusive<R: AsyncRead + Unpin>(reader: &mut R, dest: &Path) -> Result<u64> {
    let mut writer = create_exclusive(dest).await?;

    let result = async {
        let written = tokio::io::copy(reader, &mut writer).await?;
        finish(&mut writer).await?;
        Ok::<_, FsError>(written)
    }
    .await;

    if result.is_err() {
        drop(writer);
        discard_partial(dest).await;
    }
    result
}

async fn discard_partial(dest: &Path) {
    if let Err(e) = tokio::fs::remove_file(dest).await {
        tracing::warn!("Failed to remove partial output {}: {}", dest.display(), e);
    }
}

/// Compress `source` into a new file at `dest`
pub async fn compress_file(source: &Path, dest: &Path, quality: u32) -> Result<u64> {
    let reader = BufReader::new(File::open(source).await?);

    let quality = quality.min(MAX_QUALITY) as i32;
    let mut encoder = BrotliEncoder::with_quality(reader, Level::Precise(quality));
    let written = write_exclusive(&mut encoder, dest).await?;

    tracing::info!(
        "Compressed {} -> {} ({} bytes, quality {})",
        source.display(),
        dest.display(),
        written,
        quality
    );
    Ok(written)
}

/// Decompress Brotli data from `source` into a new file at `dest`
pub async fn decompress_file(source: &Path, dest: &Path) -> Result<u64> {
    let reader = BufReader::new(File::open(source).await?);

    let mut decoder = BrotliDecoder::new(reader);
    let written = write_exclusive(&mut decoder, dest).await?;

    tracing::info!(
        "Decompressed {} -> {} ({} bytes)",
        source.display(),
        dest.display(),
        written
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.txt");
        let packed = dir.path().join("source.txt.br");
        let unpacked = dir.path().join("restored.txt");
        let data = "the quick brown fox jumps over the lazy dog\n".repeat(500);
        fs::write(&source, &data).unwrap();

        compress_file(&source, &packed, DEFAULT_QUALITY).await.unwrap();
        assert!(fs::metadata(&packed).unwrap().len() < data.len() as u64);

        decompress_file(&packed, &unpacked).await.unwrap();
        assert_eq!(fs::read(&unpacked).unwrap(), data.as_bytes());
    }

    #[tokio::test]
    async fn test_refuses_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.txt");
        let dest = dir.path().join("dest.br");
        fs::write(&source, b"data").unwrap();
        fs::write(&dest, b"keep me").unwrap();

        assert!(compress_file(&source, &dest, DEFAULT_QUALITY).await.is_err());
        assert_eq!(fs::read(&dest).unwrap(), b"keep me");
    }

    #[tokio::test]
    async fn test_missing_source_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.br");

        assert!(compress_file(&dir.path().join("nope.txt"), &dest, DEFAULT_QUALITY)
            .await
            .is_err());
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_truncated_input_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.txt");
        let packed = dir.path().join("source.txt.br");
        let unpacked = dir.path().join("restored.txt");
        let data: String = (0..20_000).map(|i| format!("line {} of {}\n", i, i * 7919 % 104_729)).collect();
        fs::write(&source, &data).unwrap();

        compress_file(&source, &packed, DEFAULT_QUALITY).await.unwrap();
        let bytes = fs::read(&packed).unwrap();
        fs::write(&packed, &bytes[..bytes.len() / 2]).unwrap();

        assert!(decompress_file(&packed, &unpacked).await.is_err());
        assert!(!unpacked.exists());
    }

    #[tokio::test]
    async fn test_failed_stream_removes_partial_file() {
        struct Broken;

        impl AsyncRead for Broken {
            fn poll_read(
                self: std::pin::Pin<&mut Self>,
                _cx: &mut std::task::Context<'_>,
                _buf: &mut tokio::io::ReadBuf<'_>,
            ) -> std::task::Poll<std::io::Result<()>> {
                std::task::Poll::Ready(Err(std::io::Error::other("read failed")))
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.br");

        assert!(write_exclusive(&mut Broken, &dest).await.is_err());
        assert!(!dest.exists());
    }
}
