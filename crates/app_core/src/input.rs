//! Line-oriented input adapter

use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Reads one command line at a time.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// stray byte becomes an unknown command instead of ending the session.
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Next line without its terminator, or `None` at end of input.
    ///
    /// Cancel safe: bytes read before a cancelled call stay buffered and are
    /// returned by the next call.
    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        let read = self.reader.read_until(b'\n', &mut self.buf).await?;
        if read == 0 && self.buf.is_empty() {
            return Ok(None);
        }

        let mut bytes = std::mem::take(&mut self.buf);
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }

        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lines_and_eof() {
        let mut reader = LineReader::new(&b"ls\r\ncd docs\nup"[..]);

        assert_eq!(reader.next_line().await.unwrap().as_deref(), Some("ls"));
        assert_eq!(reader.next_line().await.unwrap().as_deref(), Some("cd docs"));
        assert_eq!(reader.next_line().await.unwrap().as_deref(), Some("up"));
        assert_eq!(reader.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalid_utf8_does_not_end_input() {
        let mut reader = LineReader::new(&b"ls\n\xff\nup\n"[..]);

        assert_eq!(reader.next_line().await.unwrap().as_deref(), Some("ls"));
        assert_eq!(reader.next_line().await.unwrap().as_deref(), Some("\u{fffd}"));
        assert_eq!(reader.next_line().await.unwrap().as_deref(), Some("up"));
        assert_eq!(reader.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_blank_line_is_not_eof() {
        let mut reader = LineReader::new(&b"\n"[..]);
        assert_eq!(reader.next_line().await.unwrap().as_deref(), Some(""));
        assert_eq!(reader.next_line().await.unwrap(), None);
    }
}
