//! Output sinks for status lines, errors, and raw file bytes

use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Where command output goes.
///
/// `out` receives status lines and raw file contents, `err` receives the
/// one-line error messages.
pub struct Console<O, E> {
    out: O,
    err: E,
}

/// Console bound to the process's stdout and stderr
pub type StdConsole = Console<tokio::io::Stdout, tokio::io::Stderr>;

impl StdConsole {
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdout(), tokio::io::stderr())
    }
}

impl<O, E> Console<O, E>
where
    O: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Write one line of text
    pub async fn line(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await
    }

    /// Write one line to the error sink
    pub async fn error(&mut self, text: &str) -> io::Result<()> {
        self.err.write_all(text.as_bytes()).await?;
        self.err.write_all(b"\n").await?;
        self.err.flush().await
    }

    /// Byte sink for streaming file contents verbatim
    pub fn raw(&mut self) -> &mut O {
        &mut self.out
    }
}

/// Console writing into memory, for driving the dispatcher in tests
#[cfg(test)]
pub type BufferConsole = Console<Vec<u8>, Vec<u8>>;

#[cfg(test)]
impl BufferConsole {
    pub fn buffered() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.out).to_string()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.err).to_string()
    }

    pub fn clear(&mut self) {
        self.out.clear();
        self.err.clear();
    }
}
