//! Module `console`
//!
//! Shared operator console used by both relays. Each stream sits behind its
//! own async mutex so a line from one relay is never split by the other.

use std::io;
use std::sync::Arc;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

pub const PROMPT: &str = "You: ";

const CLEAR_WIDTH: usize = 60;

type Sink = Box<dyn AsyncWrite + Send + Unpin>;

/// Cloneable handle over the console's output and error streams.
#[derive(Clone)]
pub struct Console {
    out: Arc<Mutex<Sink>>,
    err: Arc<Mutex<Sink>>,
}

impl Console {
    pub fn new<O, E>(out: O, err: E) -> Self
    where
        O: AsyncWrite + Send + Unpin + 'static,
        E: AsyncWrite + Send + Unpin + 'static,
    {
        Self {
            out: Arc::new(Mutex::new(Box::new(out))),
            err: Arc::new(Mutex::new(Box::new(err))),
        }
    }

    /// Console bound to the process's stdout and stderr.
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdout(), tokio::io::stderr())
    }

    /// Writes the input prompt without a line break.
    pub async fn prompt(&self) -> io::Result<()> {
        write_flush(&self.out, PROMPT).await
    }

    /// Overwrites the current console line with blanks, leaving the cursor at column 0.
    pub async fn clear_line(&self) -> io::Result<()> {
        let blank = format!("\r{}\r", " ".repeat(CLEAR_WIDTH));
        write_flush(&self.out, &blank).await
    }

    pub async fn line(&self, text: &str) -> io::Result<()> {
        write_flush(&self.out, &format!("{}\n", text)).await
    }

    /// Writes a line to the error stream.
    pub async fn notice(&self, text: &str) -> io::Result<()> {
        write_flush(&self.err, &format!("{}\n", text)).await
    }
}

async fn write_flush(sink: &Mutex<Sink>, text: &str) -> io::Result<()> {
    let mut sink = sink.lock().await;
    sink.write_all(text.as_bytes()).await?;
    sink.flush().await
}
