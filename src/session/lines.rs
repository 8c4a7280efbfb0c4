//! Line reader shared by the greeting phase and both relays
//!
//! Splits on `\n` (dropping a trailing `\r`) and decodes lossily, so a stray
//! non-UTF-8 byte becomes U+FFFD instead of an I/O error.

use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R> LineReader<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Next line without its terminator, or `None` at end-of-stream.
    ///
    /// Cancel safe: bytes read before a cancelled call stay buffered.
    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        let n = self.reader.read_until(b'\n', &mut self.buf).await?;
        if n == 0 && self.buf.is_empty() {
            return Ok(None);
        }

        let mut line = std::mem::take(&mut self.buf);
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }

        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}
