//! Greeting phase
//!
//! Echoes whatever the server sends on connect until it invites the operator
//! to chat.

use log::debug;
use std::io;
use tokio::io::AsyncBufRead;

use crate::console::Console;
use crate::session::lines::LineReader;

/// Substring marking the last greeting line.
pub const GREETING_END_MARKER: &str = "Type 'bye'";

/// Prints server lines verbatim up to and including the one containing
/// [`GREETING_END_MARKER`]. End-of-stream ends the phase without error.
pub async fn drain_greeting<R>(lines: &mut LineReader<R>, console: &Console) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    while let Some(line) = lines.next_line().await? {
        console.line(&line).await?;
        if line.contains(GREETING_END_MARKER) {
            debug!("Greeting complete");
            return Ok(());
        }
    }

    debug!("Server closed before sending a chat prompt");
    Ok(())
}
