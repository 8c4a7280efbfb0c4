//! Outbound relay
//!
//! Foreground loop moving operator lines to the server. This is the only
//! path that ends a session gracefully.

use log::{debug, info};
use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

use crate::console::Console;
use crate::session::lines::LineReader;
use crate::session::shutdown::LivenessFlag;
use crate::session::{SENTINEL, is_sentinel};

pub const LEFT_NOTICE: &str = "[You left the chat]";

/// Why the outbound relay stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutboundEnd {
    /// Operator typed `bye`; the flag has been cleared.
    LocalBye,
    /// Console input reached end-of-stream.
    InputClosed,
    /// The flag was cleared by the inbound relay.
    Halted,
}

/// Sends each console line to the server exactly as typed, until `bye`,
/// console end-of-stream, or the flag clears.
pub async fn outbound_relay<R, W>(
    input: &mut LineReader<R>,
    writer: &mut W,
    console: &Console,
    flag: &LivenessFlag,
) -> io::Result<OutboundEnd>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.prompt().await?;

    while flag.is_active() {
        let Some(line) = input.next_line().await? else {
            debug!("Console input closed");
            return Ok(OutboundEnd::InputClosed);
        };

        if is_sentinel(&line) {
            // Flag must be false before the server can react to `bye`.
            flag.deactivate();
            send_line(writer, SENTINEL).await?;
            console.line(LEFT_NOTICE).await?;
            info!("Operator left the chat");
            return Ok(OutboundEnd::LocalBye);
        }

        send_line(writer, &line).await?;
        console.prompt().await?;
    }

    Ok(OutboundEnd::Halted)
}

async fn send_line<W>(writer: &mut W, line: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    async fn run(input: &'static [u8], flag: &LivenessFlag) -> (OutboundEnd, String, String) {
        let mut lines = LineReader::new(input);
        let mut wire = Vec::new();
        let (out, mut out_rx) = tokio::io::duplex(64 * 1024);
        let console = Console::new(out, tokio::io::sink());

        let end = outbound_relay(&mut lines, &mut wire, &console, flag)
            .await
            .unwrap();
        drop(console);

        let mut stdout = String::new();
        out_rx.read_to_string(&mut stdout).await.unwrap();
        (end, String::from_utf8(wire).unwrap(), stdout)
    }

    #[tokio::test]
    async fn test_lines_sent_untrimmed_and_in_order() {
        let flag = LivenessFlag::new();
        let (end, wire, stdout) = run(b"hello\n  spaced out  \n\nlast\n", &flag).await;

        assert_eq!(end, OutboundEnd::InputClosed);
        assert_eq!(wire, "hello\n  spaced out  \n\nlast\n");
        assert_eq!(stdout, "You: ".repeat(5));
        assert!(flag.is_active());
    }

    #[tokio::test]
    async fn test_bye_sends_sentinel_and_stops() {
        let flag = LivenessFlag::new();
        let (end, wire, stdout) = run(b"hi\n  BYE  \nnot sent\n", &flag).await;

        assert_eq!(end, OutboundEnd::LocalBye);
        assert_eq!(wire, "hi\nbye\n");
        assert!(stdout.ends_with("[You left the chat]\n"));
        assert!(!flag.is_active());
    }

    #[tokio::test]
    async fn test_bye_inside_a_sentence_is_sent() {
        let flag = LivenessFlag::new();
        let (end, wire, _) = run(b"goodbye all\n", &flag).await;

        assert_eq!(end, OutboundEnd::InputClosed);
        assert_eq!(wire, "goodbye all\n");
    }

    #[tokio::test]
    async fn test_cleared_flag_sends_nothing() {
        let flag = LivenessFlag::new();
        flag.deactivate();
        let (end, wire, _) = run(b"hello\n", &flag).await;

        assert_eq!(end, OutboundEnd::Halted);
        assert!(wire.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_utf8_console_line_is_sent_lossily() {
        let flag = LivenessFlag::new();
        let (end, wire, _) = run(b"na\xefve\nnext\n", &flag).await;

        assert_eq!(end, OutboundEnd::InputClosed);
        assert_eq!(wire, "na\u{FFFD}ve\nnext\n");
        assert!(flag.is_active());
    }
}
