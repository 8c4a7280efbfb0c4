//! Inbound relay
//!
//! Background task moving server lines onto the console.

use log::{debug, warn};
use std::io;
use tokio::io::AsyncBufRead;

use crate::console::Console;
use crate::error::ClientError;
use crate::error::handlers::operator_notice;
use crate::session::is_sentinel;
use crate::session::lines::LineReader;
use crate::session::shutdown::LivenessFlag;

/// Why the inbound relay stopped.
#[derive(Debug)]
pub enum InboundEnd {
    /// Peer closed the stream or said `bye`; the whole session must end now.
    Terminated(ClientError),
    /// Reading failed while the session was live. Outbound keeps running.
    Lost(ClientError),
    /// The flag was already cleared by someone else.
    Halted,
}

/// Reads server lines until the flag clears or the peer ends the chat.
///
/// Each ordinary line replaces the pending prompt with `Server: <line>` and
/// redraws the prompt.
pub async fn inbound_relay<R>(mut lines: LineReader<R>, console: Console, flag: LivenessFlag) -> InboundEnd
where
    R: AsyncBufRead + Unpin,
{
    loop {
        if !flag.is_active() {
            return InboundEnd::Halted;
        }

        let read = lines.next_line().await;

        if !flag.is_active() {
            debug!("Inbound relay woke after session ended");
            return InboundEnd::Halted;
        }

        let result = match read {
            Ok(None) => return terminate(ClientError::StreamClosed, &console, &flag).await,
            Ok(Some(line)) if is_sentinel(&line) => {
                return terminate(ClientError::PeerBye, &console, &flag).await;
            }
            Ok(Some(line)) => render(&line, &console).await,
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            warn!("Inbound relay failed: {}", e);
            if flag.deactivate() {
                let err = ClientError::IoFailure(e);
                let _ = console.notice(&operator_notice(&err)).await;
                return InboundEnd::Lost(err);
            }
            return InboundEnd::Halted;
        }
    }
}

async fn render(line: &str, console: &Console) -> io::Result<()> {
    console.clear_line().await?;
    console.line(&format!("Server: {}", line)).await?;
    console.prompt().await
}

async fn terminate(err: ClientError, console: &Console, flag: &LivenessFlag) -> InboundEnd {
    debug!("Inbound relay ending session: {}", err);
    let _ = console.line(&operator_notice(&err)).await;
    flag.deactivate();
    InboundEnd::Terminated(err)
}
