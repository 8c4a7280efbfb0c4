//! Module `client`
//!
//! Entry operation of the chat client. Connects, runs the greeting phase,
//! then drives the inbound relay (spawned) and the outbound relay (inline)
//! until one side ends the session.

use log::{debug, info, warn};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

use crate::config::ClientConfig;
use crate::console::Console;
use crate::error::ClientError;
use crate::error::handlers::{handle_error, operator_notice};
use crate::session::{
    InboundEnd, LineReader, LivenessFlag, OutboundEnd, SessionOutcome, connect, drain_greeting,
    inbound_relay, outbound_relay,
};

pub const STOPPED_BANNER: &str = "Client stopped.";

/// Runs one chat session against `host:port` on the process console.
///
/// After a [`SessionOutcome::Terminated`] the operator's stdin read may still
/// be parked on the blocking pool, so callers must end the process with
/// `std::process::exit(outcome.exit_code())` rather than returning from the
/// runtime.
pub async fn run_client(host: &str, port: u16) -> SessionOutcome {
    let config = ClientConfig {
        host: host.to_string(),
        port,
        ..ClientConfig::default()
    };
    run_with(&config, Console::stdio(), BufReader::new(tokio::io::stdin())).await
}

/// Runs one chat session reading operator lines from `input`.
///
/// Never fails: errors are reported on `console`. Only a peer-ended chat
/// yields [`SessionOutcome::Terminated`], and in that case the stopped
/// banner is not printed.
pub async fn run_with<I>(config: &ClientConfig, console: Console, input: I) -> SessionOutcome
where
    I: AsyncBufRead + Unpin,
{
    let result = match connect(&config.host, config.port).await {
        Ok(stream) => {
            let _ = console
                .line(&format!("Connected to {}", config.endpoint()))
                .await;
            run_session(stream, config.shutdown_grace(), &console, input).await
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => {}
        Err(err) if err.is_terminal() => {
            info!("Session terminated by peer: {}", err);
            return SessionOutcome::Terminated(err);
        }
        Err(err) => {
            handle_error(&err);
            let _ = console.notice(&operator_notice(&err)).await;
        }
    }

    let _ = console.line(STOPPED_BANNER).await;
    SessionOutcome::Stopped
}

async fn run_session<I>(
    stream: TcpStream,
    grace: Duration,
    console: &Console,
    input: I,
) -> Result<(), ClientError>
where
    I: AsyncBufRead + Unpin,
{
    let (read_half, mut write_half) = stream.into_split();
    let mut server_lines = LineReader::new(BufReader::new(read_half));

    drain_greeting(&mut server_lines, console)
        .await
        .map_err(|e| ClientError::ConnectError(e.to_string()))?;

    let flag = LivenessFlag::new();
    let mut inbound = tokio::spawn(inbound_relay(server_lines, console.clone(), flag.clone()));

    let mut console_lines = LineReader::new(input);
    let mut outbound = Box::pin(outbound_relay(
        &mut console_lines,
        &mut write_half,
        console,
        &flag,
    ));

    let (sent, inbound_done) = tokio::select! {
        joined = &mut inbound => {
            if let InboundEnd::Terminated(err) = joined? {
                return Err(err);
            }
            debug!("Inbound relay stopped; continuing outbound only");
            (outbound.as_mut().await, true)
        }
        sent = &mut outbound => (sent, false),
    };
    drop(outbound);

    let end = match sent {
        Ok(end) => end,
        Err(e) => {
            flag.deactivate();
            if !inbound_done {
                inbound.abort();
                let _ = inbound.await;
            }
            return Err(ClientError::ConnectError(e.to_string()));
        }
    };
    debug!("Outbound relay ended: {:?}", end);

    if inbound_done {
        return Ok(());
    }

    match end {
        OutboundEnd::LocalBye => {
            let _ = write_half.shutdown().await;
            join_inbound(inbound, Some(grace)).await
        }
        OutboundEnd::InputClosed | OutboundEnd::Halted => join_inbound(inbound, None).await,
    }
}

/// Waits for the inbound relay to finish, aborting it once `grace` lapses.
async fn join_inbound(
    mut inbound: JoinHandle<InboundEnd>,
    grace: Option<Duration>,
) -> Result<(), ClientError> {
    let joined = match grace {
        Some(grace) => match tokio::time::timeout(grace, &mut inbound).await {
            Ok(joined) => joined,
            Err(_) => {
                warn!("Inbound relay still running after {:?}; aborting", grace);
                inbound.abort();
                match inbound.await {
                    Err(e) if e.is_cancelled() => return Ok(()),
                    other => other,
                }
            }
        },
        None => inbound.await,
    };

    match joined? {
        InboundEnd::Terminated(err) => Err(err),
        InboundEnd::Lost(_) | InboundEnd::Halted => Ok(()),
    }
}
