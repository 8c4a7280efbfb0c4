//! Error handlers
//!
//! Converts client errors into operator notices and process exit codes.

use crate::error::types::ClientError;
use log::error;

/// Text shown to the operator when a session ends with `err`.
pub fn operator_notice(err: &ClientError) -> String {
    match err {
        ClientError::HostUnreachable(host) => format!("Server not found: {}", host),
        ClientError::ConnectError(msg) => format!("Connection error: {}", msg),
        ClientError::InterruptedWait(msg) => format!("Connection error: {}", msg),
        ClientError::StreamClosed => "\n[Server closed the connection]".to_string(),
        ClientError::PeerBye => "\n[Server left the chat]".to_string(),
        ClientError::IoFailure(_) => "\n[Connection lost]".to_string(),
    }
}

/// Log a session-ending error
pub fn handle_error(err: &ClientError) {
    error!("Chat client error: {}", err);
}

/// Convert error to process exit status
pub fn error_to_exit_code(err: &ClientError) -> i32 {
    match err {
        ClientError::StreamClosed => 1,
        ClientError::PeerBye => 1,
        ClientError::HostUnreachable(_) => 0,
        ClientError::ConnectError(_) => 0,
        ClientError::IoFailure(_) => 0,
        ClientError::InterruptedWait(_) => 0,
    }
}
