//! Error types
//!
//! Defines the failure kinds a chat session can end with.

use std::fmt;
use std::io;

/// Every way a chat session can fail or be ended by the peer.
#[derive(Debug)]
pub enum ClientError {
    /// Name resolution produced no usable address.
    HostUnreachable(String),
    /// The transport could not be established.
    ConnectError(String),
    /// The server closed the connection during chat.
    StreamClosed,
    /// The server said `bye` during chat.
    PeerBye,
    /// Reading from the connection failed.
    IoFailure(io::Error),
    /// Waiting for the inbound relay did not complete.
    InterruptedWait(String),
}

impl ClientError {
    /// Peer-driven endings that stop the whole process.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClientError::StreamClosed | ClientError::PeerBye)
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::HostUnreachable(host) => write!(f, "Host unreachable: {}", host),
            ClientError::ConnectError(msg) => write!(f, "Connect failed: {}", msg),
            ClientError::StreamClosed => write!(f, "Server closed the connection"),
            ClientError::PeerBye => write!(f, "Server left the chat"),
            ClientError::IoFailure(e) => write!(f, "I/O error: {}", e),
            ClientError::InterruptedWait(msg) => write!(f, "Interrupted wait: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::IoFailure(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ClientError {
    fn from(error: io::Error) -> Self {
        ClientError::IoFailure(error)
    }
}

impl From<tokio::task::JoinError> for ClientError {
    fn from(error: tokio::task::JoinError) -> Self {
        ClientError::InterruptedWait(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_peer_endings_are_terminal() {
        assert!(ClientError::StreamClosed.is_terminal());
        assert!(ClientError::PeerBye.is_terminal());
        assert!(!ClientError::HostUnreachable("nowhere".into()).is_terminal());
        assert!(!ClientError::ConnectError("refused".into()).is_terminal());
        assert!(!ClientError::InterruptedWait("cancelled".into()).is_terminal());
    }

    #[test]
    fn test_io_error_converts_to_io_failure() {
        let err: ClientError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, ClientError::IoFailure(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
