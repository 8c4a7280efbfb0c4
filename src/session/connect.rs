//! Connection establishment
//!
//! Resolves the server name and opens the single chat connection. No retries.

use log::{debug, info};
use tokio::net::{TcpStream, lookup_host};

use crate::error::ClientError;

/// Resolves `host` and connects to the first address that accepts.
///
/// Resolution failure, or a name with no addresses, is `HostUnreachable`;
/// everything after that is `ConnectError`.
pub async fn connect(host: &str, port: u16) -> Result<TcpStream, ClientError> {
    let addrs: Vec<_> = match lookup_host((host, port)).await {
        Ok(addrs) => addrs.collect(),
        Err(e) => {
            debug!("Resolving {} failed: {}", host, e);
            return Err(ClientError::HostUnreachable(host.to_string()));
        }
    };

    if addrs.is_empty() {
        return Err(ClientError::HostUnreachable(host.to_string()));
    }

    debug!("Resolved {} to {:?}", host, addrs);

    let stream = TcpStream::connect(&addrs[..])
        .await
        .map_err(|e| ClientError::ConnectError(e.to_string()))?;

    info!("Connected to {}:{} via {:?}", host, port, stream.peer_addr().ok());
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_connect_to_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let stream = connect("127.0.0.1", port).await.unwrap();
        let (_, peer) = listener.accept().await.unwrap();
        assert_eq!(stream.local_addr().unwrap(), peer);
    }

    #[tokio::test]
    async fn test_unresolvable_host() {
        let result = connect("no-such-host.invalid", 12345).await;
        assert!(matches!(result, Err(ClientError::HostUnreachable(h)) if h == "no-such-host.invalid"));
    }

    #[tokio::test]
    async fn test_refused_connection() {
        // Bind then drop to find a port with nothing listening.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };

        let result = connect("127.0.0.1", port).await;
        assert!(matches!(result, Err(ClientError::ConnectError(_))));
    }
}
