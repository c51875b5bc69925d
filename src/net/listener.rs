//! TCP listener binding.
//!
//! # Responsibilities
//! - Parse and bind the configured address
//! - Set SO_REUSEADDR so a restart can rebind immediately, even with
//!   connections from the previous generation still in TIME_WAIT
//! - Surface bind failures as typed errors (fatal at startup)

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::{TcpListener, TcpSocket};

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("invalid bind address `{value}`: {source}")]
    InvalidAddress {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to bind: {0}")]
    Bind(std::io::Error),
}

/// A bound TCP listener.
///
/// Rebuilt for every serve generation: the supervisor drops the old listener
/// on reload and binds a new one here.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
    local_addr: SocketAddr,
}

impl Listener {
    /// Bind to the configured address.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let addr: SocketAddr =
            config
                .bind_address
                .parse()
                .map_err(|source| ListenerError::InvalidAddress {
                    value: config.bind_address.clone(),
                    source,
                })?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()
        } else {
            TcpSocket::new_v6()
        }
        .map_err(ListenerError::Bind)?;

        socket.set_reuseaddr(true).map_err(ListenerError::Bind)?;
        socket.bind(addr).map_err(ListenerError::Bind)?;

        let inner = socket.listen(config.backlog).map_err(ListenerError::Bind)?;
        let local_addr = inner.local_addr().map_err(ListenerError::Bind)?;

        tracing::info!(address = %local_addr, "Listener bound");

        Ok(Self { inner, local_addr })
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Consume the wrapper, handing the raw listener to the server.
    pub fn into_inner(self) -> TcpListener {
        self.inner
    }
}
