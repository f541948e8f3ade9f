//! Connection management for realtime observers.
//!
//! Tracks connected WebSocket clients and fans game updates out to them.
//! Delivery is best-effort: a slow or dead observer never blocks a caller.

use std::collections::HashMap;
use tokio::sync::{
    mpsc::{self, error::TrySendError},
    RwLock,
};
use uuid::Uuid;

use snakeladder_shared::ServerMessage;

/// Manages all active WebSocket connections.
pub struct ConnectionManager {
    /// Map of connection_id -> sender channel
    connections: RwLock<HashMap<Uuid, mpsc::Sender<ServerMessage>>>,
}

impl ConnectionManager {
    /// Create a new connection manager.
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new connection.
    pub async fn register(
        &self,
        connection_id: Uuid,
        sender: mpsc::Sender<ServerMessage>,
    ) -> Result<(), ConnectionError> {
        let mut connections = self.connections.write().await;
        if connections.contains_key(&connection_id) {
            return Err(ConnectionError::AlreadyRegistered);
        }
        connections.insert(connection_id, sender);
        tracing::debug!(
            connection_id = %connection_id,
            observers = connections.len(),
            "Connection registered"
        );
        Ok(())
    }

    /// Unregister a connection.
    pub async fn unregister(&self, connection_id: Uuid) {
        let mut connections = self.connections.write().await;
        if connections.remove(&connection_id).is_some() {
            tracing::debug!(
                connection_id = %connection_id,
                observers = connections.len(),
                "Connection unregistered"
            );
        }
    }

    /// Number of registered connections.
    pub async fn count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Broadcast a message to every connection.
    ///
    /// Returns how many observers accepted the message. Connections whose
    /// receiver is gone are dropped from the registry. A message dropped on a
    /// full queue is not retried; every push is a full snapshot, so the next
    /// one brings that observer current.
    pub async fn broadcast_all(&self, message: ServerMessage) -> usize {
        let mut delivered = 0;
        let mut closed = Vec::new();
        {
            let connections = self.connections.read().await;
            for (connection_id, sender) in connections.iter() {
                match sender.try_send(message.clone()) {
                    Ok(()) => delivered += 1,
                    Err(TrySendError::Full(_)) => {
                        tracing::warn!(
                            connection_id = %connection_id,
                            "Failed to broadcast message, channel full"
                        );
                    }
                    Err(TrySendError::Closed(_)) => closed.push(*connection_id),
                }
            }
        }

        if !closed.is_empty() {
            let mut connections = self.connections.write().await;
            for connection_id in &closed {
                connections.remove(connection_id);
                tracing::debug!(connection_id = %connection_id, "Pruned closed connection");
            }
        }

        delivered
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during connection operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    #[error("Connection already registered")]
    AlreadyRegistered,
}
