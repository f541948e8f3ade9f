//! WebSocket message types for engine ↔ display-client communication
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Renaming variants is a breaking change
//! - Unknown client message types deserialize to `Unknown`

use serde::{Deserialize, Serialize};

use crate::snapshot::GameSnapshot;

/// Event name display clients subscribe to.
pub const GAME_UPDATED_EVENT: &str = "gameUpdated";

// =============================================================================
// Client Messages (display client → engine)
// =============================================================================

/// Messages from a connected observer. Observers never mutate the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Keep-alive; answered with `ServerMessage::Pong`.
    Heartbeat,
    /// Unknown message type for forward compatibility
    #[serde(other)]
    Unknown,
}

// =============================================================================
// Server Messages (engine → display client)
// =============================================================================

/// Messages pushed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ServerMessage {
    /// Full game snapshot; sent on connect and after every roll or reset.
    GameUpdated(GameSnapshot),
    Pong,
    Error { code: String, message: String },
}

impl ServerMessage {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            message: message.into(),
        }
    }
}
