//! Application state and composition.

use std::sync::Arc;

use snakeladder_domain::Board;

use crate::api::connections::ConnectionManager;
use crate::infrastructure::{config::EngineConfig, ports::RandomPort};
use crate::stores::GameStore;
use crate::use_cases::GameSession;

/// Main application state.
///
/// Built once at startup and passed to HTTP/WebSocket handlers via Axum state.
pub struct App {
    pub session: GameSession,
    /// Outbound queue length for each new realtime observer.
    pub observer_buffer: usize,
}

impl App {
    pub fn new(config: &EngineConfig, random: Arc<dyn RandomPort>) -> Self {
        let board = Board::standard();
        tracing::debug!(
            snakes = board.snakes().count(),
            ladders = board.ladders().count(),
            "Board topology loaded"
        );
        let store = Arc::new(GameStore::new(board));
        let connections = Arc::new(ConnectionManager::new());
        let session = GameSession::new(store, connections, random, config.player_names.clone());

        Self {
            session,
            observer_buffer: config.observer_buffer,
        }
    }
}
