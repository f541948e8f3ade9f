//! Game session use cases.
//!
//! Bridges the game store to the outside world: request/response access for
//! HTTP handlers and fan-out of every change to realtime observers.

use std::sync::Arc;

use snakeladder_domain::{Redirect, RollOutcome};
use snakeladder_shared::{GameSnapshot, PlayerNames, ServerMessage};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::api::connections::{ConnectionError, ConnectionManager};
use crate::infrastructure::ports::RandomPort;
use crate::stores::GameStore;

/// Gateway between callers, the game store and connected observers.
pub struct GameSession {
    store: Arc<GameStore>,
    connections: Arc<ConnectionManager>,
    random: Arc<dyn RandomPort>,
    names: PlayerNames,
}

impl GameSession {
    pub fn new(
        store: Arc<GameStore>,
        connections: Arc<ConnectionManager>,
        random: Arc<dyn RandomPort>,
        names: PlayerNames,
    ) -> Self {
        Self {
            store,
            connections,
            random,
            names,
        }
    }

    /// Current snapshot. No side effects.
    pub async fn get_state(&self) -> GameSnapshot {
        let state = self.store.snapshot().await;
        GameSnapshot::from_state(&state, &self.names)
    }

    /// Roll for the player to move and publish the result.
    ///
    /// The store stays locked until every observer has been offered the new
    /// snapshot, so broadcasts go out in transition order and the returned
    /// value is exactly what was broadcast.
    pub async fn roll(&self) -> GameSnapshot {
        let mut game = self.store.lock().await;
        let outcome = game.roll(self.random.as_ref());
        log_outcome(&outcome);
        if let Some(winner) = game.state().winner() {
            if outcome != RollOutcome::Ignored {
                tracing::info!(winner = %self.names.name_of(winner), "Game won");
            }
        }
        let snapshot = GameSnapshot::from_state(game.state(), &self.names);
        self.publish(&snapshot).await;
        snapshot
    }

    /// Start over and publish the fresh record.
    pub async fn reset(&self) -> GameSnapshot {
        let mut game = self.store.lock().await;
        game.reset();
        tracing::info!("Game reset");
        let snapshot = GameSnapshot::from_state(game.state(), &self.names);
        self.publish(&snapshot).await;
        snapshot
    }

    /// Register an observer and queue the current snapshot for it.
    ///
    /// Registration and the initial send happen under the store lock, so no
    /// transition can slip between the two.
    pub async fn observer_connect(
        &self,
        connection_id: Uuid,
        sender: mpsc::Sender<ServerMessage>,
    ) -> Result<GameSnapshot, ConnectionError> {
        let game = self.store.lock().await;
        let snapshot = GameSnapshot::from_state(game.state(), &self.names);
        self.connections
            .register(connection_id, sender.clone())
            .await?;
        if let Err(e) = sender.try_send(ServerMessage::GameUpdated(snapshot.clone())) {
            tracing::warn!(
                connection_id = %connection_id,
                error = %e,
                "Failed to send initial snapshot"
            );
        }
        Ok(snapshot)
    }

    pub async fn observer_disconnect(&self, connection_id: Uuid) {
        self.connections.unregister(connection_id).await;
    }

    pub async fn observer_count(&self) -> usize {
        self.connections.count().await
    }

    async fn publish(&self, snapshot: &GameSnapshot) {
        let delivered = self
            .connections
            .broadcast_all(ServerMessage::GameUpdated(snapshot.clone()))
            .await;
        tracing::debug!(observers = delivered, "Broadcast gameUpdated");
    }
}

fn log_outcome(outcome: &RollOutcome) {
    match outcome {
        RollOutcome::Ignored => {
            tracing::debug!("Roll ignored, game already won");
        }
        RollOutcome::Forfeited {
            player,
            roll,
            position,
        } => {
            tracing::info!(
                player = %player,
                roll = %roll,
                position,
                "Roll overshoots the last cell, move forfeited"
            );
        }
        RollOutcome::Moved {
            player,
            roll,
            from,
            to,
            redirect,
        } => {
            let via = match redirect {
                Some(Redirect::Snake { .. }) => "snake",
                Some(Redirect::Ladder { .. }) => "ladder",
                None => "step",
            };
            tracing::info!(player = %player, roll = %roll, from, to, via, "Player moved");
        }
    }
}
