//! WebSocket handling for realtime observers.
//!
//! Observers receive `gameUpdated` pushes. They may send heartbeats but
//! can never change the game over this channel.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use uuid::Uuid;

use snakeladder_shared::{ClientMessage, ServerMessage};

use crate::app::App;

/// WebSocket upgrade handler - entry point for new connections.
pub async fn ws_handler(ws: WebSocketUpgrade, State(app): State<Arc<App>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, app))
}

/// Handle an individual WebSocket connection.
async fn handle_socket(socket: WebSocket, app: Arc<App>) {
    let (mut ws_sender, mut ws_receiver) = socket.split();

    let connection_id = Uuid::new_v4();

    // Create a bounded channel for sending messages to this client
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(app.observer_buffer);

    // Register; the current snapshot is queued ahead of any later broadcast
    if let Err(e) = app.session.observer_connect(connection_id, tx.clone()).await {
        tracing::warn!(connection_id = %connection_id, error = %e, "Failed to register observer");
        return;
    }

    let observers = app.session.observer_count().await;
    tracing::info!(
        connection_id = %connection_id,
        observers = observers,
        "WebSocket connection established"
    );

    // Spawn a task to forward messages from the channel to the WebSocket
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if ws_sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to serialize server message");
                }
            }
        }
    });

    // Handle incoming messages
    while let Some(result) = ws_receiver.next().await {
        match result {
            Ok(Message::Text(text)) => {
                let reply = match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(ClientMessage::Heartbeat) => ServerMessage::Pong,
                    Ok(ClientMessage::Unknown) => ServerMessage::error(
                        "UNSUPPORTED",
                        "Observers cannot send commands; use the HTTP endpoints",
                    ),
                    Err(e) => {
                        tracing::warn!(connection_id = %connection_id, error = %e, "Failed to parse message");
                        ServerMessage::error("PARSE_ERROR", format!("Invalid message format: {e}"))
                    }
                };
                if tx.try_send(reply).is_err() {
                    tracing::warn!(
                        connection_id = %connection_id,
                        "Failed to send response, channel full or closed"
                    );
                }
            }
            Ok(Message::Close(_)) => {
                tracing::info!(connection_id = %connection_id, "WebSocket closed by client");
                break;
            }
            Err(e) => {
                tracing::error!(connection_id = %connection_id, error = %e, "WebSocket error");
                break;
            }
            _ => {}
        }
    }

    // Clean up
    app.session.observer_disconnect(connection_id).await;
    send_task.abort();

    let observers = app.session.observer_count().await;
    tracing::info!(
        connection_id = %connection_id,
        observers = observers,
        "WebSocket connection terminated"
    );
}
