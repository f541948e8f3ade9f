//! Snake & Ladder Protocol - Shared types for the engine and display clients
//!
//! This crate contains the wire contract only:
//! - `GameSnapshot`, the JSON body of every HTTP response and realtime push
//! - WebSocket message types (`ClientMessage`, `ServerMessage`)
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and the domain crate
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Stable field names** - `playerPositions`, `turn`, `dice`, `winner`

pub mod messages;
pub mod snapshot;

pub use messages::{ClientMessage, ServerMessage, GAME_UPDATED_EVENT};
pub use snapshot::{GameSnapshot, PlayerNames};
