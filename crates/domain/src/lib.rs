//! Snake & Ladder domain: board topology, game record and transition rules.
//!
//! This crate is pure. It performs no I/O, owns no runtime and draws no
//! randomness; dice faces are handed in by the caller.

pub mod board;
pub mod error;
pub mod game_state;
pub mod ids;
pub mod value_objects;

pub use board::{Board, Redirect, BOARD_SIZE, START_CELL};
pub use error::DomainError;
pub use game_state::{GamePhase, GameState, RollOutcome};
pub use ids::{PlayerId, PLAYER_COUNT};
pub use value_objects::DieRoll;
