//! Use cases - User story orchestration.
//!
//! Use cases sit between the API layer and the stores: handlers call them,
//! they drive the store and publish results.

pub mod game;

pub use game::GameSession;
