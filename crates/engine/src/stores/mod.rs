//! In-memory state storage modules.
//!
//! Stores manage runtime state that lives only as long as the process:
//! - `GameStore` - the single authoritative game record

pub mod game;

pub use game::{GameGuard, GameStore};
