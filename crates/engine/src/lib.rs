//! Snake & Ladder engine library.
//!
//! ## Structure
//!
//! - `stores/` - The single in-memory game record
//! - `use_cases/` - Session gateway: transitions plus observer fan-out
//! - `infrastructure/` - Configuration and randomness (ports + adapters)
//! - `api/` - HTTP and WebSocket entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;


pub use app::App;
