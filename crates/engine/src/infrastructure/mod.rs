//! Infrastructure implementations.
//!
//! Contains port trait implementations and process configuration.

pub mod config;
pub mod ports;
pub mod random;
