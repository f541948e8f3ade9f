//! Port traits for infrastructure boundaries.
//!
//! The engine has a single outbound dependency worth abstracting: the dice.
//! Everything else (state, observer registry) is owned in-process.

mod testing;

#[cfg(test)]
pub use testing::MockRandomPort;
pub use testing::RandomPort;
