//! Testability ports for injecting randomness.

// =============================================================================
// Testability Ports
// =============================================================================

/// Source of uniformly distributed integers.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform integer in `min..=max`.
    fn gen_range(&self, min: i32, max: i32) -> i32;
}
