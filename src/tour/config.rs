//! Tour construction configuration.

/// Default shuffle seed.
///
/// Tours must be bit-identical across runs and platforms, so the insertion
/// order is always drawn from a fixed seed.
pub const DEFAULT_SEED: u64 = 0xDECAFF;

/// Configuration for [`TourPlanner`](super::TourPlanner).
///
/// # Examples
///
/// ```
/// use u_tour::tour::{TourConfig, DEFAULT_SEED};
///
/// let config = TourConfig::default();
/// assert_eq!(config.seed, DEFAULT_SEED);
///
/// let config = TourConfig::default().with_seed(7);
/// assert_eq!(config.seed, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourConfig {
    /// Seed of the permutation that decides the insertion order.
    pub seed: u64,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

impl TourConfig {
    /// Sets the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
