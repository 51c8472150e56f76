//! Executor configuration.

/// Settings for a [`MultiRow`](crate::MultiRow) executor.
///
/// With the `serde` feature the configuration can be loaded alongside the rest
/// of an application's settings:
///
/// ```toml
/// [batch]
/// batch_size = 500
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// Maximum number of rows sent per multi-row statement.
    pub batch_size: usize,
}

impl BatchConfig {
    pub const fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }
}

impl From<usize> for BatchConfig {
    fn from(batch_size: usize) -> Self {
        Self::new(batch_size)
    }
}
