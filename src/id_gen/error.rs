//! Error types for identifier generation.

use thiserror::Error;

use super::MAX_NODES;

/// Rejected configuration. Raised when building a generator or loading settings,
/// never by [`IdGenerator::generate_id`](super::IdGenerator::generate_id).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The node id falls outside `[0, MAX_NODES)`.
    #[error("invalid node id {node_id}: must be between 0 and {}", MAX_NODES - 1)]
    InvalidNodeId { node_id: i64 },

    /// An environment setting could not be parsed or is out of range.
    #[error("invalid value {value:?} for {key}")]
    InvalidSetting { key: &'static str, value: String },
}

/// The clock read earlier than the last minted timestamp.
///
/// Generator state is left untouched; a later call succeeds once the clock
/// catches up again.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("clock moved backwards: read {now}ms after minting at {last}ms, refusing to generate id")]
pub struct ClockError {
    pub now: i64,
    pub last: i64,
}
