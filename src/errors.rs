//! Error types.

use thiserror::Error;

/// Error conditions surfaced by [`ClusterEngine`](crate::ClusterEngine).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClusterError {
    /// Malformed construction or run parameters (cluster count out of range,
    /// empty point set, mismatched dimensionality, label above the declared
    /// bound, zero epoch ceiling). Raised before any work begins, never
    /// silently corrected.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The epoch ceiling was reached before the assignments stabilized. The
    /// engine keeps the last homogenized assignment.
    #[error("no stable assignment after {epochs} epochs")]
    DidNotConverge { epochs: usize },
}
