//! Error types for planet configuration and queries.

use thiserror::Error;

/// Errors surfaced by the stateful planet API and settings loading.
///
/// Noise evaluation itself is total; these only cover configuration.
#[derive(Debug, Error)]
pub enum PlanetError {
    /// A height or position query was issued before `init`.
    #[error("planet is not configured: call init(seed, scale, radius) first")]
    Unconfigured,

    #[error("invalid planet settings: {0}")]
    Settings(#[from] serde_json::Error),
}
