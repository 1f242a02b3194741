//! Shared error type across hostpulse crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, HostPulseError>;

/// Unified error type used by core and the exporter.
///
/// Probe outcomes are never errors: a down target is a value
/// ([`crate::ProbeStatus::Down`]), not a fault. This enum covers the cases
/// that genuinely stop something — bad config, a failed OS-counter read, or
/// an internal wiring problem.
#[derive(Debug, Error)]
pub enum HostPulseError {
    #[error("config: {0}")]
    Config(String),
    #[error("sample: {0}")]
    Sample(String),
    #[error("internal: {0}")]
    Internal(String),
}
