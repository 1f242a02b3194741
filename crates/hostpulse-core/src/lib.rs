//! hostpulse core: metric registry, probe status, and error types.
//!
//! This crate defines the concurrently-readable gauge registry shared by the
//! collection cycle and the exposition endpoint, plus the error surface used
//! across the workspace. It intentionally carries no runtime or transport
//! dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `HostPulseError`/`Result` so the
//! exporter process does not crash mid-collection.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;
pub mod status;

/// Shared result type.
pub use error::{HostPulseError, Result};
pub use status::ProbeStatus;
