//! hostpulse exporter library entry.
//!
//! This crate wires the config layer, OS sampler, probes, collection cycle,
//! scheduler, and the HTTP exposition endpoint into a cohesive exporter. It
//! is intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod collector;
pub mod config;
pub mod ops;
pub mod probe;
pub mod router;
pub mod sampler;
pub mod scheduler;
