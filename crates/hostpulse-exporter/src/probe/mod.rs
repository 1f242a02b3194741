//! Bounded-time availability probes.
//!
//! All three probe kinds share one contract: `check()` always terminates
//! within the probe's timeout, always returns a definite [`ProbeStatus`],
//! and never propagates an error. This is what keeps the collection cycle's
//! total duration bounded when targets hang or misbehave — a hung TCP
//! connect or HTTP GET costs at most its own timeout, nothing more.

pub mod port;
pub mod process;
pub mod url;

use async_trait::async_trait;
use hostpulse_core::ProbeStatus;

pub use port::PortProbe;
pub use process::ProcessProbe;
pub use url::UrlProbe;

/// One monitored target. `target()` is the label value the result is
/// recorded under.
#[async_trait]
pub trait Probe: Send + Sync {
    fn target(&self) -> &str;
    async fn check(&self) -> ProbeStatus;
}
