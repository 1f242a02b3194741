//! TCP reachability probe.

use std::time::Duration;

use async_trait::async_trait;
use hostpulse_core::ProbeStatus;
use tokio::net::TcpStream;
use tokio::time::timeout;

use super::Probe;

/// Attempts a TCP connection with a bounded timeout. Up means the connection
/// was established (and immediately dropped); refused, timed out, and
/// unresolvable all map to Down.
pub struct PortProbe {
    host: String,
    port: u16,
    deadline: Duration,
    label: String,
}

impl PortProbe {
    pub fn new(host: impl Into<String>, port: u16, deadline: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            deadline,
            label: port.to_string(),
        }
    }
}

#[async_trait]
impl Probe for PortProbe {
    fn target(&self) -> &str {
        &self.label
    }

    async fn check(&self) -> ProbeStatus {
        match timeout(self.deadline, TcpStream::connect((self.host.as_str(), self.port))).await {
            Ok(Ok(_stream)) => ProbeStatus::Up,
            // connect error or timeout elapsed
            _ => ProbeStatus::Down,
        }
    }
}
