//! HTTP liveness probe.

use async_trait::async_trait;
use hostpulse_core::ProbeStatus;
use reqwest::{Client, StatusCode};

use super::Probe;

/// Issues a GET against one URL. Up iff the response status is exactly 200;
/// any transport error, TLS failure, timeout, or other status maps to Down.
/// The timeout lives on the shared [`Client`], which is built once at
/// startup and reused across cycles (connection pooling).
pub struct UrlProbe {
    url: String,
    client: Client,
}

impl UrlProbe {
    pub fn new(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl Probe for UrlProbe {
    fn target(&self) -> &str {
        &self.url
    }

    async fn check(&self) -> ProbeStatus {
        match self.client.get(&self.url).send().await {
            Ok(resp) => (resp.status() == StatusCode::OK).into(),
            // includes malformed URLs, DNS failures, and timeouts
            Err(_) => ProbeStatus::Down,
        }
    }
}
