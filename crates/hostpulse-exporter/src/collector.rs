//! The collection cycle.
//!
//! One cycle samples the OS counters, then sweeps every configured port,
//! process, and URL probe, writing each result into the shared registry.
//! A probe reporting down is a normal value (0); faults never cross the
//! probe boundary, so the sweeps always run to completion. Only an
//! OS-sampling failure aborts a cycle, leaving the previous values
//! published until the next round.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use hostpulse_core::metrics::HostMetrics;
use hostpulse_core::{HostPulseError, Result};

use crate::config::ExporterConfig;
use crate::probe::{PortProbe, Probe, ProcessProbe, UrlProbe};
use crate::sampler::{OsSample, Sampler};

/// Cheap to clone; all state is shared.
#[derive(Clone)]
pub struct Collector {
    metrics: Arc<HostMetrics>,
    sampler: Arc<Mutex<Sampler>>,
    ports: Arc<Vec<PortProbe>>,
    processes: Arc<Vec<ProcessProbe>>,
    urls: Arc<Vec<UrlProbe>>,
}

impl Collector {
    /// Wire probes from config. The HTTP client is built once and shared by
    /// every URL probe.
    pub fn new(cfg: &ExporterConfig, metrics: Arc<HostMetrics>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.probes.url_timeout_ms))
            .build()
            .map_err(|e| HostPulseError::Internal(format!("http client build failed: {e}")))?;

        let port_deadline = Duration::from_millis(cfg.probes.port_timeout_ms);
        let ports = cfg
            .targets
            .ports
            .iter()
            .map(|&p| PortProbe::new(cfg.probes.host.clone(), p, port_deadline))
            .collect();
        let processes = cfg
            .targets
            .processes
            .iter()
            .map(|name| ProcessProbe::new(name.clone()))
            .collect();
        let urls = cfg
            .targets
            .urls
            .iter()
            .map(|url| UrlProbe::new(url.clone(), client.clone()))
            .collect();

        Ok(Self {
            metrics,
            sampler: Arc::new(Mutex::new(Sampler::new())),
            ports: Arc::new(ports),
            processes: Arc::new(processes),
            urls: Arc::new(urls),
        })
    }

    /// Run one full cycle to completion.
    pub async fn run_cycle(&self) {
        let sample = match self.sample_os().await {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "os sampling failed; cycle skipped, previous values remain published");
                return;
            }
        };

        self.metrics.cpu_usage.set(sample.cpu_percent);
        self.metrics.memory_usage.set(sample.memory_percent);
        self.metrics.disk_usage.set(sample.disk_percent);
        self.metrics.uptime.set(sample.uptime_secs);
        self.metrics.network_sent.set(sample.net_bytes_sent as f64);
        self.metrics.network_recv.set(sample.net_bytes_recv as f64);

        for probe in self.ports.iter() {
            let status = probe.check().await;
            self.metrics.port_up.set(probe.target(), status.as_gauge());
        }
        for probe in self.processes.iter() {
            let status = probe.check().await;
            self.metrics.process_up.set(probe.target(), status.as_gauge());
        }
        for probe in self.urls.iter() {
            let status = probe.check().await;
            self.metrics.url_up.set(probe.target(), status.as_gauge());
        }
    }

    async fn sample_os(&self) -> Result<OsSample> {
        let sampler = Arc::clone(&self.sampler);
        tokio::task::spawn_blocking(move || {
            let mut guard = sampler.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            guard.sample()
        })
        .await
        .map_err(|e| HostPulseError::Internal(format!("sampling task failed: {e}")))?
    }
}
