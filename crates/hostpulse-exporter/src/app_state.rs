//! Shared application state for the hostpulse exporter.
//!
//! The registry is built once here, with family label sets fixed to the
//! configured targets, then shared between the collection cycle (writer) and
//! the HTTP handlers (readers).

use std::sync::Arc;

use hostpulse_core::metrics::HostMetrics;

use crate::config::ExporterConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    metrics: Arc<HostMetrics>,
}

impl AppState {
    pub fn new(cfg: ExporterConfig) -> Self {
        let metrics = Arc::new(HostMetrics::new(
            cfg.targets.ports.iter().copied(),
            cfg.targets.processes.iter().cloned(),
            cfg.targets.urls.iter().cloned(),
        ));
        Self {
            inner: Arc::new(AppStateInner { cfg, metrics }),
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> Arc<HostMetrics> {
        Arc::clone(&self.inner.metrics)
    }
}
