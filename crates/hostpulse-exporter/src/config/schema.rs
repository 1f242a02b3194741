use serde::Deserialize;

use hostpulse_core::{HostPulseError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,

    #[serde(default)]
    pub probes: ProbeSection,

    #[serde(default)]
    pub targets: TargetSection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            exporter: ExporterSection::default(),
            probes: ProbeSection::default(),
            targets: TargetSection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(HostPulseError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.exporter.validate()?;
        self.probes.validate()?;
        self.targets.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            interval_secs: default_interval_secs(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=3600).contains(&self.interval_secs) {
            return Err(HostPulseError::Config(
                "exporter.interval_secs must be between 1 and 3600".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeSection {
    /// Host the port probes connect to.
    #[serde(default = "default_probe_host")]
    pub host: String,

    #[serde(default = "default_port_timeout_ms")]
    pub port_timeout_ms: u64,

    #[serde(default = "default_url_timeout_ms")]
    pub url_timeout_ms: u64,
}

impl Default for ProbeSection {
    fn default() -> Self {
        Self {
            host: default_probe_host(),
            port_timeout_ms: default_port_timeout_ms(),
            url_timeout_ms: default_url_timeout_ms(),
        }
    }
}

impl ProbeSection {
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(HostPulseError::Config("probes.host must not be empty".into()));
        }
        if !(100..=30000).contains(&self.port_timeout_ms) {
            return Err(HostPulseError::Config(
                "probes.port_timeout_ms must be between 100 and 30000".into(),
            ));
        }
        if !(100..=30000).contains(&self.url_timeout_ms) {
            return Err(HostPulseError::Config(
                "probes.url_timeout_ms must be between 100 and 30000".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetSection {
    #[serde(default = "default_ports")]
    pub ports: Vec<u16>,

    #[serde(default = "default_processes")]
    pub processes: Vec<String>,

    #[serde(default = "default_urls")]
    pub urls: Vec<String>,
}

impl Default for TargetSection {
    fn default() -> Self {
        Self {
            ports: default_ports(),
            processes: default_processes(),
            urls: default_urls(),
        }
    }
}

impl TargetSection {
    pub fn validate(&self) -> Result<()> {
        if self.processes.iter().any(|p| p.is_empty()) {
            return Err(HostPulseError::Config(
                "targets.processes entries must not be empty".into(),
            ));
        }
        if self.urls.iter().any(|u| u.is_empty()) {
            return Err(HostPulseError::Config(
                "targets.urls entries must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_version() -> u32 {
    1
}
fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_interval_secs() -> u64 {
    10
}
fn default_probe_host() -> String {
    "localhost".into()
}
fn default_port_timeout_ms() -> u64 {
    1000
}
fn default_url_timeout_ms() -> u64 {
    3000
}
fn default_ports() -> Vec<u16> {
    vec![22, 80, 443, 9090]
}
fn default_processes() -> Vec<String> {
    vec!["nginx".into(), "sshd".into(), "prometheus".into()]
}
fn default_urls() -> Vec<String> {
    vec!["https://google.com".into(), "https://github.com".into()]
}
