//! Instantaneous OS resource sampling.
//!
//! One [`Sampler::sample`] call produces the full scalar set: CPU usage over
//! a fixed observation window, memory and root-filesystem utilization,
//! uptime, and cumulative network byte counters. The CPU measurement needs
//! two refreshes separated by the window, so `sample` blocks for about a
//! second by design — callers run it on the blocking pool.

use std::path::Path;
use std::time::Duration;

use hostpulse_core::{HostPulseError, Result};
use sysinfo::{Disks, Networks, System, MINIMUM_CPU_UPDATE_INTERVAL};

/// CPU observation window. Utilization is averaged over this span.
const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// One round of OS counters, taken together at the start of a cycle.
#[derive(Debug, Clone, Copy)]
pub struct OsSample {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
    pub uptime_secs: f64,
    pub net_bytes_sent: u64,
    pub net_bytes_recv: u64,
}

/// Owns a persistent [`System`] so CPU deltas accumulate across cycles.
pub struct Sampler {
    sys: System,
    cpu_window: Duration,
}

impl Sampler {
    pub fn new() -> Self {
        Self {
            sys: System::new_all(),
            cpu_window: CPU_SAMPLE_WINDOW.max(MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }

    /// Read every scalar metric once. Blocks for the CPU window.
    pub fn sample(&mut self) -> Result<OsSample> {
        self.sys.refresh_cpu_usage();
        std::thread::sleep(self.cpu_window);
        self.sys.refresh_cpu_usage();
        let cpu_percent = f64::from(self.sys.global_cpu_info().cpu_usage());

        self.sys.refresh_memory();
        let total_mem = self.sys.total_memory();
        if total_mem == 0 {
            return Err(HostPulseError::Sample("total memory reported as zero".into()));
        }
        let memory_percent = self.sys.used_memory() as f64 / total_mem as f64 * 100.0;

        let disk_percent = root_disk_percent()?;
        let uptime_secs = System::uptime() as f64;
        let (net_bytes_sent, net_bytes_recv) = network_totals();

        Ok(OsSample {
            cpu_percent,
            memory_percent,
            disk_percent,
            uptime_secs,
            net_bytes_sent,
            net_bytes_recv,
        })
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Utilization of the filesystem mounted at `/`.
fn root_disk_percent() -> Result<f64> {
    let disks = Disks::new_with_refreshed_list();
    let root = disks
        .list()
        .iter()
        .find(|d| d.mount_point() == Path::new("/"))
        .ok_or_else(|| HostPulseError::Sample("no filesystem mounted at /".into()))?;

    let total = root.total_space();
    if total == 0 {
        return Err(HostPulseError::Sample("root filesystem reports zero size".into()));
    }
    let used = total.saturating_sub(root.available_space());
    Ok(used as f64 / total as f64 * 100.0)
}

/// Cumulative bytes (sent, received) summed over all interfaces.
fn network_totals() -> (u64, u64) {
    let networks = Networks::new_with_refreshed_list();
    let mut sent = 0u64;
    let mut recv = 0u64;
    for (_iface, data) in &networks {
        sent = sent.saturating_add(data.total_transmitted());
        recv = recv.saturating_add(data.total_received());
    }
    (sent, recv)
}
