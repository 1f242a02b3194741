//! Gauge registry with Prometheus text exposition.
//!
//! No metrics-framework dependency is used; this module provides scalar and
//! label-partitioned gauges backed by atomics and `DashMap`. Values are `f64`
//! stored as their `u64` bit pattern, so a scrape running concurrently with a
//! collection cycle can never observe a torn number. Registration happens
//! once at startup: scalar gauges are struct fields (an unregistered name is
//! a compile error) and family label sets are fixed at construction.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Render a gauge value the way the Prometheus text format expects:
/// integral values without a trailing `.0`, everything else as-is.
fn write_value(out: &mut String, v: f64) {
    if v.is_finite() && v == v.trunc() && v.abs() < 9.2e18 {
        let _ = write!(out, "{}", v as i64);
    } else {
        let _ = write!(out, "{v}");
    }
}

/// A single scalar gauge.
#[derive(Default)]
pub struct Gauge {
    bits: AtomicU64,
}

impl Gauge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the current value. Atomic with respect to [`Gauge::get`].
    pub fn set(&self, v: f64) {
        self.bits.store(v.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {name} {help}");
        let _ = writeln!(out, "# TYPE {name} gauge");
        let _ = write!(out, "{name} ");
        write_value(out, self.get());
        out.push('\n');
    }
}

/// A gauge family partitioned by exactly one label dimension.
///
/// The label set is pre-registered at construction and never grows: the
/// monitored targets are static for the process lifetime, so a write against
/// an unknown label value can only be a programming error. It trips a
/// `debug_assert` and is otherwise ignored.
pub struct GaugeVec {
    label_key: &'static str,
    map: DashMap<String, AtomicU64>,
}

impl GaugeVec {
    pub fn new<I, S>(label_key: &'static str, label_values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let map = DashMap::new();
        for v in label_values {
            map.insert(v.into(), AtomicU64::new(0.0f64.to_bits()));
        }
        Self { label_key, map }
    }

    /// Overwrite one series. `label` must be a registered label value.
    pub fn set(&self, label: &str, v: f64) {
        match self.map.get(label) {
            Some(g) => g.store(v.to_bits(), Ordering::Relaxed),
            None => debug_assert!(false, "unregistered {} label: {label}", self.label_key),
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.map
            .get(label)
            .map(|g| f64::from_bits(g.load(Ordering::Relaxed)))
    }

    /// Render in Prometheus text exposition format, rows sorted by label
    /// value so consecutive scrapes are byte-comparable.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {name} {help}");
        let _ = writeln!(out, "# TYPE {name} gauge");

        let mut rows: Vec<(String, f64)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), f64::from_bits(r.value().load(Ordering::Relaxed))))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        for (label, v) in rows {
            let _ = write!(out, "{name}{{{}=\"{}\"}} ", self.label_key, escape_label(&label));
            write_value(out, v);
            out.push('\n');
        }
    }
}

/// The process-wide metric registry.
///
/// Built once at startup and shared (`Arc`) between the collection cycle,
/// which writes, and the exposition endpoint, which reads the full snapshot
/// on every scrape. Every write is a single atomic store, so scrapes never
/// block on a running cycle.
pub struct HostMetrics {
    pub cpu_usage: Gauge,
    pub memory_usage: Gauge,
    pub disk_usage: Gauge,
    pub uptime: Gauge,
    pub network_sent: Gauge,
    pub network_recv: Gauge,
    pub port_up: GaugeVec,
    pub process_up: GaugeVec,
    pub url_up: GaugeVec,
}

impl HostMetrics {
    /// Build the registry with the family label sets fixed to the monitored
    /// targets. Everything starts at 0 until the first cycle completes.
    pub fn new<P, S, U>(ports: P, processes: S, urls: U) -> Self
    where
        P: IntoIterator<Item = u16>,
        S: IntoIterator<Item = String>,
        U: IntoIterator<Item = String>,
    {
        Self {
            cpu_usage: Gauge::new(),
            memory_usage: Gauge::new(),
            disk_usage: Gauge::new(),
            uptime: Gauge::new(),
            network_sent: Gauge::new(),
            network_recv: Gauge::new(),
            port_up: GaugeVec::new("port", ports.into_iter().map(|p| p.to_string())),
            process_up: GaugeVec::new("process", processes),
            url_up: GaugeVec::new("url", urls),
        }
    }

    /// Render the full registry snapshot as Prometheus text exposition.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.cpu_usage
            .render("system_cpu_usage_percent", "CPU usage percentage", &mut out);
        self.memory_usage
            .render("system_memory_usage_percent", "Memory usage percentage", &mut out);
        self.disk_usage
            .render("system_disk_usage_percent", "Disk usage percentage", &mut out);
        self.uptime
            .render("system_uptime_seconds", "System uptime in seconds", &mut out);
        self.network_sent
            .render("system_network_bytes_sent", "Network bytes sent", &mut out);
        self.network_recv
            .render("system_network_bytes_received", "Network bytes received", &mut out);
        self.port_up
            .render("service_port_up", "Port up status (1=up,0=down)", &mut out);
        self.process_up
            .render("process_up", "Process running (1=up,0=down)", &mut out);
        self.url_up
            .render("url_up", "Website availability (1=up,0=down)", &mut out);
        out
    }
}
