//! Process-table presence probe.

use async_trait::async_trait;
use hostpulse_core::ProbeStatus;
use sysinfo::{ProcessRefreshKind, RefreshKind, System};

use super::Probe;

/// Scans the current process table for a case-insensitive name substring.
///
/// The scan runs on the blocking pool: `sysinfo` reads the process table
/// synchronously. Processes that exit mid-scan or whose metadata is
/// unreadable simply do not appear in the refreshed table, so the scan never
/// aborts partway.
pub struct ProcessProbe {
    pattern: String,
}

impl ProcessProbe {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

#[async_trait]
impl Probe for ProcessProbe {
    fn target(&self) -> &str {
        &self.pattern
    }

    async fn check(&self) -> ProbeStatus {
        let pattern = self.pattern.clone();
        let scan = tokio::task::spawn_blocking(move || {
            let sys = System::new_with_specifics(
                RefreshKind::new().with_processes(ProcessRefreshKind::new()),
            );
            table_contains(sys.processes().values().map(|p| p.name()), &pattern)
        });
        match scan.await {
            Ok(found) => found.into(),
            // blocking task panicked or was cancelled; treat as down
            Err(_) => ProbeStatus::Down,
        }
    }
}

/// Case-insensitive substring match over a process name table.
pub fn table_contains<'a, I>(names: I, pattern: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let pattern = pattern.to_lowercase();
    names
        .into_iter()
        .any(|name| name.to_lowercase().contains(&pattern))
}
