//! One real collection cycle end to end against the local host.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use hostpulse_exporter::{app_state::AppState, collector::Collector, config};
use tokio::net::TcpListener;

#[tokio::test]
async fn cycle_writes_every_configured_series() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let cfg = config::load_from_str(&format!(
        r#"
version: 1
probes:
  host: "127.0.0.1"
targets:
  ports: [{port}]
  processes: ["definitely_not_running_xyz123"]
  urls: []
"#
    ))
    .unwrap();

    let state = AppState::new(cfg);
    let metrics = state.metrics();
    let collector = Collector::new(state.cfg(), state.metrics()).unwrap();

    collector.run_cycle().await;

    // OS scalars were sampled.
    assert!(metrics.uptime.get() > 0.0);
    assert!((0.0..=100.0).contains(&metrics.memory_usage.get()));
    assert!((0.0..=100.0).contains(&metrics.disk_usage.get()));

    // Probe sweeps recorded definite values.
    assert_eq!(metrics.port_up.get(&port.to_string()), Some(1.0));
    assert_eq!(
        metrics.process_up.get("definitely_not_running_xyz123"),
        Some(0.0)
    );
}
