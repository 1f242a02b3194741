//! hostpulse exporter
//!
//! Periodic host-metrics collector with a Prometheus-compatible `/metrics`
//! endpoint:
//! - scalar gauges: CPU / memory / disk utilization, uptime, network bytes
//! - availability families: TCP ports, local processes, remote URLs
//! - one collection task, any number of concurrent scrapes

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use hostpulse_exporter::{app_state, collector::Collector, config, router, scheduler};

const CONFIG_PATH: &str = "hostpulse.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = if Path::new(CONFIG_PATH).exists() {
        config::load_from_file(CONFIG_PATH).expect("config load failed")
    } else {
        tracing::info!(path = CONFIG_PATH, "config file not found, using built-in defaults");
        config::ExporterConfig::default()
    };

    let listen: SocketAddr = cfg
        .exporter
        .listen
        .parse()
        .expect("exporter.listen must be a valid SocketAddr");
    let interval = Duration::from_secs(cfg.exporter.interval_secs);

    let state = app_state::AppState::new(cfg);
    let collector = Collector::new(state.cfg(), state.metrics()).expect("collector init failed");
    let app = router::build_router(state);

    tracing::info!(%listen, interval_secs = interval.as_secs(), "hostpulse-exporter starting");
    // Bind failure is fatal: there is no meaningful partial startup.
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    tokio::spawn(scheduler::run_forever(
        move || {
            let collector = collector.clone();
            async move { collector.run_cycle().await }
        },
        interval,
    ));

    axum::serve(listener, app).await.expect("server failed");
}
