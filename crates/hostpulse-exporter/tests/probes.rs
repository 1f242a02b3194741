//! Probe boundary tests: definite results, bounded time, no panics.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::{Duration, Instant};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use hostpulse_exporter::probe::{process, PortProbe, Probe, ProcessProbe, UrlProbe};

// ---- port probe ----

#[tokio::test]
async fn port_probe_up_against_live_listener() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let probe = PortProbe::new("127.0.0.1", port, Duration::from_secs(1));
    assert!(probe.check().await.is_up());
}

#[tokio::test]
async fn port_probe_down_when_nothing_listens() {
    // Bind then drop to obtain a port that is free right now.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let probe = PortProbe::new("127.0.0.1", port, Duration::from_secs(1));
    assert!(!probe.check().await.is_up());
}

#[tokio::test]
async fn port_probe_respects_timeout_for_unroutable_host() {
    // TEST-NET-1 black-holes SYNs; the connect can only end via our timeout.
    let probe = PortProbe::new("192.0.2.1", 9, Duration::from_millis(250));

    let started = Instant::now();
    let status = probe.check().await;
    let elapsed = started.elapsed();

    assert!(!status.is_up());
    assert!(elapsed < Duration::from_secs(2), "probe hung for {elapsed:?}");
}

#[tokio::test]
async fn port_probe_down_for_unresolvable_host() {
    let probe = PortProbe::new("no-such-host.invalid", 80, Duration::from_secs(1));
    assert!(!probe.check().await.is_up());
}

// ---- process probe ----

#[test]
fn process_matching_is_case_insensitive_substring() {
    let table = ["systemd", "sshd_daemon", "nginx: worker"];
    assert!(process::table_contains(table, "SSHD"));
    assert!(process::table_contains(table, "nginx"));
    assert!(!process::table_contains(table, "xyz123"));
    assert!(!process::table_contains(std::iter::empty(), "sshd"));
}

#[tokio::test]
async fn process_probe_finds_current_test_process() {
    // Match on a prefix of our own binary name; comm names are truncated on
    // Linux, so keep the pattern short.
    let exe = std::env::current_exe().unwrap();
    let name = exe.file_stem().unwrap().to_string_lossy().to_string();
    let pattern: String = name.chars().take(6).collect();

    let probe = ProcessProbe::new(pattern);
    assert!(probe.check().await.is_up());
}

#[tokio::test]
async fn process_probe_down_for_absent_name() {
    let probe = ProcessProbe::new("definitely_not_running_xyz123");
    assert!(!probe.check().await.is_up());
}

// ---- url probe ----

const OK_RESPONSE: &str = "HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\nok";
const ERR_RESPONSE: &str = "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n";

/// Serve a canned HTTP response to every connection, or accept and stay
/// silent when `response` is `None`.
async fn mock_http_server(listener: TcpListener, response: Option<&'static str>) {
    loop {
        let (mut sock, _) = listener.accept().await.unwrap();
        tokio::spawn(async move {
            if let Some(resp) = response {
                let mut buf = [0u8; 1024];
                let _ = sock.read(&mut buf).await;
                let _ = sock.write_all(resp.as_bytes()).await;
                let _ = sock.shutdown().await;
            } else {
                tokio::time::sleep(Duration::from_secs(60)).await;
            }
        });
    }
}

fn client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder().timeout(timeout).build().unwrap()
}

#[tokio::test]
async fn url_probe_up_only_for_status_200() {
    let ok_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let ok_addr = ok_listener.local_addr().unwrap();
    tokio::spawn(mock_http_server(ok_listener, Some(OK_RESPONSE)));

    let bad_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let bad_addr = bad_listener.local_addr().unwrap();
    tokio::spawn(mock_http_server(bad_listener, Some(ERR_RESPONSE)));

    let client = client(Duration::from_secs(3));
    let ok = UrlProbe::new(format!("http://{ok_addr}/ok"), client.clone());
    let bad = UrlProbe::new(format!("http://{bad_addr}/bad"), client);

    assert!(ok.check().await.is_up());
    assert!(!bad.check().await.is_up());
}

#[tokio::test]
async fn url_probe_times_out_on_silent_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_http_server(listener, None));

    let probe = UrlProbe::new(format!("http://{addr}/"), client(Duration::from_millis(300)));

    let started = Instant::now();
    let status = probe.check().await;
    let elapsed = started.elapsed();

    assert!(!status.is_up());
    assert!(elapsed < Duration::from_secs(2), "probe hung for {elapsed:?}");
}

#[tokio::test]
async fn url_probe_down_for_malformed_url() {
    let probe = UrlProbe::new("not a url at all", client(Duration::from_secs(1)));
    assert!(!probe.check().await.is_up());
}

#[tokio::test]
async fn url_probe_down_for_unreachable_host() {
    let probe = UrlProbe::new(
        "http://no-such-host.invalid/health",
        client(Duration::from_secs(1)),
    );
    assert!(!probe.check().await.is_up());
}
