//! Fixed-interval scheduling of collection cycles.
//!
//! Policy: run one cycle to completion, then sleep the full interval. The
//! actual period is therefore cycle duration + interval; there is no drift
//! correction, jitter, backoff, or skip-if-busy. Deliberately not
//! `tokio::time::interval`, which would give a fixed period instead.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

/// Loop forever: cycle, then sleep `interval`. Never returns.
pub async fn run_forever<C, Fut>(mut cycle: C, interval: Duration)
where
    C: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    loop {
        let started = Instant::now();
        cycle().await;
        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "collection cycle finished"
        );
        tokio::time::sleep(interval).await;
    }
}
