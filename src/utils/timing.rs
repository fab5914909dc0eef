use std::time::Instant;

use chrono::Utc;
use tracing::info;

pub async fn log_generation_timing<T, E, F, Fut>(
    service: &str,
    operation: &str,
    call: F,
) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
{
    let started_at = Utc::now();
    let started_perf = Instant::now();
    info!(
        target: "geophoto.timing",
        "event=generation_request service={} operation={} started_at={}",
        service,
        operation,
        started_at.to_rfc3339()
    );

    let result = call().await;
    let status = if result.is_ok() { "success" } else { "error" };

    let completed_at = Utc::now();
    let duration = started_perf.elapsed().as_secs_f64();
    info!(
        target: "geophoto.timing",
        "event=generation_response service={} operation={} completed_at={} duration_s={:.3} status={}",
        service,
        operation,
        completed_at.to_rfc3339(),
        duration,
        status
    );

    result
}
