//! Prometheus registry shared by the HTTP middleware and `/metrics`.

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::OnceLock;

/// Registry together with the collectors registered in it.
pub struct HttpMetrics {
    pub registry: Registry,
    pub requests_total: IntCounterVec,
    pub request_duration_seconds: HistogramVec,
}

impl HttpMetrics {
    fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "path", "status"],
        )?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]),
            &["method", "path", "status"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration_seconds,
        })
    }
}

// Global registry. `None` when construction failed.
static METRICS: OnceLock<Option<HttpMetrics>> = OnceLock::new();

/// Initialize all metrics. Safe to call more than once, including
/// concurrently; exactly one registry is ever built.
pub fn init_metrics() {
    metrics();
}

fn metrics() -> Option<&'static HttpMetrics> {
    METRICS
        .get_or_init(|| match HttpMetrics::new() {
            Ok(metrics) => {
                tracing::info!("Prometheus metrics initialized");
                Some(metrics)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize metrics");
                None
            }
        })
        .as_ref()
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();

    let registry = match METRICS.get().and_then(Option::as_ref) {
        Some(m) => &m.registry,
        None => {
            tracing::error!("Metrics registry not initialized");
            return "# Metrics registry not initialized\n".to_string();
        }
    };

    let metric_families = registry.gather();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return format!("# Failed to encode metrics: {}\n", e);
    }

    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to convert metrics to UTF-8");
            format!("# Failed to convert metrics to UTF-8: {}\n", e)
        }
    }
}

/// Record a completed HTTP request. No-op before [`init_metrics`].
pub fn record_http_request(method: &str, path: &str, status: &str, duration_secs: f64) {
    if let Some(m) = METRICS.get().and_then(Option::as_ref) {
        m.requests_total
            .with_label_values(&[method, path, status])
            .inc();
        m.request_duration_seconds
            .with_label_values(&[method, path, status])
            .observe(duration_secs);
    }
}
