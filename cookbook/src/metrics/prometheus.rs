//! Prometheus-backed metrics and HTTP exporter.
//!
//! This module defines a [`MetricsRegistry`] that owns a Prometheus
//! registry and a set of strongly-typed API/store metrics, and an
//! async HTTP exporter that serves `/metrics` using `hyper`.

use std::{convert::Infallible, net::SocketAddr, sync::Arc};

use bytes::Bytes;
use http_body_util::Full;
use hyper::{
    Method, Request, Response, StatusCode, body::Incoming, header, server::conn::http1,
    service::service_fn,
};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use prometheus::{
    self, Encoder, Gauge, Histogram, HistogramOpts, IntCounter, Opts, Registry, TextEncoder,
};

/// API- and store-related Prometheus metrics.
///
/// These are registered into a [`Registry`] and updated from the HTTP
/// handlers around every full-collection load and persist.
#[derive(Clone)]
pub struct ApiMetrics {
    /// Latency of loading the full recipe collection from disk, in seconds.
    pub store_read_seconds: Histogram,
    /// Latency of persisting the full recipe collection to disk, in seconds.
    pub store_write_seconds: Histogram,
    /// Total number of recipes successfully created.
    pub recipes_created_total: IntCounter,
    /// Total number of create requests rejected by validation.
    pub create_rejected_total: IntCounter,
    /// Number of recipes in the store after the latest read or write.
    pub recipes_in_store: Gauge,
}

impl ApiMetrics {
    /// Registers API metrics into the given `Registry`.
    pub fn register(registry: &Registry) -> Result<Self, prometheus::Error> {
        // Full-collection load latency.
        let store_read_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "store_read_seconds",
                "Time to load the full recipe collection from disk in seconds",
            )
            .buckets(vec![
                0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
            ]),
        )?;
        registry.register(Box::new(store_read_seconds.clone()))?;

        // Full-collection persist latency.
        let store_write_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "store_write_seconds",
                "Time to persist the full recipe collection to disk in seconds",
            )
            .buckets(vec![
                0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
            ]),
        )?;
        registry.register(Box::new(store_write_seconds.clone()))?;

        // Successful creations.
        let recipes_created_total = IntCounter::with_opts(Opts::new(
            "recipes_created_total",
            "Total number of recipes successfully created",
        ))?;
        registry.register(Box::new(recipes_created_total.clone()))?;

        // Validation rejections.
        let create_rejected_total = IntCounter::with_opts(Opts::new(
            "create_rejected_total",
            "Total number of create requests rejected by validation",
        ))?;
        registry.register(Box::new(create_rejected_total.clone()))?;

        // Collection size.
        let recipes_in_store = Gauge::with_opts(Opts::new(
            "recipes_in_store",
            "Number of recipes in the store after the latest read or write",
        ))?;
        registry.register(Box::new(recipes_in_store.clone()))?;

        Ok(Self {
            store_read_seconds,
            store_write_seconds,
            recipes_created_total,
            create_rejected_total,
            recipes_in_store,
        })
    }
}

/// Wrapper around a Prometheus registry and the API metrics.
///
/// This is the main handle you pass around in the service. It can be
/// wrapped in an [`Arc`] and shared across threads/tasks.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Registry,
    pub api: ApiMetrics,
}

impl MetricsRegistry {
    /// Creates a new `MetricsRegistry` with a fresh underlying `Registry`
    /// and registers the API metrics.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("cookbook".to_string()), None)?;
        let api = ApiMetrics::register(&registry)?;
        Ok(Self { registry, api })
    }

    /// Encodes all metrics in this registry into the Prometheus text format.
    pub fn gather_text(&self) -> String {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
            tracing::error!("failed to encode Prometheus metrics: {e}");
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}

/// Runs an HTTP server that exposes Prometheus metrics.
///
/// The server listens on `addr` and serves `GET /metrics` with the
/// Prometheus text exposition format. All other paths return 404.
///
/// This function is `async` and is intended to be spawned onto a Tokio
/// runtime, e.g.:
///
/// ```ignore
/// let registry = Arc::new(MetricsRegistry::new()?);
/// let addr: SocketAddr = "127.0.0.1:9898".parse()?;
/// tokio::spawn(run_prometheus_http_server(registry.clone(), addr));
/// ```
pub async fn run_prometheus_http_server(
    metrics: Arc<MetricsRegistry>,
    addr: SocketAddr,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listener = TcpListener::bind(addr).await?;

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let metrics = metrics.clone();

        tokio::spawn(async move {
            let svc = service_fn(move |req| {
                let metrics = metrics.clone();
                handle_request(req, metrics)
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, svc).await {
                tracing::warn!("prometheus HTTP server error: {err}");
            }
        });
    }
}

async fn handle_request(
    req: Request<Incoming>,
    metrics: Arc<MetricsRegistry>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    match (req.method(), req.uri().path()) {
        (&Method::GET, "/metrics") => {
            let body = metrics.gather_text();
            Ok(Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/plain; version=0.0.4")
                .body(Full::new(Bytes::from(body)))
                .unwrap())
        }
        _ => Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Full::new(Bytes::from("not found")))
            .unwrap()),
    }
}
