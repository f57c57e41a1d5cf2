//! Observability
//!
//! Prometheus-style counters, structured logging and health checks.

use axum::{
    Json, Router,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tokio::sync::Mutex;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::config::LoggingConfig;
use crate::error::{AppError, Result};

// ===== Metrics =====

/// Fallback reasons tracked individually
const FALLBACK_REASONS: [&str; 4] = ["API_KEY_MISSING", "AUTH_ERROR", "RATE_LIMIT", "SERVER_ERROR"];

/// Application counters
#[derive(Clone, Default)]
pub struct AppMetrics {
    pub http_requests_total: Arc<AtomicU64>,
    pub http_request_duration_sum: Arc<AtomicU64>,
    pub active_connections: Arc<AtomicUsize>,
    pub chat_requests_total: Arc<AtomicU64>,
    pub provider_replies_total: Arc<AtomicU64>,
    pub fallback_replies_total: Arc<[AtomicU64; 4]>,
    pub quiz_requests_total: Arc<AtomicU64>,
    pub bookings_total: Arc<AtomicU64>,
    pub errors_total: Arc<AtomicU64>,
}

impl AppMetrics {
    pub fn record_http_request(&self, duration_ms: u64) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_request_duration_sum
            .fetch_add(duration_ms, Ordering::Relaxed);
    }

    pub fn connection_opened(&self) {
        self.active_connections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn connection_closed(&self) {
        let _ = self
            .active_connections
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1));
    }

    pub fn record_chat_request(&self) {
        self.chat_requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_provider_reply(&self) {
        self.provider_replies_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts a knowledge-base reply; unknown reasons count as `SERVER_ERROR`
    pub fn record_fallback(&self, reason: &str) {
        let index = FALLBACK_REASONS
            .iter()
            .position(|r| *r == reason)
            .unwrap_or(FALLBACK_REASONS.len() - 1);
        self.fallback_replies_total[index].fetch_add(1, Ordering::Relaxed);
    }

    pub fn fallback_count(&self, reason: &str) -> u64 {
        FALLBACK_REASONS
            .iter()
            .position(|r| *r == reason)
            .map(|i| self.fallback_replies_total[i].load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn record_quiz_request(&self) {
        self.quiz_requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_booking(&self) {
        self.bookings_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Renders every counter in Prometheus text format
    pub fn gather(&self) -> String {
        let requests = self.http_requests_total.load(Ordering::Relaxed);
        let fallbacks = FALLBACK_REASONS
            .iter()
            .zip(self.fallback_replies_total.iter())
            .map(|(reason, count)| {
                format!(
                    "fallback_replies_total{{reason=\"{}\"}} {}\n",
                    reason,
                    count.load(Ordering::Relaxed)
                )
            })
            .collect::<String>();

        format!(
            r#"# HELP http_requests_total Total HTTP requests
# TYPE http_requests_total counter
http_requests_total {}
# HELP http_request_duration_seconds HTTP request duration in seconds
# TYPE http_request_duration_seconds summary
http_request_duration_seconds_sum {}
http_request_duration_seconds_count {}
# HELP active_connections Active HTTP connections
# TYPE active_connections gauge
active_connections {}
# HELP chat_requests_total Chat messages received
# TYPE chat_requests_total counter
chat_requests_total {}
# HELP provider_replies_total Chat replies produced by the language-model provider
# TYPE provider_replies_total counter
provider_replies_total {}
# HELP fallback_replies_total Chat replies produced by the local knowledge base
# TYPE fallback_replies_total counter
{}# HELP quiz_requests_total Quiz submissions
# TYPE quiz_requests_total counter
quiz_requests_total {}
# HELP bookings_total Confirmed bookings
# TYPE bookings_total counter
bookings_total {}
# HELP errors_total Total errors
# TYPE errors_total counter
errors_total {}
"#,
            requests,
            self.http_request_duration_sum.load(Ordering::Relaxed) as f64 / 1000.0,
            requests,
            self.active_connections.load(Ordering::Relaxed),
            self.chat_requests_total.load(Ordering::Relaxed),
            self.provider_replies_total.load(Ordering::Relaxed),
            fallbacks,
            self.quiz_requests_total.load(Ordering::Relaxed),
            self.bookings_total.load(Ordering::Relaxed),
            self.errors_total.load(Ordering::Relaxed),
        )
    }
}

// ===== Health Check =====

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: f64,
    pub checks: Vec<HealthCheck>,
}

#[derive(Debug, Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: String,
    pub message: Option<String>,
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct HealthCheckResult {
    pub name: String,
    pub healthy: bool,
    pub message: String,
    pub latency_ms: u64,
}

impl HealthCheckResult {
    /// Chat stays available without a provider, so this check is always healthy
    pub fn provider(provider: Option<&str>) -> Self {
        let message = match provider {
            Some(name) => format!("{} provider configured", name),
            None => "no provider configured, replies come from the knowledge base".to_string(),
        };

        Self {
            name: "ai_provider".to_string(),
            healthy: true,
            message,
            latency_ms: 0,
        }
    }
}

fn status_label(healthy: bool) -> String {
    if healthy { "healthy" } else { "unhealthy" }.to_string()
}

/// Shared state of the operational endpoints
#[derive(Clone)]
pub struct ObservabilityState {
    pub metrics: Arc<AppMetrics>,
    pub health_checks: Arc<Mutex<Vec<HealthCheckResult>>>,
    pub start_time: DateTime<Utc>,
    pub version: String,
}

impl ObservabilityState {
    pub fn new(version: String) -> Self {
        Self::with_metrics(version, Arc::new(AppMetrics::default()))
    }

    pub fn with_metrics(version: String, metrics: Arc<AppMetrics>) -> Self {
        Self {
            metrics,
            health_checks: Arc::new(Mutex::new(Vec::new())),
            start_time: Utc::now(),
            version,
        }
    }

    /// Keeps the last 10 results
    pub async fn add_health_check(&self, result: HealthCheckResult) {
        let mut checks = self.health_checks.lock().await;
        checks.push(result);
        if checks.len() > 10 {
            checks.remove(0);
        }
    }

    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.start_time).num_seconds() as f64
    }
}

// ===== Handlers =====

pub async fn health_check(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    let checks = state.health_checks.lock().await;
    let all_healthy = checks.iter().all(|c| c.healthy);

    let health_status = HealthStatus {
        status: status_label(all_healthy),
        timestamp: Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime_seconds: state.uptime_seconds(),
        checks: checks
            .iter()
            .map(|c| HealthCheck {
                name: c.name.clone(),
                status: status_label(c.healthy),
                message: Some(c.message.clone()),
                latency_ms: Some(c.latency_ms),
            })
            .collect(),
    };

    let status_code = if all_healthy {
        axum::http::StatusCode::OK
    } else {
        axum::http::StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(health_status))
}

pub async fn liveness() -> impl IntoResponse {
    "OK"
}

pub async fn readiness(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    let checks = state.health_checks.lock().await;

    if checks.iter().all(|c| c.healthy) {
        (axum::http::StatusCode::OK, "Ready")
    } else {
        (axum::http::StatusCode::SERVICE_UNAVAILABLE, "Not Ready")
    }
}

pub async fn metrics(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    (
        axum::http::StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.gather(),
    )
}

pub async fn version(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "version": state.version,
        "uptime_seconds": state.uptime_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// `/health`, `/health/live`, `/health/ready`, `/metrics`, `/version`
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        .route("/metrics", get(metrics))
        .route("/version", get(version))
        .with_state(state)
}

// ===== Structured Logging =====

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides `logging.level`. The returned guard flushes the
/// rolling log file and must live as long as the process.
pub fn init_tracing(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))
            .map_err(|e| AppError::Config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let json_layer = config.structured.then(|| fmt::layer().json().with_target(true));
    let text_layer = (!config.structured).then(|| {
        fmt::layer()
            .with_target(true)
            .with_line_number(true)
    });

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "chronos.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::Internal(format!("Failed to set tracing subscriber: {}", e)))?;

    Ok(guard)
}

// ===== Request Metrics Middleware =====

/// Counts requests, latency and 5xx responses
pub async fn metrics_middleware(
    State(metrics): State<Arc<AppMetrics>>,
    req: Request,
    next: Next,
) -> Response {
    let start = std::time::Instant::now();
    metrics.connection_opened();

    let response = next.run(req).await;

    metrics.record_http_request(start.elapsed().as_millis() as u64);
    metrics.connection_closed();
    if response.status().is_server_error() {
        metrics.record_error();
    }

    response
}
