use chronos::api::{self, app_state::AppState};
use chronos::config::loader::{ConfigLoader, config_exists};
use chronos::observability::{
    AppMetrics, HealthCheckResult, ObservabilityState, create_observability_router, init_tracing,
};
use chronos::services::{
    create_booking_service, create_chat_service, create_provider, create_quiz_service,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Local overrides first, then the shared file; existing variables win
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();

    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;

    let _log_guard = init_tracing(&config.logging)?;
    info!(
        "Starting {} ({} environment)...",
        config.app_name, config.environment
    );
    if !config_exists() {
        info!("No config.toml found, using defaults and environment");
    }

    let metrics = Arc::new(AppMetrics::default());

    let provider = create_provider(&config.ai)?;
    let provider_name = provider.as_ref().map(|p| p.name());
    match provider_name {
        Some(name) => info!("AI provider initialized: {}", name),
        None => info!("Running without AI provider, chat answers from the knowledge base"),
    }

    let chat_service = create_chat_service(provider.clone(), &config.ai, metrics.clone());
    let quiz_service = create_quiz_service(provider, &config.ai, metrics.clone());
    let booking_service = create_booking_service(metrics.clone());
    info!("Services initialized");

    let app_state = AppState::new(chat_service, quiz_service, booking_service, metrics.clone())
        .with_cors_origins(config.server.cors_origins.clone());

    let observability_state = Arc::new(ObservabilityState::with_metrics(
        env!("CARGO_PKG_VERSION").to_string(),
        metrics,
    ));
    observability_state
        .add_health_check(HealthCheckResult::provider(provider_name))
        .await;

    let router = create_observability_router(observability_state)
        .merge(api::create_router(app_state))
        .layer(RequestBodyLimitLayer::new(config.server.max_request_size))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout,
        )))
        .layer(TraceLayer::new_for_http());
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
