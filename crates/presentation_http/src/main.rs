//! VoiceRelay HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::services::{AssistantService, TranscriptionService};
use infrastructure::{
    AppConfig, MokaTranscriptCache, OpenAIInferenceAdapter, OpenAISpeechAdapter,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voicerelay_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("VoiceRelay v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        environment = %config.environment,
        model = %config.inference.default_model,
        "Configuration loaded"
    );

    // Initialize AI clients and adapters
    let inference_engine = ai_core::OpenAIInferenceEngine::new(config.inference.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize inference: {e}"))?;
    let speech_provider = ai_speech::OpenAISpeechProvider::new(config.speech.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize speech: {e}"))?;

    let inference: Arc<dyn application::ports::InferencePort> =
        Arc::new(OpenAIInferenceAdapter::new(inference_engine));
    let speech: Arc<dyn application::ports::SpeechPort> =
        Arc::new(OpenAISpeechAdapter::new(speech_provider));
    let cache: Arc<dyn application::ports::TranscriptCache> =
        Arc::new(MokaTranscriptCache::with_config(config.cache));

    // Initialize services
    let assistant_service = AssistantService::new(Arc::clone(&inference), Arc::clone(&speech));
    let transcription_service = TranscriptionService::new(Arc::clone(&speech), cache);

    let state = AppState {
        assistant_service: Arc::new(assistant_service),
        transcription_service: Arc::new(transcription_service),
        expose_error_details: config.environment.expose_error_details(),
    };

    // Build router
    let app = routes::create_router(state, config.server.max_body_size_audio_bytes);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // No origins configured: allow any
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // Connection draining is handled by axum's graceful_shutdown
}
