use axum::{
    routing::{get, post},
    Router,
};
use std::env;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::error::ApiError;
use crate::api::handlers::{deepl_proxy_handler, shopify_proxy_handler, translations_handler};
use crate::api::state::AppState;
use crate::config::Settings;

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json() // JSON format for CloudWatch
                .with_target(false)
                .with_span_events(fmt::format::FmtSpan::CLOSE),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,tower=warn")),
        )
        .init();
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Translation proxy (DeepL)
        .route(
            "/api/deepl",
            post(deepl_proxy_handler).fallback(method_not_allowed),
        )
        // Commerce proxy (Shopify Admin)
        .route(
            "/api/shopify",
            post(shopify_proxy_handler).fallback(method_not_allowed),
        )
        // Translations store (GitHub contents)
        .route(
            "/api/translations",
            post(translations_handler).fallback(method_not_allowed),
        )
        // Health check endpoint
        .route("/health", get(health_check))
        // Shared upstream clients as state
        .with_state(state)
        // Add tracing layer for observability
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

// Proxy endpoints accept POST only, whatever the body says
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    init_tracing();

    info!("Starting storefront proxy server");

    // Set up ctrl-c handler for graceful shutdown
    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C signal handler");
        info!("Shutting down gracefully...");
    };

    // Secrets and upstream coordinates are read once, up front
    let settings = Settings::from_env()?;
    let app = create_app(AppState::new(&settings));

    // Get the port from environment or use default
    let port = env::var("PORT")
        .unwrap_or_else(|_| "8788".to_string())
        .parse::<u16>()?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("Server listening on {}", addr);

    // Run the server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
