
use storefront_proxy::api::server;

#[cfg(not(feature = "lambda"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load a local .env if present (dev convenience; no-op in deployment)
    let _ = dotenvy::dotenv();

    server::run_server().await
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    use storefront_proxy::{AppState, Settings};

    server::init_tracing();

    // Secrets are read once at cold start and injected into the app state
    let settings = Settings::from_env()
        .map_err(|e| lambda_runtime::Error::from(e.to_string()))?;

    let app = server::create_app(AppState::new(&settings));

    // Run with lambda_web adapter
    lambda_web::run(app).await
}
