use std::net::SocketAddr;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use resume_assistant::config::Config;
use resume_assistant::enhancement::enhancer::{build_enhancer, EnhancerMode};
use resume_assistant::llm_client;
use resume_assistant::routes::build_router;
use resume_assistant::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    resume_assistant::init_tracing(&config.rust_log);

    info!("Starting Resume Assistant v{}", env!("CARGO_PKG_VERSION"));

    match config.mode() {
        EnhancerMode::Live => info!("Live mode enabled (model: {})", llm_client::MODEL),
        EnhancerMode::Demo => warn!(
            "Running in DEMO MODE: no valid OPENAI_API_KEY found. \
             Set OPENAI_API_KEY in .env to use the live model."
        ),
    }

    let enhancer = build_enhancer(&config)?;
    let state = AppState { enhancer };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
