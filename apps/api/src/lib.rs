pub mod config;
pub mod enhancement;
pub mod errors;
pub mod llm_client;
pub mod routes;
pub mod state;
pub mod status_check;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Structured logging for both binaries. `RUST_LOG` directives win over `default_level`.
pub fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={default_level}",
                env!("CARGO_PKG_NAME").replace('-', "_")
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
