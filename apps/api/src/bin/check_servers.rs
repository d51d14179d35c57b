use anyhow::Result;
use tracing::info;

use resume_assistant::config::StatusCheckConfig;
use resume_assistant::status_check::run_checks;

#[tokio::main]
async fn main() -> Result<()> {
    let config = StatusCheckConfig::from_env()?;

    resume_assistant::init_tracing("warn");

    info!(
        "Checking backend at {} and frontend at {}:{}",
        config.backend_status_url, config.frontend_host, config.frontend_port
    );

    let report = run_checks(&config).await?;
    println!("{report}");

    Ok(())
}
