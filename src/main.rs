use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use synthlog::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only records
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting synthlog");

    let app = Application::new()?;
    let summary = app.run().await?;

    info!(
        iterations = summary.iterations,
        records = summary.records_emitted,
        "synthlog stopped"
    );
    Ok(())
}
