use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use advising_buddy::catalog::Catalog;
use advising_buddy::config::AdvisingConfig;
use advising_buddy::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("advising_buddy=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AdvisingConfig::from_env()?;

    // Fail fast on a bad catalog; nothing works without one
    let catalog = Catalog::load(&config.catalog_path)?;

    let addr = config.bind_addr;
    let app = create_router(AppState::new(catalog, config));

    info!("Advising buddy listening on http://{addr}");
    info!("  GET  /health               - Health check");
    info!("  GET  /courses              - List catalog courses");
    info!("  GET  /courses/:id          - Course info (?width=N)");
    info!("  GET  /schedule/template    - Empty schedule layout");
    info!("  POST /schedule/check       - Duplicates, unmet prerequisites, credits");
    info!("  POST /schedule/available   - Courses eligible for a term");
    info!("  POST /schedule/credits     - Credit load range");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
