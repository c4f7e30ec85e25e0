mod config;
mod routes;

use std::process::ExitCode;

use config::{ServerConfig, ServerError};

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "gym-tracker server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, "gym-tracker listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
