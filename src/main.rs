mod config;
mod error;
mod routes;

use config::HostConfig;
use error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, api_base = %config.api_base, "marketplace admin listening");
    axum::serve(listener, app).await?;
    Ok(())
}
