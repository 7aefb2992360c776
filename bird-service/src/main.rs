use anyhow::Context;
use bird_service::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config)?;

    tracing::info!(
        environment = %config.service.environment,
        "Starting bird service"
    );

    let state = AppState::new(config.clone(), InMemoryBirdRepository::new());

    Server::new(config)
        .serve(app(state))
        .await
        .context("server error")?;

    Ok(())
}
