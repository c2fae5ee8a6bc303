use anyhow::Context;
use bjcta_stop_watch::{
    app::{self, AppConfig},
    config::{
        validation::{validate_endpoint, validate_stop_table},
        STOPS, URL,
    },
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    validate_endpoint(URL)?;
    validate_stop_table(&STOPS)?;
    info!("Loaded {} stops for {}", STOPS.len(), URL);

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let bind_address = config.bind_address.clone();
    let app = app::gen_app(config);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!("Listening on {}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
