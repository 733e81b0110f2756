use std::sync::Arc;

use loreseek::api;
use loreseek::config::Config;
use loreseek::summarizer::Summarizer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr.clone();
    let summarizer = Arc::new(Summarizer::new(&config));

    let app = api::create_router(summarizer);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
