use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use time_tracking::shared::infrastructure::entry_store::json_file::JsonFileEntryStore;
use time_tracking::shell::config::Config;
use time_tracking::shell::http;
use time_tracking::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let store = Arc::new(JsonFileEntryStore::new(config.data_file.clone()));
    store.initialize().await?;

    let app = http::app(AppState::new(store), config.allowed_origin.clone());

    tracing::info!(
        addr = %config.bind_addr,
        data_file = %config.data_file.display(),
        "time tracking API listening"
    );
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
