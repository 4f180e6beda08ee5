use std::sync::Arc;

use tracing::info;

use booktrack::config::Config;
use booktrack::service;
use booktrack::{handlers, JsonDirStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let store = JsonDirStore::new(&config.data_dir)?;
    let svc = Arc::new(handlers::service(store));

    info!(
        addr = %config.addr,
        data_dir = %config.data_dir.display(),
        "starting booktrack"
    );
    service::serve(svc, &config.addr).await?;

    Ok(())
}
