use std::sync::Arc;

use item_core::ItemRegistry;
use itemlog::config::AppConfig;
use itemlog::errors::CoreError;
use itemlog::{build_router, logging};
use log::info;

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    let config = AppConfig::from_env()?;
    logging::init_logging(&config.logging.level)?;

    // Estado explícito por instancia de servidor (sin globales)
    let registry = Arc::new(ItemRegistry::new());
    let app = build_router(registry);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("itemlog server listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
