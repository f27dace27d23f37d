pub mod handlers;
pub mod render;

use crate::core::checker::InteractionChecker;
use crate::core::rxnav::RxNavSettings;
use crate::core::ConfigProvider;
use crate::utils::error::{RxError, Result};
use handlers::{create_router, AppState};
use tokio::net::TcpListener;

/// Builds the checker from `config` and serves until the process is stopped.
pub async fn start_server<C: ConfigProvider>(config: &C) -> Result<()> {
    let settings = RxNavSettings::from_config(config);
    let checker = InteractionChecker::from_settings(&settings, config.locale())?;
    let state = AppState::new(checker, config.title());

    tracing::info!("RxNav base URL: {}", settings.base_url);
    tracing::info!("Upstream timeout: {:?}", settings.timeout);
    tracing::info!("Locale: {}", config.locale());

    let app = create_router(state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("🚀 Listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RxError::ServerError {
            message: e.to_string(),
        })?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
