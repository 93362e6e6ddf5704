mod api;
mod middleware;

use std::sync::Arc;

use spaguide_catalog::{Catalog, CatalogStore};
use spaguide_notify::Composer;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState, RuntimeOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = spaguide_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let catalog_file = spaguide_core::load_catalog_file(&config.catalog_path)?;
    let catalog = Catalog::from(catalog_file);
    tracing::info!(
        spas = catalog.len(),
        path = %config.catalog_path.display(),
        "catalog loaded"
    );

    let state = AppState {
        store: CatalogStore::new(catalog),
        composer: Arc::new(Composer::new()?),
        options: Arc::new(RuntimeOptions::from_app_config(&config)),
    };
    let app = build_app(state);

    tracing::info!(addr = %config.bind_addr, env = %config.env, "spaguide server listening");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
