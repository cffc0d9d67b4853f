//! Entry point: load config, wire dependencies, and run the server.

use keyhold::auth::Argon2Encoder;
use keyhold::config::{Config, StoreBackend};
use keyhold::db;
use keyhold::repositories::{CredentialStore, MemoryCredentialStore, PgCredentialStore};
use keyhold::{create_app, AppState, CredentialService};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store: Arc<dyn CredentialStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let pool = db::create_pool(&config.database_url).await?;
            db::ensure_schema(&pool).await?;
            Arc::new(PgCredentialStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory credential store; users are lost on restart");
            Arc::new(MemoryCredentialStore::new())
        }
    };
    let encoder = Arc::new(Argon2Encoder::new(config.hash_cost)?);
    let credentials = CredentialService::new(store, encoder);
    let state = AppState::new(credentials, config.expose_password_hash);

    let app = create_app(state);

    tracing::info!(addr = %config.server_addr, backend = ?config.store_backend, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
