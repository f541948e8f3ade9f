//! Snake & Ladder engine - Main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snakeladder_engine::{
    api,
    infrastructure::{config::EngineConfig, random::SystemRandom},
    App,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snakeladder_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Snake & Ladder Engine");

    let config = EngineConfig::from_env()?;
    tracing::info!(
        first = %config.player_names.first,
        second = %config.player_names.second,
        observer_buffer = config.observer_buffer,
        "Configuration loaded"
    );

    let app = Arc::new(App::new(&config, Arc::new(SystemRandom::new())));

    let mut router = api::router(app);
    if let Some(cors) = config.cors_layer() {
        router = router.layer(cors);
    }

    // Start server
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
