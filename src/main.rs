use anyhow::Context;
use std::time::Duration as StdDuration;
use time::Duration;

use werewolf_dealer::{
    config::Config, core::CLEANUP_INTERVAL_SECONDS, routes, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over the environment-based default
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .init();

    tracing::info!("🐺 Werewolf dealer starting ({})", config.environment);

    let state = AppState::new();
    spawn_session_cleanup(state.clone(), config.session_ttl_seconds);

    let app = routes::app(state, &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("✅ Listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    tracing::info!("👋 Shutting down");
    Ok(())
}

/// Periodically drop sessions nobody has touched within the TTL
fn spawn_session_cleanup(state: AppState, ttl_seconds: u64) {
    let ttl = Duration::seconds(ttl_seconds.min(i32::MAX as u64) as i64);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(StdDuration::from_secs(CLEANUP_INTERVAL_SECONDS));
        loop {
            interval.tick().await;
            let removed = state.game_manager.write().await.cleanup_stale_sessions(ttl);
            if removed > 0 {
                tracing::info!("🧹 Removed {} idle session(s)", removed);
            }
        }
    });
}
