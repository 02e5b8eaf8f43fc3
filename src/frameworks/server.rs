// Framework bootstrap for the match host runtime.

use crate::frameworks::config;
use crate::interface_adapters::serializer::spawn_match_serializers;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{MatchSettings, spawn_match};
use std::io::Result;

/// Loads `.env`, installs the subscriber and routes panics through tracing.
fn init_runtime() {
    // A missing .env is the normal case outside local runs.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config::DEFAULT_LOG_FILTER));
    let fmt = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match config::log_format() {
        config::LogFormat::Json => fmt.json().with_current_span(true).init(),
        config::LogFormat::Compact => fmt.compact().init(),
    }

    // A panic in the world task would otherwise only reach stderr.
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        let location = info.location().map(|l| format!("{}:{}", l.file(), l.line()));
        tracing::error!(%info, ?location, ?backtrace, "match host panicked");
    }));
}

/// Spawns the world task and its serializers.
pub fn build_state(settings: MatchSettings) -> AppState {
    tracing::debug!(
        tick_ms = settings.tick_interval.as_millis(),
        countdown_secs = settings.countdown.as_secs(),
        time_limit_secs = settings.match_time_limit.as_secs(),
        points_to_win = settings.game.rules.points_to_win,
        "match configured"
    );
    let capacity = settings.world_broadcast_capacity;
    let game = spawn_match(settings);
    let wire = spawn_match_serializers(&game, capacity);
    AppState { game, wire }
}

/// Hosts one match until ctrl-c.
pub async fn run(settings: MatchSettings) -> Result<()> {
    let state = build_state(settings);
    tracing::info!("match host started");

    let result = tokio::signal::ctrl_c().await.inspect_err(|e| {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    });

    tracing::info!("shutting down");
    state.game.shutdown();
    result
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();
    run(config::match_settings()).await
}
