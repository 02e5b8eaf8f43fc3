use crate::domain::GameConfig;
use crate::use_cases::MatchSettings;
use std::{env, time::Duration};

// Runtime/server constants (not gameplay tuning).

pub const INPUT_CHANNEL_CAPACITY: usize = 1024;
pub const WORLD_BROADCAST_CAPACITY: usize = 128;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000 / 60);
pub const DEFAULT_MATCH_COUNTDOWN: Duration = Duration::from_secs(3);
// Default time limit for a match (0 disables it).
pub const DEFAULT_MATCH_TIME_LIMIT: Duration = Duration::from_secs(1200);

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON lines; anything else is compact text.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

pub fn log_format() -> LogFormat {
    env::var("LOG_FORMAT")
        .map(|raw| LogFormat::parse(&raw))
        .unwrap_or(LogFormat::Compact)
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

pub fn tick_interval() -> Duration {
    // A zero period would stall the tick loop, so it falls back to the default.
    env_parse::<u64>("TICK_INTERVAL_MS")
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TICK_INTERVAL)
}

pub fn match_countdown() -> Duration {
    env_parse::<u64>("MATCH_COUNTDOWN_SECS")
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_MATCH_COUNTDOWN)
}

pub fn match_time_limit() -> Duration {
    env_parse::<u64>("MATCH_TIME_LIMIT_SECS")
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_MATCH_TIME_LIMIT)
}

/// Gameplay tuning with the few knobs operators are allowed to turn.
pub fn game_config() -> GameConfig {
    let mut config = GameConfig::default();
    if let Some(points) = env_parse::<u32>("POINTS_TO_WIN") {
        config.rules.points_to_win = points;
    }
    if let Some(size) = env_parse::<usize>("MAX_TEAM_SIZE").filter(|n| *n > 0) {
        config.rules.max_team_size = size;
    }
    let stall = env_parse::<f32>("STALL_OUT_TIME_MS").filter(|ms| ms.is_finite() && *ms > 0.0);
    if let Some(ms) = stall {
        config.player.stall_out_time = ms;
    }
    config
}

pub fn match_settings() -> MatchSettings {
    MatchSettings {
        input_channel_capacity: INPUT_CHANNEL_CAPACITY,
        world_broadcast_capacity: WORLD_BROADCAST_CAPACITY,
        tick_interval: tick_interval(),
        countdown: match_countdown(),
        match_time_limit: match_time_limit(),
        game: game_config(),
    }
}
