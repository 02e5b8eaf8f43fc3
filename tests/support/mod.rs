// Shared helpers for driving a live world task from integration tests.
use std::time::Duration;

use tokio::sync::broadcast::{self, error::RecvError};
use ultimate_server::domain::GameConfig;
use ultimate_server::use_cases::{MatchSettings, WorldUpdate};

// Upper bound for any single wait so a broken loop fails instead of hanging.
pub const WAIT: Duration = Duration::from_secs(2);

// Settings with no countdown and a fast tick so tests finish quickly.
pub fn fast_settings() -> MatchSettings {
    MatchSettings {
        input_channel_capacity: 64,
        world_broadcast_capacity: 64,
        tick_interval: Duration::from_millis(5),
        countdown: Duration::ZERO,
        match_time_limit: Duration::ZERO,
        game: GameConfig::default(),
    }
}

// Wait for the first world update that satisfies `pred`.
pub async fn next_update_where<F>(
    rx: &mut broadcast::Receiver<WorldUpdate>,
    pred: F,
) -> WorldUpdate
where
    F: Fn(&WorldUpdate) -> bool,
{
    tokio::time::timeout(WAIT, async {
        loop {
            match rx.recv().await {
                Ok(update) if pred(&update) => break update,
                Ok(_) | Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => panic!("world channel closed"),
            }
        }
    })
    .await
    .expect("timed out waiting for world update")
}
