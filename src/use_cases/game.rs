use super::simulation::Match;
use super::types::{GameEvent, ServerState, WorldUpdate};
use crate::domain::GameConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tracing::{info, warn};

/// Everything a world task needs to run one match.
#[derive(Debug, Clone)]
pub struct MatchSettings {
    /// Capacity for inbound player events.
    pub input_channel_capacity: usize,
    /// Capacity for broadcast world updates.
    pub world_broadcast_capacity: usize,
    /// Fixed tick interval for the game loop.
    pub tick_interval: Duration,
    /// Delay between `MatchStarting` and `MatchRunning`.
    pub countdown: Duration,
    /// Wall-clock limit for the match (zero disables it).
    pub match_time_limit: Duration,
    pub game: GameConfig,
}

/// Channels for talking to a running world task.
#[derive(Clone)]
pub struct MatchHandle {
    /// Sender for game events into the world task.
    pub input_tx: mpsc::Sender<GameEvent>,
    /// Broadcast sender for per-tick world updates.
    pub world_tx: broadcast::Sender<WorldUpdate>,
    /// Watch sender for high-level server state changes.
    pub server_state_tx: watch::Sender<ServerState>,
    shutdown: Arc<Notify>,
}

impl MatchHandle {
    /// Stops the world task after its current tick.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }
}

/// Wires the channels and spawns the authoritative world task.
pub fn spawn_match(settings: MatchSettings) -> MatchHandle {
    let (input_tx, input_rx) = mpsc::channel::<GameEvent>(settings.input_channel_capacity);
    let (world_tx, _world_rx) =
        broadcast::channel::<WorldUpdate>(settings.world_broadcast_capacity);
    let (server_state_tx, _server_state_rx) = watch::channel::<ServerState>(ServerState::Lobby);
    let shutdown = Arc::new(Notify::new());

    tokio::spawn(world_task(
        input_rx,
        world_tx.clone(),
        server_state_tx.clone(),
        settings,
        shutdown.clone(),
    ));

    MatchHandle {
        input_tx,
        world_tx,
        server_state_tx,
        shutdown,
    }
}

pub async fn world_task(
    mut input_rx: mpsc::Receiver<GameEvent>,
    world_tx: broadcast::Sender<WorldUpdate>,
    server_state_tx: watch::Sender<ServerState>,
    settings: MatchSettings,
    shutdown: Arc<Notify>,
) {
    let mut tick: u64 = 0;
    let mut game = Match::new(settings.game);

    let in_seconds = u32::try_from(settings.countdown.as_secs()).unwrap_or(u32::MAX);
    server_state_tx.send_replace(ServerState::MatchStarting { in_seconds });
    tokio::select! {
        _ = shutdown.notified() => return,
        _ = tokio::time::sleep(settings.countdown) => {}
    }
    server_state_tx.send_replace(ServerState::MatchRunning);
    info!(tick_ms = settings.tick_interval.as_millis(), "match running");

    // Drive the fixed-step game loop at the configured tick rate.
    let mut interval = tokio::time::interval(settings.tick_interval);
    // The simulation runs in milliseconds.
    let dt = settings.tick_interval.as_secs_f32() * 1000.0;

    let mut match_elapsed = Duration::from_secs(0);
    let mut match_ended = false;

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                info!(tick, "world task shutting down");
                break;
            }
            _ = interval.tick() => {}
        }

        while let Ok(ev) = input_rx.try_recv() {
            apply_event(&mut game, ev);
        }

        let mut events = Vec::new();
        if !match_ended {
            events = game.tick(dt);

            match_elapsed += settings.tick_interval;
            let timed_out = settings.match_time_limit != Duration::from_secs(0)
                && match_elapsed >= settings.match_time_limit;
            if game.winner().is_some() || timed_out {
                let winner = game.winner();
                info!(?winner, timed_out, "match ended");
                server_state_tx.send_replace(ServerState::MatchEnded { winner });
                match_ended = true;
            }
        }

        tick += 1;
        let mut update = game.snapshot(tick);
        update.events = events;
        let _ = world_tx.send(update);
    }
}

fn apply_event(game: &mut Match, ev: GameEvent) {
    let result = match ev {
        GameEvent::Join {
            player_id,
            name,
            socket_id,
        } => game.join(player_id, name, socket_id).map(|_| ()),
        GameEvent::Leave { player_id } => game.leave(player_id),
        GameEvent::Input { player_id, input } => game.set_input(player_id, input),
    };

    if let Err(error) = result {
        warn!(?error, "game event rejected");
    }
}
