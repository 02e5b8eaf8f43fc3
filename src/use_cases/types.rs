// Use-case level inputs/outputs for the game loop.

use crate::domain::{DiscSnapshot, PlayerId, PlayerInput, PlayerSnapshot, Score, TeamId};

#[derive(Debug, Clone)]
pub enum GameEvent {
    Join {
        player_id: PlayerId,
        name: String,
        socket_id: String,
    },
    Leave {
        player_id: PlayerId,
    },
    Input {
        player_id: PlayerId,
        input: PlayerInput,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerState {
    Lobby,
    MatchStarting { in_seconds: u32 },
    MatchRunning,
    MatchEnded { winner: Option<TeamId> },
}

/// Rule outcomes produced by one simulation tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    Thrown {
        player_id: PlayerId,
    },
    Caught {
        player_id: PlayerId,
        thrower_id: Option<PlayerId>,
    },
    StalledOut {
        player_id: PlayerId,
    },
    Scored {
        player_id: PlayerId,
        team: TeamId,
        score: Score,
    },
    Won {
        team: TeamId,
    },
}

#[derive(Debug, Clone)]
pub struct WorldUpdate {
    pub tick: u64,
    /// Simulation clock in milliseconds.
    pub clock: f64,
    pub score: Score,
    pub players: Vec<PlayerSnapshot>,
    pub discs: Vec<DiscSnapshot>,
    /// Rule outcomes from this tick.
    pub events: Vec<MatchEvent>,
}
