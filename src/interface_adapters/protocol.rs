// Wire DTOs and conversions for what the simulation consumes and publishes.

use crate::domain::{DiscSnapshot, PlayerId, PlayerInput, PlayerSnapshot, Score, TeamId, Vector2};
use crate::use_cases::{MatchEvent, ServerState, WorldUpdate};
use serde::{Deserialize, Serialize};

/// Messages the server publishes to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    // Snapshot of the world for a given tick.
    WorldUpdate(WorldUpdateDto),
    // High-level match state transitions.
    GameState(ServerStateDto),
}

/// Per-tick input payload. Missing keys read as "not pressed"; a missing
/// `mouse_down` means no throw this tick.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerInputDto {
    #[serde(default)]
    pub up: bool,
    #[serde(default)]
    pub down: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default, alias = "mouseDown")]
    pub mouse_down: Option<[f32; 2]>,
}

impl From<PlayerInputDto> for PlayerInput {
    fn from(input: PlayerInputDto) -> Self {
        Self {
            up: input.up,
            down: input.down,
            left: input.left,
            right: input.right,
            mouse_down: input.mouse_down.map(Vector2::from_array),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdateDto {
    pub tick: u64,
    pub clock: f64,
    pub score: Score,
    pub players: Vec<PlayerStateDto>,
    pub discs: Vec<DiscStateDto>,
    pub events: Vec<MatchEventDto>,
}

impl From<WorldUpdate> for WorldUpdateDto {
    fn from(update: WorldUpdate) -> Self {
        Self {
            tick: update.tick,
            clock: update.clock,
            score: update.score,
            players: update.players.iter().map(PlayerStateDto::from).collect(),
            discs: update.discs.iter().map(DiscStateDto::from).collect(),
            events: update.events.iter().map(MatchEventDto::from).collect(),
        }
    }
}

/// Flattened player state for wire transmission.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerStateDto {
    pub id: String,
    pub name: String,
    pub socket_id: String,
    pub team: TeamId,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub has_disc: bool,
    pub has_scored: bool,
    pub stalled_out: bool,
    pub in_field: bool,
}

impl From<&PlayerSnapshot> for PlayerStateDto {
    fn from(p: &PlayerSnapshot) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            socket_id: p.socket_id.clone(),
            team: p.team,
            x: p.position.x,
            y: p.position.y,
            vx: p.velocity.x,
            vy: p.velocity.y,
            has_disc: p.has_disc,
            has_scored: p.has_scored,
            stalled_out: p.stalled_out,
            in_field: p.in_field,
        }
    }
}

/// Flattened disc state for wire transmission.
#[derive(Debug, Clone, Serialize)]
pub struct DiscStateDto {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub angle: f32,
    pub source_id: Option<String>,
    pub destroyed: bool,
}

impl From<&DiscSnapshot> for DiscStateDto {
    fn from(d: &DiscSnapshot) -> Self {
        Self {
            x: d.position.x,
            y: d.position.y,
            vx: d.velocity.x,
            vy: d.velocity.y,
            angle: d.angle,
            source_id: d.source.map(|id| id.to_string()),
            destroyed: d.destroyed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum MatchEventDto {
    Thrown {
        player_id: String,
    },
    Caught {
        player_id: String,
        thrower_id: Option<String>,
    },
    StalledOut {
        player_id: String,
    },
    Scored {
        player_id: String,
        team: TeamId,
        score: Score,
    },
    Won {
        team: TeamId,
    },
}

fn wire_id(id: PlayerId) -> String {
    id.to_string()
}

impl From<&MatchEvent> for MatchEventDto {
    fn from(event: &MatchEvent) -> Self {
        match *event {
            MatchEvent::Thrown { player_id } => MatchEventDto::Thrown {
                player_id: wire_id(player_id),
            },
            MatchEvent::Caught {
                player_id,
                thrower_id,
            } => MatchEventDto::Caught {
                player_id: wire_id(player_id),
                thrower_id: thrower_id.map(wire_id),
            },
            MatchEvent::StalledOut { player_id } => MatchEventDto::StalledOut {
                player_id: wire_id(player_id),
            },
            MatchEvent::Scored {
                player_id,
                team,
                score,
            } => MatchEventDto::Scored {
                player_id: wire_id(player_id),
                team,
                score,
            },
            MatchEvent::Won { team } => MatchEventDto::Won { team },
        }
    }
}

/// Match lifecycle state sent to clients for UI flow.
#[derive(Debug, Clone, Serialize)]
pub enum ServerStateDto {
    Lobby,
    MatchStarting { in_seconds: u32 },
    MatchRunning,
    MatchEnded { winner: Option<TeamId> },
}

impl From<ServerState> for ServerStateDto {
    fn from(state: ServerState) -> Self {
        match state {
            ServerState::Lobby => ServerStateDto::Lobby,
            ServerState::MatchStarting { in_seconds } => {
                ServerStateDto::MatchStarting { in_seconds }
            }
            ServerState::MatchRunning => ServerStateDto::MatchRunning,
            ServerState::MatchEnded { winner } => ServerStateDto::MatchEnded { winner },
        }
    }
}
