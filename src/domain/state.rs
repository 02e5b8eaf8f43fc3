// Domain-level input and snapshot types.

use crate::domain::{Disc, Player, TeamId, Vector2};

pub type PlayerId = u64;

/// Latest input snapshot for one player. Players read the directional keys;
/// discs read the throw target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Throw target, present only on the tick a throw is commanded.
    pub mouse_down: Option<Vector2>,
}

#[derive(Debug, Clone)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub socket_id: String,
    pub team: TeamId,
    pub position: Vector2,
    pub velocity: Vector2,
    pub has_disc: bool,
    pub has_scored: bool,
    pub stalled_out: bool,
    pub in_field: bool,
}

#[derive(Debug, Clone)]
pub struct DiscSnapshot {
    pub position: Vector2,
    pub velocity: Vector2,
    pub angle: f32,
    pub source: Option<PlayerId>,
    pub destroyed: bool,
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id(),
            name: p.name().to_string(),
            socket_id: p.socket_id().to_string(),
            team: p.team.id,
            position: p.position,
            velocity: p.velocity(),
            has_disc: p.has_disc,
            has_scored: p.has_scored(),
            stalled_out: p.stalled_out(),
            in_field: p.in_field(),
        }
    }
}

impl From<&Disc> for DiscSnapshot {
    fn from(d: &Disc) -> Self {
        Self {
            position: d.position,
            velocity: d.velocity(),
            angle: d.angle,
            source: d.source,
            destroyed: d.destroyed,
        }
    }
}
