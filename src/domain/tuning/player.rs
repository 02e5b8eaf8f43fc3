/// Gameplay tuning for players.
///
/// Keep this separate from runtime/server configuration (tick rates, buffer sizes, etc.).
/// Distances are world units, times are milliseconds.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTuning {
    /// Movement speed in world units per millisecond.
    pub speed: f32,

    /// Hitbox radius; also the reach for catching a disc.
    pub radius: f32,

    /// How long a player may hold the disc before being stalled out.
    pub stall_out_time: f32,

    /// Minimum distance other players must keep from the disc holder.
    pub disc_space_radius: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 0.2,
            radius: 10.0,
            stall_out_time: 10_000.0,
            disc_space_radius: 40.0,
        }
    }
}
