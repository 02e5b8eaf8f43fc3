// Domain-level errors for simulation workflows.

use crate::domain::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowError {
    /// The throw target is the disc's own position, so there is no direction.
    ZeroLengthThrow,
    /// The throw target is NaN or infinite.
    NonFiniteTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    AlreadyJoined(PlayerId),
    UnknownPlayer(PlayerId),
    TeamFull,
}
