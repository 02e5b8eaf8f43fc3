// Shared path from a decoded client input to the world task.

use crate::domain::{PlayerId, PlayerInput};
use crate::interface_adapters::protocol::PlayerInputDto;
use crate::use_cases::GameEvent;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::warn;

#[derive(Debug, PartialEq, Eq)]
pub enum InputError {
    // The world task is gone; the caller should drop the connection.
    InputClosed,
}

/// Whether the input was queued for the next tick.
#[derive(Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Queued,
    Dropped,
}

fn sanitize_input(input: PlayerInput) -> Option<PlayerInput> {
    match input.mouse_down {
        Some(target) if !target.is_finite() => None,
        _ => Some(input),
    }
}

/// Validates an input payload and forwards it without blocking.
///
/// A full channel drops the input rather than stalling the caller; the next
/// input supersedes it anyway.
pub fn submit_input(
    player_id: PlayerId,
    dto: PlayerInputDto,
    input_tx: &mpsc::Sender<GameEvent>,
) -> Result<InputOutcome, InputError> {
    let Some(input) = sanitize_input(PlayerInput::from(dto)) else {
        warn!(player_id, "invalid throw target (NaN/inf); dropping");
        return Ok(InputOutcome::Dropped);
    };

    match input_tx.try_send(GameEvent::Input { player_id, input }) {
        Ok(()) => Ok(InputOutcome::Queued),
        Err(TrySendError::Full(_evt)) => {
            warn!(player_id, "input channel full; dropping input");
            Ok(InputOutcome::Dropped)
        }
        Err(TrySendError::Closed(_evt)) => Err(InputError::InputClosed),
    }
}
