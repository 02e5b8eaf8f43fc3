// Serializes world updates once per tick for every subscriber.

use crate::interface_adapters::protocol::{ServerMessage, ServerStateDto, WorldUpdateDto};
use crate::use_cases::{MatchHandle, ServerState, WorldUpdate};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Serialized JSON shared by every subscriber without copying.
pub type WireText = Arc<str>;

/// Encodes one tick as a tagged `WorldUpdate` message.
pub fn encode_world_update(update: WorldUpdate) -> serde_json::Result<WireText> {
    let msg = ServerMessage::WorldUpdate(WorldUpdateDto::from(update));
    serde_json::to_string(&msg).map(WireText::from)
}

/// Turns match ticks into wire text. Each tick is encoded once; every
/// subscriber receives the same `Arc<str>`.
pub async fn world_update_serializer(
    mut world_rx: broadcast::Receiver<WorldUpdate>,
    world_bytes_tx: broadcast::Sender<WireText>,
    world_latest_tx: watch::Sender<WireText>,
) {
    loop {
        let update = match world_rx.recv().await {
            Ok(update) => update,
            Err(broadcast::error::RecvError::Lagged(missed)) => {
                // Later ticks carry the full state, so skipped ones are not replayed.
                warn!(missed, "world serializer fell behind the match");
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => {
                info!("match stopped publishing; world serializer exiting");
                break;
            }
        };

        let tick = update.tick;
        let text = match encode_world_update(update) {
            Ok(text) => text,
            Err(e) => {
                error!(tick, error = ?e, "failed to encode world update");
                continue;
            }
        };

        // Late subscribers start from the newest tick.
        world_latest_tx.send_replace(text.clone());
        let _ = world_bytes_tx.send(text);
    }
}

/// Logs match state transitions and republishes them as wire text.
pub async fn server_state_serializer(
    mut state_rx: watch::Receiver<ServerState>,
    state_text_tx: watch::Sender<WireText>,
) {
    loop {
        let state = state_rx.borrow_and_update().clone();
        info!(?state, "server state changed");
        match serde_json::to_string(&ServerMessage::GameState(ServerStateDto::from(state))) {
            Ok(txt) => {
                state_text_tx.send_replace(Arc::from(txt));
            }
            Err(e) => error!(error = ?e, "failed to serialize server state"),
        }

        if state_rx.changed().await.is_err() {
            break;
        }
    }
}

/// Serialized output channels for one match.
#[derive(Clone)]
pub struct SerializedMatch {
    pub world_bytes_tx: broadcast::Sender<WireText>,
    pub world_latest_tx: watch::Sender<WireText>,
    pub server_state_text_tx: watch::Sender<WireText>,
}

pub fn spawn_match_serializers(handle: &MatchHandle, capacity: usize) -> SerializedMatch {
    let (world_bytes_tx, _world_bytes_rx) = broadcast::channel::<WireText>(capacity);
    let (world_latest_tx, _world_latest_rx) = watch::channel::<WireText>(Arc::from(""));
    let (server_state_text_tx, _state_rx) = watch::channel::<WireText>(Arc::from(""));

    tokio::spawn(world_update_serializer(
        handle.world_tx.subscribe(),
        world_bytes_tx.clone(),
        world_latest_tx.clone(),
    ));
    tokio::spawn(server_state_serializer(
        handle.server_state_tx.subscribe(),
        server_state_text_tx.clone(),
    ));

    SerializedMatch {
        world_bytes_tx,
        world_latest_tx,
        server_state_text_tx,
    }
}
