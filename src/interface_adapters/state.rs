use crate::interface_adapters::serializer::SerializedMatch;
use crate::use_cases::MatchHandle;

#[derive(Clone)]
pub struct AppState {
    // Channels into and out of the authoritative world task.
    pub game: MatchHandle,
    // Serialized world updates and state changes, shared by every subscriber.
    pub wire: SerializedMatch,
}
