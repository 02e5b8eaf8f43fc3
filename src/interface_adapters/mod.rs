// Interface adapters: wire DTOs and the serialization boundary.

pub mod input;
pub mod protocol;
pub mod serializer;
pub mod state;
