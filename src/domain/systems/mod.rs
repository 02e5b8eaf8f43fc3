// Match rules that span several entities.

pub mod possession;
pub mod spacing;
pub mod spawn;
