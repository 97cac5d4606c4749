// Minspeed Input Layer
// Event record and well-known type/code values

pub mod codes;
mod event;

pub use codes::{EventTypeName, RelCodeName};
pub use event::InputEvent;
