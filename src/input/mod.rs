//! Input adapter
//!
//! Touch joystick and action buttons, translated into semantic events.

mod events;
mod touch;

pub use events::{InputEvent, MoveVector};
pub use touch::{ActionButton, InputSurface, Joystick, TouchPoint, DEFAULT_MAX_RADIUS};
