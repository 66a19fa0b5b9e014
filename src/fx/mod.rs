//! Presentation seams
//!
//! Screen filter math and the capability traits the simulation renders
//! through.

pub mod screen;
pub mod sink;

pub use screen::{filter_for_hour, is_nocturnal, ScreenFilter};
pub use sink::{DisplaySink, EffectSink, NullDisplay, NullEffects};
