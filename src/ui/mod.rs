//! Terminal frontend
//!
//! The stand-in for the browser host: HUD rendering and keyboard-to-touch
//! mapping.

mod app;
mod hud;

pub use app::App;
pub use hud::{EffectState, Hud};
