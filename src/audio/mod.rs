//! Audio system
//!
//! Fire-and-forget cue playback using the Kira audio library.

pub mod cues;
pub mod player;

pub use cues::CueId;
pub use player::CuePlayer;
