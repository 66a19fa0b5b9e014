//! Cue definitions
//!
//! Names every audio cue the night can play and maps it to its asset.

use std::path::Path;

/// Audio cue identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueId {
    // === Narrative beats ===
    /// The haunting begins
    CreepyStart,
    /// The clock locks up
    TimeFreeze,
    /// The demon is loose
    DemonSpawn,
    /// The night's final escalation
    HorrorPeak,

    // === Ambient vignettes ===
    DoorSlam,
    Whisper,
    LightFlicker,
    ShadowFigure,

    // === Interface ===
    /// Flashlight toggle click
    FlashlightClick,
}

impl CueId {
    /// Get the file path for this cue
    pub fn file_path(&self) -> &'static str {
        match self {
            CueId::CreepyStart => "assets/cues/creepy_start.ogg",
            CueId::TimeFreeze => "assets/cues/time_freeze.ogg",
            CueId::DemonSpawn => "assets/cues/demon_spawn.ogg",
            CueId::HorrorPeak => "assets/cues/horror_peak.ogg",
            CueId::DoorSlam => "assets/cues/door_slam.ogg",
            CueId::Whisper => "assets/cues/whisper.ogg",
            CueId::LightFlicker => "assets/cues/light_flicker.ogg",
            CueId::ShadowFigure => "assets/cues/shadow_figure.ogg",
            CueId::FlashlightClick => "assets/cues/flashlight_click.ogg",
        }
    }

    /// Get the base volume for this cue (0.0 - 1.0)
    pub fn default_volume(&self) -> f64 {
        match self {
            // Quieter ambience
            CueId::Whisper => 0.5,
            CueId::FlashlightClick => 0.4,

            // Louder scares
            CueId::DoorSlam => 0.8,
            CueId::HorrorPeak => 0.8,

            // Default
            _ => 0.7,
        }
    }

    /// Check if the cue file exists
    pub fn exists(&self) -> bool {
        Path::new(self.file_path()).exists()
    }
}
