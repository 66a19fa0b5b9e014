//! Cue playback using Kira
//!
//! Fire-and-forget playback of named cues. Every failure path degrades
//! silently: a missing backend disables audio, a missing file or rejected
//! playback is logged and dropped.

use std::collections::HashMap;
use std::path::Path;

use kira::{
    manager::{backend::DefaultBackend, AudioManager as KiraManager, AudioManagerSettings},
    sound::static_sound::{StaticSoundData, StaticSoundSettings},
    Volume,
};

use super::cues::CueId;

/// Plays audio cues for the night
pub struct CuePlayer {
    /// Kira audio manager, absent when the backend failed to start
    manager: Option<KiraManager>,
    /// Preloaded cue data
    cues: HashMap<CueId, StaticSoundData>,
    /// Master volume (0.0 - 1.0)
    master_volume: f64,
    /// Cue volume multiplier (0.0 - 1.0)
    sfx_volume: f64,
    /// Whether audio is enabled
    enabled: bool,
}

impl CuePlayer {
    /// Create a new cue player
    pub fn new(master_volume: f64, sfx_volume: f64) -> Self {
        let manager = match KiraManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(m) => {
                log::info!("Audio backend initialized");
                Some(m)
            }
            Err(e) => {
                log::warn!("Failed to initialize audio backend: {}. Audio disabled.", e);
                None
            }
        };

        let mut player = Self {
            manager,
            cues: HashMap::new(),
            master_volume: master_volume.clamp(0.0, 1.0),
            sfx_volume: sfx_volume.clamp(0.0, 1.0),
            enabled: true,
        };

        player.preload_cues();

        player
    }

    /// Preload every cue the night uses
    fn preload_cues(&mut self) {
        let cues_to_preload = [
            CueId::CreepyStart,
            CueId::TimeFreeze,
            CueId::DemonSpawn,
            CueId::HorrorPeak,
            CueId::DoorSlam,
            CueId::Whisper,
            CueId::LightFlicker,
            CueId::ShadowFigure,
            CueId::FlashlightClick,
        ];

        for cue_id in cues_to_preload {
            if let Err(e) = self.load_cue(cue_id) {
                log::debug!("Could not preload cue {:?}: {}", cue_id, e);
            }
        }
    }

    /// Load a cue from file
    fn load_cue(&mut self, cue_id: CueId) -> Result<(), String> {
        if self.cues.contains_key(&cue_id) {
            return Ok(()); // Already loaded
        }

        let path = cue_id.file_path();
        if !Path::new(path).exists() {
            return Err(format!("Cue file not found: {}", path));
        }

        match StaticSoundData::from_file(path) {
            Ok(data) => {
                self.cues.insert(cue_id, data);
                Ok(())
            }
            Err(e) => Err(format!("Failed to load cue {}: {:?}", path, e)),
        }
    }

    /// Play a cue, fire-and-forget
    pub fn play(&mut self, cue_id: CueId) {
        if !self.enabled || self.manager.is_none() {
            return;
        }

        // Try to load if not already loaded (before taking the manager reference)
        if !self.cues.contains_key(&cue_id) {
            if let Err(e) = self.load_cue(cue_id) {
                log::debug!("Cannot play cue {:?}: {}", cue_id, e);
                return;
            }
        }

        let cue_data = match self.cues.get(&cue_id) {
            Some(data) => data.clone(),
            None => return,
        };

        let final_volume = cue_id.default_volume() * self.sfx_volume * self.master_volume;

        let settings = StaticSoundSettings::new().volume(Volume::Amplitude(final_volume));
        let cue_with_settings = cue_data.with_settings(settings);

        if let Some(manager) = &mut self.manager {
            if let Err(e) = manager.play(cue_with_settings) {
                log::debug!("Failed to play cue {:?}: {:?}", cue_id, e);
            }
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, volume: f64) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    pub fn master_volume(&self) -> f64 {
        self.master_volume
    }

    /// Set cue volume multiplier (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, volume: f64) {
        self.sfx_volume = volume.clamp(0.0, 1.0);
    }

    pub fn sfx_volume(&self) -> f64 {
        self.sfx_volume
    }

    /// Enable or disable playback
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if playback is enabled and the backend is up
    pub fn is_enabled(&self) -> bool {
        self.enabled && self.manager.is_some()
    }

    /// Check if the audio backend is available
    pub fn is_available(&self) -> bool {
        self.manager.is_some()
    }
}

impl Default for CuePlayer {
    fn default() -> Self {
        Self::new(1.0, 0.7)
    }
}

// Note: CuePlayer contains Kira's manager which isn't Send/Sync. The game
// is single-threaded, so this isn't a concern.
