//! Randomized ambient vignettes
//!
//! Memoryless per-poll sampler for small scares once the haunting starts.
//! Each poll is an independent roll; missed rolls do not accumulate.

use std::time::Duration;

use rand::Rng;

use crate::audio::{CueId, CuePlayer};
use crate::fx::EffectSink;

/// Hold time for vignette subtitles
pub const SUBTITLE_HOLD: Duration = Duration::from_secs(3);

/// Screen shake length for the door slam
const SHAKE_LEN: Duration = Duration::from_millis(500);

/// Brightness-dip length for the light flicker
const FLICKER_LEN: Duration = Duration::from_millis(100);

/// How dark the flicker dips the screen
const FLICKER_BRIGHTNESS: f32 = 0.2;

/// Ambient scare variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vignette {
    /// Cue plus a screen shake
    DoorSlam,
    /// Cue plus a transient subtitle
    Whisper,
    /// Cue plus a brightness dip
    LightFlicker,
    /// Cue plus a transient subtitle
    ShadowFigure,
}

impl Vignette {
    pub const ALL: [Vignette; 4] = [
        Vignette::DoorSlam,
        Vignette::Whisper,
        Vignette::LightFlicker,
        Vignette::ShadowFigure,
    ];

    /// The cue this vignette plays
    pub fn cue(&self) -> CueId {
        match self {
            Vignette::DoorSlam => CueId::DoorSlam,
            Vignette::Whisper => CueId::Whisper,
            Vignette::LightFlicker => CueId::LightFlicker,
            Vignette::ShadowFigure => CueId::ShadowFigure,
        }
    }

    /// Subtitle text, for the variants that show one
    pub fn subtitle(&self) -> Option<&'static str> {
        match self {
            Vignette::Whisper => Some("...find the stick..."),
            Vignette::ShadowFigure => Some("something moves in the dark"),
            _ => None,
        }
    }
}

/// Pick one vignette uniformly at random
pub fn sample(rng: &mut impl Rng) -> Vignette {
    Vignette::ALL[rng.gen_range(0..Vignette::ALL.len())]
}

/// Execute a vignette against the cue player and effect surface
pub fn play_vignette(vignette: Vignette, cues: &mut CuePlayer, effects: &mut dyn EffectSink) {
    log::debug!("Vignette: {:?}", vignette);
    cues.play(vignette.cue());
    match vignette {
        Vignette::DoorSlam => effects.shake(SHAKE_LEN),
        Vignette::LightFlicker => effects.flash(FLICKER_BRIGHTNESS, FLICKER_LEN),
        Vignette::Whisper | Vignette::ShadowFigure => {
            if let Some(text) = vignette.subtitle() {
                effects.show_subtitle(text, SUBTITLE_HOLD);
            }
        }
    }
}

/// Polls on a fixed interval and rolls a fixed per-poll probability.
///
/// Armed once by the narrative schedule; additionally gated on the shared
/// haunting flag at every poll, so it never fires while that flag is
/// false, whatever the roll would have been.
#[derive(Debug, Clone)]
pub struct VignetteSampler {
    /// Real seconds between polls
    poll_interval: f32,
    /// Probability a poll produces a vignette
    chance: f64,
    since_last_poll: f32,
    armed: bool,
}

impl VignetteSampler {
    pub fn new(poll_interval_secs: f32, chance: f64) -> Self {
        Self {
            poll_interval: poll_interval_secs,
            chance: chance.clamp(0.0, 1.0),
            since_last_poll: 0.0,
            armed: false,
        }
    }

    /// Start polling. One-way; the sampler runs for the rest of the night.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Accumulate real time and roll each due poll.
    /// Returns the vignettes that fired.
    pub fn update(
        &mut self,
        delta: Duration,
        haunting_active: bool,
        rng: &mut impl Rng,
    ) -> Vec<Vignette> {
        if !self.armed {
            return Vec::new();
        }

        let mut fired = Vec::new();
        self.since_last_poll += delta.as_secs_f32();
        while self.since_last_poll >= self.poll_interval {
            self.since_last_poll -= self.poll_interval;
            if haunting_active && rng.gen_bool(self.chance) {
                fired.push(sample(rng));
            }
        }
        fired
    }
}
