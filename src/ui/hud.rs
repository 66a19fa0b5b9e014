//! HUD state fed by the simulation
//!
//! Implements the presentation sinks. Transient pieces (hint, subtitle,
//! shake, flash) carry their expiry instant and simply read as absent
//! once it passes.

use std::time::{Duration, Instant};

use crate::fx::{DisplaySink, EffectSink, ScreenFilter};

/// How long an interaction hint stays up
const HINT_HOLD: Duration = Duration::from_secs(2);

/// Text surfaces of the HUD
#[derive(Debug, Clone)]
pub struct Hud {
    time_text: String,
    objective: String,
    objective_emphasized: bool,
    hint: Option<(String, Instant)>,
}

impl Hud {
    pub fn new() -> Self {
        Self {
            time_text: "--:-- --".to_string(),
            objective: "Objective: Explore the house".to_string(),
            objective_emphasized: false,
            hint: None,
        }
    }

    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    pub fn objective(&self) -> (&str, bool) {
        (&self.objective, self.objective_emphasized)
    }

    /// The hint, if one is still live at `now`
    pub fn hint(&self, now: Instant) -> Option<&str> {
        self.hint
            .as_ref()
            .filter(|(_, until)| now < *until)
            .map(|(text, _)| text.as_str())
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for Hud {
    fn set_time_text(&mut self, text: &str) {
        self.time_text = text.to_string();
    }

    fn set_objective(&mut self, text: &str, emphasized: bool) {
        self.objective = text.to_string();
        self.objective_emphasized = emphasized;
    }

    fn show_hint(&mut self, text: &str) {
        self.hint = Some((text.to_string(), Instant::now() + HINT_HOLD));
    }
}

/// Cosmetic effect state of the HUD
#[derive(Debug, Clone)]
pub struct EffectState {
    filter: ScreenFilter,
    shake_until: Option<Instant>,
    subtitle: Option<(String, Instant)>,
    flash: Option<(f32, Instant)>,
}

impl EffectState {
    pub fn new() -> Self {
        Self {
            filter: ScreenFilter::NEUTRAL,
            shake_until: None,
            subtitle: None,
            flash: None,
        }
    }

    pub fn filter(&self) -> ScreenFilter {
        self.filter
    }

    /// Brightness with any live flash override applied
    pub fn effective_brightness(&self, now: Instant) -> f32 {
        match &self.flash {
            Some((brightness, until)) if now < *until => *brightness,
            _ => self.filter.brightness,
        }
    }

    pub fn is_shaking(&self, now: Instant) -> bool {
        self.shake_until.is_some_and(|until| now < until)
    }

    /// The subtitle, if one is still live at `now`
    pub fn subtitle(&self, now: Instant) -> Option<&str> {
        self.subtitle
            .as_ref()
            .filter(|(_, until)| now < *until)
            .map(|(text, _)| text.as_str())
    }
}

impl Default for EffectState {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectSink for EffectState {
    fn apply_filter(&mut self, filter: ScreenFilter) {
        self.filter = filter;
    }

    fn shake(&mut self, duration: Duration) {
        self.shake_until = Some(Instant::now() + duration);
    }

    fn show_subtitle(&mut self, text: &str, duration: Duration) {
        self.subtitle = Some((text.to_string(), Instant::now() + duration));
    }

    fn flash(&mut self, brightness: f32, duration: Duration) {
        self.flash = Some((brightness, Instant::now() + duration));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_expires() {
        let mut hud = Hud::new();
        hud.show_hint("Nothing to interact with");
        let now = Instant::now();
        assert_eq!(hud.hint(now), Some("Nothing to interact with"));
        assert_eq!(hud.hint(now + Duration::from_secs(3)), None);
    }

    #[test]
    fn test_subtitle_expires() {
        let mut effects = EffectState::new();
        effects.show_subtitle("...find the stick...", Duration::from_secs(3));
        let now = Instant::now();
        assert_eq!(effects.subtitle(now), Some("...find the stick..."));
        assert_eq!(effects.subtitle(now + Duration::from_secs(4)), None);
    }

    #[test]
    fn test_flash_overrides_brightness() {
        let mut effects = EffectState::new();
        effects.apply_filter(ScreenFilter {
            brightness: 0.6,
            hue_rotate_deg: 0.0,
            grayscale: 0.0,
        });
        effects.flash(1.5, Duration::from_millis(100));
        let now = Instant::now();
        assert_eq!(effects.effective_brightness(now), 1.5);
        assert_eq!(
            effects.effective_brightness(now + Duration::from_secs(1)),
            0.6
        );
    }

    #[test]
    fn test_shake_window() {
        let mut effects = EffectState::new();
        let now = Instant::now();
        assert!(!effects.is_shaking(now));
        effects.shake(Duration::from_millis(500));
        assert!(effects.is_shaking(now));
        assert!(!effects.is_shaking(now + Duration::from_secs(1)));
    }
}
