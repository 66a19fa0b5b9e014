//! Presentation capability traits
//!
//! The simulation never touches the host presentation layer directly; it
//! calls into these sinks. Frontends implement them; an absent surface is
//! represented by the null implementations, which drop everything.

use std::time::Duration;

use super::screen::ScreenFilter;

/// Text surfaces the clock and input consumers write to
pub trait DisplaySink {
    /// Update the on-screen clock text
    fn set_time_text(&mut self, text: &str);

    /// Update the objective line. `emphasized` requests the urgent styling.
    fn set_objective(&mut self, text: &str, emphasized: bool);

    /// Show a short interaction hint
    fn show_hint(&mut self, text: &str);
}

/// Cosmetic full-screen effects
pub trait EffectSink {
    /// Replace the current screen filter
    fn apply_filter(&mut self, filter: ScreenFilter);

    /// Shake the screen for the given duration
    fn shake(&mut self, duration: Duration);

    /// Show a transient subtitle near the bottom of the screen
    fn show_subtitle(&mut self, text: &str, duration: Duration);

    /// Briefly override brightness (above 1.0 flares, below dims)
    fn flash(&mut self, brightness: f32, duration: Duration);
}

/// Display sink for a missing display surface
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn set_time_text(&mut self, _text: &str) {}
    fn set_objective(&mut self, _text: &str, _emphasized: bool) {}
    fn show_hint(&mut self, _text: &str) {}
}

/// Effect sink for a missing effect surface
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEffects;

impl EffectSink for NullEffects {
    fn apply_filter(&mut self, _filter: ScreenFilter) {}
    fn shake(&mut self, _duration: Duration) {}
    fn show_subtitle(&mut self, _text: &str, _duration: Duration) {}
    fn flash(&mut self, _brightness: f32, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sinks_absorb_everything() {
        let mut display = NullDisplay;
        display.set_time_text("07:00 AM");
        display.set_objective("Objective: Explore the house", false);
        display.show_hint("Nothing to interact with");

        let mut effects = NullEffects;
        effects.apply_filter(ScreenFilter::NEUTRAL);
        effects.shake(Duration::from_millis(500));
        effects.show_subtitle("...", Duration::from_secs(3));
        effects.flash(1.5, Duration::from_millis(100));
    }
}
