//! World state and the game director
//!
//! `WorldState` is the shared-state handle the clock, the input consumers
//! and external collaborators read and write. `Game` owns the simulation
//! pieces and drives them from the host loop.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::audio::{CueId, CuePlayer};
use crate::clock::{play_vignette, GameClock, NarrativeTrigger, Schedule, VignetteSampler};
use crate::config::Config;
use crate::fx::{filter_for_hour, DisplaySink, EffectSink};
use crate::input::InputEvent;

/// Battery percent drained by one flashlight toggle
const FLASHLIGHT_DRAIN: u8 = 5;

/// Brightness spike when the flashlight toggles
const FLASHLIGHT_FLASH: f32 = 1.5;
const FLASHLIGHT_FLASH_LEN: Duration = Duration::from_millis(100);

/// Shared game state surface.
///
/// `time` mirrors the clock after every tick; the flags are written by
/// narrative triggers and read by the vignette sampler and external
/// collaborators. `game_complete` is set from outside when the ritual is
/// done.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldState {
    /// Hours of day in [0, 24)
    pub time: f32,
    /// The haunting has started
    pub creepy_events_started: bool,
    /// The ritual is complete
    pub game_complete: bool,
    /// The demon is loose
    pub demon_active: bool,
    /// The night has reached its final escalation
    pub horror_peak: bool,
    /// Flashlight currently on
    pub flashlight_on: bool,
    /// Flashlight battery percent (0 - 100)
    pub battery: u8,
}

impl Default for WorldState {
    fn default() -> Self {
        Self {
            time: 0.0,
            creepy_events_started: false,
            game_complete: false,
            demon_active: false,
            horror_peak: false,
            flashlight_on: false,
            battery: 100,
        }
    }
}

/// The main game struct: owns the world state, the clock, the vignette
/// sampler, the cue player and the RNG, and routes everything between
/// them.
pub struct Game {
    state: WorldState,
    clock: GameClock,
    sampler: VignetteSampler,
    cues: CuePlayer,
    rng: StdRng,
}

impl Game {
    /// Create a new game from config, with the standard night schedule
    pub fn new(config: &Config) -> Self {
        let mut clock = GameClock::new(
            config.start_hour,
            config.real_seconds_per_game_hour,
            Schedule::standard(),
        );
        clock.set_time_multiplier(config.time_multiplier);

        Self {
            state: WorldState {
                time: clock.time(),
                ..WorldState::default()
            },
            clock,
            sampler: VignetteSampler::new(config.vignette_poll_secs, config.vignette_chance),
            cues: CuePlayer::new(config.master_volume, config.sfx_volume),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// External collaborators mutate shared flags through this
    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn sampler(&self) -> &VignetteSampler {
        &self.sampler
    }

    /// Get mutable access to the cue player
    pub fn audio(&mut self) -> &mut CuePlayer {
        &mut self.cues
    }

    /// Start the night
    pub fn start(&mut self) {
        log::info!("Night begins at {}", self.clock.formatted_time());
        self.clock.start();
    }

    /// Advance the simulation by one frame of real time.
    ///
    /// Within each tick the order is fixed: time update, trigger
    /// check/fire, display refresh. Sampler polls run after the ticks.
    pub fn update(
        &mut self,
        delta: Duration,
        display: &mut dyn DisplaySink,
        effects: &mut dyn EffectSink,
    ) {
        let due = self.clock.update(delta);
        for _ in 0..due {
            let Some(report) = self.clock.tick() else {
                continue;
            };
            self.state.time = report.time;
            for trigger in report.fired {
                self.run_trigger(trigger, display);
            }
            display.set_time_text(&self.clock.formatted_time());
            effects.apply_filter(filter_for_hour(self.clock.hour(), self.clock.is_frozen()));
        }

        let vignettes =
            self.sampler
                .update(delta, self.state.creepy_events_started, &mut self.rng);
        for vignette in vignettes {
            play_vignette(vignette, &mut self.cues, effects);
        }
    }

    /// Execute a one-shot narrative trigger
    fn run_trigger(&mut self, trigger: NarrativeTrigger, display: &mut dyn DisplaySink) {
        match trigger {
            NarrativeTrigger::CreepyEventsBegin => {
                log::info!("Creepy events starting");
                self.state.creepy_events_started = true;
                self.cues.play(CueId::CreepyStart);
                display.set_objective("Objective: Find the stick QUICKLY!", true);
                self.sampler.arm();
            }
            NarrativeTrigger::TimeFreeze => {
                // The freeze only lands while the ritual is unfinished
                if !self.state.game_complete {
                    log::info!("Time frozen - complete the ritual");
                    self.clock.freeze();
                    self.cues.play(CueId::TimeFreeze);
                }
            }
            NarrativeTrigger::DemonAppears => {
                log::info!("The demon is loose");
                self.state.demon_active = true;
                self.cues.play(CueId::DemonSpawn);
                display.set_objective("Objective: Do not let it see you", true);
            }
            NarrativeTrigger::HorrorPeak => {
                log::info!("Peak horror");
                self.state.horror_peak = true;
                self.cues.play(CueId::HorrorPeak);
            }
        }
    }

    /// Consume one semantic input event
    pub fn apply(
        &mut self,
        event: InputEvent,
        display: &mut dyn DisplaySink,
        effects: &mut dyn EffectSink,
    ) {
        match event {
            // Movement is the player controller's concern
            InputEvent::Move(vector) => log::trace!("move vector ({}, {})", vector.x, vector.y),
            InputEvent::Jump => log::debug!("jump"),
            InputEvent::Interact => display.show_hint("Nothing to interact with"),
            InputEvent::ToggleFlashlight => self.toggle_flashlight(effects),
            InputEvent::TogglePause => self.toggle_pause(),
        }
    }

    /// Toggle the flashlight, draining battery. Refused on a dead battery.
    pub fn toggle_flashlight(&mut self, effects: &mut dyn EffectSink) {
        if self.state.battery == 0 {
            log::debug!("flashlight battery dead");
            return;
        }
        self.state.battery = self.state.battery.saturating_sub(FLASHLIGHT_DRAIN);
        self.state.flashlight_on = !self.state.flashlight_on;
        self.cues.play(CueId::FlashlightClick);
        effects.flash(FLASHLIGHT_FLASH, FLASHLIGHT_FLASH_LEN);
    }

    /// Toggle the pause gate on the clock
    pub fn toggle_pause(&mut self) {
        if self.clock.is_paused() {
            self.clock.resume();
        } else {
            self.clock.pause();
        }
        log::info!(
            "clock {}",
            if self.clock.is_paused() { "paused" } else { "resumed" }
        );
    }

    /// Set the time of day directly, with an immediate display refresh
    pub fn set_time(
        &mut self,
        hours: f32,
        display: &mut dyn DisplaySink,
        effects: &mut dyn EffectSink,
    ) {
        self.clock.set_time(hours);
        self.state.time = self.clock.time();
        display.set_time_text(&self.clock.formatted_time());
        effects.apply_filter(filter_for_hour(self.clock.hour(), self.clock.is_frozen()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::ScreenFilter;

    #[derive(Default)]
    struct RecordingDisplay {
        time_texts: Vec<String>,
        objectives: Vec<(String, bool)>,
        hints: Vec<String>,
    }

    impl DisplaySink for RecordingDisplay {
        fn set_time_text(&mut self, text: &str) {
            self.time_texts.push(text.to_string());
        }
        fn set_objective(&mut self, text: &str, emphasized: bool) {
            self.objectives.push((text.to_string(), emphasized));
        }
        fn show_hint(&mut self, text: &str) {
            self.hints.push(text.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingEffects {
        filters: Vec<ScreenFilter>,
        shakes: usize,
        subtitles: Vec<String>,
        flashes: usize,
    }

    impl EffectSink for RecordingEffects {
        fn apply_filter(&mut self, filter: ScreenFilter) {
            self.filters.push(filter);
        }
        fn shake(&mut self, _duration: Duration) {
            self.shakes += 1;
        }
        fn show_subtitle(&mut self, text: &str, _duration: Duration) {
            self.subtitles.push(text.to_string());
        }
        fn flash(&mut self, _brightness: f32, _duration: Duration) {
            self.flashes += 1;
        }
    }

    fn game_at(start_hour: f32) -> Game {
        let config = Config {
            start_hour,
            ..Config::default()
        };
        let mut game = Game::new(&config);
        game.start();
        game
    }

    #[test]
    fn test_tick_updates_state_and_display() {
        let mut game = game_at(7.0);
        let mut display = RecordingDisplay::default();
        let mut effects = RecordingEffects::default();

        game.update(Duration::from_secs(2), &mut display, &mut effects);

        assert!((game.state().time - (7.0 + 2.0 / 60.0)).abs() < 1e-4);
        assert_eq!(display.time_texts.len(), 2);
        assert_eq!(display.time_texts.last().unwrap(), "07:02 AM");
        assert_eq!(effects.filters.len(), 2);
        assert!(effects.filters.last().unwrap().is_neutral());
    }

    #[test]
    fn test_creepy_events_trigger() {
        let mut game = game_at(11.999);
        let mut display = RecordingDisplay::default();
        let mut effects = RecordingEffects::default();

        game.update(Duration::from_secs(1), &mut display, &mut effects);

        assert!(game.state().creepy_events_started);
        assert!(game.sampler().is_armed());
        assert_eq!(
            display.objectives,
            vec![("Objective: Find the stick QUICKLY!".to_string(), true)]
        );
    }

    #[test]
    fn test_freeze_trigger_gated_on_completion() {
        let mut game = game_at(14.999);
        game.state_mut().game_complete = true;
        let mut display = RecordingDisplay::default();
        let mut effects = RecordingEffects::default();

        game.update(Duration::from_secs(1), &mut display, &mut effects);
        assert!(!game.clock().is_frozen());

        // An unfinished ritual does get frozen
        let mut game = game_at(14.999);
        game.update(Duration::from_secs(1), &mut display, &mut effects);
        assert!(game.clock().is_frozen());
        assert_eq!(effects.filters.last().unwrap().grayscale, 0.5);
    }

    #[test]
    fn test_frozen_clock_stops_advancing() {
        let mut game = game_at(14.999);
        let mut display = RecordingDisplay::default();
        let mut effects = RecordingEffects::default();

        game.update(Duration::from_secs(1), &mut display, &mut effects);
        let frozen_at = game.state().time;
        game.update(Duration::from_secs(30), &mut display, &mut effects);
        assert_eq!(game.state().time, frozen_at);
    }

    #[test]
    fn test_flashlight_drains_battery() {
        let mut game = game_at(7.0);
        let mut effects = RecordingEffects::default();

        game.toggle_flashlight(&mut effects);
        assert!(game.state().flashlight_on);
        assert_eq!(game.state().battery, 95);
        assert_eq!(effects.flashes, 1);

        for _ in 0..19 {
            game.toggle_flashlight(&mut effects);
        }
        assert_eq!(game.state().battery, 0);
        assert_eq!(effects.flashes, 20);

        // Dead battery refuses the toggle
        let was_on = game.state().flashlight_on;
        game.toggle_flashlight(&mut effects);
        assert_eq!(game.state().flashlight_on, was_on);
        assert_eq!(effects.flashes, 20);
    }

    #[test]
    fn test_interact_shows_hint() {
        let mut game = game_at(7.0);
        let mut display = RecordingDisplay::default();
        let mut effects = RecordingEffects::default();

        game.apply(InputEvent::Interact, &mut display, &mut effects);
        assert_eq!(display.hints, vec!["Nothing to interact with".to_string()]);
    }

    #[test]
    fn test_pause_toggle_gates_time() {
        let mut game = game_at(7.0);
        let mut display = RecordingDisplay::default();
        let mut effects = RecordingEffects::default();

        game.apply(InputEvent::TogglePause, &mut display, &mut effects);
        assert!(game.clock().is_paused());
        game.update(Duration::from_secs(5), &mut display, &mut effects);
        assert!((game.state().time - 7.0).abs() < 1e-6);

        game.apply(InputEvent::TogglePause, &mut display, &mut effects);
        assert!(!game.clock().is_paused());
        game.update(Duration::from_secs(1), &mut display, &mut effects);
        assert!(game.state().time > 7.0);
    }

    #[test]
    fn test_set_time_refreshes_display() {
        let mut game = game_at(7.0);
        let mut display = RecordingDisplay::default();
        let mut effects = RecordingEffects::default();

        game.set_time(20.5, &mut display, &mut effects);
        assert_eq!(display.time_texts, vec!["08:30 PM".to_string()]);
        let filter = effects.filters.last().unwrap();
        assert!((filter.brightness - 0.8).abs() < 1e-6);
        assert!((game.state().time - 20.5).abs() < 1e-6);
    }
}
