//! Real-time game clock
//!
//! Advances a 24-hour time-of-day value on a fixed real-time cadence and
//! fires one-shot scheduled triggers as hours are reached. The cadence is
//! driven by the host loop through a delta-time accumulator; a tick
//! advances the clock by one game minute.

use std::time::Duration;

use super::schedule::{NarrativeTrigger, Schedule};

/// Hours in a game day; time wraps at this value
pub const HOURS_PER_DAY: f32 = 24.0;

/// Game minutes advanced per tick
const MINUTES_PER_TICK: f32 = 1.0;

/// What one clock tick produced
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Time of day after the advance, in [0, 24)
    pub time: f32,
    /// Triggers that became due this tick, already removed from the schedule
    pub fired: Vec<NarrativeTrigger>,
}

/// The game clock.
///
/// Ticks advance time only while `running && !paused && !frozen`; the
/// cadence keeps running through a pause, so resuming does not replay the
/// paused stretch.
#[derive(Debug, Clone)]
pub struct GameClock {
    /// Hours of day in [0, 24)
    time: f32,
    /// Real seconds for one game hour to pass
    real_seconds_per_hour: f32,
    /// Scales how much game time each tick advances
    time_multiplier: f32,
    running: bool,
    paused: bool,
    frozen: bool,
    /// Real time carried toward the next tick
    accumulator: f32,
    schedule: Schedule,
}

impl GameClock {
    pub fn new(start_hour: f32, real_seconds_per_hour: f32, schedule: Schedule) -> Self {
        Self {
            time: start_hour.rem_euclid(HOURS_PER_DAY),
            real_seconds_per_hour,
            time_multiplier: 1.0,
            running: false,
            paused: false,
            frozen: false,
            accumulator: 0.0,
            schedule,
        }
    }

    /// Begin producing ticks
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Lock the clock. There is no thaw; a frozen night stays frozen.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn set_time_multiplier(&mut self, multiplier: f32) {
        self.time_multiplier = multiplier;
    }

    /// Current time of day in hours, always in [0, 24)
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Current integer hour of day (0 - 23)
    pub fn hour(&self) -> u8 {
        self.time as u8
    }

    /// Set the time of day directly, wrapped into [0, 24).
    /// The caller refreshes the display afterwards.
    pub fn set_time(&mut self, hours: f32) {
        self.time = hours.rem_euclid(HOURS_PER_DAY);
    }

    /// Real seconds between ticks
    pub fn tick_interval(&self) -> f32 {
        self.real_seconds_per_hour / 60.0
    }

    /// Accumulate real time; returns how many ticks are due.
    ///
    /// Due ticks accrue even while paused or frozen — the gate is applied
    /// in [`GameClock::tick`], matching a cadence that never stops.
    pub fn update(&mut self, delta: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulator += delta.as_secs_f32();
        let interval = self.tick_interval();
        let mut ticks = 0;
        while self.accumulator >= interval {
            self.accumulator -= interval;
            ticks += 1;
        }
        ticks
    }

    /// One clock tick: advance a game minute, wrap at 24, collect due
    /// triggers. Returns `None` while paused or frozen.
    pub fn tick(&mut self) -> Option<TickReport> {
        if self.paused || self.frozen {
            return None;
        }

        self.time += (MINUTES_PER_TICK / 60.0) * self.time_multiplier;
        if self.time >= HOURS_PER_DAY {
            self.time -= HOURS_PER_DAY;
        }

        let fired = self.schedule.take_due(self.hour());

        Some(TickReport {
            time: self.time,
            fired,
        })
    }

    /// Zero-padded `HH:MM AM/PM` display string
    pub fn formatted_time(&self) -> String {
        format_hours(self.time)
    }

    /// Unpadded-hour 24-hour `H:MM` string
    pub fn formatted_time_24h(&self) -> String {
        format_hours_24h(self.time)
    }
}

/// Format hours-of-day as a zero-padded 12-hour clock string.
pub fn format_hours(time: f32) -> String {
    let hours = time as u32;
    let minutes = (time.fract() * 60.0) as u32;
    let ampm = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{:02}:{:02} {}", display_hours, minutes, ampm)
}

/// Format hours-of-day as a 24-hour `H:MM` string.
pub fn format_hours_24h(time: f32) -> String {
    let hours = time as u32;
    let minutes = (time.fract() * 60.0) as u32;
    format!("{}:{:02}", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_clock(start_hour: f32) -> GameClock {
        let mut clock = GameClock::new(start_hour, 60.0, Schedule::empty());
        clock.start();
        clock
    }

    #[test]
    fn test_tick_advances_one_minute() {
        let mut clock = running_clock(7.0);
        let report = clock.tick().unwrap();
        assert!((report.time - (7.0 + 1.0 / 60.0)).abs() < 1e-5);
    }

    #[test]
    fn test_time_wraps_at_midnight() {
        let mut clock = running_clock(23.98);
        // Three ticks add 0.05 hours: 23.98 + 0.05 wraps to ~0.03
        for _ in 0..3 {
            clock.tick();
        }
        assert!((clock.time() - 0.03).abs() < 1e-4);
        assert!(clock.time() >= 0.0 && clock.time() < HOURS_PER_DAY);
    }

    #[test]
    fn test_update_cadence() {
        let mut clock = running_clock(7.0);
        // ratio 60 -> one tick per real second
        assert_eq!(clock.update(Duration::from_millis(500)), 0);
        assert_eq!(clock.update(Duration::from_millis(500)), 1);
        assert_eq!(clock.update(Duration::from_secs(3)), 3);
    }

    #[test]
    fn test_not_running_yields_no_ticks() {
        let mut clock = GameClock::new(7.0, 60.0, Schedule::empty());
        assert_eq!(clock.update(Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_pause_and_freeze_gate_ticks() {
        let mut clock = running_clock(7.0);
        clock.pause();
        assert!(clock.tick().is_none());
        clock.resume();
        assert!(clock.tick().is_some());

        clock.freeze();
        assert!(clock.tick().is_none());
        // Resume does not thaw a frozen clock
        clock.resume();
        assert!(clock.tick().is_none());
    }

    #[test]
    fn test_time_multiplier() {
        let mut clock = running_clock(7.0);
        clock.set_time_multiplier(2.0);
        let report = clock.tick().unwrap();
        assert!((report.time - (7.0 + 2.0 / 60.0)).abs() < 1e-5);
    }

    #[test]
    fn test_scheduled_hour_fires_once() {
        let mut schedule = Schedule::empty();
        schedule.push(18, NarrativeTrigger::DemonAppears);
        let mut clock = GameClock::new(17.99, 60.0, schedule);
        clock.start();

        let mut fired = Vec::new();
        // Cross 18:00, then wrap the full day and cross it again
        for _ in 0..(24 * 60 + 10) {
            if let Some(report) = clock.tick() {
                fired.extend(report.fired);
            }
        }
        assert_eq!(fired, vec![NarrativeTrigger::DemonAppears]);
    }

    #[test]
    fn test_set_time_wraps() {
        let mut clock = running_clock(7.0);
        clock.set_time(25.5);
        assert!((clock.time() - 1.5).abs() < 1e-6);
        clock.set_time(-1.0);
        assert!((clock.time() - 23.0).abs() < 1e-6);
    }

    #[test]
    fn test_formatted_time() {
        assert_eq!(format_hours(13.5), "01:30 PM");
        assert_eq!(format_hours(0.0), "12:00 AM");
        assert_eq!(format_hours(12.0), "12:00 PM");
        assert_eq!(format_hours(7.25), "07:15 AM");
        assert_eq!(format_hours(23.983), "11:58 PM");
    }

    #[test]
    fn test_formatted_time_24h() {
        assert_eq!(format_hours_24h(13.5), "13:30");
        assert_eq!(format_hours_24h(7.05), "7:03");
        assert_eq!(format_hours_24h(0.0), "0:00");
    }
}
