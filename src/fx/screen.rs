//! Screen filter model
//!
//! Computes the cosmetic color filter laid over the scene. The filter is
//! recomputed from scratch on every clock tick as a pure function of the
//! current hour and the freeze flag, so layers never accumulate.

/// Hour at which the darkness ramp begins.
pub const DUSK_HOUR: u8 = 18;

/// Darkness gained per hour past dusk.
const DARKNESS_PER_HOUR: f32 = 0.1;

/// Darkness cap. The screen never goes fully black.
const MAX_DARKNESS: f32 = 0.8;

/// Red shift applied during the nocturnal window, in degrees.
const NIGHT_TINT_DEG: f32 = -30.0;

/// Grayscale amount while time is frozen.
const FREEZE_GRAYSCALE: f32 = 0.5;

/// Composite color filter applied over the whole screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFilter {
    /// Brightness multiplier (1.0 = unchanged)
    pub brightness: f32,
    /// Hue rotation in degrees (negative shifts toward red)
    pub hue_rotate_deg: f32,
    /// Grayscale amount (0.0 - 1.0)
    pub grayscale: f32,
}

impl ScreenFilter {
    /// Filter that leaves the scene untouched
    pub const NEUTRAL: Self = Self {
        brightness: 1.0,
        hue_rotate_deg: 0.0,
        grayscale: 0.0,
    };

    /// Check whether this filter has any visible effect
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl Default for ScreenFilter {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Whether the hour falls in the nocturnal tint window (22:00 - 05:59).
pub fn is_nocturnal(hour: u8) -> bool {
    hour >= 22 || hour < 6
}

/// Compute the filter for a given hour of day.
///
/// Darkness ramps linearly past dusk, the nocturnal window adds a red
/// tint, and a frozen clock washes the scene toward gray.
pub fn filter_for_hour(hour: u8, frozen: bool) -> ScreenFilter {
    let darkness =
        ((f32::from(hour) - f32::from(DUSK_HOUR)) * DARKNESS_PER_HOUR).clamp(0.0, MAX_DARKNESS);
    ScreenFilter {
        brightness: 1.0 - darkness,
        hue_rotate_deg: if is_nocturnal(hour) { NIGHT_TINT_DEG } else { 0.0 },
        grayscale: if frozen { FREEZE_GRAYSCALE } else { 0.0 },
    }
}
