//! Touch joystick and action buttons
//!
//! Translates raw touch samples into a normalized movement vector and
//! discrete action events. The joystick tracks a single touch at a time;
//! buttons map 1:1 to semantic events.

use std::collections::VecDeque;

use super::events::{InputEvent, MoveVector};

/// Default clamp radius for joystick displacement, in pixels
pub const DEFAULT_MAX_RADIUS: f32 = 50.0;

/// One raw touch sample from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Host-assigned touch identifier, stable for the touch's lifetime
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// Virtual joystick with a fixed base position.
///
/// Displacement from the base is converted to polar form, clamped to
/// `max_radius`, and normalized into a [`MoveVector`]. The clamped
/// Cartesian offset is kept for visual knob placement.
#[derive(Debug, Clone)]
pub struct Joystick {
    base_x: f32,
    base_y: f32,
    max_radius: f32,
    active_touch: Option<u64>,
    vector: MoveVector,
    knob_offset: (f32, f32),
}

impl Joystick {
    pub fn new(base_x: f32, base_y: f32, max_radius: f32) -> Self {
        Self {
            base_x,
            base_y,
            max_radius,
            active_touch: None,
            vector: MoveVector::ZERO,
            knob_offset: (0.0, 0.0),
        }
    }

    /// Move the base, e.g. after the host relayouts
    pub fn set_base(&mut self, x: f32, y: f32) {
        self.base_x = x;
        self.base_y = y;
    }

    pub fn base(&self) -> (f32, f32) {
        (self.base_x, self.base_y)
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    /// Whether a touch is currently driving the stick
    pub fn is_active(&self) -> bool {
        self.active_touch.is_some()
    }

    /// Current normalized displacement
    pub fn vector(&self) -> MoveVector {
        self.vector
    }

    /// Clamped Cartesian knob offset in pixels, for visual placement
    pub fn knob_offset(&self) -> (f32, f32) {
        self.knob_offset
    }

    /// Capture a touch as the driver, if none is active.
    /// Returns whether the touch was captured.
    pub fn touch_start(&mut self, touch: TouchPoint) -> bool {
        if self.active_touch.is_some() {
            return false;
        }
        self.active_touch = Some(touch.id);
        true
    }

    /// Recompute the vector from a batch of current touch positions.
    ///
    /// Returns the new vector, or `None` when no touch is active or the
    /// driving touch is missing from the batch (the move is ignored).
    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> Option<MoveVector> {
        let id = self.active_touch?;
        let touch = touches.iter().find(|t| t.id == id)?;

        let dx = touch.x - self.base_x;
        let dy = touch.y - self.base_y;
        let distance = dx.hypot(dy);
        let angle = dy.atan2(dx);

        let limited = distance.min(self.max_radius);
        self.knob_offset = (angle.cos() * limited, angle.sin() * limited);
        self.vector = MoveVector::new(
            angle.cos() * (limited / self.max_radius),
            angle.sin() * (limited / self.max_radius),
        );
        Some(self.vector)
    }

    /// Release the stick: reset the vector and knob, clear the driver.
    ///
    /// Returns `Some(MoveVector::ZERO)` if a touch was active, so the
    /// caller can emit the stop notification.
    pub fn touch_end(&mut self) -> Option<MoveVector> {
        self.active_touch?;
        self.active_touch = None;
        self.vector = MoveVector::ZERO;
        self.knob_offset = (0.0, 0.0);
        Some(MoveVector::ZERO)
    }
}

/// The four discrete action buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionButton {
    Jump,
    Interact,
    Flashlight,
    Pause,
}

impl ActionButton {
    pub const ALL: [ActionButton; 4] = [
        ActionButton::Jump,
        ActionButton::Interact,
        ActionButton::Flashlight,
        ActionButton::Pause,
    ];

    /// The semantic event this button emits on press
    pub fn event(&self) -> InputEvent {
        match self {
            ActionButton::Jump => InputEvent::Jump,
            ActionButton::Interact => InputEvent::Interact,
            ActionButton::Flashlight => InputEvent::ToggleFlashlight,
            ActionButton::Pause => InputEvent::TogglePause,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionButton::Jump => "Jump",
            ActionButton::Interact => "Interact",
            ActionButton::Flashlight => "Light",
            ActionButton::Pause => "Pause",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Adapter translating touch gestures and button taps into [`InputEvent`]s.
///
/// Events queue in FIFO order; the consumer drains them with
/// [`InputSurface::poll_event`].
#[derive(Debug)]
pub struct InputSurface {
    joystick: Joystick,
    pressed: [bool; 4],
    queue: VecDeque<InputEvent>,
}

impl InputSurface {
    pub fn new(joystick: Joystick) -> Self {
        Self {
            joystick,
            pressed: [false; 4],
            queue: VecDeque::new(),
        }
    }

    pub fn joystick(&self) -> &Joystick {
        &self.joystick
    }

    pub fn joystick_mut(&mut self) -> &mut Joystick {
        &mut self.joystick
    }

    /// Touch landed on the joystick region
    pub fn touch_start(&mut self, touch: TouchPoint) {
        self.joystick.touch_start(touch);
    }

    /// Global touch-move with the current touch positions
    pub fn touch_move(&mut self, touches: &[TouchPoint]) {
        if let Some(vector) = self.joystick.touch_move(touches) {
            self.queue.push_back(InputEvent::Move(vector));
        }
    }

    /// Global touch-end
    pub fn touch_end(&mut self) {
        if let Some(vector) = self.joystick.touch_end() {
            self.queue.push_back(InputEvent::Move(vector));
        }
    }

    /// Button pressed: highlight it and emit its event
    pub fn press(&mut self, button: ActionButton) {
        self.pressed[button.index()] = true;
        self.queue.push_back(button.event());
    }

    /// Button released: clear the highlight. Idempotent, emits nothing.
    pub fn release(&mut self, button: ActionButton) {
        self.pressed[button.index()] = false;
    }

    /// Whether a button is currently held (drives the highlight state)
    pub fn is_pressed(&self, button: ActionButton) -> bool {
        self.pressed[button.index()]
    }

    /// Pop the oldest queued event
    pub fn poll_event(&mut self) -> Option<InputEvent> {
        self.queue.pop_front()
    }
}

impl Default for InputSurface {
    fn default() -> Self {
        Self::new(Joystick::new(0.0, 0.0, DEFAULT_MAX_RADIUS))
    }
}
