//! Terminal frontend
//!
//! Renders the HUD and maps keyboard input onto the touch input surface.
//! Arrow keys synthesize full-deflection joystick gestures; letter keys
//! tap the action buttons.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::Config;
use crate::fx::ScreenFilter;
use crate::game::Game;
use crate::input::{ActionButton, InputEvent, InputSurface, Joystick, MoveVector, TouchPoint};
use super::hud::{EffectState, Hud};

/// Touch id used for synthesized keyboard gestures
const KEY_TOUCH_ID: u64 = 1;

/// How long a tapped button stays highlighted
const TAP_HOLD: Duration = Duration::from_millis(150);

/// How long the last move vector stays on the readout
const MOVE_HOLD: Duration = Duration::from_millis(600);

/// Base scene color before the filter lands on it
const SCENE_BASE: (f32, f32, f32) = (70.0, 80.0, 96.0);

/// Main UI application
pub struct App {
    hud: Hud,
    effects: EffectState,
    surface: InputSurface,
    /// Last nonzero move vector, for the readout
    last_move: Option<(MoveVector, Instant)>,
    /// Highlight windows for tapped buttons, indexed like ActionButton::ALL
    tapped: [Option<Instant>; 4],
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            hud: Hud::new(),
            effects: EffectState::new(),
            surface: InputSurface::new(Joystick::new(0.0, 0.0, config.joystick_max_radius)),
            last_move: None,
            tapped: [None; 4],
        }
    }

    /// The sink halves the simulation writes into
    pub fn sinks_mut(&mut self) -> (&mut Hud, &mut EffectState) {
        (&mut self.hud, &mut self.effects)
    }

    /// Drain queued input events into the game
    pub fn pump_input(&mut self, game: &mut Game) {
        while let Some(event) = self.surface.poll_event() {
            if let InputEvent::Move(vector) = event {
                if !vector.is_zero() {
                    self.last_move = Some((vector, Instant::now() + MOVE_HOLD));
                }
            }
            game.apply(event, &mut self.hud, &mut self.effects);
        }
    }

    /// Handle one key press. Returns true when the game should quit.
    pub fn handle_key(&mut self, key: KeyEvent, game: &mut Game) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,

            // Action buttons
            KeyCode::Char(' ') | KeyCode::Char('j') => self.tap(ActionButton::Jump),
            KeyCode::Char('e') => self.tap(ActionButton::Interact),
            KeyCode::Char('f') => self.tap(ActionButton::Flashlight),
            KeyCode::Char('p') => self.tap(ActionButton::Pause),

            // Joystick, as full-deflection taps
            KeyCode::Up => self.nudge(0.0, -1.0),
            KeyCode::Down => self.nudge(0.0, 1.0),
            KeyCode::Left => self.nudge(-1.0, 0.0),
            KeyCode::Right => self.nudge(1.0, 0.0),

            // Debug time controls
            KeyCode::Char(']') => {
                let time = game.state().time;
                game.set_time(time + 1.0, &mut self.hud, &mut self.effects);
            }
            KeyCode::Char('[') => {
                let time = game.state().time;
                game.set_time(time - 1.0, &mut self.hud, &mut self.effects);
            }

            KeyCode::Char('m') => {
                let enabled = game.audio().is_enabled();
                game.audio().set_enabled(!enabled);
            }
            _ => {}
        }
        false
    }

    /// Press-and-release a button, keeping its highlight up briefly
    fn tap(&mut self, button: ActionButton) {
        self.surface.press(button);
        self.surface.release(button);
        if let Some(index) = ActionButton::ALL.iter().position(|&b| b == button) {
            self.tapped[index] = Some(Instant::now() + TAP_HOLD);
        }
    }

    /// Synthesize one joystick gesture at the given unit deflection
    fn nudge(&mut self, dx: f32, dy: f32) {
        let (base_x, base_y) = self.surface.joystick().base();
        let radius = self.surface.joystick().max_radius();
        self.surface
            .touch_start(TouchPoint::new(KEY_TOUCH_ID, base_x, base_y));
        self.surface.touch_move(&[TouchPoint::new(
            KEY_TOUCH_ID,
            base_x + dx * radius,
            base_y + dy * radius,
        )]);
        self.surface.touch_end();
    }

    pub fn render(&self, frame: &mut Frame, game: &Game) {
        frame.render_widget(Clear, frame.area());
        let now = Instant::now();

        // Screen shake nudges the whole layout sideways
        let mut area = frame.area();
        if self.effects.is_shaking(now) && area.width > 1 {
            let phase = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| (d.subsec_millis() / 50) % 2)
                .unwrap_or(0);
            if phase == 0 {
                area.x += 1;
                area.width -= 1;
            }
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(4),
            ])
            .split(area);

        self.render_header(frame, chunks[0], game);
        self.render_objective(frame, chunks[1]);
        self.render_scene(frame, chunks[2], now);
        self.render_controls(frame, chunks[3], now);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, game: &Game) {
        let state = game.state();
        let mut spans = vec![
            Span::styled(
                self.hud.time_text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(format!("Battery {:3}%", state.battery)),
        ];
        if state.flashlight_on {
            spans.push(Span::styled("  [LIGHT]", Style::default().fg(Color::White)));
        }
        if game.clock().is_paused() {
            spans.push(Span::styled(
                "  [PAUSED]",
                Style::default().fg(Color::Cyan),
            ));
        }
        if game.clock().is_frozen() {
            spans.push(Span::styled(
                "  [TIME STANDS STILL]",
                Style::default().fg(Color::Gray),
            ));
        }
        if state.demon_active {
            spans.push(Span::styled(
                "  [IT IS HERE]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let header = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title(" Duskfall "));
        frame.render_widget(header, area);
    }

    fn render_objective(&self, frame: &mut Frame, area: Rect) {
        let (text, emphasized) = self.hud.objective();
        let style = if emphasized {
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
        } else {
            Style::default().fg(Color::White)
        };
        frame.render_widget(Paragraph::new(Span::styled(text.to_string(), style)), area);
    }

    fn render_scene(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let color = scene_color(
            self.effects.filter(),
            self.effects.effective_brightness(now),
        );
        let scene = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(color));
        frame.render_widget(scene, area);

        if let Some(hint) = self.hud.hint(now) {
            let hint_area = centered_line(area, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    hint.to_string(),
                    Style::default().fg(Color::White),
                ))
                .alignment(Alignment::Center),
                hint_area,
            );
        }

        if let Some(subtitle) = self.effects.subtitle(now) {
            // Near the bottom, like the original's fixed subtitle strip
            let mut sub_area = area;
            if sub_area.height > 2 {
                sub_area.y = area.y + area.height - 2;
                sub_area.height = 1;
            }
            frame.render_widget(
                Paragraph::new(Span::styled(
                    subtitle.to_string(),
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::ITALIC),
                ))
                .alignment(Alignment::Center),
                sub_area,
            );
        }
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let vector = match self.last_move {
            Some((v, until)) if now < until => v,
            _ => self.surface.joystick().vector(),
        };

        let mut button_spans = vec![Span::raw(format!(
            "Move ({:+.2}, {:+.2})   ",
            vector.x, vector.y
        ))];
        for (index, button) in ActionButton::ALL.iter().enumerate() {
            let lit = self.surface.is_pressed(*button)
                || self.tapped[index].is_some_and(|until| now < until);
            let style = if lit {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            button_spans.push(Span::styled(format!("[{}]", button.label()), style));
            button_spans.push(Span::raw(" "));
        }

        let lines = vec![
            Line::from(button_spans),
            Line::from(Span::styled(
                "arrows move · space jump · e interact · f light · p pause · [/] time · m mute · q quit",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let controls = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Controls "));
        frame.render_widget(controls, area);
    }
}

/// One-line rect vertically centered in `area`
fn centered_line(area: Rect, height: u16) -> Rect {
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x: area.x + 1,
        y,
        width: area.width.saturating_sub(2),
        height,
    }
}

/// Map the screen filter onto a terminal background color
fn scene_color(filter: ScreenFilter, brightness: f32) -> Color {
    let (mut r, mut g, mut b) = SCENE_BASE;

    // Red tint for a negative hue rotation
    if filter.hue_rotate_deg < 0.0 {
        let shift = (-filter.hue_rotate_deg / 30.0).min(1.0);
        r += 40.0 * shift;
        g -= 12.0 * shift;
        b -= 20.0 * shift;
    }

    if filter.grayscale > 0.0 {
        let luma = 0.299 * r + 0.587 * g + 0.114 * b;
        r += (luma - r) * filter.grayscale;
        g += (luma - g) * filter.grayscale;
        b += (luma - b) * filter.grayscale;
    }

    let clamp = |v: f32| (v * brightness).clamp(0.0, 255.0) as u8;
    Color::Rgb(clamp(r), clamp(g), clamp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_color_darkens() {
        let dim = scene_color(ScreenFilter::NEUTRAL, 0.5);
        let full = scene_color(ScreenFilter::NEUTRAL, 1.0);
        let (Color::Rgb(r1, ..), Color::Rgb(r2, ..)) = (dim, full) else {
            panic!("expected rgb colors");
        };
        assert!(r1 < r2);
    }

    #[test]
    fn test_scene_color_tints_red() {
        let tinted = scene_color(
            ScreenFilter {
                brightness: 1.0,
                hue_rotate_deg: -30.0,
                grayscale: 0.0,
            },
            1.0,
        );
        let Color::Rgb(r, g, b) = tinted else {
            panic!("expected rgb color");
        };
        assert!(r > g && r > b);
    }
}
