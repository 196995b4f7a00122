//! Score header, start/lost overlays and the arrow pad.
//!
//! Read-only projection of the game's phase and score.

use macroquad::color::{Color, WHITE};
use macroquad::math::{Rect, vec2};
use macroquad::shapes::{draw_rectangle, draw_rectangle_lines, draw_triangle};
use macroquad::text::{draw_text, measure_text};

use crate::game::{Direction, Phase};
use crate::input::TouchPad;

const OVERLAY_SHADE: Color = Color::new(0.0, 0.0, 0.0, 0.6);
const LOST_COLOR: Color = Color::new(1.0, 0.35, 0.35, 1.0);
const PAD_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.25);

/// One line of overlay text
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine {
    pub text: String,
    pub size: f32,
    pub alert: bool,
}

impl OverlayLine {
    fn new(text: impl Into<String>, size: f32) -> Self {
        Self {
            text: text.into(),
            size,
            alert: false,
        }
    }

    fn alert(mut self) -> Self {
        self.alert = true;
        self
    }
}

/// Overlay shown for `phase`; empty while a game runs
pub fn overlay_lines(phase: Phase, score: u32) -> Vec<OverlayLine> {
    match phase {
        Phase::Running => Vec::new(),
        Phase::Idle => vec![OverlayLine::new("Press to start :)", 40.0)],
        Phase::Lost => vec![
            OverlayLine::new("Your snake has died :(", 40.0).alert(),
            OverlayLine::new(format!("Your score: {}", score), 30.0),
            OverlayLine::new("Press to restart", 22.0),
        ],
        Phase::Won => vec![
            OverlayLine::new("Your snake filled the board!", 40.0),
            OverlayLine::new(format!("Your score: {}", score), 30.0),
            OverlayLine::new("Press to restart", 22.0),
        ],
    }
}

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

/// Score line centred in the header strip
pub fn draw_header(area: Rect, score: u32) {
    let label = score_label(score);
    let size = (area.h * 0.6).max(12.0);
    let metrics = measure_text(&label, None, size as u16, 1.0);
    draw_text(
        &label,
        area.x + (area.w - metrics.width) * 0.5,
        area.y + (area.h + metrics.offset_y) * 0.5,
        size,
        WHITE,
    );
}

/// Shade the window and print the overlay for the current phase
pub fn draw_overlay(screen: Rect, phase: Phase, score: u32) {
    let lines = overlay_lines(phase, score);
    if lines.is_empty() {
        return;
    }

    draw_rectangle(screen.x, screen.y, screen.w, screen.h, OVERLAY_SHADE);

    let spacing = 16.0;
    let total: f32 = lines.iter().map(|line| line.size + spacing).sum::<f32>() - spacing;
    let mut y = screen.y + (screen.h - total) * 0.5;
    for line in &lines {
        y += line.size;
        let metrics = measure_text(&line.text, None, line.size as u16, 1.0);
        let color = if line.alert { LOST_COLOR } else { WHITE };
        draw_text(
            &line.text,
            screen.x + (screen.w - metrics.width) * 0.5,
            y,
            line.size,
            color,
        );
        y += spacing;
    }
}

pub fn draw_pad(pad: &TouchPad) {
    for direction in Direction::ALL {
        let button = pad.button(direction);
        let inset = button.w * 0.08;
        draw_rectangle_lines(
            button.x + inset,
            button.y + inset,
            button.w - inset * 2.0,
            button.h - inset * 2.0,
            2.0,
            PAD_COLOR,
        );

        let center = button.center();
        let reach = button.w * 0.25;
        let (dx, dy) = direction.delta();
        let (dx, dy) = (dx as f32, dy as f32);
        // Arrow tip points along the direction, base perpendicular to it
        let tip = vec2(center.x + dx * reach, center.y + dy * reach);
        let base_left = vec2(center.x - dx * reach - dy * reach, center.y - dy * reach + dx * reach);
        let base_right = vec2(center.x - dx * reach + dy * reach, center.y - dy * reach - dx * reach);
        draw_triangle(tip, base_left, base_right, WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overlay_while_running() {
        assert!(overlay_lines(Phase::Running, 3).is_empty());
    }

    #[test]
    fn test_idle_overlay() {
        let lines = overlay_lines(Phase::Idle, 0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Press to start :)");
    }

    #[test]
    fn test_lost_overlay_shows_score() {
        let lines = overlay_lines(Phase::Lost, 7);
        assert_eq!(lines[0].text, "Your snake has died :(");
        assert!(lines[0].alert);
        assert_eq!(lines[1].text, "Your score: 7");
        assert_eq!(lines[2].text, "Press to restart");
    }

    #[test]
    fn test_won_overlay() {
        let lines = overlay_lines(Phase::Won, 12);
        assert_eq!(lines[1].text, "Your score: 12");
        assert!(!lines[0].alert);
    }

    #[test]
    fn test_score_label() {
        assert_eq!(score_label(42), "Score: 42");
    }
}
