//! Scroll offset tracking for a viewport over taller content.

use crate::model::{Rect, Vector2};
use crate::shell::{AppShell, InputState};
use ratatui::style::Color;

/// Width of the vertical scroll bar in pixels.
const SCROLL_BAR_WIDTH: f32 = 16.0;

/// Smallest thumb height so it stays grabbable on very long content.
const MIN_THUMB_HEIGHT: f32 = 72.0;

/// Stateful scroll offset for one viewport.
///
/// The offset is the translation applied to content: `(0, 0)` shows the top,
/// `y = -(content.height - viewport.height)` shows the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollPanel {
    offset: Vector2,
    show_vertical_scroll_bar: bool,
    line_step: f32,
    dragging: bool,
}

impl ScrollPanel {
    /// Pixels scrolled per wheel notch unless overridden.
    pub const DEFAULT_LINE_STEP: f32 = 72.0;

    /// New panel scrolled to the top.
    pub fn new(show_vertical_scroll_bar: bool) -> Self {
        Self {
            offset: Vector2::ZERO,
            show_vertical_scroll_bar,
            line_step: Self::DEFAULT_LINE_STEP,
            dragging: false,
        }
    }

    /// Pixels scrolled per wheel notch.
    pub fn with_line_step(mut self, line_step: f32) -> Self {
        self.line_step = line_step;
        self
    }

    /// Current offset.
    pub fn offset(&self) -> Vector2 {
        self.offset
    }

    /// Override the offset (e.g. to start scrolled to the bottom).
    ///
    /// The value is clamped on the next [`handle_scroll`](Self::handle_scroll).
    pub fn set_offset(&mut self, offset: Vector2) {
        self.offset = offset;
    }

    /// Whether the scroll bar is drawn by [`draw_scroll_bar`](Self::draw_scroll_bar).
    pub fn shows_vertical_scroll_bar(&self) -> bool {
        self.show_vertical_scroll_bar
    }

    /// Apply this frame's input and return the clamped offset.
    ///
    /// Wheel input always scrolls; dragging scrolls only when the press
    /// started inside `viewport`.
    pub fn handle_scroll(&mut self, viewport: Rect, content: Rect, input: &InputState) -> Vector2 {
        if input.mouse_pressed {
            self.dragging = input.pressed_inside(&viewport);
        }
        if self.dragging {
            self.offset += input.mouse_delta;
        }
        if !input.mouse_down {
            self.dragging = false;
        }

        self.offset.y += input.wheel * self.line_step;

        let max_x = (content.width - viewport.width).max(0.0);
        let max_y = (content.height - viewport.height).max(0.0);
        self.offset.x = self.offset.x.clamp(-max_x, 0.0);
        self.offset.y = self.offset.y.clamp(-max_y, 0.0);
        self.offset
    }

    /// Draw the vertical scroll bar along the viewport's right edge.
    ///
    /// Nothing is drawn when disabled or when the content fits.
    pub fn draw_scroll_bar<S>(&self, shell: &mut S, viewport: Rect, content: Rect)
    where
        S: AppShell + ?Sized,
    {
        let overflow = content.height - viewport.height;
        if !self.show_vertical_scroll_bar || overflow <= 0.0 {
            return;
        }

        let thumb_height = (viewport.height * viewport.height / content.height)
            .max(MIN_THUMB_HEIGHT)
            .min(viewport.height);
        let progress = (-self.offset.y / overflow).clamp(0.0, 1.0);
        let thumb = Rect::new(
            viewport.right() - SCROLL_BAR_WIDTH,
            viewport.y + progress * (viewport.height - thumb_height),
            SCROLL_BAR_WIDTH,
            thumb_height,
        );
        shell.fill_rect(thumb, Color::DarkGray);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 720.0);
    const CONTENT: Rect = Rect::new(0.0, 0.0, 780.0, 1440.0);

    fn idle() -> InputState {
        InputState::default()
    }

    #[test]
    fn starts_at_top() {
        let mut panel = ScrollPanel::new(true);
        assert_eq!(panel.handle_scroll(VIEWPORT, CONTENT, &idle()), Vector2::ZERO);
    }

    #[test]
    fn initial_offset_override_is_kept_when_in_range() {
        let mut panel = ScrollPanel::new(true);
        panel.set_offset(Vector2::new(0.0, -720.0));
        assert_eq!(panel.handle_scroll(VIEWPORT, CONTENT, &idle()).y, -720.0);
    }

    #[test]
    fn offset_is_clamped_to_content() {
        let mut panel = ScrollPanel::new(true);
        panel.set_offset(Vector2::new(-50.0, -5000.0));
        let offset = panel.handle_scroll(VIEWPORT, CONTENT, &idle());
        assert_eq!(offset, Vector2::new(0.0, -720.0));

        panel.set_offset(Vector2::new(0.0, 300.0));
        assert_eq!(panel.handle_scroll(VIEWPORT, CONTENT, &idle()).y, 0.0);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut panel = ScrollPanel::new(true);
        let short = Rect::new(0.0, 0.0, 780.0, 144.0);
        let input = InputState {
            wheel: -3.0,
            ..InputState::default()
        };
        assert_eq!(panel.handle_scroll(VIEWPORT, short, &input).y, 0.0);
    }

    #[test]
    fn wheel_scrolls_by_line_step() {
        let mut panel = ScrollPanel::new(true).with_line_step(72.0);
        let down = InputState {
            wheel: -2.0,
            ..InputState::default()
        };
        assert_eq!(panel.handle_scroll(VIEWPORT, CONTENT, &down).y, -144.0);

        let up = InputState {
            wheel: 1.0,
            ..InputState::default()
        };
        assert_eq!(panel.handle_scroll(VIEWPORT, CONTENT, &up).y, -72.0);
    }

    #[test]
    fn drag_inside_viewport_moves_content() {
        let mut panel = ScrollPanel::new(true);
        panel.set_offset(Vector2::new(0.0, -720.0));

        let mut input = InputState::default();
        input.press(Vector2::new(100.0, 100.0));
        input.drag_to(Vector2::new(100.0, 244.0));
        assert_eq!(panel.handle_scroll(VIEWPORT, CONTENT, &input).y, -576.0);
    }

    #[test]
    fn drag_starting_outside_viewport_is_ignored() {
        let viewport = Rect::new(0.0, 100.0, 800.0, 620.0);
        let mut panel = ScrollPanel::new(true);
        panel.set_offset(Vector2::new(0.0, -500.0));

        let mut input = InputState::default();
        input.press(Vector2::new(100.0, 50.0));
        input.drag_to(Vector2::new(100.0, 300.0));
        assert_eq!(panel.handle_scroll(viewport, CONTENT, &input).y, -500.0);
    }

    #[test]
    fn drag_ends_on_release() {
        let mut panel = ScrollPanel::new(true);
        panel.set_offset(Vector2::new(0.0, -720.0));

        let mut input = InputState::default();
        input.press(Vector2::new(100.0, 100.0));
        input.release(Vector2::new(100.0, 100.0));
        panel.handle_scroll(VIEWPORT, CONTENT, &input);

        input.begin_frame();
        input.mouse_delta = Vector2::new(0.0, 300.0);
        assert_eq!(panel.handle_scroll(VIEWPORT, CONTENT, &input).y, -720.0);
    }
}
