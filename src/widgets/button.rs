//! Push button.

use crate::model::{Rect, Vector2};
use crate::shell::AppShell;
use ratatui::style::Color;

/// Font size of button labels.
const LABEL_FONT_SIZE: f32 = 64.0;

const NORMAL_BACKGROUND: Color = Color::DarkGray;
const PRESSED_BACKGROUND: Color = Color::Gray;
const LABEL_COLOR: Color = Color::White;

/// Visual style of a [`gui_button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    /// Filled background.
    #[default]
    Normal,
    /// Label only; the background shows while pressed.
    Transparent,
}

/// Draw a button and report whether it was activated this frame.
///
/// A button activates when the left button is released over it after having
/// been pressed over it.
pub fn gui_button<S>(shell: &mut S, bounds: Rect, label: &str, style: ButtonStyle) -> bool
where
    S: AppShell + ?Sized,
{
    let input = *shell.input();
    let hovered = bounds.contains(input.mouse_position);
    let pressed_here = input.pressed_inside(&bounds);
    let held = input.mouse_down && hovered && pressed_here;

    let background = match style {
        ButtonStyle::Normal if held => Some(PRESSED_BACKGROUND),
        ButtonStyle::Normal => Some(NORMAL_BACKGROUND),
        ButtonStyle::Transparent => held.then_some(PRESSED_BACKGROUND),
    };
    if let Some(color) = background {
        shell.fill_rect(bounds, color);
    }

    let label_size = shell.measure_text(label, LABEL_FONT_SIZE, 0.0);
    let position = Vector2::new(
        bounds.x + (bounds.width - label_size.x) / 2.0,
        bounds.y + (bounds.height - label_size.y) / 2.0,
    );
    shell.draw_text(label, position, LABEL_FONT_SIZE, 0.0, LABEL_COLOR);

    input.mouse_released && hovered && pressed_here
}
