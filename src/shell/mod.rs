//! Application shell: window lifecycle, frame sequence, input and drawing
//! primitives (impure shell).
//!
//! The viewer only talks to the [`AppShell`] trait. [`TerminalShell`] is the
//! concrete implementation, generic over the ratatui backend so tests can
//! drive it with `TestBackend`.

mod events;
mod input;
mod terminal;

pub use events::{CrosstermEvents, EventSource, ScriptedEvents};
pub use input::InputState;
pub use terminal::{CellMetrics, TerminalShell};

use crate::model::{Rect, ShellError, Vector2};
use crate::text::FontMetrics;
use ratatui::style::Color;

/// Window, frame loop and immediate-mode drawing.
///
/// Coordinates are pixels. Draw calls issued between [`begin_frame`] and
/// [`end_frame`] belong to that frame.
///
/// [`begin_frame`]: AppShell::begin_frame
/// [`end_frame`]: AppShell::end_frame
pub trait AppShell: FontMetrics {
    /// Open the window.
    fn init_window(&mut self, title: &str) -> Result<(), ShellError>;

    /// Release the window. Calling it on a closed window is a no-op.
    fn close_window(&mut self) -> Result<(), ShellError>;

    /// Current window width in pixels.
    fn width(&self) -> f32;

    /// Current window height in pixels.
    fn height(&self) -> f32;

    /// Advance to the next frame and collect its input.
    ///
    /// Returns `false` once the window has been closed by the user, the OS or
    /// [`request_close`](AppShell::request_close); the frame sequence is over.
    fn begin_frame(&mut self) -> Result<bool, ShellError>;

    /// Present everything drawn since [`begin_frame`](AppShell::begin_frame).
    fn end_frame(&mut self) -> Result<(), ShellError>;

    /// Ask for the frame sequence to end after the current frame.
    fn request_close(&mut self);

    /// Input collected for the current frame.
    fn input(&self) -> &InputState;

    /// Draw `text` with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Vector2, font_size: f32, spacing: f32, color: Color);

    /// Fill `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Restrict drawing to `rect` (intersected with any enclosing clip).
    fn begin_clip(&mut self, rect: Rect);

    /// Pop the innermost clip region.
    fn end_clip(&mut self);
}
