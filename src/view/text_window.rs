use super::constants::{
    BUTTON_HEIGHT, BUTTON_WIDTH, EXIT_LABEL, FONT_SIZE, LINE_HEIGHT, MARGIN, REBOOT_LABEL,
    SPACING, TEXT_INSET,
};
use crate::model::{Rect, Vector2};
use crate::platform::Platform;
use crate::shell::AppShell;
use crate::text::{FontMetrics, wrap_text};
use crate::widgets::{ButtonStyle, ScrollPanel, gui_button};
use ratatui::style::Color;
use tracing::{debug, error, info};

/// Tunable dimensions of the text window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerLayout {
    /// Font size of the displayed text.
    pub font_size: f32,
    /// Distance between consecutive lines.
    pub line_height: f32,
    /// Gap between window edge and text area / button.
    pub margin: f32,
    /// Extra gap to the right of the button.
    pub spacing: f32,
    /// Size of the action button.
    pub button_size: Vector2,
    /// Space kept free to the right of the text.
    pub text_inset: f32,
}

impl Default for ViewerLayout {
    fn default() -> Self {
        Self {
            font_size: FONT_SIZE,
            line_height: LINE_HEIGHT,
            margin: MARGIN,
            spacing: SPACING,
            button_size: Vector2::new(BUTTON_WIDTH, BUTTON_HEIGHT),
            text_inset: TEXT_INSET,
        }
    }
}

/// Renders wrapped text in a scrollable viewport with one action button.
///
/// Layout is computed once in [`new`](Self::new) and stays fixed; only the
/// scroll offset changes between frames.
#[derive(Debug, Clone)]
pub struct TextWindowRenderer {
    layout: ViewerLayout,
    window: Vector2,
    textarea: Rect,
    content: Rect,
    lines: Vec<String>,
    scroll_panel: ScrollPanel,
}

impl TextWindowRenderer {
    /// Wrap `text` for a `window` sized viewport and start scrolled to the
    /// bottom.
    pub fn new<F>(font: &F, text: &str, window: Vector2, layout: ViewerLayout) -> Self
    where
        F: FontMetrics + ?Sized,
    {
        let textarea = Rect::new(layout.margin, 0.0, window.x - layout.margin, window.y);
        let wrap_width = textarea.width - layout.text_inset;
        let lines = wrap_text(font, text, layout.font_size, wrap_width);
        let content = Rect::new(
            0.0,
            0.0,
            wrap_width,
            lines.len() as f32 * layout.line_height,
        );

        let mut scroll_panel = ScrollPanel::new(true).with_line_step(layout.line_height);
        scroll_panel.set_offset(Vector2::new(
            0.0,
            -(content.height - textarea.height).max(0.0),
        ));

        info!(
            lines = lines.len(),
            wrap_width, "Text window laid out"
        );

        Self {
            layout,
            window,
            textarea,
            content,
            lines,
            scroll_panel,
        }
    }

    /// Wrapped display lines, in reading order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Visible text area.
    pub fn textarea(&self) -> Rect {
        self.textarea
    }

    /// Full area occupied by the wrapped text.
    pub fn content(&self) -> Rect {
        self.content
    }

    /// Current scroll offset.
    pub fn scroll_offset(&self) -> Vector2 {
        self.scroll_panel.offset()
    }

    /// Bounds of the action button in the bottom-right corner.
    pub fn button_bounds(&self) -> Rect {
        let size = self.layout.button_size;
        Rect::new(
            self.window.x - self.layout.margin - size.x - self.layout.spacing,
            self.window.y - self.layout.margin - size.y,
            size.x,
            size.y,
        )
    }

    /// Draw one frame. Returns whether the action button was activated.
    ///
    /// Activation closes the window on desktop hosts and reboots embedded
    /// devices.
    pub fn render<S, P>(&mut self, shell: &mut S, platform: &P) -> bool
    where
        S: AppShell + ?Sized,
        P: Platform + ?Sized,
    {
        let scroll = self
            .scroll_panel
            .handle_scroll(self.textarea, self.content, shell.input());

        shell.begin_clip(self.textarea);
        let line_height = self.layout.line_height;
        for (i, line) in self.lines.iter().enumerate() {
            let position = Vector2::new(
                self.textarea.x + scroll.x,
                self.textarea.y + scroll.y + i as f32 * line_height,
            );
            if position.y + line_height < self.textarea.y || position.y > self.textarea.bottom() {
                continue;
            }
            shell.draw_text(line, position, self.layout.font_size, 0.0, Color::White);
        }
        self.scroll_panel
            .draw_scroll_bar(shell, self.textarea, self.content);
        shell.end_clip();

        let is_pc = platform.is_pc();
        let label = if is_pc { EXIT_LABEL } else { REBOOT_LABEL };
        let activated = gui_button(shell, self.button_bounds(), label, ButtonStyle::Transparent);
        if activated {
            if is_pc {
                debug!("Exit button pressed, closing window");
                shell.request_close();
            } else if let Err(err) = platform.reboot() {
                error!(error = %err, "Reboot failed");
            }
        }
        activated
    }
}

#[cfg(test)]
#[path = "text_window_tests.rs"]
mod tests;
