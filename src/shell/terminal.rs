//! Terminal-backed [`AppShell`].
//!
//! The pixel drawing model is mapped onto a grid of fixed-size cells: every
//! cell is [`CellMetrics`] pixels, text is laid out one column per terminal
//! column, and a text line occupies the row its top edge rounds to.

use super::{AppShell, EventSource, InputState};
use crate::model::{Rect, ShellError, Vector2};
use crate::text::{FontMetrics, MonospaceFont, grid_char, grid_columns};
use crossterm::{
    ExecutableCommand,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    buffer::Buffer,
    layout::{Rect as CellRect, Size},
    style::{Color, Style},
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

/// Default pause between frames while the terminal is idle.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    /// Cell width in pixels.
    pub width: f32,
    /// Cell height in pixels.
    pub height: f32,
}

impl Default for CellMetrics {
    /// Half of a 64px glyph wide, one 72px line tall.
    fn default() -> Self {
        Self {
            width: 32.0,
            height: 72.0,
        }
    }
}

impl CellMetrics {
    /// Pixel centre of the cell at (`column`, `row`).
    fn center_of(&self, column: u16, row: u16) -> Vector2 {
        Vector2::new(
            (f32::from(column) + 0.5) * self.width,
            (f32::from(row) + 0.5) * self.height,
        )
    }

    /// Smallest cell rectangle covering `rect`, limited to `area`.
    fn cover(&self, rect: Rect, area: CellRect) -> CellRect {
        let to_cell = |value: f32| value.max(0.0) as u16;
        let left = to_cell((rect.x / self.width).floor());
        let top = to_cell((rect.y / self.height).floor());
        let right = to_cell((rect.right() / self.width).ceil());
        let bottom = to_cell((rect.bottom() / self.height).ceil());
        CellRect::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
        .intersection(area)
    }
}

/// Whether the shell owns the real terminal's modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TerminalMode {
    /// Raw mode, alternate screen and mouse capture on the process's stdout.
    Raw,
    /// Drawing only; used with in-memory backends.
    Plain,
}

/// Deferred draw call, replayed inside `Terminal::draw` at the end of a frame.
#[derive(Debug, Clone, PartialEq)]
enum DrawOp {
    Text {
        text: String,
        position: Vector2,
        color: Color,
        clip: Option<Rect>,
    },
    Fill {
        rect: Rect,
        color: Color,
        clip: Option<Rect>,
    },
}

/// [`AppShell`] that renders into a ratatui terminal.
///
/// Generic over backend to support testing with `TestBackend`.
pub struct TerminalShell<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    events: Box<dyn EventSource>,
    mode: TerminalMode,
    font: MonospaceFont,
    cell: CellMetrics,
    frame_interval: Duration,
    size: Size,
    input: InputState,
    clip_stack: Vec<Rect>,
    ops: Vec<DrawOp>,
    window_open: bool,
    close_requested: bool,
}

impl TerminalShell<CrosstermBackend<Stdout>> {
    /// Shell over the process's terminal.
    ///
    /// Raw mode, the alternate screen and mouse capture are entered by
    /// `init_window` and restored by `close_window`.
    pub fn stdout() -> Result<Self, ShellError> {
        let mut shell = Self::new(
            CrosstermBackend::new(io::stdout()),
            super::CrosstermEvents,
        )?;
        shell.mode = TerminalMode::Raw;
        Ok(shell)
    }
}

impl<B> TerminalShell<B>
where
    B: Backend,
{
    /// Shell drawing into `backend` and reading input from `events`.
    ///
    /// The terminal's modes are left untouched.
    pub fn new(backend: B, events: impl EventSource + 'static) -> Result<Self, ShellError> {
        let terminal = Terminal::new(backend)?;
        let size = terminal.size()?;
        Ok(Self {
            terminal,
            events: Box::new(events),
            mode: TerminalMode::Plain,
            font: MonospaceFont::default(),
            cell: CellMetrics::default(),
            frame_interval: DEFAULT_FRAME_INTERVAL,
            size,
            input: InputState::default(),
            clip_stack: Vec::new(),
            ops: Vec::new(),
            window_open: false,
            close_requested: false,
        })
    }

    /// Use a different cell size.
    ///
    /// The font advance follows the cell width so measured text matches the
    /// columns it is drawn into at `font_size`.
    pub fn with_cell_metrics(mut self, cell: CellMetrics, font_size: f32) -> Self {
        self.cell = cell;
        self.font = MonospaceFont::new(cell.width / font_size);
        self
    }

    /// Use a different idle frame interval.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// The backend being drawn into.
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Whether `init_window` has been called without a matching `close_window`.
    pub fn is_window_open(&self) -> bool {
        self.window_open
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                debug!("Handling resize to {}x{}", width, height);
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let page = f32::from(self.size.height.saturating_sub(1).max(1));
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.close_requested = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.close_requested = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.input.wheel += 1.0,
            KeyCode::Down | KeyCode::Char('j') => self.input.wheel -= 1.0,
            KeyCode::PageUp => self.input.wheel += page,
            KeyCode::PageDown => self.input.wheel -= page,
            KeyCode::Home => self.input.wheel += f32::from(u16::MAX),
            KeyCode::End => self.input.wheel -= f32::from(u16::MAX),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = self.cell.center_of(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.input.press(position),
            MouseEventKind::Drag(MouseButton::Left) => self.input.drag_to(position),
            MouseEventKind::Up(MouseButton::Left) => self.input.release(position),
            MouseEventKind::Moved => self.input.mouse_position = position,
            MouseEventKind::ScrollUp => self.input.wheel += 1.0,
            MouseEventKind::ScrollDown => self.input.wheel -= 1.0,
            _ => {}
        }
    }

    fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }
}

impl<B> FontMetrics for TerminalShell<B>
where
    B: Backend,
{
    fn measure_text(&self, text: &str, font_size: f32, spacing: f32) -> Vector2 {
        self.font.measure_text(text, font_size, spacing)
    }
}

impl<B> AppShell for TerminalShell<B>
where
    B: Backend,
{
    fn init_window(&mut self, title: &str) -> Result<(), ShellError> {
        if self.mode == TerminalMode::Raw {
            enable_raw_mode()?;
            let mut stdout = io::stdout();
            stdout.execute(EnterAlternateScreen)?;
            stdout.execute(EnableMouseCapture)?;
            stdout.execute(SetTitle(title))?;
        }
        self.terminal.clear()?;
        self.size = self.terminal.size()?;
        self.input = InputState::default();
        self.window_open = true;
        self.close_requested = false;
        debug!(
            title,
            columns = self.size.width,
            rows = self.size.height,
            "Window opened"
        );
        Ok(())
    }

    fn close_window(&mut self) -> Result<(), ShellError> {
        if !self.window_open {
            return Ok(());
        }
        self.window_open = false;
        self.ops.clear();
        self.clip_stack.clear();
        if self.mode == TerminalMode::Raw {
            disable_raw_mode()?;
            let mut stdout = io::stdout();
            stdout.execute(DisableMouseCapture)?;
            stdout.execute(LeaveAlternateScreen)?;
        }
        self.terminal.show_cursor()?;
        debug!("Window closed");
        Ok(())
    }

    fn width(&self) -> f32 {
        f32::from(self.size.width) * self.cell.width
    }

    fn height(&self) -> f32 {
        f32::from(self.size.height) * self.cell.height
    }

    fn begin_frame(&mut self) -> Result<bool, ShellError> {
        if !self.window_open || self.close_requested {
            return Ok(false);
        }
        self.input.begin_frame();
        self.ops.clear();
        self.clip_stack.clear();

        // Block for the first event only; drain the rest without waiting
        let mut timeout = self.frame_interval;
        while let Some(event) = self.events.next_event(timeout)? {
            self.handle_event(event);
            timeout = Duration::ZERO;
        }

        self.size = self.terminal.size()?;
        Ok(!self.close_requested)
    }

    fn end_frame(&mut self) -> Result<(), ShellError> {
        let ops = std::mem::take(&mut self.ops);
        let cell = self.cell;
        self.terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            for op in &ops {
                paint(buf, area, cell, op);
            }
        })?;
        Ok(())
    }

    fn request_close(&mut self) {
        self.close_requested = true;
    }

    fn input(&self) -> &InputState {
        &self.input
    }

    fn draw_text(&mut self, text: &str, position: Vector2, _font_size: f32, _spacing: f32, color: Color) {
        let clip = self.current_clip();
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            position,
            color,
            clip,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let clip = self.current_clip();
        self.ops.push(DrawOp::Fill { rect, color, clip });
    }

    fn begin_clip(&mut self, rect: Rect) {
        let clip = match self.current_clip() {
            Some(outer) => outer.intersect(&rect),
            None => rect,
        };
        self.clip_stack.push(clip);
    }

    fn end_clip(&mut self) {
        self.clip_stack.pop();
    }
}

fn paint(buf: &mut Buffer, area: CellRect, cell: CellMetrics, op: &DrawOp) {
    match op {
        DrawOp::Text {
            text,
            position,
            color,
            clip,
        } => {
            let bounds = clip.map_or(area, |clip| cell.cover(clip, area));
            paint_text(buf, bounds, cell, text, *position, *color);
        }
        DrawOp::Fill { rect, color, clip } => {
            let mut target = cell.cover(*rect, area);
            if let Some(clip) = clip {
                target = target.intersection(cell.cover(*clip, area));
            }
            buf.set_style(target, Style::default().bg(*color));
        }
    }
}

fn paint_text(
    buf: &mut Buffer,
    bounds: CellRect,
    cell: CellMetrics,
    text: &str,
    position: Vector2,
    color: Color,
) {
    let row = (position.y / cell.height).round();
    if row < f32::from(bounds.top()) || row >= f32::from(bounds.bottom()) {
        return;
    }

    let left = i32::from(bounds.left());
    let right = i32::from(bounds.right());
    let mut column = (position.x / cell.width).round() as i32;
    let mut start = None;
    let mut visible = String::new();
    for ch in text.chars().map(grid_char) {
        let width = grid_columns(ch) as i32;
        if column + width > right {
            break;
        }
        if column >= left {
            start.get_or_insert(column);
            visible.push(ch);
        }
        column += width;
    }

    if let Some(start) = start {
        buf.set_string(start as u16, row as u16, visible, Style::default().fg(color));
    }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;
