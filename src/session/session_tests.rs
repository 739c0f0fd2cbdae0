//! Tests for the text window session lifecycle.

use super::*;
use crate::model::{PlatformError, Rect};
use crate::shell::{InputState, ScriptedEvents, TerminalShell};
use crate::text::{FontMetrics, MonospaceFont, wrap_text};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::style::Color;
use std::sync::atomic::AtomicUsize;
use std::time::Instant;

const TEXT: &str = "first line\nsecond line\n\nfourth line";

fn terminal_shell(frames: Vec<Vec<Event>>) -> TerminalShell<TestBackend> {
    TerminalShell::new(TestBackend::new(80, 24), ScriptedEvents::frames(frames))
        .unwrap()
        .with_frame_interval(Duration::from_millis(1))
}

fn esc() -> Event {
    Event::Key(KeyEvent::from(KeyCode::Esc))
}

fn click(column: u16, row: u16) -> Vec<Event> {
    [
        MouseEventKind::Down(MouseButton::Left),
        MouseEventKind::Up(MouseButton::Left),
    ]
    .into_iter()
    .map(|kind| {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    })
    .collect()
}

#[derive(Clone)]
struct CountingPlatform {
    pc: bool,
    reboots: Arc<AtomicUsize>,
}

impl CountingPlatform {
    fn new(pc: bool) -> Self {
        Self {
            pc,
            reboots: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Platform for CountingPlatform {
    fn is_pc(&self) -> bool {
        self.pc
    }

    fn reboot(&self) -> Result<(), PlatformError> {
        self.reboots.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Shell that draws nothing, with controllable failures and frame pacing.
struct StubShell {
    fail_init: bool,
    frame_delay: Duration,
    open: bool,
    input: InputState,
    closes: Arc<AtomicUsize>,
}

impl StubShell {
    fn new() -> Self {
        Self {
            fail_init: false,
            frame_delay: Duration::from_millis(1),
            open: false,
            input: InputState::default(),
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl FontMetrics for StubShell {
    fn measure_text(&self, text: &str, font_size: f32, spacing: f32) -> Vector2 {
        MonospaceFont::default().measure_text(text, font_size, spacing)
    }
}

impl AppShell for StubShell {
    fn init_window(&mut self, _title: &str) -> Result<(), ShellError> {
        if self.fail_init {
            return Err(ShellError::Io(std::io::Error::other("no display")));
        }
        self.open = true;
        Ok(())
    }

    fn close_window(&mut self) -> Result<(), ShellError> {
        if self.open {
            self.open = false;
            self.closes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }

    fn width(&self) -> f32 {
        2160.0
    }

    fn height(&self) -> f32 {
        1080.0
    }

    fn begin_frame(&mut self) -> Result<bool, ShellError> {
        thread::sleep(self.frame_delay);
        Ok(self.open)
    }

    fn end_frame(&mut self) -> Result<(), ShellError> {
        Ok(())
    }

    fn request_close(&mut self) {
        self.open = false;
    }

    fn input(&self) -> &InputState {
        &self.input
    }

    fn draw_text(&mut self, _: &str, _: Vector2, _: f32, _: f32, _: Color) {}

    fn fill_rect(&mut self, _: Rect, _: Color) {}

    fn begin_clip(&mut self, _: Rect) {}

    fn end_clip(&mut self) {}
}

#[test]
fn headless_session_is_skipped() {
    let options = ViewerOptions {
        headless: true,
        ..ViewerOptions::default()
    };
    let mut window = TextWindow::spawn(
        TEXT,
        terminal_shell(vec![]),
        CountingPlatform::new(true),
        options,
    )
    .unwrap();

    assert_eq!(window.state(), SessionState::Skipped);
    assert_eq!(window.line_count(), None);
    assert!(window.is_finished());

    let started = Instant::now();
    window.close();
    window.close();
    window.wait_for_exit();
    assert!(started.elapsed() < Duration::from_secs(1));
    assert_eq!(window.state(), SessionState::Skipped);
}

#[test]
fn ready_session_reports_wrapped_line_count() {
    let mut window = TextWindow::spawn(
        TEXT,
        terminal_shell(vec![vec![], vec![esc()]]),
        CountingPlatform::new(true),
        ViewerOptions::default(),
    )
    .unwrap();

    assert_eq!(window.state(), SessionState::Running);
    assert_eq!(window.line_count(), Some(4));

    window.wait_for_exit();
    assert_eq!(window.state(), SessionState::Closed);
    assert!(window.is_finished());
}

#[test]
fn line_count_matches_wrapper_for_window_width() {
    let text = "lorem ipsum dolor sit amet ".repeat(40);
    // 80 columns * 32px, minus margin and text inset
    let expected = wrap_text(&MonospaceFont::default(), &text, 64.0, 2560.0 - 8.0 - 20.0).len();

    let mut window = TextWindow::spawn(
        text,
        terminal_shell(vec![vec![esc()]]),
        CountingPlatform::new(true),
        ViewerOptions::default(),
    )
    .unwrap();

    assert_eq!(window.line_count(), Some(expected));
    assert!(expected > 1);
    window.wait_for_exit();
}

#[test]
fn close_stops_an_idle_window() {
    let mut window = TextWindow::spawn(
        TEXT,
        terminal_shell(vec![]),
        CountingPlatform::new(true),
        ViewerOptions::default(),
    )
    .unwrap();
    assert_eq!(window.state(), SessionState::Running);

    let started = Instant::now();
    window.close();
    assert!(started.elapsed() < DEFAULT_JOIN_TIMEOUT);
    assert_eq!(window.state(), SessionState::Closed);
    assert!(window.is_finished());
}

#[test]
fn close_is_idempotent() {
    let mut window = TextWindow::spawn(
        TEXT,
        terminal_shell(vec![]),
        CountingPlatform::new(true),
        ViewerOptions::default(),
    )
    .unwrap();

    window.close();
    let started = Instant::now();
    window.close();
    window.wait_for_exit();
    assert!(started.elapsed() < Duration::from_millis(100));
    assert_eq!(window.state(), SessionState::Closed);
}

#[test]
fn exit_button_ends_session_on_desktop() {
    // Button label sits around column 73, row 22 on an 80x24 terminal
    let mut window = TextWindow::spawn(
        TEXT,
        terminal_shell(vec![vec![], click(74, 22)]),
        CountingPlatform::new(true),
        ViewerOptions::default(),
    )
    .unwrap();

    window.wait_for_exit();
    assert_eq!(window.state(), SessionState::Closed);
}

#[test]
fn reboot_button_reboots_device_and_keeps_window() {
    let platform = CountingPlatform::new(false);
    let reboots = Arc::clone(&platform.reboots);
    let mut window = TextWindow::spawn(
        TEXT,
        terminal_shell(vec![click(74, 22), vec![], vec![esc()]]),
        platform,
        ViewerOptions::default(),
    )
    .unwrap();

    window.wait_for_exit();
    assert_eq!(reboots.load(Ordering::SeqCst), 1);
}

#[test]
fn failed_window_open_leaves_session_closed() {
    let shell = StubShell {
        fail_init: true,
        ..StubShell::new()
    };
    let mut window = TextWindow::spawn(
        TEXT,
        shell,
        CountingPlatform::new(true),
        ViewerOptions::default(),
    )
    .unwrap();

    assert_eq!(window.state(), SessionState::Closed);
    assert_eq!(window.line_count(), None);
    window.close();
}

#[test]
fn window_is_released_exactly_once() {
    let shell = StubShell::new();
    let closes = Arc::clone(&shell.closes);
    let mut window = TextWindow::spawn(
        TEXT,
        shell,
        CountingPlatform::new(true),
        ViewerOptions::default(),
    )
    .unwrap();

    window.close();
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[test]
fn slow_worker_is_abandoned_after_timeout() {
    let shell = StubShell {
        frame_delay: Duration::from_millis(500),
        ..StubShell::new()
    };
    let options = ViewerOptions {
        join_timeout: Duration::from_millis(50),
        ..ViewerOptions::default()
    };
    let mut window =
        TextWindow::spawn(TEXT, shell, CountingPlatform::new(true), options).unwrap();

    let started = Instant::now();
    window.close();
    assert!(started.elapsed() < Duration::from_millis(400));
    assert_eq!(window.state(), SessionState::Stopping);

    // Second close does not wait again
    let started = Instant::now();
    window.close();
    assert!(started.elapsed() < Duration::from_millis(50));
}

#[test]
fn drop_closes_the_session() {
    let shell = StubShell::new();
    let closes = Arc::clone(&shell.closes);
    let window = TextWindow::spawn(
        TEXT,
        shell,
        CountingPlatform::new(true),
        ViewerOptions::default(),
    )
    .unwrap();

    drop(window);
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}
