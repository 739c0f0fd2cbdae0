//! Text window session: owns the background render thread.
//!
//! # Lifecycle
//!
//! ```text
//! Created -> Running -> Stopping -> Closed
//!        \-> Skipped (headless)
//! ```
//!
//! The worker thread opens the window, lays out the text, reports readiness
//! over a one-shot channel and then renders until the stop flag is set or the
//! window is closed. A second channel is disconnected when the worker
//! returns, which is what [`TextWindow::close`] waits on with a deadline.

mod window_guard;

pub use window_guard::WindowGuard;

use crate::config::ResolvedConfig;
use crate::model::{SessionError, ShellError, Vector2};
use crate::platform::Platform;
use crate::shell::AppShell;
use crate::view::{TextWindowRenderer, ViewerLayout};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// How long `close` waits for the worker unless configured otherwise.
pub const DEFAULT_JOIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Worker spawned, window not yet ready.
    Created,
    /// Window open and rendering.
    Running,
    /// Stop requested; the worker missed its deadline and was abandoned.
    Stopping,
    /// Worker finished and window released.
    Closed,
    /// Headless environment: no window was ever opened.
    Skipped,
}

/// Signal sent by the worker once the window is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Window open and text laid out.
    Ready {
        /// Number of wrapped display lines.
        line_count: usize,
    },
    /// Headless environment, nothing will be shown.
    Skipped,
}

/// Settings for one text window session.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerOptions {
    /// Window title.
    pub title: String,
    /// Layout dimensions.
    pub layout: ViewerLayout,
    /// Skip the window entirely (CI / no display).
    pub headless: bool,
    /// Deadline for the worker to finish after `close`.
    pub join_timeout: Duration,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            title: "Text".to_string(),
            layout: ViewerLayout::default(),
            headless: false,
            join_timeout: DEFAULT_JOIN_TIMEOUT,
        }
    }
}

impl ViewerOptions {
    /// Options taken from resolved configuration.
    pub fn from_config(config: &ResolvedConfig, headless: bool) -> Self {
        Self {
            title: config.title.clone(),
            layout: config.layout(),
            headless,
            join_timeout: config.join_timeout(),
        }
    }
}

/// A full-screen text viewer running on its own thread.
///
/// Dropping the session closes it.
#[derive(Debug)]
pub struct TextWindow {
    state: SessionState,
    line_count: Option<usize>,
    stop: Arc<AtomicBool>,
    finished: Option<Receiver<()>>,
    handle: Option<JoinHandle<()>>,
    join_timeout: Duration,
}

impl TextWindow {
    /// Start showing `text` and wait until the window is ready.
    ///
    /// Returns once the text has been laid out, the session was skipped
    /// because `options.headless` is set, or the worker gave up (e.g. the
    /// window could not be opened; the session is then already `Closed`).
    pub fn spawn<S, P>(
        text: impl Into<String>,
        shell: S,
        platform: P,
        options: ViewerOptions,
    ) -> Result<Self, SessionError>
    where
        S: AppShell + Send + 'static,
        P: Platform + 'static,
    {
        let text = text.into();
        let stop = Arc::new(AtomicBool::new(false));
        let (ready_tx, ready_rx) = mpsc::channel();
        let (finished_tx, finished_rx) = mpsc::channel::<()>();
        let join_timeout = options.join_timeout;

        let worker_stop = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("text-window".to_string())
            .spawn(move || {
                // Disconnects `finished` on every exit path, unwinding included
                let _finished = finished_tx;
                run_worker(&text, shell, &platform, &options, &worker_stop, &ready_tx);
            })
            .map_err(SessionError::Spawn)?;

        let mut window = Self {
            state: SessionState::Created,
            line_count: None,
            stop,
            finished: Some(finished_rx),
            handle: Some(handle),
            join_timeout,
        };

        match ready_rx.recv() {
            Ok(Readiness::Ready { line_count }) => {
                window.state = SessionState::Running;
                window.line_count = Some(line_count);
            }
            Ok(Readiness::Skipped) => {
                window.finish();
                window.state = SessionState::Skipped;
            }
            Err(_) => {
                debug!("Text window worker exited before becoming ready");
                window.finish();
            }
        }

        Ok(window)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of wrapped display lines, once the window was ready.
    pub fn line_count(&self) -> Option<usize> {
        self.line_count
    }

    /// Whether the worker thread has returned.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Block until the window is closed by the user.
    pub fn wait_for_exit(&mut self) {
        if let Some(finished) = self.finished.take() {
            // Only ever disconnected, never sent to
            let _ = finished.recv();
            self.finish();
        }
    }

    /// Stop rendering and release the window.
    ///
    /// Waits at most the join timeout; a worker that does not finish in time
    /// is abandoned with a warning. Safe to call repeatedly.
    pub fn close(&mut self) {
        let Some(finished) = self.finished.take() else {
            return;
        };

        self.stop.store(true, Ordering::Release);
        match finished.recv_timeout(self.join_timeout) {
            Err(RecvTimeoutError::Timeout) => {
                warn!(
                    timeout_ms = self.join_timeout.as_millis() as u64,
                    "Failed to join text window thread"
                );
                self.handle = None;
                self.state = SessionState::Stopping;
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => self.finish(),
        }
    }

    /// Join a worker known to have returned.
    fn finish(&mut self) {
        self.finished = None;
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("Text window thread panicked");
            }
        }
        if self.state != SessionState::Skipped {
            self.state = SessionState::Closed;
        }
    }
}

impl Drop for TextWindow {
    fn drop(&mut self) {
        self.close();
    }
}

fn run_worker<S, P>(
    text: &str,
    mut shell: S,
    platform: &P,
    options: &ViewerOptions,
    stop: &AtomicBool,
    ready: &Sender<Readiness>,
) where
    S: AppShell,
    P: Platform + ?Sized,
{
    if options.headless {
        info!("Headless environment, not opening text window");
        let _ = ready.send(Readiness::Skipped);
        return;
    }

    match render_loop(text, &mut shell, platform, options, stop, ready) {
        Ok(frames) => info!(frames, "Text window closed"),
        Err(err) => error!(error = %err, "Text window render loop failed"),
    }
}

/// Open the window, publish readiness and render until stopped or closed.
///
/// Returns the number of frames rendered.
fn render_loop<S, P>(
    text: &str,
    shell: &mut S,
    platform: &P,
    options: &ViewerOptions,
    stop: &AtomicBool,
    ready: &Sender<Readiness>,
) -> Result<u64, ShellError>
where
    S: AppShell,
    P: Platform + ?Sized,
{
    let mut window = WindowGuard::open(shell, &options.title)?;
    let size = Vector2::new(window.width(), window.height());
    let mut renderer = TextWindowRenderer::new(&*window, text, size, options.layout);
    let _ = ready.send(Readiness::Ready {
        line_count: renderer.lines().len(),
    });

    let mut frames = 0;
    while window.begin_frame()? {
        if stop.load(Ordering::Acquire) {
            debug!("Stop requested, leaving render loop");
            break;
        }
        renderer.render(&mut *window, platform);
        window.end_frame()?;
        frames += 1;
    }
    Ok(frames)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
