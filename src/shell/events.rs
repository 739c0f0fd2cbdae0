use crossterm::event::{self, Event};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Source of terminal events for [`TerminalShell`](super::TerminalShell).
pub trait EventSource: Send {
    /// Wait up to `timeout` for the next event.
    ///
    /// `Ok(None)` means no event is pending; the shell stops collecting input
    /// for the current frame.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Events read from the real terminal via crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Pre-recorded events, grouped into frames.
///
/// Each group is delivered during one call to `begin_frame`. Once exhausted
/// the source behaves like an idle terminal: it sleeps for the timeout and
/// reports no event.
#[derive(Debug, Default, Clone)]
pub struct ScriptedEvents {
    // `None` marks the end of a frame's events
    queue: VecDeque<Option<Event>>,
}

impl ScriptedEvents {
    /// Build a script where each inner collection is one frame's input.
    pub fn frames<F, E>(frames: F) -> Self
    where
        F: IntoIterator<Item = E>,
        E: IntoIterator<Item = Event>,
    {
        let mut queue = VecDeque::new();
        for frame in frames {
            queue.extend(frame.into_iter().map(Some));
            queue.push_back(None);
        }
        Self { queue }
    }

    /// Number of frames still scripted.
    pub fn remaining_frames(&self) -> usize {
        self.queue.iter().filter(|slot| slot.is_none()).count()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        match self.queue.pop_front() {
            Some(slot) => Ok(slot),
            None => {
                std::thread::sleep(timeout);
                Ok(None)
            }
        }
    }
}
