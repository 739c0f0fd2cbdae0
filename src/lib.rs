//! Text Window (textwindow)
//!
//! Full-screen, scrollable text viewer with a single exit/reboot button.
//!
//! Text is word-wrapped to the window width once ([`text::wrap_text`]) and
//! rendered every frame by a background thread owned by a
//! [`session::TextWindow`].

pub mod config;
pub mod logging;
pub mod model;
pub mod platform;
pub mod session;
pub mod shell;
pub mod text;
pub mod view;
pub mod widgets;
