//! Immediate-mode widgets built on [`AppShell`](crate::shell::AppShell).

mod button;
mod scroll_panel;

pub use button::{ButtonStyle, gui_button};
pub use scroll_panel::ScrollPanel;
