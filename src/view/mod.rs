//! Text window rendering: layout of wrapped lines and the per-frame draw.

pub mod constants;
mod text_window;

pub use text_window::{TextWindowRenderer, ViewerLayout};
