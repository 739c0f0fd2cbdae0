//! Domain model types (pure).

pub mod error;
pub mod geometry;

pub use error::{AppError, PlatformError, SessionError, ShellError};
pub use geometry::{Rect, Vector2};
