//! Text measurement and word wrapping (pure core).

mod demo;
pub mod font;
pub mod wrap;

pub use demo::DEMO_TEXT;
pub use font::{FontMetrics, MonospaceFont, grid_char, grid_columns};
pub use wrap::wrap_text;
