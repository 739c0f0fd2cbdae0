//! Font metrics used to measure candidate lines.

use crate::model::Vector2;
use unicode_width::UnicodeWidthChar;

/// Measures rendered text.
///
/// Implemented by every application shell so the wrapper measures with the
/// same metrics the shell draws with.
pub trait FontMetrics {
    /// Size in pixels of `text` drawn at `font_size` with `spacing` extra
    /// pixels between glyphs.
    fn measure_text(&self, text: &str, font_size: f32, spacing: f32) -> Vector2;
}

impl<T: FontMetrics + ?Sized> FontMetrics for &T {
    fn measure_text(&self, text: &str, font_size: f32, spacing: f32) -> Vector2 {
        (**self).measure_text(text, font_size, spacing)
    }
}

/// Fixed-advance font: every terminal column is `font_size * advance_ratio`
/// pixels wide.
///
/// Wide characters (CJK, emoji) count as two columns, zero-width characters
/// as none, matching how a terminal lays them out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceFont {
    advance_ratio: f32,
}

impl MonospaceFont {
    /// Advance ratio of a typical monospace face (half as wide as tall).
    pub const DEFAULT_ADVANCE_RATIO: f32 = 0.5;

    /// Create a font with a custom column advance.
    pub fn new(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }

    /// Column advance as a fraction of the font size.
    pub fn advance_ratio(&self) -> f32 {
        self.advance_ratio
    }
}

impl Default for MonospaceFont {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ADVANCE_RATIO)
    }
}

/// `ch` as laid out on a cell grid: control whitespace (tabs, form feeds,
/// stray carriage returns) becomes a plain space.
pub fn grid_char(ch: char) -> char {
    if ch.is_whitespace() && ch.is_control() {
        ' '
    } else {
        ch
    }
}

/// Columns `ch` occupies once mapped through [`grid_char`].
///
/// Other control characters take no room.
pub fn grid_columns(ch: char) -> usize {
    grid_char(ch).width().unwrap_or(0)
}

impl FontMetrics for MonospaceFont {
    fn measure_text(&self, text: &str, font_size: f32, spacing: f32) -> Vector2 {
        let columns = text.chars().map(grid_columns).sum::<usize>() as f32;
        let gaps = text.chars().count().saturating_sub(1) as f32;
        Vector2::new(
            columns * font_size * self.advance_ratio + gaps * spacing,
            font_size,
        )
    }
}
