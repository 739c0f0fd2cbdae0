//! Greedy word wrapping against measured pixel widths.
//!
//! Pure function of its inputs: the same text, font, size and width always
//! produce the same lines.

use super::FontMetrics;

/// Wrap `text` into display lines no wider than `max_width` pixels.
///
/// Paragraph rules:
/// - Each `\n`-separated paragraph is wrapped independently, in order.
/// - A blank (empty or whitespace-only) paragraph becomes one empty line,
///   except while no line has been produced yet, so `""` and leading
///   newlines yield nothing.
/// - Leading whitespace of a paragraph is kept at the start of its first line.
/// - Trailing whitespace is trimmed from every produced line.
///
/// Words are never split: a word that does not fit even on a line of its own
/// stays on the line it starts (after the indent, for the first word of a
/// paragraph) and overflows. A first word that fits on its own but not after
/// the indent moves to the next line, leaving the indent as a blank line.
pub fn wrap_text<F>(font: &F, text: &str, font_size: f32, max_width: f32) -> Vec<String>
where
    F: FontMetrics + ?Sized,
{
    let fits = |line: &str| font.measure_text(line, font_size, 0.0).x <= max_width;
    let mut lines = Vec::new();
    let mut current = String::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            continue;
        }

        let body = paragraph.trim_start();
        current.clear();
        current.push_str(&paragraph[..paragraph.len() - body.len()]);
        let mut has_word = false;

        for (word, gap) in words_with_gaps(body) {
            let line_len = current.len();
            current.push_str(word);
            current.push_str(gap);

            // The first word stays put unless only the indent pushes it over
            let stays_first = !has_word && (line_len == 0 || !fits(word));
            if !stays_first && !fits(&current) {
                current.truncate(line_len);
                lines.push(current.trim_end().to_string());
                current.clear();
                current.push_str(word);
                current.push(' ');
            }
            has_word = true;
        }

        let last = current.trim_end();
        if !last.is_empty() {
            lines.push(last.to_string());
        }
    }

    lines
}

/// Split `body` (which must not start with whitespace) into each word and the
/// whitespace run that follows it.
fn words_with_gaps(body: &str) -> impl Iterator<Item = (&str, &str)> {
    let mut rest = body;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (word, after) = rest.split_at(word_end);
        let gap_end = after
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(after.len());
        let (gap, next) = after.split_at(gap_end);
        rest = next;
        Some((word, gap))
    })
}
