//! Code block component: a gutter bar followed by the code, line by line, with
//! search highlights carried across line breaks.

use crate::ui::helpers::{write_highlighted, Highlighted};
use crate::ui::theme::Theme;
use std::io::{self, Write};

/// Splits highlighted text at newlines, keeping ranges on their lines.
///
/// Ranges are sorted, so a single cursor tracks the first range that can still
/// reach the current line. A range across a newline is cut on both sides.
#[must_use]
pub fn split_lines(text: &Highlighted) -> Vec<Highlighted> {
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut first = 0;

    for line in text.text.split('\n') {
        let line_end = line_start + line.chars().count();
        while text.ranges.get(first).is_some_and(|&(_, end)| end <= line_start) {
            first += 1;
        }
        let ranges = text.ranges[first..]
            .iter()
            .take_while(|&&(start, _)| start < line_end)
            .map(|&(start, end)| (start.max(line_start) - line_start, end.min(line_end) - line_start))
            .filter(|&(start, end)| start < end)
            .collect();
        lines.push(Highlighted {
            text: line.to_string(),
            ranges,
        });
        line_start = line_end + 1;
    }
    lines
}

/// Renders the block at the given indentation.
///
/// # Errors
///
/// Propagates write errors.
pub fn render_code_block<W: Write + ?Sized>(
    out: &mut W,
    code: &Highlighted,
    theme: &Theme,
    indent: &str,
) -> io::Result<()> {
    let code_style = Theme::fg(&theme.colors.code_fg);
    for line in split_lines(code) {
        write!(out, "{indent}{}│ {}", Theme::fg(&theme.colors.border), code_style)?;
        write_highlighted(out, &line, theme, &code_style)?;
        writeln!(out, "{}", Theme::reset())?;
    }
    Ok(())
}
