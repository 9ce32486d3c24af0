//! Footer hint bar.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;
use std::io::{self, Write};

/// Renders the footer hint centered and dimmed.
///
/// Text wider than the terminal is cut to fit.
///
/// # Errors
///
/// Propagates write errors.
pub fn render_footer<W: Write + ?Sized>(
    out: &mut W,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
) -> io::Result<()> {
    let hint: String = footer.hint.chars().take(cols).collect();
    let text_len = hint.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    write!(out, "{}", Theme::fg(&theme.colors.text_dim))?;
    write!(out, "{}", " ".repeat(padding))?;
    write!(out, "{hint}")?;
    write!(out, "{}", " ".repeat(cols.saturating_sub(padding + text_len)))?;
    writeln!(out, "{}", Theme::reset())
}
