//! Empty state shown before any details are fetched or when nothing matched.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;
use std::io::{self, Write};

/// Renders a centered two-line message.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// # Errors
///
/// Propagates write errors.
pub fn render_empty_state<W: Write + ?Sized>(
    out: &mut W,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
) -> io::Result<()> {
    let msg_len = empty.message.chars().count();
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    writeln!(out)?;
    write!(out, "{}", Theme::fg(&theme.colors.empty_state_fg))?;
    write!(out, "{}", " ".repeat(msg_padding))?;
    write!(out, "{}", empty.message)?;
    writeln!(out, "{}", Theme::reset())?;

    let sub_len = empty.subtitle.chars().count();
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    write!(out, "{}", Theme::dim())?;
    write!(out, "{}", Theme::fg(&theme.colors.text_dim))?;
    write!(out, "{}", " ".repeat(sub_padding))?;
    write!(out, "{}", empty.subtitle)?;
    writeln!(out, "{}", Theme::reset())
}
