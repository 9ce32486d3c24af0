//! Search bar showing the active keyword and how many items it kept.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;
use std::io::{self, Write};

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders a 3-line bordered box with the query and match count.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────────┐
/// [margin] │ Search: view (2 of 9)    │
/// [margin] └──────────────────────────┘
/// ```
///
/// # Errors
///
/// Propagates write errors.
pub fn render_search_bar<W: Write + ?Sized>(
    out: &mut W,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
) -> io::Result<()> {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.border);

    let search_text = format!(
        " Search: {} ({} of {})",
        search.query, search.matched, search.total
    );
    let search_text: String = search_text.chars().take(inner_width).collect();
    let padding = inner_width.saturating_sub(search_text.chars().count());

    writeln!(out, "{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset())?;
    write!(out, "{margin}{border}│")?;
    write!(out, "{}{search_text}{}", Theme::fg(&theme.colors.text_normal), " ".repeat(padding))?;
    writeln!(out, "{border}│{}", Theme::reset())?;
    writeln!(out, "{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset())
}
