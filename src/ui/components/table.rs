//! Attribute table component.
//!
//! Two columns: the attribute key, padded to the widest key, and the value.
//! Multi-line values (pretty-printed JSON) continue under the value column.

use crate::ui::sections::AttributeTable;
use crate::ui::theme::Theme;
use std::io::{self, Write};

/// Widest key column before keys are no longer padded.
const MAX_KEY_WIDTH: usize = 32;

/// Renders every row at the given indentation.
///
/// # Errors
///
/// Propagates write errors.
pub fn render_table<W: Write + ?Sized>(
    out: &mut W,
    table: &AttributeTable,
    theme: &Theme,
    indent: &str,
) -> io::Result<()> {
    let key_width = table
        .rows
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_KEY_WIDTH);

    for (key, value) in &table.rows {
        let mut lines = value.lines();
        let first = lines.next().unwrap_or_default();

        write!(out, "{indent}{}", Theme::fg(&theme.colors.table_key_fg))?;
        write!(out, "{key:<key_width$}")?;
        write!(out, "{}  {}", Theme::reset(), Theme::fg(&theme.colors.text_normal))?;
        writeln!(out, "{first}{}", Theme::reset())?;

        for line in lines {
            writeln!(
                out,
                "{indent}{}  {}{line}{}",
                " ".repeat(key_width),
                Theme::fg(&theme.colors.text_normal),
                Theme::reset()
            )?;
        }
    }
    Ok(())
}
