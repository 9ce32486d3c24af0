//! ANSI component renderers.
//!
//! Each component writes one part of the screen to any [`Write`] sink:
//!
//! - `header`: title bar, status line and alert
//! - `search`: active search box
//! - `table`: attribute tables
//! - `code`: code blocks with highlights
//! - `empty`: empty state
//! - `footer`: toggle label and visibility summary
//!
//! [`AnsiRenderer`] implements the [`Renderer`] capability on top of them.
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Status / Alert]
//! [Search Bar - 3 lines, while searching]
//! [Border]
//! [Results or Empty State]
//! [Border]
//! [Footer]
//! ```

mod code;
mod empty;
mod footer;
mod header;
mod search;
mod table;

pub use code::split_lines;
pub use empty::render_empty_state;

use crate::domain::error::Result;
use crate::ui::helpers::{write_highlighted, Highlighted};
use crate::ui::renderer::{Heading, Renderer};
use crate::ui::sections::AttributeTable;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use std::io::{self, Write};

/// Spaces per nesting level.
const INDENT: usize = 2;

/// Renders a horizontal border line.
fn render_border<W: Write + ?Sized>(out: &mut W, color: &str, cols: usize) -> io::Result<()> {
    writeln!(out, "{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset())
}

/// Header, status, alert, search box and the top border.
///
/// # Errors
///
/// Propagates write errors.
pub fn render_chrome_top<W: Write + ?Sized>(
    out: &mut W,
    vm: &UIViewModel,
    theme: &Theme,
    cols: usize,
) -> Result<()> {
    header::render_header(out, &vm.header, theme, cols)?;
    if let Some(status) = &vm.status {
        header::render_status(out, status, theme)?;
    }
    if let Some(alert) = &vm.alert {
        header::render_alert(out, alert, theme)?;
    }
    if let Some(search) = &vm.search_bar {
        search::render_search_bar(out, search, theme, cols)?;
    }
    render_border(out, &theme.colors.border, cols)?;
    Ok(())
}

/// Bottom border and footer.
///
/// # Errors
///
/// Propagates write errors.
pub fn render_chrome_bottom<W: Write + ?Sized>(
    out: &mut W,
    vm: &UIViewModel,
    theme: &Theme,
    cols: usize,
) -> Result<()> {
    render_border(out, &theme.colors.border, cols)?;
    footer::render_footer(out, &vm.footer, theme, cols)?;
    Ok(())
}

/// [`Renderer`] writing ANSI-styled lines.
pub struct AnsiRenderer<'a, W: Write + ?Sized> {
    out: &'a mut W,
    theme: &'a Theme,
    cols: usize,
}

impl<'a, W: Write + ?Sized> AnsiRenderer<'a, W> {
    pub fn new(out: &'a mut W, theme: &'a Theme, cols: usize) -> Self {
        Self { out, theme, cols }
    }

    fn indent(depth: usize) -> String {
        " ".repeat(depth * INDENT)
    }

    fn render_item_header(&mut self, header: &Highlighted, title_len: usize, expanded: bool, depth: usize) -> io::Result<()> {
        let theme = self.theme;
        let colors = &theme.colors;
        let icon = if expanded { "−" } else { "+" };
        let (title, subtitle) = header.split_at(title_len);
        let title_style = format!("{}{}", Theme::bold(), Theme::fg(&colors.item_fg));
        let subtitle_style = Theme::fg(&colors.subtitle_fg);

        write!(self.out, "{}{}{icon} {title_style}", Self::indent(depth), Theme::fg(&colors.text_dim))?;
        write_highlighted(self.out, &title, self.theme, &title_style)?;
        write!(self.out, "{}{subtitle_style}", Theme::reset())?;
        write_highlighted(self.out, &subtitle, self.theme, &subtitle_style)?;
        writeln!(self.out, "{}", Theme::reset())
    }
}

impl<W: Write + ?Sized> Renderer for AnsiRenderer<'_, W> {
    fn render_section(&mut self, heading: Heading<'_>, depth: usize) -> Result<()> {
        let theme = self.theme;
        let colors = &theme.colors;
        let indent = Self::indent(depth);
        match heading {
            Heading::Group { title } => {
                writeln!(self.out)?;
                writeln!(
                    self.out,
                    "{indent}{}{}{title}{}",
                    Theme::bold(),
                    Theme::fg(&colors.group_fg),
                    Theme::reset()
                )?;
            }
            Heading::Item { header, title_len, expanded } => {
                self.render_item_header(header, title_len, expanded, depth)?;
            }
            Heading::Subsection { title } => {
                writeln!(self.out, "{indent}{}{}{title}:{}", Theme::bold(), Theme::fg(&colors.text_normal), Theme::reset())?;
            }
            Heading::Card => {
                let width = self.cols.saturating_sub(indent.len()).min(40);
                writeln!(self.out, "{indent}{}{}{}", Theme::fg(&colors.border), "┄".repeat(width), Theme::reset())?;
            }
        }
        Ok(())
    }

    fn render_table(&mut self, table: &AttributeTable, depth: usize) -> Result<()> {
        table::render_table(self.out, table, self.theme, &Self::indent(depth))?;
        Ok(())
    }

    fn render_code_block(&mut self, code: &Highlighted, depth: usize) -> Result<()> {
        code::render_code_block(self.out, code, self.theme, &Self::indent(depth))?;
        Ok(())
    }

    fn render_tags(&mut self, tags: &[String], depth: usize) -> Result<()> {
        let theme = self.theme;
        let colors = &theme.colors;
        write!(self.out, "{}", Self::indent(depth))?;
        for tag in tags {
            write!(
                self.out,
                "{}{} {tag} {} ",
                Theme::fg(&colors.tag_fg),
                Theme::bg(&colors.tag_bg),
                Theme::reset()
            )?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}
