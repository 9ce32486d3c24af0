//! Title bar and inline messages.

use crate::app::modes::StatusKind;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, StatusLine};
use std::io::{self, Write};

/// Renders the title centered and bold, followed by the selection context.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
///  Acme / Main Site
/// ```
///
/// # Errors
///
/// Propagates write errors.
pub fn render_header<W: Write + ?Sized>(
    out: &mut W,
    header: &HeaderInfo,
    theme: &Theme,
    cols: usize,
) -> io::Result<()> {
    let title_len = header.title.chars().count();
    let padding = cols.saturating_sub(title_len) / 2;

    write!(out, "{}", Theme::bold())?;
    write!(out, "{}", Theme::fg(&theme.colors.header_fg))?;
    if let Some(bg) = &theme.colors.header_bg {
        write!(out, "{}", Theme::bg(bg))?;
    }

    write!(out, "{}", " ".repeat(padding))?;
    write!(out, "{}", header.title)?;
    write!(out, "{}", " ".repeat(cols.saturating_sub(padding + title_len)))?;
    writeln!(out, "{}", Theme::reset())?;

    if let Some(context) = &header.context {
        writeln!(out, "{}{} {context}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim), Theme::reset())?;
    }
    Ok(())
}

/// Renders the inline status line; errors use the alert color.
///
/// # Errors
///
/// Propagates write errors.
pub fn render_status<W: Write + ?Sized>(out: &mut W, status: &StatusLine, theme: &Theme) -> io::Result<()> {
    let color = match status.kind {
        StatusKind::Error => &theme.colors.alert_fg,
        StatusKind::Info | StatusKind::Success => &theme.colors.status_fg,
    };
    writeln!(out, "{}{}{}", Theme::fg(color), status.text, Theme::reset())
}

/// Renders an alert as a bold, framed line.
///
/// # Errors
///
/// Propagates write errors.
pub fn render_alert<W: Write + ?Sized>(out: &mut W, alert: &str, theme: &Theme) -> io::Result<()> {
    writeln!(
        out,
        "{}{}! {alert}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.alert_fg),
        Theme::reset()
    )
}
