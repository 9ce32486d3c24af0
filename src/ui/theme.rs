//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are bundled TOML files; custom themes are loaded from a
//! TOML file with the same shape.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark theme (default)
//! - `catppuccin-latte`: light theme
//! - `plain`: high-contrast, minimal palette
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! group_fg = "#89b4fa"
//! item_fg = "#f5c2e7"
//! subtitle_fg = "#a6adc8"
//! tag_fg = "#1e1e2e"
//! tag_bg = "#94e2d5"
//! code_fg = "#a6e3a1"
//! table_key_fg = "#fab387"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! status_fg = "#a6e3a1"
//! alert_fg = "#f38ba8"
//! empty_state_fg = "#89b4fa"
//! ```

use crate::domain::error::{ExplorerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4"). A malformed color renders as
/// white instead of failing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title bar text color.
    pub header_fg: String,
    /// Optional title bar background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Group heading color ("Rules", "Data Elements", "Extensions").
    pub group_fg: String,
    /// Collapsible item title color.
    pub item_fg: String,
    /// Item subtitle color (revision and status).
    pub subtitle_fg: String,

    /// Descriptor tag foreground.
    pub tag_fg: String,
    /// Descriptor tag background.
    pub tag_bg: String,

    /// Code block text color.
    pub code_fg: String,
    /// Attribute table key column color.
    pub table_key_fg: String,

    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Inline status message color.
    pub status_fg: String,
    /// Alert message color.
    pub alert_fg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "plain" => include_str!("../../themes/plain.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ExplorerError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| ExplorerError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Resolves the configured theme: a theme file wins over a built-in name.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Theme`] for an unknown built-in name or an
    /// unreadable theme file.
    pub fn resolve(name: Option<&str>, file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            return Self::from_file(path);
        }
        match name {
            Some(name) => Self::from_name(name)
                .ok_or_else(|| ExplorerError::Theme(format!("unknown theme '{name}'"))),
            None => Ok(Self::default()),
        }
    }

    /// Converts a hex color to an RGB tuple; white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The bundled default theme; degrades to an all-white palette if the
    /// bundled file ever fails to parse.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(|| Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors::default(),
        })
    }
}
