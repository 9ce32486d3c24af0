//! Platform path helpers.
//!
//! Resolves where the session store and trace files live and expands `~` in
//! user-supplied paths.

use std::path::PathBuf;

/// Directory name under the platform data directory.
const APP_DIR_NAME: &str = "reactor-explorer";

/// Returns the default data directory for session and trace files.
///
/// Resolves to the platform data directory (`~/.local/share` on Linux,
/// `~/Library/Application Support` on macOS) joined with `reactor-explorer`.
/// Falls back to a relative `.reactor-explorer` when no data directory exists.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(format!(".{APP_DIR_NAME}")),
        |dir| dir.join(APP_DIR_NAME),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// # Examples
///
/// ```
/// use reactor_explorer::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path").to_str(), Some("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
