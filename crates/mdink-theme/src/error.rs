//! Theme error types.

use std::path::PathBuf;

/// Error loading or validating a theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// Theme file could not be read.
    #[error("Failed to read theme {}: {source}", path.display())]
    Io {
        /// Path of the theme file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Theme TOML is malformed.
    #[error("Theme parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// A token kind is declared in both the `block` and `inline` tables.
    #[error("Token kind '{0}' is declared in both [block] and [inline]")]
    KindCollision(String),
    /// No built-in theme with this name.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}
