//! Built-in themes.
//!
//! `default` is a complete theme; the others are overlays merged on top of it.

use crate::{Theme, ThemeError};

const DEFAULT: &str = include_str!("../themes/default.toml");
const GRACE: &str = include_str!("../themes/grace.toml");
const SIMPLE: &str = include_str!("../themes/simple.toml");

/// Name of the theme used when none is selected.
pub const DEFAULT_THEME: &str = "default";

/// Names of all built-in themes.
pub const NAMES: &[&str] = &["default", "grace", "simple"];

/// Load a built-in theme by name.
pub fn theme(name: &str) -> Result<Theme, ThemeError> {
    let overlay = match name {
        "default" => return Theme::from_toml_str(DEFAULT),
        "grace" => GRACE,
        "simple" => SIMPLE,
        _ => return Err(ThemeError::UnknownTheme(name.to_owned())),
    };
    let base = Theme::from_toml_str(DEFAULT)?;
    let overlay = Theme::from_toml_str(overlay)?;
    let merged = base.overlay(&overlay);
    merged.validate()?;
    Ok(merged)
}

/// Load a built-in theme, falling back to the default theme for unknown names.
pub fn theme_or_default(name: &str) -> Result<Theme, ThemeError> {
    match theme(name) {
        Err(ThemeError::UnknownTheme(_)) => {
            tracing::warn!(theme = %name, "Unknown theme, using {DEFAULT_THEME}");
            theme(DEFAULT_THEME)
        }
        result => result,
    }
}
