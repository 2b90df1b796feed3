//! Theme customization: primary color and base font size.

use crate::theme::Theme;

/// Code block background: 6% primary color over white.
///
/// Expressed against the primary-color variable, so changing the color only
/// changes `--md-primary-color`.
pub const CODE_BACKGROUND: &str = "color-mix(in srgb, var(--md-primary-color) 6%, #fff)";

/// Customization applied on top of a base theme.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomizeOptions {
    /// Base font size in pixels.
    pub font_size: f64,
    /// Primary color (any CSS color).
    pub color: String,
}

impl CustomizeOptions {
    /// Create customization options.
    #[must_use]
    pub fn new(font_size: f64, color: impl Into<String>) -> Self {
        Self {
            font_size,
            color: color.into(),
        }
    }
}

/// Derive a theme variant with the primary color and font size injected.
///
/// Sets `--md-primary-color`, `--code-background` and `font-size` in `base`,
/// and points the blockquote and code block backgrounds at their CSS
/// variables. The input theme is left untouched.
#[must_use]
pub fn customize(theme: &Theme, options: &CustomizeOptions) -> Theme {
    let mut theme = theme.clone();

    theme
        .base
        .insert("--md-primary-color".to_owned(), options.color.clone());
    theme
        .base
        .insert("--code-background".to_owned(), CODE_BACKGROUND.to_owned());
    theme
        .base
        .insert("font-size".to_owned(), format!("{}px", options.font_size));

    theme
        .block
        .entry("blockquote".to_owned())
        .or_default()
        .insert(
            "background".to_owned(),
            "var(--blockquote-background)".to_owned(),
        );
    theme
        .block
        .entry("code_pre".to_owned())
        .or_default()
        .insert("background".to_owned(), "var(--code-background)".to_owned());

    theme
}
