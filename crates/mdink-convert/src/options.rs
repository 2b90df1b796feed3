//! Conversion options and theme selection.

use mdink_renderer::{DEFAULT_LEGEND, EngineOptions, OptionsPatch};
use mdink_theme::{CustomizeOptions, Theme, builtin, customize};
use serde::{Deserialize, Serialize};

use crate::ConvertError;

/// Base font size when none is given.
pub const DEFAULT_FONT_SIZE: &str = "16px";

/// Primary color when neither the options nor the theme provide one.
pub const FALLBACK_PRIMARY_COLOR: &str = "#000";

/// Options of a single conversion.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Turn outbound links into numbered citations.
    pub cite: bool,
    /// Image caption policy (`alt`, `title`, `alt-title`, `title-alt`, `none`).
    pub legend: String,
    /// Indent paragraphs.
    pub use_indent: bool,
    /// Prepend the word count and reading time banner.
    pub count_words: bool,
    /// Mac-style code block header.
    pub mac_code_block: bool,
    /// Base font family override.
    pub font_family: Option<String>,
    /// Base font size in pixels (`"15px"`).
    pub font_size: Option<String>,
    /// Built-in theme name. Ignored when [`theme`](Self::theme) is set.
    pub theme_name: Option<String>,
    /// Literal theme.
    pub theme: Option<Theme>,
    /// Primary color written to `--md-primary-color`.
    pub primary_color: Option<String>,
    /// Highlight theme name or highlight.js stylesheet href.
    pub code_theme: Option<String>,
    /// Origin whose links stay clickable.
    pub platform_origin: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cite: false,
            legend: DEFAULT_LEGEND.to_owned(),
            use_indent: false,
            count_words: false,
            mac_code_block: false,
            font_family: None,
            font_size: None,
            theme_name: None,
            theme: None,
            primary_color: None,
            code_theme: None,
            platform_origin: None,
        }
    }
}

impl RenderOptions {
    /// Resolve the base theme and customize it with the primary color and font size.
    ///
    /// The base theme is the literal theme, else the named built-in theme
    /// (unknown names fall back to `default`), else `default`. The primary
    /// color falls back to the theme's own `--md-primary-color`, then to black.
    pub fn resolve_theme(&self) -> Result<Theme, ConvertError> {
        let base = match (&self.theme, &self.theme_name) {
            (Some(theme), _) => theme.clone(),
            (None, Some(name)) => builtin::theme_or_default(name)?,
            (None, None) => builtin::theme(builtin::DEFAULT_THEME)?,
        };
        let font_size = parse_font_size(self.font_size.as_deref().unwrap_or(DEFAULT_FONT_SIZE))?;
        let color = self
            .primary_color
            .as_deref()
            .filter(|color| !color.is_empty())
            .or_else(|| base.base.get("--md-primary-color").map(String::as_str))
            .unwrap_or(FALLBACK_PRIMARY_COLOR)
            .to_owned();
        Ok(customize(&base, &CustomizeOptions::new(font_size, color)))
    }

    /// Patch that brings an engine fully in line with these options.
    pub(crate) fn engine_patch(&self, theme: Theme) -> OptionsPatch {
        let defaults = EngineOptions::default();
        OptionsPatch {
            theme: Some(theme),
            font_family: Some(self.font_family.clone()),
            font_size: Some(self.font_size.clone()),
            use_indent: Some(self.use_indent),
            cite: Some(self.cite),
            legend: Some(self.legend.clone()),
            count_words: Some(self.count_words),
            mac_code_block: Some(self.mac_code_block),
            code_theme: Some(self.code_theme.clone().unwrap_or(defaults.code_theme)),
            platform_origin: Some(
                self.platform_origin
                    .clone()
                    .unwrap_or(defaults.platform_origin),
            ),
        }
    }
}

/// Parse a pixel font size such as `15px` (a bare number is accepted).
pub fn parse_font_size(value: &str) -> Result<f64, ConvertError> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    match number.parse::<f64>() {
        Ok(size) if size.is_finite() && size > 0.0 => Ok(size),
        _ => Err(ConvertError::InvalidFontSize(value.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_font_size() {
        assert!((parse_font_size("15px").unwrap() - 15.0).abs() < f64::EPSILON);
        assert!((parse_font_size("17").unwrap() - 17.0).abs() < f64::EPSILON);
        assert!(matches!(
            parse_font_size("large"),
            Err(ConvertError::InvalidFontSize(_))
        ));
        assert!(parse_font_size("-2px").is_err());
    }

    #[test]
    fn test_resolve_theme_defaults() {
        let theme = RenderOptions::default().resolve_theme().unwrap();
        assert_eq!(theme.base["font-size"], "16px");
        // default theme ships its own primary color
        assert_eq!(theme.base["--md-primary-color"], "#0F4C81");
    }

    #[test]
    fn test_resolve_theme_primary_color_wins() {
        let options = RenderOptions {
            theme_name: Some("grace".to_owned()),
            primary_color: Some("#F6C344".to_owned()),
            font_size: Some("15px".to_owned()),
            ..RenderOptions::default()
        };
        let theme = options.resolve_theme().unwrap();
        assert_eq!(theme.base["--md-primary-color"], "#F6C344");
        assert_eq!(theme.base["font-size"], "15px");
    }

    #[test]
    fn test_resolve_theme_literal_without_color() {
        let options = RenderOptions {
            theme: Some(Theme::default()),
            primary_color: Some(String::new()),
            ..RenderOptions::default()
        };
        let theme = options.resolve_theme().unwrap();
        assert_eq!(theme.base["--md-primary-color"], FALLBACK_PRIMARY_COLOR);
    }

    #[test]
    fn test_unknown_theme_name_falls_back() {
        let options = RenderOptions {
            theme_name: Some("nope".to_owned()),
            ..RenderOptions::default()
        };
        let fallback = RenderOptions::default().resolve_theme().unwrap();
        assert_eq!(options.resolve_theme().unwrap(), fallback);
    }

    #[test]
    fn test_deserialize_partial() {
        let options: RenderOptions =
            serde_yaml::from_str("cite: true\ntheme_name: simple\n").unwrap();
        assert!(options.cite);
        assert_eq!(options.theme_name.as_deref(), Some("simple"));
        assert_eq!(options.legend, DEFAULT_LEGEND);
    }
}
