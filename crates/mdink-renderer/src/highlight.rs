//! Syntax highlighting for code blocks.
//!
//! Highlighted code is emitted as `hljs-`-prefixed class spans; the matching
//! stylesheet comes from [`Highlighter::theme_css`] and is injected once per
//! document.

use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::HighlightError;

/// Class prefix shared by highlighted spans and the theme stylesheet.
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hljs-" };

/// Theme used when the requested one cannot be found.
pub const FALLBACK_THEME: &str = "InspiredGitHub";

/// Syntax highlighter used for fenced code blocks.
pub trait Highlighter {
    /// Whether `language` is a known language name or alias.
    fn supports_language(&self, language: &str) -> bool;

    /// Highlight `source` as `language`, returning HTML markup.
    ///
    /// Unknown languages are highlighted as plain text.
    fn highlight(&self, source: &str, language: &str) -> Result<String, HighlightError>;

    /// Stylesheet for a highlight theme, or `None` if the theme is unknown.
    fn theme_css(&self, name: &str) -> Option<String>;
}

/// [`Highlighter`] backed by syntect's bundled syntaxes and themes.
pub struct SyntectHighlighter {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl SyntectHighlighter {
    /// Create a highlighter with the bundled syntax definitions and themes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for SyntectHighlighter {
    fn supports_language(&self, language: &str) -> bool {
        !language.is_empty() && self.syntaxes.find_syntax_by_token(language).is_some()
    }

    fn highlight(&self, source: &str, language: &str) -> Result<String, HighlightError> {
        let syntax = self
            .syntaxes
            .find_syntax_by_token(language)
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, CLASS_STYLE);
        for line in LinesWithEndings::from(source) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(generator.finalize())
    }

    fn theme_css(&self, name: &str) -> Option<String> {
        let theme = self.themes.themes.get(name)?;
        css_for_theme_with_class_style(theme, CLASS_STYLE).ok()
    }
}

/// Theme names to try for a requested highlight theme, in order.
///
/// Accepts a bundled theme name, a highlight.js theme name (`github-dark`) or
/// a stylesheet href (`.../styles/github-dark.min.css`). Ends with
/// [`FALLBACK_THEME`].
#[must_use]
pub fn theme_candidates(requested: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    let mut add = |name: &str| {
        if !name.is_empty() && !candidates.iter().any(|c| c == name) {
            candidates.push(name.to_owned());
        }
    };

    add(requested);

    let stem = requested.rsplit('/').next().unwrap_or(requested);
    let stem = stem.strip_suffix(".css").unwrap_or(stem);
    let stem = stem.strip_suffix(".min").unwrap_or(stem);
    add(stem);
    if let Some(alias) = hljs_alias(stem) {
        add(alias);
    }

    add(FALLBACK_THEME);
    candidates
}

/// Closest bundled theme for common highlight.js theme names.
fn hljs_alias(name: &str) -> Option<&'static str> {
    let alias = match name {
        "github" | "default" | "xcode" | "vs" => "InspiredGitHub",
        "github-dark" | "github-dark-dimmed" | "atom-one-dark" | "nord" => "base16-ocean.dark",
        "atom-one-light" | "stackoverflow-light" => "base16-ocean.light",
        "monokai" | "monokai-sublime" => "base16-mocha.dark",
        "tomorrow-night" | "tomorrow-night-bright" => "base16-eighties.dark",
        "solarized-dark" | "base16/solarized-dark" => "Solarized (dark)",
        "solarized-light" | "base16/solarized-light" => "Solarized (light)",
        _ => return None,
    };
    Some(alias)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_supports_language() {
        let highlighter = SyntectHighlighter::new();
        assert!(highlighter.supports_language("rust"));
        assert!(highlighter.supports_language("rs"));
        assert!(highlighter.supports_language("python"));
        assert!(!highlighter.supports_language("no-such-language"));
        assert!(!highlighter.supports_language(""));
    }

    #[test]
    fn test_highlight_produces_prefixed_classes() {
        let highlighter = SyntectHighlighter::new();
        let html = highlighter.highlight("fn main() {}\n", "rust").unwrap();
        assert!(html.contains(r#"class="hljs-"#));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_highlight_escapes_markup() {
        let highlighter = SyntectHighlighter::new();
        let html = highlighter.highlight("<b>&</b>", "plaintext").unwrap();
        assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
    }

    #[test]
    fn test_unknown_language_is_plain_text() {
        let highlighter = SyntectHighlighter::new();
        let html = highlighter.highlight("x = 1", "no-such-language").unwrap();
        assert!(html.contains("x = 1"));
    }

    #[test]
    fn test_theme_css() {
        let highlighter = SyntectHighlighter::new();
        let css = highlighter.theme_css(FALLBACK_THEME).unwrap();
        assert!(css.contains(".hljs-"));
        assert!(highlighter.theme_css("missing").is_none());
    }

    #[test]
    fn test_theme_candidates_for_href() {
        assert_eq!(
            theme_candidates("https://cdn.example.com/styles/github-dark.min.css"),
            vec![
                "https://cdn.example.com/styles/github-dark.min.css",
                "github-dark",
                "base16-ocean.dark",
                FALLBACK_THEME,
            ]
        );
    }

    #[test]
    fn test_theme_candidates_for_bundled_name() {
        assert_eq!(
            theme_candidates("Solarized (dark)"),
            vec!["Solarized (dark)", FALLBACK_THEME]
        );
    }

    #[test]
    fn test_theme_candidates_for_hljs_name() {
        assert_eq!(
            theme_candidates("github"),
            vec!["github", FALLBACK_THEME]
        );
    }
}
