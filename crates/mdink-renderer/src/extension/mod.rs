//! Extension adapters.
//!
//! Two kinds of extensions exist:
//!
//! - Source-level extensions implement [`Extension`]. Before tokenizing, the
//!   scanner replaces every match with a placeholder the tokenizer passes
//!   through untouched: block matches become an HTML block, inline matches a
//!   private-use sentinel inside text. The renderer swaps placeholders for
//!   [`Extension::render`] output, handing in the styles that are current at
//!   that moment.
//! - Alerts and footnote definitions are recognized by the tokenizer itself;
//!   [`alert`] and the footnote module only render them.
//!
//! Block-level extensions are tried at every line start before any inline
//! extension, so a block math region is never split into inline matches.

pub mod alert;
mod fence;
pub(crate) mod footnote;
pub mod math;
pub(crate) mod scanner;
pub mod slider;

use mdink_theme::StyleMap;

use crate::RenderError;
use alert::{AlertKind, AlertStyles};
use math::MathConverter;

/// Where an extension is recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtensionLevel {
    /// At line starts, outside fenced code.
    Block,
    /// Anywhere within a line, outside code spans.
    Inline,
}

/// A successful match reported by [`Extension::tokenize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tokenized {
    /// Number of source bytes consumed.
    pub len: usize,
    /// Payload passed back to [`Extension::render`].
    pub text: String,
    /// Display (block) form.
    pub display: bool,
}

/// A recognized extension occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionToken {
    /// Index of the extension that produced the token.
    pub extension: usize,
    /// Matched source, restored verbatim where the token cannot render
    /// (code blocks, image alt text).
    pub raw: String,
    /// Payload from [`Tokenized::text`].
    pub text: String,
    /// Payload from [`Tokenized::display`].
    pub display: bool,
}

/// Inline styles consumed by extensions, rebuilt when the style mapping changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtensionStyles {
    /// `style` attribute for inline math containers.
    pub inline_math: String,
    /// `style` attribute for display math containers.
    pub block_math: String,
    alerts: [AlertStyles; 5],
}

impl ExtensionStyles {
    /// Derive extension styles from a resolved style mapping.
    #[must_use]
    pub fn from_styles(styles: &StyleMap) -> Self {
        Self {
            inline_math: styles.attr_with("inline_katex", "vertical-align:middle;line-height:1"),
            block_math: styles.attr_with("block_katex", "text-align:center"),
            alerts: AlertKind::ALL.map(|kind| AlertStyles::from_styles(styles, kind)),
        }
    }

    /// Styles of an alert variant.
    #[must_use]
    pub fn alert(&self, kind: AlertKind) -> &AlertStyles {
        &self.alerts[kind as usize]
    }
}

/// Render-time context handed to extensions.
pub struct ExtensionContext<'a> {
    /// Current extension styles.
    pub styles: &'a ExtensionStyles,
    /// Math converter owned by the renderer.
    pub math: &'a mut dyn MathConverter,
}

/// A syntax the tokenizer does not know, recognized on the raw source.
pub trait Extension {
    /// Extension name, used in logs.
    fn name(&self) -> &'static str;

    /// Block or inline.
    fn level(&self) -> ExtensionLevel;

    /// Byte offset of the first possible match in `src`, if any.
    fn start(&self, src: &str) -> Option<usize>;

    /// Try to match at the start of `src`.
    ///
    /// Block extensions receive `src` from the start of a line, including
    /// any container prefix (indentation, `>` markers).
    fn tokenize(&self, src: &str) -> Option<Tokenized>;

    /// Render a token produced by this extension.
    fn render(
        &self,
        token: &ExtensionToken,
        cx: &mut ExtensionContext<'_>,
    ) -> Result<String, RenderError>;
}

/// Default extensions: block math, slider, inline math.
#[must_use]
pub fn default_extensions() -> Vec<Box<dyn Extension>> {
    vec![
        Box::new(math::BlockMath),
        Box::new(slider::Slider),
        Box::new(math::InlineMath),
    ]
}

/// Split a line into its container prefix (indentation and `>` markers) and the rest.
pub(crate) fn container_prefix(line: &str) -> (&str, &str) {
    let end = line
        .find(|c| !matches!(c, ' ' | '\t' | '>'))
        .unwrap_or(line.len());
    line.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdink_theme::{ResolveOptions, Theme, resolve};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_container_prefix() {
        assert_eq!(container_prefix("  > $$\n"), ("  > ", "$$\n"));
        assert_eq!(container_prefix("text"), ("", "text"));
        assert_eq!(container_prefix("   "), ("   ", ""));
    }

    #[test]
    fn test_extension_styles_without_theme() {
        let styles = ExtensionStyles::from_styles(&StyleMap::default());
        assert_eq!(
            styles.inline_math,
            r#" style="line-height:1;vertical-align:middle""#
        );
        assert_eq!(styles.block_math, r#" style="text-align:center""#);
        assert_eq!(styles.alert(AlertKind::Note).container, "");
    }

    #[test]
    fn test_extension_styles_follow_theme() {
        let theme = Theme::from_toml_str(
            r#"
[block.block_katex]
"padding" = "1em"
"text-align" = "left"

[inline.inline_katex]
"line-height" = "1.75"

[block.blockquote]
"color" = "gray"

[block.blockquote_tip]
"border-left-color" = "green"
"#,
        )
        .unwrap();
        let styles = ExtensionStyles::from_styles(&resolve(&theme, &ResolveOptions::default()));
        assert_eq!(styles.block_math, r#" style="padding:1em;text-align:center""#);
        assert_eq!(
            styles.inline_math,
            r#" style="line-height:1;vertical-align:middle""#
        );
        assert_eq!(
            styles.alert(AlertKind::Tip).container,
            r#" style="border-left-color:green;color:gray""#
        );
        assert_eq!(
            styles.alert(AlertKind::Note).container,
            r#" style="color:gray""#
        );
    }
}
