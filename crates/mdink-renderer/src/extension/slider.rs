//! Image slider: `<![alt](src),![alt](src)>` on its own line.
//!
//! Renders a horizontally scrollable row of full-width figures. The output
//! carries its own styles and does not depend on the theme.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use super::{Extension, ExtensionContext, ExtensionLevel, ExtensionToken, Tokenized};
use crate::RenderError;
use crate::html::escape_html;

static SLIDER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<(!\[[^\]]*\]\([^)]*\)(?:\s*,\s*!\[[^\]]*\]\([^)]*\))*)>$").unwrap()
});

static SLIDE_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"!\[([^\]]*)\]\(\s*([^)\s]*)(?:\s+"([^"]*)")?\s*\)"#).unwrap()
});

const HINT: &str = "&lt;&lt;&lt; 左右滑动见更多 &gt;&gt;&gt;";

/// Block extension for image sliders.
#[derive(Debug, Default)]
pub struct Slider;

impl Extension for Slider {
    fn name(&self) -> &'static str {
        "slider"
    }

    fn level(&self) -> ExtensionLevel {
        ExtensionLevel::Block
    }

    fn start(&self, src: &str) -> Option<usize> {
        src.find("<![")
    }

    fn tokenize(&self, src: &str) -> Option<Tokenized> {
        let line_end = src.find('\n').map_or(src.len(), |i| i + 1);
        let (_, rest) = super::container_prefix(&src[..line_end]);
        let caps = SLIDER_LINE.captures(rest.trim_end())?;
        Some(Tokenized {
            len: line_end,
            text: caps[1].to_owned(),
            display: true,
        })
    }

    fn render(
        &self,
        token: &ExtensionToken,
        _cx: &mut ExtensionContext<'_>,
    ) -> Result<String, RenderError> {
        let mut html = String::from(
            r#"<section style="box-sizing:border-box;font-size:16px;"><section style="overflow-x:auto;white-space:nowrap;width:100%;-webkit-overflow-scrolling:touch;">"#,
        );
        for caps in SLIDE_IMAGE.captures_iter(&token.text) {
            let alt = escape_html(&caps[1]);
            let src = escape_html(&caps[2]);
            let _ = write!(
                html,
                r#"<section style="display:inline-block;width:100%;margin-right:0;vertical-align:top;white-space:normal;"><img src="{src}" alt="{alt}" style="width:100%;height:auto;display:block;margin:0 auto;"/>"#,
            );
            if !alt.is_empty() {
                let _ = write!(
                    html,
                    r#"<p style="margin-top:5px;font-size:14px;color:#666;text-align:center;">{alt}</p>"#
                );
            }
            html.push_str("</section>");
        }
        let _ = write!(
            html,
            r#"</section><p style="font-size:14px;color:#999;text-align:center;margin-top:5px;">{HINT}</p></section>"#
        );
        html.push('\n');
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::ExtensionStyles;
    use crate::extension::math::Latex2MathmlConverter;
    use pretty_assertions::assert_eq;

    fn render(text: &str) -> String {
        let styles = ExtensionStyles::default();
        let mut math = Latex2MathmlConverter::default();
        let mut cx = ExtensionContext {
            styles: &styles,
            math: &mut math,
        };
        let token = ExtensionToken {
            extension: 0,
            raw: String::new(),
            text: text.to_owned(),
            display: true,
        };
        Slider.render(&token, &mut cx).unwrap()
    }

    #[test]
    fn test_tokenize_single_line() {
        let t = Slider.tokenize("<![a](1.png), ![b](2.png)>\nnext").unwrap();
        assert_eq!(t.len, "<![a](1.png), ![b](2.png)>\n".len());
        assert_eq!(t.text, "![a](1.png), ![b](2.png)");
    }

    #[test]
    fn test_tokenize_rejects_trailing_text() {
        assert_eq!(Slider.tokenize("<![a](1.png)> and more\n"), None);
        assert_eq!(Slider.tokenize("<https://example.com>\n"), None);
    }

    #[test]
    fn test_render_panels_and_captions() {
        let html = render(r#"![First](1.png),![](2.png "t")"#);
        assert_eq!(html.matches("<img ").count(), 2);
        assert!(html.contains(r#"src="1.png" alt="First""#));
        assert!(html.contains(">First</p>"));
        assert!(html.contains(r#"src="2.png" alt="""#));
        assert!(html.contains("左右滑动见更多"));
        assert!(html.contains("overflow-x:auto"));
    }

    #[test]
    fn test_render_escapes_attributes() {
        let html = render(r#"![<x>](a"b.png)"#);
        assert!(html.contains("alt=\"&lt;x&gt;\""));
    }
}
