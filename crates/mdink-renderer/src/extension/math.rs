//! TeX math: `$…$` and `$$…$$` inline, `$$` fenced blocks.

use std::collections::HashMap;

use latex2mathml::{DisplayStyle, latex_to_mathml};

use super::{Extension, ExtensionContext, ExtensionLevel, ExtensionToken, Tokenized};
use crate::{MathError, RenderError};

/// Converts TeX source into markup.
pub trait MathConverter {
    /// Convert `tex`; `display` selects block layout.
    fn convert(&mut self, tex: &str, display: bool) -> Result<String, MathError>;

    /// Drop per-document state. Called once at the start of every render.
    fn reset(&mut self) {}
}

/// [`MathConverter`] producing `MathML` through `latex2mathml`.
///
/// Repeated expressions within one document are converted once.
#[derive(Debug, Default)]
pub struct Latex2MathmlConverter {
    cache: HashMap<(String, bool), String>,
}

impl MathConverter for Latex2MathmlConverter {
    fn convert(&mut self, tex: &str, display: bool) -> Result<String, MathError> {
        let key = (tex.to_owned(), display);
        if let Some(markup) = self.cache.get(&key) {
            return Ok(markup.clone());
        }
        let style = if display {
            DisplayStyle::Block
        } else {
            DisplayStyle::Inline
        };
        let markup = latex_to_mathml(tex, style).map_err(|e| MathError::Convert {
            tex: tex.to_owned(),
            message: e.to_string(),
        })?;
        self.cache.insert(key, markup.clone());
        Ok(markup)
    }

    fn reset(&mut self) {
        self.cache.clear();
    }
}

/// Characters allowed right after a closing inline delimiter.
fn ends_inline_math(c: char) -> bool {
    c.is_whitespace() || "?!.,:？！。，：".contains(c)
}

/// Inline math delimited by one or two dollar signs.
///
/// The opening delimiter must not be followed by whitespace, the content stays
/// on one line, backslash escapes are honored, and the closing delimiter must
/// be followed by whitespace, punctuation or the end of input. `$$…$$` yields
/// display math.
#[derive(Debug, Default)]
pub struct InlineMath;

impl Extension for InlineMath {
    fn name(&self) -> &'static str {
        "inline_math"
    }

    fn level(&self) -> ExtensionLevel {
        ExtensionLevel::Inline
    }

    fn start(&self, src: &str) -> Option<usize> {
        src.find('$')
    }

    fn tokenize(&self, src: &str) -> Option<Tokenized> {
        let run = src.bytes().take_while(|&b| b == b'$').count();
        if !(1..=2).contains(&run) {
            return None;
        }
        let delim = &src[..run];
        let body = &src[run..];
        if body.starts_with(char::is_whitespace) {
            return None;
        }

        let mut chars = body.char_indices();
        loop {
            let (i, c) = chars.next()?;
            let end = match c {
                '\n' => return None,
                '\\' => {
                    let (j, escaped) = chars.next()?;
                    if escaped == '\n' {
                        return None;
                    }
                    j + escaped.len_utf8()
                }
                // An unescaped `$` cannot end the content
                '$' => continue,
                _ => i + c.len_utf8(),
            };
            let Some(tail) = body[end..].strip_prefix(delim) else {
                continue;
            };
            if tail.chars().next().is_none_or(ends_inline_math) {
                return Some(Tokenized {
                    len: run * 2 + end,
                    text: body[..end].trim().to_owned(),
                    display: run == 2,
                });
            }
        }
    }

    fn render(
        &self,
        token: &ExtensionToken,
        cx: &mut ExtensionContext<'_>,
    ) -> Result<String, RenderError> {
        render_math(&token.text, token.display, cx)
    }
}

/// Display math: a line holding only `$$` (or `$`), content lines, and a
/// matching closing line. Any indentation and blockquote markers are accepted.
#[derive(Debug, Default)]
pub struct BlockMath;

impl Extension for BlockMath {
    fn name(&self) -> &'static str {
        "block_math"
    }

    fn level(&self) -> ExtensionLevel {
        ExtensionLevel::Block
    }

    fn start(&self, src: &str) -> Option<usize> {
        src.find('$')
    }

    fn tokenize(&self, src: &str) -> Option<Tokenized> {
        let mut lines = src.split_inclusive('\n');
        let first = lines.next()?;
        if !first.ends_with('\n') {
            return None;
        }
        let (prefix, rest) = super::container_prefix(first);
        let delim = rest.trim_end();
        if delim != "$" && delim != "$$" {
            return None;
        }
        let depth = prefix.matches('>').count();

        let mut len = first.len();
        let mut content: Vec<&str> = Vec::new();
        for line in lines {
            len += line.len();
            let body = strip_quote_markers(line, depth);
            if body.trim() == delim && !content.is_empty() {
                let text = content.join("\n");
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                return Some(Tokenized {
                    len,
                    text: text.to_owned(),
                    display: true,
                });
            }
            content.push(body.trim_end_matches(['\n', '\r']));
        }
        None
    }

    fn render(
        &self,
        token: &ExtensionToken,
        cx: &mut ExtensionContext<'_>,
    ) -> Result<String, RenderError> {
        render_math(&token.text, token.display, cx)
    }
}

/// Strip up to `depth` blockquote markers from a continuation line.
fn strip_quote_markers(line: &str, depth: usize) -> &str {
    let mut rest = line;
    for _ in 0..depth {
        let Some(after) = rest.trim_start_matches([' ', '\t']).strip_prefix('>') else {
            break;
        };
        rest = after.strip_prefix(' ').unwrap_or(after);
    }
    rest
}

/// Convert `tex` and wrap it in an inline `<span>` or a display `<section>`.
pub(crate) fn render_math(
    tex: &str,
    display: bool,
    cx: &mut ExtensionContext<'_>,
) -> Result<String, RenderError> {
    let markup = cx.math.convert(tex, display)?;
    if display {
        Ok(format!("<section{}>{markup}</section>\n", cx.styles.block_math))
    } else {
        Ok(format!("<span{}>{markup}</span>", cx.styles.inline_math))
    }
}
