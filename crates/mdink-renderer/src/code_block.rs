//! Code block processing.
//!
//! Processors are asked in registration order when a fenced code block
//! closes. The first one returning markup replaces the block; otherwise the
//! block is syntax-highlighted and styled.
//!
//! # Example
//!
//! ```
//! use mdink_renderer::{CodeBlockProcessor, FencedCode};
//!
//! struct ChartProcessor;
//!
//! impl CodeBlockProcessor for ChartProcessor {
//!     fn process(&mut self, block: &FencedCode<'_>) -> Option<String> {
//!         (block.language == "chart").then(|| format!("<figure>{}</figure>", block.source))
//!     }
//! }
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::html::escape_html;

/// Text runs outside of tags: after a `>` or at the very start.
static TEXT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(>[^<]+)|(^[^<]+)").unwrap());

/// A fenced code block as seen by processors.
#[derive(Clone, Copy, Debug)]
pub struct FencedCode<'a> {
    /// First word of the info string (`mermaid`, `rust`, ...).
    pub language: &'a str,
    /// `key=value` words following the language.
    pub attrs: &'a BTreeMap<String, String>,
    /// Block content without the trailing newline.
    pub source: &'a str,
    /// Zero-based position among the document's fenced blocks.
    pub index: usize,
}

/// Replaces special code blocks (diagrams, charts, ...) with custom markup.
pub trait CodeBlockProcessor {
    /// Markup replacing `block`, or `None` to leave it to the highlighter.
    fn process(&mut self, block: &FencedCode<'_>) -> Option<String>;

    /// Whether markup emitted since the last [`clear`](Self::clear) needs
    /// client-side scripts to display.
    fn needs_activation(&self) -> bool {
        false
    }

    /// Forget per-document state. Called before each render.
    fn clear(&mut self) {}
}

/// Emits `mermaid` blocks as `<pre class="mermaid">` for client-side rendering.
///
/// Any language starting with `mermaid` is claimed.
#[derive(Debug, Default)]
pub struct DiagramProcessor {
    diagrams: Vec<usize>,
}

impl DiagramProcessor {
    /// Indices of the diagram blocks in the last render.
    pub fn diagram_indices(&self) -> &[usize] {
        &self.diagrams
    }
}

impl CodeBlockProcessor for DiagramProcessor {
    fn process(&mut self, block: &FencedCode<'_>) -> Option<String> {
        if !block.language.starts_with("mermaid") {
            return None;
        }
        self.diagrams.push(block.index);
        Some(format!(
            r#"<pre class="mermaid">{}</pre>"#,
            escape_html(block.source)
        ))
    }

    fn needs_activation(&self) -> bool {
        !self.diagrams.is_empty()
    }

    fn clear(&mut self) {
        self.diagrams.clear();
    }
}

/// Split a fence info string (`mermaid theme=dark`) into the language and
/// its `key=value` attributes. Quotes around values are dropped and bare
/// words after the language are ignored.
pub(crate) fn split_fence_info(info: &str) -> (&str, BTreeMap<String, String>) {
    let mut words = info.split_whitespace();
    let language = words.next().unwrap_or_default();
    let attrs = words
        .filter_map(|word| word.split_once('='))
        .map(|(key, value)| {
            let value = value.trim_matches(|c| c == '"' || c == '\'');
            (key.to_owned(), value.to_owned())
        })
        .collect();
    (language, attrs)
}

/// Make highlighted markup survive editors that collapse whitespace.
///
/// Tabs become four spaces, line breaks become `<br/>`, and whitespace in text
/// runs becomes `&nbsp;`. Whitespace inside tags is left alone.
pub(crate) fn preserve_whitespace(highlighted: &str) -> String {
    let html = highlighted
        .replace('\t', "    ")
        .replace("\r\n", "<br/>")
        .replace('\n', "<br/>");
    TEXT_RUN
        .replace_all(&html, |caps: &regex::Captures<'_>| {
            let mut run = String::with_capacity(caps[0].len());
            for c in caps[0].chars() {
                if c.is_whitespace() {
                    run.push_str("&nbsp;");
                } else {
                    run.push(c);
                }
            }
            run
        })
        .into_owned()
}
