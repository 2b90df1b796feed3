//! Source scanner that swaps extension matches for placeholders.
//!
//! Block matches become an HTML block line
//! (`<section data-mdink-ext="K:N"></section>`) followed by a blank line in the
//! same container, so the tokenizer keeps them as standalone blocks. Inline
//! matches become `U+E000 K:N U+E001` inside text. `N` indexes the token list
//! and `K` is a random key picked per scan that does not occur in the source.
//! Placeholder-shaped input without the key is left as text.

use std::collections::hash_map::RandomState;
use std::fmt::Write;
use std::hash::{BuildHasher, Hasher};
use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::fence::FenceTracker;
use super::{Extension, ExtensionLevel, ExtensionToken, container_prefix};

/// Opens an inline placeholder.
const INLINE_OPEN: char = '\u{E000}';
/// Closes an inline placeholder.
const INLINE_CLOSE: char = '\u{E001}';

/// Attribute marking a block placeholder.
const BLOCK_ATTR: &str = "data-mdink-ext";

static BLOCK_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<section data-mdink-ext="(\d+):(\d+)"></section>\n?"#).unwrap()
});

static INLINE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{E000}(\\d+):(\\d+)\u{E001}").unwrap());

/// Tokens of one scan and the key their placeholders carry.
#[derive(Debug, Default)]
pub(crate) struct Tokens {
    key: u64,
    list: Vec<ExtensionToken>,
}

impl Tokens {
    fn for_source(src: &str) -> Self {
        let mut key = RandomState::new().build_hasher().finish();
        while src.contains(&format!("{INLINE_OPEN}{key}:"))
            || src.contains(&format!("{BLOCK_ATTR}=\"{key}:"))
        {
            key = key.wrapping_add(1);
        }
        Self {
            key,
            list: Vec::new(),
        }
    }

    pub(crate) fn get(&self, id: usize) -> Option<&ExtensionToken> {
        self.list.get(id)
    }

    fn push(&mut self, token: ExtensionToken) -> usize {
        self.list.push(token);
        self.list.len() - 1
    }

    pub(crate) fn inline_placeholder(&self, id: usize) -> String {
        format!("{INLINE_OPEN}{}:{id}{INLINE_CLOSE}", self.key)
    }

    pub(crate) fn block_placeholder(&self, id: usize) -> String {
        format!("<section {BLOCK_ATTR}=\"{}:{id}\"></section>", self.key)
    }

    /// Inline placeholders of this scan in `text`, as byte range and token id.
    pub(crate) fn find_inline(&self, text: &str) -> Vec<(Range<usize>, usize)> {
        if !text.contains(INLINE_OPEN) {
            return Vec::new();
        }
        self.find(&INLINE_PLACEHOLDER, text)
    }

    /// Block placeholders of this scan in `text`, as byte range and token id.
    pub(crate) fn find_block(&self, text: &str) -> Vec<(Range<usize>, usize)> {
        if !text.contains(BLOCK_ATTR) {
            return Vec::new();
        }
        self.find(&BLOCK_PLACEHOLDER, text)
    }

    fn find(&self, pattern: &Regex, text: &str) -> Vec<(Range<usize>, usize)> {
        pattern
            .captures_iter(text)
            .filter_map(|caps| Some((caps.get(0)?.range(), self.id(&caps)?)))
            .collect()
    }

    /// Token id of a placeholder match carrying this scan's key.
    fn id(&self, caps: &Captures<'_>) -> Option<usize> {
        let key: u64 = caps[1].parse().ok()?;
        (key == self.key).then(|| caps[2].parse().ok()).flatten()
    }

    /// Replace placeholders found by `find` with the raw source of their token.
    fn restore(&self, text: &str, found: &[(Range<usize>, usize)]) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for (range, id) in found {
            out.push_str(&text[last..range.start]);
            match self.get(*id) {
                Some(token) => out.push_str(&token.raw),
                None => out.push_str(&text[range.clone()]),
            }
            last = range.end;
        }
        out.push_str(&text[last..]);
        out
    }
}

/// Source with placeholders and the tokens they refer to.
#[derive(Debug, Default)]
pub(crate) struct Scanned {
    pub(crate) source: String,
    pub(crate) tokens: Tokens,
}

/// Replace extension matches in `src` with placeholders.
pub(crate) fn scan(src: &str, extensions: &[Box<dyn Extension>]) -> Scanned {
    let (block, inline): (Vec<usize>, Vec<usize>) = (0..extensions.len())
        .partition(|&i| extensions[i].level() == ExtensionLevel::Block);

    let mut scanned = Scanned {
        source: String::with_capacity(src.len()),
        tokens: Tokens::for_source(src),
    };
    let mut fence = FenceTracker::default();
    let mut rest = src;

    while !rest.is_empty() {
        let line_end = rest.find('\n').map_or(rest.len(), |i| i + 1);
        let line = &rest[..line_end];

        let was_in_fence = fence.in_fence();
        if fence.update(line) || was_in_fence {
            scanned.source.push_str(line);
            rest = &rest[line_end..];
            continue;
        }

        if let Some(consumed) = scan_block(rest, line, extensions, &block, &mut scanned) {
            rest = &rest[consumed..];
            continue;
        }

        scan_inline(line, extensions, &inline, &mut scanned);
        rest = &rest[line_end..];
    }

    scanned
}

/// Try block extensions at the start of `rest`. Returns the bytes consumed.
fn scan_block(
    rest: &str,
    line: &str,
    extensions: &[Box<dyn Extension>],
    block: &[usize],
    scanned: &mut Scanned,
) -> Option<usize> {
    let (index, tokenized) = block
        .iter()
        .find_map(|&i| extensions[i].tokenize(rest).map(|t| (i, t)))?;
    let len = tokenized.len.clamp(1, rest.len());
    if !rest.is_char_boundary(len) {
        return None;
    }

    let (prefix, _) = container_prefix(line);
    let id = scanned.tokens.push(ExtensionToken {
        extension: index,
        raw: rest[..len].to_owned(),
        text: tokenized.text,
        display: tokenized.display,
    });
    let _ = write!(
        scanned.source,
        "{prefix}{}\n{}\n",
        scanned.tokens.block_placeholder(id),
        prefix.trim_end()
    );
    Some(len)
}

/// Replace inline matches within one line, skipping escapes and code spans.
fn scan_inline(
    line: &str,
    extensions: &[Box<dyn Extension>],
    inline: &[usize],
    scanned: &mut Scanned,
) {
    // Next candidate offset per inline extension; `None` once exhausted.
    let mut next: Vec<Option<usize>> = inline
        .iter()
        .map(|&i| extensions[i].start(line))
        .collect();
    let bytes = line.as_bytes();
    let mut copied = 0;
    let mut pos = 0;

    while pos < line.len() {
        match bytes[pos] {
            b'\\' => {
                pos += 1 + char_len(line, pos + 1);
                continue;
            }
            b'`' => {
                pos = skip_code_span(line, pos);
                continue;
            }
            _ => {}
        }

        let mut matched = None;
        for (slot, &index) in next.iter_mut().zip(inline) {
            if slot.is_some_and(|start| start < pos) {
                *slot = extensions[index].start(&line[pos..]).map(|s| s + pos);
            }
            if *slot != Some(pos) {
                continue;
            }
            if let Some(tokenized) = extensions[index].tokenize(&line[pos..]) {
                matched = Some((index, tokenized));
                break;
            }
        }

        let Some((index, tokenized)) = matched else {
            pos += char_len(line, pos);
            continue;
        };
        let end = (pos + tokenized.len.max(1)).min(line.len());
        if !line.is_char_boundary(end) {
            pos += char_len(line, pos);
            continue;
        }

        scanned.source.push_str(&line[copied..pos]);
        let id = scanned.tokens.push(ExtensionToken {
            extension: index,
            raw: line[pos..end].to_owned(),
            text: tokenized.text,
            display: tokenized.display,
        });
        let placeholder = scanned.tokens.inline_placeholder(id);
        scanned.source.push_str(&placeholder);
        pos = end;
        copied = end;
    }

    scanned.source.push_str(&line[copied..]);
}

/// Byte length of the char at `pos` (0 at the end of the line).
fn char_len(line: &str, pos: usize) -> usize {
    line.get(pos..)
        .and_then(|s| s.chars().next())
        .map_or(0, char::len_utf8)
}

/// Offset just past the code span opening at `pos`, or past the backtick run
/// when it is never closed.
fn skip_code_span(line: &str, pos: usize) -> usize {
    let run = line[pos..].bytes().take_while(|&b| b == b'`').count();
    let after = pos + run;
    let mut search = after;
    while let Some(found) = line[search..].find('`') {
        let start = search + found;
        let len = line[start..].bytes().take_while(|&b| b == b'`').count();
        if len == run {
            return start + len;
        }
        search = start + len;
    }
    after
}

/// Restore the original source of inline placeholders in `text`.
pub(crate) fn restore_inline(text: &str, tokens: &Tokens) -> String {
    let found = tokens.find_inline(text);
    if found.is_empty() {
        return text.to_owned();
    }
    tokens.restore(text, &found)
}

/// Restore the original source of block and inline placeholders in `text`.
pub(crate) fn restore_raw(text: &str, tokens: &Tokens) -> String {
    let text = restore_inline(text, tokens);
    let found = tokens.find_block(&text);
    if found.is_empty() {
        return text;
    }
    tokens.restore(&text, &found)
}

/// Token ids when `text` holds nothing but block placeholders of known tokens.
///
/// A block match indented deeply enough ends up inside an indented code block;
/// such blocks still render as the extension.
pub(crate) fn block_placeholders_only(text: &str, tokens: &Tokens) -> Option<Vec<usize>> {
    let mut ids = Vec::new();
    let mut last = 0;
    for (range, id) in tokens.find_block(text) {
        if !text[last..range.start].trim().is_empty() {
            return None;
        }
        tokens.get(id)?;
        ids.push(id);
        last = range.end;
    }
    (!ids.is_empty() && text[last..].trim().is_empty()).then_some(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::default_extensions;
    use pretty_assertions::assert_eq;

    fn run(src: &str) -> Scanned {
        scan(src, &default_extensions())
    }

    #[test]
    fn test_plain_text_untouched() {
        let scanned = run("# Title\n\nSome *text*.\n");
        assert_eq!(scanned.source, "# Title\n\nSome *text*.\n");
        assert!(scanned.tokens.get(0).is_none());
    }

    #[test]
    fn test_inline_math_placeholder() {
        let scanned = run("Euler: $e^{i\\pi}+1=0$ done\n");
        let tokens = &scanned.tokens;
        assert_eq!(
            scanned.source,
            format!("Euler: {} done\n", tokens.inline_placeholder(0))
        );
        let token = tokens.get(0).unwrap();
        assert_eq!(token.text, "e^{i\\pi}+1=0");
        assert_eq!(token.raw, "$e^{i\\pi}+1=0$");
        assert!(!token.display);
        assert!(tokens.get(1).is_none());
    }

    #[test]
    fn test_block_math_placeholder() {
        let scanned = run("before\n\n$$\nx^2\n$$\nafter\n");
        let tokens = &scanned.tokens;
        assert_eq!(
            scanned.source,
            format!("before\n\n{}\n\nafter\n", tokens.block_placeholder(0))
        );
        assert_eq!(tokens.get(0).unwrap().text, "x^2");
        assert!(tokens.get(0).unwrap().display);
    }

    #[test]
    fn test_block_math_in_blockquote_keeps_quote_open() {
        let scanned = run("> $$\n> a+b\n> $$\n> tail\n");
        let tokens = &scanned.tokens;
        assert_eq!(
            scanned.source,
            format!("> {}\n>\n> tail\n", tokens.block_placeholder(0))
        );
        assert_eq!(tokens.get(0).unwrap().text, "a+b");
    }

    #[test]
    fn test_fenced_code_untouched() {
        let src = "```\n$x$\n$$\ny\n$$\n```\n";
        let scanned = run(src);
        assert_eq!(scanned.source, src);
        assert!(scanned.tokens.get(0).is_none());
    }

    #[test]
    fn test_code_span_untouched() {
        let scanned = run("`$x$` and ``a ` $y$`` but $z$\n");
        assert_eq!(
            scanned.source,
            format!(
                "`$x$` and ``a ` $y$`` but {}\n",
                scanned.tokens.inline_placeholder(0)
            )
        );
        assert_eq!(scanned.tokens.get(0).unwrap().text, "z");
    }

    #[test]
    fn test_escaped_dollar_untouched() {
        let scanned = run("costs \\$5 and \\$6\n");
        assert_eq!(scanned.source, "costs \\$5 and \\$6\n");
        assert!(scanned.tokens.get(0).is_none());
    }

    #[test]
    fn test_slider_placeholder() {
        let scanned = run("<![a](1.png),![b](2.png)>\n");
        assert_eq!(
            scanned.source,
            format!("{}\n\n", scanned.tokens.block_placeholder(0))
        );
        assert_eq!(scanned.tokens.get(0).unwrap().text, "![a](1.png),![b](2.png)");
    }

    #[test]
    fn test_placeholder_shaped_input_is_not_a_token() {
        let src = "a \u{E000}0\u{E001} b\n\n<section data-mdink-ext=\"0\"></section>\n";
        let scanned = run(src);
        assert_eq!(scanned.source, src);
        assert!(scanned.tokens.find_inline(&scanned.source).is_empty());
        assert!(scanned.tokens.find_block(&scanned.source).is_empty());
    }

    #[test]
    fn test_key_avoids_placeholders_in_source() {
        let first = run("$x$\n");
        let forged = first.tokens.inline_placeholder(0);
        let second = run(&format!("{forged} and $y$\n"));
        let found = second.tokens.find_inline(&second.source);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].1, 0);
        assert_eq!(second.tokens.get(0).unwrap().text, "y");
        assert!(second.source.starts_with(&forged));
    }

    #[test]
    fn test_restore_inline() {
        let scanned = run("a $x$ b $y$\n");
        assert_eq!(
            restore_inline(&scanned.source, &scanned.tokens),
            "a $x$ b $y$\n"
        );
        assert_eq!(restore_inline("plain", &scanned.tokens), "plain");
    }

    #[test]
    fn test_restore_inline_keeps_foreign_placeholders() {
        let scanned = run("a $x$\n");
        let text = format!("{}\u{E000}9:0\u{E001}", scanned.source);
        assert_eq!(
            restore_inline(&text, &scanned.tokens),
            "a $x$\n\u{E000}9:0\u{E001}"
        );
    }

    #[test]
    fn test_restore_raw_block() {
        let scanned = run("$$\nx\n$$\n");
        assert_eq!(
            restore_raw(&scanned.source, &scanned.tokens),
            "$$\nx\n$$\n\n"
        );
    }

    #[test]
    fn test_block_placeholders_only() {
        let scanned = run("$$\nx\n$$\n");
        let tokens = &scanned.tokens;
        let placeholder = tokens.block_placeholder(0);
        assert_eq!(
            block_placeholders_only(&format!("{placeholder}\n\n"), tokens),
            Some(vec![0])
        );
        assert_eq!(
            block_placeholders_only(&format!("x {placeholder}\n"), tokens),
            None
        );
        assert_eq!(
            block_placeholders_only(&format!("{}\n", tokens.block_placeholder(5)), tokens),
            None
        );
        assert_eq!(block_placeholders_only("plain\n", tokens), None);
    }

    #[test]
    fn test_skip_code_span_unclosed() {
        assert_eq!(skip_code_span("``abc", 0), 2);
        assert_eq!(skip_code_span("`a`b", 0), 3);
    }

    #[test]
    fn test_multibyte_text() {
        let scanned = run("公式 $a$ 结束\n");
        assert_eq!(
            scanned.source,
            format!("公式 {} 结束\n", scanned.tokens.inline_placeholder(0))
        );
    }
}
