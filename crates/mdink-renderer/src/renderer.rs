//! Markdown renderer producing inline-styled HTML.

use std::fmt::Write;

use mdink_theme::{StyleMap, resolve};
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::addition;
use crate::code_block::{
    CodeBlockProcessor, DiagramProcessor, FencedCode, preserve_whitespace, split_fence_info,
};
use crate::extension::alert::{AlertKind, render_alert};
use crate::extension::footnote::{FootnoteDefinitions, render_reference};
use crate::extension::math::{Latex2MathmlConverter, MathConverter, render_math};
use crate::extension::scanner::{
    self, Tokens, block_placeholders_only, restore_inline, restore_raw,
};
use crate::extension::{Extension, ExtensionContext, ExtensionStyles, default_extensions};
use crate::highlight::{Highlighter, SyntectHighlighter, theme_candidates};
use crate::html::{MAC_SIGN, escape_html};
use crate::options::{EngineOptions, OptionsPatch};
use crate::reading_time::ReadingStats;
use crate::state::{CodeBlockState, Footnote, FootnoteList, ListState, TableState};
use crate::RenderError;

/// Open element whose output is buffered until it closes.
#[derive(Debug)]
enum FrameKind {
    Root,
    Paragraph,
    Heading(u8),
    BlockQuote(Option<AlertKind>),
    List(bool),
    Item(String),
    Table,
    TableHead,
    TableRow,
    TableCell(&'static str),
    Emphasis,
    Strong,
    Strikethrough,
    Link { url: String, title: String },
    Image { url: String, title: String },
    FootnoteDefinition(String),
    Plain(&'static str),
}

#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    /// Rendered children.
    html: String,
    /// Plain text of children, for link titles and image alt text.
    text: String,
}

impl Frame {
    fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            html: String::new(),
            text: String::new(),
        }
    }
}

/// Markdown renderer that bakes theme styles into every element.
///
/// One instance renders one logical document at a time. Citation footnotes
/// accumulate across [`render`](Self::render) calls until [`reset`](Self::reset);
/// everything else is per render.
///
/// # Example
///
/// ```
/// use mdink_renderer::{EngineOptions, StyledRenderer};
///
/// let mut renderer = StyledRenderer::new(EngineOptions::default());
/// let html = renderer.render("# Hello\n\n**Bold** text").unwrap();
/// assert!(html.contains(r#"<h1 data-heading="true""#));
/// ```
pub struct StyledRenderer {
    options: EngineOptions,
    styles: StyleMap,
    extension_styles: ExtensionStyles,
    footnotes: FootnoteList,
    highlighter: Box<dyn Highlighter>,
    highlight_css: String,
    math: Box<dyn MathConverter>,
    processors: Vec<Box<dyn CodeBlockProcessor>>,
    extensions: Vec<Box<dyn Extension>>,
    frames: Vec<Frame>,
    lists: ListState,
    code: CodeBlockState,
    table: TableState,
    notes: FootnoteDefinitions,
    tokens: Tokens,
    code_block_index: usize,
}

impl StyledRenderer {
    /// Create a renderer with the default highlighter, math converter,
    /// diagram processor and extensions.
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        let highlighter: Box<dyn Highlighter> = Box::new(SyntectHighlighter::new());
        let highlight_css = load_highlight_css(highlighter.as_ref(), &options.code_theme);
        let styles = resolve(&options.theme, &options.resolve_options());
        Self {
            extension_styles: ExtensionStyles::from_styles(&styles),
            styles,
            options,
            footnotes: FootnoteList::default(),
            highlighter,
            highlight_css,
            math: Box::new(Latex2MathmlConverter::default()),
            processors: vec![Box::new(DiagramProcessor::default())],
            extensions: default_extensions(),
            frames: Vec::new(),
            lists: ListState::default(),
            code: CodeBlockState::default(),
            table: TableState::default(),
            notes: FootnoteDefinitions::default(),
            tokens: Tokens::default(),
            code_block_index: 0,
        }
    }

    /// Replace the syntax highlighter.
    #[must_use]
    pub fn with_highlighter<H: Highlighter + 'static>(mut self, highlighter: H) -> Self {
        self.highlighter = Box::new(highlighter);
        self.highlight_css = load_highlight_css(self.highlighter.as_ref(), &self.options.code_theme);
        self
    }

    /// Replace the math converter.
    #[must_use]
    pub fn with_math_converter<M: MathConverter + 'static>(mut self, math: M) -> Self {
        self.math = Box::new(math);
        self
    }

    /// Add a code block processor, checked after the ones already registered.
    #[must_use]
    pub fn with_processor<P: CodeBlockProcessor + 'static>(mut self, processor: P) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Add a source-level extension.
    #[must_use]
    pub fn with_extension<E: Extension + 'static>(mut self, extension: E) -> Self {
        self.extensions.push(Box::new(extension));
        self
    }

    /// Clear citation footnotes, then apply `patch`.
    pub fn reset(&mut self, patch: OptionsPatch) {
        self.footnotes.clear();
        self.set_options(patch);
    }

    /// Merge `patch` into the current options.
    ///
    /// Reloads the highlight stylesheet when the code theme changed and
    /// rebuilds extension styles when the resolved style mapping changed.
    pub fn set_options(&mut self, patch: OptionsPatch) {
        if self.options.apply(patch) {
            self.highlight_css =
                load_highlight_css(self.highlighter.as_ref(), &self.options.code_theme);
        }
        let styles = resolve(&self.options.theme, &self.options.resolve_options());
        if styles != self.styles {
            tracing::debug!(
                kinds = styles.kinds().count(),
                "Style mapping changed, rebuilding extension styles"
            );
            self.extension_styles = ExtensionStyles::from_styles(&styles);
            self.styles = styles;
        }
    }

    /// Current options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Current resolved style mapping.
    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    /// Styles currently handed to extensions.
    pub fn extension_styles(&self) -> &ExtensionStyles {
        &self.extension_styles
    }

    /// Stylesheet of the active highlight theme (empty if none was found).
    pub fn highlight_css(&self) -> &str {
        &self.highlight_css
    }

    /// Citation footnotes collected since the last reset.
    pub fn footnotes(&self) -> &[Footnote] {
        self.footnotes.entries()
    }

    /// Whether the last render emitted diagrams that need client-side activation.
    pub fn needs_diagram_activation(&self) -> bool {
        self.processors.iter().any(|p| p.needs_activation())
    }

    /// Parser options: tables, strikethrough, task lists, GFM alerts, footnotes.
    #[must_use]
    pub fn parser_options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM
            | Options::ENABLE_FOOTNOTES
    }

    /// Render a Markdown body to HTML.
    ///
    /// Markdown footnote definitions are appended to the returned body.
    /// Citation footnotes are not; see [`build_footnotes`](Self::build_footnotes).
    pub fn render(&mut self, markdown: &str) -> Result<String, RenderError> {
        self.math.reset();
        self.frames.clear();
        self.frames.push(Frame::new(FrameKind::Root));
        self.lists.clear();
        self.notes.clear();
        self.code_block_index = 0;
        for processor in &mut self.processors {
            processor.clear();
        }

        let scanned = scanner::scan(markdown, &self.extensions);
        self.tokens = scanned.tokens;

        for event in Parser::new_ext(&scanned.source, Self::parser_options()) {
            self.process_event(event)?;
        }

        let mut html = self
            .frames
            .drain(..)
            .next()
            .map(|root| root.html)
            .unwrap_or_default();
        html.push_str(&self.notes.render(&self.styles));
        Ok(html)
    }

    /// Citation footnotes section: an `h4` heading and one line per entry.
    ///
    /// Empty when no citation was collected.
    pub fn build_footnotes(&self) -> String {
        let entries = self.footnotes.entries();
        if entries.is_empty() {
            return String::new();
        }
        let lines: Vec<String> = entries
            .iter()
            .map(|note| {
                let title = escape_html(&note.title);
                let link = escape_html(&note.link);
                if note.title == note.link {
                    format!(
                        r#"<code style="font-size:90%;opacity:.6;">[{}]</code>: <i style="word-break:break-all">{title}</i><br/>"#,
                        note.index
                    )
                } else {
                    format!(
                        r#"<code style="font-size:90%;opacity:.6;">[{}]</code> {title}: <i style="word-break:break-all">{link}</i><br/>"#,
                        note.index
                    )
                }
            })
            .collect();
        format!(
            r#"<h4 data-heading="true"{}>引用链接</h4><p{}>{}</p>"#,
            self.styles.attr("h4"),
            self.styles.attr("footnotes"),
            lines.join("\n")
        )
    }

    /// Word count and reading time banner.
    ///
    /// Empty when the banner is disabled or the body has no words.
    pub fn build_reading_time(&self, stats: &ReadingStats) -> String {
        if !self.options.count_words || stats.words == 0 {
            return String::new();
        }
        format!(
            "<blockquote{}><p{}>字数 {}，阅读大约需 {} 分钟</p></blockquote>",
            self.styles.attr("blockquote"),
            self.styles.attr("blockquote_p"),
            stats.words,
            stats.rounded_minutes()
        )
    }

    /// Static decoration stylesheet.
    pub fn build_addition(&self) -> String {
        addition::build_addition()
    }

    /// Wrap rendered content in the styled outer container.
    pub fn create_container(&self, content: &str) -> String {
        format!("<section{}>{content}</section>", self.styles.attr("container"))
    }

    fn process_event(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag)?,
            Event::Text(text) => self.text(&text)?,
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.raw_html(&html)?,
            Event::SoftBreak | Event::HardBreak => self.line_break(),
            Event::Rule => {
                let hr = format!("<hr{}/>", self.styles.attr("hr"));
                self.push_html(&hr);
            }
            Event::TaskListMarker(checked) => {
                self.push_html(if checked { "☑ " } else { "☐ " });
            }
            Event::FootnoteReference(label) => {
                let number = self.notes.reference(&label);
                let html = render_reference(&self.styles, number);
                self.push_html(&html);
            }
            Event::InlineMath(tex) => self.math_event(&tex, false)?,
            Event::DisplayMath(tex) => self.math_event(&tex, true)?,
        }
        Ok(())
    }

    #[allow(clippy::too_many_lines)]
    fn start_tag(&mut self, tag: Tag<'_>) {
        let kind = match tag {
            Tag::CodeBlock(kind) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) => info.into_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.code.start(&info);
                return;
            }
            Tag::HtmlBlock | Tag::MetadataBlock(_) => return,
            Tag::Paragraph => FrameKind::Paragraph,
            Tag::Heading { level, .. } => FrameKind::Heading(heading_level(level)),
            Tag::BlockQuote(kind) => FrameKind::BlockQuote(kind.map(AlertKind::from)),
            Tag::List(start) => {
                self.lists.push(start);
                FrameKind::List(start.is_some())
            }
            Tag::Item => FrameKind::Item(self.lists.next_prefix()),
            Tag::FootnoteDefinition(label) => FrameKind::FootnoteDefinition(label.into_string()),
            Tag::Table(alignments) => {
                self.table.start(alignments);
                FrameKind::Table
            }
            Tag::TableHead => {
                self.table.start_head();
                FrameKind::TableHead
            }
            Tag::TableRow => {
                self.table.start_row();
                FrameKind::TableRow
            }
            Tag::TableCell => FrameKind::TableCell(self.table.current_alignment()),
            Tag::Emphasis => FrameKind::Emphasis,
            Tag::Strong => FrameKind::Strong,
            Tag::Strikethrough => FrameKind::Strikethrough,
            Tag::Link {
                dest_url, title, ..
            } => FrameKind::Link {
                url: restore_inline(&dest_url, &self.tokens),
                title: restore_inline(&title, &self.tokens),
            },
            Tag::Image {
                dest_url, title, ..
            } => FrameKind::Image {
                url: restore_inline(&dest_url, &self.tokens),
                title: restore_inline(&title, &self.tokens),
            },
            Tag::DefinitionList => FrameKind::Plain("dl"),
            Tag::DefinitionListTitle => FrameKind::Plain("dt"),
            Tag::DefinitionListDefinition => FrameKind::Plain("dd"),
            Tag::Superscript => FrameKind::Plain("sup"),
            Tag::Subscript => FrameKind::Plain("sub"),
        };
        self.frames.push(Frame::new(kind));
    }

    fn end_tag(&mut self, tag: TagEnd) -> Result<(), RenderError> {
        match tag {
            TagEnd::CodeBlock => self.code_block(),
            TagEnd::HtmlBlock | TagEnd::MetadataBlock(_) => Ok(()),
            _ => {
                // Root never closes
                if self.frames.len() < 2 {
                    return Ok(());
                }
                if let Some(frame) = self.frames.pop() {
                    self.close_frame(frame);
                }
                Ok(())
            }
        }
    }

    #[allow(clippy::too_many_lines)]
    fn close_frame(&mut self, frame: Frame) {
        let Frame { kind, html, text } = frame;
        let rendered = match kind {
            FrameKind::Paragraph => self.paragraph(html),
            FrameKind::Heading(level) => format!(
                r#"<h{level} data-heading="true"{}>{html}</h{level}>"#,
                self.styles.attr(&format!("h{level}"))
            ),
            FrameKind::BlockQuote(None) => {
                format!("<blockquote{}>{html}</blockquote>", self.styles.attr("blockquote"))
            }
            FrameKind::BlockQuote(Some(kind)) => {
                render_alert(kind, self.extension_styles.alert(kind), &html)
            }
            FrameKind::List(ordered) => {
                self.lists.pop();
                let tag = if ordered { "ol" } else { "ul" };
                format!("<{tag}{}>{html}</{tag}>", self.styles.attr(tag))
            }
            FrameKind::Item(prefix) => {
                format!("<li{}>{prefix}{html}</li>", self.styles.attr("listitem"))
            }
            FrameKind::FootnoteDefinition(label) => {
                self.notes.define(&label, html);
                return;
            }
            FrameKind::Table => format!(
                r#"<section style="padding:0 8px; max-width:100%; overflow:auto"><table class="preview-table"{}><thead{}>{}</thead><tbody>{html}</tbody></table></section>"#,
                self.styles.attr("table"),
                self.styles.attr("thead"),
                self.table.take_head(),
            ),
            FrameKind::TableHead => {
                self.table.end_head(format!("<tr>{html}</tr>"));
                String::new()
            }
            FrameKind::TableRow => format!("<tr{}>{html}</tr>", self.styles.attr("tr")),
            FrameKind::TableCell(alignment) => {
                self.table.next_cell();
                format!("<td{}>{html}</td>", self.styles.attr_with("td", alignment))
            }
            FrameKind::Emphasis => format!("<span{}>{html}</span>", self.styles.attr("em")),
            FrameKind::Strong => format!("<strong{}>{html}</strong>", self.styles.attr("strong")),
            FrameKind::Strikethrough => format!("<del{}>{html}</del>", self.styles.attr("del")),
            FrameKind::Link { url, title } => self.link(&url, &title, &text, html),
            FrameKind::Image { url, title } => self.image(&url, &title, &text),
            FrameKind::Plain(tag) => format!("<{tag}>{html}</{tag}>"),
            FrameKind::Root => html,
        };
        if let Some(parent) = self.frames.last_mut() {
            parent.html.push_str(&rendered);
            parent.text.push_str(&text);
        }
    }

    fn paragraph(&self, content: String) -> String {
        if content.trim().is_empty() || (content.contains("<figure") && content.contains("<img")) {
            return content;
        }
        match self.frames.last().map(|parent| &parent.kind) {
            // Leading paragraph of a list item renders inline after the prefix
            Some(FrameKind::Item(_)) if self.frames.last().is_some_and(|p| p.html.is_empty()) => {
                return content;
            }
            Some(FrameKind::FootnoteDefinition(_)) => {
                return if self.frames.last().is_some_and(|p| p.html.is_empty()) {
                    content
                } else {
                    format!("<br/>{content}")
                };
            }
            _ => {}
        }
        let quote = self.frames.iter().rev().find_map(|frame| match frame.kind {
            FrameKind::BlockQuote(kind) => Some(kind),
            _ => None,
        });
        let style = match quote {
            Some(Some(kind)) => self.extension_styles.alert(kind).paragraph.clone(),
            Some(None) => self.styles.attr("blockquote_p"),
            None => self.styles.attr("p"),
        };
        format!("<p{style}>{content}</p>")
    }

    fn link(&mut self, url: &str, title: &str, text: &str, content: String) -> String {
        let origin = &self.options.platform_origin;
        if !origin.is_empty() && url.starts_with(origin.as_str()) {
            let title = if title.is_empty() { text } else { title };
            return format!(
                r#"<a href="{}" title="{}"{}>{content}</a>"#,
                escape_html(url),
                escape_html(title),
                self.styles.attr("wx_link")
            );
        }
        if self.options.cite {
            let note_title = if title.is_empty() { text } else { title };
            let number = self
                .footnotes
                .push(note_title.to_owned(), url.to_owned());
            return format!(
                "<span{}>{content}<sup>[{number}]</sup></span>",
                self.styles.attr("link")
            );
        }
        if url == text {
            return content;
        }
        format!("<span{}>{content}</span>", self.styles.attr("link"))
    }

    fn image(&self, url: &str, title: &str, alt: &str) -> String {
        let mut html = format!(
            r#"<figure{}><img{} src="{}""#,
            self.styles.attr("figure"),
            self.styles.attr("image"),
            escape_html(url)
        );
        if !title.is_empty() {
            let _ = write!(html, r#" title="{}""#, escape_html(title));
        }
        let _ = write!(html, r#" alt="{}"/>"#, escape_html(alt));
        let caption = legend_caption(&self.options.legend, alt, title);
        if !caption.is_empty() {
            let _ = write!(
                html,
                "<figcaption{}>{}</figcaption>",
                self.styles.attr("figcaption"),
                escape_html(caption)
            );
        }
        html.push_str("</figure>");
        html
    }

    fn code_block(&mut self) -> Result<(), RenderError> {
        let (info, content) = self.code.end();
        let index = self.code_block_index;
        self.code_block_index += 1;

        if let Some(ids) = block_placeholders_only(&content, &self.tokens) {
            for id in ids {
                if let Some(html) = self.render_token(id)? {
                    self.push_html(&html);
                }
            }
            return Ok(());
        }

        let content = restore_raw(&content, &self.tokens);
        let source = content.strip_suffix('\n').unwrap_or(&content);
        let (language, attrs) = split_fence_info(&info);
        let block = FencedCode {
            language,
            attrs: &attrs,
            source,
            index,
        };

        let processed = self
            .processors
            .iter_mut()
            .find_map(|processor| processor.process(&block));
        let html = match processed {
            Some(html) => html,
            None => self.highlighted_code_block(language, source),
        };
        self.push_html(&html);
        Ok(())
    }

    fn highlighted_code_block(&self, requested: &str, source: &str) -> String {
        let language = if self.highlighter.supports_language(requested) {
            requested
        } else {
            "plaintext"
        };
        let highlighted = match self.highlighter.highlight(source, language) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(language, error = %e, "Highlighting failed, rendering plain text");
                escape_html(source)
            }
        };

        let mut classes = String::from("hljs code__pre wx-code");
        if self.options.mac_code_block {
            classes.push_str(" with-mac");
        }
        if requested == "md-sample" {
            classes.push_str(" no-bg");
        }
        let mac_sign = if self.options.mac_code_block { MAC_SIGN } else { "" };
        format!(
            r#"<pre class="{classes}"{}>{mac_sign}<code class="language-{language}"{}>{}</code></pre>"#,
            self.styles.attr("code_pre"),
            self.styles.attr("code"),
            preserve_whitespace(&highlighted),
        )
    }

    fn text(&mut self, text: &str) -> Result<(), RenderError> {
        if self.code.is_active() {
            self.code.push_str(text);
            return Ok(());
        }
        let raw = restore_inline(text, &self.tokens);
        if self.in_image() {
            self.push_text(&raw);
            return Ok(());
        }

        let mut html = String::with_capacity(text.len());
        let mut last = 0;
        for (range, id) in self.tokens.find_inline(text) {
            html.push_str(&escape_html(&text[last..range.start]));
            match self.render_token(id)? {
                Some(rendered) => html.push_str(&rendered),
                None => html.push_str(&escape_html(&text[range.clone()])),
            }
            last = range.end;
        }
        html.push_str(&escape_html(&text[last..]));
        self.push_html(&html);
        self.push_text(&raw);
        Ok(())
    }

    fn inline_code(&mut self, code: &str) {
        let code = restore_raw(code, &self.tokens);
        if !self.in_image() {
            let html = format!("<code{}>{}</code>", self.styles.attr("codespan"), escape_html(&code));
            self.push_html(&html);
        }
        self.push_text(&code);
    }

    fn raw_html(&mut self, html: &str) -> Result<(), RenderError> {
        let html = restore_inline(html, &self.tokens);
        let found = self.tokens.find_block(&html);
        if found.is_empty() {
            self.push_html(&html);
            return Ok(());
        }
        let mut out = String::with_capacity(html.len());
        let mut last = 0;
        for (range, id) in found {
            out.push_str(&html[last..range.start]);
            match self.render_token(id)? {
                Some(rendered) => out.push_str(&rendered),
                None => out.push_str(&html[range.clone()]),
            }
            last = range.end;
        }
        out.push_str(&html[last..]);
        self.push_html(&out);
        Ok(())
    }

    fn line_break(&mut self) {
        if !self.in_image() {
            self.push_html("<br/>");
        }
        self.push_text("\n");
    }

    fn math_event(&mut self, tex: &str, display: bool) -> Result<(), RenderError> {
        let mut cx = ExtensionContext {
            styles: &self.extension_styles,
            math: self.math.as_mut(),
        };
        let html = render_math(tex, display, &mut cx)?;
        self.push_html(&html);
        Ok(())
    }

    /// Markup for token `id`, or `None` when no extension owns it.
    fn render_token(&mut self, id: usize) -> Result<Option<String>, RenderError> {
        let Some(token) = self.tokens.get(id) else {
            return Ok(None);
        };
        let Some(extension) = self.extensions.get(token.extension) else {
            return Ok(None);
        };
        let mut cx = ExtensionContext {
            styles: &self.extension_styles,
            math: self.math.as_mut(),
        };
        extension.render(token, &mut cx).map(Some)
    }

    fn in_image(&self) -> bool {
        self.frames
            .iter()
            .any(|frame| matches!(frame.kind, FrameKind::Image { .. }))
    }

    fn push_html(&mut self, html: &str) {
        if let Some(frame) = self.frames.last_mut() {
            frame.html.push_str(html);
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(frame) = self.frames.last_mut() {
            frame.text.push_str(text);
        }
    }
}

/// Pick the image caption from a legend policy such as `alt-title`.
///
/// Tokens are tried in order; the first one naming a non-empty source wins.
fn legend_caption<'a>(legend: &str, alt: &'a str, title: &'a str) -> &'a str {
    legend
        .split('-')
        .find_map(|option| match option {
            "alt" if !alt.is_empty() => Some(alt),
            "title" if !title.is_empty() => Some(title),
            _ => None,
        })
        .unwrap_or("")
}

/// Highlight stylesheet for the first available theme candidate.
fn load_highlight_css(highlighter: &dyn Highlighter, requested: &str) -> String {
    for candidate in theme_candidates(requested) {
        if let Some(css) = highlighter.theme_css(&candidate) {
            if candidate != requested {
                tracing::debug!(requested, theme = %candidate, "Using substitute highlight theme");
            }
            return css;
        }
    }
    tracing::debug!(requested, "No highlight theme found");
    String::new()
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
