//! Conversion entry points.

use mdink_renderer::{EngineOptions, ReadingStats, StyledRenderer};
use serde::Serialize;
use serde_yaml::Mapping;

use crate::frontmatter::split_front_matter;
use crate::toc::{Heading, assign_heading_ids};
use crate::{ConvertError, RenderOptions, postprocess};

/// Reading statistics of a converted document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReadingTime {
    /// Characters of the raw input, front matter included.
    pub chars: usize,
    /// Words of the body.
    pub words: usize,
    /// Estimated reading time, rounded up to whole minutes.
    pub minutes: u64,
}

/// Result of a conversion.
#[derive(Clone, Debug, Serialize)]
pub struct RenderResult {
    /// Styled HTML fragment.
    pub html: String,
    /// Headings in document order.
    pub headings: Vec<Heading>,
    pub reading_time: ReadingTime,
    /// Front matter metadata, when the input has any.
    pub front_matter: Option<Mapping>,
    /// The article contains diagrams that need client-side rendering.
    pub needs_diagram_activation: bool,
}

/// Reusable converter.
///
/// Keeps one [`StyledRenderer`] (and its loaded syntax definitions) across
/// conversions. Each conversion resets it, so results do not depend on
/// earlier documents.
pub struct Converter {
    renderer: StyledRenderer,
}

impl Converter {
    /// Create a converter with the default renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_renderer(StyledRenderer::new(EngineOptions::default()))
    }

    /// Create a converter around a configured renderer
    /// (custom highlighter, math converter, processors, extensions).
    #[must_use]
    pub fn with_renderer(renderer: StyledRenderer) -> Self {
        Self { renderer }
    }

    /// The underlying renderer.
    pub fn renderer(&self) -> &StyledRenderer {
        &self.renderer
    }

    /// Convert a Markdown document.
    pub fn convert(
        &mut self,
        raw: &str,
        options: &RenderOptions,
    ) -> Result<RenderResult, ConvertError> {
        let theme = options.resolve_theme()?;
        self.renderer.reset(options.engine_patch(theme));

        let (front_matter, body) = split_front_matter(raw);
        let stats = ReadingStats::measure(body);
        let body_html = self.renderer.render(body)?;

        let html = postprocess::assemble(&self.renderer, &body_html, &stats);
        let (html, headings) = assign_heading_ids(&html)?;
        tracing::debug!(
            headings = headings.len(),
            words = stats.words,
            "Converted document"
        );

        Ok(RenderResult {
            html,
            headings,
            reading_time: ReadingTime {
                chars: raw.chars().count(),
                words: stats.words,
                minutes: stats.rounded_minutes(),
            },
            front_matter,
            needs_diagram_activation: self.renderer.needs_diagram_activation(),
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a Markdown document with a fresh [`Converter`].
pub fn markdown_to_html(raw: &str, options: &RenderOptions) -> Result<RenderResult, ConvertError> {
    Converter::new().convert(raw, options)
}
