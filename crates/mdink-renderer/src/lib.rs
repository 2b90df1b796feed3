//! Markdown renderer producing inline-styled HTML.
//!
//! [`StyledRenderer`] walks the `pulldown-cmark` event stream and bakes the
//! resolved theme styles into every element, so the output survives editors
//! that strip stylesheets.
//!
//! # Architecture
//!
//! - Styles come from a [`mdink_theme::StyleMap`] resolved from the active
//!   [`EngineOptions`]; changing options through
//!   [`StyledRenderer::set_options`] re-resolves them.
//! - Fenced code blocks go through [`CodeBlockProcessor`]s first (diagrams),
//!   then through a [`Highlighter`].
//! - Syntax the tokenizer does not know (math, image sliders) is handled by
//!   [`Extension`]s that run on the raw source; see [`extension`].
//!
//! Assembling a complete article (front matter, reading time, citation
//! footnotes, outer container) is left to the caller; the renderer exposes
//! the building blocks.
//!
//! # Example
//!
//! ```
//! use mdink_renderer::{EngineOptions, StyledRenderer};
//!
//! let mut renderer = StyledRenderer::new(EngineOptions::default());
//! let body = renderer.render("Some *text* and $x^2$").unwrap();
//! let html = renderer.create_container(&body);
//! assert!(html.starts_with("<section"));
//! ```

mod addition;
mod code_block;
mod error;
pub mod extension;
mod highlight;
mod html;
mod options;
mod reading_time;
mod renderer;
mod state;

pub use addition::{ADDITION_CSS, build_addition};
pub use code_block::{CodeBlockProcessor, DiagramProcessor, FencedCode};
pub use error::{HighlightError, MathError, RenderError};
pub use extension::alert::{AlertKind, AlertStyles};
pub use extension::math::{Latex2MathmlConverter, MathConverter};
pub use extension::{
    Extension, ExtensionContext, ExtensionLevel, ExtensionStyles, ExtensionToken, Tokenized,
    default_extensions,
};
pub use highlight::{FALLBACK_THEME, Highlighter, SyntectHighlighter, theme_candidates};
pub use html::escape_html;
pub use options::{
    DEFAULT_CODE_THEME, DEFAULT_LEGEND, DEFAULT_PLATFORM_ORIGIN, EngineOptions, OptionsPatch,
};
pub use reading_time::{ReadingStats, WORDS_PER_MINUTE};
pub use renderer::StyledRenderer;
pub use state::Footnote;
