//! Markdown to inline-styled HTML conversion pipeline.
//!
//! Ties the theme, renderer and post-processing together:
//!
//! 1. The theme is selected and customized from [`RenderOptions`].
//! 2. Front matter is split off and reading statistics are measured on the body.
//! 3. The body is rendered by [`mdink_renderer::StyledRenderer`].
//! 4. The article is assembled (reading time, citations, stylesheets) inside
//!    the styled container and headings are numbered.
//!
//! # Example
//!
//! ```
//! use mdink_convert::{RenderOptions, markdown_to_html};
//!
//! let result = markdown_to_html("# Title\n\nBody", &RenderOptions::default()).unwrap();
//! assert_eq!(result.headings[0].url, "#0");
//! ```

mod convert;
pub mod document;
mod error;
pub mod frontmatter;
mod options;
pub mod postprocess;
pub mod toc;

pub use convert::{Converter, ReadingTime, RenderResult, markdown_to_html};
pub use document::wrap_document;
pub use error::ConvertError;
pub use options::{DEFAULT_FONT_SIZE, FALLBACK_PRIMARY_COLOR, RenderOptions, parse_font_size};
pub use toc::{Heading, assign_heading_ids};
