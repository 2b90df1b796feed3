//! Conversion error types.

use mdink_renderer::RenderError;
use mdink_theme::ThemeError;

/// Error converting a document.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Theme could not be loaded.
    #[error(transparent)]
    Theme(#[from] ThemeError),
    /// Markdown body could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// Font size is not a pixel value.
    #[error("Invalid font size '{0}': expected a pixel value such as 15px")]
    InvalidFontSize(String),
    /// Heading ID assignment failed.
    #[error("HTML rewrite failed: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),
}
