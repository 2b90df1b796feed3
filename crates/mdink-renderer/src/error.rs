//! Renderer error types.

/// Error converting a TeX expression.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// The converter rejected the expression.
    #[error("Failed to convert math `{tex}`: {message}")]
    Convert {
        /// TeX source of the expression.
        tex: String,
        /// Converter error message.
        message: String,
    },
}

/// Error highlighting a code block.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// Syntax highlighting engine failure.
    #[error("Highlighting failed: {0}")]
    Syntect(#[from] syntect::Error),
}

/// Error rendering a document.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Math expression could not be converted.
    #[error(transparent)]
    Math(#[from] MathError),
}
