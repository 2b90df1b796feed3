//! Colored status lines on stderr.
//!
//! Converted HTML may go to stdout, so nothing here writes there.

use std::path::Path;

use console::{Style, Term};
use mdink_convert::RenderResult;

/// Status reporter for CLI commands.
pub(crate) struct Output {
    term: Term,
    green: Style,
    dim: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            dim: Style::new().dim(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Report a written article with its statistics.
    pub(crate) fn rendered(&self, path: &Path, result: &RenderResult) {
        let stats = &result.reading_time;
        self.line(&self.green, &format!("Wrote {}", path.display()));
        self.line(
            &self.dim,
            &format!(
                "  {} headings, {} words, about {} min to read",
                result.headings.len(),
                stats.words,
                stats.minutes
            ),
        );
        if result.needs_diagram_activation {
            self.line(
                &self.cyan_bold,
                "  Diagrams need client-side rendering (use --document for a preview page)",
            );
        }
    }

    /// Report the table of contents file.
    pub(crate) fn toc_written(&self, path: &Path, count: usize) {
        self.line(
            &self.dim,
            &format!("  {count} headings written to {}", path.display()),
        );
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.red, msg);
    }

    fn line(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}
