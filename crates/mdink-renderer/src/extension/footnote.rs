//! Markdown footnotes (`[^label]` and `[^label]: text`).
//!
//! References are numbered in order of first reference. Definitions render
//! where they are declared into a buffer and are emitted together at the end of
//! the body, in number order. Definitions nobody references are numbered after
//! the referenced ones.

use std::collections::HashMap;

use mdink_theme::StyleMap;

/// Footnote numbering and collected definition bodies for one document.
#[derive(Debug, Default)]
pub(crate) struct FootnoteDefinitions {
    /// Normalized labels in number order.
    order: Vec<String>,
    bodies: HashMap<String, String>,
    /// Labels in definition order.
    defined: Vec<String>,
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

impl FootnoteDefinitions {
    /// Number for a reference, assigned on first use.
    pub(crate) fn reference(&mut self, label: &str) -> usize {
        let label = normalize(label);
        if let Some(pos) = self.order.iter().position(|l| *l == label) {
            return pos + 1;
        }
        self.order.push(label);
        self.order.len()
    }

    /// Store the rendered body of a definition. The first definition of a label wins.
    pub(crate) fn define(&mut self, label: &str, body: String) {
        let label = normalize(label);
        if self.bodies.contains_key(&label) {
            return;
        }
        self.defined.push(label.clone());
        self.bodies.insert(label, body);
    }

    /// Render all definitions as one `footnotes`-styled paragraph.
    ///
    /// Returns an empty string when no definition was collected.
    pub(crate) fn render(&self, styles: &StyleMap) -> String {
        if self.bodies.is_empty() {
            return String::new();
        }
        let unreferenced = self
            .defined
            .iter()
            .filter(|label| !self.order.contains(label));
        let lines: Vec<String> = self
            .order
            .iter()
            .chain(unreferenced)
            .enumerate()
            .filter_map(|(i, label)| {
                let body = self.bodies.get(label)?;
                Some(format!(
                    r#"<code style="font-size:90%;opacity:.6;">[{}]</code> {body}<br/>"#,
                    i + 1
                ))
            })
            .collect();
        format!("<p{}>{}</p>", styles.attr("footnotes"), lines.join("\n"))
    }

    pub(crate) fn clear(&mut self) {
        self.order.clear();
        self.bodies.clear();
        self.defined.clear();
    }
}

/// Superscript marker for a reference.
pub(crate) fn render_reference(styles: &StyleMap, number: usize) -> String {
    format!("<sup{}>[{number}]</sup>", styles.attr("footnote_ref"))
}
