//! Heading IDs and table of contents.

use std::cell::RefCell;

use lol_html::{RewriteStrSettings, element, rewrite_str, text};
use serde::Serialize;

use crate::ConvertError;

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Fragment link, `#0`, `#1`, ...
    pub url: String,
    /// Heading text content.
    pub title: String,
    /// Heading level (1-6).
    pub level: u8,
}

/// Number every `data-heading` element in document order.
///
/// Each heading gets `id="{i}"`; the returned entries link to `#{i}`.
pub fn assign_heading_ids(html: &str) -> Result<(String, Vec<Heading>), ConvertError> {
    let headings = RefCell::new(Vec::<Heading>::new());

    let output = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("[data-heading]", |el| {
                    let mut headings = headings.borrow_mut();
                    let index = headings.len();
                    el.set_attribute("id", &index.to_string())?;
                    headings.push(Heading {
                        url: format!("#{index}"),
                        title: String::new(),
                        level: heading_level(&el.tag_name()),
                    });
                    Ok(())
                }),
                text!("[data-heading]", |chunk| {
                    if let Some(heading) = headings.borrow_mut().last_mut() {
                        heading.title.push_str(chunk.as_str());
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::new()
        },
    )?;

    let headings = headings
        .into_inner()
        .into_iter()
        .map(|heading| Heading {
            title: html_escape::decode_html_entities(&heading.title).into_owned(),
            ..heading
        })
        .collect();
    Ok((output, headings))
}

fn heading_level(tag: &str) -> u8 {
    tag.strip_prefix(['h', 'H'])
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_assigns_sequential_ids() {
        let html = r#"<h1 data-heading="true">One</h1><p>x</p><h2 data-heading="true" style="color:red">Two &amp; <strong>more</strong></h2>"#;
        let (output, headings) = assign_heading_ids(html).unwrap();

        assert!(output.contains(r#"<h1 data-heading="true" id="0">One</h1>"#));
        assert!(output.contains(r#"style="color:red" id="1""#));
        assert_eq!(
            headings,
            vec![
                Heading {
                    url: "#0".to_owned(),
                    title: "One".to_owned(),
                    level: 1,
                },
                Heading {
                    url: "#1".to_owned(),
                    title: "Two & more".to_owned(),
                    level: 2,
                },
            ]
        );
    }

    #[test]
    fn test_plain_headings_ignored() {
        let (output, headings) = assign_heading_ids("<h3>Not marked</h3>").unwrap();
        assert_eq!(output, "<h3>Not marked</h3>");
        assert!(headings.is_empty());
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("h4"), 4);
        assert_eq!(heading_level("section"), 0);
    }
}
