//! Final assembly of a rendered article.

use mdink_renderer::{ReadingStats, StyledRenderer};

/// Assemble the article around a rendered body.
///
/// Order inside the styled container: reading time banner, body, citation
/// footnotes, decoration stylesheet, highlight theme stylesheet, CSS variables.
pub fn assemble(renderer: &StyledRenderer, body: &str, stats: &ReadingStats) -> String {
    let mut html = renderer.build_reading_time(stats);
    html.push_str(body);
    html.push_str(&renderer.build_footnotes());
    html.push_str(&renderer.build_addition());

    let highlight_css = renderer.highlight_css();
    if !highlight_css.is_empty() {
        html.push_str(r#"<style id="hljs-theme">"#);
        html.push_str(highlight_css);
        html.push_str("</style>");
    }
    html.push_str(&variables_style(renderer));

    renderer.create_container(&html)
}

/// `:root` declarations of the theme's CSS variables.
fn variables_style(renderer: &StyledRenderer) -> String {
    let variables: Vec<String> = renderer
        .options()
        .theme
        .base
        .iter()
        .filter(|(name, _)| name.starts_with("--"))
        .map(|(name, value)| format!("{name}:{value}"))
        .collect();
    if variables.is_empty() {
        return String::new();
    }
    format!(r#"<style id="md-variables">:root{{{}}}</style>"#, variables.join(";"))
}
