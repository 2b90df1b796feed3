//! Standalone HTML page around a converted article.

use std::fmt::Write;

use crate::RenderResult;

/// Module script that renders `<pre class="mermaid">` blocks in the browser.
const DIAGRAM_SCRIPT: &str = r#"<script type="module">import mermaid from "https://cdn.jsdelivr.net/npm/mermaid@11/dist/mermaid.esm.min.mjs";mermaid.initialize({startOnLoad:true});</script>"#;

const PAGE_STYLE: &str = "body{margin:0;background:#f5f5f5}.md-container{max-width:677px;margin:24px auto;padding:20px;background:#fff;box-sizing:border-box}";

/// Wrap a result in a complete HTML page.
///
/// The page title comes from the front matter `title`, else the first
/// heading. A diagram activation script is added only when the article
/// contains diagrams.
pub fn wrap_document(result: &RenderResult) -> String {
    let title = result
        .front_matter
        .as_ref()
        .and_then(|meta| meta.get("title"))
        .and_then(serde_yaml::Value::as_str)
        .or_else(|| result.headings.first().map(|h| h.title.as_str()))
        .unwrap_or("mdink");

    let mut page = String::from("<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    let _ = writeln!(page, "<title>{}</title>", html_escape::encode_text(title));
    let _ = writeln!(page, "<style>{PAGE_STYLE}</style>");
    page.push_str("</head>\n<body>\n<div class=\"md-container\">\n");
    page.push_str(&result.html);
    page.push_str("\n</div>\n");
    if result.needs_diagram_activation {
        page.push_str(DIAGRAM_SCRIPT);
        page.push('\n');
    }
    page.push_str("</body>\n</html>\n");
    page
}
