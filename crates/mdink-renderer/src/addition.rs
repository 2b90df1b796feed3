//! Static decoration stylesheet.
//!
//! Theme-independent rules that only depend on CSS variables set elsewhere:
//! `--md-primary-color` and `--code-background` come from the customized
//! theme, `--blockquote-background` is defined here with a dark-mode override.

/// Decoration stylesheet injected once per document.
pub const ADDITION_CSS: &str = "\
:root{--blockquote-background:#f7f7f7}\
.dark{--blockquote-background:#212121}\
pre.code__pre{margin:16px 0!important;padding:16px 20px!important;border-radius:10px!important;background:var(--code-background,#f5f5f5)!important}\
pre.code__pre code.hljs{background:transparent!important;padding:0!important;display:block;line-height:1.65}\
pre.code__pre .mac-sign{display:inline-block;margin-bottom:8px}\
pre.code__pre.no-bg{background:transparent!important}\
blockquote{margin:16px 0!important;padding:10px 10px!important;border-left:6px solid var(--md-primary-color)!important;border-radius:8px!important}";

/// The decoration stylesheet wrapped in a `<style>` element.
#[must_use]
pub fn build_addition() -> String {
    format!(r#"<style id="md-addition">{ADDITION_CSS}</style>"#)
}
