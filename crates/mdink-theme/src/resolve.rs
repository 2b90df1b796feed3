//! Style resolution: flatten a theme into per-kind inline styles.

use std::collections::BTreeMap;

use crate::theme::{Declarations, Theme, to_css};

/// Runtime overrides applied while resolving a theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Overrides `font-family` in `base` when set.
    pub font_family: Option<String>,
    /// Overrides `font-size` in `base` when set (e.g. `"15px"`).
    pub font_size: Option<String>,
    /// Indent paragraphs by `2em` unless the theme already sets `text-indent` on `p`.
    pub use_indent: bool,
}

/// Flattened mapping from token kind to its final CSS declarations.
///
/// Compared by value to detect whether anything style-dependent needs rebuilding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMap {
    kinds: BTreeMap<String, Declarations>,
}

/// Resolve `theme` into a [`StyleMap`].
///
/// `base` (with font overrides applied) is merged under every `block` and
/// `inline` kind; per-kind properties win. When a kind appears in both tables
/// the `block` entry wins.
#[must_use]
pub fn resolve(theme: &Theme, options: &ResolveOptions) -> StyleMap {
    let mut base = theme.base.clone();
    if let Some(family) = &options.font_family {
        base.insert("font-family".to_owned(), family.clone());
    }
    if let Some(size) = &options.font_size {
        base.insert("font-size".to_owned(), size.clone());
    }

    let mut block = theme.block.clone();
    if options.use_indent {
        block
            .entry("p".to_owned())
            .or_default()
            .entry("text-indent".to_owned())
            .or_insert_with(|| "2em".to_owned());
    }

    let merge = |decls: &Declarations| {
        let mut merged = base.clone();
        merged.extend(decls.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    };

    let mut kinds = BTreeMap::new();
    for (kind, decls) in &theme.inline {
        kinds.insert(kind.clone(), merge(decls));
    }
    for (kind, decls) in &block {
        if theme.inline.contains_key(kind) {
            tracing::warn!(kind = %kind, "Token kind declared as both block and inline, using block");
        }
        kinds.insert(kind.clone(), merge(decls));
    }

    StyleMap { kinds }
}

impl StyleMap {
    /// Declarations for a kind, if the theme styles it.
    pub fn get(&self, kind: &str) -> Option<&Declarations> {
        self.kinds.get(kind)
    }

    /// Iterate over styled kinds in name order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }

    /// Inline CSS for a kind.
    pub fn css(&self, kind: &str) -> Option<String> {
        self.get(kind).map(to_css)
    }

    /// ` style="..."` attribute for a kind, or an empty string when unstyled.
    ///
    /// The leading space lets callers write `format!("<p{}>", styles.attr("p"))`.
    pub fn attr(&self, kind: &str) -> String {
        self.css(kind).map(|css| style_attr(&css)).unwrap_or_default()
    }

    /// Like [`attr`](Self::attr) with `prop:value;...` declarations merged in.
    ///
    /// Added properties replace the kind's own. The addition is kept even
    /// when the kind itself is unstyled.
    pub fn attr_with(&self, kind: &str, addition: &str) -> String {
        let added = parse_declarations(addition);
        if added.is_empty() {
            return self.attr(kind);
        }
        let mut decls = self.get(kind).cloned().unwrap_or_default();
        decls.extend(added);
        style_attr(&to_css(&decls))
    }

    /// Attribute for several kinds merged in order (later kinds win).
    ///
    /// Used for variants such as `blockquote` + `blockquote_note`.
    pub fn merged_attr(&self, kinds: &[&str]) -> String {
        let mut merged: Option<Declarations> = None;
        for decls in kinds.iter().filter_map(|kind| self.get(kind)) {
            merged
                .get_or_insert_with(Declarations::new)
                .extend(decls.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        merged
            .map(|decls| style_attr(&to_css(&decls)))
            .unwrap_or_default()
    }
}

/// Parse `prop:value;prop:value` into declarations, skipping malformed pairs.
fn parse_declarations(css: &str) -> Declarations {
    css.split(';')
        .filter_map(|pair| pair.split_once(':'))
        .map(|(property, value)| (property.trim(), value.trim()))
        .filter(|(property, _)| !property.is_empty())
        .map(|(property, value)| (property.to_owned(), value.to_owned()))
        .collect()
}

fn style_attr(css: &str) -> String {
    format!(
        r#" style="{}""#,
        css.replace('&', "&amp;").replace('"', "&quot;")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decls(pairs: &[(&str, &str)]) -> Declarations {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    fn sample_theme() -> Theme {
        let mut theme = Theme {
            base: decls(&[("font-size", "16px"), ("color", "#333")]),
            ..Theme::default()
        };
        theme
            .block
            .insert("p".to_owned(), decls(&[("margin", "1em 0")]));
        theme
            .block
            .insert("h1".to_owned(), decls(&[("color", "#000")]));
        theme
            .inline
            .insert("strong".to_owned(), decls(&[("font-weight", "bold")]));
        theme
    }

    #[test]
    fn test_base_merged_into_every_kind() {
        let styles = resolve(&sample_theme(), &ResolveOptions::default());
        assert_eq!(
            styles.css("p").unwrap(),
            "color:#333;font-size:16px;margin:1em 0"
        );
        assert_eq!(
            styles.css("strong").unwrap(),
            "color:#333;font-size:16px;font-weight:bold"
        );
    }

    #[test]
    fn test_kind_overrides_base() {
        let styles = resolve(&sample_theme(), &ResolveOptions::default());
        assert_eq!(styles.get("h1").unwrap()["color"], "#000");
    }

    #[test]
    fn test_font_overrides() {
        let options = ResolveOptions {
            font_family: Some("serif".to_owned()),
            font_size: Some("15px".to_owned()),
            use_indent: false,
        };
        let styles = resolve(&sample_theme(), &options);
        let p = styles.get("p").unwrap();
        assert_eq!(p["font-family"], "serif");
        assert_eq!(p["font-size"], "15px");
    }

    #[test]
    fn test_unset_font_keeps_theme_value() {
        let styles = resolve(&sample_theme(), &ResolveOptions::default());
        assert_eq!(styles.get("p").unwrap()["font-size"], "16px");
        assert!(!styles.get("p").unwrap().contains_key("font-family"));
    }

    #[test]
    fn test_indent_injected() {
        let options = ResolveOptions {
            use_indent: true,
            ..ResolveOptions::default()
        };
        let styles = resolve(&sample_theme(), &options);
        assert_eq!(styles.get("p").unwrap()["text-indent"], "2em");
    }

    #[test]
    fn test_indent_respects_theme() {
        let mut theme = sample_theme();
        theme
            .block
            .get_mut("p")
            .unwrap()
            .insert("text-indent".to_owned(), "4em".to_owned());
        let options = ResolveOptions {
            use_indent: true,
            ..ResolveOptions::default()
        };
        let styles = resolve(&theme, &options);
        assert_eq!(styles.get("p").unwrap()["text-indent"], "4em");
    }

    #[test]
    fn test_indent_creates_missing_p() {
        let options = ResolveOptions {
            use_indent: true,
            ..ResolveOptions::default()
        };
        let styles = resolve(&Theme::default(), &options);
        assert_eq!(styles.css("p").unwrap(), "text-indent:2em");
    }

    #[test]
    fn test_block_wins_on_collision() {
        let mut theme = sample_theme();
        theme
            .inline
            .insert("h1".to_owned(), decls(&[("color", "blue")]));
        let styles = resolve(&theme, &ResolveOptions::default());
        assert_eq!(styles.get("h1").unwrap()["color"], "#000");
    }

    #[test]
    fn test_input_not_mutated() {
        let theme = sample_theme();
        let before = theme.clone();
        let options = ResolveOptions {
            font_family: Some("serif".to_owned()),
            font_size: None,
            use_indent: true,
        };
        let _ = resolve(&theme, &options);
        assert_eq!(theme, before);
    }

    #[test]
    fn test_attr() {
        let styles = resolve(&sample_theme(), &ResolveOptions::default());
        assert_eq!(
            styles.attr("h1"),
            r#" style="color:#000;font-size:16px""#
        );
        assert_eq!(styles.attr("unknown"), "");
    }

    #[test]
    fn test_attr_escapes_quotes() {
        let mut theme = Theme::default();
        theme.block.insert(
            "p".to_owned(),
            decls(&[("font-family", r#""PingFang SC", sans-serif"#)]),
        );
        let styles = resolve(&theme, &ResolveOptions::default());
        assert_eq!(
            styles.attr("p"),
            r#" style="font-family:&quot;PingFang SC&quot;, sans-serif""#
        );
    }

    #[test]
    fn test_attr_with_addition() {
        let styles = resolve(&sample_theme(), &ResolveOptions::default());
        assert_eq!(
            styles.attr_with("h1", ";text-align:center"),
            r#" style="color:#000;font-size:16px;text-align:center""#
        );
        assert_eq!(
            styles.attr_with("missing", "text-align:center"),
            r#" style="text-align:center""#
        );
        assert_eq!(styles.attr_with("missing", ""), "");
    }

    #[test]
    fn test_attr_with_overrides_properties() {
        let styles = resolve(&sample_theme(), &ResolveOptions::default());
        assert_eq!(
            styles.attr_with("h1", "font-size: 20px;;line-height:1;bogus"),
            r#" style="color:#000;font-size:20px;line-height:1""#
        );
        assert_eq!(styles.attr_with("h1", ";"), styles.attr("h1"));
    }

    #[test]
    fn test_merged_attr() {
        let mut theme = Theme::default();
        theme.block.insert(
            "blockquote".to_owned(),
            decls(&[("color", "gray"), ("padding", "1em")]),
        );
        theme
            .block
            .insert("blockquote_note".to_owned(), decls(&[("color", "blue")]));
        let styles = resolve(&theme, &ResolveOptions::default());
        assert_eq!(
            styles.merged_attr(&["blockquote", "blockquote_note", "absent"]),
            r#" style="color:blue;padding:1em""#
        );
        assert_eq!(styles.merged_attr(&["absent"]), "");
    }

    #[test]
    fn test_equal_inputs_equal_maps() {
        let a = resolve(&sample_theme(), &ResolveOptions::default());
        let b = resolve(&sample_theme(), &ResolveOptions::default());
        assert_eq!(a, b);

        let options = ResolveOptions {
            font_size: Some("18px".to_owned()),
            ..ResolveOptions::default()
        };
        assert_ne!(a, resolve(&sample_theme(), &options));
    }
}
