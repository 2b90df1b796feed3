//! Engine options and partial updates.

use mdink_theme::{ResolveOptions, Theme};

/// Legend policy used when none is given: caption from alt text.
pub const DEFAULT_LEGEND: &str = "alt";

/// Links to this origin stay clickable anchors.
pub const DEFAULT_PLATFORM_ORIGIN: &str = "https://mp.weixin.qq.com";

/// Highlight theme used when none is given.
pub const DEFAULT_CODE_THEME: &str = "github";

/// Full option set of a [`StyledRenderer`](crate::StyledRenderer).
#[derive(Clone, Debug, PartialEq)]
pub struct EngineOptions {
    /// Active (already customized) theme.
    pub theme: Theme,
    /// Overrides the theme's base font family.
    pub font_family: Option<String>,
    /// Overrides the theme's base font size (`"15px"`).
    pub font_size: Option<String>,
    /// Indent paragraphs.
    pub use_indent: bool,
    /// Turn outbound links into numbered citations.
    pub cite: bool,
    /// Caption source preference for images, e.g. `alt-title`.
    pub legend: String,
    /// Show the word count and reading time banner.
    pub count_words: bool,
    /// Add the traffic-light header to code blocks.
    pub mac_code_block: bool,
    /// Highlight theme name or stylesheet href.
    pub code_theme: String,
    /// Origin whose links keep their anchors.
    pub platform_origin: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_family: None,
            font_size: None,
            use_indent: false,
            cite: false,
            legend: DEFAULT_LEGEND.to_owned(),
            count_words: false,
            mac_code_block: false,
            code_theme: DEFAULT_CODE_THEME.to_owned(),
            platform_origin: DEFAULT_PLATFORM_ORIGIN.to_owned(),
        }
    }
}

impl EngineOptions {
    /// Options that feed style resolution.
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            font_family: self.font_family.clone(),
            font_size: self.font_size.clone(),
            use_indent: self.use_indent,
        }
    }

    /// Shallow-merge a patch. Returns `true` when the code theme changed.
    pub fn apply(&mut self, patch: OptionsPatch) -> bool {
        let old_code_theme = self.code_theme.clone();
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(font_family) = patch.font_family {
            self.font_family = font_family;
        }
        if let Some(font_size) = patch.font_size {
            self.font_size = font_size;
        }
        if let Some(use_indent) = patch.use_indent {
            self.use_indent = use_indent;
        }
        if let Some(cite) = patch.cite {
            self.cite = cite;
        }
        if let Some(legend) = patch.legend {
            self.legend = legend;
        }
        if let Some(count_words) = patch.count_words {
            self.count_words = count_words;
        }
        if let Some(mac_code_block) = patch.mac_code_block {
            self.mac_code_block = mac_code_block;
        }
        if let Some(code_theme) = patch.code_theme {
            self.code_theme = code_theme;
        }
        if let Some(platform_origin) = patch.platform_origin {
            self.platform_origin = platform_origin;
        }
        self.code_theme != old_code_theme
    }
}

/// Partial update of [`EngineOptions`]. `None` fields are left unchanged.
///
/// The font fields are doubly optional: `Some(None)` removes the override.
#[derive(Clone, Debug, Default)]
pub struct OptionsPatch {
    pub theme: Option<Theme>,
    pub font_family: Option<Option<String>>,
    pub font_size: Option<Option<String>>,
    pub use_indent: Option<bool>,
    pub cite: Option<bool>,
    pub legend: Option<String>,
    pub count_words: Option<bool>,
    pub mac_code_block: Option<bool>,
    pub code_theme: Option<String>,
    pub platform_origin: Option<String>,
}
