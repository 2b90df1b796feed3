//! GitHub-style alerts (`> [!NOTE]`, `> [!TIP]`, ...).
//!
//! The tokenizer recognizes the marker; this module maps variants to icons,
//! titles and styles and renders the surrounding callout box.

use mdink_theme::StyleMap;
use pulldown_cmark::BlockQuoteKind;

use crate::html::{SVG_ALERT, SVG_INFO, SVG_LIGHTBULB, SVG_REPORT, SVG_STOP};

/// Alert variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlertKind {
    Note = 0,
    Tip = 1,
    Important = 2,
    Warning = 3,
    Caution = 4,
}

impl AlertKind {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Note,
        Self::Tip,
        Self::Important,
        Self::Warning,
        Self::Caution,
    ];

    /// Lowercase name used in classes and style kinds.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Tip => "tip",
            Self::Important => "important",
            Self::Warning => "warning",
            Self::Caution => "caution",
        }
    }

    /// Title shown in the callout header.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Note => "Note",
            Self::Tip => "Tip",
            Self::Important => "Important",
            Self::Warning => "Warning",
            Self::Caution => "Caution",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Note => SVG_INFO,
            Self::Tip => SVG_LIGHTBULB,
            Self::Important => SVG_REPORT,
            Self::Warning => SVG_ALERT,
            Self::Caution => SVG_STOP,
        }
    }
}

impl From<BlockQuoteKind> for AlertKind {
    fn from(kind: BlockQuoteKind) -> Self {
        match kind {
            BlockQuoteKind::Note => Self::Note,
            BlockQuoteKind::Tip => Self::Tip,
            BlockQuoteKind::Important => Self::Important,
            BlockQuoteKind::Warning => Self::Warning,
            BlockQuoteKind::Caution => Self::Caution,
        }
    }
}

/// Style attributes of one alert variant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertStyles {
    /// `blockquote` + `blockquote_{variant}`.
    pub container: String,
    /// `blockquote_title` + `blockquote_title_{variant}`.
    pub title: String,
    /// `blockquote_p` + `blockquote_p_{variant}`.
    pub paragraph: String,
}

impl AlertStyles {
    pub(crate) fn from_styles(styles: &StyleMap, kind: AlertKind) -> Self {
        let name = kind.name();
        Self {
            container: styles.merged_attr(&["blockquote", &format!("blockquote_{name}")]),
            title: styles.merged_attr(&["blockquote_title", &format!("blockquote_title_{name}")]),
            paragraph: styles.merged_attr(&["blockquote_p", &format!("blockquote_p_{name}")]),
        }
    }
}

/// Render an alert around already rendered `content`.
#[must_use]
pub fn render_alert(kind: AlertKind, styles: &AlertStyles, content: &str) -> String {
    let name = kind.name();
    format!(
        r#"<section class="alert alert-{name}"{}><p class="alert-title"{}>{}{}</p>{content}</section>"#,
        styles.container,
        styles.title,
        kind.icon(),
        kind.title(),
    )
}
