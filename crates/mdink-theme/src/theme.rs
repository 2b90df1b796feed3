//! Theme tables.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ThemeError;

/// CSS declarations of a single token kind, keyed by property name.
///
/// Sorted by property name so that rendered style strings do not depend on
/// the order a theme file happens to list them in.
pub type Declarations = BTreeMap<String, String>;

/// A declarative style table.
///
/// `base` holds global properties (primary color, font family and size, CSS
/// variables) that are merged under every kind in `block` and `inline`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Global properties.
    #[serde(default)]
    pub base: Declarations,
    /// Block-level token kinds (`h1`, `p`, `blockquote`, `code_pre`, ...).
    #[serde(default)]
    pub block: BTreeMap<String, Declarations>,
    /// Inline token kinds (`strong`, `codespan`, `link`, ...).
    #[serde(default)]
    pub inline: BTreeMap<String, Declarations>,
}

impl Theme {
    /// Parse a theme from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        let theme: Self = toml::from_str(content)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Load a theme from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check that no token kind is declared in both `block` and `inline`.
    pub fn validate(&self) -> Result<(), ThemeError> {
        match self.block.keys().find(|kind| self.inline.contains_key(*kind)) {
            Some(kind) => Err(ThemeError::KindCollision(kind.clone())),
            None => Ok(()),
        }
    }

    /// Return a copy with `overlay` merged on top.
    ///
    /// Declarations are merged per kind: properties in `overlay` replace
    /// properties of the same name, other properties are kept.
    #[must_use]
    pub fn overlay(&self, overlay: &Theme) -> Theme {
        let mut merged = self.clone();
        merged.base.extend(overlay.base.clone());
        for (kind, decls) in &overlay.block {
            merged
                .block
                .entry(kind.clone())
                .or_default()
                .extend(decls.clone());
        }
        for (kind, decls) in &overlay.inline {
            merged
                .inline
                .entry(kind.clone())
                .or_default()
                .extend(decls.clone());
        }
        merged
    }

    /// Look up a kind in `block` first, then `inline`.
    pub fn kind(&self, kind: &str) -> Option<&Declarations> {
        self.block.get(kind).or_else(|| self.inline.get(kind))
    }
}

/// Serialize declarations to an inline CSS string (`prop:value;prop:value`).
#[must_use]
pub fn to_css(decls: &Declarations) -> String {
    let mut css = String::new();
    for (property, value) in decls {
        if !css.is_empty() {
            css.push(';');
        }
        css.push_str(property);
        css.push(':');
        css.push_str(value);
    }
    css
}
