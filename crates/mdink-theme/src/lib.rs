//! Themes and inline style resolution for mdink.
//!
//! A [`Theme`] is a declarative table of CSS property maps keyed by token kind
//! (`h1`, `p`, `code_pre`, ...), split into `block` and `inline` tables plus a
//! `base` table of global properties. Rendering never reads a theme directly:
//!
//! 1. [`customize`] injects the primary color and base font size.
//! 2. [`resolve`] merges `base` into every kind and applies font and indent
//!    overrides, producing a flat [`StyleMap`].
//! 3. The renderer asks the [`StyleMap`] for inline `style` attributes.
//!
//! # Example
//!
//! ```
//! use mdink_theme::{CustomizeOptions, ResolveOptions, builtin, customize, resolve};
//!
//! let theme = builtin::theme("default").unwrap();
//! let theme = customize(&theme, &CustomizeOptions::new(15.0, "#0F4C81"));
//! let styles = resolve(&theme, &ResolveOptions::default());
//!
//! assert!(styles.attr("h1").contains("--md-primary-color:#0F4C81"));
//! ```

pub mod builtin;
mod customize;
mod error;
mod resolve;
mod theme;

pub use customize::{CODE_BACKGROUND, CustomizeOptions, customize};
pub use error::ThemeError;
pub use resolve::{ResolveOptions, StyleMap, resolve};
pub use theme::{Declarations, Theme, to_css};
