//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod themes;

pub(crate) use render::RenderArgs;
