//! Configuration: `contentlab.toml` model and workspace-wide constants

pub mod consts;
pub mod model;

pub use model::{AuthorEntry, Config, JsxConfig, OutputConfig, TemplateConfig};
