//! CLI command implementations

mod input;

pub mod jsx;
pub mod new;
pub mod render;
pub mod slug;
pub mod templates;
pub mod validate;
