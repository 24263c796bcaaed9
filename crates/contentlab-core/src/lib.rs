// Core modules
pub mod config;
pub mod error;
pub mod format;
pub mod ident;
pub mod jsx;
pub mod markdown;
pub mod record;
pub mod render;
pub mod schema;
pub mod validate;

// Re-export commonly used types
pub use error::{ContentlabError, Result};
