//! Global context for CLI commands

use anyhow::Result;
use contentlab_core::config::Config;
use contentlab_core::render::RenderOptions;
use contentlab_core::schema::{self, TemplateSchema};
use std::env;
use std::path::Path;

/// Loaded configuration shared by the commands
pub struct Context {
    pub config: Config,
    pub verbose: bool,
}

impl Context {
    /// Load the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The explicit config file does not exist
    /// - The config file cannot be read, parsed or has invalid values
    pub fn new(config_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let current_dir = env::current_dir()?;
        let config = Config::load(config_path, &current_dir)?;
        Ok(Self { config, verbose })
    }

    /// Built-in template with the configured catalog applied
    pub fn schema(&self, name: &str) -> Result<TemplateSchema> {
        let schema = schema::builtin(name)?;
        Ok(schema.with_config(self.config.template(name)))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::from(&self.config)
    }
}
