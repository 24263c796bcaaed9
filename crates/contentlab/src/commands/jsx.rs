//! Jsx command - normalize markup from a file or stdin

use crate::context::Context;
use crate::output::{print_text, read_input};
use anyhow::{Context as _, Result};
use contentlab_core::jsx::{JsxOptions, normalize_with};
use contentlab_core::markdown;
use std::path::Path;

pub fn run(config: Option<&Path>, file: Option<&Path>, from_markdown: bool) -> Result<()> {
    let ctx = Context::new(config, false)?;
    let source = read_input(file).with_context(|| match file {
        Some(path) => format!("Failed to read {}", path.display()),
        None => "Failed to read stdin".to_string(),
    })?;

    let html = if from_markdown {
        markdown::to_html(&source)
    } else {
        source
    };

    let options = JsxOptions {
        class_attribute: ctx.config.jsx.class_attribute.clone(),
    };
    print_text(normalize_with(&html, &options).trim_end())?;
    Ok(())
}
