//! Loading records named on the command line

use crate::cli::RecordArgs;
use crate::output::read_input;
use anyhow::{Context as _, Result};
use contentlab_core::markdown;
use contentlab_core::record::{self, Record};
use contentlab_core::schema::TemplateSchema;
use std::path::Path;

/// Parse the input document, then apply `--body` and `--set` to every entry
pub fn load_records(schema: &TemplateSchema, args: &RecordArgs) -> Result<Vec<Record>> {
    let source = read_input(Some(args.input.as_path()))
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let mut records = record::parse_entries(schema, &source)
        .with_context(|| format!("Invalid record document {}", args.input.display()))?;

    let body = args.body.as_deref().map(read_body).transpose()?;

    for record in &mut records {
        if let Some(html) = &body {
            record::set_rich_content(schema, record, html.clone())?;
        }
        for (path, value) in &args.set {
            record::assign(schema, record, path, value)?;
        }
    }

    tracing::debug!(
        "Loaded {} record(s) from {}",
        records.len(),
        args.input.display()
    );
    Ok(records)
}

/// Read a body file; `.md` / `.markdown` files are converted to HTML
fn read_body(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let is_markdown = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"));

    Ok(if is_markdown {
        markdown::to_html(&text)
    } else {
        text
    })
}
