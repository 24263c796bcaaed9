//! Validate command - report every rejected field of a record document

use super::input::load_records;
use crate::cli::RecordArgs;
use crate::context::Context;
use crate::output::print_json;
use anyhow::{Result, bail};
use colored::Colorize;
use contentlab_core::validate::{ValidationErrors, validate_all};
use serde_json::json;
use std::path::Path;

/// Validate the records named by `args`
///
/// # Exit Code
///
/// Exits with 1 when any field is rejected, in both output modes.
pub fn run(config: Option<&Path>, args: &RecordArgs, json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let schema = ctx.schema(&args.template)?;
    let records = load_records(&schema, args)?;
    let errors = validate_all(&schema, &records);

    if json {
        let output = json!({
            "template": schema.name,
            "entries": records.len(),
            "valid": errors.is_empty(),
            "errors": errors,
        });
        print_json(&serde_json::to_string_pretty(&output)?)?;
    } else if errors.is_empty() {
        println!(
            "{} {} is a valid {} record ({} entr{})",
            "✓".green().bold(),
            args.input.display(),
            schema.name,
            records.len(),
            if records.len() == 1 { "y" } else { "ies" }
        );
    } else {
        print_errors(&errors);
    }

    if !errors.is_empty() {
        bail!("{} field(s) rejected", errors.len());
    }
    Ok(())
}

/// One line per rejected field, on stderr
pub fn print_errors(errors: &ValidationErrors) {
    for (path, message) in errors.iter() {
        eprintln!("{} {}: {}", "!".yellow().bold(), path, message);
    }
}
