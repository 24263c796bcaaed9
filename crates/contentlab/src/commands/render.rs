//! Render command - validate a record document and emit its literal

use super::input::load_records;
use super::validate::print_errors;
use crate::cli::RecordArgs;
use crate::context::Context;
use crate::output::write_output;
use anyhow::{Result, bail};
use colored::Colorize;
use contentlab_core::ContentlabError;
use contentlab_core::render::generate;
use std::path::Path;

/// Render the records named by `args` to `output` (or stdout)
///
/// Nothing is written when any field is rejected.
pub fn run(
    config: Option<&Path>,
    args: &RecordArgs,
    output: Option<&Path>,
    no_header: bool,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let schema = ctx.schema(&args.template)?;
    let records = load_records(&schema, args)?;

    let mut options = ctx.render_options();
    if no_header {
        options.header = false;
    }

    let literal = match generate(&schema, &records, &options) {
        Ok(literal) => literal,
        Err(ContentlabError::ValidationFailed(errors)) => {
            print_errors(&errors);
            bail!("{} field(s) rejected, nothing rendered", errors.len());
        }
        Err(e) => return Err(e.into()),
    };

    write_output(output, &literal)?;

    if let Some(path) = output {
        println!(
            "{} Wrote {} ({} entr{}) to {}",
            "✓".green().bold(),
            schema.name,
            records.len(),
            if records.len() == 1 { "y" } else { "ies" },
            path.display()
        );
        if ctx.verbose {
            println!("  paste into {}", schema.file_hint);
        }
    }

    Ok(())
}
