//! New command - write an empty record document

use crate::context::Context;
use crate::output::write_output;
use anyhow::{Result, bail};
use colored::Colorize;
use contentlab_core::schema::{FieldKind, FieldSpec, SectionStyle, TemplateSchema};
use std::path::Path;

/// Write a skeleton record for `template` to `output` (or stdout)
///
/// # Arguments
///
/// * `template` - Built-in template name
/// * `output` - Target file; refused when it exists unless `force` is set
/// * `verbose` - Enable verbose output if true
pub fn run(
    config: Option<&Path>,
    template: &str,
    output: Option<&Path>,
    force: bool,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let schema = ctx.schema(template)?;

    if let Some(path) = output {
        if path.exists() && !force {
            bail!(
                "File '{}' already exists (use --force to overwrite)",
                path.display()
            );
        }
        if verbose {
            println!(
                "{} Writing {} skeleton to {}",
                "→".cyan(),
                schema.name,
                path.display()
            );
        }
    }

    write_output(output, &skeleton(&schema))?;

    if let Some(path) = output {
        println!(
            "{} Created {} record at {}",
            "✓".green().bold(),
            schema.name,
            path.display()
        );
        println!("\n{} Next steps:", "→".cyan());
        println!("  1. Fill in {}", path.display());
        println!("  2. contentlab render {} {}", schema.name, path.display());
    }

    Ok(())
}

/// TOML document with every field of the template left empty
///
/// Scalars come first, then nested tables, then one example section, so the
/// document stays valid TOML.
pub fn skeleton(schema: &TemplateSchema) -> String {
    let mut out = format!(
        "# {} record ({})\n# Empty fields fall back to their placeholders.\n\n",
        schema.name, schema.file_hint
    );

    for spec in schema.fields.iter().filter(|spec| is_inline(&spec.kind)) {
        out.push_str(&inline_line(schema, spec));
    }

    for spec in &schema.fields {
        if let FieldKind::Record(children) = &spec.kind {
            out.push_str(&format!("\n[{}]\n", spec.name));
            for child in children {
                out.push_str(&inline_line(schema, child));
            }
        }
    }

    for spec in &schema.fields {
        if let FieldKind::Sections(style) = &spec.kind {
            out.push_str(&format!(
                "\n# Section types: {}\n",
                style
                    .allowed()
                    .iter()
                    .map(|kind| kind.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
            out.push_str(&format!("[[{}]]\ntype = \"text\"\n", spec.name));
            match style {
                SectionStyle::Article => out.push_str("title = \"\"\nbody = \"\"\n"),
                SectionStyle::Portfolio => out.push_str("content = \"\"\n"),
            }
        }
    }

    out
}

fn is_inline(kind: &FieldKind) -> bool {
    !matches!(kind, FieldKind::Record(_) | FieldKind::Sections(_))
}

fn inline_line(schema: &TemplateSchema, spec: &FieldSpec) -> String {
    let value = match spec.kind {
        FieldKind::List => "[]",
        FieldKind::Rich => "{ markdown = \"\" }",
        _ => "\"\"",
    };
    match hint(schema, spec) {
        Some(hint) => format!("{} = {}  # {}\n", spec.name, value, hint),
        None => format!("{} = {}\n", spec.name, value),
    }
}

fn hint(schema: &TemplateSchema, spec: &FieldSpec) -> Option<String> {
    let catalog = &schema.catalog;
    match &spec.kind {
        FieldKind::Author if !catalog.authors.is_empty() => {
            let names: Vec<&str> = catalog.authors.iter().map(|a| a.name.as_str()).collect();
            Some(format!("one of: {}", names.join(", ")))
        }
        FieldKind::Category if !catalog.categories.is_empty() => {
            Some(format!("one of: {}", catalog.categories.join(", ")))
        }
        FieldKind::Identifier { source } => Some(format!("derived from {} when empty", source)),
        FieldKind::Date => Some("YYYY-MM-DD or display form".to_string()),
        FieldKind::ReadingTime => Some("minutes".to_string()),
        FieldKind::List => Some("array or comma-separated string".to_string()),
        _ => spec.fallback.map(|path| format!("defaults to {}", path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contentlab_core::record::{Value, parse_entries};
    use contentlab_core::schema::{blog, builtin_names, builtin, works};
    use contentlab_core::validate::validate;

    #[test]
    fn test_every_skeleton_parses() {
        for name in builtin_names() {
            let schema = builtin(name).unwrap();
            let records = parse_entries(&schema, &skeleton(&schema)).unwrap();
            assert_eq!(records.len(), 1, "{}", name);
        }
    }

    #[test]
    fn test_skeleton_fails_validation() {
        let schema = works();
        let records = parse_entries(&schema, &skeleton(&schema)).unwrap();
        let errors = validate(&schema, &records[0]);
        assert!(errors.contains("meta.services"));
        assert!(errors.contains("sections.0.content"));
    }

    #[test]
    fn test_blog_skeleton_layout() {
        let text = skeleton(&blog());
        assert!(text.contains("author = \"\"  # one of: John Doe, Jane Smith\n"));
        assert!(text.contains("description = { markdown = \"\" }\n"));
        assert!(text.contains("[[content]]\ntype = \"text\"\ntitle = \"\"\nbody = \"\"\n"));

        let records = parse_entries(&blog(), &text).unwrap();
        assert_eq!(records[0].get("description"), Some(&Value::text("")));
    }
}
