//! Templates command - list the built-in templates

use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::Result;
use colored::Colorize;
use contentlab_core::schema::{builtin_names, FieldKind, FieldSpec, TemplateSchema};
use serde_json::{json, Value};
use std::path::Path;

/// One declared field, flattened to its dot path
struct FieldLine {
    path: String,
    spec: FieldSpec,
}

pub fn run(config: Option<&Path>, json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let schemas = builtin_names()
        .iter()
        .map(|name| ctx.schema(name))
        .collect::<Result<Vec<_>>>()?;

    if json {
        let listing: Vec<Value> = schemas.iter().map(template_json).collect();
        print_json(&serde_json::to_string_pretty(&listing)?)?;
    } else {
        for (index, schema) in schemas.iter().enumerate() {
            if index > 0 {
                print_text("")?;
            }
            print_human(schema, ctx.verbose)?;
        }
    }

    Ok(())
}

fn flatten(specs: &[FieldSpec], prefix: &str, out: &mut Vec<FieldLine>) {
    for spec in specs {
        let path = if prefix.is_empty() {
            spec.name.to_string()
        } else {
            format!("{}.{}", prefix, spec.name)
        };
        match &spec.kind {
            FieldKind::Record(children) => flatten(children, &path, out),
            _ => out.push(FieldLine {
                path,
                spec: spec.clone(),
            }),
        }
    }
}

fn fields_of(schema: &TemplateSchema) -> Vec<FieldLine> {
    let mut lines = Vec::new();
    flatten(&schema.fields, "", &mut lines);
    lines
}

fn kind_label(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Identifier { source } => format!("identifier, from {}", source),
        FieldKind::Sections(style) => {
            let kinds: Vec<&str> = style.allowed().iter().map(|k| k.as_str()).collect();
            format!("sections: {}", kinds.join(" | "))
        }
        other => other.name().to_string(),
    }
}

fn template_json(schema: &TemplateSchema) -> Value {
    let fields: Vec<Value> = fields_of(schema)
        .iter()
        .map(|line| {
            json!({
                "path": line.path,
                "kind": line.spec.kind.name(),
                "required": line.spec.required.is_some(),
                "default": line.spec.default,
                "fallback": line.spec.fallback,
            })
        })
        .collect();
    let authors: Vec<&str> = schema
        .catalog
        .authors
        .iter()
        .map(|author| author.name.as_str())
        .collect();

    json!({
        "name": schema.name,
        "description": schema.description,
        "file": schema.file_hint,
        "shape": schema.shape,
        "fields": fields,
        "authors": authors,
        "categories": schema.catalog.categories,
    })
}

fn print_human(schema: &TemplateSchema, verbose: bool) -> Result<()> {
    print_text(&format!(
        "{} {} {}",
        schema.name.bold(),
        "→".cyan(),
        schema.file_hint
    ))?;
    print_text(&format!("  {}", schema.description))?;

    for line in fields_of(schema) {
        let mut text = format!("  - {} ({})", line.path, kind_label(&line.spec.kind));
        if line.spec.required.is_some() {
            text.push_str(&format!(" {}", "required".yellow()));
        }
        if let Some(fallback) = line.spec.fallback {
            text.push_str(&format!(", falls back to {}", fallback));
        }
        if verbose {
            if let Some(default) = line.spec.default {
                text.push_str(&format!(", default \"{}\"", default));
            }
        }
        print_text(&text)?;
    }

    if !schema.catalog.authors.is_empty() {
        let names: Vec<&str> = schema
            .catalog
            .authors
            .iter()
            .map(|author| author.name.as_str())
            .collect();
        print_text(&format!("  authors: {}", names.join(", ")))?;
    }
    if !schema.catalog.categories.is_empty() {
        print_text(&format!(
            "  categories: {}",
            schema.catalog.categories.join(", ")
        ))?;
    }

    Ok(())
}
