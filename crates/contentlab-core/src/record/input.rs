//! Reading records from TOML documents
//!
//! The schema decides how every key is read: scalars may be given as any
//! TOML scalar, string lists as arrays or comma-separated strings, and rich
//! fields as plain HTML, `{ html = "..." }` or `{ markdown = "..." }`.

use super::{ContentSection, Record, SectionKind, Value};
use crate::error::{ContentlabError, Result};
use crate::markdown;
use crate::schema::{FieldKind, FieldSpec, TemplateSchema};
use toml::{Table, Value as TomlValue};

/// Top-level key holding several entries in one document
const ENTRIES_KEY: &str = "entries";

/// Parse one document into one or more records
///
/// A document either is a single record, or holds `[[entries]]` tables.
pub fn parse_entries(schema: &TemplateSchema, input: &str) -> Result<Vec<Record>> {
    let table: Table = toml::from_str(input)?;

    let declares_entries = schema.field(ENTRIES_KEY).is_some();
    if !declares_entries {
        if let Some(entries) = table.get(ENTRIES_KEY) {
            let entries = entries
                .as_array()
                .ok_or_else(|| invalid(ENTRIES_KEY, "expected an array of tables"))?;
            if entries.is_empty() {
                return Err(ContentlabError::RecordEmpty);
            }
            return entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let entry = entry.as_table().ok_or_else(|| {
                        invalid(&format!("{}.{}", ENTRIES_KEY, index), "expected a table")
                    })?;
                    record_from_table(schema, entry)
                })
                .collect();
        }
    }

    Ok(vec![record_from_table(schema, &table)?])
}

/// Build a record from a TOML table, following the schema's field specs
pub fn record_from_table(schema: &TemplateSchema, table: &Table) -> Result<Record> {
    read_fields(&schema.fields, table, "")
}

fn read_fields(specs: &[FieldSpec], table: &Table, prefix: &str) -> Result<Record> {
    let mut record = Record::new();

    for (key, raw) in table {
        let path = join(prefix, key);
        match specs.iter().find(|spec| spec.name == key) {
            Some(spec) => record.insert(spec.name, read_value(spec, raw, &path)?),
            None => tracing::warn!("Ignoring unknown field '{}'", path),
        }
    }

    Ok(record)
}

fn read_value(spec: &FieldSpec, raw: &TomlValue, path: &str) -> Result<Value> {
    match &spec.kind {
        FieldKind::Rich => read_rich(raw, path).map(Value::Text),
        FieldKind::Text
        | FieldKind::Category
        | FieldKind::Identifier { .. }
        | FieldKind::Date
        | FieldKind::ReadingTime => scalar(raw, path).map(Value::Text),
        FieldKind::Author => match raw {
            TomlValue::Table(table) => {
                let mut author = Record::new();
                for name in ["name", "role", "image"] {
                    if let Some(value) = table.get(name) {
                        let text = scalar(value, &join(path, name))?;
                        author.insert(name, Value::Text(text));
                    }
                }
                Ok(Value::Record(author))
            }
            other => scalar(other, path).map(Value::Text),
        },
        FieldKind::Record(children) => {
            let table = raw
                .as_table()
                .ok_or_else(|| invalid(path, "expected a table"))?;
            read_fields(children, table, path).map(Value::Record)
        }
        FieldKind::List => string_list(raw, path).map(Value::List),
        FieldKind::Sections(_) => {
            let items = raw
                .as_array()
                .ok_or_else(|| invalid(path, "expected an array of tables"))?;
            items
                .iter()
                .enumerate()
                .map(|(index, item)| read_section(item, &format!("{}.{}", path, index)))
                .collect::<Result<Vec<_>>>()
                .map(Value::Sections)
        }
    }
}

fn read_section(raw: &TomlValue, path: &str) -> Result<ContentSection> {
    let table = raw
        .as_table()
        .ok_or_else(|| invalid(path, "expected a table"))?;

    let type_name = match table.get("type") {
        Some(value) => scalar(value, &join(path, "type"))?,
        None => return Err(invalid(&join(path, "type"), "missing section type")),
    };
    let kind = SectionKind::parse(type_name.trim()).ok_or_else(|| {
        invalid(
            &join(path, "type"),
            &format!("unknown section type '{}'", type_name),
        )
    })?;

    let section = match kind {
        SectionKind::Text => ContentSection::Text {
            title: section_text(table, path, &["title"])?,
            body: section_rich(table, path, &["body", "content", "description"])?,
        },
        SectionKind::Image => ContentSection::Image {
            title: section_text(table, path, &["title"])?,
            src: section_text(table, path, &["src", "srcUrl"])?,
            description: section_rich(table, path, &["description"])?,
        },
        SectionKind::Video => ContentSection::Video {
            title: section_text(table, path, &["title"])?,
            src: section_text(table, path, &["src", "srcUrl"])?,
            description: section_rich(table, path, &["description"])?,
        },
        SectionKind::ImageGrid => ContentSection::ImageGrid {
            images: section_images(table, path)?,
        },
        SectionKind::GalleryWithText => ContentSection::GalleryWithText {
            description: section_text(table, path, &["description"])?,
            images: section_images(table, path)?,
        },
    };

    Ok(section)
}

/// First present key among `names` (aliases), read as a scalar
fn section_text(table: &Table, path: &str, names: &[&str]) -> Result<String> {
    match names.iter().find_map(|name| table.get(*name).map(|value| (*name, value))) {
        Some((name, value)) => scalar(value, &join(path, name)),
        None => Ok(String::new()),
    }
}

fn section_rich(table: &Table, path: &str, names: &[&str]) -> Result<String> {
    match names.iter().find_map(|name| table.get(*name).map(|value| (*name, value))) {
        Some((name, value)) => read_rich(value, &join(path, name)),
        None => Ok(String::new()),
    }
}

fn section_images(table: &Table, path: &str) -> Result<Vec<String>> {
    match table.get("images") {
        Some(value) => string_list(value, &join(path, "images")),
        None => Ok(Vec::new()),
    }
}

/// Rich text: a plain HTML string, `{ html = "..." }` or `{ markdown = "..." }`
fn read_rich(raw: &TomlValue, path: &str) -> Result<String> {
    match raw {
        TomlValue::String(html) => Ok(html.clone()),
        TomlValue::Table(table) => match (table.get("html"), table.get("markdown")) {
            (Some(html), None) => scalar(html, &join(path, "html")),
            (None, Some(md)) => Ok(markdown::to_html(&scalar(md, &join(path, "markdown"))?)),
            _ => Err(invalid(path, "expected exactly one of 'html' or 'markdown'")),
        },
        _ => Err(invalid(path, "expected a string or an html/markdown table")),
    }
}

fn scalar(raw: &TomlValue, path: &str) -> Result<String> {
    match raw {
        TomlValue::String(s) => Ok(s.clone()),
        TomlValue::Integer(i) => Ok(i.to_string()),
        TomlValue::Float(f) => Ok(f.to_string()),
        TomlValue::Boolean(b) => Ok(b.to_string()),
        TomlValue::Datetime(dt) => Ok(dt.to_string()),
        TomlValue::Array(_) => Err(invalid(path, "expected a single value, found an array")),
        TomlValue::Table(_) => Err(invalid(path, "expected a single value, found a table")),
    }
}

fn string_list(raw: &TomlValue, path: &str) -> Result<Vec<String>> {
    match raw {
        TomlValue::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| scalar(item, &format!("{}.{}", path, index)))
            .collect(),
        TomlValue::String(joined) => Ok(split_list(joined)),
        _ => Err(invalid(path, "expected an array or a comma-separated string")),
    }
}

fn split_list(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Assign a raw command-line value at a dot path
///
/// List fields take a comma-separated string; records and section lists
/// cannot be assigned whole.
pub fn assign(schema: &TemplateSchema, record: &mut Record, path: &str, raw: &str) -> Result<()> {
    let spec = schema
        .field_at(path)
        .ok_or_else(|| ContentlabError::RecordPathNotFound(path.to_string()))?;

    let value = match &spec.kind {
        FieldKind::List => Value::List(split_list(raw)),
        FieldKind::Record(_) => {
            return Err(invalid(path, "is a record; assign its fields instead"));
        }
        FieldKind::Sections(_) => {
            return Err(invalid(path, "sections can only be given in the input document"));
        }
        _ => Value::text(raw),
    };

    tracing::debug!("Setting '{}' from command line", path);
    record.set_path(path, value)
}

/// Replace the schema's rich field with `html`
pub fn set_rich_content(schema: &TemplateSchema, record: &mut Record, html: String) -> Result<()> {
    let field = schema.rich_field().ok_or_else(|| {
        ContentlabError::Generic(format!(
            "template '{}' has no rich content field",
            schema.name
        ))
    })?;
    record.set_path(field, Value::Text(html))
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn invalid(field: &str, reason: &str) -> ContentlabError {
    ContentlabError::RecordInvalid {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
