//! Field validation
//!
//! [`validate`] walks the whole schema and collects every problem into one
//! flat map keyed by dot path (`client.name`, `sections.2.images`). It never
//! stops at the first error; an empty map means the record can be rendered.

use crate::format::{classify_date, DateInput};
use crate::ident::resolve_id;
use crate::record::{is_blank, ContentSection, Record, SectionKind, Value};
use crate::render::binding_name;
use crate::schema::{Catalog, FieldKind, FieldSpec, SectionStyle, Shape, TemplateSchema};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Field path → error message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first message for a path wins
    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.entry(path.into()).or_insert_with(|| message.into());
    }

    /// Merge another map, prefixing its paths (used for multi-entry input)
    pub fn extend_prefixed(&mut self, prefix: &str, other: ValidationErrors) {
        for (path, message) in other.0 {
            self.insert(format!("{}.{}", prefix, path), message);
        }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(path, message)| (path.as_str(), message.as_str()))
    }

    pub fn paths(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (path, message)) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", path, message)?;
        }
        Ok(())
    }
}

/// Check a record against its schema
pub fn validate(schema: &TemplateSchema, record: &Record) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let checker = Checker {
        catalog: &schema.catalog,
        root: record,
    };
    checker.fields(&schema.fields, Some(record), "", &mut errors);

    if !errors.is_empty() {
        tracing::debug!(
            "Template '{}' rejected {} field(s): {:?}",
            schema.name,
            errors.len(),
            errors.paths()
        );
    }
    errors
}

/// Check several records; with more than one, paths are prefixed with the
/// entry index (`1.title`)
///
/// Object-shaped templates export one constant per entry, so an entry whose
/// constant name was already taken by an earlier one is rejected at its
/// identifier path (`1.id`). A fixed binding such as `works` therefore
/// admits a single entry.
pub fn validate_all(schema: &TemplateSchema, records: &[Record]) -> ValidationErrors {
    match records {
        [record] => validate(schema, record),
        many => {
            let mut errors = ValidationErrors::new();
            for (index, record) in many.iter().enumerate() {
                errors.extend_prefixed(&index.to_string(), validate(schema, record));
            }
            if schema.shape == Shape::Object {
                duplicate_bindings(schema, many, &mut errors);
            }
            errors
        }
    }
}

fn duplicate_bindings(schema: &TemplateSchema, records: &[Record], errors: &mut ValidationErrors) {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for (index, record) in records.iter().enumerate() {
        let name = binding_name(schema, record);
        match seen.get(&name) {
            Some(first) => {
                let path = match schema.identifier_field() {
                    Some((field, _)) => format!("{}.{}", index, field),
                    None => index.to_string(),
                };
                errors.insert(
                    path,
                    format!(
                        "Duplicate constant name '{}' (already used by entry {})",
                        name, first
                    ),
                );
            }
            None => {
                seen.insert(name, index);
            }
        }
    }
}

struct Checker<'a> {
    catalog: &'a Catalog,
    root: &'a Record,
}

impl Checker<'_> {
    fn fields(
        &self,
        specs: &[FieldSpec],
        record: Option<&Record>,
        prefix: &str,
        errors: &mut ValidationErrors,
    ) {
        for spec in specs {
            let path = join(prefix, spec.name);
            let value = record.and_then(|r| r.get(spec.name));
            self.field(spec, record, value, &path, errors);
        }
    }

    fn field(
        &self,
        spec: &FieldSpec,
        parent: Option<&Record>,
        value: Option<&Value>,
        path: &str,
        errors: &mut ValidationErrors,
    ) {
        let text = value.and_then(Value::as_text).unwrap_or("");
        let missing = value.map_or(true, Value::is_blank) && !self.has_fallback(spec);

        match &spec.kind {
            FieldKind::Identifier { source } => {
                let title = parent.map_or("", |record| record.text(source));
                if resolve_id(text, title).is_empty() {
                    self.require(spec, path, errors);
                }
            }
            FieldKind::Text | FieldKind::ReadingTime | FieldKind::Rich | FieldKind::List => {
                if missing {
                    self.require(spec, path, errors);
                }
            }
            FieldKind::Category => {
                if missing {
                    self.require(spec, path, errors);
                } else if !is_blank(text)
                    && !self.catalog.categories.is_empty()
                    && !self.catalog.has_category(text)
                {
                    errors.insert(path, format!("Unknown category '{}'", text.trim()));
                }
            }
            FieldKind::Date => {
                if missing {
                    self.require(spec, path, errors);
                } else if classify_date(text) == DateInput::InvalidIso {
                    errors.insert(path, format!("'{}' is not a valid date", text.trim()));
                }
            }
            FieldKind::Author => self.author(spec, value, path, errors),
            FieldKind::Record(children) => {
                let child = value.and_then(Value::as_record);
                self.fields(children, child, path, errors);
            }
            FieldKind::Sections(style) => {
                let sections = value.and_then(Value::as_sections).unwrap_or(&[]);
                if sections.is_empty() {
                    self.require(spec, path, errors);
                }
                for (index, section) in sections.iter().enumerate() {
                    section_errors(*style, section, &format!("{}.{}", path, index), errors);
                }
            }
        }
    }

    fn author(
        &self,
        spec: &FieldSpec,
        value: Option<&Value>,
        path: &str,
        errors: &mut ValidationErrors,
    ) {
        match value {
            Some(Value::Record(inline)) => {
                if is_blank(inline.text("name")) {
                    errors.insert(
                        join(path, "name"),
                        spec.required.unwrap_or("Author name is required"),
                    );
                }
            }
            Some(Value::Text(name)) if !is_blank(name) => {
                if !self.catalog.authors.is_empty() && self.catalog.author(name).is_none() {
                    errors.insert(path, format!("Unknown author '{}'", name.trim()));
                }
            }
            _ => self.require(spec, path, errors),
        }
    }

    fn has_fallback(&self, spec: &FieldSpec) -> bool {
        spec.fallback
            .and_then(|path| self.root.get_path(path))
            .is_some_and(|value| !value.is_blank())
    }

    fn require(&self, spec: &FieldSpec, path: &str, errors: &mut ValidationErrors) {
        if let Some(message) = spec.required {
            errors.insert(path, message);
        }
    }
}

fn section_errors(
    style: SectionStyle,
    section: &ContentSection,
    path: &str,
    errors: &mut ValidationErrors,
) {
    let kind = section.kind();
    if !style.allows(kind) {
        let allowed: Vec<&str> = style.allowed().iter().map(|k| k.as_str()).collect();
        errors.insert(
            join(path, "type"),
            format!(
                "Section type '{}' is not allowed here (expected one of: {})",
                kind,
                allowed.join(", ")
            ),
        );
        return;
    }

    match section {
        ContentSection::Text { body, .. } => {
            if is_blank(body) {
                let key = match style {
                    SectionStyle::Article => "description",
                    SectionStyle::Portfolio => "content",
                };
                errors.insert(join(path, key), "Text section content is required");
            }
        }
        ContentSection::Image { src, .. } | ContentSection::Video { src, .. } => {
            if is_blank(src) {
                let label = if kind == SectionKind::Image { "Image" } else { "Video" };
                errors.insert(join(path, "srcUrl"), format!("{} source URL is required", label));
            }
        }
        ContentSection::ImageGrid { images } => {
            if images.iter().all(|image| is_blank(image)) {
                errors.insert(join(path, "images"), "At least one image is required");
            }
        }
        ContentSection::GalleryWithText {
            description,
            images,
        } => {
            if is_blank(description) {
                errors.insert(join(path, "description"), "Gallery description is required");
            }
            if images.iter().all(|image| is_blank(image)) {
                errors.insert(join(path, "images"), "At least one image is required");
            }
        }
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}
