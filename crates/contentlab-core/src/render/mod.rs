//! Literal rendering
//!
//! A record is first lowered into a small [`Node`] tree following the schema
//! (defaults, fallbacks, catalog lookups and display formatting happen here),
//! then the tree is written out with a fixed indentation. Field order always
//! comes from the schema, so output is byte-identical for equal input.
//!
//! ```text
//! // data/customerStories.js
//! export const hello_world = {
//!   id: "hello-world",
//!   title: "Hello World",
//!   ...
//!   content: (
//!     <div>
//!       <p>First paragraph</p>
//!       <p>Second paragraph</p>
//!     </div>
//!   )
//! };
//! ```

use crate::config::consts::render::{DEFAULT_INDENT, RICH_CONTAINER};
use crate::config::model::{AuthorEntry, Config};
use crate::error::{ContentlabError, Result};
use crate::format::{display_date, reading_time};
use crate::ident::{is_bare_identifier, normalize_id, resolve_id, variable_name};
use crate::jsx::{normalize_with, JsxOptions};
use crate::record::{is_blank, ContentSection, Record, Value};
use crate::schema::{Binding, Catalog, FieldKind, FieldSpec, SectionStyle, Shape, TemplateSchema};
use crate::validate::validate_all;

/// Rendering settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit the `// data/<file>.js` line first
    pub header: bool,
    /// Spaces per nesting level
    pub indent: usize,
    pub jsx: JsxOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            header: true,
            indent: DEFAULT_INDENT,
            jsx: JsxOptions::default(),
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            header: config.output.header,
            indent: config.output.indent,
            jsx: JsxOptions {
                class_attribute: config.jsx.class_attribute.clone(),
            },
        }
    }
}

/// Validate every record, then render them
///
/// With more than one record, error paths are prefixed with the entry index
/// (`1.title`).
///
/// # Errors
///
/// `RECORD_EMPTY` for an empty slice, `VALIDATION_FAILED` carrying every
/// rejected field otherwise.
pub fn generate(
    schema: &TemplateSchema,
    records: &[Record],
    options: &RenderOptions,
) -> Result<String> {
    if records.is_empty() {
        return Err(ContentlabError::RecordEmpty);
    }

    let errors = validate_all(schema, records);
    if !errors.is_empty() {
        return Err(ContentlabError::ValidationFailed(errors));
    }
    Ok(render_all(schema, records, options))
}

/// Render one record without validating it
pub fn render(schema: &TemplateSchema, record: &Record, options: &RenderOptions) -> String {
    render_all(schema, std::slice::from_ref(record), options)
}

/// Render several records without validating them
///
/// Array-shaped templates get a single export holding every entry, named
/// after the first one; object-shaped templates get one export per entry.
pub fn render_all(schema: &TemplateSchema, records: &[Record], options: &RenderOptions) -> String {
    tracing::debug!(
        "Rendering {} record(s) with template '{}'",
        records.len(),
        schema.name
    );

    let writer = Writer {
        indent: options.indent,
        jsx: &options.jsx,
    };
    let mut out = String::new();
    if options.header {
        out.push_str(&format!("// {}\n", schema.file_hint));
    }

    match schema.shape {
        Shape::Array => {
            let name = records
                .first()
                .map_or_else(|| binding_name(schema, &Record::new()), |r| binding_name(schema, r));
            let items = records.iter().map(|record| lower(schema, record)).collect();
            out.push_str(&format!(
                "export const {} = {};\n",
                name,
                writer.node(&Node::Array(items), 0)
            ));
        }
        Shape::Object => {
            for (index, record) in records.iter().enumerate() {
                if index > 0 {
                    out.push('\n');
                }
                out.push_str(&format!(
                    "export const {} = {};\n",
                    binding_name(schema, record),
                    writer.node(&lower(schema, record), 0)
                ));
            }
        }
    }

    out
}

/// Name of the exported constant for `record`
pub fn binding_name(schema: &TemplateSchema, record: &Record) -> String {
    match schema.binding {
        Binding::Fixed(name) => name.to_string(),
        Binding::FromField(field) => match schema.field(field) {
            Some(spec) => variable_name(&identifier_value(spec, Some(record))),
            None => variable_name(&normalize_id(record.text(field))),
        },
    }
}

/// Emitted tree
#[derive(Debug, Clone, PartialEq)]
enum Node {
    Str(String),
    /// Markup, written unquoted inside the container element
    Rich(String),
    List(Vec<String>),
    Object(Vec<(&'static str, Node)>),
    Array(Vec<Node>),
}

fn lower(schema: &TemplateSchema, record: &Record) -> Node {
    let lowering = Lowering {
        catalog: &schema.catalog,
        root: record,
    };
    lowering.object(&schema.fields, Some(record))
}

struct Lowering<'a> {
    catalog: &'a Catalog,
    root: &'a Record,
}

impl Lowering<'_> {
    fn object(&self, specs: &[FieldSpec], record: Option<&Record>) -> Node {
        Node::Object(
            specs
                .iter()
                .map(|spec| (spec.name, self.field(spec, record)))
                .collect(),
        )
    }

    fn field(&self, spec: &FieldSpec, record: Option<&Record>) -> Node {
        let value = record.and_then(|r| r.get(spec.name));
        let text = value.and_then(Value::as_text).unwrap_or("");

        match &spec.kind {
            FieldKind::Identifier { .. } => Node::Str(identifier_value(spec, record)),
            FieldKind::Text | FieldKind::Category => Node::Str(self.scalar(spec, text, str::to_string)),
            FieldKind::Date => Node::Str(self.scalar(spec, text, display_date)),
            FieldKind::ReadingTime => Node::Str(self.scalar(spec, text, reading_time)),
            FieldKind::Author => self.author(value),
            FieldKind::Record(children) => self.object(children, value.and_then(Value::as_record)),
            FieldKind::List => Node::List(
                value
                    .and_then(Value::as_list)
                    .unwrap_or(&[])
                    .iter()
                    .filter(|item| !is_blank(item))
                    .cloned()
                    .collect(),
            ),
            FieldKind::Sections(style) => Node::Array(
                value
                    .and_then(Value::as_sections)
                    .unwrap_or(&[])
                    .iter()
                    .map(|section| section_node(*style, section))
                    .collect(),
            ),
            FieldKind::Rich => Node::Rich(text.to_string()),
        }
    }

    /// The value itself, else the fallback field, else the placeholder
    fn scalar(&self, spec: &FieldSpec, text: &str, display: impl Fn(&str) -> String) -> String {
        if !is_blank(text) {
            return display(text);
        }
        let fallback = spec
            .fallback
            .map(|path| self.root.text(path))
            .filter(|fallback| !is_blank(fallback));
        match fallback {
            Some(fallback) => display(fallback),
            None => spec.default.unwrap_or("").to_string(),
        }
    }

    fn author(&self, value: Option<&Value>) -> Node {
        let placeholder = &self.catalog.placeholder_author;
        let entry = match value {
            Some(Value::Record(inline)) => {
                let pick = |key: &str, default: &str| {
                    let text = inline.text(key);
                    let chosen = if is_blank(text) { default } else { text };
                    chosen.to_string()
                };
                AuthorEntry {
                    name: pick("name", &placeholder.name),
                    role: pick("role", &placeholder.role),
                    image: pick("image", &placeholder.image),
                }
            }
            Some(Value::Text(name)) if !is_blank(name) => match self.catalog.author(name) {
                Some(entry) => entry.clone(),
                None => {
                    tracing::debug!("Author '{}' not in catalog, using placeholder", name.trim());
                    placeholder.clone()
                }
            },
            _ => placeholder.clone(),
        };

        Node::Object(vec![
            ("name", Node::Str(entry.name)),
            ("role", Node::Str(entry.role)),
            ("image", Node::Str(entry.image)),
        ])
    }
}

/// Identifier as emitted: explicit or title-derived, else the placeholder
fn identifier_value(spec: &FieldSpec, record: Option<&Record>) -> String {
    let (explicit, title) = match (&spec.kind, record) {
        (FieldKind::Identifier { source }, Some(record)) => {
            (record.text(spec.name), record.text(source))
        }
        (_, Some(record)) => (record.text(spec.name), ""),
        (_, None) => ("", ""),
    };
    let id = resolve_id(explicit, title);
    if id.is_empty() {
        spec.default.unwrap_or("").to_string()
    } else {
        id
    }
}

fn section_node(style: SectionStyle, section: &ContentSection) -> Node {
    let kind = Node::Str(section.kind().as_str().to_string());
    let fields = match section {
        ContentSection::Text { title, body } => match style {
            SectionStyle::Article => vec![
                ("title", Node::Str(title.clone())),
                ("type", kind),
                ("srcUrl", Node::Str(String::new())),
                ("description", Node::Rich(body.clone())),
            ],
            SectionStyle::Portfolio => vec![("type", kind), ("content", Node::Str(body.clone()))],
        },
        ContentSection::Image {
            title,
            src,
            description,
        }
        | ContentSection::Video {
            title,
            src,
            description,
        } => vec![
            ("title", Node::Str(title.clone())),
            ("type", kind),
            ("srcUrl", Node::Str(src.clone())),
            ("description", Node::Rich(description.clone())),
        ],
        ContentSection::ImageGrid { images } => {
            vec![("type", kind), ("images", Node::List(non_blank(images)))]
        }
        ContentSection::GalleryWithText {
            description,
            images,
        } => vec![
            ("type", kind),
            ("description", Node::Str(description.clone())),
            ("images", Node::List(non_blank(images))),
        ],
    };
    Node::Object(fields)
}

fn non_blank(items: &[String]) -> Vec<String> {
    items.iter().filter(|item| !is_blank(item)).cloned().collect()
}

struct Writer<'a> {
    indent: usize,
    jsx: &'a JsxOptions,
}

impl Writer<'_> {
    fn pad(&self, level: usize) -> String {
        " ".repeat(self.indent * level)
    }

    /// Text of `node`, whose first line continues a line at `level`
    fn node(&self, node: &Node, level: usize) -> String {
        match node {
            Node::Str(s) => quote(s),
            Node::Rich(html) => self.rich(html, level),
            Node::List(items) => {
                let quoted: Vec<String> = items.iter().map(|item| quote(item)).collect();
                format!("[{}]", quoted.join(", "))
            }
            Node::Object(fields) if fields.is_empty() => "{}".to_string(),
            Node::Object(fields) => {
                let inner = self.pad(level + 1);
                let lines: Vec<String> = fields
                    .iter()
                    .map(|(key, value)| {
                        format!("{}{}: {}", inner, key_name(key), self.node(value, level + 1))
                    })
                    .collect();
                format!("{{\n{}\n{}}}", lines.join(",\n"), self.pad(level))
            }
            Node::Array(items) if items.is_empty() => "[]".to_string(),
            Node::Array(items) => {
                let inner = self.pad(level + 1);
                let lines: Vec<String> = items
                    .iter()
                    .map(|item| format!("{}{}", inner, self.node(item, level + 1)))
                    .collect();
                format!("[\n{}\n{}]", lines.join(",\n"), self.pad(level))
            }
        }
    }

    /// `<div>..</div>` inline for a single line, a parenthesized block otherwise
    fn rich(&self, html: &str, level: usize) -> String {
        let normalized = normalize_with(html.trim(), self.jsx);
        let lines: Vec<&str> = normalized
            .lines()
            .map(str::trim_end)
            .filter(|line| !is_blank(line))
            .collect();

        match lines.as_slice() {
            [] => format!("<{0}></{0}>", RICH_CONTAINER),
            [line] => format!("<{0}>{1}</{0}>", RICH_CONTAINER, line.trim_start()),
            _ => {
                let body_pad = self.pad(level + 2);
                let body: Vec<String> = lines
                    .iter()
                    .map(|line| format!("{}{}", body_pad, line))
                    .collect();
                format!(
                    "(\n{open_pad}<{tag}>\n{body}\n{open_pad}</{tag}>\n{close_pad})",
                    open_pad = self.pad(level + 1),
                    tag = RICH_CONTAINER,
                    body = body.join("\n"),
                    close_pad = self.pad(level),
                )
            }
        }
    }
}

fn key_name(key: &str) -> String {
    if is_bare_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

/// Double-quoted string literal
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
