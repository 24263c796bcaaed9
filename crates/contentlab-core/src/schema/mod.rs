//! Template schemas
//!
//! A [`TemplateSchema`] describes one generator: which fields an entry has,
//! how each one is emitted, which ones are required, the placeholder used
//! when a field is left empty, and the catalog of selectable authors and
//! categories. Validation and rendering are driven entirely by the schema,
//! so the three built-in templates share one serializer.

mod builtin;

pub use builtin::{blog, builtin, builtin_names, customer_story, works};

use crate::config::model::{AuthorEntry, TemplateConfig};
use crate::record::SectionKind;
use serde::Serialize;

/// Top-level form of the emitted literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// `export const name = { ... };`
    Object,
    /// `export const name = [{ ... }];`
    Array,
}

/// How the exported constant is named
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Derived from the identifier field with this name
    FromField(&'static str),
    /// Always the same name
    Fixed(&'static str),
}

/// Layout of section entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStyle {
    /// `{ title, type, srcUrl, description: (<div>...</div>) }`
    Article,
    /// `{ type, content }` / `{ type, images }` / `{ type, description, images }`
    Portfolio,
}

impl SectionStyle {
    pub fn allowed(self) -> &'static [SectionKind] {
        match self {
            SectionStyle::Article => &[SectionKind::Text, SectionKind::Image, SectionKind::Video],
            SectionStyle::Portfolio => &[
                SectionKind::Text,
                SectionKind::ImageGrid,
                SectionKind::GalleryWithText,
            ],
        }
    }

    pub fn allows(self, kind: SectionKind) -> bool {
        self.allowed().contains(&kind)
    }
}

/// How a field is read, checked and emitted
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Quoted string
    Text,
    /// Quoted string that must be one of the catalog's categories
    Category,
    /// Slug; derived from the `source` field when left empty
    Identifier { source: &'static str },
    /// ISO dates are emitted as `DD Mon YYYY`
    Date,
    /// A bare number is emitted as `N min read`
    ReadingTime,
    /// Catalog name or inline `{ name, role, image }`
    Author,
    /// Nested record
    Record(Vec<FieldSpec>),
    /// Array of quoted strings
    List,
    /// Array of section objects
    Sections(SectionStyle),
    /// Unquoted markup wrapped in a container element
    Rich,
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Category => "category",
            FieldKind::Identifier { .. } => "identifier",
            FieldKind::Date => "date",
            FieldKind::ReadingTime => "reading-time",
            FieldKind::Author => "author",
            FieldKind::Record(_) => "record",
            FieldKind::List => "list",
            FieldKind::Sections(_) => "sections",
            FieldKind::Rich => "rich",
        }
    }

    /// Kinds stored as [`crate::record::Value::Text`]
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            FieldKind::Text
                | FieldKind::Category
                | FieldKind::Identifier { .. }
                | FieldKind::Date
                | FieldKind::ReadingTime
                | FieldKind::Rich
        )
    }
}

/// One declared field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Error message reported when the field is blank
    pub required: Option<&'static str>,
    /// Placeholder emitted when the field is blank
    pub default: Option<&'static str>,
    /// Root-relative dot path whose value is used when the field is blank
    pub fallback: Option<&'static str>,
}

impl FieldSpec {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: None,
            default: None,
            fallback: None,
        }
    }

    pub fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn record(name: &'static str, children: Vec<FieldSpec>) -> Self {
        Self::new(name, FieldKind::Record(children))
    }

    pub fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    pub fn default_value(mut self, placeholder: &'static str) -> Self {
        self.default = Some(placeholder);
        self
    }

    pub fn fallback(mut self, path: &'static str) -> Self {
        self.fallback = Some(path);
        self
    }

    pub fn children(&self) -> &[FieldSpec] {
        match &self.kind {
            FieldKind::Record(children) => children,
            _ => &[],
        }
    }
}

/// Selectable authors and categories of a template
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub authors: Vec<AuthorEntry>,
    pub categories: Vec<String>,
    /// Emitted when no author (or an unknown one) is selected
    pub placeholder_author: AuthorEntry,
}

impl Catalog {
    pub fn author(&self, name: &str) -> Option<&AuthorEntry> {
        let name = name.trim();
        self.authors.iter().find(|author| author.name == name)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category.trim())
    }
}

/// Full description of one generator
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSchema {
    pub name: &'static str,
    pub description: &'static str,
    /// Data module the literal is pasted into
    pub file_hint: &'static str,
    pub binding: Binding,
    pub shape: Shape,
    pub fields: Vec<FieldSpec>,
    pub catalog: Catalog,
}

impl TemplateSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Look up a field by dot path through nested records
    pub fn field_at(&self, path: &str) -> Option<&FieldSpec> {
        let mut specs = self.fields.as_slice();
        let mut segments = path.split('.').peekable();

        while let Some(segment) = segments.next() {
            let spec = specs.iter().find(|spec| spec.name == segment)?;
            if segments.peek().is_none() {
                return Some(spec);
            }
            specs = spec.children();
        }

        None
    }

    /// Name of the top-level rich content field, if any
    pub fn rich_field(&self) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|spec| spec.kind == FieldKind::Rich)
            .map(|spec| spec.name)
    }

    /// Name of the top-level identifier field, if any
    pub fn identifier_field(&self) -> Option<(&'static str, &'static str)> {
        self.fields.iter().find_map(|spec| match spec.kind {
            FieldKind::Identifier { source } => Some((spec.name, source)),
            _ => None,
        })
    }

    /// Replace the catalog with the configured one
    pub fn with_config(mut self, config: Option<&TemplateConfig>) -> Self {
        if let Some(config) = config {
            if let Some(authors) = &config.authors {
                self.catalog.authors = authors.clone();
            }
            if let Some(categories) = &config.categories {
                self.catalog.categories = categories.clone();
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_at_nested() {
        let schema = works();
        assert_eq!(schema.field_at("meta.services").unwrap().kind, FieldKind::List);
        assert_eq!(schema.field_at("about.year").unwrap().fallback, Some("meta.year"));
        assert!(schema.field_at("meta").unwrap().children().len() == 4);
        assert!(schema.field_at("meta.nope").is_none());
        assert!(schema.field_at("slug.deeper").is_none());
    }

    #[test]
    fn test_rich_and_identifier_fields() {
        assert_eq!(blog().rich_field(), Some("description"));
        assert_eq!(customer_story().rich_field(), Some("content"));
        assert_eq!(works().rich_field(), None);
        assert_eq!(works().identifier_field(), Some(("slug", "title")));
        assert_eq!(blog().identifier_field(), Some(("id", "title")));
    }

    #[test]
    fn test_with_config_replaces_catalog() {
        let config = TemplateConfig {
            authors: Some(vec![AuthorEntry::new("Ada", "CTO", "/ada.png")]),
            categories: None,
        };
        let schema = blog().with_config(Some(&config));
        assert_eq!(schema.catalog.authors.len(), 1);
        assert!(schema.catalog.author("Ada").is_some());
        assert!(schema.catalog.has_category("SEO"));
    }

    #[test]
    fn test_section_styles() {
        assert!(SectionStyle::Article.allows(SectionKind::Video));
        assert!(!SectionStyle::Article.allows(SectionKind::ImageGrid));
        assert!(SectionStyle::Portfolio.allows(SectionKind::GalleryWithText));
        assert!(!SectionStyle::Portfolio.allows(SectionKind::Image));
    }
}
