//! Record model - the structured value collected for one entry
//!
//! A [`Record`] is an ordered list of named [`Value`]s. Values form a small
//! tagged tree: scalar text, string lists, nested records and content
//! sections. Nested fields are addressed with dot paths (`meta.year`).

mod input;

pub use input::{assign, parse_entries, record_from_table, set_rich_content};

use crate::error::{ContentlabError, Result};
use std::fmt;

/// A field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    List(Vec<String>),
    Record(Record),
    Sections(Vec<ContentSection>),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_sections(&self) -> Option<&[ContentSection]> {
        match self {
            Value::Sections(sections) => Some(sections),
            _ => None,
        }
    }

    /// Empty or whitespace-only text, an empty (or all-blank) list, an empty
    /// section list, or a record whose leaves are all blank
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Text(s) => is_blank(s),
            Value::List(items) => items.iter().all(|item| is_blank(item)),
            Value::Record(record) => record.iter().all(|(_, value)| value.is_blank()),
            Value::Sections(sections) => sections.is_empty(),
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Record(_) => "record",
            Value::Sections(_) => "sections",
        }
    }
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Ordered mapping of field names to values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: &str, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a top-level field, keeping its original position
    pub fn insert(&mut self, name: &str, value: Value) {
        match self.fields.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Resolve a dot path through nested records
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        match path.split_once('.') {
            None => self.get(path),
            Some((head, rest)) => self.get(head)?.as_record()?.get_path(rest),
        }
    }

    /// Text at `path`, or `""` when absent or not text
    pub fn text(&self, path: &str) -> &str {
        self.get_path(path).and_then(Value::as_text).unwrap_or("")
    }

    /// Write `value` at a dot path, creating intermediate records
    ///
    /// # Errors
    ///
    /// Returns `RECORD_INVALID` when a path segment is empty or an
    /// intermediate segment already holds a non-record value.
    pub fn set_path(&mut self, path: &str, value: Value) -> Result<()> {
        self.set_segments(path, path, value)
    }

    fn set_segments(&mut self, full_path: &str, path: &str, value: Value) -> Result<()> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };

        if head.is_empty() {
            return Err(ContentlabError::RecordInvalid {
                field: full_path.to_string(),
                reason: "empty path segment".to_string(),
            });
        }

        let Some(rest) = rest else {
            self.insert(head, value);
            return Ok(());
        };

        let index = match self.fields.iter().position(|(key, _)| key == head) {
            Some(index) => index,
            None => {
                self.fields
                    .push((head.to_string(), Value::Record(Record::new())));
                self.fields.len() - 1
            }
        };

        match &mut self.fields[index].1 {
            Value::Record(child) => child.set_segments(full_path, rest, value),
            other => Err(ContentlabError::RecordInvalid {
                field: full_path.to_string(),
                reason: format!("'{}' holds a {}, not a record", head, other.kind_name()),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Section discriminant, spelled as the `type` value in emitted literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Text,
    Image,
    Video,
    ImageGrid,
    GalleryWithText,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Text,
        SectionKind::Image,
        SectionKind::Video,
        SectionKind::ImageGrid,
        SectionKind::GalleryWithText,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Text => "text",
            SectionKind::Image => "image",
            SectionKind::Video => "video",
            SectionKind::ImageGrid => "image-grid",
            SectionKind::GalleryWithText => "gallery-with-text",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a section list; the payload depends on the `type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSection {
    Text {
        title: String,
        body: String,
    },
    Image {
        title: String,
        src: String,
        description: String,
    },
    Video {
        title: String,
        src: String,
        description: String,
    },
    ImageGrid {
        images: Vec<String>,
    },
    GalleryWithText {
        description: String,
        images: Vec<String>,
    },
}

impl ContentSection {
    pub fn kind(&self) -> SectionKind {
        match self {
            ContentSection::Text { .. } => SectionKind::Text,
            ContentSection::Image { .. } => SectionKind::Image,
            ContentSection::Video { .. } => SectionKind::Video,
            ContentSection::ImageGrid { .. } => SectionKind::ImageGrid,
            ContentSection::GalleryWithText { .. } => SectionKind::GalleryWithText,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn works_like() -> Record {
        Record::new()
            .with("slug", Value::text("acme"))
            .with(
                "meta",
                Value::Record(
                    Record::new()
                        .with("year", Value::text("2024"))
                        .with("services", Value::list(["SEO"])),
                ),
            )
    }

    #[test]
    fn test_get_path_nested() {
        let record = works_like();
        assert_eq!(record.text("meta.year"), "2024");
        assert_eq!(record.text("slug"), "acme");
        assert_eq!(record.text("meta.missing"), "");
        assert_eq!(record.text("slug.deeper"), "");
        assert_eq!(
            record.get_path("meta.services").and_then(Value::as_list),
            Some(&["SEO".to_string()][..])
        );
    }

    #[test]
    fn test_set_path_replaces_in_place() {
        let mut record = works_like();
        record.set_path("slug", Value::text("other")).unwrap();
        assert_eq!(record.text("slug"), "other");
        assert_eq!(record.iter().next().unwrap().0, "slug");
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_set_path_creates_intermediate_records() {
        let mut record = Record::new();
        record.set_path("about.year", Value::text("2023")).unwrap();
        record.set_path("about.title", Value::text("About")).unwrap();
        assert_eq!(record.text("about.year"), "2023");
        assert_eq!(record.text("about.title"), "About");
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_set_path_through_scalar_fails() {
        let mut record = works_like();
        let err = record
            .set_path("slug.inner", Value::text("x"))
            .unwrap_err();
        assert!(err.to_string().contains("holds a text, not a record"));
    }

    #[test]
    fn test_set_path_empty_segment_fails() {
        let mut record = Record::new();
        assert!(record.set_path("meta..year", Value::text("x")).is_err());
        assert!(record.set_path("", Value::text("x")).is_err());
    }

    #[test]
    fn test_blankness() {
        assert!(Value::text("  \t").is_blank());
        assert!(!Value::text("x").is_blank());
        assert!(Value::list(Vec::<String>::new()).is_blank());
        assert!(Value::list(["", " "]).is_blank());
        assert!(!Value::list(["a"]).is_blank());
        assert!(Value::Record(Record::new().with("name", Value::text(""))).is_blank());
        assert!(Value::Sections(vec![]).is_blank());
    }

    #[test]
    fn test_section_kind_round_names() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(SectionKind::parse("carousel"), None);
    }
}
