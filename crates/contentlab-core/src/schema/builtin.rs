//! Built-in templates: blog posts, customer stories and portfolio works

use super::{Binding, Catalog, FieldKind, FieldSpec, SectionStyle, Shape, TemplateSchema};
use crate::config::model::AuthorEntry;
use crate::error::{ContentlabError, Result};

const NAMES: [&str; 3] = ["blog", "customer-story", "works"];

/// Names accepted by [`builtin`]
pub fn builtin_names() -> &'static [&'static str] {
    &NAMES
}

/// Look up a built-in template by name
pub fn builtin(name: &str) -> Result<TemplateSchema> {
    match name {
        "blog" => Ok(blog()),
        "customer-story" => Ok(customer_story()),
        "works" => Ok(works()),
        other => Err(ContentlabError::TemplateNotFound(other.to_string())),
    }
}

fn placeholder_author() -> AuthorEntry {
    AuthorEntry::new("Author Name", "Author Role", "/path/to/author/image.avif")
}

fn categories(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Blog post, emitted as a one-element array into `data/blogs.js`
pub fn blog() -> TemplateSchema {
    TemplateSchema {
        name: "blog",
        description: "Blog post with author, rich description and content sections",
        file_hint: "data/blogs.js",
        binding: Binding::FromField("id"),
        shape: Shape::Array,
        fields: vec![
            FieldSpec::new("id", FieldKind::Identifier { source: "title" })
                .default_value("unique-blog-id"),
            FieldSpec::text("title")
                .required("Title is required")
                .default_value("Your Blog Title Here"),
            FieldSpec::text("thumbnail")
                .required("Thumbnail URL is required")
                .default_value("/path/to/thumbnail.avif"),
            FieldSpec::new("category", FieldKind::Category)
                .required("Category is required")
                .default_value("Your Category"),
            FieldSpec::new("date", FieldKind::Date)
                .required("Date is required")
                .default_value("DD MMM, YYYY"),
            FieldSpec::new("timeToRead", FieldKind::ReadingTime)
                .required("Reading time is required")
                .default_value("X min read"),
            FieldSpec::new("author", FieldKind::Author).required("Author is required"),
            FieldSpec::text("shortDescription")
                .required("Short description is required")
                .default_value("A brief summary of your blog post..."),
            FieldSpec::new("description", FieldKind::Rich).required("Description is required"),
            FieldSpec::new("content", FieldKind::Sections(SectionStyle::Article)),
        ],
        catalog: Catalog {
            authors: vec![
                AuthorEntry::new("John Doe", "Content Writer", "/images/john.jpg"),
                AuthorEntry::new("Jane Smith", "SEO Expert", "/images/jane.jpg"),
            ],
            categories: categories(&["Digital Advertising", "SEO", "Content Marketing"]),
            placeholder_author: placeholder_author(),
        },
    }
}

/// Customer story, emitted as an object into `data/customerStories.js`
pub fn customer_story() -> TemplateSchema {
    TemplateSchema {
        name: "customer-story",
        description: "Customer story with client details and a rich content body",
        file_hint: "data/customerStories.js",
        binding: Binding::FromField("id"),
        shape: Shape::Object,
        fields: vec![
            FieldSpec::new("id", FieldKind::Identifier { source: "title" })
                .default_value("unique-story-id"),
            FieldSpec::text("title")
                .required("Title is required")
                .default_value("Your Story Title Here"),
            FieldSpec::text("thumbnail")
                .required("Thumbnail URL is required")
                .default_value("/path/to/thumbnail.avif"),
            FieldSpec::new("category", FieldKind::Category)
                .required("Category is required")
                .default_value("Your Category"),
            FieldSpec::new("date", FieldKind::Date)
                .required("Date is required")
                .default_value("DD MMM, YYYY"),
            FieldSpec::new("timeToRead", FieldKind::ReadingTime)
                .required("Reading time is required")
                .default_value("X min read"),
            FieldSpec::new("author", FieldKind::Author).required("Author is required"),
            FieldSpec::record(
                "client",
                vec![
                    FieldSpec::text("name")
                        .required("Client name is required")
                        .default_value("Client Name"),
                    FieldSpec::text("industry")
                        .required("Client industry is required")
                        .default_value("Client Industry"),
                    FieldSpec::text("logo")
                        .required("Client logo URL is required")
                        .default_value("/path/to/client/logo.avif"),
                ],
            ),
            FieldSpec::text("shortDescription").required("Short description is required"),
            FieldSpec::text("description"),
            FieldSpec::new("content", FieldKind::Rich).required("Content is required"),
        ],
        catalog: Catalog {
            authors: vec![
                AuthorEntry::new(
                    "John Smith",
                    "Head of Growth at XYZ Tech",
                    "/images/customer-stories/author/john-smith.png",
                ),
                AuthorEntry::new(
                    "Jane Doe",
                    "Marketing Director at ABC Corp",
                    "/images/customer-stories/author/jane-doe.png",
                ),
            ],
            categories: categories(&["Saas", "E-commerce", "Technology", "Marketing"]),
            placeholder_author: placeholder_author(),
        },
    }
}

/// Portfolio entry, emitted as the `works` object into `data/works.js`
pub fn works() -> TemplateSchema {
    TemplateSchema {
        name: "works",
        description: "Portfolio entry with project meta, about block and gallery sections",
        file_hint: "data/works.js",
        binding: Binding::Fixed("works"),
        shape: Shape::Object,
        fields: vec![
            FieldSpec::new("slug", FieldKind::Identifier { source: "title" })
                .required("Slug is required"),
            FieldSpec::text("thumbnail").required("Thumbnail is required"),
            FieldSpec::text("title").required("Title is required"),
            FieldSpec::record(
                "meta",
                vec![
                    FieldSpec::text("year").required("Meta year is required"),
                    FieldSpec::text("industry").required("Meta industry is required"),
                    FieldSpec::text("client").required("Meta client is required"),
                    FieldSpec::new("services", FieldKind::List)
                        .required("At least one service is required"),
                ],
            ),
            FieldSpec::record(
                "about",
                vec![
                    FieldSpec::text("title").required("About title is required"),
                    FieldSpec::text("description").required("About description is required"),
                    FieldSpec::text("year").fallback("meta.year"),
                    FieldSpec::text("industry").fallback("meta.industry"),
                    FieldSpec::text("image").required("About image is required"),
                ],
            ),
            FieldSpec::new("sections", FieldKind::Sections(SectionStyle::Portfolio)),
        ],
        catalog: Catalog {
            authors: Vec::new(),
            categories: Vec::new(),
            placeholder_author: placeholder_author(),
        },
    }
}
