//! End-to-end: record document → records → validation → literal

use contentlab_core::config::Config;
use contentlab_core::record::{assign, parse_entries, Record, Value};
use contentlab_core::render::{generate, render, RenderOptions};
use contentlab_core::schema::{blog, builtin, customer_story, works};
use contentlab_core::validate::validate;
use contentlab_core::ContentlabError;
use contentlab_testkit::fixtures;
use contentlab_testkit::{temp_dir_in_workspace, write_file};

fn options() -> RenderOptions {
    RenderOptions {
        header: false,
        ..RenderOptions::default()
    }
}

#[test]
fn test_every_fixture_renders() {
    for (name, document) in [
        ("blog", fixtures::BLOG),
        ("customer-story", fixtures::CUSTOMER_STORY),
        ("works", fixtures::WORKS),
    ] {
        let schema = builtin(name).unwrap();
        let records = parse_entries(&schema, document).unwrap();
        let literal = generate(&schema, &records, &RenderOptions::default())
            .unwrap_or_else(|e| panic!("{} fixture rejected: {}", name, e));
        assert!(literal.starts_with(&format!("// {}\nexport const ", schema.file_hint)));
        assert!(literal.ends_with(";\n"));
        assert!(!literal.contains("undefined"));
    }
}

#[test]
fn test_title_derives_id_and_constant() {
    let record = Record::new()
        .with("id", Value::text(""))
        .with("title", Value::text("Hello World"));
    let literal = render(&customer_story(), &record, &options());
    assert!(literal.starts_with("export const hello_world = {\n  id: \"hello-world\",\n"));
}

#[test]
fn test_empty_thumbnail_gets_placeholder() {
    let mut records = parse_entries(&blog(), fixtures::BLOG).unwrap();
    assign(&blog(), &mut records[0], "thumbnail", "").unwrap();

    let literal = render(&blog(), &records[0], &options());
    assert!(literal.contains("thumbnail: \"/path/to/thumbnail.avif\""));
    assert!(!literal.contains("thumbnail: \"\""));

    let errors = validate(&blog(), &records[0]);
    assert_eq!(errors.paths(), vec!["thumbnail"]);
}

#[test]
fn test_markdown_description_becomes_jsx_block() {
    let records = parse_entries(&blog(), fixtures::BLOG).unwrap();
    let literal = generate(&blog(), &records, &options()).unwrap();
    assert!(literal.contains(
        "    description: (\n      <div>\n        <p>Search engines reward <strong>fast</strong> pages.</p>\n        <p>Start with the basics.</p>\n      </div>\n    ),\n"
    ));
    assert!(literal.contains("        srcUrl: \"/images/blog/lighthouse.png\",\n"));
}

#[test]
fn test_entries_render_into_one_array() {
    let mut records = parse_entries(&blog(), fixtures::BLOG_ENTRIES).unwrap();
    assert_eq!(records.len(), 2);

    let err = generate(&blog(), &records, &options()).unwrap_err();
    match err {
        ContentlabError::ValidationFailed(errors) => {
            assert_eq!(errors.paths(), vec!["1.thumbnail"]);
        }
        other => panic!("unexpected error: {}", other),
    }

    assign(&blog(), &mut records[1], "thumbnail", "/images/blog/second.avif").unwrap();
    let literal = generate(&blog(), &records, &options()).unwrap();
    assert!(literal.starts_with("export const first_post = [\n  {\n    id: \"first-post\","));
    assert!(literal.contains("  },\n  {\n    id: \"second-post\","));
}

#[test]
fn test_works_fixture_fallback_and_services() {
    let records = parse_entries(&works(), fixtures::WORKS).unwrap();
    assert_eq!(records[0].text("meta.year"), "2023");
    assert_eq!(records[0].text("about.year"), "");

    let literal = generate(&works(), &records, &options()).unwrap();
    assert!(literal.contains(
        "  about: {\n    title: \"A new face for Acme\",\n    description: \"Full visual identity refresh.\",\n    year: \"2023\",\n    industry: \"Retail\","
    ));
}

#[test]
fn test_invalid_works_fixture() {
    let records = parse_entries(&works(), fixtures::WORKS_INVALID).unwrap();
    let errors = validate(&works(), &records[0]);
    assert_eq!(errors.paths(), vec!["meta.services", "sections.0.images"]);
}

#[test]
fn test_config_file_drives_catalog_and_layout() {
    let temp = temp_dir_in_workspace();
    let path = write_file(
        temp.path(),
        "contentlab.toml",
        r#"
[output]
indent = 4

[templates.blog]
categories = ["Growth"]
"#,
    );
    let config = Config::from_file(&path).unwrap();
    let schema = blog().with_config(config.template("blog"));

    let mut records = parse_entries(&schema, fixtures::BLOG).unwrap();
    assert!(validate(&schema, &records[0]).contains("category"));

    assign(&schema, &mut records[0], "category", "Growth").unwrap();
    let literal = generate(&schema, &records, &RenderOptions::from(&config)).unwrap();
    assert!(literal.starts_with("// data/blogs.js\nexport const how_to_improve_website_seo = [\n    {\n        id: "));
}
