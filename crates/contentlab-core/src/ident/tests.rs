use super::*;
use proptest::prelude::*;

#[test]
fn test_normalize_id_lowercases_and_hyphenates() {
    assert_eq!(normalize_id("How To Improve SEO"), "how-to-improve-seo");
    assert_eq!(normalize_id("  spaced   out  "), "spaced-out");
    assert_eq!(normalize_id("tabs\tand\nnewlines"), "tabs-and-newlines");
}

#[test]
fn test_normalize_id_strips_punctuation_but_keeps_hyphens() {
    assert_eq!(normalize_id("Q3: results, 2024!"), "q3-results-2024");
    assert_eq!(normalize_id("pre-existing-slug"), "pre-existing-slug");
    assert_eq!(normalize_id("café_crème"), "cafcrme");
}

#[test]
fn test_normalize_id_truncates() {
    let long = "a".repeat(80);
    assert_eq!(normalize_id(&long).len(), ID_MAX_LEN);
}

#[test]
fn test_normalize_id_empty_input() {
    assert_eq!(normalize_id(""), "");
    assert_eq!(normalize_id("   "), "");
    assert_eq!(normalize_id("???"), "");
}

#[test]
fn test_normalize_title_id_drops_source_hyphens() {
    assert_eq!(normalize_title_id("Hello World"), "hello-world");
    assert_eq!(normalize_title_id("Self-Serve Analytics"), "selfserve-analytics");
    assert_eq!(normalize_title_id("A - B"), "a-b");
}

#[test]
fn test_resolve_id_prefers_explicit() {
    assert_eq!(resolve_id("Custom Slug", "Hello World"), "custom-slug");
    assert_eq!(resolve_id("", "Hello World"), "hello-world");
    assert_eq!(resolve_id("   ", "Hello World"), "hello-world");
}

#[test]
fn test_resolve_id_ignores_explicit_that_strips_to_nothing() {
    assert_eq!(resolve_id("!!!", "Hello World"), "hello-world");
    assert_eq!(resolve_id("???", ""), "");
}

#[test]
fn test_variable_name_basic() {
    assert_eq!(variable_name("hello-world"), "hello_world");
    assert_eq!(variable_name("Hello-World"), "hello_world");
    assert_eq!(variable_name("with space"), "withspace");
}

#[test]
fn test_variable_name_truncates() {
    let id = "a-very-long-identifier-that-keeps-going-and-going";
    let name = variable_name(id);
    assert_eq!(name.len(), VARIABLE_MAX_LEN);
    assert_eq!(name, "a_very_long_identifier_that_ke");
}

#[test]
fn test_variable_name_leading_digit_is_prefixed() {
    assert_eq!(variable_name("404-page"), "_404_page");
    let digits = "1".repeat(40);
    let name = variable_name(&digits);
    assert!(name.starts_with('_'));
    assert_eq!(name.len(), VARIABLE_MAX_LEN);
}

#[test]
fn test_variable_name_reserved_words_are_prefixed() {
    for (title, expected) in [
        ("New", "_new"),
        ("Default", "_default"),
        ("Class", "_class"),
        ("Delete", "_delete"),
        ("Return", "_return"),
        ("Await", "_await"),
        ("Let", "_let"),
    ] {
        assert_eq!(variable_name(&resolve_id("", title)), expected, "{}", title);
    }
    assert_eq!(variable_name("new-post"), "new_post");
    assert_eq!(variable_name("classic"), "classic");
}

#[test]
fn test_variable_name_empty_falls_back() {
    assert_eq!(variable_name(""), FALLBACK_VARIABLE);
    assert_eq!(variable_name("___"), FALLBACK_VARIABLE);
}

#[test]
fn test_is_bare_identifier() {
    assert!(is_bare_identifier("timeToRead"));
    assert!(is_bare_identifier("_private"));
    assert!(!is_bare_identifier("2fast"));
    assert!(!is_bare_identifier("gallery-with-text"));
    assert!(!is_bare_identifier(""));
    assert!(!is_bare_identifier("default"));
    assert!(!is_bare_identifier("new"));
    assert!(is_bare_identifier("newPost"));
}

#[test]
fn test_title_scenario() {
    let id = resolve_id("", "Hello World");
    assert_eq!(id, "hello-world");
    assert_eq!(variable_name(&id), "hello_world");
}

proptest! {
    #[test]
    fn prop_normalize_id_is_idempotent(s in any::<String>()) {
        let once = normalize_id(&s);
        prop_assert_eq!(normalize_id(&once), once);
    }

    #[test]
    fn prop_title_id_is_stable_under_normalize_id(s in any::<String>()) {
        let once = normalize_title_id(&s);
        prop_assert_eq!(normalize_id(&once), once);
    }

    #[test]
    fn prop_normalize_id_alphabet_and_length(s in any::<String>()) {
        let id = normalize_id(&s);
        prop_assert!(id.chars().count() <= ID_MAX_LEN);
        prop_assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn prop_variable_name_is_identifier(s in any::<String>()) {
        let name = variable_name(&s);
        prop_assert!(name.len() <= VARIABLE_MAX_LEN);
        prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        prop_assert!(is_bare_identifier(&name));
        prop_assert!(!is_reserved_word(&name));
    }

    #[test]
    fn prop_reserved_titles_never_name_a_constant(
        index in 0..RESERVED_WORDS.len(),
        upper in any::<bool>(),
    ) {
        let word = RESERVED_WORDS[index];
        let title = if upper { word.to_uppercase() } else { word.to_string() };
        let name = variable_name(&resolve_id("", &title));
        prop_assert_eq!(name, format!("_{}", word));
    }
}
