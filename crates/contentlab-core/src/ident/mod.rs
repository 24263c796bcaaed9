//! Identifier normalization
//!
//! Every entry carries one identifier (`id` or `slug`) that is used twice in
//! the emitted literal:
//!
//! - as the key value, in hyphen form: `"hello-world"`
//! - as the exported constant name, in underscore form: `hello_world`
//!
//! All functions here are pure and idempotent.

use crate::config::consts::ident::{
    FALLBACK_VARIABLE, ID_MAX_LEN, RESERVED_WORDS, VARIABLE_MAX_LEN,
};

/// Normalize an identifier typed by the user
///
/// Lowercases, keeps `[a-z0-9-]` and whitespace, replaces every whitespace
/// run with one hyphen and truncates to [`ID_MAX_LEN`].
///
/// ```
/// use contentlab_core::ident::normalize_id;
///
/// assert_eq!(normalize_id("My Story!"), "my-story");
/// assert_eq!(normalize_id("already-normal"), "already-normal");
/// ```
pub fn normalize_id(raw: &str) -> String {
    slugify(raw, |c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Derive an identifier from a human title
///
/// Same as [`normalize_id`], except hyphens in the title are dropped before
/// spaces are turned into hyphens.
///
/// ```
/// use contentlab_core::ident::normalize_title_id;
///
/// assert_eq!(normalize_title_id("Hello World"), "hello-world");
/// assert_eq!(normalize_title_id("E-commerce Growth"), "ecommerce-growth");
/// ```
pub fn normalize_title_id(title: &str) -> String {
    slugify(title, |c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

/// Pick the identifier of an entry: the explicit one when it normalizes to
/// something, else the one derived from its title
pub fn resolve_id(explicit: &str, title: &str) -> String {
    let id = normalize_id(explicit);
    if id.is_empty() {
        normalize_title_id(title)
    } else {
        id
    }
}

/// Derive the exported constant name from an identifier
///
/// Lowercases, keeps `[a-z0-9-]`, turns hyphens into underscores and
/// truncates to [`VARIABLE_MAX_LEN`]. A name starting with a digit or equal
/// to a reserved word gets a leading underscore; a name that strips down to
/// nothing becomes [`FALLBACK_VARIABLE`].
///
/// ```
/// use contentlab_core::ident::variable_name;
///
/// assert_eq!(variable_name("hello-world"), "hello_world");
/// assert_eq!(variable_name("2024-recap"), "_2024_recap");
/// assert_eq!(variable_name("!!!"), "entry");
/// assert_eq!(variable_name("new"), "_new");
/// ```
pub fn variable_name(id: &str) -> String {
    let name: String = id
        .to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        .map(|c| if c == '-' { '_' } else { c })
        .take(VARIABLE_MAX_LEN)
        .collect();

    match name.chars().next() {
        None => FALLBACK_VARIABLE.to_string(),
        Some(first) if first.is_ascii_digit() || is_reserved_word(&name) => {
            let mut prefixed = String::with_capacity(VARIABLE_MAX_LEN);
            prefixed.push('_');
            prefixed.extend(name.chars().take(VARIABLE_MAX_LEN - 1));
            prefixed
        }
        Some(_) => name,
    }
}

/// Check whether a string is a bare JavaScript identifier we can emit unquoted
///
/// Reserved words are rejected.
pub fn is_bare_identifier(name: &str) -> bool {
    if is_reserved_word(name) {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Word that cannot name a binding in module code
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

fn slugify(raw: &str, keep: impl Fn(char) -> bool) -> String {
    let lowered = raw.to_lowercase();
    let mut slug = String::with_capacity(lowered.len().min(ID_MAX_LEN));
    let mut pending_space = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            pending_space = true;
        } else if keep(c) {
            if pending_space && !slug.is_empty() {
                slug.push('-');
            }
            pending_space = false;
            slug.push(c);
        }
    }

    slug.chars().take(ID_MAX_LEN).collect()
}

#[cfg(test)]
mod tests;
