//! HTML → JSX normalization of rich content
//!
//! Purely textual rewriting: six regex passes run in a fixed order and each
//! pass assumes the output shape of the previous ones. Nothing is parsed or
//! executed, so malformed markup flows through unchanged where no pass
//! matches. The result is not guaranteed to be valid JSX.
//!
//! Known limitation: every empty paired element is self-closed, including
//! elements that are meant to stay empty (`<div></div>` becomes `<div />`).

use crate::config::consts::render::CLASS_ATTRIBUTE;
use crate::ident::is_bare_identifier;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `style="..."` / `style='...'` in attribute position
static STYLE_ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\s)style\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("Invalid style regex")
});

static CLASS_ATTR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s)class(\s*=)").expect("Invalid class regex"));

/// Hyphenated SVG/presentation attribute names
static HYPHENATED_ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\s)((?:stroke|clip|fill|font|marker|stop|underline)-[a-z][a-z-]*)(\s*=)")
        .expect("Invalid hyphenated attribute regex")
});

/// `<img ...>`, `<img .../>`, `<br>`, `<br/>`
static VOID_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(img|br)\b([^>]*?)\s*/?>").expect("Invalid void tag regex")
});

static NBSP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)&(?:nbsp|#160|#xa0);").expect("Invalid nbsp regex"));

/// `<tag attrs></tag>`; the closing name is compared in code
static EMPTY_PAIR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([A-Za-z][A-Za-z0-9-]*)([^<>]*)></([A-Za-z][A-Za-z0-9-]*)\s*>")
        .expect("Invalid empty element regex")
});

/// Normalizer settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxOptions {
    /// Name the `class` attribute is renamed to
    pub class_attribute: String,
}

impl Default for JsxOptions {
    fn default() -> Self {
        Self {
            class_attribute: CLASS_ATTRIBUTE.to_string(),
        }
    }
}

/// Normalize HTML with the default options
///
/// ```
/// use contentlab_core::jsx::normalize;
///
/// assert_eq!(
///     normalize(r#"<p style="margin-top: 4px">Hi&nbsp;there<br></p>"#),
///     "<p style={{ marginTop: '4px' }}>Hi there<br /></p>"
/// );
/// ```
pub fn normalize(html: &str) -> String {
    normalize_with(html, &JsxOptions::default())
}

/// Normalize HTML
pub fn normalize_with(html: &str, options: &JsxOptions) -> String {
    let text = convert_styles(html);
    let text = rename_class(&text, &options.class_attribute);
    let text = camel_case_attributes(&text);
    let text = close_void_tags(&text);
    let text = NBSP_REGEX.replace_all(&text, " ");
    collapse_empty_elements(&text)
}

fn convert_styles(html: &str) -> String {
    STYLE_ATTR_REGEX
        .replace_all(html, |caps: &Captures| {
            let space = &caps[1];
            let declarations = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            format!("{}style={}", space, style_object(declarations))
        })
        .into_owned()
}

/// `a-b: v; c: w` → `{{ aB: 'v', c: 'w' }}`
fn style_object(declarations: &str) -> String {
    let pairs: Vec<String> = declarations
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            // Custom properties keep their exact name
            let key = if name.starts_with("--") {
                name.to_string()
            } else {
                camel_case(name)
            };
            let key = if is_bare_identifier(&key) {
                key
            } else {
                format!("'{}'", escape_single(&key))
            };
            Some(format!("{}: '{}'", key, escape_single(value.trim())))
        })
        .collect();

    if pairs.is_empty() {
        "{{}}".to_string()
    } else {
        format!("{{{{ {} }}}}", pairs.join(", "))
    }
}

fn rename_class(html: &str, target: &str) -> String {
    CLASS_ATTR_REGEX
        .replace_all(html, |caps: &Captures| {
            format!("{}{}{}", &caps[1], target, &caps[2])
        })
        .into_owned()
}

fn camel_case_attributes(html: &str) -> String {
    HYPHENATED_ATTR_REGEX
        .replace_all(html, |caps: &Captures| {
            format!("{}{}{}", &caps[1], camel_case(&caps[2]), &caps[3])
        })
        .into_owned()
}

fn close_void_tags(html: &str) -> String {
    VOID_TAG_REGEX.replace_all(html, "<$1$2 />").into_owned()
}

fn collapse_empty_elements(html: &str) -> String {
    EMPTY_PAIR_REGEX
        .replace_all(html, |caps: &Captures| {
            if caps[1] == caps[3] {
                format!("<{}{} />", &caps[1], caps[2].trim_end())
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// `background-color` → `backgroundColor`, `-webkit-transition` → `WebkitTransition`
fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;

    for c in name.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

fn escape_single(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests;
