use crate::config::consts::{files::CONFIG_FILE_NAME, render};
use crate::error::{ContentlabError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// contentlab.toml schema - every section is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub jsx: JsxConfig,
    /// Per-template catalog overrides, keyed by template name
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit the `// data/<file>.js` comment line
    #[serde(default = "default_header")]
    pub header: bool,
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            header: true,
            indent: render::DEFAULT_INDENT,
        }
    }
}

fn default_header() -> bool {
    true
}

fn default_indent() -> usize {
    render::DEFAULT_INDENT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxConfig {
    #[serde(default = "default_class_attribute")]
    pub class_attribute: String,
}

impl Default for JsxConfig {
    fn default() -> Self {
        Self {
            class_attribute: render::CLASS_ATTRIBUTE.to_string(),
        }
    }
}

fn default_class_attribute() -> String {
    render::CLASS_ATTRIBUTE.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Replaces the built-in author catalog when present
    #[serde(default)]
    pub authors: Option<Vec<AuthorEntry>>,
    /// Replaces the built-in category list when present
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

/// Author selectable by name from a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorEntry {
    pub name: String,
    pub role: String,
    pub image: String,
}

impl AuthorEntry {
    pub fn new(name: &str, role: &str, image: &str) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            image: image.to_string(),
        }
    }
}

impl Config {
    /// Read and check a contentlab.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ContentlabError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| ContentlabError::ConfigParseError(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Find contentlab.toml in `start` or any of its ancestors
    pub fn find(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load the explicit config, else the discovered one, else defaults
    pub fn load(explicit: Option<&Path>, start: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::find(start) {
            Some(path) => {
                tracing::debug!("Using config {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Catalog overrides for one template
    pub fn template(&self, name: &str) -> Option<&TemplateConfig> {
        self.templates.get(name)
    }

    fn check(&self) -> Result<()> {
        if self.output.indent == 0 || self.output.indent > 8 {
            return Err(ContentlabError::ConfigInvalidValue {
                field: "output.indent".to_string(),
                reason: format!("expected 1..=8, got {}", self.output.indent),
            });
        }

        let attr = &self.jsx.class_attribute;
        let valid_attr = !attr.is_empty()
            && attr
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ':');
        if !valid_attr {
            return Err(ContentlabError::ConfigInvalidValue {
                field: "jsx.class_attribute".to_string(),
                reason: format!("'{}' is not an attribute name", attr),
            });
        }

        for (name, template) in &self.templates {
            if let Some(authors) = &template.authors {
                if let Some(blank) = authors.iter().position(|a| a.name.trim().is_empty()) {
                    return Err(ContentlabError::ConfigInvalidValue {
                        field: format!("templates.{}.authors.{}.name", name, blank),
                        reason: "author name cannot be empty".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.output.header);
        assert_eq!(config.output.indent, 2);
        assert_eq!(config.jsx.class_attribute, "className");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[output]
header = false
indent = 4

[jsx]
class_attribute = "class"

[templates.blog]
categories = ["SEO", "Growth"]

[[templates.blog.authors]]
name = "Alice"
role = "Editor"
image = "/images/alice.png"
"#;
        let config = Config::from_toml_str(toml).unwrap();
        assert!(!config.output.header);
        assert_eq!(config.output.indent, 4);
        assert_eq!(config.jsx.class_attribute, "class");

        let blog = config.template("blog").unwrap();
        assert_eq!(blog.categories.as_deref().unwrap(), ["SEO", "Growth"]);
        assert_eq!(blog.authors.as_ref().unwrap()[0].name, "Alice");
        assert!(config.template("works").is_none());
    }

    #[test]
    fn test_reject_zero_indent() {
        let err = Config::from_toml_str("[output]\nindent = 0\n").unwrap_err();
        assert!(err.to_string().starts_with("CONFIG_INVALID_VALUE: output.indent"));
    }

    #[test]
    fn test_reject_blank_author_name() {
        let toml = r#"
[[templates.works.authors]]
name = " "
role = "x"
image = "y"
"#;
        let err = Config::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("templates.works.authors.0.name"));
    }

    #[test]
    fn test_reject_unknown_type() {
        let err = Config::from_toml_str("[output]\nheader = \"yes\"\n").unwrap_err();
        assert!(matches!(err, ContentlabError::ConfigParseError(_)));
    }

    #[test]
    fn test_find_walks_ancestors() {
        let temp = contentlab_testkit::temp_dir_in_workspace();
        let nested = temp.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "[output]\nindent = 3\n").unwrap();

        let found = Config::find(&nested).unwrap();
        assert_eq!(found, temp.path().join(CONFIG_FILE_NAME));

        let config = Config::load(None, &nested).unwrap();
        assert_eq!(config.output.indent, 3);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let temp = contentlab_testkit::temp_dir_in_workspace();
        let missing = temp.path().join("nope.toml");
        let err = Config::load(Some(&missing), temp.path()).unwrap_err();
        assert!(matches!(err, ContentlabError::ConfigNotFound { .. }));
    }
}
