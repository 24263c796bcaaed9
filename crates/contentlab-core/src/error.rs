use crate::validate::ValidationErrors;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentlabError {
    // Template errors
    #[error("TEMPLATE_NOT_FOUND: template '{0}' not found (available: blog, customer-story, works)")]
    TemplateNotFound(String),

    // Record errors
    #[error("RECORD_INVALID: {field}: {reason}")]
    RecordInvalid { field: String, reason: String },

    #[error("RECORD_PARSE_ERROR: failed to parse record: {0}")]
    RecordParseError(String),

    #[error("RECORD_PATH_NOT_FOUND: field '{0}' is not declared by the template")]
    RecordPathNotFound(String),

    #[error("RECORD_EMPTY: input does not contain any entry")]
    RecordEmpty,

    // Config errors
    #[error("CONFIG_NOT_FOUND: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Validation errors
    #[error("VALIDATION_FAILED: {} field(s) rejected", .0.len())]
    ValidationFailed(ValidationErrors),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for ContentlabError {
    fn from(err: serde_json::Error) -> Self {
        ContentlabError::Generic(format!("JSON error: {}", err))
    }
}

impl From<toml::de::Error> for ContentlabError {
    fn from(err: toml::de::Error) -> Self {
        ContentlabError::RecordParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ContentlabError>;
