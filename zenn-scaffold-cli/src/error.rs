//! Error types for the scaffolding CLI

use std::path::PathBuf;

use thiserror::Error;
use zenn_scaffold::SchemaError;

/// Result type for scaffold operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Errors that can occur while resolving the questionnaire or writing the
/// article file.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The schema itself is misconfigured
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A value supplied on the command line was rejected by the field's
    /// validator
    #[error("value for '{field}' was rejected: {message}")]
    Rejected { field: String, message: String },

    /// A supplied value is not one of a select field's choices
    #[error("'{field}' value '{value}' is not one of: {choices:?}")]
    InvalidChoice {
        field: String,
        value: String,
        choices: Vec<String>,
    },

    /// A supplied value has the wrong shape for its field
    #[error("'{field}' expects {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Non-interactive resolution hit a field with no value and no default
    #[error("required field '{field}' has no value and no default")]
    MissingInput { field: String },

    /// The user exhausted the retry budget for one field
    #[error("maximum attempts reached for '{field}' after {attempts} tries")]
    MaxAttemptsExceeded { field: String, attempts: u32 },

    /// Refusing to overwrite an existing article
    #[error("article already exists: {path}")]
    ArticleExists { path: PathBuf },

    /// Configuration error
    #[error("config error: {0}")]
    Config(#[from] figment::Error),

    /// Terminal prompt error
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
