//! Error types for the prompt schema

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur when building or verifying a prompt schema.
///
/// These are configuration mistakes in the schema itself, caught once by
/// [`Schema::verify`](crate::Schema::verify) before any prompting starts.
/// A validator rejecting user input is not an error: that is the normal
/// [`Validation::Reject`](crate::Validation) outcome.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two fields share the same output key
    #[error("duplicate field name: {name}")]
    DuplicateFieldName { name: String },

    /// A select field declares no options to choose from
    #[error("select field '{field}' has an empty choice list")]
    EmptyChoices { field: String },

    /// A select field's default is not among its choices
    #[error("select field '{field}' defaults to '{default}', which is not one of its choices")]
    DefaultNotInChoices { field: String, default: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SchemaError::DuplicateFieldName {
            name: "slug".into(),
        };
        assert_eq!(err.to_string(), "duplicate field name: slug");
    }

    #[test]
    fn test_default_not_in_choices_display() {
        let err = SchemaError::DefaultNotInChoices {
            field: "type".into(),
            default: "essay".into(),
        };
        assert!(err.to_string().contains("type"));
        assert!(err.to_string().contains("essay"));
    }
}
