use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("currency code must be a type of Currency, got '{code}'")]
    InvalidCurrency { code: String },

    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: String,
    },

    #[error("field '{field}': {source}")]
    Field {
        field: String,
        #[source]
        source: Box<ModelError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl ModelError {
    pub(crate) fn unexpected(expected: &'static str, found: &serde_json::Value) -> Self {
        let found = match found {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        ModelError::UnexpectedType {
            expected,
            found: found.to_string(),
        }
    }

    pub(crate) fn in_field(self, field: &str) -> Self {
        ModelError::Field {
            field: field.to_string(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
