use thiserror::Error;

#[derive(Error, Debug)]
pub enum RxError {
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl RxError {
    /// Short message meant for the terminal, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RxError::HttpClientError(_) => "Could not set up the HTTP client".to_string(),
            RxError::IoError(e) => format!("File or network operation failed: {}", e),
            RxError::SerializationError(_) => "Could not encode or decode JSON data".to_string(),
            RxError::ConfigError { message } => format!("Invalid configuration: {}", message),
            RxError::ConfigValidationError { field, .. } => {
                format!("Configuration could not be read ({})", field)
            }
            RxError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            RxError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            RxError::ServerError { message } => format!("Server stopped: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RxError::HttpClientError(_) => "Check the TLS setup of this machine",
            RxError::IoError(_) => "Check that the address is free and the file paths exist",
            RxError::SerializationError(_) => "Check the request body is valid JSON",
            RxError::ConfigError { .. }
            | RxError::InvalidConfigValueError { .. }
            | RxError::MissingConfigError { .. } => {
                "Fix the value on the command line or in the TOML file and restart"
            }
            RxError::ConfigValidationError { .. } => "Make sure the config file is valid TOML",
            RxError::ServerError { .. } => "Check the logs and restart the server",
        }
    }
}

pub type Result<T> = std::result::Result<T, RxError>;
