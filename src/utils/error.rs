use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmailAddressError {
    #[error("get email addresses from browser profiles: {source}")]
    ProfileSourceError {
        #[source]
        source: Box<EmailAddressError>,
    },

    #[error("add email addresses from password manager accounts: {source}")]
    AccountSourceError {
        #[source]
        source: Box<EmailAddressError>,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Source {endpoint} responded with status {status}")]
    SourceStatusError { endpoint: String, status: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Operation cancelled")]
    Cancelled,
}

impl EmailAddressError {
    pub fn profile_source(cause: EmailAddressError) -> Self {
        Self::ProfileSourceError {
            source: Box::new(cause),
        }
    }

    pub fn account_source(cause: EmailAddressError) -> Self {
        Self::AccountSourceError {
            source: Box::new(cause),
        }
    }

    /// The innermost error, skipping the per-source wrappers.
    pub fn root_cause(&self) -> &EmailAddressError {
        match self {
            Self::ProfileSourceError { source } | Self::AccountSourceError { source } => {
                source.root_cause()
            }
            other => other,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. }
                | Self::InvalidConfigValueError { .. }
                | Self::MissingConfigError { .. }
                | Self::ConfigValidationError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ProfileSourceError { source } => {
                format!("Could not read browser profiles: {}", source.user_friendly_message())
            }
            Self::AccountSourceError { source } => {
                format!(
                    "Could not read password manager accounts: {}",
                    source.user_friendly_message()
                )
            }
            Self::ApiError(_) => "The record source could not be reached".to_string(),
            Self::SourceStatusError { status, .. } => {
                format!("The record source returned HTTP {}", status)
            }
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(_) => "The source returned malformed records".to_string(),
            Self::Cancelled => "The query was cancelled".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.root_cause() {
            Self::ApiError(_) | Self::SourceStatusError { .. } => {
                "Check that the collector endpoint is running and reachable"
            }
            Self::IoError(_) => "Check that the records file exists and is readable",
            Self::SerializationError(_) => {
                "Make sure the source emits a JSON array of flat string objects"
            }
            Self::CsvError(_) => "Try a different output format",
            Self::Cancelled => "Re-run the query",
            e if e.is_config_error() => "Review the command line flags and the TOML config file",
            _ => "Re-run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, EmailAddressError>;
