#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::output::OutputFormat;
use crate::adapters::http_source::DEFAULT_TIMEOUT_SECONDS;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    Http,
}

/// Where one collaborator's records come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    pub r#type: SourceKind,
    pub location: String,
    pub timeout_seconds: Option<u64>,
}

impl SourceSpec {
    /// http(s) URLs become HTTP sources, anything else is a file path.
    pub fn from_location(location: &str) -> Self {
        let kind = if location.starts_with("http://") || location.starts_with("https://") {
            SourceKind::Http
        } else {
            SourceKind::File
        };
        Self {
            r#type: kind,
            location: location.to_string(),
            timeout_seconds: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn validate_as(&self, field_name: &str) -> Result<()> {
        match self.r#type {
            SourceKind::Http => validation::validate_url(field_name, &self.location)?,
            SourceKind::File => validation::validate_path(field_name, &self.location)?,
        }
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number(
                &format!("{}.timeout_seconds", field_name),
                timeout,
                1,
            )?;
        }
        Ok(())
    }
}

/// Fully resolved run settings, after merging the config file and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub profiles: SourceSpec,
    pub accounts: SourceSpec,
    pub format: OutputFormat,
    pub output_path: Option<String>,
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.profiles.validate_as("sources.profiles")?;
        self.accounts.validate_as("sources.accounts")?;
        if let Some(path) = &self.output_path {
            validation::validate_path("output.path", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_from_location() {
        assert_eq!(
            SourceSpec::from_location("https://collector.local/profiles").r#type,
            SourceKind::Http
        );
        assert_eq!(SourceSpec::from_location("./profiles.json").r#type, SourceKind::File);
    }

    #[test]
    fn test_default_timeout() {
        let spec = SourceSpec::from_location("http://localhost/a");
        assert_eq!(spec.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECONDS));
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings {
            profiles: SourceSpec::from_location("profiles.json"),
            accounts: SourceSpec::from_location("http://localhost:9000/accounts"),
            format: OutputFormat::Json,
            output_path: None,
        };
        assert!(settings.validate().is_ok());

        settings.accounts.timeout_seconds = Some(0);
        assert!(settings.validate().is_err());

        settings.accounts = SourceSpec {
            r#type: SourceKind::Http,
            location: "not a url".to_string(),
            timeout_seconds: None,
        };
        assert!(settings.validate().is_err());
    }
}
