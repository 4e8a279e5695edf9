use crate::adapters::output::OutputFormat;
use crate::config::{Settings, SourceSpec};
use crate::utils::error::{EmailAddressError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesConfig {
    pub profiles: Option<SourceSpec>,
    pub accounts: Option<SourceSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EmailAddressError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EmailAddressError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${COLLECTOR_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EmailAddressError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    /// Both sources must be present once the file stands on its own.
    pub fn to_settings(&self) -> Result<Settings> {
        let profiles = validation::validate_required_field("sources.profiles", &self.sources.profiles)?;
        let accounts = validation::validate_required_field("sources.accounts", &self.sources.accounts)?;

        Ok(Settings {
            profiles: profiles.clone(),
            accounts: accounts.clone(),
            format: self.output_format().unwrap_or_default(),
            output_path: self.output_path().map(str::to_string),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(profiles) = &self.sources.profiles {
            profiles.validate_as("sources.profiles")?;
        }
        if let Some(accounts) = &self.sources.accounts {
            accounts.validate_as("sources.accounts")?;
        }
        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[sources.profiles]
type = "file"
location = "./profiles.json"

[sources.accounts]
type = "http"
location = "http://127.0.0.1:9000/accounts"
timeout_seconds = 10

[output]
format = "csv"
path = "./rows.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let settings = config.to_settings().unwrap();
        assert_eq!(settings.profiles.r#type, SourceKind::File);
        assert_eq!(settings.accounts.r#type, SourceKind::Http);
        assert_eq!(settings.accounts.timeout_seconds, Some(10));
        assert_eq!(settings.format, OutputFormat::Csv);
        assert_eq!(settings.output_path.as_deref(), Some("./rows.csv"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EMAIL_ADDRESSES_TEST_COLLECTOR", "http://collector.test");

        let toml_content = r#"
[sources.accounts]
type = "http"
location = "${EMAIL_ADDRESSES_TEST_COLLECTOR}/accounts"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.sources.accounts.unwrap().location,
            "http://collector.test/accounts"
        );

        std::env::remove_var("EMAIL_ADDRESSES_TEST_COLLECTOR");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[sources.profiles]
type = "file"
location = "${EMAIL_ADDRESSES_TEST_UNSET_VAR}/profiles.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.sources.profiles.unwrap().location,
            "${EMAIL_ADDRESSES_TEST_UNSET_VAR}/profiles.json"
        );
    }

    #[test]
    fn test_missing_source_is_reported() {
        let toml_content = r#"
[sources.profiles]
type = "file"
location = "./profiles.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.to_settings(),
            Err(EmailAddressError::MissingConfigError { ref field }) if field == "sources.accounts"
        ));
    }

    #[test]
    fn test_invalid_source_type_fails_to_parse() {
        let toml_content = r#"
[sources.profiles]
type = "sqlite"
location = "./profiles.db"
"#;

        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(EmailAddressError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[sources.accounts]
type = "http"
location = "invalid-url"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[sources.profiles]
type = "file"
location = "profiles.json"

[sources.accounts]
type = "file"
location = "accounts.json"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        let settings = config.to_settings().unwrap();
        assert_eq!(settings.accounts.location, "accounts.json");
        assert_eq!(settings.format, OutputFormat::Table);
        assert!(settings.output_path.is_none());
    }
}
