use crate::adapters::output::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::config::{Settings, SourceSpec};
use crate::utils::error::Result;
use crate::utils::validation;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "email-addresses")]
#[command(about = "List email addresses known to this machine from browser profiles and password manager accounts")]
pub struct CliConfig {
    #[arg(long, help = "Browser profile records: JSON file path or collector URL")]
    pub profiles: Option<String>,

    #[arg(long, help = "Password manager account records: JSON file path or collector URL")]
    pub accounts: Option<String>,

    #[arg(long, help = "TOML config file; flags override its values")]
    pub config: Option<String>,

    #[arg(long, help = "Output format: table, json or csv")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Write the result to this file instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Timeout for collector HTTP requests")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Print the table schema and exit")]
    pub print_schema: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges the optional config file with the flags, flags winning.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let profiles = self
            .profiles
            .as_deref()
            .map(SourceSpec::from_location)
            .or_else(|| file.sources.profiles.clone());
        let accounts = self
            .accounts
            .as_deref()
            .map(SourceSpec::from_location)
            .or_else(|| file.sources.accounts.clone());

        let mut profiles = validation::validate_required_field("profiles", &profiles)?.clone();
        let mut accounts = validation::validate_required_field("accounts", &accounts)?.clone();

        if let Some(timeout) = self.timeout_seconds {
            profiles.timeout_seconds = Some(timeout);
            accounts.timeout_seconds = Some(timeout);
        }

        Ok(Settings {
            profiles,
            accounts,
            format: self
                .format
                .or_else(|| file.output_format())
                .unwrap_or_default(),
            output_path: self
                .output
                .clone()
                .or_else(|| file.output_path().map(str::to_string)),
        })
    }
}
