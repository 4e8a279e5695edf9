pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{file_source::FileSource, http_source::HttpSource, storage::LocalStorage};
pub use app::{run_query, QueryOutcome};
pub use config::{Settings, SourceKind, SourceSpec};
pub use crate::core::{aggregator::EmailAddressAggregator, domain_name::extract_domain};
pub use domain::model::{ExecutionContext, QueryFilter, Record, TableDefinition};
pub use domain::ports::RecordSource;
pub use utils::error::{EmailAddressError, Result};
