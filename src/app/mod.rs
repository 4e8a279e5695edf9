// Application layer: wires configured sources into the aggregator and renders the result.

use crate::adapters::{build_source, output, storage::LocalStorage};
use crate::config::Settings;
use crate::core::aggregator::EmailAddressAggregator;
use crate::core::{ExecutionContext, QueryFilter, Storage};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub row_count: usize,
    pub rendered: String,
    pub written_to: Option<String>,
}

pub async fn run_query(
    settings: &Settings,
    ctx: &ExecutionContext,
    filter: &QueryFilter,
) -> Result<QueryOutcome> {
    let profiles = build_source("browser profiles", &settings.profiles)?;
    let accounts = build_source("password manager accounts", &settings.accounts)?;
    let aggregator = EmailAddressAggregator::new(profiles, accounts);

    let records = aggregator.aggregate(ctx, filter).await?;
    tracing::info!("Found {} email addresses", records.len());

    let rendered = output::render(&aggregator.table(), &records, settings.format)?;

    if let Some(path) = &settings.output_path {
        LocalStorage::current_dir()
            .write_file(path, rendered.as_bytes())
            .await?;
        tracing::info!("Output saved to: {}", path);
    }

    Ok(QueryOutcome {
        row_count: records.len(),
        rendered,
        written_to: settings.output_path.clone(),
    })
}
