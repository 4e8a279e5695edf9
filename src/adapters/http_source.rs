use crate::core::{ExecutionContext, QueryFilter, Record, RecordSource};
use crate::utils::error::{EmailAddressError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Asks a collector service for records by POSTing the query filter as JSON.
/// The response body must be a JSON array of flat string objects.
pub struct HttpSource {
    name: String,
    endpoint: String,
    client: Client,
}

impl HttpSource {
    pub fn new(name: &str, endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            name: name.to_string(),
            endpoint: endpoint.to_string(),
            client,
        })
    }

    async fn fetch(&self, filter: &QueryFilter) -> Result<Vec<Record>> {
        tracing::debug!("Requesting {} records from {}", self.name, self.endpoint);
        let response = self.client.post(&self.endpoint).json(filter).send().await?;

        let status = response.status();
        tracing::debug!("{} responded with {}", self.endpoint, status);
        if !status.is_success() {
            return Err(EmailAddressError::SourceStatusError {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, ctx: &ExecutionContext, filter: &QueryFilter) -> Result<Vec<Record>> {
        tokio::select! {
            biased;
            _ = ctx.cancelled() => Err(EmailAddressError::Cancelled),
            result = self.fetch(filter) => result,
        }
    }
}
