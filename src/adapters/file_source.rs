use crate::core::{ExecutionContext, QueryFilter, Record, RecordSource, Storage};
use crate::utils::error::{EmailAddressError, Result};
use async_trait::async_trait;

/// Reads records a collector has already written out as a JSON array of
/// flat string objects. The query filter is not applied here.
pub struct FileSource<S: Storage> {
    name: String,
    path: String,
    storage: S,
}

impl<S: Storage> FileSource<S> {
    pub fn new(name: &str, path: &str, storage: S) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            storage,
        }
    }
}

#[async_trait]
impl<S: Storage> RecordSource for FileSource<S> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, ctx: &ExecutionContext, _filter: &QueryFilter) -> Result<Vec<Record>> {
        if ctx.is_cancelled() {
            return Err(EmailAddressError::Cancelled);
        }

        tracing::debug!("Reading {} records from {}", self.name, self.path);
        let data = self.storage.read_file(&self.path).await?;
        let records: Vec<Record> = serde_json::from_slice(&data)?;

        Ok(records)
    }
}
