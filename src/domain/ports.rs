use crate::domain::model::{ExecutionContext, QueryFilter, Record};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// A pull-based collaborator that yields flat records for a query.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human-readable name used in logs.
    fn name(&self) -> &str;

    async fn generate(&self, ctx: &ExecutionContext, filter: &QueryFilter) -> Result<Vec<Record>>;
}

#[async_trait]
impl<S: RecordSource + ?Sized> RecordSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn generate(&self, ctx: &ExecutionContext, filter: &QueryFilter) -> Result<Vec<Record>> {
        (**self).generate(ctx, filter).await
    }
}
