use crate::core::{ExecutionContext, QueryFilter, Record, RecordSource, TableDefinition};
use crate::utils::error::{EmailAddressError, Result};

/// Merges browser-profile and password-manager records into one
/// `{email, domain}` result set.
///
/// Profile records are filtered and reshaped; account records are passed
/// through untouched. A failure in either source fails the whole call.
pub struct EmailAddressAggregator<P: RecordSource, A: RecordSource> {
    profiles: P,
    accounts: A,
}

impl<P: RecordSource, A: RecordSource> EmailAddressAggregator<P, A> {
    pub fn new(profiles: P, accounts: A) -> Self {
        Self { profiles, accounts }
    }

    pub fn table(&self) -> TableDefinition {
        TableDefinition::email_addresses()
    }

    pub async fn aggregate(
        &self,
        ctx: &ExecutionContext,
        filter: &QueryFilter,
    ) -> Result<Vec<Record>> {
        let profile_records = self
            .profiles
            .generate(ctx, filter)
            .await
            .map_err(EmailAddressError::profile_source)?;

        tracing::debug!(
            "{} returned {} profile records",
            self.profiles.name(),
            profile_records.len()
        );

        // profiles don't require an email, skip the ones without
        let mut results: Vec<Record> = profile_records
            .iter()
            .map(Record::email)
            .filter(|email| !email.is_empty())
            .map(Record::from_email)
            .collect();

        let account_records = self
            .accounts
            .generate(ctx, filter)
            .await
            .map_err(EmailAddressError::account_source)?;

        tracing::debug!(
            "{} returned {} account records",
            self.accounts.name(),
            account_records.len()
        );

        results.extend(account_records);
        Ok(results)
    }
}
