pub mod aggregator;
pub mod domain_name;

pub use crate::domain::model::{ExecutionContext, QueryFilter, Record, TableDefinition};
pub use crate::domain::ports::{RecordSource, Storage};
pub use crate::utils::error::Result;
