use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tokio_util::sync::CancellationToken;

pub const EMAIL_COLUMN: &str = "email";
pub const DOMAIN_COLUMN: &str = "domain";
pub const EMAIL_ADDRESSES_TABLE: &str = "email_addresses";

/// One output row: column name to string value.
///
/// Missing columns read as the empty string, never as an absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes a `{email, domain}` row, deriving the domain from the email.
    pub fn from_email(email: &str) -> Self {
        Self::new()
            .with(EMAIL_COLUMN, email)
            .with(DOMAIN_COLUMN, crate::core::domain_name::extract_domain(email))
    }

    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.data.insert(column.to_string(), value.to_string());
        self
    }

    pub fn get(&self, column: &str) -> &str {
        self.data.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.get(EMAIL_COLUMN)
    }

    pub fn domain(&self) -> &str {
        self.get(DOMAIN_COLUMN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub operator: String,
    pub expression: String,
}

/// Per-column constraints handed down by the query engine.
///
/// The aggregator forwards this to every source untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFilter {
    pub constraints: HashMap<String, Vec<Constraint>>,
}

impl QueryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constraint(mut self, column: &str, operator: &str, expression: &str) -> Self {
        self.constraints
            .entry(column.to_string())
            .or_default()
            .push(Constraint {
                operator: operator.to_string(),
                expression: expression.to_string(),
            });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.values().all(Vec::is_empty)
    }
}

/// Request-scoped execution context. Cancellation is advisory: sources
/// decide whether and where to observe it.
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    cancel: CancellationToken,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub async fn cancelled(&self) {
        self.cancel.cancelled().await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub r#type: ColumnType,
}

impl ColumnDefinition {
    pub fn text(name: &str) -> Self {
        Self {
            name: name.to_string(),
            r#type: ColumnType::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    pub fn email_addresses() -> Self {
        Self {
            name: EMAIL_ADDRESSES_TABLE.to_string(),
            columns: vec![
                ColumnDefinition::text(EMAIL_COLUMN),
                ColumnDefinition::text(DOMAIN_COLUMN),
            ],
        }
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
