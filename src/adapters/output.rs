use crate::core::{Record, TableDefinition};
use crate::utils::error::{EmailAddressError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = EmailAddressError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(EmailAddressError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: table, json, csv".to_string(),
            }),
        }
    }
}

/// Renders rows projected onto the table's columns, in result order.
/// Columns a source added beyond the schema are dropped.
pub fn render(table: &TableDefinition, records: &[Record], format: OutputFormat) -> Result<String> {
    let columns = table.column_names();
    match format {
        OutputFormat::Json => render_json(&columns, records),
        OutputFormat::Csv => render_csv(&columns, records),
        OutputFormat::Table => Ok(render_table(&columns, records)),
    }
}

fn project(columns: &[&str], record: &Record) -> Record {
    columns
        .iter()
        .fold(Record::new(), |row, column| row.with(column, record.get(column)))
}

fn render_json(columns: &[&str], records: &[Record]) -> Result<String> {
    let rows: Vec<Record> = records.iter().map(|r| project(columns, r)).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

fn render_csv(columns: &[&str], records: &[Record]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(columns)?;
    for record in records {
        writer.write_record(columns.iter().map(|c| record.get(c)))?;
    }

    let data = writer.into_inner().map_err(|e| EmailAddressError::IoError(e.into_error()))?;
    String::from_utf8(data).map_err(|e| EmailAddressError::ConfigError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

fn render_table(columns: &[&str], records: &[Record]) -> String {
    let widths: Vec<usize> = columns
        .iter()
        .map(|c| {
            records
                .iter()
                .map(|r| r.get(c).chars().count())
                .max()
                .unwrap_or(0)
                .max(c.len())
        })
        .collect();

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let rule: Vec<&str> = rule.iter().map(String::as_str).collect();

    let mut lines = vec![format_line(columns, &widths), format_line(&rule, &widths)];
    for record in records {
        let cells: Vec<&str> = columns.iter().map(|c| record.get(c)).collect();
        lines.push(format_line(&cells, &widths));
    }
    lines.join("\n")
}

fn format_line(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
