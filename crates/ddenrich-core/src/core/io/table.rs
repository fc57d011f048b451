use crate::core::models::interaction::{
    DomainSet, InteractionRow, InteractionTable, MixedSchemeError,
};
use crate::core::models::label::{DomainLabel, LabelError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Layout of a delimited interaction table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFormat {
    pub delimiter: u8,
    pub x_column: String,
    pub y_column: String,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            delimiter: b',',
            x_column: "XDomains".to_string(),
            y_column: "YDomains".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column '{0}' not found in table header")]
    MissingColumn(String),

    #[error("Invalid domain label on line {line}, column '{column}': {source}")]
    Label {
        line: u64,
        column: String,
        #[source]
        source: LabelError,
    },

    #[error(transparent)]
    MixedSchemes(#[from] MixedSchemeError),
}

impl InteractionTable {
    /// Loads an interaction table from a delimited file with a header row.
    pub fn load(path: &Path, format: &TableFormat) -> Result<Self, TableLoadError> {
        let file = File::open(path).map_err(|e| TableLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let table = Self::read_from(file, format)?;
        debug!(
            path = %path.display(),
            rows = table.len(),
            "Interaction table loaded."
        );
        Ok(table)
    }

    /// Parses an interaction table. Columns other than the two domain columns are ignored,
    /// and an empty domain cell yields an empty domain set.
    pub fn read_from<R: Read>(reader: R, format: &TableFormat) -> Result<Self, TableLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(format.delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let column_index = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| TableLoadError::MissingColumn(name.to_string()))
        };
        let x_idx = column_index(&format.x_column)?;
        let y_idx = column_index(&format.y_column)?;

        let mut rows = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let record = result?;
            // Header occupies line 1.
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(i as u64 + 2);

            let x = parse_domain_cell(record.get(x_idx).unwrap_or(""), line, &format.x_column)?;
            let y = parse_domain_cell(record.get(y_idx).unwrap_or(""), line, &format.y_column)?;
            rows.push(InteractionRow::new(x, y));
        }

        Ok(InteractionTable::new(rows)?)
    }
}

fn parse_domain_cell(cell: &str, line: u64, column: &str) -> Result<DomainSet, TableLoadError> {
    cell.split_whitespace()
        .map(|raw| {
            DomainLabel::parse(raw).map_err(|source| TableLoadError::Label {
                line,
                column: column.to_string(),
                source,
            })
        })
        .collect()
}
