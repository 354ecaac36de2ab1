//! Tabular file parsing: delimited text with a header row into record sets

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde_json::{Map, Value};

use crate::error::{ConversionError, ConversionResult};

/// One parsed data row, keyed by header cell. Key order follows the header
/// row (serde_json is built with `preserve_order`).
pub type Record = Map<String, Value>;

/// All records from one tabular file, in original row order.
pub type RecordSet = Vec<Record>;

/// Parser for delimited text files with a header row.
#[derive(Debug, Clone)]
pub struct TabularParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Cell text that maps to JSON null instead of a string
    null_sentinel: String,
}

impl Default for TabularParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            null_sentinel: "null".to_string(),
        }
    }
}

impl TabularParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom cell delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse one tabular file into a record set.
    ///
    /// The file is read as UTF-8; invalid byte sequences are a parse error
    /// rather than being silently coerced. Header and data cells are both
    /// whitespace-trimmed. A cell whose trimmed text equals the null
    /// sentinel becomes JSON null; the empty string stays `""`. A row whose
    /// cell count differs from the header is a parse error that aborts the
    /// whole file.
    pub fn parse_file(&self, path: &Path) -> ConversionResult<RecordSet> {
        let raw = fs::read(path).map_err(|e| ConversionError::io(e, path))?;
        let content = String::from_utf8(raw).map_err(|e| {
            ConversionError::parse(path, format!("invalid UTF-8: {}", e.utf8_error()))
        })?;

        self.parse_content(&content)
            .map_err(|message| ConversionError::parse(path, message))
    }

    /// Parse delimited content that has already been decoded.
    fn parse_content(&self, content: &str) -> Result<RecordSet, String> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| format!("failed to read header row: {}", e))?
            .clone();

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let row = result.map_err(|e| format!("failed to parse row {}: {}", index + 1, e))?;

            let mut record = Record::new();
            for (key, cell) in headers.iter().zip(row.iter()) {
                let value = if cell == self.null_sentinel {
                    Value::Null
                } else {
                    Value::String(cell.to_string())
                };
                record.insert(key.to_string(), value);
            }
            records.push(record);
        }

        Ok(records)
    }
}
