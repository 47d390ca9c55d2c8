use std::{
    fmt::Display,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use clap::ValueEnum;
use serde_json::Value;
use tracing::debug;

use crate::error::{MinerError, Result};

pub type RawTransaction = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One transaction per row, every field is an item.
    Csv,
    /// An array of arrays of strings.
    Json,
}

impl InputFormat {
    /// Guess from the file extension, falling back to CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

pub fn load_transactions(path: &Path, format: InputFormat) -> Result<Vec<RawTransaction>> {
    let reader = BufReader::new(File::open(path)?);
    let transactions = match format {
        InputFormat::Csv => read_csv(reader)?,
        InputFormat::Json => read_json(reader)?,
    };
    debug!(path = %path.display(), transactions = transactions.len(), "loaded transactions");
    Ok(transactions)
}

/// Rows may differ in length and there is no header row.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawTransaction>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        transactions.push(record.iter().map(str::to_owned).collect());
    }
    Ok(transactions)
}

/// Every entry must be an array whose elements are all strings.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<RawTransaction>> {
    let document: Value = serde_json::from_reader(reader)?;
    let Value::Array(entries) = document else {
        return Err(MinerError::MalformedTransaction {
            index: 0,
            reason: "expected an array of transactions".to_owned(),
        });
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| parse_json_transaction(index, entry))
        .collect()
}

fn parse_json_transaction(index: usize, entry: Value) -> Result<RawTransaction> {
    let items = match entry {
        Value::Array(items) => items,
        other => {
            return Err(MinerError::MalformedTransaction {
                index,
                reason: format!("expected an array of items, got {}", json_kind(&other)),
            })
        }
    };

    collect_transaction(
        index,
        items.into_iter().map(|item| match item {
            Value::String(item) => Ok(item),
            other => Err(format!("expected a string item, got {}", json_kind(&other))),
        }),
    )
}

/// Gathers the items of transaction `index` from any collection, ordered or
/// not. The first item that fails to convert makes the whole transaction
/// malformed.
pub fn collect_transaction<I, E>(index: usize, items: I) -> Result<RawTransaction>
where
    I: IntoIterator<Item = std::result::Result<String, E>>,
    E: Display,
{
    items
        .into_iter()
        .map(|item| {
            item.map_err(|err| MinerError::MalformedTransaction {
                index,
                reason: err.to_string(),
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
