//! CSV ingestion of a single price file

use crate::error::{Error, Result};
use crate::headers::{resolve_headers, ColumnMap, Role, Synonyms};
use crate::record::Record;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Outcome of reading one price file.
///
/// A failure part-way through keeps the rows parsed before it, so `records`
/// may be non-empty even when `error` is set.
#[derive(Debug, Default)]
pub struct FileLoad {
    /// Records parsed before the file ended or failed
    pub records: Vec<Record>,
    /// The error that stopped processing, if any
    pub error: Option<Error>,
}

impl FileLoad {
    fn failed(error: Error) -> Self {
        Self {
            records: Vec::new(),
            error: Some(error),
        }
    }

    /// Whether the whole file was read without error
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Read a price file from disk
pub fn read_price_file<P: AsRef<Path>>(path: P, synonyms: &Synonyms) -> FileLoad {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            return FileLoad::failed(Error::FileRead {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    read_prices(BufReader::new(file), path, synonyms)
}

/// Read price CSV from a string (useful for testing)
pub fn read_price_str(content: &str, source_name: &str, synonyms: &Synonyms) -> FileLoad {
    read_prices(content.as_bytes(), Path::new(source_name), synonyms)
}

fn read_prices<R: Read>(reader: R, path: &Path, synonyms: &Synonyms) -> FileLoad {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // Short rows surface as missing values below
        .from_reader(reader);

    let headers: Vec<String> = match csv_reader.headers() {
        Ok(headers) => headers.iter().map(str::to_string).collect(),
        Err(e) => {
            return FileLoad::failed(Error::Csv {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let columns = match resolve_headers(&headers, synonyms) {
        Ok(columns) => columns,
        Err(role) => {
            return FileLoad::failed(Error::IncorrectHeaders {
                path: path.to_path_buf(),
                role,
                synonyms: synonyms.for_role(role).to_vec(),
            })
        }
    };

    let source_file = source_file_name(path);
    let mut load = FileLoad::default();

    for result in csv_reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                load.error = Some(Error::Csv {
                    path: path.to_path_buf(),
                    source: e,
                });
                break;
            }
        };

        match parse_row(&row, &columns, path, &source_file) {
            Ok(record) => load.records.push(record),
            Err(e) => {
                load.error = Some(e);
                break;
            }
        }
    }

    load
}

fn parse_row(
    row: &csv::StringRecord,
    columns: &ColumnMap,
    path: &Path,
    source_file: &str,
) -> Result<Record> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);
    let name = row.get(columns.product).ok_or_else(|| Error::InvalidValue {
        path: path.to_path_buf(),
        line,
        column: Role::Product,
        value: String::new(),
        reason: "field is missing".to_string(),
    })?;
    let price = parse_number(row, columns, Role::Price, path, line)?;
    let weight = parse_number(row, columns, Role::Weight, path, line)?;

    if weight == 0.0 {
        return Err(Error::InvalidValue {
            path: path.to_path_buf(),
            line,
            column: Role::Weight,
            value: row.get(columns.weight).unwrap_or_default().to_string(),
            reason: "weight must be nonzero".to_string(),
        });
    }

    Ok(Record::new(name, price, weight, source_file))
}

fn parse_number(
    row: &csv::StringRecord,
    columns: &ColumnMap,
    role: Role,
    path: &Path,
    line: u64,
) -> Result<f64> {
    let invalid = |value: &str, reason: String| Error::InvalidValue {
        path: path.to_path_buf(),
        line,
        column: role,
        value: value.to_string(),
        reason,
    };

    let raw = row
        .get(columns.index(role))
        .ok_or_else(|| invalid("", "field is missing".to_string()))?;

    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| invalid(raw, e.to_string()))?;

    // `parse` accepts "NaN" and "inf"
    if !value.is_finite() {
        return Err(invalid(raw, "value must be a finite number".to_string()));
    }
    Ok(value)
}

/// File name without its directory part
fn source_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
