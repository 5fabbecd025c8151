use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod encoding;
pub mod lists;
pub mod table;

use encoding::{TextEncoding, decode_text};
use table::{parse_table, read_maybe_gz};

#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub line: usize,
    pub cells: Vec<String>,
}

/// Delimited table exactly as read: header plus untyped cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

#[derive(Debug, Clone)]
pub struct InputBundle {
    pub path: PathBuf,
    pub delimiter: u8,
    pub encoding: TextEncoding,
    pub table: RawTable,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input file '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn load_input(path: &Path, delimiter: Option<u8>) -> Result<InputBundle, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }
    let delimiter = delimiter.unwrap_or_else(|| default_delimiter(path));

    let bytes = read_maybe_gz(path)?;
    let (text, encoding) = decode_text(&bytes);
    if encoding == TextEncoding::Latin1 {
        tracing::warn!(
            path = %path.display(),
            "input is not valid UTF-8; decoding as Latin-1"
        );
    }

    let table = parse_table(&text, delimiter)?;
    tracing::info!(
        path = %path.display(),
        encoding = encoding.name(),
        delimiter = %char::from(delimiter).escape_default(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "loaded decision table"
    );

    Ok(InputBundle {
        path: path.to_path_buf(),
        delimiter,
        encoding,
        table,
    })
}

pub fn default_delimiter(path: &Path) -> u8 {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    if name.ends_with(".tsv") || name.ends_with(".tab") {
        b'\t'
    } else {
        b','
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
