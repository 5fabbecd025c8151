use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::input::{InputError, RawRow, RawTable};

pub fn read_maybe_gz(path: &Path) -> Result<Vec<u8>, InputError> {
    let mut file = BufReader::new(File::open(path)?);
    let mut bytes = Vec::new();
    if path.extension().is_some_and(|ext| ext == "gz") {
        MultiGzDecoder::new(file).read_to_end(&mut bytes)?;
    } else {
        file.read_to_end(&mut bytes)?;
    }
    Ok(bytes)
}

/// Reads a header row plus data rows. Row widths are not checked here;
/// ragged rows are left for the validator to report.
pub fn parse_table(text: &str, delimiter: u8) -> Result<RawTable, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(InputError::InvalidInput(
            "input table has no header row".to_string(),
        ));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(rows.len() + 2);
        rows.push(RawRow {
            line,
            cells: record.iter().map(|cell| cell.to_string()).collect(),
        });
    }

    Ok(RawTable { headers, rows })
}
