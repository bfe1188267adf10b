use std::io;
use std::path::Path;

use crate::error::{CustomError, Result};

/// Materialize the whole tab-delimited table from a file. Transposition
/// needs random access across all rows, so nothing is streamed; memory is
/// O(rows x columns).
pub fn read_table_file(path: &impl AsRef<Path>) -> Result<Vec<Vec<String>>> {
    let mut reader = table_reader_builder()
        .from_path(path.as_ref())
        .map_err(|source| CustomError::CsvRead {
            source,
            path: path.as_ref().to_path_buf(),
        })?;
    collect_rows(&mut reader).map_err(|source| CustomError::CsvRead {
        source,
        path: path.as_ref().to_path_buf(),
    })
}

pub fn read_table_stdin() -> Result<Vec<Vec<String>>> {
    let stdin = io::stdin();
    let mut reader = table_reader_builder().from_reader(stdin.lock());
    collect_rows(&mut reader).map_err(|source| CustomError::CsvReadStdin { source })
}

// Raw tab splitting: no header row, no quote handling, and ragged rows are
// passed through so the table validation can name the offending line.
fn table_reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false);
    builder
}

fn collect_rows<R: io::Read>(
    reader: &mut csv::Reader<R>,
) -> std::result::Result<Vec<Vec<String>>, csv::Error> {
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
