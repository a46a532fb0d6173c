use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Column \"{column}\" is not found in {path}")]
    MissingColumn { column: String, path: String },
    #[error("Line {line} of {path} has no column {index}")]
    MissingField {
        line: u64,
        index: usize,
        path: String,
    },
}

pub fn tsv_reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.quoting(false).delimiter(b'\t').escape(None);
    builder
}

/// Open a delimited table. Files ending with `.csv` are read as comma separated
/// values, everything else as tab separated values.
pub fn auto_csv_reader_from_path<P: AsRef<Path>>(
    path: P,
    use_header: bool,
) -> csv::Result<csv::Reader<File>> {
    let path = path.as_ref();
    if path.extension().map(|x| x == "csv").unwrap_or(false) {
        csv::ReaderBuilder::new()
            .has_headers(use_header)
            .flexible(true)
            .from_path(path)
    } else {
        tsv_reader_builder()
            .has_headers(use_header)
            .flexible(true)
            .from_path(path)
    }
}

pub fn column_index(
    headers: &csv::StringRecord,
    column: &str,
    path: &Path,
) -> Result<usize, TableError> {
    headers
        .iter()
        .position(|x| x.trim() == column)
        .ok_or_else(|| TableError::MissingColumn {
            column: column.to_string(),
            path: path.display().to_string(),
        })
}

pub fn field<'a>(
    record: &'a csv::StringRecord,
    index: usize,
    path: &Path,
) -> Result<&'a str, TableError> {
    record
        .get(index)
        .map(|x| x.trim())
        .ok_or_else(|| TableError::MissingField {
            line: record.position().map(|x| x.line()).unwrap_or(0),
            index,
            path: path.display().to_string(),
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_auto_csv_reader() -> Result<(), TableError> {
        let path = Path::new("./testfiles/table.csv");
        let mut reader = auto_csv_reader_from_path(path, true)?;
        let headers = reader.headers()?.clone();
        assert_eq!(column_index(&headers, "value", path)?, 1);
        let rows: Vec<_> = reader.records().collect::<Result<_, _>>()?;
        assert_eq!(rows.len(), 2);
        assert_eq!(field(&rows[0], 0, path)?, "a");
        assert_eq!(field(&rows[1], 1, path)?, "2");
        assert!(matches!(
            field(&rows[1], 3, path),
            Err(TableError::MissingField { index: 3, .. })
        ));

        let path = Path::new("./testfiles/table.tsv");
        let mut reader = auto_csv_reader_from_path(path, true)?;
        let headers = reader.headers()?.clone();
        assert_eq!(column_index(&headers, "Sample type", path)?, 1);
        assert!(matches!(
            column_index(&headers, "value", path),
            Err(TableError::MissingColumn { .. })
        ));
        Ok(())
    }
}
