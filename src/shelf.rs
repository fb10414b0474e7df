//! Reading ISBNs out of a library shelf export.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{PipelineError, Result};

const ISBN_COLUMN: &str = "ISBN13";
const SHELF_COLUMN: &str = "Exclusive Shelf";

// The export wraps identifiers as ="9780141439518"; pull out the digits.
static ISBN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{13}|\d{9}[\dXx]").expect("valid ISBN pattern"));

/// The columns of an export row this crate cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct ShelfRow {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "ISBN13", default)]
    pub isbn13: String,
    #[serde(rename = "Exclusive Shelf", default)]
    pub exclusive_shelf: String,
}

/// Extracts a bare ISBN from an export cell, if there is one.
pub fn normalize_isbn(raw: &str) -> Option<String> {
    ISBN_RE.find(raw).map(|m| m.as_str().to_uppercase())
}

/// Returns the ISBNs of all rows on `shelf`, in file order. An empty `shelf`
/// keeps every row. Rows without an ISBN are skipped.
pub fn read_shelf_isbns(path: &Path, shelf: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| PipelineError::source_read(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| PipelineError::source_read(path, e))?;
    for column in [ISBN_COLUMN, SHELF_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(PipelineError::source_read(
                path,
                format!("Column '{}' not found in shelf export", column),
            ));
        }
    }

    let mut isbns = Vec::new();
    for (line, row) in reader.deserialize::<ShelfRow>().enumerate() {
        let row = row.map_err(|e| PipelineError::source_read(path, e))?;
        if !shelf.is_empty() && row.exclusive_shelf != shelf {
            continue;
        }
        match normalize_isbn(&row.isbn13) {
            Some(isbn) => isbns.push(isbn),
            None => warn!(line, title = %row.title, "Skipping book without ISBN"),
        }
    }
    debug!(count = isbns.len(), shelf, "Collected ISBNs from shelf export");
    Ok(isbns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EXPORT: &str = "\
Book Id,Title,Author,ISBN,ISBN13,My Rating,Exclusive Shelf
1,Dune,Frank Herbert,\"=\"\"0441013597\"\"\",\"=\"\"9780441013593\"\"\",5,read
2,Emma,Jane Austen,\"=\"\"\"\"\",\"=\"\"\"\"\",0,read
3,Ulysses,James Joyce,\"=\"\"0679722769\"\"\",\"=\"\"9780679722762\"\"\",0,to-read
4,Beloved,Toni Morrison,,9781400033416,4,read
";

    fn export_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "{}", EXPORT).expect("Failed to write to temp file");
        file
    }

    #[test]
    fn test_normalize_isbn() {
        assert_eq!(
            normalize_isbn("=\"9780441013593\"").as_deref(),
            Some("9780441013593")
        );
        assert_eq!(normalize_isbn("044101359x").as_deref(), Some("044101359X"));
        assert_eq!(normalize_isbn("=\"\""), None);
        assert_eq!(normalize_isbn(""), None);
    }

    #[test]
    fn test_filters_by_shelf_and_skips_missing_isbns() {
        let file = export_file();
        let isbns = read_shelf_isbns(file.path(), "read").unwrap();
        assert_eq!(isbns, vec!["9780441013593", "9781400033416"]);
    }

    #[test]
    fn test_empty_shelf_keeps_all_rows() {
        let file = export_file();
        let isbns = read_shelf_isbns(file.path(), "").unwrap();
        assert_eq!(isbns.len(), 3);
        assert_eq!(isbns[1], "9780679722762");
    }

    #[test]
    fn test_missing_isbn_column_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Title,Exclusive Shelf\nDune,read\n").unwrap();
        let result = read_shelf_isbns(file.path(), "read");
        assert!(matches!(result, Err(PipelineError::SourceReadError { .. })));
    }
}
