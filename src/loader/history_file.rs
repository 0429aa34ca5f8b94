use crate::app::NavigationEntry;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Line {line}: missing timestamp field")]
    MissingTimestamp { line: usize },
    #[error("Line {line}: missing URL field")]
    MissingUrl { line: usize },
    #[error("Line {line}: expected url and timestamp, found extra fields")]
    TooManyFields { line: usize },
    #[error("Line {line}: invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Reads a saved session, one `url<delimiter>timestamp` record per line.
pub fn load_file(path: &Path, delimiter: char) -> Result<Vec<NavigationEntry>, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&contents, delimiter)?;
    log::info!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parses records in file order, exactly `url<delimiter>timestamp` per line.
/// Blank lines are skipped and one trailing delimiter is allowed.
pub fn parse_records(input: &str, delimiter: char) -> Result<Vec<NavigationEntry>, LoadError> {
    let mut records = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim_end();
        let record = trimmed.strip_suffix(delimiter).unwrap_or(trimmed);
        if record.trim().is_empty() {
            continue;
        }

        let (url, timestamp) = record
            .split_once(delimiter)
            .ok_or(LoadError::MissingTimestamp { line })?;
        if timestamp.contains(delimiter) {
            return Err(LoadError::TooManyFields { line });
        }

        let url = url.trim();
        if url.is_empty() {
            return Err(LoadError::MissingUrl { line });
        }

        let timestamp = timestamp.trim();
        let timestamp = timestamp
            .parse::<i64>()
            .map_err(|source| LoadError::InvalidTimestamp {
                line,
                value: timestamp.to_string(),
                source,
            })?;

        records.push(NavigationEntry::new(url, timestamp));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn pairs(records: &[NavigationEntry]) -> Vec<(&str, i64)> {
        records.iter().map(|r| (r.url(), r.timestamp())).collect()
    }

    #[test]
    fn test_parse_records_in_order() {
        let input = "a.com,100\nb.com,200\nc.com,300\n";
        let records = parse_records(input, ',').unwrap();

        assert_eq!(
            pairs(&records),
            vec![("a.com", 100), ("b.com", 200), ("c.com", 300)]
        );
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trailing_delimiters() {
        let input = "\nhttp://a.com/,100,\r\n\n  \nhttp://b.com/,200\n";
        let records = parse_records(input, ',').unwrap();

        assert_eq!(
            pairs(&records),
            vec![("http://a.com/", 100), ("http://b.com/", 200)]
        );
    }

    #[test]
    fn test_extra_fields_are_rejected() {
        let err = parse_records("a.com,100\na.com,100,b.com,200\n", ',').unwrap_err();
        assert!(matches!(err, LoadError::TooManyFields { line: 2 }));
    }

    #[test]
    fn test_only_one_trailing_delimiter_allowed() {
        let records = parse_records("b.com,200,\n", ',').unwrap();
        assert_eq!(pairs(&records), vec![("b.com", 200)]);

        let err = parse_records("b.com,200,,\n", ',').unwrap_err();
        assert!(matches!(err, LoadError::TooManyFields { line: 1 }));
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let err = parse_records("a.com,100\n,100\n", ',').unwrap_err();
        assert!(matches!(err, LoadError::MissingUrl { line: 2 }));
    }

    #[test]
    fn test_custom_delimiter() {
        let records = parse_records("a.com|5\nb.com | -7", '|').unwrap();
        assert_eq!(pairs(&records), vec![("a.com", 5), ("b.com", -7)]);
    }

    #[test]
    fn test_large_timestamps_fit() {
        let records = parse_records("a.com,9000000000", ',').unwrap();
        assert_eq!(records[0].timestamp(), 9_000_000_000);
    }

    #[test]
    fn test_missing_timestamp() {
        let err = parse_records("a.com,100\nb.com\n", ',').unwrap_err();
        assert!(matches!(err, LoadError::MissingTimestamp { line: 2 }));
    }

    #[test]
    fn test_invalid_timestamp() {
        let err = parse_records("a.com,100\nb.com,soon\n", ',').unwrap_err();
        match err {
            LoadError::InvalidTimestamp { line, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a.com,100").unwrap();
        writeln!(file, "b.com,200").unwrap();

        let records = load_file(file.path(), ',').unwrap();
        assert_eq!(pairs(&records), vec![("a.com", 100), ("b.com", 200)]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = load_file(&path, ',').unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
