//! Parser for the title dataset CSV.
//!
//! Expected header (order free, extra columns ignored):
//! `tconst,genres,directors,titleType,averageRating`
//!
//! Empty cells and the IMDb null marker `\N` are treated as missing values.

use crate::error::{DataLoadError, Result};
use crate::types::TitleRecord;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub const ID_COLUMN: &str = "tconst";
pub const GENRES_COLUMN: &str = "genres";
pub const DIRECTORS_COLUMN: &str = "directors";
pub const TITLE_TYPE_COLUMN: &str = "titleType";
pub const RATING_COLUMN: &str = "averageRating";

const NULL_MARKER: &str = "\\N";

/// Positions of the columns we need within a row
struct ColumnMap {
    id: usize,
    genres: usize,
    directors: usize,
    title_type: usize,
    rating: usize,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord, source: &str) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| DataLoadError::MissingColumn {
                    file: source.to_string(),
                    column: column.to_string(),
                })
        };

        Ok(Self {
            id: find(ID_COLUMN)?,
            genres: find(GENRES_COLUMN)?,
            directors: find(DIRECTORS_COLUMN)?,
            title_type: find(TITLE_TYPE_COLUMN)?,
            rating: find(RATING_COLUMN)?,
        })
    }
}

/// Parse the dataset file at `path`
pub fn parse_titles(path: &Path) -> Result<Vec<TitleRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_titles_from_reader(file, &source)
}

/// Parse dataset rows from any reader.
///
/// `source` is only used to label errors.
pub fn parse_titles_from_reader<R: Read>(reader: R, source: &str) -> Result<Vec<TitleRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(csv_reader.headers()?, source)?;

    let mut titles = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for row in csv_reader.records() {
        let row = row?;
        let line_no = row.position().map(|p| p.line()).unwrap_or(0);

        let field = |idx: usize| cell(&row, idx);

        let id = field(columns.id).ok_or_else(|| DataLoadError::ParseError {
            file: source.to_string(),
            line: line_no,
            reason: format!("Missing {}", ID_COLUMN),
        })?;

        let average_rating = match field(columns.rating) {
            Some(value) => Some(parse_rating(value).map_err(|reason| {
                DataLoadError::ParseError {
                    file: source.to_string(),
                    line: line_no,
                    reason,
                }
            })?),
            None => None,
        };

        if !seen.insert(id.to_string()) {
            return Err(DataLoadError::DuplicateId {
                file: source.to_string(),
                id: id.to_string(),
                line: line_no,
            });
        }

        titles.push(TitleRecord {
            id: id.to_string(),
            genres: field(columns.genres).unwrap_or_default().to_string(),
            directors: field(columns.directors).unwrap_or_default().to_string(),
            title_type: field(columns.title_type).unwrap_or_default().to_string(),
            average_rating,
        });
    }

    Ok(titles)
}

/// A present, non-null cell value
fn cell(row: &csv::StringRecord, idx: usize) -> Option<&str> {
    row.get(idx).filter(|v| !v.is_empty() && *v != NULL_MARKER)
}

/// Parse a rating cell. NaN is rejected so ordering stays total.
fn parse_rating(value: &str) -> std::result::Result<f32, String> {
    let rating: f32 = value
        .parse()
        .map_err(|e| format!("Invalid {}: {} ({})", RATING_COLUMN, value, e))?;
    if rating.is_nan() {
        return Err(format!("Invalid {}: {}", RATING_COLUMN, value));
    }
    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "tconst,titleType,genres,directors,averageRating\n";

    fn parse(body: &str) -> Result<Vec<TitleRecord>> {
        let data = format!("{}{}", HEADER, body);
        parse_titles_from_reader(data.as_bytes(), "test.csv")
    }

    #[test]
    fn test_parse_rows_in_order() {
        let titles = parse(
            "tt01,movie,\"Comedy,Drama\",Jane Roe,7.5\n\
             tt02,tvSeries,Drama,\"A. Smith, B. Jones\",8.1\n",
        )
        .unwrap();

        assert_eq!(titles.len(), 2);
        assert_eq!(titles[0].id, "tt01");
        assert_eq!(titles[0].genres, "Comedy,Drama");
        assert_eq!(titles[0].title_type, "movie");
        assert_eq!(titles[0].average_rating, Some(7.5));
        assert_eq!(titles[1].directors, "A. Smith, B. Jones");
    }

    #[test]
    fn test_missing_values() {
        let titles = parse("tt01,movie,\\N,,\\N\n").unwrap();

        assert_eq!(titles[0].genres, "");
        assert_eq!(titles[0].directors, "");
        assert_eq!(titles[0].average_rating, None);
    }

    #[test]
    fn test_missing_column() {
        let data = "tconst,genres,directors,averageRating\ntt01,Drama,X,7.0\n";
        let err = parse_titles_from_reader(data.as_bytes(), "test.csv").unwrap_err();

        assert!(matches!(
            err,
            DataLoadError::MissingColumn { ref column, .. } if column == TITLE_TYPE_COLUMN
        ));
    }

    #[test]
    fn test_invalid_rating() {
        let err = parse("tt01,movie,Drama,X,7.0\ntt02,movie,Drama,X,great\n").unwrap_err();

        match err {
            DataLoadError::ParseError { line, reason, .. } => {
                assert_eq!(line, 3);
                assert!(reason.contains("great"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_id() {
        let err = parse(",movie,Drama,X,7.0\n").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_duplicate_id() {
        let err = parse("tt01,movie,Drama,X,7.0\ntt01,movie,Comedy,Y,6.0\n").unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::DuplicateId { ref id, line: 3, .. } if id == "tt01"
        ));
    }

    #[test]
    fn test_parse_rating_rejects_nan() {
        assert!(parse_rating("NaN").is_err());
        assert_eq!(parse_rating("6.4"), Ok(6.4));
    }
}
