use crate::core::isbn::normalize_isbn;
use crate::domain::model::{Book, ParseReport, RowOutcome, SkippedRow};
use crate::utils::error::{ImportError, Result};
use chrono::NaiveDate;
use csv::StringRecord;
use std::io::Read;

pub const TITLE_COLUMN: &str = "Title";
pub const AUTHOR_COLUMN: &str = "Author";
pub const ADDITIONAL_AUTHORS_COLUMN: &str = "Additional Authors";
pub const ISBN_COLUMN: &str = "ISBN13";
pub const DATE_READ_COLUMN: &str = "Date Read";

/// Positions of the export columns we read, resolved from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    title: usize,
    author: usize,
    additional_authors: usize,
    isbn: usize,
    date_read: usize,
}

impl ColumnMap {
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| ImportError::MissingColumnError {
                    column: name.to_string(),
                })
        };

        Ok(Self {
            title: position(TITLE_COLUMN)?,
            author: position(AUTHOR_COLUMN)?,
            additional_authors: position(ADDITIONAL_AUTHORS_COLUMN)?,
            isbn: position(ISBN_COLUMN)?,
            date_read: position(DATE_READ_COLUMN)?,
        })
    }
}

/// Reads a whole Goodreads export. The header must carry every bound column;
/// data rows that cannot be used are reported rather than aborting the run.
pub fn parse_export<R: Read>(reader: R) -> Result<ParseReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(rdr.headers()?)?;
    tracing::debug!("Resolved export columns: {:?}", columns);

    let mut report = ParseReport::default();
    let mut record = StringRecord::new();
    loop {
        match rdr.read_record(&mut record) {
            Ok(true) => report.record(parse_row(&columns, &record)),
            Ok(false) => break,
            Err(e) => {
                let bad_line = match e.kind() {
                    csv::ErrorKind::Utf8 { pos, .. } => {
                        Some(pos.as_ref().map(|p| p.line()).unwrap_or(0))
                    }
                    _ => None,
                };
                let Some(line) = bad_line else {
                    return Err(e.into());
                };
                tracing::warn!("Skipping line {}: {}", line, e);
                report.record(RowOutcome::Skipped(SkippedRow {
                    line,
                    reason: "row is not valid UTF-8".to_string(),
                }));
            }
        }
    }

    tracing::info!(
        "Parsed {} finished books ({} unread, {} skipped)",
        report.books.len(),
        report.unread,
        report.skipped.len()
    );
    Ok(report)
}

pub fn parse_row(columns: &ColumnMap, row: &StringRecord) -> RowOutcome {
    match read_row(columns, row) {
        Ok(Some(book)) => RowOutcome::Finished(book),
        Ok(None) => RowOutcome::Unread,
        Err(skipped) => {
            tracing::warn!("Skipping line {}: {}", skipped.line, skipped.reason);
            RowOutcome::Skipped(skipped)
        }
    }
}

fn read_row(
    columns: &ColumnMap,
    row: &StringRecord,
) -> std::result::Result<Option<Book>, SkippedRow> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);
    let field = |index: usize, name: &str| {
        row.get(index).ok_or_else(|| SkippedRow {
            line,
            reason: format!("row has {} fields, '{}' column is missing", row.len(), name),
        })
    };

    let date_read = field(columns.date_read, DATE_READ_COLUMN)?;
    if date_read.is_empty() {
        return Ok(None);
    }

    let title = field(columns.title, TITLE_COLUMN)?;
    let author = field(columns.author, AUTHOR_COLUMN)?;
    let additional_author = field(columns.additional_authors, ADDITIONAL_AUTHORS_COLUMN)?;
    let isbn = field(columns.isbn, ISBN_COLUMN)?;

    let mut authors = vec![author.to_string()];
    if !additional_author.is_empty() {
        authors.push(additional_author.to_string());
    }

    Ok(Some(Book {
        title: title.to_string(),
        authors,
        date_finished: normalize_date(date_read),
        isbn: normalize_isbn(isbn),
    }))
}

/// Rewrites `/` separators to `-`. The value is otherwise passed through.
pub fn normalize_date(raw: &str) -> String {
    let date = raw.replace('/', "-");
    if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
        tracing::debug!("Date '{}' is not in YYYY-MM-DD form, keeping as is", date);
    }
    date
}
