use serde::Serialize;

/// A finished book as written to the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub title: String,
    pub authors: Vec<String>,
    pub date_finished: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub isbn: String,
}

impl Book {
    pub fn primary_author(&self) -> &str {
        self.authors.first().map(String::as_str).unwrap_or("")
    }

    pub fn has_isbn(&self) -> bool {
        !self.isbn.is_empty()
    }
}

/// A data row that could not be turned into a [`Book`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Finished(Book),
    /// No date read: the book is on a shelf but has not been finished.
    Unread,
    Skipped(SkippedRow),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub books: Vec<Book>,
    pub unread: usize,
    pub skipped: Vec<SkippedRow>,
}

impl ParseReport {
    pub fn record(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Finished(book) => self.books.push(book),
            RowOutcome::Unread => self.unread += 1,
            RowOutcome::Skipped(row) => self.skipped.push(row),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnrichmentReport {
    pub already_present: usize,
    pub looked_up: usize,
    pub filled: usize,
    pub unmatched: usize,
    pub failed: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub books: Vec<Book>,
    pub enrichment: EnrichmentReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub output_path: String,
    pub books_written: usize,
    pub unread: usize,
    pub skipped: Vec<SkippedRow>,
    pub enrichment: EnrichmentReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(isbn: &str) -> Book {
        Book {
            title: "Dune".to_string(),
            authors: vec!["Frank Herbert".to_string()],
            date_finished: "2020-12-25".to_string(),
            isbn: isbn.to_string(),
        }
    }

    #[test]
    fn test_empty_isbn_is_omitted_from_json() {
        let json = serde_json::to_value(book("")).unwrap();
        assert!(json.get("isbn").is_none());
        assert_eq!(json["title"], "Dune");
        assert_eq!(json["authors"], serde_json::json!(["Frank Herbert"]));
        assert_eq!(json["date_finished"], "2020-12-25");
    }

    #[test]
    fn test_present_isbn_is_serialized() {
        let json = serde_json::to_value(book("9780441013593")).unwrap();
        assert_eq!(json["isbn"], "9780441013593");
    }

    #[test]
    fn test_parse_report_records_outcomes() {
        let mut report = ParseReport::default();
        report.record(RowOutcome::Finished(book("")));
        report.record(RowOutcome::Unread);
        report.record(RowOutcome::Skipped(SkippedRow {
            line: 4,
            reason: "row too short".to_string(),
        }));

        assert_eq!(report.books.len(), 1);
        assert_eq!(report.unread, 1);
        assert_eq!(report.skipped[0].line, 4);
    }
}
