use crate::core::Catalog;
use crate::domain::model::{Book, EnrichmentReport};

/// Fills in missing ISBNs from a [`Catalog`], one lookup at a time.
pub struct CatalogEnricher<K: Catalog> {
    catalog: K,
}

impl<K: Catalog> CatalogEnricher<K> {
    pub fn new(catalog: K) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &K {
        &self.catalog
    }

    /// Books that already carry an ISBN are passed through without a lookup.
    /// A failed or empty lookup leaves the ISBN blank and moves on.
    pub async fn enrich(&self, mut books: Vec<Book>) -> (Vec<Book>, EnrichmentReport) {
        let mut report = EnrichmentReport::default();

        for book in books.iter_mut() {
            if book.has_isbn() {
                report.already_present += 1;
                continue;
            }

            report.looked_up += 1;
            match self
                .catalog
                .find_isbn13(&book.title, book.primary_author())
                .await
            {
                Ok(Some(isbn)) => {
                    tracing::debug!("Found ISBN {} for '{}'", isbn, book.title);
                    book.isbn = isbn;
                    report.filled += 1;
                }
                Ok(None) => {
                    tracing::debug!("No ISBN-13 match for '{}'", book.title);
                    report.unmatched += 1;
                }
                Err(e) => {
                    tracing::debug!("Lookup for '{}' failed: {}", book.title, e);
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            "Enrichment: {} looked up, {} filled, {} unmatched, {} failed, {} already had an ISBN",
            report.looked_up,
            report.filled,
            report.unmatched,
            report.failed,
            report.already_present
        );
        (books, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{ImportError, Result};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replays canned answers and records every query it receives.
    struct FakeCatalog {
        answers: Mutex<Vec<Result<Option<String>>>>,
        queries: Mutex<Vec<(String, String)>>,
    }

    impl FakeCatalog {
        fn new(answers: Vec<Result<Option<String>>>) -> Self {
            Self {
                answers: Mutex::new(answers.into_iter().rev().collect()),
                queries: Mutex::new(Vec::new()),
            }
        }

        fn queries(&self) -> Vec<(String, String)> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Catalog for FakeCatalog {
        async fn find_isbn13(&self, title: &str, author: &str) -> Result<Option<String>> {
            self.queries
                .lock()
                .unwrap()
                .push((title.to_string(), author.to_string()));
            self.answers.lock().unwrap().pop().unwrap_or(Ok(None))
        }
    }

    fn book(title: &str, authors: &[&str], isbn: &str) -> Book {
        Book {
            title: title.to_string(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            date_finished: "2021-01-01".to_string(),
            isbn: isbn.to_string(),
        }
    }

    #[tokio::test]
    async fn test_books_with_isbn_are_not_looked_up() {
        let enricher = CatalogEnricher::new(FakeCatalog::new(vec![]));
        let books = vec![book("Dune", &["Frank Herbert"], "9780441013593")];

        let (books, report) = enricher.enrich(books).await;

        assert!(enricher.catalog().queries().is_empty());
        assert_eq!(books[0].isbn, "9780441013593");
        assert_eq!(report.already_present, 1);
        assert_eq!(report.looked_up, 0);
    }

    #[tokio::test]
    async fn test_queries_use_title_and_first_author() {
        let enricher = CatalogEnricher::new(FakeCatalog::new(vec![Ok(Some(
            "9780062225672".to_string(),
        ))]));
        let books = vec![book("Good Omens", &["Terry Pratchett", "Neil Gaiman"], "")];

        let (books, report) = enricher.enrich(books).await;

        assert_eq!(
            enricher.catalog().queries(),
            vec![("Good Omens".to_string(), "Terry Pratchett".to_string())]
        );
        assert_eq!(books[0].isbn, "9780062225672");
        assert_eq!(report.filled, 1);
    }

    #[tokio::test]
    async fn test_failures_are_skipped_and_processing_continues() {
        let enricher = CatalogEnricher::new(FakeCatalog::new(vec![
            Err(ImportError::IoError(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
            Ok(None),
            Ok(Some("9781234567897".to_string())),
        ]));
        let books = vec![
            book("First", &["A"], ""),
            book("Second", &["B"], ""),
            book("Known", &["C"], "9780000000002"),
            book("Third", &["D"], ""),
        ];

        let (books, report) = enricher.enrich(books).await;

        let titles: Vec<String> = enricher
            .catalog()
            .queries()
            .into_iter()
            .map(|(title, _)| title)
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
        assert_eq!(books[0].isbn, "");
        assert_eq!(books[1].isbn, "");
        assert_eq!(books[2].isbn, "9780000000002");
        assert_eq!(books[3].isbn, "9781234567897");
        assert_eq!(
            report,
            EnrichmentReport {
                already_present: 1,
                looked_up: 3,
                filled: 1,
                unmatched: 1,
                failed: 1,
            }
        );
    }
}
