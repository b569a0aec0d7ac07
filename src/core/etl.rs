use crate::core::{ImportSummary, ParseReport, Pipeline};
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load once, in order. The first fatal
    /// error stops the run before anything is written.
    pub async fn run(&self) -> Result<ImportSummary> {
        let started = Instant::now();
        tracing::info!("Starting import");

        // Extract
        let ParseReport {
            books,
            unread,
            skipped,
        } = self.pipeline.extract().await?;
        tracing::info!(
            "Extracted {} finished books ({} unread, {} skipped)",
            books.len(),
            unread,
            skipped.len()
        );

        // Transform
        let transformed = self.pipeline.transform(books).await?;
        let enrichment = transformed.enrichment;
        let books_written = transformed.books.len();

        // Load
        let output_path = self.pipeline.load(transformed).await?;
        tracing::info!(
            "Import finished in {:?}: {} books saved to {}",
            started.elapsed(),
            books_written,
            output_path
        );

        Ok(ImportSummary {
            output_path,
            books_written,
            unread,
            skipped,
            enrichment,
        })
    }
}
