use crate::adapters::google_books::GoogleBooksCatalog;
use crate::core::enricher::CatalogEnricher;
use crate::core::parser::parse_export;
use crate::core::{Book, Catalog, ConfigProvider, ParseReport, Pipeline, Storage, TransformResult};
use crate::utils::error::Result;

/// Goodreads export → enriched JSON book list.
pub struct GoodreadsPipeline<S: Storage, C: ConfigProvider, K: Catalog = GoogleBooksCatalog> {
    storage: S,
    config: C,
    enricher: CatalogEnricher<K>,
}

impl<S: Storage, C: ConfigProvider> GoodreadsPipeline<S, C, GoogleBooksCatalog> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let catalog = GoogleBooksCatalog::from_config(&config)?;
        Ok(Self::with_catalog(storage, config, catalog))
    }
}

impl<S: Storage, C: ConfigProvider, K: Catalog> GoodreadsPipeline<S, C, K> {
    pub fn with_catalog(storage: S, config: C, catalog: K) -> Self {
        Self {
            storage,
            config,
            enricher: CatalogEnricher::new(catalog),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, K: Catalog> Pipeline for GoodreadsPipeline<S, C, K> {
    async fn extract(&self) -> Result<ParseReport> {
        tracing::info!("Reading export from {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;
        parse_export(data.as_slice())
    }

    async fn transform(&self, books: Vec<Book>) -> Result<TransformResult> {
        let (books, enrichment) = self.enricher.enrich(books).await;
        Ok(TransformResult { books, enrichment })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        // Encode fully before touching the output file.
        let json = serde_json::to_string_pretty(&result.books)?;
        self.storage
            .write_file(self.config.output_path(), json.as_bytes())
            .await?;

        tracing::info!(
            "Wrote {} books to {}",
            result.books.len(),
            self.config.output_path()
        );
        Ok(self.config.output_path().to_string())
    }
}
