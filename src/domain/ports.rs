use crate::domain::model::{Book, ParseReport, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn catalog_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

/// External book-metadata lookup.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Returns the ISBN-13 of the best match for `title` by `author`.
    ///
    /// `Ok(None)` means the catalog answered but had nothing usable; `Err`
    /// covers transport and decoding failures.
    async fn find_isbn13(&self, title: &str, author: &str) -> Result<Option<String>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ParseReport>;
    async fn transform(&self, books: Vec<Book>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
