use crate::core::{Catalog, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const ISBN_13: &str = "ISBN_13";

/// Google Books volume search.
pub struct GoogleBooksCatalog {
    client: Client,
    endpoint: String,
}

impl GoogleBooksCatalog {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.catalog_endpoint(), config.request_timeout())
    }

    /// `<endpoint>/volumes?q=intitle:<title>+inauthor:<author>`
    pub fn volumes_url(&self, title: &str, author: &str) -> String {
        format!(
            "{}/volumes?q=intitle:{}+inauthor:{}",
            self.endpoint,
            urlencoding::encode(title),
            urlencoding::encode(author)
        )
    }
}

#[async_trait]
impl Catalog for GoogleBooksCatalog {
    async fn find_isbn13(&self, title: &str, author: &str) -> Result<Option<String>> {
        let url = self.volumes_url(title, author);
        tracing::debug!("Querying catalog: {}", url);

        // The response is consumed (and its connection released) before
        // this returns.
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let volumes: VolumesResponse = response.json().await?;

        Ok(volumes.best_isbn13())
    }
}

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(rename = "totalItems", default)]
    total_items: u64,
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
struct Volume {
    #[serde(rename = "volumeInfo", default)]
    volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
struct VolumeInfo {
    #[serde(rename = "industryIdentifiers", default)]
    industry_identifiers: Vec<IndustryIdentifier>,
}

#[derive(Debug, Deserialize)]
struct IndustryIdentifier {
    #[serde(rename = "type")]
    kind: String,
    identifier: String,
}

impl VolumesResponse {
    /// First result only; no ranking against the query.
    fn best_isbn13(self) -> Option<String> {
        if self.total_items == 0 {
            return None;
        }

        self.items
            .into_iter()
            .next()?
            .volume_info
            .industry_identifiers
            .into_iter()
            .find(|id| id.kind == ISBN_13)
            .map(|id| id.identifier)
    }
}
