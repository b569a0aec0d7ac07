pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::google_books::GoogleBooksCatalog;
pub use config::{local::LocalStorage, ImportConfig};
pub use crate::core::{etl::EtlEngine, pipeline::GoodreadsPipeline};
pub use domain::model::{Book, ImportSummary};
pub use utils::error::{ImportError, Result};
