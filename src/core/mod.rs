pub mod enricher;
pub mod etl;
pub mod isbn;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{
    Book, EnrichmentReport, ImportSummary, ParseReport, RowOutcome, SkippedRow, TransformResult,
};
pub use crate::domain::ports::{Catalog, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
