use crate::utils::error::{ImportError, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "goodreads_import=debug,warn";

/// Routes all diagnostics for the process into `path`, truncating any
/// previous log. Must run before the first fallible pipeline step.
pub fn init_file_logger<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(|e| ImportError::LoggerError {
        message: format!("cannot create {}: {}", path.as_ref().display(), e),
    })?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(DEFAULT_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| ImportError::LoggerError {
            message: e.to_string(),
        })
}
