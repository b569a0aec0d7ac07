use goodreads_import::utils::{logger, validation::Validate};
use goodreads_import::{EtlEngine, GoodreadsPipeline, ImportConfig, LocalStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = ImportConfig::default();

    // Logging first, so every later failure ends up in the log file.
    if let Err(e) = logger::init_file_logger(&config.log_path) {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    tracing::info!("Starting goodreads-import");
    tracing::debug!("Config: {:?}", config);

    match run(config).await {
        Ok(summary) => {
            for row in &summary.skipped {
                tracing::warn!("Skipped line {}: {}", row.line, row.reason);
            }
            println!("✅ Import completed successfully!");
            println!(
                "📚 {} books saved to {} ({} ISBNs filled from the catalog, {} rows skipped)",
                summary.books_written,
                summary.output_path,
                summary.enrichment.filled,
                summary.skipped.len()
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Import failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}

async fn run(config: ImportConfig) -> goodreads_import::Result<goodreads_import::ImportSummary> {
    config.validate()?;

    let storage = LocalStorage::new(".");
    let pipeline = GoodreadsPipeline::new(storage, config)?;
    EtlEngine::new(pipeline).run().await
}
