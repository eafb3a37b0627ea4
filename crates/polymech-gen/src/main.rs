//! Mechanism dictionary generator binary.
//!
//! Loads a monomer pattern catalog (JSON mapping qualified keys to SMARTS
//! patterns), builds the full mechanism index, logs a per-category
//! summary, and writes the expanded dictionary as a JSON asset.

use polymech_core::{MechanismIndex, PatternCatalog};
use polymech_types::MechanismCategory;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CATALOG_PATH: &str = "monomer_structure_dict.json";
const DEFAULT_OUTPUT_PATH: &str = "mechanism_dictionary.json";

/// How many entries per category the summary prints before eliding.
const SUMMARY_SAMPLE: usize = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Paths from args, falling back to env, falling back to defaults
    let mut args = std::env::args().skip(1);
    let catalog_path = args
        .next()
        .or_else(|| std::env::var("POLYMECH_CATALOG").ok())
        .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());
    let output_path = args
        .next()
        .or_else(|| std::env::var("POLYMECH_OUTPUT").ok())
        .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    tracing::info!("Loading monomer pattern catalog from: {}", catalog_path);
    let catalog = PatternCatalog::from_file(&catalog_path)?;
    tracing::info!(
        "Loaded {} patterns across {} monomer classes",
        catalog.pattern_count(),
        catalog.class_count()
    );

    tracing::info!("Building mechanism index...");
    let index = MechanismIndex::from_catalog(&catalog)?;

    for category in MechanismCategory::ALL {
        let entries = index.entries(category);
        tracing::info!("{}: {} entries", category, entries.len());
        for entry in entries.iter().take(SUMMARY_SAMPLE) {
            tracing::info!("  - {}", entry);
        }
        if entries.len() > SUMMARY_SAMPLE {
            tracing::info!("  ... and {} more", entries.len() - SUMMARY_SAMPLE);
        }
    }
    tracing::info!(
        "Total entries: {}, resolvable monomer names: {}",
        index.entry_count(),
        index.monomer_count()
    );

    let json = index.to_json_pretty()?;
    std::fs::write(&output_path, json)?;
    tracing::info!("Wrote mechanism dictionary to: {}", output_path);

    Ok(())
}
