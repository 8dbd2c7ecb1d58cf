// src/batch.rs
use crate::config::SamplerConfig;
use crate::domain::{extract_min_price, stratified_sample, Listing, PricedListing};
use crate::errors::SampleError;
use crate::spreadsheets::export_sample_xlsx;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What happened to a single input file that was read successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Sampled {
        output: PathBuf,
        records: usize,
        priced: usize,
        sampled: usize,
    },
    /// No listing in the file had a readable price. `output` is set only
    /// when the config asks for empty samples to be written.
    NoPricedListings {
        records: usize,
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub empty: usize,
    pub skipped: usize,
}

/// Reads a file that must hold a top-level JSON array of listings.
pub fn load_listings(path: &Path) -> Result<Vec<Listing>, SampleError> {
    if !path.exists() {
        return Err(SampleError::MissingFile(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path).map_err(|source| SampleError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let data: Value = serde_json::from_str(&raw).map_err(|source| SampleError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })?;

    match data {
        Value::Array(listings) => Ok(listings),
        _ => Err(SampleError::NotAnArray(path.to_path_buf())),
    }
}

/// Pairs every listing that has a price with that price; the rest are dropped.
pub fn price_listings(listings: Vec<Listing>) -> Vec<PricedListing> {
    listings
        .into_iter()
        .filter_map(|listing| extract_min_price(&listing).map(|price| (price, listing)))
        .collect()
}

/// Pretty-printed JSON array, two-space indent, non-ASCII left as-is.
/// Creates the parent directory if it does not exist yet.
pub fn write_sample(path: &Path, sample: &[Listing]) -> Result<(), SampleError> {
    let json = serde_json::to_string_pretty(sample)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| SampleError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, json).map_err(|source| SampleError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load, price, sample and write one file.
pub fn process_file(cfg: &SamplerConfig, path: &Path) -> Result<FileOutcome, SampleError> {
    let listings = load_listings(path)?;
    let records = listings.len();
    info!("📂 Processing {} ({records} listings)", path.display());

    let priced = price_listings(listings);
    let priced_count = priced.len();

    if priced.is_empty() {
        warn!("⚠️ No priced listings in {}", path.display());

        let output = if cfg.write_empty {
            let output = cfg.output_path_for(path);
            write_sample(&output, &[])?;
            Some(output)
        } else {
            None
        };

        return Ok(FileOutcome::NoPricedListings { records, output });
    }

    // Prices are needed again for the spreadsheet, so keep them on the sampled items.
    let sample = stratified_sample(
        priced.into_iter().map(|(price, l)| (price, (price, l))).collect(),
        cfg.samples_per_file,
    );
    let (prices, listings): (Vec<u64>, Vec<Listing>) = sample.into_iter().unzip();

    let output = cfg.output_path_for(path);
    write_sample(&output, &listings)?;

    if cfg.xlsx {
        let xlsx_path = cfg.xlsx_path_for(path);
        match export_sample_xlsx(&xlsx_path, &prices, &listings) {
            Ok(()) => info!("📊 Spreadsheet written to {}", xlsx_path.display()),
            Err(e) => warn!("⚠️ Spreadsheet for {} failed: {e}", path.display()),
        }
    }

    Ok(FileOutcome::Sampled {
        output,
        records,
        priced: priced_count,
        sampled: listings.len(),
    })
}

/// Runs every configured file in order. A failing file is reported and skipped.
pub fn run_batch(cfg: &SamplerConfig) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for path in &cfg.input_files {
        match process_file(cfg, path) {
            Ok(FileOutcome::Sampled { output, records, priced, sampled }) => {
                info!(
                    "✅ Wrote {} ({sampled} sampled from {priced} priced of {records} listings)",
                    output.display()
                );
                summary.written += 1;
            }
            Ok(FileOutcome::NoPricedListings { records, output }) => {
                match output {
                    Some(output) => info!("Wrote empty sample {}", output.display()),
                    None => info!("⏭️ No sample for {} ({records} listings)", path.display()),
                }
                summary.empty += 1;
            }
            Err(e @ SampleError::MissingFile(_)) => {
                warn!("❌ {e}");
                summary.skipped += 1;
            }
            Err(e) => {
                warn!("❌ Skipping {}: {e}", path.display());
                summary.skipped += 1;
            }
        }
    }

    info!(
        written = summary.written,
        empty = summary.empty,
        skipped = summary.skipped,
        "🎉 Sampling complete"
    );

    summary
}
