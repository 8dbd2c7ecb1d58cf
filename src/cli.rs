// src/cli.rs
use crate::config::SamplerConfig;
use crate::errors::ConfigError;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "apartment_sampler")]
#[command(about = "Price-stratified samples of apartment listing files", long_about = None)]
pub struct Cli {
    /// Listing files to sample (JSON arrays). Overrides the config file list.
    pub files: Vec<PathBuf>,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Listings to keep per file
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Output file suffix
    #[arg(long)]
    pub suffix: Option<String>,

    /// Write samples into this directory instead of next to the inputs
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Write an empty sample when a file has no priced listings
    #[arg(long)]
    pub write_empty: bool,

    /// Also export each sample as an .xlsx spreadsheet
    #[arg(long)]
    pub xlsx: bool,
}

impl Cli {
    /// Defaults, then the config file, then command-line flags.
    pub fn into_config(self) -> Result<SamplerConfig, ConfigError> {
        let mut cfg = match &self.config {
            Some(path) => SamplerConfig::from_file(path)?,
            None => SamplerConfig::default(),
        };

        if !self.files.is_empty() {
            cfg.input_files = self.files;
        }
        if let Some(n) = self.samples {
            cfg.samples_per_file = n;
        }
        if let Some(suffix) = self.suffix {
            cfg.output_suffix = suffix;
        }
        if self.output_dir.is_some() {
            cfg.output_dir = self.output_dir;
        }
        cfg.write_empty |= self.write_empty;
        cfg.xlsx |= self.xlsx;

        cfg.validate()?;
        Ok(cfg)
    }
}
