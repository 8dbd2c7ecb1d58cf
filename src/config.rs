// src/config.rs
use crate::errors::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Neighbourhood exports sampled when nothing else is configured.
pub const DEFAULT_INPUT_FILES: [&str; 7] = [
    "allston.json",
    "back+bay.json",
    "brighton.json",
    "fenway-kenmore.json",
    "jamaica+plain.json",
    "somerville.json",
    "south+end.json",
];

pub const DEFAULT_SAMPLES_PER_FILE: usize = 15;
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_sample.json";
const XLSX_SUFFIX: &str = "_sample.xlsx";

/// Everything one run needs. Built once at startup, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplerConfig {
    /// Input files, processed in this order.
    pub input_files: Vec<PathBuf>,
    /// Target sample size per file.
    pub samples_per_file: usize,
    /// Appended to the input stem to name the output, e.g. "_sample.json".
    pub output_suffix: String,
    /// Write outputs here instead of next to each input.
    pub output_dir: Option<PathBuf>,
    /// Write `[]` for files where no listing had a price.
    pub write_empty: bool,
    /// Also export each sample as a spreadsheet.
    pub xlsx: bool,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            input_files: DEFAULT_INPUT_FILES.iter().map(PathBuf::from).collect(),
            samples_per_file: DEFAULT_SAMPLES_PER_FILE,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            output_dir: None,
            write_empty: false,
            xlsx: false,
        }
    }
}

impl SamplerConfig {
    /// Loads a JSON config file. Keys left out keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let cfg: SamplerConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_suffix.is_empty() {
            return Err(ConfigError::Invalid("output suffix must not be empty".into()));
        }

        let inputs: Vec<PathBuf> = self.input_files.iter().map(|p| resolve(p)).collect();
        let mut outputs: HashMap<PathBuf, &Path> = HashMap::new();

        for (input, resolved) in self.input_files.iter().zip(&inputs) {
            let output = resolve(&self.output_path_for(input));

            if inputs.contains(&output) {
                return Err(ConfigError::Invalid(format!(
                    "output for {} would overwrite an input file",
                    input.display()
                )));
            }

            match outputs.get(&output).copied() {
                // Same file listed twice writes the same sample twice.
                Some(first) if resolve(first) == *resolved => {}
                Some(first) => {
                    return Err(ConfigError::Invalid(format!(
                        "{} and {} would both write {}",
                        first.display(),
                        input.display(),
                        output.display()
                    )));
                }
                None => {
                    outputs.insert(output, input);
                }
            }
        }

        Ok(())
    }

    /// `<dir>/<stem><suffix>`, where `<dir>` is `output_dir` or the input's own directory.
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        self.sibling_path(input, &self.output_suffix)
    }

    /// Spreadsheet counterpart of [`output_path_for`](Self::output_path_for).
    pub fn xlsx_path_for(&self, input: &Path) -> PathBuf {
        self.sibling_path(input, XLSX_SUFFIX)
    }

    fn sibling_path(&self, input: &Path, suffix: &str) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = format!("{stem}{suffix}");

        match &self.output_dir {
            Some(dir) => dir.join(file_name),
            None => input.with_file_name(file_name),
        }
    }
}

/// Absolute, lexically normalized form of `path` (`.` dropped, `..` folded).
/// Works for files that do not exist yet, unlike `fs::canonicalize`.
fn resolve(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().map(|cwd| cwd.join(path)).unwrap_or_else(|_| path.to_path_buf())
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}
