use crate::config::SamplerConfig;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Listing whose units carry the given price strings.
pub fn listing_with_prices(name: &str, prices: &[&str]) -> Value {
    let units: Vec<Value> = prices.iter().map(|p| json!({ "price": p, "beds": "1" })).collect();
    json!({ "buildingName": name, "address": format!("{name} St, Boston, MA"), "units": units })
}

/// Writes `value` as JSON into `dir/name` and returns the path.
pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Config sampling exactly `files`, `n` per file.
pub fn config_for(files: Vec<PathBuf>, n: usize) -> SamplerConfig {
    SamplerConfig {
        input_files: files,
        samples_per_file: n,
        ..SamplerConfig::default()
    }
}
