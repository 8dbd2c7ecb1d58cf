// src/domain/listing.rs

use serde_json::Value;

/// One apartment property as it appears in the source files.
/// Kept as a raw JSON tree so every field (and its order) survives the round trip.
pub type Listing = Value;

/// A listing paired with its lowest unit price. Only lives for one sampling pass.
pub type PricedListing = (u64, Listing);

pub const UNITS_FIELD: &str = "units";
pub const PRICE_FIELD: &str = "price";

/// The listing's unit records, if it has a non-empty `units` array.
pub fn units(listing: &Listing) -> Option<&[Value]> {
    listing
        .get(UNITS_FIELD)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .filter(|list| !list.is_empty())
}

/// Free-text price of a unit; missing or non-string values read as "".
pub fn unit_price_text(unit: &Value) -> &str {
    unit.get(PRICE_FIELD).and_then(Value::as_str).unwrap_or("")
}

/// Top-level string field, or "" when absent.
pub fn text_field<'a>(listing: &'a Listing, key: &str) -> &'a str {
    listing.get(key).and_then(Value::as_str).unwrap_or("")
}
