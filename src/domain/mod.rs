pub mod listing;
pub mod price;
pub mod sampling;

pub use listing::{Listing, PricedListing};
pub use price::{extract_min_price, parse_dollar_amount};
pub use sampling::{sample_indices, stratified_sample};
