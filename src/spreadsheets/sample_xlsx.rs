use crate::domain::listing::{text_field, units, Listing};
use crate::errors::SampleError;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Writes one row per sampled listing, cheapest first. `prices[i]` belongs to `listings[i]`.
pub fn export_sample_xlsx(
    path: &Path,
    prices: &[u64],
    listings: &[Listing],
) -> Result<(), SampleError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    let headers = ["Min Price", "Building", "Address", "Units", "URL"];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                SampleError::Xlsx(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, (price, listing)) in prices.iter().zip(listings).enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_number(r, 0, *price as f64)
            .map_err(|e| SampleError::Xlsx(format!("Failed to write price: {}", e)))?;

        worksheet
            .write_string(r, 1, text_field(listing, "buildingName"))
            .map_err(|e| SampleError::Xlsx(format!("Failed to write building: {}", e)))?;

        worksheet
            .write_string(r, 2, text_field(listing, "address"))
            .map_err(|e| SampleError::Xlsx(format!("Failed to write address: {}", e)))?;

        let unit_count = units(listing).map_or(0, <[_]>::len);
        worksheet
            .write_number(r, 3, unit_count as f64)
            .map_err(|e| SampleError::Xlsx(format!("Failed to write unit count: {}", e)))?;

        worksheet
            .write_string(r, 4, text_field(listing, "detailUrl"))
            .map_err(|e| SampleError::Xlsx(format!("Failed to write url: {}", e)))?;
    }

    workbook
        .save(path)
        .map_err(|e| SampleError::Xlsx(format!("Failed to save workbook: {}", e)))
}
