// src/domain/price.rs

use crate::domain::listing::{unit_price_text, units, Listing};

/// Lowest advertised price across a listing's units.
///
/// Each unit contributes the first `$`-prefixed amount in its price text
/// (`"$2,250+"` -> 2250). Units without one are skipped. Returns `None` when
/// the listing has no units or none of them carry a readable price.
pub fn extract_min_price(listing: &Listing) -> Option<u64> {
    units(listing)?
        .iter()
        .filter_map(|unit| parse_dollar_amount(unit_price_text(unit)))
        .min()
}

/// Finds the first `$` immediately followed by digits and `,` separators and
/// returns the amount as whole dollars. Anything after the digit run is ignored.
///
/// A `$` with no digits after it (nothing, or only separators) is not a match;
/// scanning resumes past it. A run too large for `u64` yields `None`.
pub fn parse_dollar_amount(text: &str) -> Option<u64> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'$') {
        let start = pos + offset + 1;
        let run = bytes[start..]
            .iter()
            .take_while(|&&b| b.is_ascii_digit() || b == b',')
            .count();

        let matched = &bytes[start..start + run];
        if matched.iter().any(u8::is_ascii_digit) {
            return parse_grouped_digits(&text[start..start + run]);
        }
        pos = start;
    }

    None
}

fn parse_grouped_digits(run: &str) -> Option<u64> {
    let digits: String = run.chars().filter(|c| *c != ',').collect();
    digits.parse().ok()
}
