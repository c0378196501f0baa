//! Country name to flag emoji resolution.
//!
//! A flag emoji is the pair of Unicode regional indicator symbols for the
//! country's ISO 3166-1 alpha-2 code. Unknown names resolve to [`NO_FLAG`].

mod registry;

pub use isocountry::CountryCode;
pub use registry::lookup;

/// Neutral glyph used when a country cannot be resolved.
pub const NO_FLAG: &str = "🏳️";

/// Offset from an uppercase ASCII letter to its regional indicator symbol.
const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

/// Returns the flag glyph for a country name, alias, or code.
///
/// Never fails: anything that does not resolve yields [`NO_FLAG`].
#[must_use]
pub fn flag_for(country_name: &str) -> String {
    region_code(country_name)
        .and_then(flag_from_code)
        .unwrap_or_else(|| NO_FLAG.to_owned())
}

/// Resolves a country name to its alpha-2 region code.
#[must_use]
pub fn region_code(country_name: &str) -> Option<&'static str> {
    lookup(country_name).map(|code| code.alpha2())
}

/// Converts a two-letter region code into regional indicator symbols.
///
/// Returns `None` unless the code is exactly two ASCII letters.
#[must_use]
pub fn flag_from_code(code: &str) -> Option<String> {
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    code.chars()
        .map(|c| char::from_u32(REGIONAL_INDICATOR_OFFSET + u32::from(c.to_ascii_uppercase())))
        .collect()
}
