//! Resolved BIN record.

use serde::Serialize;

use super::Fragment;
use crate::flag::flag_for;

/// Issuer details scraped for a single fragment.
///
/// Only ever built with all five fields resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinRecord {
    /// The fragment this record was looked up for.
    pub bin: String,

    /// Issuing bank.
    pub issuer: String,

    /// Country of issue, as written by the source.
    pub territory: String,

    /// Card network (e.g. `VISA`).
    pub brand: String,

    /// Product tier (e.g. `CLASSIC`).
    pub tier: String,

    /// Product category (e.g. `DEBIT`).
    pub category: String,
}

impl BinRecord {
    pub(crate) fn new(fragment: &Fragment, fields: [String; 5]) -> Self {
        let [issuer, territory, brand, tier, category] = fields;
        Self {
            bin: fragment.as_str().to_owned(),
            issuer,
            territory,
            brand,
            tier,
            category,
        }
    }

    /// Flag glyph for the territory.
    #[must_use]
    pub fn flag(&self) -> String {
        flag_for(&self.territory)
    }
}
