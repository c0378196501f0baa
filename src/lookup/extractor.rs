//! Sequential field extraction from the lookup source's HTML.
//!
//! The source answers with a plain HTML table, not a structured format.
//! Fields are pulled out one at a time, and every field after the first is
//! located by searching for a cell whose content equals the field resolved
//! just before it:
//!
//! 1. `Label("Bank")` → issuer
//! 2. `Cell(issuer)` → territory
//! 3. `Cell(territory)` → brand
//! 4. `Cell(brand)` → tier
//! 5. `Cell(tier)` → category
//!
//! [`Extraction`] walks that chain one transition at a time. Any failed
//! transition ends the walk; there is no partial record.

use std::fmt;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use super::{BinRecord, Fragment, LookupError};

/// Label cell that precedes the first data row.
pub const ISSUER_LABEL: &str = "Bank";

/// Header labels the source uses in its result table.
///
/// A field equal to one of these is an anchor that would point back into the
/// header row.
pub const HEADER_LABELS: &[&str] = &["Bin", "Bank", "Country", "Vendor", "Brand", "Type", "Level"];

/// Fields of a record, in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Issuer,
    Territory,
    Brand,
    Tier,
    Category,
}

impl Stage {
    /// All stages in the order they are resolved.
    pub const ORDER: [Self; 5] = [
        Self::Issuer,
        Self::Territory,
        Self::Brand,
        Self::Tier,
        Self::Category,
    ];

    /// Returns the field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Issuer => "issuer",
            Self::Territory => "territory",
            Self::Brand => "brand",
            Self::Tier => "tier",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the next search is anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor<'a> {
    /// A fixed header label followed by the start of a data row.
    Label(&'static str),

    /// A cell holding exactly this text.
    Cell(&'a str),
}

impl Anchor<'_> {
    fn pattern(self) -> Result<Regex, regex::Error> {
        let source = match self {
            Self::Label(label) => {
                format!("<td>{}</td></tr><tr><td>(.*?)</td>", regex::escape(label))
            }
            Self::Cell(text) => format!("<td>{}</td><td>(.*?)</td>", regex::escape(text)),
        };
        Regex::new(&source)
    }
}

/// Why a single transition could not resolve its field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractFailure {
    #[error("{stage}: anchor not found in document")]
    AnchorMissing { stage: Stage },

    #[error("{stage}: extracted value is empty")]
    EmptyValue { stage: Stage },

    #[error("{stage}: value '{value}' contains markup")]
    Markup { stage: Stage, value: String },

    #[error("{stage}: value '{value}' is a table label")]
    HeaderLabel { stage: Stage, value: String },

    #[error("{stage}: could not build anchor pattern: {reason}")]
    Pattern { stage: Stage, reason: String },
}

impl ExtractFailure {
    /// The stage that failed.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::AnchorMissing { stage }
            | Self::EmptyValue { stage }
            | Self::Markup { stage, .. }
            | Self::HeaderLabel { stage, .. }
            | Self::Pattern { stage, .. } => *stage,
        }
    }
}

/// Walk over one document, resolving one field per transition.
#[derive(Debug, Clone)]
pub struct Extraction<'h> {
    html: &'h str,
    resolved: Vec<String>,
}

impl<'h> Extraction<'h> {
    /// Starts a walk with no field resolved.
    #[must_use]
    pub fn new(html: &'h str) -> Self {
        Self {
            html,
            resolved: Vec::with_capacity(Stage::ORDER.len()),
        }
    }

    /// Fields resolved so far, in order.
    #[must_use]
    pub fn resolved(&self) -> &[String] {
        &self.resolved
    }

    /// The stage the next transition resolves, or `None` when complete.
    #[must_use]
    pub fn next_stage(&self) -> Option<Stage> {
        Stage::ORDER.get(self.resolved.len()).copied()
    }

    /// Anchor for the next transition, or `None` when complete.
    #[must_use]
    pub fn anchor(&self) -> Option<Anchor<'_>> {
        self.next_stage()?;
        Some(
            self.resolved
                .last()
                .map_or(Anchor::Label(ISSUER_LABEL), |previous| {
                    Anchor::Cell(previous.as_str())
                }),
        )
    }

    /// Resolves the next field.
    ///
    /// Returns the stage that was resolved, or `Ok(None)` if every field is
    /// already resolved.
    pub fn advance(&mut self) -> Result<Option<Stage>, ExtractFailure> {
        let (Some(stage), Some(anchor)) = (self.next_stage(), self.anchor()) else {
            return Ok(None);
        };

        let pattern = anchor.pattern().map_err(|e| ExtractFailure::Pattern {
            stage,
            reason: e.to_string(),
        })?;

        let value = pattern
            .captures(self.html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_owned())
            .ok_or(ExtractFailure::AnchorMissing { stage })?;

        check_value(stage, &value)?;

        self.resolved.push(value);
        Ok(Some(stage))
    }

    /// Runs every remaining transition and builds the record.
    pub fn run(mut self, fragment: &Fragment) -> Result<BinRecord, ExtractFailure> {
        while self.advance()?.is_some() {}

        let fields: [String; 5] = self.resolved.try_into().map_err(|_| {
            ExtractFailure::AnchorMissing {
                stage: Stage::Category,
            }
        })?;

        Ok(BinRecord::new(fragment, fields))
    }
}

/// Rejects values that cannot serve as a literal anchor for the next search.
fn check_value(stage: Stage, value: &str) -> Result<(), ExtractFailure> {
    if value.is_empty() {
        return Err(ExtractFailure::EmptyValue { stage });
    }

    if value.contains(['<', '>']) {
        return Err(ExtractFailure::Markup {
            stage,
            value: value.to_owned(),
        });
    }

    if HEADER_LABELS
        .iter()
        .any(|label| label.eq_ignore_ascii_case(value))
    {
        return Err(ExtractFailure::HeaderLabel {
            stage,
            value: value.to_owned(),
        });
    }

    Ok(())
}

/// Extracts the full record for `fragment` from the raw lookup response.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] if any transition fails.
pub fn extract_record(fragment: &Fragment, raw_html: &str) -> Result<BinRecord, LookupError> {
    Extraction::new(raw_html).run(fragment).map_err(|failure| {
        debug!("Extraction for {} stopped at {}", fragment, failure);
        LookupError::NotFound
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "<tr><td>Brand</td><td>Level</td><td>Type</td><td>Country</td><td>Bank</td></tr>";

    fn page(row: &str) -> String {
        format!("<html><body><table>{HEADER}<tr>{row}</tr></table></body></html>")
    }

    fn fragment() -> Fragment {
        Fragment::from_param("457179").unwrap()
    }

    fn full_page() -> String {
        page(
            "<td>BNP PARIBAS</td><td>France</td><td>VISA</td><td>CLASSIC</td><td>DEBIT</td>",
        )
    }

    #[test]
    fn test_extracts_full_record() {
        let record = extract_record(&fragment(), &full_page()).unwrap();
        assert_eq!(record.bin, "457179");
        assert_eq!(record.issuer, "BNP PARIBAS");
        assert_eq!(record.territory, "France");
        assert_eq!(record.brand, "VISA");
        assert_eq!(record.tier, "CLASSIC");
        assert_eq!(record.category, "DEBIT");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let html = full_page();
        assert_eq!(
            extract_record(&fragment(), &html),
            extract_record(&fragment(), &html)
        );

        let broken = page("<td>BNP PARIBAS</td>");
        assert_eq!(
            extract_record(&fragment(), &broken),
            extract_record(&fragment(), &broken)
        );
    }

    #[test]
    fn test_transitions_step_by_step() {
        let html = full_page();
        let mut extraction = Extraction::new(&html);

        assert_eq!(extraction.anchor(), Some(Anchor::Label("Bank")));
        assert_eq!(extraction.advance(), Ok(Some(Stage::Issuer)));
        assert_eq!(extraction.anchor(), Some(Anchor::Cell("BNP PARIBAS")));
        assert_eq!(extraction.advance(), Ok(Some(Stage::Territory)));
        assert_eq!(extraction.anchor(), Some(Anchor::Cell("France")));
        assert_eq!(extraction.advance(), Ok(Some(Stage::Brand)));
        assert_eq!(extraction.advance(), Ok(Some(Stage::Tier)));
        assert_eq!(extraction.advance(), Ok(Some(Stage::Category)));

        assert_eq!(extraction.next_stage(), None);
        assert_eq!(extraction.anchor(), None);
        assert_eq!(extraction.advance(), Ok(None));
        assert_eq!(extraction.resolved().len(), 5);
    }

    #[test]
    fn test_missing_label_is_not_found() {
        let html = "<html><body>No results</body></html>";
        assert_eq!(
            Extraction::new(html).advance(),
            Err(ExtractFailure::AnchorMissing {
                stage: Stage::Issuer
            })
        );
        assert_eq!(
            extract_record(&fragment(), html),
            Err(LookupError::NotFound)
        );
    }

    #[test]
    fn test_broken_chain_mid_way_is_not_found() {
        let html = page("<td>BNP PARIBAS</td><td>France</td><td>VISA</td>");
        let mut extraction = Extraction::new(&html);
        assert_eq!(extraction.advance(), Ok(Some(Stage::Issuer)));
        assert_eq!(extraction.advance(), Ok(Some(Stage::Territory)));
        assert_eq!(extraction.advance(), Ok(Some(Stage::Brand)));
        assert_eq!(
            extraction.advance(),
            Err(ExtractFailure::AnchorMissing { stage: Stage::Tier })
        );

        assert_eq!(
            extract_record(&fragment(), &html),
            Err(LookupError::NotFound)
        );
    }

    #[test]
    fn test_empty_issuer_is_not_found() {
        let html = page("<td>   </td><td>France</td><td>VISA</td><td>CLASSIC</td><td>DEBIT</td>");
        assert_eq!(
            Extraction::new(&html).advance(),
            Err(ExtractFailure::EmptyValue {
                stage: Stage::Issuer
            })
        );
        assert_eq!(
            extract_record(&fragment(), &html),
            Err(LookupError::NotFound)
        );
    }

    #[test]
    fn test_issuer_equal_to_label_is_not_found() {
        let html = page("<td>Country</td><td>France</td><td>VISA</td><td>CLASSIC</td><td>DEBIT</td>");
        let failure = Extraction::new(&html).advance().unwrap_err();
        assert_eq!(failure.stage(), Stage::Issuer);
        assert!(matches!(failure, ExtractFailure::HeaderLabel { .. }));
        assert_eq!(
            extract_record(&fragment(), &html),
            Err(LookupError::NotFound)
        );
    }

    #[test]
    fn test_markup_in_value_is_not_found() {
        let html = page("<td><b>BNP</b></td><td>France</td><td>VISA</td><td>CLASSIC</td><td>DEBIT</td>");
        let failure = Extraction::new(&html).advance().unwrap_err();
        assert!(matches!(failure, ExtractFailure::Markup { .. }));
        assert_eq!(
            extract_record(&fragment(), &html),
            Err(LookupError::NotFound)
        );
    }

    #[test]
    fn test_values_are_trimmed() {
        let html = page(
            "<td> BNP PARIBAS </td><td>BNP PARIBAS</td><td>  France </td><td>France</td><td>VISA</td><td>CLASSIC</td><td>DEBIT</td>",
        );
        let mut extraction = Extraction::new(&html);
        extraction.advance().unwrap();
        assert_eq!(extraction.resolved(), ["BNP PARIBAS"]);
        extraction.advance().unwrap();
        assert_eq!(extraction.resolved()[1], "France");
    }

    #[test]
    fn test_padded_anchor_cell_breaks_chain() {
        // The trimmed issuer no longer equals the padded cell it came from.
        let html = page("<td> BNP PARIBAS </td><td>France</td><td>VISA</td><td>CLASSIC</td><td>DEBIT</td>");
        assert_eq!(
            extract_record(&fragment(), &html),
            Err(LookupError::NotFound)
        );
    }

    #[test]
    fn test_anchor_text_is_literal() {
        let html = page(
            "<td>BANK (EUROPE) S.A.+</td><td>Luxembourg</td><td>MASTERCARD</td><td>WORLD</td><td>CREDIT</td>",
        );
        let record = extract_record(&fragment(), &html).unwrap();
        assert_eq!(record.issuer, "BANK (EUROPE) S.A.+");
        assert_eq!(record.territory, "Luxembourg");
        assert_eq!(record.category, "CREDIT");
    }

    #[test]
    fn test_values_do_not_span_lines() {
        let html = page("<td>BNP\nPARIBAS</td><td>France</td><td>VISA</td><td>CLASSIC</td><td>DEBIT</td>");
        assert_eq!(
            extract_record(&fragment(), &html),
            Err(LookupError::NotFound)
        );
    }
}
