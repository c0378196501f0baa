//! Checksum filter followed by lookup and extraction.

use tracing::debug;

use super::{BinRecord, BinSource, Fragment, LookupError, extract_record, is_checksum_valid};

/// Reason attached to [`LookupError::InvalidInput`] when the checksum fails.
pub const CHECKSUM_FAILED: &str = "failed Luhn check";

/// Turns a raw parameter into a fragment that passed the checksum.
///
/// # Errors
///
/// Returns [`LookupError::InvalidInput`] for non-digit input or a failed
/// checksum.
pub fn checked_fragment(param: &str) -> Result<Fragment, LookupError> {
    let fragment = Fragment::from_param(param)?;

    if is_checksum_valid(fragment.as_str())? {
        Ok(fragment)
    } else {
        debug!("Fragment {} failed the checksum", fragment);
        Err(LookupError::InvalidInput(CHECKSUM_FAILED.to_owned()))
    }
}

/// Validates `param` and, only if it passes, looks it up.
///
/// The source is never contacted for input that fails validation.
pub async fn lookup_bin<S: BinSource>(source: &S, param: &str) -> Result<BinRecord, LookupError> {
    let fragment = checked_fragment(param)?;
    let html = source.fetch_record_html(&fragment).await?;
    extract_record(&fragment, &html)
}
