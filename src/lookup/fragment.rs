//! The six-digit identifier fragment.

use std::fmt;

use super::LookupError;

/// Number of leading characters of a parameter that form a fragment.
pub const FRAGMENT_LEN: usize = 6;

/// The leading digits of a card number, as sent to the lookup source.
///
/// Always non-empty and made of ASCII digits only. Parameters longer than
/// [`FRAGMENT_LEN`] are truncated; shorter ones are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// Builds a fragment from a raw command parameter.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidInput`] if the parameter is empty or if
    /// its first six characters are not all ASCII digits.
    pub fn from_param(param: &str) -> Result<Self, LookupError> {
        let truncated: String = param.chars().take(FRAGMENT_LEN).collect();

        if truncated.is_empty() {
            return Err(LookupError::InvalidInput("empty BIN".to_owned()));
        }

        if let Some(bad) = truncated.chars().find(|c| !c.is_ascii_digit()) {
            return Err(LookupError::InvalidInput(format!(
                "'{truncated}' contains a non-digit character '{bad}'"
            )));
        }

        Ok(Self(truncated))
    }

    /// Returns the digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_to_six() {
        let fragment = Fragment::from_param("40000000000").unwrap();
        assert_eq!(fragment.as_str(), "400000");
    }

    #[test]
    fn test_short_param_is_not_padded() {
        let fragment = Fragment::from_param("4571").unwrap();
        assert_eq!(fragment.as_str(), "4571");
    }

    #[test]
    fn test_only_first_six_are_checked() {
        let fragment = Fragment::from_param("457179-xx").unwrap();
        assert_eq!(fragment.as_str(), "457179");
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(matches!(
            Fragment::from_param("45a179"),
            Err(LookupError::InvalidInput(_))
        ));
        assert!(matches!(
            Fragment::from_param("４５７１７９"),
            Err(LookupError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            Fragment::from_param(""),
            Err(LookupError::InvalidInput(_))
        ));
    }
}
