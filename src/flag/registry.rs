//! ISO 3166-1 country registry with common spellings layered on top.

use std::collections::HashMap;

use isocountry::CountryCode;
use once_cell::sync::Lazy;
use tracing::warn;

/// Spellings seen in lookup results that differ from the ISO names,
/// mapped to their alpha-2 code.
const ALIASES: &[(&str, &str)] = &[
    ("United States", "US"),
    ("United States of America", "US"),
    ("United Kingdom", "GB"),
    ("Great Britain", "GB"),
    ("UK", "GB"),
    ("Russia", "RU"),
    ("Russian Federation", "RU"),
    ("Korea", "KR"),
    ("South Korea", "KR"),
    ("Republic of Korea", "KR"),
    ("Korea, Republic of", "KR"),
    ("North Korea", "KP"),
    ("Korea, Democratic People's Republic of", "KP"),
    ("Iran", "IR"),
    ("Iran, Islamic Republic of", "IR"),
    ("Syria", "SY"),
    ("Vietnam", "VN"),
    ("Viet Nam", "VN"),
    ("Laos", "LA"),
    ("Bolivia", "BO"),
    ("Bolivia, Plurinational State of", "BO"),
    ("Venezuela", "VE"),
    ("Venezuela, Bolivarian Republic of", "VE"),
    ("Tanzania", "TZ"),
    ("Tanzania, United Republic of", "TZ"),
    ("Moldova", "MD"),
    ("Moldova, Republic of", "MD"),
    ("Taiwan", "TW"),
    ("Taiwan, Province of China", "TW"),
    ("Czech Republic", "CZ"),
    ("Czechia", "CZ"),
    ("Macedonia", "MK"),
    ("North Macedonia", "MK"),
    ("Swaziland", "SZ"),
    ("Eswatini", "SZ"),
    ("Turkey", "TR"),
    ("Türkiye", "TR"),
    ("Cape Verde", "CV"),
    ("Cabo Verde", "CV"),
    ("Ivory Coast", "CI"),
    ("Cote d'Ivoire", "CI"),
    ("Côte d'Ivoire", "CI"),
    ("Aland Islands", "AX"),
    ("Curacao", "CW"),
    ("Reunion", "RE"),
    ("Saint Barthelemy", "BL"),
    ("Saint Martin", "MF"),
    ("Sint Maarten", "SX"),
    ("Caribbean Netherlands", "BQ"),
    ("Brunei", "BN"),
    ("Micronesia", "FM"),
    ("Palestine", "PS"),
    ("Palestine, State of", "PS"),
    ("Vatican", "VA"),
    ("Vatican City", "VA"),
    ("Holy See", "VA"),
    ("Democratic Republic of the Congo", "CD"),
    ("Congo, The Democratic Republic of the", "CD"),
    ("DR Congo", "CD"),
    ("Republic of the Congo", "CG"),
    ("Hong Kong", "HK"),
    ("Macau", "MO"),
    ("Macao", "MO"),
    ("Bosnia", "BA"),
    ("Bosnia & Herzegovina", "BA"),
    ("Trinidad & Tobago", "TT"),
    ("Antigua & Barbuda", "AG"),
    ("The Bahamas", "BS"),
    ("The Gambia", "GM"),
    ("The Netherlands", "NL"),
    ("Holland", "NL"),
    ("Libya", "LY"),
    ("Burma", "MM"),
    ("Myanmar", "MM"),
    ("East Timor", "TL"),
    ("Timor-Leste", "TL"),
    ("Falkland Islands", "FK"),
    ("British Virgin Islands", "VG"),
    ("Virgin Islands, British", "VG"),
    ("US Virgin Islands", "VI"),
    ("Virgin Islands, U.S.", "VI"),
    ("UAE", "AE"),
];

/// Normalized name, alias, or code → country.
static BY_KEY: Lazy<HashMap<String, CountryCode>> = Lazy::new(|| {
    let mut map = HashMap::new();

    for &code in CountryCode::iter() {
        map.insert(normalize(code.alpha2()), code);
        map.insert(normalize(code.alpha3()), code);
        map.insert(normalize(code.name()), code);
    }

    for &(spelling, alpha2) in ALIASES {
        match CountryCode::for_alpha2(alpha2) {
            Ok(code) => {
                map.insert(normalize(spelling), code);
            }
            Err(_) => warn!("Alias {:?} points at unknown code {}", spelling, alpha2),
        }
    }

    map
});

/// Lowercases, drops punctuation, and collapses whitespace.
pub(crate) fn normalize(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().next().unwrap_or(c)
            } else if c == '\'' || c == '’' {
                '\0'
            } else {
                ' '
            }
        })
        .filter(|&c| c != '\0')
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Looks up a country by name, alias, or alpha-2/alpha-3 code.
#[must_use]
pub fn lookup(query: &str) -> Option<CountryCode> {
    let key = normalize(query);
    if key.is_empty() {
        return None;
    }
    BY_KEY.get(&key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_target_known_codes() {
        for (spelling, alpha2) in ALIASES {
            assert!(CountryCode::for_alpha2(alpha2).is_ok(), "{spelling} -> {alpha2}");
        }
    }

    #[test]
    fn test_every_country_resolves_to_itself() {
        for &code in CountryCode::iter() {
            assert_eq!(lookup(code.name()), Some(code), "{}", code.name());
            assert_eq!(lookup(code.alpha3()), Some(code), "{}", code.alpha3());
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  UNITED   STATES "), "united states");
        assert_eq!(normalize("Korea, Republic of"), "korea republic of");
        assert_eq!(normalize("Côte d'Ivoire"), "côte divoire");
        assert_eq!(normalize("Guinea-Bissau"), "guinea bissau");
    }

    #[test]
    fn test_lookup_by_name_alias_and_code() {
        let alpha2 = |query: &str| lookup(query).map(|c| c.alpha2());
        assert_eq!(alpha2("France"), Some("FR"));
        assert_eq!(alpha2("FRANCE"), Some("FR"));
        assert_eq!(alpha2("fra"), Some("FR"));
        assert_eq!(alpha2("Russia"), Some("RU"));
        assert_eq!(alpha2("UNITED STATES OF AMERICA"), Some("US"));
        assert_eq!(alpha2("Korea, Republic of"), Some("KR"));
        assert_eq!(alpha2("korea republic of"), Some("KR"));
        assert_eq!(alpha2("Cote d'Ivoire"), Some("CI"));
        assert_eq!(alpha2("Swaziland"), Some("SZ"));
        assert_eq!(alpha2("Turkey"), Some("TR"));
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("Nowhereland").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("   ").is_none());
    }
}
