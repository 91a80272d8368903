//! Static region→timezone configuration.
//!
//! The upstream feed identifies markets by region label, not by IANA zone, so
//! the mapping lives here as plain data with an explicit UTC default.

use chrono_tz::Tz;

/// Exchange timezone per feed region label.
///
/// Lookup keys on the primary region (the portion before any `-` suffix), so
/// concatenated labels such as `"Canada - Toronto"` still resolve.
const REGION_TIMEZONES: &[(&str, Tz)] = &[
    ("United States", Tz::America__New_York),
    ("Canada", Tz::America__Toronto),
    ("United Kingdom", Tz::Europe__London),
    ("Germany", Tz::Europe__Berlin),
    ("France", Tz::Europe__Paris),
    ("Spain", Tz::Europe__Madrid),
    ("Portugal", Tz::Europe__Lisbon),
    ("Switzerland", Tz::Europe__Zurich),
    ("Japan", Tz::Asia__Tokyo),
    ("India", Tz::Asia__Kolkata),
    ("Mainland China", Tz::Asia__Shanghai),
    ("Hong Kong", Tz::Asia__Hong_Kong),
    ("South Korea", Tz::Asia__Seoul),
    ("Brazil", Tz::America__Sao_Paulo),
    ("Mexico", Tz::America__Mexico_City),
    ("South Africa", Tz::Africa__Johannesburg),
];

/// Resolve the exchange timezone for a feed region label.
///
/// Unmapped regions (including the feed's `"Global"` crypto/forex label) trade
/// in UTC.
pub fn region_timezone(region: &str) -> Tz {
    let primary = region.split('-').next().unwrap_or(region).trim();
    REGION_TIMEZONES
        .iter()
        .find(|(label, _)| *label == primary)
        .map(|(_, tz)| *tz)
        .unwrap_or(Tz::UTC)
}

/// All mapped regions, for capability listings.
pub fn known_regions() -> &'static [(&'static str, Tz)] {
    REGION_TIMEZONES
}

/// Detect the viewer's timezone from the host environment.
///
/// Falls back to UTC when the platform zone is unavailable or not an IANA
/// name chrono-tz knows.
pub fn viewer_timezone() -> Tz {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse().ok())
        .unwrap_or(Tz::UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_mapped_region() {
        assert_eq!(region_timezone("Japan"), Tz::Asia__Tokyo);
        assert_eq!(region_timezone("United States"), Tz::America__New_York);
    }

    #[test]
    fn resolves_concatenated_label_by_primary_region() {
        assert_eq!(region_timezone("Canada - Toronto"), Tz::America__Toronto);
    }

    #[test]
    fn unmapped_region_defaults_to_utc() {
        assert_eq!(region_timezone("Global"), Tz::UTC);
        assert_eq!(region_timezone(""), Tz::UTC);
    }
}
