//! Map lookup URL construction for normalized coordinates.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Base URL of the map service epicenters are looked up on.
pub const MAPS_BASE_URL: &str = "https://maps.google.com/maps/place/";

/// Characters percent-encoded inside the place path segment.
const PLACE_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Build the map lookup URL for a normalized coordinate token pair.
///
/// The token is percent-encoded here, not by the caller. No validation
/// is applied: an empty or garbage token still yields a well-formed URL,
/// and guarding against a pointless lookup is the caller's job.
pub fn lookup_url(gps: &str) -> String {
    format!(
        "{}{}?hl=en",
        MAPS_BASE_URL,
        utf8_percent_encode(gps, PLACE_SEGMENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_url_encodes_spaces() {
        assert_eq!(
            lookup_url("n42.7 e141.9"),
            "https://maps.google.com/maps/place/n42.7%20e141.9?hl=en"
        );
    }

    #[test]
    fn test_lookup_url_empty_token() {
        assert_eq!(
            lookup_url(""),
            "https://maps.google.com/maps/place/?hl=en"
        );
    }

    #[test]
    fn test_lookup_url_encodes_non_ascii_garbage() {
        // a span the normalizer could not fully rewrite still travels
        let url = lookup_url("n42.7 e141.9度");
        assert!(url.starts_with(MAPS_BASE_URL));
        assert!(!url.contains('度'));
        assert!(url.contains("%E5%BA%A6"));
    }

    #[test]
    fn test_lookup_url_encodes_query_metacharacters() {
        let url = lookup_url("n42.7?e141.9");
        assert_eq!(
            url,
            "https://maps.google.com/maps/place/n42.7%3Fe141.9?hl=en"
        );
    }
}
