//! Coordinate normalization from localized bulletin notation to ASCII.
//!
//! Rewrites full-width digits, Japanese direction labels, and degree
//! punctuation into the ASCII `n<lat> e<lon>` token pair a map lookup
//! understands.

/// Ordered substitution table. Each entry is one sequential full-string
/// replace pass, so the order is load-bearing: full-width punctuation is
/// stripped before the direction labels are rewritten, and the labels
/// before the digit-by-digit pass. Kept as a slice rather than a map so
/// the pass order stays explicit.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("（", ""),
    ("度", ""),
    ("°", ""),
    ("、", ""),
    ("/", ""),
    ("）", ""),
    ("北緯", "n"),
    ("南緯", "s"),
    ("東経", " e"),
    ("西経", " w"),
    ("．", "."),
    ("０", "0"),
    ("１", "1"),
    ("２", "2"),
    ("３", "3"),
    ("４", "4"),
    ("５", "5"),
    ("６", "6"),
    ("７", "7"),
    ("８", "8"),
    ("９", "9"),
];

/// Rewrite localized coordinate notation into its ASCII form.
///
/// Total over arbitrary text: unrecognized glyphs pass through untouched,
/// already-ASCII input comes back unchanged, and no range or hemisphere
/// consistency checks are applied. Hemisphere letters in degree-symbol
/// notation keep their case, so `42.588°N` becomes `42.588N`.
pub fn normalize(text: &str) -> String {
    let mut out = text.to_string();
    for (token, replacement) in SUBSTITUTIONS {
        out = out.replace(token, replacement);
    }
    out
}
