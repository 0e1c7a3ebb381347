//! Static lookup tables driving the sanitizers.
//!
//! Order matters in [`DATE_FORMATS`]: the first pattern that matches wins,
//! so `01/02/2020` is read as month/day.

/// An exact date pattern: display form and the equivalent chrono format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    /// Pattern shape, `y`/`M`/`d` standing for one digit each.
    pub pattern: &'static str,
    pub chrono: &'static str,
}

pub const DATE_FORMATS: &[DateFormat] = &[
    DateFormat { pattern: "yyyy-MM-dd", chrono: "%Y-%m-%d" },
    DateFormat { pattern: "MM/dd/yyyy", chrono: "%m/%d/%Y" },
    DateFormat { pattern: "dd/MM/yyyy", chrono: "%d/%m/%Y" },
    DateFormat { pattern: "dd-MM-yyyy", chrono: "%d-%m-%Y" },
    DateFormat { pattern: "MM-dd-yyyy", chrono: "%m-%d-%Y" },
    DateFormat { pattern: "yyyy/MM/dd", chrono: "%Y/%m/%d" },
    DateFormat { pattern: "dd.MM.yyyy", chrono: "%d.%m.%Y" },
    DateFormat { pattern: "MM.dd.yyyy", chrono: "%m.%d.%Y" },
    DateFormat { pattern: "yyyy.MM.dd", chrono: "%Y.%m.%d" },
];

/// Date-time layouts accepted by the generic fallback parse.
pub const FALLBACK_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date layouts accepted by the generic fallback parse.
pub const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%A, %B %d, %Y",
];

/// Lower-case gender tokens and their canonical label.
pub const GENDER_SYNONYMS: &[(&str, &str)] = &[
    ("m", "Male"),
    ("male", "Male"),
    ("f", "Female"),
    ("female", "Female"),
    ("other", "Other"),
    ("non-binary", "Other"),
    ("nonbinary", "Other"),
    ("prefer not to say", "Prefer not to say"),
    ("unknown", "Prefer not to say"),
];

/// Lower-case tokens read as `true` by the boolean sanitizer.
pub const TRUE_TOKENS: &[&str] = &["true", "1", "yes", "y", "master", "primary"];

/// Canonical label for a lower-cased gender token.
pub fn canonical_gender(token: &str) -> Option<&'static str> {
    GENDER_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == token)
        .map(|(_, label)| *label)
}
