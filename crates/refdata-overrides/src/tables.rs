//! Static override data.
//!
//! These lists are maintained by hand. Keep entries sorted within each
//! table; codes are compared case-insensitively when loaded.

// =========================================================================
// Countries
// =========================================================================

/// Countries excluded from every output. Two-letter codes are listed so
/// CLDR territories can be rejected before resolution.
pub const UNSUPPORTED_COUNTRY_CODES: &[&str] = &[
    "AF", "AFG", // Afghanistan
    "AO", "AGO", // Angola
    "AQ", "ATA", // Antarctica
    "BI", "BDI", // Burundi
    "BV", "BVT", // Bouvet Island
    "BY", "BLR", // Belarus
    "CC", "CCK", // Cocos (Keeling) Islands
    "CD", "COD", // Democratic Republic of the Congo
    "CU", "CUB", // Cuba
    "CX", "CXR", // Christmas Island
    "ER", "ERI", // Eritrea
    "FO", "FRO", // Faroe Islands
    "GS", "SGS", // South Georgia
    "HM", "HMD", // Heard Island and McDonald Islands
    "IO", "IOT", // British Indian Ocean Territory
    "IQ", "IRQ", // Iraq
    "IR", "IRN", // Iran
    "LR", "LBR", // Liberia
    "MG", "MDG", // Madagascar
    "MK", "MKD", // North Macedonia
    "MM", "MMR", // Myanmar
    "MZ", "MOZ", // Mozambique
    "PS", "PSE", // Palestine
    "SD", "SDN", // Sudan
    "SR", "SUR", // Suriname
    "SS", "SSD", // South Sudan
    "SY", "SYR", // Syria
    "TF", "ATF", // French Southern Territories
    "TJ", "TJK", // Tajikistan
    "TM", "TKM", // Turkmenistan
    "UM", "UMI", // US Minor Outlying Islands
    "ZW", "ZWE", // Zimbabwe
];

/// Replacements for official English names, applied by exact match.
pub const COUNTRY_NAME_OVERRIDES: &[(&str, &str)] = &[
    ("Bolivia (Plurinational State of)", "Bolivia"),
    ("China, Hong Kong Special Administrative Region", "Hong Kong"),
    ("China, Macao Special Administrative Region", "Macao"),
    ("Democratic People's Republic of Korea", "North Korea"),
    ("Lao People's Democratic Republic", "Laos"),
    ("Micronesia (Federated States of)", "Micronesia"),
    ("Netherlands (Kingdom of the)", "Netherlands"),
    ("Republic of Korea", "South Korea"),
    ("Republic of Moldova", "Moldova"),
    ("Russian Federation", "Russia"),
    ("United Kingdom of Great Britain and Northern Ireland", "United Kingdom"),
    ("United Republic of Tanzania", "Tanzania"),
    ("United States", "United States of America"),
    ("Venezuela (Bolivarian Republic of)", "Venezuela"),
    ("Viet Nam", "Vietnam"),
];

/// Countries that use the imperial system; every other country is metric.
pub const IMPERIAL_COUNTRY_CODES: &[&str] = &["LBR", "MMR", "USA"];

// =========================================================================
// Currencies
// =========================================================================

pub const UNSUPPORTED_CURRENCY_CODES: &[&str] = &[
    "AFN", "AOA", "BIF", "BYR", "CUP", "ERN", "IQD", "IRR", "KPW", "LRD", "MGA", "MKD", "MMK",
    "MZN", "SDG", "SRD", "SSP", "SYP", "TJS", "TMT", "ZWL",
];

/// Unsupported or retired codes and the supported currency that replaces
/// them wherever a country references them.
pub const CURRENCY_REMAPS: &[(&str, &str)] = &[
    ("AFN", "USD"),
    ("AOA", "USD"),
    ("BIF", "USD"),
    ("BYR", "USD"),
    ("CUP", "USD"),
    ("EEK", "EUR"),
    ("ERN", "USD"),
    ("HRK", "EUR"),
    ("IQD", "USD"),
    ("IRR", "USD"),
    ("KPW", "USD"),
    ("LRD", "USD"),
    ("LTL", "EUR"),
    ("LVL", "EUR"),
    ("MGA", "USD"),
    ("MKD", "EUR"),
    ("MMK", "USD"),
    ("MRO", "MRU"),
    ("MZN", "USD"),
    ("SDG", "USD"),
    ("SRD", "USD"),
    ("SSP", "USD"),
    ("STD", "STN"),
    ("SYP", "USD"),
    ("TJS", "USD"),
    ("TMT", "USD"),
    ("VEF", "VES"),
    ("ZWL", "USD"),
];

/// Composite currency fields with a fixed winner. Keys list the codes in
/// alphabetical order. In a shared-currency arrangement the smaller
/// partner's own currency wins.
pub const COMPOSITE_CURRENCY_PRECEDENCE: &[(&str, &str)] = &[
    ("BTN,INR", "BTN"),
    ("CUC,CUP", "CUP"),
    ("HTG,USD", "HTG"),
    ("LSL,ZAR", "LSL"),
    ("NAD,ZAR", "NAD"),
    ("PAB,USD", "PAB"),
    ("SZL,ZAR", "SZL"),
];

/// Fund and accounting codes that never win a composite field.
pub const SECONDARY_CURRENCY_CODES: &[&str] = &[
    "BOV", "CHE", "CHW", "CLF", "COU", "CUC", "MXV", "USN", "UYI", "UYW", "XSU", "XUA",
];

/// Countries whose source currency field is blank but do have a currency.
pub const BLANK_CURRENCY_EXCEPTIONS: &[(&str, &str)] = &[
    ("ALA", "EUR"),
    ("CZE", "CZK"),
    ("ESH", "MAD"),
    ("TWN", "TWD"),
    ("XKX", "EUR"),
];

// =========================================================================
// Locales
// =========================================================================

/// CLDR territories that do not match a canonical country code.
pub const TERRITORY_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("EA", "ES"),
    ("IC", "ES"),
    ("UK", "GB"),
    ("XK", "XKX"),
];

/// CLDR language tags standing in for a primary ISO 639-1 code.
pub const LANGUAGE_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("az-Cyrl", "az"),
    ("az-Latn", "az"),
    ("bs-Cyrl", "bs"),
    ("bs-Latn", "bs"),
    ("fil", "tl"),
    ("in", "id"),
    ("iw", "he"),
    ("nb", "no"),
    ("pa-Arab", "pa"),
    ("pa-Guru", "pa"),
    ("sr-Cyrl", "sr"),
    ("sr-Latn", "sr"),
    ("uz-Arab", "uz"),
    ("uz-Cyrl", "uz"),
    ("uz-Latn", "uz"),
    ("zh-Hans", "zh"),
    ("zh-Hant", "zh"),
];

/// Countries known to default to one common language, used to backfill
/// locales whose language tag could not be resolved.
pub const COUNTRY_COMMON_LANGUAGES: &[(&str, &str)] = &[
    ("AUS", "en"),
    ("AUT", "de"),
    ("BRA", "pt"),
    ("CAN", "en"),
    ("CHN", "zh"),
    ("DEU", "de"),
    ("DNK", "da"),
    ("ESP", "es"),
    ("FIN", "fi"),
    ("FRA", "fr"),
    ("GBR", "en"),
    ("IRL", "en"),
    ("ITA", "it"),
    ("JPN", "ja"),
    ("KOR", "ko"),
    ("MEX", "es"),
    ("NLD", "nl"),
    ("NOR", "no"),
    ("NZL", "en"),
    ("POL", "pl"),
    ("PRT", "pt"),
    ("RUS", "ru"),
    ("SWE", "sv"),
    ("USA", "en"),
];

/// CLDR languages with no ISO 639-1 code in the language table. Rows using
/// them are dropped without a warning.
pub const UNREPRESENTABLE_LANGUAGES: &[&str] = &[
    "ast", "ccp", "ceb", "chr", "ckb", "dsb", "ewo", "fur", "gsw", "haw", "hsb", "jgo", "kab",
    "kea", "kkj", "kok", "lkt", "mas", "mgh", "mzn", "nds", "sah", "smn", "yue", "zgh",
];

// =========================================================================
// Continents and regions
// =========================================================================

/// (name, two-letter code, three-letter code)
pub const CONTINENTS: &[(&str, &str, &str)] = &[
    ("Africa", "AF", "AFR"),
    ("Antarctica", "AN", "ANT"),
    ("Asia", "AS", "ASI"),
    ("Europe", "EU", "EUR"),
    ("North America", "NA", "NOA"),
    ("Oceania", "OC", "OCE"),
    ("South America", "SA", "SOA"),
];

/// Continent that never becomes a region.
pub const EXCLUDED_REGION_CONTINENT: &str = "ANT";

/// Euro area members. Not derived from currency usage: several non-members
/// use the euro unilaterally.
pub const EUROZONE_MEMBERS: &[&str] = &[
    "AUT", "BEL", "CYP", "DEU", "ESP", "EST", "FIN", "FRA", "GRC", "HRV", "IRL", "ITA", "LTU",
    "LUX", "LVA", "MLT", "NLD", "PRT", "SVK", "SVN",
];

pub const EUROPEAN_UNION_MEMBERS: &[&str] = &[
    "AUT", "BEL", "BGR", "CYP", "CZE", "DEU", "DNK", "ESP", "EST", "FIN", "FRA", "GRC", "HRV",
    "HUN", "IRL", "ITA", "LTU", "LUX", "LVA", "MLT", "NLD", "POL", "PRT", "ROU", "SVK", "SVN",
    "SWE",
];

/// European Union plus the EFTA states in the single market.
pub const EUROPEAN_ECONOMIC_AREA_EXTRA_MEMBERS: &[&str] = &["ISL", "LIE", "NOR"];

// =========================================================================
// Provinces
// =========================================================================

/// Countries whose subdivisions are published.
pub const PROVINCE_COUNTRY_CODES: &[&str] = &[
    "ARE", "AUS", "BRA", "CAN", "CHN", "IND", "IRL", "ITA", "JPN", "MEX", "USA",
];
