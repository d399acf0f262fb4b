//! Hand-maintained override tables for reference data aggregation.
//!
//! The raw lists live in [`tables`] as constants. [`Overrides::global`]
//! loads them once into lookup structures shared by the whole run; tests
//! build their own copy with [`Overrides::builtin`] and adjust fields.

#![deny(unsafe_code)]

pub mod tables;

use std::collections::HashMap;
use std::sync::OnceLock;

use refdata_model::{CaseInsensitiveMap, CaseInsensitiveSet};

use crate::tables::{
    BLANK_CURRENCY_EXCEPTIONS, COMPOSITE_CURRENCY_PRECEDENCE, CONTINENTS, COUNTRY_COMMON_LANGUAGES,
    COUNTRY_NAME_OVERRIDES, CURRENCY_REMAPS, EUROPEAN_ECONOMIC_AREA_EXTRA_MEMBERS,
    EUROPEAN_UNION_MEMBERS, EUROZONE_MEMBERS, EXCLUDED_REGION_CONTINENT, IMPERIAL_COUNTRY_CODES,
    LANGUAGE_SUBSTITUTIONS, PROVINCE_COUNTRY_CODES, SECONDARY_CURRENCY_CODES,
    TERRITORY_SUBSTITUTIONS, UNREPRESENTABLE_LANGUAGES, UNSUPPORTED_COUNTRY_CODES,
    UNSUPPORTED_CURRENCY_CODES,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinentDef {
    pub name: String,
    pub code2: String,
    pub code3: String,
}

/// A region with explicitly enumerated membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRegion {
    pub id: String,
    pub name: String,
    /// Three-letter country codes.
    pub members: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Overrides {
    pub unsupported_countries: CaseInsensitiveSet,
    pub unsupported_currencies: CaseInsensitiveSet,
    pub currency_remaps: CaseInsensitiveMap<String>,
    /// Keyed by [`composite_key`].
    pub composite_currencies: CaseInsensitiveMap<String>,
    pub secondary_currencies: CaseInsensitiveSet,
    /// Three-letter country code -> currency.
    pub blank_currencies: CaseInsensitiveMap<String>,
    /// Exact-match name replacements.
    pub country_names: HashMap<String, String>,
    pub imperial_countries: CaseInsensitiveSet,
    pub territory_substitutions: CaseInsensitiveMap<String>,
    pub language_substitutions: CaseInsensitiveMap<String>,
    /// Three-letter country code -> language code.
    pub common_languages: CaseInsensitiveMap<String>,
    pub unrepresentable_languages: CaseInsensitiveSet,
    pub continents: Vec<ContinentDef>,
    /// Three-letter code of the continent that gets no region.
    pub excluded_region_continent: String,
    /// Fixed-membership regions other than "world".
    pub named_regions: Vec<NamedRegion>,
    pub province_countries: CaseInsensitiveSet,
}

static GLOBAL: OnceLock<Overrides> = OnceLock::new();

impl Overrides {
    /// Process-wide tables, built on first use.
    pub fn global() -> &'static Overrides {
        GLOBAL.get_or_init(Overrides::builtin)
    }

    pub fn builtin() -> Self {
        Self {
            unsupported_countries: CaseInsensitiveSet::new(UNSUPPORTED_COUNTRY_CODES),
            unsupported_currencies: CaseInsensitiveSet::new(UNSUPPORTED_CURRENCY_CODES),
            currency_remaps: owned_pairs(CURRENCY_REMAPS),
            composite_currencies: COMPOSITE_CURRENCY_PRECEDENCE
                .iter()
                .map(|(key, code)| (composite_key(key), (*code).to_string()))
                .collect(),
            secondary_currencies: CaseInsensitiveSet::new(SECONDARY_CURRENCY_CODES),
            blank_currencies: owned_pairs(BLANK_CURRENCY_EXCEPTIONS),
            country_names: COUNTRY_NAME_OVERRIDES
                .iter()
                .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
                .collect(),
            imperial_countries: CaseInsensitiveSet::new(IMPERIAL_COUNTRY_CODES),
            territory_substitutions: owned_pairs(TERRITORY_SUBSTITUTIONS),
            language_substitutions: owned_pairs(LANGUAGE_SUBSTITUTIONS),
            common_languages: owned_pairs(COUNTRY_COMMON_LANGUAGES),
            unrepresentable_languages: CaseInsensitiveSet::new(UNREPRESENTABLE_LANGUAGES),
            continents: CONTINENTS
                .iter()
                .map(|(name, code2, code3)| ContinentDef {
                    name: (*name).to_string(),
                    code2: (*code2).to_string(),
                    code3: (*code3).to_string(),
                })
                .collect(),
            excluded_region_continent: EXCLUDED_REGION_CONTINENT.to_string(),
            named_regions: builtin_named_regions(),
            province_countries: CaseInsensitiveSet::new(PROVINCE_COUNTRY_CODES),
        }
    }

    /// Find a continent by its two- or three-letter code.
    pub fn continent(&self, code: &str) -> Option<&ContinentDef> {
        let code = code.trim();
        self.continents.iter().find(|continent| {
            continent.code2.eq_ignore_ascii_case(code) || continent.code3.eq_ignore_ascii_case(code)
        })
    }
}

/// Normalized lookup key for a composite currency field: codes trimmed,
/// uppercased and sorted, joined by `,`.
pub fn composite_key(field: &str) -> String {
    let mut codes: Vec<String> = field
        .split(',')
        .map(|code| code.trim().to_ascii_uppercase())
        .filter(|code| !code.is_empty())
        .collect();
    codes.sort();
    codes.join(",")
}

fn owned_pairs(pairs: &[(&str, &str)]) -> CaseInsensitiveMap<String> {
    pairs
        .iter()
        .map(|(key, value)| (*key, (*value).to_string()))
        .collect()
}

fn builtin_named_regions() -> Vec<NamedRegion> {
    let owned = |codes: &[&str]| codes.iter().map(|c| (*c).to_string()).collect::<Vec<_>>();
    let mut economic_area = owned(EUROPEAN_UNION_MEMBERS);
    economic_area.extend(owned(EUROPEAN_ECONOMIC_AREA_EXTRA_MEMBERS));
    economic_area.sort();
    vec![
        NamedRegion {
            id: "eurozone".to_string(),
            name: "Eurozone".to_string(),
            members: owned(EUROZONE_MEMBERS),
        },
        NamedRegion {
            id: "european-union".to_string(),
            name: "European Union".to_string(),
            members: owned(EUROPEAN_UNION_MEMBERS),
        },
        NamedRegion {
            id: "european-economic-area".to_string(),
            name: "European Economic Area".to_string(),
            members: economic_area,
        },
    ]
}
