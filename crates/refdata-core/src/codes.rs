//! Code normalization: country acceptance, naming, currency derivation.
//!
//! Every component that handles ISO codes goes through here so that case,
//! whitespace and unsupported-code policy are applied in one place.

use refdata_model::{
    CaseInsensitiveMap, CaseInsensitiveSet, Country, CountryRow, CurrencyRow, MeasurementSystem,
    ReferenceError, Result, source::non_blank,
};
use refdata_overrides::{Overrides, composite_key};

/// Trim and uppercase a code; blank codes are absent.
pub fn normalize_code(raw: &str) -> Option<String> {
    let code = raw.trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_ascii_uppercase())
    }
}

/// Identity of an accepted country, independent of later consolidation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryKey {
    pub name: String,
    pub iso_3166_2: String,
    pub iso_3166_3: String,
}

/// Resolves two- or three-letter codes to accepted countries.
#[derive(Debug, Clone, Default)]
pub struct CountryIndex {
    keys: Vec<CountryKey>,
    by_code: CaseInsensitiveMap<usize>,
}

impl CountryIndex {
    pub fn new(countries: &[Country]) -> Self {
        let mut index = Self::default();
        for country in countries {
            index.insert(CountryKey {
                name: country.name.clone(),
                iso_3166_2: country.iso_3166_2.clone(),
                iso_3166_3: country.iso_3166_3.clone(),
            });
        }
        index
    }

    fn insert(&mut self, key: CountryKey) {
        let position = self.keys.len();
        if !self.by_code.insert(&key.iso_3166_3, position) {
            return;
        }
        self.by_code.insert(&key.iso_3166_2, position);
        self.keys.push(key);
    }

    pub fn resolve(&self, code: &str) -> Option<&CountryKey> {
        self.by_code.get(code).map(|&position| &self.keys[position])
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Applies the override tables to raw codes.
#[derive(Debug)]
pub struct CodeNormalizer<'a> {
    overrides: &'a Overrides,
    supported_currencies: CaseInsensitiveSet,
}

impl<'a> CodeNormalizer<'a> {
    /// Supported currencies are the table's codes minus the unsupported list.
    pub fn new(overrides: &'a Overrides, currencies: &[CurrencyRow]) -> Self {
        let supported = currencies
            .iter()
            .filter_map(|row| normalize_code(&row.iso_4217_3))
            .filter(|code| !overrides.unsupported_currencies.contains(code));
        Self {
            overrides,
            supported_currencies: CaseInsensitiveSet::new(supported),
        }
    }

    pub fn overrides(&self) -> &'a Overrides {
        self.overrides
    }

    pub fn is_supported_country(&self, code: &str) -> bool {
        !self.overrides.unsupported_countries.contains(code)
    }

    pub fn is_supported_currency(&self, code: &str) -> bool {
        self.supported_currencies.contains(code)
    }

    /// Map a currency code onto a supported one.
    ///
    /// Supported codes come back unchanged (uppercased). Anything else must
    /// have a remap whose target is supported.
    pub fn remap_currency(&self, code: &str, country: &str) -> Result<String> {
        let unmappable = || ReferenceError::UnmappableCurrency {
            code: code.trim().to_string(),
            country: country.to_string(),
        };
        let normalized = normalize_code(code).ok_or_else(unmappable)?;
        if self.is_supported_currency(&normalized) {
            return Ok(normalized);
        }
        match self.overrides.currency_remaps.get(&normalized) {
            Some(target) if self.is_supported_currency(target) => Ok(target.to_ascii_uppercase()),
            _ => Err(unmappable()),
        }
    }

    /// Default currency for a country row, or `None` when it has none.
    pub fn derive_currency(&self, row: &CountryRow, iso_3166_3: &str) -> Result<Option<String>> {
        let candidate = match non_blank(row.currency.as_deref()) {
            Some(field) if field.contains(',') => Some(self.collapse_composite(field, iso_3166_3)?),
            Some(field) => Some(field.to_ascii_uppercase()),
            None => self.overrides.blank_currencies.get(iso_3166_3).cloned(),
        };
        candidate
            .map(|code| self.remap_currency(&code, iso_3166_3))
            .transpose()
    }

    fn collapse_composite(&self, field: &str, country: &str) -> Result<String> {
        if let Some(code) = self.overrides.composite_currencies.get(&composite_key(field)) {
            return Ok(code.clone());
        }
        field
            .split(',')
            .filter_map(normalize_code)
            .find(|code| !self.overrides.secondary_currencies.contains(code))
            .ok_or_else(|| ReferenceError::UnresolvableCompositeCurrency {
                field: field.to_string(),
                country: country.to_string(),
            })
    }

    /// Official English name, else common name, else alternate name; then
    /// the exact-match override table.
    pub fn country_name(&self, row: &CountryRow) -> Result<String> {
        let selected = non_blank(row.official_name_en.as_deref())
            .or_else(|| non_blank(row.name.as_deref()))
            .or_else(|| non_blank(row.alternate_name.as_deref()))
            .ok_or_else(|| ReferenceError::MissingCountryName {
                iso_3166_2: row.iso_3166_2.trim().to_string(),
                iso_3166_3: row.iso_3166_3.trim().to_string(),
            })?;
        Ok(self
            .overrides
            .country_names
            .get(selected)
            .cloned()
            .unwrap_or_else(|| selected.to_string()))
    }

    pub fn measurement_system(&self, iso_3166_3: &str) -> MeasurementSystem {
        if self.overrides.imperial_countries.contains(iso_3166_3) {
            MeasurementSystem::Imperial
        } else {
            MeasurementSystem::Metric
        }
    }
}
