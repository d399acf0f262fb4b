//! Cleansed per-source tables consumed by the aggregation engine.
//!
//! Rows are produced by the upstream cleanse stage and arrive already
//! parsed; nothing here is validated yet. Optional text fields are `None`
//! or empty when the source left them blank.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRow {
    #[serde(default)]
    pub official_name_en: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Last-resort name when neither official nor common name is present.
    #[serde(default)]
    pub alternate_name: Option<String>,
    pub iso_3166_2: String,
    pub iso_3166_3: String,
    /// Two-letter continent code, e.g. `EU`.
    #[serde(default)]
    pub continent: Option<String>,
    /// ISO 4217 code; may be a comma separated composite such as `INR,BTN`.
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRow {
    pub name: String,
    pub iso_4217_3: String,
    #[serde(default)]
    pub number_decimals: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRow {
    pub name: String,
    pub iso_639_2: String,
    /// Country codes (two or three letters) where the language is spoken.
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub locales: Vec<String>,
}

/// One CLDR numbering-system entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormatRow {
    pub language: String,
    #[serde(default)]
    pub territory: String,
    pub decimal: String,
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneRow {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub offset: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryTimezoneRow {
    pub country: String,
    /// Timezone name or description.
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDutyRow {
    pub country: String,
    pub duty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryLanguageRow {
    pub country: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyLocaleRow {
    pub currency: String,
    pub locale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySymbolRow {
    pub currency: String,
    #[serde(default)]
    pub primary: String,
    #[serde(default)]
    pub narrow: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleNameRow {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceRow {
    pub country: String,
    /// Subdivision code, either `AE-SH` or the bare local part `SH`.
    pub iso_3166_2: String,
    pub name: String,
    #[serde(default)]
    pub province_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceTranslationRow {
    /// Composite province id, e.g. `ARE-SH`.
    pub province: String,
    pub locale: String,
    pub name: String,
}

/// All cleansed inputs for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTables {
    pub countries: Vec<CountryRow>,
    pub currencies: Vec<CurrencyRow>,
    pub languages: Vec<LanguageRow>,
    pub numbers: Vec<NumberFormatRow>,
    pub timezones: Vec<TimezoneRow>,
    pub country_timezones: Vec<CountryTimezoneRow>,
    #[serde(default)]
    pub country_duties: Vec<CountryDutyRow>,
    #[serde(default)]
    pub country_languages: Vec<CountryLanguageRow>,
    #[serde(default)]
    pub currency_locales: Vec<CurrencyLocaleRow>,
    #[serde(default)]
    pub currency_symbols: Vec<CurrencySymbolRow>,
    #[serde(default)]
    pub locale_names: Vec<LocaleNameRow>,
    #[serde(default)]
    pub provinces: Vec<ProvinceRow>,
    #[serde(default)]
    pub province_translations: Vec<ProvinceTranslationRow>,
}

/// Trimmed value, `None` when blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
