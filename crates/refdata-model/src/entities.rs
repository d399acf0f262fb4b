//! Normalized reference entities as published.
//!
//! Every record is built once per run by the aggregation engine and never
//! mutated afterwards. Field names match the published JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{DeliveredDuty, MeasurementSystem, ProvinceType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub iso_3166_2: String,
    pub iso_3166_3: String,
    /// Three-letter continent code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    pub measurement_system: MeasurementSystem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    pub languages: Vec<String>,
    pub timezones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_delivered_duty: Option<DeliveredDuty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySymbols {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrow: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub iso_4217_3: String,
    pub number_decimals: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols: Option<CurrencySymbols>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub iso_639_2: String,
    pub countries: Vec<String>,
    pub locales: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleNumbers {
    pub decimal: String,
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub id: String,
    pub name: String,
    /// Three-letter country code.
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub numbers: LocaleNumbers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub countries: Vec<String>,
    pub currencies: Vec<String>,
    pub languages: Vec<String>,
    pub measurement_systems: Vec<MeasurementSystem>,
    pub timezones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceTranslation {
    pub locale: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    /// `<ISO3>-<LOCAL>`, e.g. `ARE-SH`.
    pub id: String,
    pub iso_3166_2: String,
    pub name: String,
    pub country: String,
    pub province_type: ProvinceType,
    #[serde(default)]
    pub translations: Vec<ProvinceTranslation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timezone {
    pub name: String,
    pub description: String,
    /// UTC offset in minutes.
    pub offset: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    pub name: String,
    pub code: String,
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatSymbols {
    pub primary: String,
    pub narrow: String,
}

/// Currency rendering hints for one locale, consumed by client libraries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbols: FormatSymbols,
    pub decimal: String,
    pub group: String,
    pub precision: u32,
    pub format: String,
}

/// Complete output of one aggregation run, every collection sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub countries: Vec<Country>,
    pub currencies: Vec<Currency>,
    pub languages: Vec<Language>,
    pub locales: Vec<Locale>,
    pub regions: Vec<Region>,
    pub provinces: Vec<Province>,
    pub timezones: Vec<Timezone>,
    pub continents: Vec<Continent>,
    /// Keyed by locale id.
    pub currency_formats: BTreeMap<String, CurrencyFormat>,
}
