//! Reference data model types.
//!
//! - [`source`]: cleansed per-source input rows
//! - [`entities`]: normalized output records
//! - [`enums`]: measurement system, delivered duty and province type
//! - [`options`]: aggregation configuration
//! - [`lookup`]: case-insensitive code sets and maps

pub mod entities;
pub mod enums;
pub mod error;
pub mod lookup;
pub mod options;
pub mod source;

pub use entities::{
    Continent, Country, Currency, CurrencyFormat, CurrencySymbols, FormatSymbols, Language,
    Locale, LocaleNumbers, Province, ProvinceTranslation, ReferenceData, Region, Timezone,
};
pub use enums::{DeliveredDuty, MeasurementSystem, ProvinceType};
pub use error::{ReferenceError, Result};
pub use lookup::{CaseInsensitiveMap, CaseInsensitiveSet};
pub use options::{AggregationOptions, DutyPolicy};
pub use source::{
    CountryDutyRow, CountryLanguageRow, CountryRow, CountryTimezoneRow, CurrencyLocaleRow,
    CurrencyRow, CurrencySymbolRow, LanguageRow, LocaleNameRow, NumberFormatRow, ProvinceRow,
    ProvinceTranslationRow, SourceTables, TimezoneRow,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_omits_absent_defaults() {
        let country = Country {
            name: "Antarctica".to_string(),
            iso_3166_2: "AQ".to_string(),
            iso_3166_3: "ATA".to_string(),
            continent: None,
            measurement_system: MeasurementSystem::Metric,
            default_currency: None,
            default_language: None,
            languages: vec![],
            timezones: vec![],
            default_delivered_duty: None,
        };
        let json = serde_json::to_value(&country).expect("serialize country");
        assert!(json.get("default_currency").is_none());
        assert!(json.get("default_delivered_duty").is_none());
        assert_eq!(json["measurement_system"], "metric");
    }

    #[test]
    fn error_messages_name_the_offending_code() {
        let error = ReferenceError::DuplicateRegionId {
            id: "europe".to_string(),
        };
        assert_eq!(error.to_string(), "duplicate region id [europe]");
        let error = ReferenceError::unknown_country("XYZ", "country-timezones");
        assert_eq!(
            error.to_string(),
            "invalid country code 'XYZ' referenced by country-timezones"
        );
    }
}
