use thiserror::Error;

/// Data-integrity violations that abort an aggregation run.
///
/// Every variant is fatal: the engine never emits a partial dataset.
/// Source noise that is merely skipped (unresolvable number-format rows,
/// unrepresentable languages) is logged instead of surfacing here.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReferenceError {
    #[error("missing country name for {iso_3166_2}/{iso_3166_3}")]
    MissingCountryName {
        iso_3166_2: String,
        iso_3166_3: String,
    },

    #[error("invalid country code '{code}' referenced by {context}")]
    UnknownCountry { code: String, context: String },

    #[error("invalid currency code '{code}' referenced by {context}")]
    UnknownCurrency { code: String, context: String },

    #[error("invalid continent code '{code}' for country {country}")]
    UnknownContinent { code: String, country: String },

    #[error("invalid language code '{code}' referenced by {context}")]
    UnknownLanguage { code: String, context: String },

    #[error("invalid timezone name '{name}' for country {country}")]
    UnknownTimezone { name: String, country: String },

    #[error("invalid locale id '{id}' referenced by {context}")]
    UnknownLocale { id: String, context: String },

    #[error("currency '{code}' of country {country} is unsupported and has no remap")]
    UnmappableCurrency { code: String, country: String },

    #[error("composite currency field '{field}' of country {country} has no usable code")]
    UnresolvableCompositeCurrency { field: String, country: String },

    #[error("duplicate region id [{id}]")]
    DuplicateRegionId { id: String },

    #[error("country {country} has more than one default language ({first}, {second})")]
    AmbiguousDefaultLanguage {
        country: String,
        first: String,
        second: String,
    },

    #[error("default language '{language}' of country {country} is not spoken there")]
    DefaultLanguageNotSpoken { country: String, language: String },

    #[error("country {country} has more than one delivered duty ({first}, {second})")]
    AmbiguousDuty {
        country: String,
        first: String,
        second: String,
    },

    #[error("invalid delivered duty '{value}' for country {country}")]
    InvalidDuty { value: String, country: String },

    #[error("currency {currency} has no symbol")]
    MissingCurrencySymbol { currency: String },

    #[error("invalid group separator {value:?} for locale {language}-{territory}")]
    InvalidGroupSeparator {
        value: String,
        language: String,
        territory: String,
    },

    #[error("refusing to emit empty {entity} output")]
    EmptyOutput { entity: String },
}

impl ReferenceError {
    pub fn unknown_country(code: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownCountry {
            code: code.into(),
            context: context.into(),
        }
    }

    pub fn unknown_currency(code: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownCurrency {
            code: code.into(),
            context: context.into(),
        }
    }

    pub fn unknown_locale(id: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownLocale {
            id: id.into(),
            context: context.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReferenceError>;
