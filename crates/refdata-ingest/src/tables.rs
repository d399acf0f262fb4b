//! Catalog of the cleansed input tables.

use std::fmt;

/// File formats a table may be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Json,
    Csv,
}

impl TableFormat {
    pub fn extension(self) -> &'static str {
        match self {
            TableFormat::Json => "json",
            TableFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    /// File stem, e.g. `country-timezones`.
    pub stem: &'static str,
    pub required: bool,
    /// Formats tried in order.
    pub formats: &'static [TableFormat],
    pub description: &'static str,
}

const JSON_OR_CSV: &[TableFormat] = &[TableFormat::Json, TableFormat::Csv];
const JSON_ONLY: &[TableFormat] = &[TableFormat::Json];

pub const COUNTRIES: TableSpec = TableSpec {
    stem: "countries",
    required: true,
    formats: JSON_OR_CSV,
    description: "ISO 3166 countries with continent and currency",
};
pub const CURRENCIES: TableSpec = TableSpec {
    stem: "currencies",
    required: true,
    formats: JSON_OR_CSV,
    description: "ISO 4217 currencies",
};
pub const LANGUAGES: TableSpec = TableSpec {
    stem: "languages",
    required: true,
    formats: JSON_ONLY,
    description: "ISO 639-1 languages with the countries that speak them",
};
pub const NUMBERS: TableSpec = TableSpec {
    stem: "numbers",
    required: true,
    formats: JSON_OR_CSV,
    description: "CLDR number formats per language and territory",
};
pub const TIMEZONES: TableSpec = TableSpec {
    stem: "timezones",
    required: true,
    formats: JSON_OR_CSV,
    description: "Timezone names, descriptions and offsets",
};
pub const COUNTRY_TIMEZONES: TableSpec = TableSpec {
    stem: "country-timezones",
    required: true,
    formats: JSON_OR_CSV,
    description: "Country to timezone join",
};
pub const COUNTRY_DUTIES: TableSpec = TableSpec {
    stem: "country-duties",
    required: false,
    formats: JSON_OR_CSV,
    description: "Default delivered duty per country",
};
pub const COUNTRY_LANGUAGES: TableSpec = TableSpec {
    stem: "country-languages",
    required: false,
    formats: JSON_OR_CSV,
    description: "Default language overrides per country",
};
pub const CURRENCY_LOCALES: TableSpec = TableSpec {
    stem: "currency-locales",
    required: false,
    formats: JSON_OR_CSV,
    description: "Default locale overrides per currency",
};
pub const CURRENCY_SYMBOLS: TableSpec = TableSpec {
    stem: "currency-symbols",
    required: false,
    formats: JSON_OR_CSV,
    description: "Primary and narrow currency symbols",
};
pub const LOCALE_NAMES: TableSpec = TableSpec {
    stem: "locale-names",
    required: false,
    formats: JSON_OR_CSV,
    description: "Display names for locale ids",
};
pub const PROVINCES: TableSpec = TableSpec {
    stem: "provinces",
    required: false,
    formats: JSON_OR_CSV,
    description: "ISO 3166-2 subdivisions",
};
pub const PROVINCE_TRANSLATIONS: TableSpec = TableSpec {
    stem: "province-translations",
    required: false,
    formats: JSON_OR_CSV,
    description: "Localized subdivision names",
};

pub const ALL_TABLES: &[TableSpec] = &[
    COUNTRIES,
    CURRENCIES,
    LANGUAGES,
    NUMBERS,
    TIMEZONES,
    COUNTRY_TIMEZONES,
    COUNTRY_DUTIES,
    COUNTRY_LANGUAGES,
    CURRENCY_LOCALES,
    CURRENCY_SYMBOLS,
    LOCALE_NAMES,
    PROVINCES,
    PROVINCE_TRANSLATIONS,
];

impl TableSpec {
    /// File names tried, in order.
    pub fn file_names(&self) -> Vec<String> {
        self.formats
            .iter()
            .map(|format| format!("{}.{}", self.stem, format.extension()))
            .collect()
    }
}
