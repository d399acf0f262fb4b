//! Currency list, symbols and default locales.

use std::collections::BTreeSet;

use refdata_model::{
    AggregationOptions, CaseInsensitiveMap, CaseInsensitiveSet, Country, Currency,
    CurrencyLocaleRow, CurrencyRow, CurrencySymbolRow, CurrencySymbols, Locale, ReferenceError,
    Result, source::non_blank,
};
use tracing::debug;

use crate::codes::{CodeNormalizer, normalize_code};
use crate::locales::{find_locale, locale_ids};

/// Supported currencies with symbols attached, sorted by name.
pub fn build_currencies(
    rows: &[CurrencyRow],
    symbols: &[CurrencySymbolRow],
    codes: &CodeNormalizer<'_>,
    options: &AggregationOptions,
) -> Result<Vec<Currency>> {
    let by_currency: CaseInsensitiveMap<&CurrencySymbolRow> = symbols
        .iter()
        .filter(|row| !row.primary.trim().is_empty())
        .map(|row| (row.currency.as_str(), row))
        .collect();

    let mut seen = CaseInsensitiveSet::default();
    let mut currencies = Vec::new();
    for row in rows {
        let Some(code) = normalize_code(&row.iso_4217_3) else {
            continue;
        };
        if !codes.is_supported_currency(&code) {
            debug!(currency = %code, "unsupported currency");
            continue;
        }
        if !seen.insert(&code) {
            continue;
        }
        let symbols = by_currency.get(&code).map(|row| currency_symbols(row));
        if symbols.is_none() {
            if options.strict_symbols {
                return Err(ReferenceError::MissingCurrencySymbol { currency: code });
            }
            debug!(currency = %code, "currency has no symbol");
        }
        currencies.push(Currency {
            name: row.name.trim().to_string(),
            iso_4217_3: code,
            number_decimals: row.number_decimals,
            symbols,
            default_locale: None,
        });
    }
    currencies.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.iso_4217_3.cmp(&b.iso_4217_3))
    });
    Ok(currencies)
}

fn currency_symbols(row: &CurrencySymbolRow) -> CurrencySymbols {
    let primary = row.primary.trim().to_string();
    let narrow = non_blank(row.narrow.as_deref())
        .filter(|narrow| *narrow != primary)
        .map(str::to_string);
    CurrencySymbols { primary, narrow }
}

/// Attach a default locale to every currency.
///
/// An explicit override must name a resolved locale. Otherwise the first
/// locale (in final order) of a country defaulting to the currency, in one
/// of those countries' default languages, is used.
pub fn assign_default_locales(
    currencies: &mut [Currency],
    countries: &[Country],
    locales: &[Locale],
    overrides: &[CurrencyLocaleRow],
    codes: &CodeNormalizer<'_>,
) -> Result<()> {
    let ids = locale_ids(locales);
    let known = CaseInsensitiveSet::new(currencies.iter().map(|c| c.iso_4217_3.as_str()));

    let mut explicit: CaseInsensitiveMap<String> = CaseInsensitiveMap::new();
    for row in overrides {
        let Some(code) = normalize_code(&row.currency) else {
            continue;
        };
        if !known.contains(&code) {
            if codes.overrides().unsupported_currencies.contains(&code) {
                debug!(currency = %code, "locale override for unsupported currency");
                continue;
            }
            return Err(ReferenceError::unknown_currency(code, "currency-locales"));
        }
        let locale = find_locale(&ids, &row.locale).ok_or_else(|| {
            ReferenceError::unknown_locale(row.locale.trim(), format!("currency-locales for {code}"))
        })?;
        if !explicit.insert(&code, locale.to_string()) {
            debug!(currency = %code, locale = %locale, "later locale override ignored");
        }
    }

    for currency in currencies.iter_mut() {
        currency.default_locale = match explicit.get(&currency.iso_4217_3) {
            Some(locale) => Some(locale.clone()),
            None => derived_default_locale(&currency.iso_4217_3, countries, locales),
        };
    }
    Ok(())
}

fn derived_default_locale(code: &str, countries: &[Country], locales: &[Locale]) -> Option<String> {
    let users: Vec<&Country> = countries
        .iter()
        .filter(|country| country.default_currency.as_deref() == Some(code))
        .collect();
    let members: BTreeSet<&str> = users.iter().map(|c| c.iso_3166_3.as_str()).collect();
    let languages: BTreeSet<&str> = users
        .iter()
        .filter_map(|c| c.default_language.as_deref())
        .collect();
    locales
        .iter()
        .find(|locale| {
            members.contains(locale.country.as_str())
                && locale
                    .language
                    .as_deref()
                    .is_some_and(|language| languages.contains(language))
        })
        .map(|locale| locale.id.clone())
}

#[cfg(test)]
mod tests {
    use refdata_model::{LocaleNumbers, MeasurementSystem};
    use refdata_overrides::Overrides;

    use super::*;

    fn currency_row(code: &str, name: &str) -> CurrencyRow {
        CurrencyRow {
            name: name.to_string(),
            iso_4217_3: code.to_string(),
            number_decimals: 2,
        }
    }

    fn symbol(code: &str, primary: &str, narrow: Option<&str>) -> CurrencySymbolRow {
        CurrencySymbolRow {
            currency: code.to_string(),
            primary: primary.to_string(),
            narrow: narrow.map(str::to_string),
        }
    }

    fn table() -> Vec<CurrencyRow> {
        vec![
            currency_row("USD", "US Dollar"),
            currency_row("eur", "Euro"),
            currency_row("AFN", "Afghani"),
            currency_row("EUR", "Duplicate Euro"),
        ]
    }

    fn country(iso3: &str, currency: &str, language: &str) -> Country {
        Country {
            name: iso3.to_string(),
            iso_3166_2: iso3[..2].to_string(),
            iso_3166_3: iso3.to_string(),
            continent: None,
            measurement_system: MeasurementSystem::Metric,
            default_currency: Some(currency.to_string()),
            default_language: Some(language.to_string()),
            languages: vec![language.to_string()],
            timezones: vec![],
            default_delivered_duty: None,
        }
    }

    fn locale(id: &str, country: &str, language: &str) -> Locale {
        Locale {
            id: id.to_string(),
            name: id.to_string(),
            country: country.to_string(),
            language: Some(language.to_string()),
            numbers: LocaleNumbers {
                decimal: ".".to_string(),
                group: ",".to_string(),
            },
        }
    }

    #[test]
    fn keeps_supported_codes_sorted_by_name() {
        let overrides = Overrides::builtin();
        let rows = table();
        let codes = CodeNormalizer::new(&overrides, &rows);
        let symbols = [symbol("USD", "$", Some("$")), symbol("EUR", "€", None)];
        let currencies = build_currencies(&rows, &symbols, &codes, &AggregationOptions::new()).unwrap();
        let listed: Vec<(&str, &str)> = currencies
            .iter()
            .map(|c| (c.iso_4217_3.as_str(), c.name.as_str()))
            .collect();
        assert_eq!(listed, [("EUR", "Euro"), ("USD", "US Dollar")]);
        let usd = currencies[1].symbols.as_ref().unwrap();
        assert_eq!(usd.primary, "$");
        assert_eq!(usd.narrow, None);
    }

    #[test]
    fn strict_mode_requires_symbols() {
        let overrides = Overrides::builtin();
        let rows = table();
        let codes = CodeNormalizer::new(&overrides, &rows);
        let symbols = [symbol("USD", "$", None), symbol("EUR", " ", None)];
        let relaxed = build_currencies(&rows, &symbols, &codes, &AggregationOptions::new()).unwrap();
        assert!(relaxed[0].symbols.is_none());
        let error = build_currencies(&rows, &symbols, &codes, &AggregationOptions::strict()).unwrap_err();
        assert_eq!(
            error,
            ReferenceError::MissingCurrencySymbol {
                currency: "EUR".to_string()
            }
        );
    }

    #[test]
    fn default_locale_follows_default_language() {
        let overrides = Overrides::builtin();
        let rows = table();
        let codes = CodeNormalizer::new(&overrides, &rows);
        let mut currencies = build_currencies(&rows, &[], &codes, &AggregationOptions::new()).unwrap();
        let countries = [country("FRA", "EUR", "fr"), country("USA", "USD", "en")];
        let locales = [
            locale("en-fr", "FRA", "en"),
            locale("fr-fr", "FRA", "fr"),
            locale("en-us", "USA", "en"),
        ];
        assign_default_locales(&mut currencies, &countries, &locales, &[], &codes).unwrap();
        assert_eq!(currencies[0].default_locale.as_deref(), Some("fr-fr"));
        assert_eq!(currencies[1].default_locale.as_deref(), Some("en-us"));
    }

    #[test]
    fn explicit_locale_override_must_resolve() {
        let overrides = Overrides::builtin();
        let rows = table();
        let codes = CodeNormalizer::new(&overrides, &rows);
        let mut currencies = build_currencies(&rows, &[], &codes, &AggregationOptions::new()).unwrap();
        let countries = [country("FRA", "EUR", "fr")];
        let locales = [locale("en-fr", "FRA", "en"), locale("fr-fr", "FRA", "fr")];

        let explicit = [CurrencyLocaleRow {
            currency: "eur".to_string(),
            locale: "en_FR".to_string(),
        }];
        assign_default_locales(&mut currencies, &countries, &locales, &explicit, &codes).unwrap();
        assert_eq!(currencies[0].default_locale.as_deref(), Some("en-fr"));

        let missing = [CurrencyLocaleRow {
            currency: "EUR".to_string(),
            locale: "de-de".to_string(),
        }];
        let error = assign_default_locales(&mut currencies, &countries, &locales, &missing, &codes)
            .unwrap_err();
        assert!(matches!(error, ReferenceError::UnknownLocale { .. }));

        let unknown = [CurrencyLocaleRow {
            currency: "XYZ".to_string(),
            locale: "fr-fr".to_string(),
        }];
        let error = assign_default_locales(&mut currencies, &countries, &locales, &unknown, &codes)
            .unwrap_err();
        assert_eq!(error, ReferenceError::unknown_currency("XYZ", "currency-locales"));
    }
}
