//! Per-locale currency rendering hints.

use std::collections::BTreeMap;

use refdata_model::{
    CaseInsensitiveMap, Country, Currency, CurrencyFormat, FormatSymbols, Locale,
};

/// Position of the symbol (`%s`) relative to the value (`%v`).
pub const DEFAULT_FORMAT: &str = "%s%v";

/// One entry per locale whose country defaults to a currency with symbols.
/// The narrow symbol falls back to the primary one.
pub fn build_currency_formats(
    locales: &[Locale],
    countries: &[Country],
    currencies: &[Currency],
) -> BTreeMap<String, CurrencyFormat> {
    let countries: CaseInsensitiveMap<&Country> = countries
        .iter()
        .map(|country| (country.iso_3166_3.as_str(), country))
        .collect();
    let currencies: CaseInsensitiveMap<&Currency> = currencies
        .iter()
        .map(|currency| (currency.iso_4217_3.as_str(), currency))
        .collect();

    locales
        .iter()
        .filter_map(|locale| {
            let code = countries.get(&locale.country)?.default_currency.as_deref()?;
            let currency = currencies.get(code)?;
            let symbols = currency.symbols.as_ref()?;
            let format = CurrencyFormat {
                symbols: FormatSymbols {
                    primary: symbols.primary.clone(),
                    narrow: symbols
                        .narrow
                        .clone()
                        .unwrap_or_else(|| symbols.primary.clone()),
                },
                decimal: locale.numbers.decimal.clone(),
                group: locale.numbers.group.clone(),
                precision: currency.number_decimals,
                format: DEFAULT_FORMAT.to_string(),
            };
            Some((locale.id.clone(), format))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use refdata_model::{CurrencySymbols, LocaleNumbers, MeasurementSystem};

    use super::*;

    fn country(iso3: &str, currency: Option<&str>) -> Country {
        Country {
            name: iso3.to_string(),
            iso_3166_2: iso3[..2].to_string(),
            iso_3166_3: iso3.to_string(),
            continent: None,
            measurement_system: MeasurementSystem::Metric,
            default_currency: currency.map(str::to_string),
            default_language: None,
            languages: vec![],
            timezones: vec![],
            default_delivered_duty: None,
        }
    }

    fn locale(id: &str, country: &str, decimal: &str, group: &str) -> Locale {
        Locale {
            id: id.to_string(),
            name: id.to_string(),
            country: country.to_string(),
            language: None,
            numbers: LocaleNumbers {
                decimal: decimal.to_string(),
                group: group.to_string(),
            },
        }
    }

    #[test]
    fn formats_follow_locale_numbers_and_currency_symbols() {
        let countries = [
            country("FRA", Some("EUR")),
            country("JPN", Some("JPY")),
            country("ATA", None),
        ];
        let currencies = [
            Currency {
                name: "Euro".to_string(),
                iso_4217_3: "EUR".to_string(),
                number_decimals: 2,
                symbols: Some(CurrencySymbols {
                    primary: "€".to_string(),
                    narrow: None,
                }),
                default_locale: None,
            },
            Currency {
                name: "Yen".to_string(),
                iso_4217_3: "JPY".to_string(),
                number_decimals: 0,
                symbols: None,
                default_locale: None,
            },
        ];
        let locales = [
            locale("fr-fr", "FRA", ",", " "),
            locale("ja-jp", "JPN", ".", ","),
            locale("en-aq", "ATA", ".", ","),
        ];
        let formats = build_currency_formats(&locales, &countries, &currencies);
        assert_eq!(formats.keys().collect::<Vec<_>>(), ["fr-fr"]);
        let french = &formats["fr-fr"];
        assert_eq!(french.symbols.narrow, "€");
        assert_eq!(french.decimal, ",");
        assert_eq!(french.group, " ");
        assert_eq!(french.precision, 2);
        assert_eq!(french.format, "%s%v");
    }
}
