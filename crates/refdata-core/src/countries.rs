//! Country acceptance and consolidation.
//!
//! [`collect_countries`] turns raw country rows into records carrying codes,
//! name, continent, currency and measurement system. [`Consolidator`] then
//! joins in spoken languages, timezones, default language and delivered
//! duty once the language table has been indexed.

use std::collections::{BTreeMap, BTreeSet};

use refdata_model::{
    AggregationOptions, CaseInsensitiveSet, Country, CountryDutyRow, CountryLanguageRow,
    CountryRow, CountryTimezoneRow, DeliveredDuty, DutyPolicy, ReferenceError, Result,
    TimezoneRow, source::non_blank,
};
use refdata_overrides::Overrides;
use tracing::debug;

use crate::codes::{CodeNormalizer, CountryIndex, normalize_code};
use crate::languages::LanguageIndex;
use crate::timezones::TimezoneIndex;

/// Accept country rows: both codes present, not unsupported, first row per
/// three-letter code wins.
pub fn collect_countries(rows: &[CountryRow], codes: &CodeNormalizer<'_>) -> Result<Vec<Country>> {
    let mut seen = CaseInsensitiveSet::default();
    let mut countries = Vec::new();
    for row in rows {
        let (Some(iso_3166_2), Some(iso_3166_3)) =
            (normalize_code(&row.iso_3166_2), normalize_code(&row.iso_3166_3))
        else {
            debug!(
                iso_3166_2 = %row.iso_3166_2,
                iso_3166_3 = %row.iso_3166_3,
                "country row without both codes"
            );
            continue;
        };
        if !codes.is_supported_country(&iso_3166_3) {
            debug!(country = %iso_3166_3, "unsupported country");
            continue;
        }
        if !seen.insert(&iso_3166_3) {
            debug!(country = %iso_3166_3, "duplicate country row");
            continue;
        }

        let name = codes.country_name(row)?;
        let continent = match non_blank(row.continent.as_deref()) {
            Some(code) => {
                let continent = codes.overrides().continent(code).ok_or_else(|| {
                    ReferenceError::UnknownContinent {
                        code: code.to_string(),
                        country: iso_3166_3.clone(),
                    }
                })?;
                Some(continent.code3.clone())
            }
            None => None,
        };
        let default_currency = codes.derive_currency(row, &iso_3166_3)?;
        let measurement_system = codes.measurement_system(&iso_3166_3);

        countries.push(Country {
            name,
            iso_3166_2,
            iso_3166_3,
            continent,
            measurement_system,
            default_currency,
            default_language: None,
            languages: Vec::new(),
            timezones: Vec::new(),
            default_delivered_duty: None,
        });
    }
    Ok(countries)
}

/// Sort countries by name, ignoring case; ties by three-letter code.
pub fn sort_countries(countries: &mut [Country]) {
    countries.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.iso_3166_3.cmp(&b.iso_3166_3))
    });
}

/// Joins per-country tables onto accepted countries.
pub struct Consolidator<'a> {
    overrides: &'a Overrides,
    countries: &'a CountryIndex,
    languages: &'a LanguageIndex,
    options: AggregationOptions,
}

impl<'a> Consolidator<'a> {
    pub fn new(
        overrides: &'a Overrides,
        countries: &'a CountryIndex,
        languages: &'a LanguageIndex,
        options: AggregationOptions,
    ) -> Self {
        Self {
            overrides,
            countries,
            languages,
            options,
        }
    }

    /// Fill languages, timezones, default language and delivered duty.
    pub fn consolidate(
        &self,
        countries: &mut [Country],
        timezones: &[TimezoneRow],
        country_timezones: &[CountryTimezoneRow],
        default_languages: &[CountryLanguageRow],
        duties: &[CountryDutyRow],
    ) -> Result<()> {
        let zones = self.timezones_by_country(timezones, country_timezones)?;
        let defaults = self.default_language_overrides(default_languages)?;
        let duties = self.duties_by_country(duties)?;

        for country in countries.iter_mut() {
            let iso = country.iso_3166_3.as_str();
            country.languages = self.languages.spoken_in(iso);
            country.timezones = zones
                .get(iso)
                .map(|names| names.iter().cloned().collect())
                .unwrap_or_default();
            country.default_language = match defaults.get(iso) {
                Some(language) => {
                    if !country.languages.contains(language) {
                        return Err(ReferenceError::DefaultLanguageNotSpoken {
                            country: iso.to_string(),
                            language: language.clone(),
                        });
                    }
                    Some(language.clone())
                }
                None => country.languages.first().cloned(),
            };
            country.default_delivered_duty = duties.get(iso).copied();
        }
        Ok(())
    }

    /// Three-letter code of a referenced country, `None` when the reference
    /// is to an unsupported country.
    fn resolve_reference(&self, code: &str, context: &str) -> Result<Option<String>> {
        let code = code.trim();
        if self.overrides.unsupported_countries.contains(code) {
            return Ok(None);
        }
        self.countries
            .resolve(code)
            .map(|key| Some(key.iso_3166_3.clone()))
            .ok_or_else(|| ReferenceError::unknown_country(code, context))
    }

    fn timezones_by_country(
        &self,
        timezones: &[TimezoneRow],
        rows: &[CountryTimezoneRow],
    ) -> Result<BTreeMap<String, BTreeSet<String>>> {
        let index = TimezoneIndex::new(timezones);
        let mut zones: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for row in rows {
            let Some(country) = self.resolve_reference(&row.country, "country-timezones")? else {
                continue;
            };
            let zone = index
                .resolve(&row.timezone)
                .ok_or_else(|| ReferenceError::UnknownTimezone {
                    name: row.timezone.trim().to_string(),
                    country: country.clone(),
                })?;
            zones
                .entry(country)
                .or_default()
                .insert(zone.name.trim().to_string());
        }
        Ok(zones)
    }

    fn default_language_overrides(
        &self,
        rows: &[CountryLanguageRow],
    ) -> Result<BTreeMap<String, String>> {
        let mut defaults: BTreeMap<String, String> = BTreeMap::new();
        for row in rows {
            let Some(country) = self.resolve_reference(&row.country, "country-languages")? else {
                continue;
            };
            let language = self
                .languages
                .resolve(&row.language)
                .map(|entry| entry.code.clone())
                .ok_or_else(|| ReferenceError::UnknownLanguage {
                    code: row.language.trim().to_string(),
                    context: format!("country-languages for {country}"),
                })?;
            match defaults.get(&country) {
                Some(first) if *first != language => {
                    return Err(ReferenceError::AmbiguousDefaultLanguage {
                        country,
                        first: first.clone(),
                        second: language,
                    });
                }
                Some(_) => {}
                None => {
                    defaults.insert(country, language);
                }
            }
        }
        Ok(defaults)
    }

    fn duties_by_country(&self, rows: &[CountryDutyRow]) -> Result<BTreeMap<String, DeliveredDuty>> {
        let mut duties: BTreeMap<String, DeliveredDuty> = BTreeMap::new();
        for row in rows {
            let Some(country) = self.resolve_reference(&row.country, "country-duties")? else {
                continue;
            };
            let duty: DeliveredDuty = row.duty.parse().map_err(|_| ReferenceError::InvalidDuty {
                value: row.duty.trim().to_string(),
                country: country.clone(),
            })?;
            match (self.options.duty_policy, duties.get(&country)) {
                (DutyPolicy::Unique, Some(&first)) if first != duty => {
                    return Err(ReferenceError::AmbiguousDuty {
                        country,
                        first: first.to_string(),
                        second: duty.to_string(),
                    });
                }
                (DutyPolicy::Unique, Some(_)) => {}
                (DutyPolicy::Unique, None) | (DutyPolicy::LastWins, _) => {
                    duties.insert(country, duty);
                }
            }
        }
        Ok(duties)
    }
}

#[cfg(test)]
mod tests {
    use refdata_model::{CurrencyRow, LanguageRow};

    use super::*;

    fn country_row(iso2: &str, iso3: &str, name: &str, continent: &str) -> CountryRow {
        CountryRow {
            name: Some(name.to_string()),
            iso_3166_2: iso2.to_string(),
            iso_3166_3: iso3.to_string(),
            continent: Some(continent.to_string()),
            currency: Some("EUR".to_string()),
            ..CountryRow::default()
        }
    }

    fn currencies() -> Vec<CurrencyRow> {
        vec![CurrencyRow {
            name: "Euro".to_string(),
            iso_4217_3: "EUR".to_string(),
            number_decimals: 2,
        }]
    }

    fn languages() -> Vec<LanguageRow> {
        [("French", "fr", vec!["FR", "BE"]), ("Dutch", "nl", vec!["BE"])]
            .into_iter()
            .map(|(name, code, countries)| LanguageRow {
                name: name.to_string(),
                iso_639_2: code.to_string(),
                countries: countries.into_iter().map(str::to_string).collect(),
                locales: vec![],
            })
            .collect()
    }

    fn accepted(overrides: &Overrides) -> Vec<Country> {
        let table = currencies();
        let codes = CodeNormalizer::new(overrides, &table);
        collect_countries(
            &[
                country_row("FR", "FRA", "France", "EU"),
                country_row("be", "bel", "Belgium", "EUR"),
                country_row("FR", "FRA", "Duplicate", "EU"),
                country_row("AQ", "ATA", "Antarctica", "AN"),
                country_row("", "XXX", "Nowhere", "EU"),
            ],
            &codes,
        )
        .unwrap()
    }

    fn duty(country: &str, duty: &str) -> CountryDutyRow {
        CountryDutyRow {
            country: country.to_string(),
            duty: duty.to_string(),
        }
    }

    #[test]
    fn accepts_first_supported_row_per_code() {
        let overrides = Overrides::builtin();
        let countries = accepted(&overrides);
        let codes: Vec<&str> = countries.iter().map(|c| c.iso_3166_3.as_str()).collect();
        assert_eq!(codes, ["FRA", "BEL"]);
        assert_eq!(countries[0].name, "France");
        assert_eq!(countries[1].iso_3166_2, "BE");
        assert_eq!(countries[1].continent.as_deref(), Some("EUR"));
        assert_eq!(countries[0].default_currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn unknown_continent_is_fatal() {
        let overrides = Overrides::builtin();
        let table = currencies();
        let codes = CodeNormalizer::new(&overrides, &table);
        let error = collect_countries(&[country_row("FR", "FRA", "France", "ZZ")], &codes)
            .unwrap_err();
        assert_eq!(
            error,
            ReferenceError::UnknownContinent {
                code: "ZZ".to_string(),
                country: "FRA".to_string(),
            }
        );
    }

    #[test]
    fn consolidation_fills_spoken_and_default_languages() {
        let overrides = Overrides::builtin();
        let mut countries = accepted(&overrides);
        let index = CountryIndex::new(&countries);
        let languages = LanguageIndex::new(&languages(), &index);
        let consolidator = Consolidator::new(&overrides, &index, &languages, AggregationOptions::new());
        let defaults = [CountryLanguageRow {
            country: "BE".to_string(),
            language: "NL".to_string(),
        }];
        consolidator
            .consolidate(&mut countries, &[], &[], &defaults, &[])
            .unwrap();
        assert_eq!(countries[0].languages, ["fr"]);
        assert_eq!(countries[0].default_language.as_deref(), Some("fr"));
        assert_eq!(countries[1].languages, ["fr", "nl"]);
        assert_eq!(countries[1].default_language.as_deref(), Some("nl"));
    }

    #[test]
    fn default_language_must_be_spoken() {
        let overrides = Overrides::builtin();
        let mut countries = accepted(&overrides);
        let index = CountryIndex::new(&countries);
        let languages = LanguageIndex::new(&languages(), &index);
        let consolidator = Consolidator::new(&overrides, &index, &languages, AggregationOptions::new());
        let defaults = [CountryLanguageRow {
            country: "FRA".to_string(),
            language: "nl".to_string(),
        }];
        let error = consolidator
            .consolidate(&mut countries, &[], &[], &defaults, &[])
            .unwrap_err();
        assert!(matches!(error, ReferenceError::DefaultLanguageNotSpoken { .. }));
    }

    #[test]
    fn conflicting_default_languages_are_fatal() {
        let overrides = Overrides::builtin();
        let mut countries = accepted(&overrides);
        let index = CountryIndex::new(&countries);
        let languages = LanguageIndex::new(&languages(), &index);
        let consolidator = Consolidator::new(&overrides, &index, &languages, AggregationOptions::new());
        let defaults = ["fr", "nl"].map(|language| CountryLanguageRow {
            country: "BEL".to_string(),
            language: language.to_string(),
        });
        let error = consolidator
            .consolidate(&mut countries, &[], &[], &defaults, &[])
            .unwrap_err();
        assert!(matches!(error, ReferenceError::AmbiguousDefaultLanguage { .. }));
    }

    #[test]
    fn duty_policy_controls_conflicts() {
        let overrides = Overrides::builtin();
        let mut countries = accepted(&overrides);
        let index = CountryIndex::new(&countries);
        let languages = LanguageIndex::new(&languages(), &index);
        let rows = [duty("FRA", "paid"), duty("FR", "paid"), duty("FRA", "ddu")];

        let unique = Consolidator::new(&overrides, &index, &languages, AggregationOptions::new());
        let error = unique
            .consolidate(&mut countries, &[], &[], &[], &rows)
            .unwrap_err();
        assert_eq!(
            error,
            ReferenceError::AmbiguousDuty {
                country: "FRA".to_string(),
                first: "paid".to_string(),
                second: "unpaid".to_string(),
            }
        );

        let options = AggregationOptions::new().with_duty_policy(DutyPolicy::LastWins);
        let last_wins = Consolidator::new(&overrides, &index, &languages, options);
        last_wins
            .consolidate(&mut countries, &[], &[], &[], &rows)
            .unwrap();
        assert_eq!(countries[0].default_delivered_duty, Some(DeliveredDuty::Unpaid));
        assert_eq!(countries[1].default_delivered_duty, None);
    }

    #[test]
    fn duty_rows_for_unsupported_countries_are_ignored() {
        let overrides = Overrides::builtin();
        let mut countries = accepted(&overrides);
        let index = CountryIndex::new(&countries);
        let languages = LanguageIndex::new(&languages(), &index);
        let consolidator = Consolidator::new(&overrides, &index, &languages, AggregationOptions::new());
        consolidator
            .consolidate(&mut countries, &[], &[], &[], &[duty("ATA", "paid")])
            .unwrap();
        let error = consolidator
            .consolidate(&mut countries, &[], &[], &[], &[duty("DEU", "paid")])
            .unwrap_err();
        assert_eq!(error, ReferenceError::unknown_country("DEU", "country-duties"));
        let error = consolidator
            .consolidate(&mut countries, &[], &[], &[], &[duty("FRA", "free")])
            .unwrap_err();
        assert!(matches!(error, ReferenceError::InvalidDuty { .. }));
    }

    #[test]
    fn timezones_resolve_by_name_or_description() {
        let overrides = Overrides::builtin();
        let mut countries = accepted(&overrides);
        let index = CountryIndex::new(&countries);
        let languages = LanguageIndex::new(&languages(), &index);
        let consolidator = Consolidator::new(&overrides, &index, &languages, AggregationOptions::new());
        let zones = [TimezoneRow {
            name: "Europe/Paris".to_string(),
            description: "Central European Time".to_string(),
            offset: 60,
        }];
        let joins = [
            CountryTimezoneRow {
                country: "FRA".to_string(),
                timezone: "central european time".to_string(),
            },
            CountryTimezoneRow {
                country: "BE".to_string(),
                timezone: "Europe/Paris".to_string(),
            },
        ];
        consolidator
            .consolidate(&mut countries, &zones, &joins, &[], &[])
            .unwrap();
        assert_eq!(countries[0].timezones, ["Europe/Paris"]);
        assert_eq!(countries[1].timezones, ["Europe/Paris"]);

        let bad = [CountryTimezoneRow {
            country: "FRA".to_string(),
            timezone: "Mars/Olympus".to_string(),
        }];
        let error = consolidator
            .consolidate(&mut countries, &zones, &bad, &[], &[])
            .unwrap_err();
        assert!(matches!(error, ReferenceError::UnknownTimezone { .. }));
    }

    #[test]
    fn sorts_by_name_ignoring_case() {
        let overrides = Overrides::builtin();
        let mut countries = accepted(&overrides);
        sort_countries(&mut countries);
        assert_eq!(countries[0].name, "Belgium");
    }
}
