//! Locale resolution from CLDR number-format rows.
//!
//! Each row names a language tag and a territory. Rows are matched to a
//! supported country and a known language, backfilling one side from the
//! other when it is missing. Rows that cannot be matched are dropped with a
//! log line; only a malformed group separator aborts the run.

use refdata_model::{
    CaseInsensitiveMap, CaseInsensitiveSet, Locale, LocaleNameRow, LocaleNumbers, NumberFormatRow,
    ReferenceError, Result,
};
use refdata_overrides::Overrides;
use tracing::{debug, warn};

use crate::codes::{CountryIndex, CountryKey};
use crate::languages::{LanguageEntry, LanguageIndex};

/// Join locale segments into a lowercase, hyphenated id.
///
/// Underscores count as hyphens. The first segment (the language) is always
/// kept; later segments that repeat an earlier non-language segment are
/// dropped, so `("fr", "FR")` gives `fr-fr` and `("fr-FR", "FR")` gives
/// `fr-fr` too.
pub fn format_locale_id(segments: &[&str]) -> String {
    let mut parts: Vec<String> = Vec::new();
    for segment in segments {
        for part in segment.split(['-', '_']) {
            let part = part.trim().to_ascii_lowercase();
            if part.is_empty() {
                continue;
            }
            if parts.len() > 1 && parts[1..].contains(&part) {
                continue;
            }
            parts.push(part);
        }
    }
    parts.join("-")
}

/// Canonical group separator, or `None` when the value is not recognized.
pub fn normalize_group_separator(raw: &str) -> Option<&'static str> {
    match raw {
        "," => Some(","),
        "." => Some("."),
        "'" | "\u{2019}" | "\u{02bc}" => Some("'"),
        " " | "\u{a0}" | "\u{202f}" => Some(" "),
        _ => None,
    }
}

/// Case-insensitive set of resolved locale ids.
pub fn locale_ids(locales: &[Locale]) -> CaseInsensitiveSet {
    CaseInsensitiveSet::new(locales.iter().map(|locale| locale.id.as_str()))
}

/// Canonical id of a resolved locale matching `raw` in any spelling.
pub fn find_locale<'s>(ids: &'s CaseInsensitiveSet, raw: &str) -> Option<&'s str> {
    ids.get(&format_locale_id(&[raw]))
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag).trim()
}

pub struct LocaleResolver<'a> {
    overrides: &'a Overrides,
    countries: &'a CountryIndex,
    languages: &'a LanguageIndex,
    names: CaseInsensitiveMap<String>,
}

impl<'a> LocaleResolver<'a> {
    pub fn new(
        overrides: &'a Overrides,
        countries: &'a CountryIndex,
        languages: &'a LanguageIndex,
        names: &[LocaleNameRow],
    ) -> Self {
        let names = names
            .iter()
            .map(|row| (format_locale_id(&[row.id.as_str()]), row.name.trim().to_string()))
            .collect();
        Self {
            overrides,
            countries,
            languages,
            names,
        }
    }

    /// Resolve every row, deduplicate by id and sort by display name.
    pub fn resolve(&self, rows: &[NumberFormatRow]) -> Result<Vec<Locale>> {
        let mut seen = CaseInsensitiveSet::default();
        let mut locales = Vec::new();
        let mut dropped = 0usize;
        for row in rows {
            match self.resolve_row(row)? {
                Some(locale) => {
                    if seen.insert(&locale.id) {
                        locales.push(locale);
                    }
                }
                None => dropped += 1,
            }
        }
        locales.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        debug!(
            resolved = locales.len(),
            dropped,
            "number format rows resolved"
        );
        Ok(locales)
    }

    fn resolve_row(&self, row: &NumberFormatRow) -> Result<Option<Locale>> {
        let raw_language = row.language.trim();
        let raw_territory = row.territory.trim();

        let territory = if raw_territory.is_empty() {
            None
        } else {
            let substituted = self
                .overrides
                .territory_substitutions
                .get(raw_territory)
                .map(String::as_str)
                .unwrap_or(raw_territory);
            if self.overrides.unsupported_countries.contains(raw_territory)
                || self.overrides.unsupported_countries.contains(substituted)
            {
                debug!(language = %raw_language, territory = %raw_territory, "unsupported territory");
                return Ok(None);
            }
            Some(substituted)
        };

        let resolved_country = territory.and_then(|code| self.countries.resolve(code));
        let mut language = self.resolve_language(raw_language);

        if resolved_country.is_none() && language.is_none() {
            debug!(language = %raw_language, territory = %raw_territory, "neither language nor territory resolved");
            return Ok(None);
        }

        // Backfill from a language spoken in exactly one supported country.
        let Some(country) =
            resolved_country.or_else(|| language.and_then(|entry| self.sole_country(entry)))
        else {
            debug!(language = %raw_language, territory = %raw_territory, "territory missing and language is not unique to one country");
            return Ok(None);
        };

        if language.is_none() {
            language = self
                .overrides
                .common_languages
                .get(&country.iso_3166_3)
                .and_then(|code| self.languages.resolve(code));
        }
        let Some(language) = language else {
            if self.is_unrepresentable(raw_language) {
                debug!(language = %raw_language, territory = %raw_territory, "language has no two-letter code");
            } else {
                warn!(
                    language = %raw_language,
                    territory = %raw_territory,
                    country = %country.iso_3166_3,
                    "dropping locale with unresolved language"
                );
            }
            return Ok(None);
        };

        let group = normalize_group_separator(&row.group).ok_or_else(|| {
            ReferenceError::InvalidGroupSeparator {
                value: row.group.clone(),
                language: raw_language.to_string(),
                territory: raw_territory.to_string(),
            }
        })?;

        let id = format_locale_id(&[language.code.as_str(), country.iso_3166_2.as_str()]);
        let name = self
            .names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("{} - {}", language.name, country.name));
        Ok(Some(Locale {
            id,
            name,
            country: country.iso_3166_3.clone(),
            language: Some(language.code.clone()),
            numbers: LocaleNumbers {
                decimal: row.decimal.trim().to_string(),
                group: group.to_string(),
            },
        }))
    }

    /// Whole tag first, then the primary subtag, each through the
    /// substitution table.
    fn resolve_language(&self, tag: &str) -> Option<&'a LanguageEntry> {
        if tag.is_empty() {
            return None;
        }
        let languages = self.languages;
        languages
            .resolve(&self.substitute_language(tag))
            .or_else(|| languages.resolve(&self.substitute_language(primary_subtag(tag))))
    }

    fn substitute_language(&self, tag: &str) -> String {
        let tag = tag.trim().replace('_', "-");
        self.overrides
            .language_substitutions
            .get(&tag)
            .cloned()
            .unwrap_or(tag)
    }

    fn sole_country(&self, language: &LanguageEntry) -> Option<&'a CountryKey> {
        let mut members = language.countries.iter();
        match (members.next(), members.next()) {
            (Some(only), None) => self.countries.resolve(only),
            _ => None,
        }
    }

    fn is_unrepresentable(&self, tag: &str) -> bool {
        let unrepresentable = &self.overrides.unrepresentable_languages;
        unrepresentable.contains(tag) || unrepresentable.contains(primary_subtag(tag))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use refdata_model::{Country, LanguageRow, MeasurementSystem};

    use super::*;

    fn country(name: &str, iso2: &str, iso3: &str) -> Country {
        Country {
            name: name.to_string(),
            iso_3166_2: iso2.to_string(),
            iso_3166_3: iso3.to_string(),
            continent: None,
            measurement_system: MeasurementSystem::Metric,
            default_currency: None,
            default_language: None,
            languages: vec![],
            timezones: vec![],
            default_delivered_duty: None,
        }
    }

    fn number_row(language: &str, territory: &str, decimal: &str, group: &str) -> NumberFormatRow {
        NumberFormatRow {
            language: language.to_string(),
            territory: territory.to_string(),
            decimal: decimal.to_string(),
            group: group.to_string(),
        }
    }

    #[test]
    fn locale_id_collapses_repeated_territory() {
        assert_eq!(format_locale_id(&["fr", "FR"]), "fr-fr");
        assert_eq!(format_locale_id(&["fr-FR", "FR"]), "fr-fr");
        assert_eq!(format_locale_id(&["en_US"]), "en-us");
        assert_eq!(format_locale_id(&["zh-Hant", "TW"]), "zh-hant-tw");
        assert_eq!(format_locale_id(&["", "US"]), "us");
    }

    #[test]
    fn group_separators() {
        assert_eq!(normalize_group_separator(","), Some(","));
        assert_eq!(normalize_group_separator("\u{2019}"), Some("'"));
        assert_eq!(normalize_group_separator("\u{202f}"), Some(" "));
        assert_eq!(normalize_group_separator("\u{a0}"), Some(" "));
        assert_eq!(normalize_group_separator("٬"), None);
        assert_eq!(normalize_group_separator(""), None);
    }

    #[test]
    fn primary_subtag_handles_underscores() {
        assert_eq!(primary_subtag("zh_Hant"), "zh");
        assert_eq!(primary_subtag("en"), "en");
    }

    #[test]
    fn unknown_language_backfills_from_common_language() {
        let overrides = Overrides::builtin();
        let countries = CountryIndex::new(&[
            country("Germany", "DE", "DEU"),
            country("United States", "US", "USA"),
        ]);
        let languages = LanguageIndex::new(
            &[LanguageRow {
                name: "German".to_string(),
                iso_639_2: "de".to_string(),
                countries: vec!["DE".to_string()],
                locales: vec![],
            }],
            &countries,
        );
        let resolver = LocaleResolver::new(&overrides, &countries, &languages, &[]);

        let locales = resolver
            .resolve(&[
                number_row("xx", "DE", ",", "."),
                number_row("haw", "US", ".", ","),
            ])
            .unwrap();
        assert_eq!(locales.len(), 1);
        let locale = &locales[0];
        assert_eq!(locale.id, "de-de");
        assert_eq!(locale.name, "German - Germany");
        assert_eq!(locale.country, "DEU");
        assert_eq!(locale.language.as_deref(), Some("de"));
        assert_eq!(locale.numbers.decimal, ",");
        assert_eq!(locale.numbers.group, ".");
    }

    proptest! {
        #[test]
        fn locale_ids_are_lowercase_and_deduplicated(
            language in "[a-zA-Z]{2,3}",
            territory in "[a-zA-Z]{2}",
        ) {
            let id = format_locale_id(&[language.as_str(), territory.as_str(), territory.as_str()]);
            prop_assert_eq!(id.clone(), id.to_ascii_lowercase());
            prop_assert!(!id.contains('_'));
            let parts: Vec<&str> = id.split('-').collect();
            prop_assert_eq!(parts.len(), 2);
            prop_assert_eq!(parts[0], language.to_ascii_lowercase());
        }

        #[test]
        fn locale_id_is_stable_under_reformatting(
            language in "[a-zA-Z]{2,3}",
            territory in "[a-zA-Z]{2}",
        ) {
            let id = format_locale_id(&[language.as_str(), territory.as_str()]);
            prop_assert_eq!(format_locale_id(&[id.as_str()]), id);
        }
    }
}
