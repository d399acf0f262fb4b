//! Province (first-level subdivision) resolution.

use std::collections::BTreeMap;

use refdata_model::{
    CaseInsensitiveSet, Locale, Province, ProvinceRow, ProvinceTranslation,
    ProvinceTranslationRow, ProvinceType, ReferenceError, Result,
};
use refdata_overrides::Overrides;
use tracing::debug;

use crate::codes::CountryIndex;
use crate::locales::{find_locale, locale_ids};

/// Clean a subdivision name for display.
///
/// A bracketed alias replaces the whole name (`"Ash Shariqah [Sharjah]"`
/// becomes `"Sharjah"`); otherwise parenthetical qualifiers are removed.
/// Whitespace is collapsed either way.
pub fn cleanse_province_name(raw: &str) -> String {
    if let Some(start) = raw.find('[')
        && let Some(len) = raw[start + 1..].find(']')
    {
        let alias = collapse_whitespace(&raw[start + 1..start + 1 + len]);
        if !alias.is_empty() {
            return alias;
        }
    }
    let mut kept = String::with_capacity(raw.len());
    let mut depth = 0usize;
    for ch in raw.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => kept.push(ch),
            _ => {}
        }
    }
    collapse_whitespace(&kept)
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Local part of a subdivision code: everything after the first `-`.
fn local_code(code: &str) -> &str {
    let code = code.trim();
    code.split_once('-').map_or(code, |(_, local)| local.trim())
}

pub struct ProvinceResolver<'a> {
    overrides: &'a Overrides,
    countries: &'a CountryIndex,
}

impl<'a> ProvinceResolver<'a> {
    pub fn new(overrides: &'a Overrides, countries: &'a CountryIndex) -> Self {
        Self {
            overrides,
            countries,
        }
    }

    /// Provinces of allow-listed countries with their translations, sorted
    /// by country, name and id.
    pub fn resolve(
        &self,
        rows: &[ProvinceRow],
        translations: &[ProvinceTranslationRow],
        locales: &[Locale],
    ) -> Result<Vec<Province>> {
        let translations = group_translations(translations, locales);
        let mut seen = CaseInsensitiveSet::default();
        let mut suppressed = 0usize;
        let mut provinces = Vec::new();

        for row in rows {
            let code = row.country.trim();
            if self.overrides.unsupported_countries.contains(code) {
                suppressed += 1;
                continue;
            }
            let country = self
                .countries
                .resolve(code)
                .ok_or_else(|| ReferenceError::unknown_country(code, "provinces"))?;
            if !self.overrides.province_countries.contains(&country.iso_3166_3) {
                suppressed += 1;
                continue;
            }
            let local = local_code(&row.iso_3166_2);
            if local.is_empty() {
                debug!(country = %country.iso_3166_3, name = %row.name, "province without subdivision code");
                continue;
            }
            let id = format!("{}-{}", country.iso_3166_3, local.to_ascii_uppercase());
            if !seen.insert(&id) {
                debug!(province = %id, "duplicate province row");
                continue;
            }
            let mut name = cleanse_province_name(&row.name);
            if name.is_empty() {
                name = collapse_whitespace(&row.name);
            }
            let province_type = row
                .province_type
                .as_deref()
                .map_or(ProvinceType::Other, ProvinceType::parse_lenient);
            provinces.push(Province {
                translations: translations.get(&id).cloned().unwrap_or_default(),
                id,
                iso_3166_2: row.iso_3166_2.trim().to_string(),
                name,
                country: country.iso_3166_3.clone(),
                province_type,
            });
        }

        if suppressed > 0 {
            debug!(suppressed, "province rows outside the allow-list");
        }
        provinces.sort_by(|a, b| {
            a.country
                .cmp(&b.country)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(provinces)
    }
}

/// Translations keyed by uppercased province id, one per locale, sorted by
/// locale id. Rows naming an unresolved locale are skipped.
fn group_translations(
    rows: &[ProvinceTranslationRow],
    locales: &[Locale],
) -> BTreeMap<String, Vec<ProvinceTranslation>> {
    let ids = locale_ids(locales);
    let mut grouped: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
    for row in rows {
        let Some(locale) = find_locale(&ids, &row.locale) else {
            debug!(province = %row.province, locale = %row.locale, "translation for unknown locale");
            continue;
        };
        let name = collapse_whitespace(&row.name);
        if name.is_empty() {
            continue;
        }
        grouped
            .entry(row.province.trim().to_ascii_uppercase())
            .or_default()
            .entry(locale.to_string())
            .or_insert(name);
    }
    grouped
        .into_iter()
        .map(|(province, names)| {
            let translations = names
                .into_iter()
                .map(|(locale, name)| ProvinceTranslation { locale, name })
                .collect();
            (province, translations)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use refdata_model::{Country, LocaleNumbers, MeasurementSystem};

    use super::*;

    fn country(iso2: &str, iso3: &str) -> Country {
        Country {
            name: iso3.to_string(),
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

    fn province(country: &str, code: &str, name: &str, kind: Option<&str>) -> ProvinceRow {
        ProvinceRow {
            country: country.to_string(),
            iso_3166_2: code.to_string(),
            name: name.to_string(),
            province_type: kind.map(str::to_string),
        }
    }

    fn locale(id: &str) -> Locale {
        Locale {
            id: id.to_string(),
            name: id.to_string(),
            country: "ARE".to_string(),
            language: Some("ar".to_string()),
            numbers: LocaleNumbers {
                decimal: ".".to_string(),
                group: ",".to_string(),
            },
        }
    }

    fn translation(province: &str, locale: &str, name: &str) -> ProvinceTranslationRow {
        ProvinceTranslationRow {
            province: province.to_string(),
            locale: locale.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn cleanses_names() {
        assert_eq!(cleanse_province_name("Ash Shariqah [Sharjah]"), "Sharjah");
        assert_eq!(cleanse_province_name("Dubayy (Dubai)"), "Dubayy");
        assert_eq!(cleanse_province_name("  New   York "), "New York");
        assert_eq!(cleanse_province_name("Broken [alias"), "Broken [alias");
        assert_eq!(cleanse_province_name("Empty [ ] (x)"), "Empty [ ]");
    }

    #[test]
    fn local_code_takes_text_after_first_dash() {
        assert_eq!(local_code("AE-SH"), "SH");
        assert_eq!(local_code("SH"), "SH");
        assert_eq!(local_code("FR-75-C"), "75-C");
    }

    #[test]
    fn resolves_allow_listed_provinces() {
        let overrides = Overrides::builtin();
        let index = CountryIndex::new(&[country("AE", "ARE"), country("FR", "FRA")]);
        let resolver = ProvinceResolver::new(&overrides, &index);
        let rows = [
            province("AE", "AE-SH", "Ash Shariqah [Sharjah]", Some("Emirate")),
            province("ARE", "du", "Dubayy", None),
            province("AE", "AE-SH", "Duplicate", None),
            province("FR", "FR-IDF", "Île-de-France", Some("region")),
            province("AF", "AF-KAB", "Kabul", None),
        ];
        let translations = [
            translation("are-sh", "AR_ae", "الشارقة"),
            translation("ARE-SH", "ar-AE", "later duplicate"),
            translation("ARE-SH", "xx-yy", "unknown locale"),
        ];
        let provinces = resolver
            .resolve(&rows, &translations, &[locale("ar-ae")])
            .unwrap();

        let ids: Vec<&str> = provinces.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["ARE-DU", "ARE-SH"]);
        let sharjah = &provinces[1];
        assert_eq!(sharjah.name, "Sharjah");
        assert_eq!(sharjah.iso_3166_2, "AE-SH");
        assert_eq!(sharjah.province_type, ProvinceType::Emirate);
        assert_eq!(
            sharjah.translations,
            [ProvinceTranslation {
                locale: "ar-ae".to_string(),
                name: "الشارقة".to_string(),
            }]
        );
        assert_eq!(provinces[0].province_type, ProvinceType::Other);
        assert!(provinces[0].translations.is_empty());
    }

    #[test]
    fn unknown_country_is_fatal() {
        let overrides = Overrides::builtin();
        let index = CountryIndex::new(&[country("AE", "ARE")]);
        let resolver = ProvinceResolver::new(&overrides, &index);
        let error = resolver
            .resolve(&[province("ZZ", "ZZ-01", "Nowhere", None)], &[], &[])
            .unwrap_err();
        assert_eq!(error, ReferenceError::unknown_country("ZZ", "provinces"));
    }
}
