//! Language table indexing and the published language list.

use std::collections::{BTreeMap, BTreeSet};

use refdata_model::{CaseInsensitiveMap, Language, LanguageRow, Locale};
use tracing::debug;

use crate::codes::CountryIndex;
use crate::locales::{format_locale_id, locale_ids};

/// A language spoken in at least one supported country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub name: String,
    /// Lowercase two-letter code.
    pub code: String,
    /// Three-letter codes of supported countries.
    pub countries: BTreeSet<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LanguageIndex {
    entries: Vec<LanguageEntry>,
    by_code: CaseInsensitiveMap<usize>,
    spoken: BTreeMap<String, BTreeSet<String>>,
}

impl LanguageIndex {
    /// Country references are resolved through `countries`; codes of
    /// unknown or unsupported countries are ignored. First row per code wins.
    pub fn new(rows: &[LanguageRow], countries: &CountryIndex) -> Self {
        let mut index = Self::default();
        for row in rows {
            let code = row.iso_639_2.trim().to_ascii_lowercase();
            if code.is_empty() || index.by_code.contains_key(&code) {
                continue;
            }
            let members: BTreeSet<String> = row
                .countries
                .iter()
                .filter_map(|code| countries.resolve(code))
                .map(|key| key.iso_3166_3.clone())
                .collect();
            if members.is_empty() {
                debug!(language = %code, "language spoken in no supported country");
                continue;
            }
            for member in &members {
                index
                    .spoken
                    .entry(member.clone())
                    .or_default()
                    .insert(code.clone());
            }
            index.by_code.insert(&code, index.entries.len());
            index.entries.push(LanguageEntry {
                name: row.name.trim().to_string(),
                code,
                countries: members,
            });
        }
        index
    }

    pub fn resolve(&self, code: &str) -> Option<&LanguageEntry> {
        self.by_code.get(code).map(|&position| &self.entries[position])
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    /// Sorted language codes spoken in a country.
    pub fn spoken_in(&self, iso_3166_3: &str) -> Vec<String> {
        self.spoken
            .get(iso_3166_3)
            .map(|codes| codes.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Final language records, sorted by name.
pub fn build_languages(index: &LanguageIndex, rows: &[LanguageRow], locales: &[Locale]) -> Vec<Language> {
    let mut by_language: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for locale in locales {
        if let Some(language) = locale.language.as_deref() {
            by_language.entry(language).or_default().insert(&locale.id);
        }
    }

    let resolved = locale_ids(locales);
    for row in rows {
        for listed in &row.locales {
            let id = format_locale_id(&[listed.as_str()]);
            if !resolved.contains(&id) {
                debug!(language = %row.iso_639_2, locale = %id, "listed locale did not resolve");
            }
        }
    }

    let mut languages: Vec<Language> = index
        .entries()
        .iter()
        .map(|entry| Language {
            name: entry.name.clone(),
            iso_639_2: entry.code.clone(),
            countries: entry.countries.iter().cloned().collect(),
            locales: by_language
                .get(entry.code.as_str())
                .map(|ids| ids.iter().map(|id| (*id).to_string()).collect())
                .unwrap_or_default(),
        })
        .collect();
    languages.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.iso_639_2.cmp(&b.iso_639_2))
    });
    languages
}
