//! Timezone lookup and the published timezone list.

use refdata_model::{CaseInsensitiveMap, CaseInsensitiveSet, Timezone, TimezoneRow};

/// Resolves a timezone reference by name, falling back to description.
#[derive(Debug)]
pub struct TimezoneIndex<'a> {
    rows: &'a [TimezoneRow],
    by_name: CaseInsensitiveMap<usize>,
    by_description: CaseInsensitiveMap<usize>,
}

impl<'a> TimezoneIndex<'a> {
    pub fn new(rows: &'a [TimezoneRow]) -> Self {
        let mut by_name = CaseInsensitiveMap::new();
        let mut by_description = CaseInsensitiveMap::new();
        for (position, row) in rows.iter().enumerate() {
            if !row.name.trim().is_empty() {
                by_name.insert(&row.name, position);
            }
            if !row.description.trim().is_empty() {
                by_description.insert(&row.description, position);
            }
        }
        Self {
            rows,
            by_name,
            by_description,
        }
    }

    pub fn resolve(&self, reference: &str) -> Option<&'a TimezoneRow> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }
        self.by_name
            .get(reference)
            .or_else(|| self.by_description.get(reference))
            .map(|&position| &self.rows[position])
    }
}

/// Timezones deduplicated by name (first wins), sorted by name.
pub fn build_timezones(rows: &[TimezoneRow]) -> Vec<Timezone> {
    let mut seen = CaseInsensitiveSet::default();
    let mut timezones: Vec<Timezone> = rows
        .iter()
        .filter(|row| !row.name.trim().is_empty() && seen.insert(&row.name))
        .map(|row| Timezone {
            name: row.name.trim().to_string(),
            description: row.description.trim().to_string(),
            offset: row.offset,
        })
        .collect();
    timezones.sort_by(|a, b| a.name.cmp(&b.name));
    timezones
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(name: &str, description: &str, offset: i32) -> TimezoneRow {
        TimezoneRow {
            name: name.to_string(),
            description: description.to_string(),
            offset,
        }
    }

    #[test]
    fn resolves_by_name_then_description() {
        let rows = vec![
            zone("Europe/Paris", "Central European Time", 60),
            zone("America/New_York", "Eastern Time", -300),
        ];
        let index = TimezoneIndex::new(&rows);
        assert_eq!(index.resolve("europe/paris").map(|z| z.offset), Some(60));
        assert_eq!(
            index.resolve("Eastern Time").map(|z| z.name.as_str()),
            Some("America/New_York")
        );
        assert!(index.resolve("Mars/Olympus").is_none());
        assert!(index.resolve(" ").is_none());
    }

    #[test]
    fn published_list_is_unique_and_sorted() {
        let rows = vec![
            zone("Europe/Paris", "CET", 60),
            zone("America/New_York", "ET", -300),
            zone("europe/paris", "duplicate", 0),
        ];
        let names: Vec<String> = build_timezones(&rows).into_iter().map(|z| z.name).collect();
        assert_eq!(names, ["America/New_York", "Europe/Paris"]);
    }
}
