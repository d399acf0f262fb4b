//! Region aggregation.
//!
//! A region is a named set of countries whose currencies, languages,
//! timezones and measurement systems are the union of its members'. Four
//! kinds are generated: one per country, one per continent (Antarctica
//! excluded), the fixed-membership regions, and the world.

use std::collections::BTreeSet;

use refdata_model::{
    CaseInsensitiveMap, CaseInsensitiveSet, Country, MeasurementSystem, ReferenceError, Region,
    Result,
};
use refdata_overrides::Overrides;

/// Lowercase ASCII slug; runs of anything else become a single `-`.
///
/// ```
/// use refdata_core::regions::slug;
/// assert_eq!(slug("North America"), "north-america");
/// assert_eq!(slug("  Côte d'Ivoire "), "c-te-d-ivoire");
/// ```
pub fn slug(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_dash = false;
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

pub fn currencies_for_countries(countries: &[&Country]) -> Vec<String> {
    countries
        .iter()
        .filter_map(|country| country.default_currency.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn languages_for_countries(countries: &[&Country]) -> Vec<String> {
    countries
        .iter()
        .flat_map(|country| country.languages.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn timezones_for_countries(countries: &[&Country]) -> Vec<String> {
    countries
        .iter()
        .flat_map(|country| country.timezones.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn measurement_systems_for_countries(countries: &[&Country]) -> Vec<MeasurementSystem> {
    countries
        .iter()
        .map(|country| country.measurement_system)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn region(id: String, name: &str, members: &[&Country]) -> Region {
    Region {
        id,
        name: name.to_string(),
        countries: members
            .iter()
            .map(|country| country.iso_3166_3.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect(),
        currencies: currencies_for_countries(members),
        languages: languages_for_countries(members),
        measurement_systems: measurement_systems_for_countries(members),
        timezones: timezones_for_countries(members),
    }
}

/// Generate every region, check id uniqueness and sort by name.
pub fn build_regions(countries: &[Country], overrides: &Overrides) -> Result<Vec<Region>> {
    let mut regions = Vec::new();

    for country in countries {
        regions.push(region(slug(&country.iso_3166_3), &country.name, &[country]));
    }

    for continent in &overrides.continents {
        if continent
            .code3
            .eq_ignore_ascii_case(&overrides.excluded_region_continent)
        {
            continue;
        }
        let members: Vec<&Country> = countries
            .iter()
            .filter(|country| country.continent.as_deref() == Some(continent.code3.as_str()))
            .collect();
        regions.push(region(slug(&continent.name), &continent.name, &members));
    }

    let by_code: CaseInsensitiveMap<&Country> = countries
        .iter()
        .map(|country| (country.iso_3166_3.as_str(), country))
        .collect();
    for named in &overrides.named_regions {
        let members = named
            .members
            .iter()
            .map(|code| {
                by_code
                    .get(code)
                    .copied()
                    .ok_or_else(|| ReferenceError::unknown_country(code, format!("region {}", named.id)))
            })
            .collect::<Result<Vec<&Country>>>()?;
        regions.push(region(named.id.clone(), &named.name, &members));
    }

    let everyone: Vec<&Country> = countries.iter().collect();
    let mut world = region("world".to_string(), "World", &everyone);
    world.measurement_systems = MeasurementSystem::ALL.to_vec();
    regions.push(world);

    assert_unique_region_ids(&regions)?;
    sort_regions(&mut regions);
    Ok(regions)
}

/// Fail on the first id that appears twice.
pub fn assert_unique_region_ids(regions: &[Region]) -> Result<()> {
    let mut seen = CaseInsensitiveSet::default();
    for region in regions {
        if !seen.insert(&region.id) {
            return Err(ReferenceError::DuplicateRegionId {
                id: region.id.clone(),
            });
        }
    }
    Ok(())
}

pub fn sort_regions(regions: &mut [Region]) {
    regions.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });
}
