//! Continent listing.

use refdata_model::{Continent, Country};
use refdata_overrides::Overrides;

/// Every continent in the override table with its member countries.
pub fn build_continents(countries: &[Country], overrides: &Overrides) -> Vec<Continent> {
    let mut continents: Vec<Continent> = overrides
        .continents
        .iter()
        .map(|definition| {
            let mut members: Vec<String> = countries
                .iter()
                .filter(|country| country.continent.as_deref() == Some(definition.code3.as_str()))
                .map(|country| country.iso_3166_3.clone())
                .collect();
            members.sort();
            members.dedup();
            Continent {
                name: definition.name.clone(),
                code: definition.code3.clone(),
                countries: members,
            }
        })
        .collect();
    continents.sort_by(|a, b| a.name.cmp(&b.name));
    continents
}
