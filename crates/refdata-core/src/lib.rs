//! Reference data aggregation engine.
//!
//! Takes the cleansed source tables and produces one mutually consistent
//! dataset. The stages, in order:
//!
//! - [`codes`]: country acceptance, naming, currency derivation and remaps
//! - [`locales`]: number-format rows resolved to language/country locales
//! - [`countries`] and [`currencies`]: per-country joins and defaults
//! - [`regions`]: per-country, per-continent, fixed-membership and world
//!   regions
//! - [`provinces`]: subdivisions of allow-listed countries
//!
//! [`aggregate`] runs all of them.

pub mod codes;
pub mod continents;
pub mod countries;
pub mod currencies;
pub mod formats;
pub mod languages;
pub mod locales;
pub mod pipeline;
pub mod provinces;
pub mod regions;
pub mod timezones;

pub use codes::{CodeNormalizer, CountryIndex, CountryKey, normalize_code};
pub use locales::{LocaleResolver, format_locale_id, normalize_group_separator};
pub use pipeline::{aggregate, aggregate_with};
pub use regions::{
    assert_unique_region_ids, currencies_for_countries, languages_for_countries,
    measurement_systems_for_countries, slug, timezones_for_countries,
};
