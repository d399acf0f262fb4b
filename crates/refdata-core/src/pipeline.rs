//! Full aggregation run over preloaded source tables.

use std::time::Instant;

use refdata_model::{AggregationOptions, ReferenceData, Result, SourceTables};
use refdata_overrides::Overrides;
use tracing::{info, info_span};

use crate::codes::{CodeNormalizer, CountryIndex};
use crate::continents::build_continents;
use crate::countries::{Consolidator, collect_countries, sort_countries};
use crate::currencies::{assign_default_locales, build_currencies};
use crate::formats::build_currency_formats;
use crate::languages::{LanguageIndex, build_languages};
use crate::locales::LocaleResolver;
use crate::provinces::ProvinceResolver;
use crate::regions::build_regions;
use crate::timezones::build_timezones;

/// Aggregate with the process-wide override tables.
pub fn aggregate(tables: &SourceTables, options: &AggregationOptions) -> Result<ReferenceData> {
    aggregate_with(tables, options, Overrides::global())
}

/// Aggregate with explicit override tables.
///
/// Stages run in dependency order: codes, locales, countries and
/// currencies, regions, provinces. The first integrity violation aborts the
/// run; nothing partial is returned.
pub fn aggregate_with(
    tables: &SourceTables,
    options: &AggregationOptions,
    overrides: &Overrides,
) -> Result<ReferenceData> {
    let run_start = Instant::now();
    let codes = CodeNormalizer::new(overrides, &tables.currencies);

    let mut countries = info_span!("codes").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let countries = collect_countries(&tables.countries, &codes)?;
        info!(
            input_rows = tables.countries.len(),
            country_count = countries.len(),
            duration_ms = start.elapsed().as_millis(),
            "countries accepted"
        );
        Ok(countries)
    })?;
    let country_index = CountryIndex::new(&countries);
    let language_index = LanguageIndex::new(&tables.languages, &country_index);

    let locales = info_span!("locales").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let resolver = LocaleResolver::new(
            overrides,
            &country_index,
            &language_index,
            &tables.locale_names,
        );
        let locales = resolver.resolve(&tables.numbers)?;
        info!(
            input_rows = tables.numbers.len(),
            locale_count = locales.len(),
            duration_ms = start.elapsed().as_millis(),
            "locales resolved"
        );
        Ok(locales)
    })?;

    let currencies = info_span!("consolidate").in_scope(|| -> Result<_> {
        let start = Instant::now();
        Consolidator::new(overrides, &country_index, &language_index, *options).consolidate(
            &mut countries,
            &tables.timezones,
            &tables.country_timezones,
            &tables.country_languages,
            &tables.country_duties,
        )?;
        sort_countries(&mut countries);
        let mut currencies =
            build_currencies(&tables.currencies, &tables.currency_symbols, &codes, options)?;
        assign_default_locales(
            &mut currencies,
            &countries,
            &locales,
            &tables.currency_locales,
            &codes,
        )?;
        info!(
            country_count = countries.len(),
            currency_count = currencies.len(),
            duration_ms = start.elapsed().as_millis(),
            "countries and currencies consolidated"
        );
        Ok(currencies)
    })?;
    let languages = build_languages(&language_index, &tables.languages, &locales);

    let regions = info_span!("regions").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let regions = build_regions(&countries, overrides)?;
        info!(
            region_count = regions.len(),
            duration_ms = start.elapsed().as_millis(),
            "regions built"
        );
        Ok(regions)
    })?;

    let provinces = info_span!("provinces").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let provinces = ProvinceResolver::new(overrides, &country_index).resolve(
            &tables.provinces,
            &tables.province_translations,
            &locales,
        )?;
        info!(
            input_rows = tables.provinces.len(),
            province_count = provinces.len(),
            duration_ms = start.elapsed().as_millis(),
            "provinces resolved"
        );
        Ok(provinces)
    })?;

    let timezones = build_timezones(&tables.timezones);
    let continents = build_continents(&countries, overrides);
    let currency_formats = build_currency_formats(&locales, &countries, &currencies);

    info!(
        country_count = countries.len(),
        currency_count = currencies.len(),
        language_count = languages.len(),
        locale_count = locales.len(),
        region_count = regions.len(),
        province_count = provinces.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "aggregation complete"
    );

    Ok(ReferenceData {
        countries,
        currencies,
        languages,
        locales,
        regions,
        provinces,
        timezones,
        continents,
        currency_formats,
    })
}
