//! Table loading.
//!
//! Each table is read from the first existing file among its
//! [`TableSpec::file_names`]. JSON files hold an array of objects; CSV files
//! carry a header row whose names match the row fields.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use csv::ReaderBuilder;
use refdata_model::SourceTables;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::tables::{self, TableFormat, TableSpec};

/// Load every table from `dir`.
///
/// Missing required tables are an error; missing optional tables load as
/// empty.
pub fn load_source_tables(dir: &Path) -> Result<SourceTables> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let start = Instant::now();
    let source = SourceTables {
        countries: read_table(dir, &tables::COUNTRIES)?,
        currencies: read_table(dir, &tables::CURRENCIES)?,
        languages: read_table(dir, &tables::LANGUAGES)?,
        numbers: read_table(dir, &tables::NUMBERS)?,
        timezones: read_table(dir, &tables::TIMEZONES)?,
        country_timezones: read_table(dir, &tables::COUNTRY_TIMEZONES)?,
        country_duties: read_table(dir, &tables::COUNTRY_DUTIES)?,
        country_languages: read_table(dir, &tables::COUNTRY_LANGUAGES)?,
        currency_locales: read_table(dir, &tables::CURRENCY_LOCALES)?,
        currency_symbols: read_table(dir, &tables::CURRENCY_SYMBOLS)?,
        locale_names: read_table(dir, &tables::LOCALE_NAMES)?,
        provinces: read_table(dir, &tables::PROVINCES)?,
        province_translations: read_table(dir, &tables::PROVINCE_TRANSLATIONS)?,
    };
    info!(
        source_dir = %dir.display(),
        duration_ms = start.elapsed().as_millis(),
        "source tables loaded"
    );
    Ok(source)
}

/// First existing file for a table, with its format.
pub fn locate_table(dir: &Path, spec: &TableSpec) -> Option<(PathBuf, TableFormat)> {
    spec.formats.iter().find_map(|format| {
        let path = dir.join(format!("{}.{}", spec.stem, format.extension()));
        path.is_file().then_some((path, *format))
    })
}

pub fn read_table<T: DeserializeOwned>(dir: &Path, spec: &TableSpec) -> Result<Vec<T>> {
    let Some((path, format)) = locate_table(dir, spec) else {
        if spec.required {
            return Err(IngestError::MissingTable {
                table: spec.stem,
                dir: dir.to_path_buf(),
                expected: spec.file_names().join(" or "),
            });
        }
        debug!(table = spec.stem, "optional table not present");
        return Ok(Vec::new());
    };
    let rows = match format {
        TableFormat::Json => read_json_rows(&path)?,
        TableFormat::Csv => read_csv_rows(&path)?,
    };
    debug!(
        table = spec.stem,
        path = %path.display(),
        row_count = rows.len(),
        "table loaded"
    );
    Ok(rows)
}

pub fn read_json_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let bytes = fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Rows of a headed CSV file. Cells are not trimmed: a single space is a
/// meaningful group separator.
pub fn read_csv_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let csv_error = |source: csv::Error| IngestError::CsvRead {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(csv_error)?;
    reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(csv_error)
}
