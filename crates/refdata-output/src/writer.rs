//! JSON sink for an aggregated dataset.
//!
//! Every file is rendered in memory before anything touches the disk, so an
//! empty collection aborts the run without leaving a partial output
//! directory. Each file is then written to a temporary sibling and renamed
//! into place.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use refdata_model::{ReferenceData, ReferenceError};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{OutputError, Result};
use crate::manifest::Manifest;

pub const COUNTRIES_FILE: &str = "countries.json";
pub const CURRENCIES_FILE: &str = "currencies.json";
pub const LANGUAGES_FILE: &str = "languages.json";
pub const LOCALES_FILE: &str = "locales.json";
pub const REGIONS_FILE: &str = "regions.json";
pub const PROVINCES_FILE: &str = "provinces.json";
pub const TIMEZONES_FILE: &str = "timezones.json";
pub const CONTINENTS_FILE: &str = "continents.json";
pub const CURRENCY_FORMAT_FILE: &str = "currency-format.json";
pub const MANIFEST_FILE: &str = "manifest.json";

/// A serialized output file held in memory.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub name: &'static str,
    pub records: usize,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub name: &'static str,
    pub path: PathBuf,
    pub records: usize,
}

#[derive(Debug, Clone)]
pub struct WriteSummary {
    pub files: Vec<WrittenFile>,
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
}

/// Serialize every collection as pretty JSON.
///
/// The core entity lists must be non-empty. Provinces and currency formats
/// come from optional tables and may render as an empty collection.
pub fn render_outputs(data: &ReferenceData) -> Result<Vec<RenderedFile>> {
    require_records("countries", data.countries.len())?;
    require_records("currencies", data.currencies.len())?;
    require_records("languages", data.languages.len())?;
    require_records("locales", data.locales.len())?;
    require_records("regions", data.regions.len())?;
    require_records("timezones", data.timezones.len())?;
    require_records("continents", data.continents.len())?;

    Ok(vec![
        render(COUNTRIES_FILE, "countries", &data.countries, data.countries.len())?,
        render(CURRENCIES_FILE, "currencies", &data.currencies, data.currencies.len())?,
        render(LANGUAGES_FILE, "languages", &data.languages, data.languages.len())?,
        render(LOCALES_FILE, "locales", &data.locales, data.locales.len())?,
        render(REGIONS_FILE, "regions", &data.regions, data.regions.len())?,
        render(PROVINCES_FILE, "provinces", &data.provinces, data.provinces.len())?,
        render(TIMEZONES_FILE, "timezones", &data.timezones, data.timezones.len())?,
        render(CONTINENTS_FILE, "continents", &data.continents, data.continents.len())?,
        render(
            CURRENCY_FORMAT_FILE,
            "currency formats",
            &data.currency_formats,
            data.currency_formats.len(),
        )?,
    ])
}

fn require_records(entity: &str, records: usize) -> Result<()> {
    if records == 0 {
        return Err(ReferenceError::EmptyOutput {
            entity: entity.to_string(),
        }
        .into());
    }
    Ok(())
}

fn render<T: Serialize + ?Sized>(
    name: &'static str,
    entity: &str,
    value: &T,
    records: usize,
) -> Result<RenderedFile> {
    let mut bytes = serde_json::to_vec_pretty(value)
        .map_err(|source| OutputError::Serialize { file: name, source })?;
    if bytes.is_empty() {
        return Err(ReferenceError::EmptyOutput {
            entity: entity.to_string(),
        }
        .into());
    }
    bytes.push(b'\n');
    Ok(RenderedFile {
        name,
        records,
        bytes,
    })
}

/// Render and write every output file plus `manifest.json` into `dir`.
pub fn write_reference_data(dir: &Path, data: &ReferenceData) -> Result<WriteSummary> {
    let rendered = render_outputs(data)?;
    fs::create_dir_all(dir).map_err(|e| OutputError::io("create directory", dir, e))?;

    let mut files = Vec::with_capacity(rendered.len());
    for file in &rendered {
        let path = dir.join(file.name);
        write_atomic(&path, &file.bytes)?;
        debug!(path = %path.display(), records = file.records, "output written");
        files.push(WrittenFile {
            name: file.name,
            path,
            records: file.records,
        });
    }

    let manifest = Manifest::from_files(&rendered);
    let mut bytes = serde_json::to_vec_pretty(&manifest).map_err(|source| OutputError::Serialize {
        file: MANIFEST_FILE,
        source,
    })?;
    bytes.push(b'\n');
    let manifest_path = dir.join(MANIFEST_FILE);
    write_atomic(&manifest_path, &bytes)?;

    info!(
        output_dir = %dir.display(),
        file_count = files.len(),
        "reference data written"
    );
    Ok(WriteSummary {
        files,
        manifest_path,
        manifest,
    })
}

/// Write to `<path>.tmp`, sync, then rename over `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut temp_name = path.as_os_str().to_os_string();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    let mut file = File::create(&temp_path).map_err(|e| OutputError::io("create", &temp_path, e))?;
    file.write_all(bytes)
        .map_err(|e| OutputError::io("write", &temp_path, e))?;
    file.sync_all()
        .map_err(|e| OutputError::io("sync", &temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| OutputError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })
}
