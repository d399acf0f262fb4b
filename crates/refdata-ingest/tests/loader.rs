//! Tests for loading source tables from a directory.

use std::fs;
use std::path::Path;

use refdata_ingest::{ALL_TABLES, IngestError, TableFormat, load_source_tables, locate_table, tables};
use tempfile::tempdir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn write_required(dir: &Path) {
    write(
        dir,
        "countries.csv",
        "official_name_en,name,alternate_name,iso_3166_2,iso_3166_3,continent,currency\n\
         ,Czechia,,CZ,CZE,EU,\n\
         France,France,,FR,FRA,EU,EUR\n",
    );
    write(
        dir,
        "currencies.json",
        r#"[{"name": "Euro", "iso_4217_3": "EUR", "number_decimals": 2}]"#,
    );
    write(
        dir,
        "languages.json",
        r#"[{"name": "French", "iso_639_2": "fr", "countries": ["FR"], "locales": ["fr-FR"]}]"#,
    );
    write(
        dir,
        "numbers.csv",
        "language,territory,decimal,group\nfr,FR,\",\",\" \"\nfr,,\",\",\u{202f}\n",
    );
    write(
        dir,
        "timezones.json",
        r#"[{"name": "Europe/Paris", "description": "Central European Time", "offset": 60}]"#,
    );
    write(
        dir,
        "country-timezones.csv",
        "country,timezone\nFRA,Europe/Paris\n",
    );
}

#[test]
fn loads_json_and_csv_tables() {
    let dir = tempdir().unwrap();
    write_required(dir.path());

    let tables = load_source_tables(dir.path()).unwrap();
    assert_eq!(tables.countries.len(), 2);
    assert_eq!(tables.countries[0].official_name_en, None);
    assert_eq!(tables.countries[0].name.as_deref(), Some("Czechia"));
    assert_eq!(tables.countries[0].currency, None);
    assert_eq!(tables.countries[1].currency.as_deref(), Some("EUR"));
    assert_eq!(tables.languages[0].locales, ["fr-FR"]);
    assert_eq!(tables.timezones[0].offset, 60);
    assert_eq!(tables.country_timezones[0].timezone, "Europe/Paris");
    assert!(tables.provinces.is_empty());
    assert!(tables.currency_symbols.is_empty());
}

#[test]
fn csv_cells_keep_significant_whitespace() {
    let dir = tempdir().unwrap();
    write_required(dir.path());

    let tables = load_source_tables(dir.path()).unwrap();
    assert_eq!(tables.numbers[0].group, " ");
    assert_eq!(tables.numbers[1].territory, "");
    assert_eq!(tables.numbers[1].group, "\u{202f}");
}

#[test]
fn json_takes_precedence_over_csv() {
    let dir = tempdir().unwrap();
    write_required(dir.path());
    write(dir.path(), "country-duties.csv", "country,duty\nFRA,unpaid\n");
    write(
        dir.path(),
        "country-duties.json",
        r#"[{"country": "FRA", "duty": "paid"}]"#,
    );

    let (path, format) = locate_table(dir.path(), &tables::COUNTRY_DUTIES).unwrap();
    assert_eq!(format, TableFormat::Json);
    assert!(path.ends_with("country-duties.json"));

    let loaded = load_source_tables(dir.path()).unwrap();
    assert_eq!(loaded.country_duties.len(), 1);
    assert_eq!(loaded.country_duties[0].duty, "paid");
}

#[test]
fn missing_required_table_is_reported() {
    let dir = tempdir().unwrap();
    write_required(dir.path());
    fs::remove_file(dir.path().join("numbers.csv")).unwrap();

    let error = load_source_tables(dir.path()).unwrap_err();
    match error {
        IngestError::MissingTable {
            table, expected, ..
        } => {
            assert_eq!(table, "numbers");
            assert_eq!(expected, "numbers.json or numbers.csv");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn languages_are_json_only() {
    let dir = tempdir().unwrap();
    write_required(dir.path());
    fs::remove_file(dir.path().join("languages.json")).unwrap();
    write(dir.path(), "languages.csv", "name,iso_639_2\nFrench,fr\n");

    let error = load_source_tables(dir.path()).unwrap_err();
    assert!(matches!(error, IngestError::MissingTable { table: "languages", .. }));
}

#[test]
fn malformed_json_names_the_file() {
    let dir = tempdir().unwrap();
    write_required(dir.path());
    write(dir.path(), "currencies.json", "[{\"name\": ");

    let error = load_source_tables(dir.path()).unwrap_err();
    assert!(matches!(error, IngestError::Json { .. }));
    assert!(error.to_string().contains("currencies.json"));
}

#[test]
fn missing_directory_is_reported() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let error = load_source_tables(&missing).unwrap_err();
    assert!(matches!(error, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn catalog_lists_every_table_once() {
    let mut stems: Vec<&str> = ALL_TABLES.iter().map(|spec| spec.stem).collect();
    let total = stems.len();
    stems.sort_unstable();
    stems.dedup();
    assert_eq!(stems.len(), total);
    assert_eq!(ALL_TABLES.iter().filter(|spec| spec.required).count(), 6);
}
