#![allow(missing_docs)]

use refdata_model::{
    AggregationOptions, CountryRow, DutyPolicy, MeasurementSystem, ProvinceType, Region,
    SourceTables,
};

#[test]
fn source_tables_default_optional_joins() {
    let json = r#"{
        "countries": [{"iso_3166_2": "CZ", "iso_3166_3": "CZE", "name": "Czechia"}],
        "currencies": [{"name": "Czech Koruna", "iso_4217_3": "CZK", "number_decimals": 2}],
        "languages": [{"name": "Czech", "iso_639_2": "cs", "countries": ["CZ"]}],
        "numbers": [],
        "timezones": [],
        "country_timezones": []
    }"#;
    let tables: SourceTables = serde_json::from_str(json).expect("parse tables");
    assert_eq!(tables.countries.len(), 1);
    assert_eq!(
        tables.countries[0],
        CountryRow {
            name: Some("Czechia".to_string()),
            iso_3166_2: "CZ".to_string(),
            iso_3166_3: "CZE".to_string(),
            ..CountryRow::default()
        }
    );
    assert!(tables.country_duties.is_empty());
    assert!(tables.provinces.is_empty());
    assert!(tables.languages[0].locales.is_empty());
}

#[test]
fn region_serializes_measurement_systems_lowercase() {
    let region = Region {
        id: "world".to_string(),
        name: "World".to_string(),
        countries: vec!["USA".to_string()],
        currencies: vec!["USD".to_string()],
        languages: vec!["en".to_string()],
        measurement_systems: MeasurementSystem::ALL.to_vec(),
        timezones: vec![],
    };
    let json = serde_json::to_string(&region).expect("serialize region");
    assert!(json.contains(r#""measurement_systems":["imperial","metric"]"#));
}

#[test]
fn province_type_serializes_snake_case() {
    let json = serde_json::to_string(&ProvinceType::AutonomousCommunity).expect("serialize");
    assert_eq!(json, r#""autonomous_community""#);
}

#[test]
fn strict_options_require_symbols() {
    let options = AggregationOptions::strict();
    assert!(options.strict_symbols);
    assert_eq!(options.duty_policy, DutyPolicy::Unique);
    let relaxed = AggregationOptions::new().with_duty_policy(DutyPolicy::LastWins);
    assert!(!relaxed.strict_symbols);
    assert_eq!(relaxed.duty_policy, DutyPolicy::LastWins);
}
