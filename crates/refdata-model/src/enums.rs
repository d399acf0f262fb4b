//! Type-safe enumerations for reference data attributes.
//!
//! These are represented as lowercase strings in both the cleansed inputs
//! and the published JSON.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement system used by a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    Imperial,
    Metric,
}

impl MeasurementSystem {
    /// Both systems, in output order.
    pub const ALL: [MeasurementSystem; 2] = [MeasurementSystem::Imperial, MeasurementSystem::Metric];

    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementSystem::Imperial => "imperial",
            MeasurementSystem::Metric => "metric",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivered duty basis a country defaults to.
///
/// `Paid` corresponds to DDP (duties paid by the merchant), `Unpaid` to DDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveredDuty {
    Paid,
    Unpaid,
}

impl DeliveredDuty {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveredDuty::Paid => "paid",
            DeliveredDuty::Unpaid => "unpaid",
        }
    }
}

impl fmt::Display for DeliveredDuty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveredDuty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paid" | "ddp" => Ok(DeliveredDuty::Paid),
            "unpaid" | "ddu" => Ok(DeliveredDuty::Unpaid),
            _ => Err(format!("Unknown delivered duty: {s}")),
        }
    }
}

/// Classification of a sub-country administrative division.
///
/// Source types that do not match one of the known kinds degrade to
/// [`ProvinceType::Other`]; parsing never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvinceType {
    AutonomousCommunity,
    AutonomousRegion,
    Canton,
    City,
    County,
    Department,
    District,
    Emirate,
    FederalDistrict,
    Governorate,
    Island,
    Municipality,
    Parish,
    Prefecture,
    Province,
    Region,
    State,
    Territory,
    Other,
}

impl ProvinceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProvinceType::AutonomousCommunity => "autonomous_community",
            ProvinceType::AutonomousRegion => "autonomous_region",
            ProvinceType::Canton => "canton",
            ProvinceType::City => "city",
            ProvinceType::County => "county",
            ProvinceType::Department => "department",
            ProvinceType::District => "district",
            ProvinceType::Emirate => "emirate",
            ProvinceType::FederalDistrict => "federal_district",
            ProvinceType::Governorate => "governorate",
            ProvinceType::Island => "island",
            ProvinceType::Municipality => "municipality",
            ProvinceType::Parish => "parish",
            ProvinceType::Prefecture => "prefecture",
            ProvinceType::Province => "province",
            ProvinceType::Region => "region",
            ProvinceType::State => "state",
            ProvinceType::Territory => "territory",
            ProvinceType::Other => "other",
        }
    }

    /// Parse a raw source type, normalizing to `lowercase_with_underscores`
    /// first. Unknown values map to [`ProvinceType::Other`].
    pub fn parse_lenient(raw: &str) -> Self {
        match normalize_type_key(raw).as_str() {
            "autonomous_community" => ProvinceType::AutonomousCommunity,
            "autonomous_region" => ProvinceType::AutonomousRegion,
            "canton" => ProvinceType::Canton,
            "city" => ProvinceType::City,
            "county" => ProvinceType::County,
            "department" => ProvinceType::Department,
            "district" => ProvinceType::District,
            "emirate" => ProvinceType::Emirate,
            "federal_district" => ProvinceType::FederalDistrict,
            "governorate" => ProvinceType::Governorate,
            "island" => ProvinceType::Island,
            "municipality" => ProvinceType::Municipality,
            "parish" => ProvinceType::Parish,
            "prefecture" => ProvinceType::Prefecture,
            "province" => ProvinceType::Province,
            "region" => ProvinceType::Region,
            "state" => ProvinceType::State,
            "territory" => ProvinceType::Territory,
            _ => ProvinceType::Other,
        }
    }
}

impl fmt::Display for ProvinceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `"Autonomous  Region"` -> `"autonomous_region"`.
fn normalize_type_key(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    let mut pending_separator = false;
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !key.is_empty() {
                key.push('_');
            }
            pending_separator = false;
            key.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    key
}
