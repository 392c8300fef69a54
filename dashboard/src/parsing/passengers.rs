use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::core::domain::Passenger;

/// Custom deserializer for the manifest `age` field.
///
/// Upstream manifests carry ages as integers, numeric strings, empty
/// strings or garbage. Anything that does not parse as a non-negative
/// integer becomes `None`; the classifier counts such passengers
/// separately rather than dropping them.
fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AgeField {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Option::<AgeField>::deserialize(deserializer)? {
        None => Ok(None),
        Some(AgeField::Int(n)) => Ok(u32::try_from(n).ok()),
        Some(AgeField::Float(n)) if n.is_finite() && n >= 0.0 => Ok(Some(n.trunc() as u32)),
        Some(AgeField::Float(_)) => Ok(None),
        Some(AgeField::Text(s)) => {
            let parsed = s.trim().parse::<u32>().ok();
            if parsed.is_none() && !s.trim().is_empty() {
                log::warn!("Unparseable passenger age {:?}", s);
            }
            Ok(parsed)
        }
    }
}

/// Custom deserializer for the `in_transit_flag` field: accepts `"Y"`/`"N"`
/// as well as JSON booleans.
fn deserialize_transit_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlagField {
        Bool(bool),
        Text(String),
    }

    match FlagField::deserialize(deserializer)? {
        FlagField::Bool(b) => Ok(b),
        FlagField::Text(s) => Ok(s.trim().eq_ignore_ascii_case("Y")),
    }
}

/// Raw JSON structure for one manifest entry.
#[derive(Debug, Deserialize)]
struct RawPassenger {
    pcp: String,
    nationality_country_code: String,
    #[serde(default, deserialize_with = "deserialize_age")]
    age: Option<u32>,
    document_type: String,
    #[serde(deserialize_with = "deserialize_transit_flag")]
    in_transit_flag: bool,
}

/// Parse a PCP timestamp string.
///
/// A record whose timestamp does not parse is rejected as malformed: it
/// cannot be assigned to any time bucket.
fn parse_pcp_timestamp(value: &str) -> Result<NaiveDateTime> {
    const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    for format in FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(timestamp);
        }
    }

    anyhow::bail!("Unrecognised PCP timestamp {:?}", value)
}

fn convert(raw: RawPassenger) -> Result<Passenger> {
    let pcp_time = parse_pcp_timestamp(&raw.pcp)?;

    Ok(Passenger {
        nationality: raw.nationality_country_code.trim().to_ascii_uppercase(),
        age: raw.age,
        document_type: raw.document_type.trim().to_string(),
        in_transit: raw.in_transit_flag,
        pcp_time,
    })
}

/// Parse a passenger snapshot file.
pub fn parse_passengers(path: &Path) -> Result<Vec<Passenger>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read passenger snapshot: {}", path.display()))?;

    parse_passengers_str(&content)
}

/// Parse a passenger snapshot from a JSON string.
pub fn parse_passengers_str(json: &str) -> Result<Vec<Passenger>> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    let raw: Vec<RawPassenger> = serde_path_to_error::deserialize(deserializer)
        .context("Passenger snapshot is not a valid array of manifest records")?;

    raw.into_iter()
        .enumerate()
        .map(|(idx, record)| {
            convert(record).with_context(|| format!("Error in passenger record at index {}", idx))
        })
        .collect()
}
