use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::core::domain::Arrival;

/// Raw JSON structure for one arrivals row.
#[derive(Debug, Deserialize)]
struct RawArrival {
    #[serde(rename = "IATA")]
    iata: String,
    #[serde(rename = "Origin")]
    origin: String,
    #[serde(rename = "GateStand")]
    gate_stand: String,
    #[serde(rename = "ScheduledTime")]
    scheduled_time: String,
    #[serde(rename = "EstArrival")]
    est_arrival: String,
    #[serde(rename = "ActArrival")]
    act_arrival: String,
    #[serde(rename = "EstChox")]
    est_chox: String,
    #[serde(rename = "ActChox")]
    act_chox: String,
    #[serde(rename = "EstPCP")]
    est_pcp: String,
    #[serde(rename = "PCPPax")]
    pcp_pax: u32,
    #[serde(rename = "API_eGates")]
    api_egates: u32,
    #[serde(rename = "API_EEA")]
    api_eea: u32,
    #[serde(rename = "API_NonEEA")]
    api_non_eea: u32,
}

/// Split an `"HH:MM"` display time into hour and minute.
fn parse_hour_minute(value: &str) -> Result<(u32, u32)> {
    let (hour, minute) = value
        .split_once(':')
        .with_context(|| format!("Expected HH:MM, got {:?}", value))?;

    let hour: u32 = hour
        .trim()
        .parse()
        .with_context(|| format!("Invalid hour in {:?}", value))?;
    let minute: u32 = minute
        .trim()
        .parse()
        .with_context(|| format!("Invalid minute in {:?}", value))?;

    Ok((hour, minute))
}

fn convert(raw: RawArrival) -> Result<Arrival> {
    let (est_pcp_hour, est_pcp_minute) =
        parse_hour_minute(&raw.est_pcp).context("Invalid EstPCP time")?;

    Ok(Arrival {
        iata: raw.iata,
        origin: raw.origin,
        gate_stand: raw.gate_stand,
        scheduled_time: raw.scheduled_time,
        est_arrival: raw.est_arrival,
        act_arrival: raw.act_arrival,
        est_chox: raw.est_chox,
        act_chox: raw.act_chox,
        est_pcp: raw.est_pcp,
        est_pcp_hour,
        est_pcp_minute,
        pcp_pax: raw.pcp_pax,
        api_egates: raw.api_egates,
        api_eea: raw.api_eea,
        api_non_eea: raw.api_non_eea,
    })
}

/// Parse an arrivals snapshot file.
pub fn parse_arrivals(path: &Path) -> Result<Vec<Arrival>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read arrivals snapshot: {}", path.display()))?;

    parse_arrivals_str(&content)
}

/// Parse an arrivals snapshot from a JSON string.
pub fn parse_arrivals_str(json: &str) -> Result<Vec<Arrival>> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    let raw: Vec<RawArrival> = serde_path_to_error::deserialize(deserializer)
        .context("Arrivals snapshot is not a valid array of flight records")?;

    raw.into_iter()
        .enumerate()
        .map(|(idx, record)| {
            convert(record).with_context(|| format!("Error in arrivals record at index {}", idx))
        })
        .collect()
}
