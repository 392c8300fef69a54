//! Arrivals-table view-model.

use serde::Serialize;

use crate::core::domain::Arrival;
use crate::services::window::BucketWindow;

/// One arrivals-table column: upstream field name, display header and
/// width percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArrivalsColumn {
    pub field: &'static str,
    pub header: &'static str,
    pub width_pct: u8,
}

/// The fixed column set, in display order.
pub const COLUMNS: [ArrivalsColumn; 13] = [
    ArrivalsColumn { field: "IATA", header: "Flight", width_pct: 7 },
    ArrivalsColumn { field: "Origin", header: "Origin", width_pct: 7 },
    ArrivalsColumn { field: "GateStand", header: "Gate / Stand", width_pct: 13 },
    ArrivalsColumn { field: "ScheduledTime", header: "Scheduled", width_pct: 7 },
    ArrivalsColumn { field: "EstArrival", header: "Est", width_pct: 7 },
    ArrivalsColumn { field: "ActArrival", header: "Act", width_pct: 7 },
    ArrivalsColumn { field: "EstChox", header: "Est Chox", width_pct: 10 },
    ArrivalsColumn { field: "ActChox", header: "Act Chox", width_pct: 10 },
    ArrivalsColumn { field: "EstPCP", header: "Est PCP", width_pct: 10 },
    ArrivalsColumn { field: "PCPPax", header: "Pax", width_pct: 7 },
    ArrivalsColumn { field: "API_eGates", header: "eGates", width_pct: 7 },
    ArrivalsColumn { field: "API_EEA", header: "EEA", width_pct: 7 },
    ArrivalsColumn { field: "API_NonEEA", header: "NonEEA", width_pct: 7 },
];

/// The arrivals table for one bucket: column metadata plus one row of cell
/// strings per flight expected at the PCP in the bucket's window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrivalsTableView {
    pub bucket: usize,
    pub columns: Vec<ArrivalsColumn>,
    pub rows: Vec<Vec<String>>,
}

/// Flights whose estimated PCP time falls in bucket `tb`'s window.
pub fn arrivals_in_bucket(arrivals: &[Arrival], tb: usize) -> Vec<&Arrival> {
    let window = BucketWindow::from_bucket(tb);
    arrivals
        .iter()
        .filter(|a| window.contains(a.est_pcp_hour, a.est_pcp_minute))
        .collect()
}

fn row(arrival: &Arrival) -> Vec<String> {
    vec![
        arrival.iata.clone(),
        arrival.origin.clone(),
        arrival.gate_stand.clone(),
        arrival.scheduled_time.clone(),
        arrival.est_arrival.clone(),
        arrival.act_arrival.clone(),
        arrival.est_chox.clone(),
        arrival.act_chox.clone(),
        arrival.est_pcp.clone(),
        arrival.pcp_pax.to_string(),
        arrival.api_egates.to_string(),
        arrival.api_eea.to_string(),
        arrival.api_non_eea.to_string(),
    ]
}

/// Build the arrivals table for bucket `tb`.
pub fn build_arrivals_table(arrivals: &[Arrival], tb: usize) -> ArrivalsTableView {
    ArrivalsTableView {
        bucket: tb,
        columns: COLUMNS.to_vec(),
        rows: arrivals_in_bucket(arrivals, tb).into_iter().map(row).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(iata: &str, est_pcp_hour: u32, est_pcp_minute: u32) -> Arrival {
        Arrival {
            iata: iata.to_string(),
            origin: "AMS".to_string(),
            gate_stand: "12 / 3A".to_string(),
            scheduled_time: "14:55".to_string(),
            est_arrival: "14:58".to_string(),
            act_arrival: "15:01".to_string(),
            est_chox: "15:06".to_string(),
            act_chox: "15:08".to_string(),
            est_pcp: format!("{:02}:{:02}", est_pcp_hour, est_pcp_minute),
            est_pcp_hour,
            est_pcp_minute,
            pcp_pax: 110,
            api_egates: 70,
            api_eea: 30,
            api_non_eea: 10,
        }
    }

    #[test]
    fn column_headers_and_widths_match_the_table_contract() {
        assert_eq!(COLUMNS.len(), 13);
        assert_eq!(COLUMNS[0].header, "Flight");
        assert_eq!(COLUMNS[2].header, "Gate / Stand");
        assert_eq!(COLUMNS[2].width_pct, 13);
        assert_eq!(COLUMNS[6].width_pct, 10);
        assert_eq!(COLUMNS[8].field, "EstPCP");
        assert_eq!(COLUMNS[8].width_pct, 10);
        assert_eq!(COLUMNS[12].header, "NonEEA");
        assert_eq!(COLUMNS[12].width_pct, 7);
    }

    #[test]
    fn filters_flights_to_the_bucket_window() {
        let arrivals = vec![
            flight("TS0123", 15, 20),
            flight("TS0456", 15, 40),
            flight("TS0789", 16, 20),
        ];

        // Bucket 61 is 15:15-15:30.
        let in_bucket = arrivals_in_bucket(&arrivals, 61);
        assert_eq!(in_bucket.len(), 1);
        assert_eq!(in_bucket[0].iata, "TS0123");
    }

    #[test]
    fn rows_follow_the_column_order() {
        let table = build_arrivals_table(&[flight("TS0123", 15, 20)], 61);
        assert_eq!(table.rows.len(), 1);

        let row = &table.rows[0];
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[0], "TS0123");
        assert_eq!(row[2], "12 / 3A");
        assert_eq!(row[8], "15:20");
        assert_eq!(row[9], "110");
        assert_eq!(row[10], "70");
        assert_eq!(row[12], "10");
    }

    #[test]
    fn empty_bucket_yields_headers_but_no_rows() {
        let table = build_arrivals_table(&[flight("TS0123", 9, 0)], 61);
        assert_eq!(table.columns.len(), 13);
        assert!(table.rows.is_empty());
    }
}
