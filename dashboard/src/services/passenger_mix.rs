//! Passenger-mix classification for one time bucket.
//!
//! Filters the manifest to the bucket's 15-minute window, then sorts each
//! passenger into non-exclusive category counters. The categories answer
//! independent questions (transit? B5JSSK? EEA? visa national?), so one
//! passenger routinely increments several of them.

use chrono::Timelike;
use serde::Serialize;

use crate::config::DashboardConfig;
use crate::core::domain::Passenger;
use crate::core::nationality;
use crate::services::window::BucketWindow;

/// Document type code denoting a machine-readable passport. Exact match
/// only: any other spelling counts as non-machine-readable.
pub const MACHINE_READABLE_PASSPORT: &str = "P";

/// Category counters over one bucket's passengers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PassengerMixCounts {
    pub transit: u32,
    pub b5jssk_eligible: u32,
    pub b5jssk_ineligible: u32,
    pub eea_eligible: u32,
    pub eea_ineligible: u32,
    pub eea_machine_readable: u32,
    pub eea_non_machine_readable: u32,
    pub visa_national: u32,
    pub non_visa_national: u32,
    /// Passengers in an age-gated list (B5JSSK or EEA) whose age could not
    /// be read; they join neither the eligible nor ineligible buckets.
    pub age_unreadable: u32,
    /// Passengers whose nationality appears in none of the four lists.
    pub unlisted_nationality: u32,
}

impl PassengerMixCounts {
    /// Add one passenger to every counter whose category applies.
    pub fn add(&mut self, passenger: &Passenger, egate_min_age: u32) {
        if passenger.in_transit {
            self.transit += 1;
        }

        let code = passenger.nationality.as_str();
        let b5jssk = nationality::is_b5jssk(code);
        let eea = nationality::is_eea(code);

        if b5jssk {
            match passenger.age {
                Some(age) if age >= egate_min_age => self.b5jssk_eligible += 1,
                Some(_) => self.b5jssk_ineligible += 1,
                None => {}
            }
        }

        if eea {
            match passenger.age {
                Some(age) if age >= egate_min_age => self.eea_eligible += 1,
                Some(_) => self.eea_ineligible += 1,
                None => {}
            }

            if passenger.document_type == MACHINE_READABLE_PASSPORT {
                self.eea_machine_readable += 1;
            } else {
                self.eea_non_machine_readable += 1;
            }
        }

        if (b5jssk || eea) && passenger.age.is_none() {
            self.age_unreadable += 1;
        }

        let visa = nationality::is_visa_national(code);
        let non_visa = nationality::is_non_visa_national(code);
        if visa {
            self.visa_national += 1;
        }
        if non_visa {
            self.non_visa_national += 1;
        }

        if !(b5jssk || eea || visa || non_visa) {
            self.unlisted_nationality += 1;
        }
    }
}

/// One pie-chart segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSegment {
    pub label: &'static str,
    pub count: u32,
}

/// Passenger-mix breakdown for one bucket: raw counters plus the chart
/// segments in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassengerMixBreakdown {
    pub bucket: usize,
    pub counts: PassengerMixCounts,
    pub chart: Vec<PieSegment>,
}

/// Manifest entries whose PCP time falls in bucket `tb`'s window.
pub fn passengers_in_bucket(passengers: &[Passenger], tb: usize) -> Vec<&Passenger> {
    let window = BucketWindow::from_bucket(tb);
    passengers
        .iter()
        .filter(|p| window.contains(p.pcp_time.hour(), p.pcp_time.minute()))
        .collect()
}

/// Classify bucket `tb`'s passengers and build the chart segments.
///
/// The chart carries six of the counters; transit and the machine-readable
/// split are computed for other consumers and stay out of it.
pub fn passenger_mix(
    passengers: &[Passenger],
    tb: usize,
    config: &DashboardConfig,
) -> PassengerMixBreakdown {
    let mut counts = PassengerMixCounts::default();
    for passenger in passengers_in_bucket(passengers, tb) {
        counts.add(passenger, config.egate_min_age);
    }

    log::debug!(
        "Bucket {}: classified passenger mix {:?}",
        tb,
        counts
    );

    let chart = vec![
        PieSegment {
            label: "B5JSSK eligible",
            count: counts.b5jssk_eligible,
        },
        PieSegment {
            label: "EEA eligible",
            count: counts.eea_eligible,
        },
        PieSegment {
            label: "B5JSSK ineligible",
            count: counts.b5jssk_ineligible,
        },
        PieSegment {
            label: "EEA ineligible",
            count: counts.eea_ineligible,
        },
        PieSegment {
            label: "Non-visa nationals",
            count: counts.non_visa_national,
        },
        PieSegment {
            label: "Visa nationals",
            count: counts.visa_national,
        },
    ];

    PassengerMixBreakdown { bucket: tb, counts, chart }
}
