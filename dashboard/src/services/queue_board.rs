//! Queue-panel view-model: summary bar, three queue panels and the
//! bucket navigation state.

use serde::Serialize;

use crate::config::{DashboardConfig, WaitThresholds};
use crate::core::domain::{QueueKind, QueueSnapshot, Severity, Trend};
use crate::error::DashboardError;

/// One rendered queue panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueuePanelView {
    pub queue: QueueKind,
    pub name: &'static str,
    pub joining_text: String,
    pub wait_text: String,
    /// `None` for bucket 0, which has no previous bucket to compare with.
    pub trend: Option<Trend>,
    pub severity: Severity,
}

/// The full queue board for one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueBoardView {
    pub bucket: usize,
    pub summary_text: String,
    pub panels: Vec<QueuePanelView>,
    /// "start - next start", or just the start label at the final bucket.
    pub bucket_label: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Wait-time display text: sub-minute waits read as no wait at all.
pub fn wait_text(wait_minutes: u32) -> String {
    if wait_minutes < 1 {
        "No wait time".to_string()
    } else {
        format!("{} min wait time", wait_minutes)
    }
}

/// Highlight level for a wait time on a given queue.
///
/// Breach is strictly above the breach threshold; the warning band is
/// `[warning, breach)`. A wait equal to the breach threshold matches
/// neither and stays normal.
pub fn severity(wait_minutes: u32, queue: QueueKind, thresholds: &WaitThresholds) -> Severity {
    if wait_minutes > thresholds.breach_minutes {
        Severity::Breach
    } else if wait_minutes >= thresholds.warning_minutes(queue)
        && wait_minutes < thresholds.breach_minutes
    {
        Severity::Warning
    } else {
        Severity::Normal
    }
}

/// Build the queue board for bucket `tb`.
///
/// `tb` must address an existing bucket; neighbouring buckets are optional
/// (bucket 0 gets no trend, the final bucket a single-label range).
pub fn build_queue_board(
    snapshot: &QueueSnapshot,
    tb: usize,
    config: &DashboardConfig,
) -> Result<QueueBoardView, DashboardError> {
    let current = snapshot.bucket(tb).ok_or(DashboardError::BucketOutOfRange {
        bucket: tb,
        len: snapshot.len(),
    })?;

    let previous = tb.checked_sub(1).and_then(|prev| snapshot.bucket(prev));

    let panels = QueueKind::ALL
        .iter()
        .map(|&queue| {
            let wait = current.wait(queue);
            QueuePanelView {
                queue,
                name: queue.display_name(),
                joining_text: format!("{} pax joining", current.pax(queue)),
                wait_text: wait_text(wait),
                trend: previous.map(|prev| Trend::between(wait, prev.wait(queue))),
                severity: severity(wait, queue, &config.thresholds),
            }
        })
        .collect();

    let bucket_label = match snapshot.bucket(tb + 1) {
        Some(next) => format!("{} - {}", current.label, next.label),
        None => current.label.clone(),
    };

    Ok(QueueBoardView {
        bucket: tb,
        summary_text: format!(
            "{} passengers presenting at the PCP in the next 15 min",
            current.total_pax()
        ),
        panels,
        bucket_label,
        prev_enabled: tb > 0,
        next_enabled: tb + 1 < snapshot.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::TimeBucketMetrics;
    use proptest::prelude::*;

    fn bucket(label: &str, waits: [u32; 3]) -> TimeBucketMetrics {
        TimeBucketMetrics {
            label: label.to_string(),
            egates_pax: 100,
            eea_pax: 50,
            non_eea_pax: 25,
            egates_wait_minutes: waits[0],
            eea_wait_minutes: waits[1],
            non_eea_wait_minutes: waits[2],
        }
    }

    fn snapshot(waits: Vec<[u32; 3]>) -> QueueSnapshot {
        let buckets = waits
            .into_iter()
            .enumerate()
            .map(|(i, w)| bucket(&format!("{:02}:{:02}", i / 4, (i % 4) * 15), w))
            .collect();
        QueueSnapshot::new(buckets)
    }

    #[test]
    fn wait_text_boundaries() {
        assert_eq!(wait_text(0), "No wait time");
        assert_eq!(wait_text(1), "1 min wait time");
        assert_eq!(wait_text(47), "47 min wait time");
    }

    #[test]
    fn severity_boundaries_for_desk_queues() {
        let thresholds = WaitThresholds::default();
        for queue in [QueueKind::EGates, QueueKind::EeaDesk] {
            assert_eq!(severity(24, queue, &thresholds), Severity::Normal);
            assert_eq!(severity(25, queue, &thresholds), Severity::Warning);
            assert_eq!(severity(59, queue, &thresholds), Severity::Warning);
            assert_eq!(severity(60, queue, &thresholds), Severity::Normal);
            assert_eq!(severity(61, queue, &thresholds), Severity::Breach);
        }
    }

    #[test]
    fn non_eea_warning_band_starts_later() {
        let thresholds = WaitThresholds::default();
        assert_eq!(
            severity(44, QueueKind::NonEeaDesk, &thresholds),
            Severity::Normal
        );
        assert_eq!(
            severity(45, QueueKind::NonEeaDesk, &thresholds),
            Severity::Warning
        );
        assert_eq!(
            severity(61, QueueKind::NonEeaDesk, &thresholds),
            Severity::Breach
        );
    }

    #[test]
    fn severity_respects_configured_thresholds() {
        let thresholds = WaitThresholds {
            breach_minutes: 30,
            egates_warning_minutes: 10,
            eea_warning_minutes: 10,
            non_eea_warning_minutes: 20,
        };
        assert_eq!(
            severity(15, QueueKind::EGates, &thresholds),
            Severity::Warning
        );
        assert_eq!(
            severity(15, QueueKind::NonEeaDesk, &thresholds),
            Severity::Normal
        );
        assert_eq!(
            severity(31, QueueKind::EeaDesk, &thresholds),
            Severity::Breach
        );
    }

    #[test]
    fn trend_compares_against_previous_bucket() {
        let snap = snapshot(vec![[10, 10, 10], [15, 5, 10]]);
        let board = build_queue_board(&snap, 1, &DashboardConfig::default()).unwrap();

        assert_eq!(board.panels[0].trend, Some(Trend::Increase));
        assert_eq!(board.panels[1].trend, Some(Trend::Decrease));
        assert_eq!(board.panels[2].trend, Some(Trend::Neutral));
    }

    #[test]
    fn bucket_zero_renders_without_trend() {
        let snap = snapshot(vec![[10, 10, 10], [15, 5, 10]]);
        let board = build_queue_board(&snap, 0, &DashboardConfig::default()).unwrap();

        for panel in &board.panels {
            assert_eq!(panel.trend, None);
        }
        assert!(!board.prev_enabled);
        assert!(board.next_enabled);
    }

    #[test]
    fn final_bucket_renders_single_label_and_disables_next() {
        let snap = snapshot(vec![[0, 0, 0], [0, 0, 0]]);
        let board = build_queue_board(&snap, 1, &DashboardConfig::default()).unwrap();

        assert_eq!(board.bucket_label, "00:15");
        assert!(board.prev_enabled);
        assert!(!board.next_enabled);
    }

    #[test]
    fn interior_bucket_renders_label_range() {
        let snap = snapshot(vec![[0, 0, 0], [0, 0, 0], [0, 0, 0]]);
        let board = build_queue_board(&snap, 1, &DashboardConfig::default()).unwrap();
        assert_eq!(board.bucket_label, "00:15 - 00:30");
    }

    #[test]
    fn summary_counts_all_three_queues() {
        let snap = snapshot(vec![[0, 0, 0]]);
        let board = build_queue_board(&snap, 0, &DashboardConfig::default()).unwrap();
        assert_eq!(
            board.summary_text,
            "175 passengers presenting at the PCP in the next 15 min"
        );
        assert_eq!(board.panels[0].joining_text, "100 pax joining");
    }

    #[test]
    fn out_of_range_bucket_is_an_error() {
        let snap = snapshot(vec![[0, 0, 0]]);
        let err = build_queue_board(&snap, 1, &DashboardConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::BucketOutOfRange { bucket: 1, len: 1 }
        ));
    }

    proptest! {
        #[test]
        fn trend_matches_strict_wait_comparison(
            waits in proptest::collection::vec((0u32..120, 0u32..120, 0u32..120), 2..20),
            offset in 0usize..18,
        ) {
            let snap = snapshot(waits.iter().map(|&(a, b, c)| [a, b, c]).collect());
            let tb = 1 + offset % (snap.len() - 1);
            let board = build_queue_board(&snap, tb, &DashboardConfig::default()).unwrap();

            for (panel, queue) in board.panels.iter().zip(QueueKind::ALL) {
                let current = snap.bucket(tb).unwrap().wait(queue);
                let previous = snap.bucket(tb - 1).unwrap().wait(queue);
                let expected = if current > previous {
                    Trend::Increase
                } else if current < previous {
                    Trend::Decrease
                } else {
                    Trend::Neutral
                };
                prop_assert_eq!(panel.trend, Some(expected));
            }
        }
    }
}
