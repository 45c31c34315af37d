//! Trend aggregation across repeated assessments.
//!
//! Projects the append-only submission history into ordered chart
//! points. Pure and read-only: callers hand in the history rows and the
//! current assessment, nothing is fetched or mutated here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One historical submission, as read from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Position in the submission log, 1-based and strictly increasing
    pub attempt: u32,
    pub recorded_at: DateTime<Utc>,
    pub overall_percentage: f64,
}

/// One chart point: a label and the overall percentage at that time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub percentage: f64,
}

/// Reference to the assessment being viewed right now, used to decide
/// whether a trailing "Current" point is needed.
#[derive(Debug, Clone, Copy)]
pub struct CurrentAssessment {
    pub recorded_at: DateTime<Utc>,
    pub overall_percentage: f64,
}

/// Build the trend series.
///
/// History is ordered by attempt number and labelled with the
/// submission date. When a current assessment exists and the last
/// history row is not that same submission (matched by `recorded_at`),
/// a final point labelled "Current" is appended. With no history and no
/// current assessment the series is empty.
pub fn build_trend(history: &[HistoryEntry], current: Option<CurrentAssessment>) -> Vec<TrendPoint> {
    let mut ordered: Vec<&HistoryEntry> = history.iter().collect();
    ordered.sort_by_key(|e| e.attempt);

    let mut points: Vec<TrendPoint> = ordered
        .iter()
        .map(|entry| TrendPoint {
            label: entry.recorded_at.format("%Y-%m-%d").to_string(),
            percentage: entry.overall_percentage,
        })
        .collect();

    if let Some(current) = current {
        let already_last = ordered
            .last()
            .map(|e| e.recorded_at == current.recorded_at)
            .unwrap_or(false);
        if !already_last {
            points.push(TrendPoint {
                label: "Current".to_string(),
                percentage: current.overall_percentage,
            });
        }
    }

    points
}
