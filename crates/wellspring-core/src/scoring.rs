//! Assessment scoring.
//!
//! Scoring is a pure function of the section layout and a response set:
//! no clock, no store, no randomness. The same inputs always produce an
//! identical [`AssessmentReport`], which is what makes stored reports
//! reproducible from their submission rows.
//!
//! Normalization per section with `n` questions:
//! - raw total: sum of scores, an unanswered (null) entry counts 0
//! - min possible: `n * 1`, max possible: `n * 4`
//! - percentage: `(raw - min) / (max - min) * 100`, clamped to [0, 100]
//!
//! The overall percentage runs the same formula over the summed totals,
//! so sections weigh in proportion to their question count.

use serde::{Deserialize, Serialize};

use crate::catalog::{AgeGroup, SectionLayout};
use crate::collector::ResponseSet;
use crate::error::ValidationError;

/// Lowest score a single answered question can contribute.
pub const MIN_POINTS_PER_QUESTION: u32 = 1;
/// Highest score a single answered question can contribute.
pub const MAX_POINTS_PER_QUESTION: u32 = 4;

/// Concern band for a normalized percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Good,
    Moderate,
    Significant,
}

impl ScoreBand {
    /// Band thresholds: >= 80 Good, >= 50 Moderate, below Significant.
    /// The same cut points apply to sections and to the overall score.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            ScoreBand::Good
        } else if percentage >= 50.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Significant
        }
    }

    /// Display label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Good => "Good",
            ScoreBand::Moderate => "Moderate Concerns",
            ScoreBand::Significant => "Significant Concern",
        }
    }

    /// Per-section advisory text.
    pub fn advisory(&self) -> &'static str {
        match self {
            ScoreBand::Good => "You're doing great in this section! Keep up the good work.",
            ScoreBand::Moderate => {
                "You have some struggles in this area. Consider working on improvements."
            }
            ScoreBand::Significant => {
                "This section shows a high level of concern. Seeking help or support might be beneficial."
            }
        }
    }

    /// Whole-assessment summary text.
    pub fn overall_message(&self) -> &'static str {
        match self {
            ScoreBand::Good => {
                "Your wellbeing is in a good state. Keep maintaining positive habits."
            }
            ScoreBand::Moderate => {
                "You have moderate concerns. Some areas may need attention; consider healthy routines."
            }
            ScoreBand::Significant => {
                "You are experiencing significant concerns. It's important to seek support."
            }
        }
    }
}

/// Normalized result for one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    pub section: String,
    pub raw_total: u32,
    pub percentage: f64,
    pub band: ScoreBand,
    pub advisory: String,
}

/// Complete scored assessment.
///
/// Carries no timestamp; the storage layer attaches `recorded_at` when
/// a report is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub age_group: AgeGroup,
    pub raw_total: u32,
    pub overall_percentage: f64,
    pub overall_band: ScoreBand,
    pub overall_message: String,
    pub sections: Vec<SectionScore>,
}

/// Normalize a raw total against the possible range for `question_count`
/// questions. A zero-question section has no range and scores 0.
fn normalize(raw_total: u32, question_count: usize) -> f64 {
    if question_count == 0 {
        return 0.0;
    }
    let min = (question_count as u32 * MIN_POINTS_PER_QUESTION) as f64;
    let max = (question_count as u32 * MAX_POINTS_PER_QUESTION) as f64;
    ((raw_total as f64 - min) / (max - min) * 100.0).clamp(0.0, 100.0)
}

/// Score a response set against a section layout.
///
/// The response vector must line up exactly with the layout's total
/// question count; on mismatch nothing is scored and
/// [`ValidationError::LengthMismatch`] is returned. Null entries count
/// as 0, which the clamp then floors at 0%.
pub fn score(
    age_group: AgeGroup,
    layout: &[SectionLayout],
    responses: &ResponseSet,
) -> Result<AssessmentReport, ValidationError> {
    let expected: usize = layout.iter().map(|l| l.question_count).sum();
    if responses.len() != expected {
        return Err(ValidationError::LengthMismatch {
            expected,
            actual: responses.len(),
        });
    }

    let mut sections = Vec::with_capacity(layout.len());
    let mut cursor = 0usize;
    let mut overall_total = 0u32;
    let mut answerable = 0usize;

    for section in layout {
        let slice = &responses.entries()[cursor..cursor + section.question_count];
        cursor += section.question_count;

        let raw_total: u32 = slice.iter().map(|e| u32::from(e.unwrap_or(0))).sum();
        let percentage = normalize(raw_total, section.question_count);
        let band = ScoreBand::from_percentage(percentage);

        overall_total += raw_total;
        answerable += section.question_count;

        sections.push(SectionScore {
            section: section.name.clone(),
            raw_total,
            percentage,
            band,
            advisory: band.advisory().to_string(),
        });
    }

    let overall_percentage = normalize(overall_total, answerable);
    let overall_band = ScoreBand::from_percentage(overall_percentage);

    Ok(AssessmentReport {
        age_group,
        raw_total: overall_total,
        overall_percentage,
        overall_band,
        overall_message: overall_band.overall_message().to_string(),
        sections,
    })
}
