//! Questionnaire and task catalogs keyed by age group.
//!
//! Catalogs are static, versioned-with-the-binary data:
//! - Questionnaires: sections of four-option questions, one per age group
//! - Task catalogs: per-section day rotations the daily plan draws from
//!
//! Both are looked up through `find_questionnaire` / `find_task_catalog`.

mod questionnaires;
mod tasks;

pub use questionnaires::{builtin_questionnaires, find_questionnaire};
pub use tasks::{builtin_task_catalogs, find_task_catalog};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Age bracket a questionnaire and task catalog are tailored to.
///
/// Serialized names match the stored document vocabulary
/// (`under_18`, `18_to_25`, `25_to_40`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "under_18")]
    Under18,
    #[serde(rename = "18_to_25")]
    Age18To25,
    #[serde(rename = "25_to_40")]
    Age25To40,
}

impl AgeGroup {
    /// Derive the bracket from an age in years.
    ///
    /// Ages above 40 have no questionnaire and return `None`.
    pub fn from_age(years: u32) -> Option<Self> {
        match years {
            0..=17 => Some(AgeGroup::Under18),
            18..=25 => Some(AgeGroup::Age18To25),
            26..=40 => Some(AgeGroup::Age25To40),
            _ => None,
        }
    }

    /// Stable identifier used in stored documents and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Under18 => "under_18",
            AgeGroup::Age18To25 => "18_to_25",
            AgeGroup::Age25To40 => "25_to_40",
        }
    }

    /// All supported brackets, youngest first.
    pub fn all() -> [AgeGroup; 3] {
        [AgeGroup::Under18, AgeGroup::Age18To25, AgeGroup::Age25To40]
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under_18" => Ok(AgeGroup::Under18),
            "18_to_25" => Ok(AgeGroup::Age18To25),
            "25_to_40" => Ok(AgeGroup::Age25To40),
            other => Err(format!(
                "unknown age group '{other}' (expected under_18, 18_to_25 or 25_to_40)"
            )),
        }
    }
}

/// A single assessment question with exactly four answer options.
///
/// Options are ordered most favorable first: picking option `i` scores
/// `4 - i` points, so the range is always 1..=4.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
}

impl Question {
    /// Options per question. Scoring normalization depends on this.
    pub const OPTION_COUNT: usize = 4;

    /// Create a question. The fixed-size array keeps the four-option
    /// invariant at the construction site.
    pub fn new(text: impl Into<String>, options: [&str; Self::OPTION_COUNT]) -> Self {
        Self {
            text: text.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// A named group of questions covering one life area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Section {
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// Ordered (section name, question count) pairs.
///
/// This is the partitioning contract between a questionnaire and the
/// scoring engine: a flat response vector is split by these counts, in
/// this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLayout {
    pub name: String,
    pub question_count: usize,
}

/// A complete questionnaire for one age group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Questionnaire {
    pub age_group: AgeGroup,
    pub sections: Vec<Section>,
}

impl Questionnaire {
    pub fn total_questions(&self) -> usize {
        self.sections.iter().map(Section::question_count).sum()
    }

    /// The section layout scoring partitions responses by.
    pub fn section_layout(&self) -> Vec<SectionLayout> {
        self.sections
            .iter()
            .map(|s| SectionLayout {
                name: s.name.clone(),
                question_count: s.question_count(),
            })
            .collect()
    }
}

/// Day rotation of suggested tasks for one section.
///
/// `days[i]` holds the tasks suggested on rotation day `i`. Rotations may
/// be ragged; a day with no entry contributes nothing to a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionTasks {
    pub section: String,
    pub days: Vec<Vec<String>>,
}

impl SectionTasks {
    pub fn new(section: impl Into<String>, days: Vec<Vec<&str>>) -> Self {
        Self {
            section: section.into(),
            days: days
                .into_iter()
                .map(|d| d.into_iter().map(str::to_string).collect())
                .collect(),
        }
    }

    /// Tasks for one rotation day, if that day exists and is non-empty.
    pub fn tasks_for_day(&self, day_index: usize) -> Option<&[String]> {
        match self.days.get(day_index) {
            Some(tasks) if !tasks.is_empty() => Some(tasks),
            _ => None,
        }
    }
}

/// All task rotations for one age group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCatalog {
    pub age_group: AgeGroup,
    pub rotations: Vec<SectionTasks>,
}

impl TaskCatalog {
    /// Case-insensitive section lookup. Stored reports and catalog data
    /// come from different sources, so capitalization is not trusted.
    pub fn find_section(&self, name: &str) -> Option<&SectionTasks> {
        let wanted = name.to_lowercase();
        self.rotations
            .iter()
            .find(|r| r.section.to_lowercase() == wanted)
    }

    /// Length of the longest rotation. Day indices are taken modulo this.
    pub fn cycle_len(&self) -> usize {
        self.rotations
            .iter()
            .map(|r| r.days.len())
            .max()
            .unwrap_or(1)
            .max(1)
    }
}
