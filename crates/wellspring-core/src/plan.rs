//! Daily plan generation from scored sections and a task catalog.
//!
//! The generator is date-free: callers resolve "today" into a rotation
//! day index (see [`cycle_day_index`]) and pass it in, which keeps plan
//! output reproducible for any given day.

use serde::{Deserialize, Serialize};

use crate::catalog::TaskCatalog;

/// Tasks suggested for one rotation day.
///
/// `unmatched_sections` lists scored sections the catalog had no
/// rotation for. That is a catalog coverage gap, not a failure; the
/// plan still carries every task that did match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub day_index: usize,
    pub tasks: Vec<String>,
    pub unmatched_sections: Vec<String>,
}

impl DailyPlan {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Share of the plan done, as a rounded whole percentage.
    /// An empty plan reports 0 rather than dividing by zero.
    pub fn completion_percent(&self, completed: usize) -> u32 {
        if self.tasks.is_empty() {
            return 0;
        }
        let done = completed.min(self.tasks.len());
        ((done as f64 / self.tasks.len() as f64) * 100.0).round() as u32
    }
}

/// Map a calendar day-of-month (1-based) onto a rotation day index.
pub fn cycle_day_index(day_of_month: u32, cycle_len: usize) -> usize {
    if cycle_len == 0 {
        return 0;
    }
    (day_of_month.saturating_sub(1) as usize) % cycle_len
}

/// Build the plan for `day_index` by matching scored section names
/// against the catalog.
///
/// Matching is case-insensitive. Sections appear in the order given;
/// each match contributes that rotation's tasks for the day, and a task
/// suggested by two sections appears twice. A matched rotation with no
/// entry for the day contributes nothing and is not reported as
/// unmatched.
pub fn generate_plan<S: AsRef<str>>(
    catalog: &TaskCatalog,
    section_names: &[S],
    day_index: usize,
) -> DailyPlan {
    let mut tasks = Vec::new();
    let mut unmatched_sections = Vec::new();

    for name in section_names {
        let name = name.as_ref();
        match catalog.find_section(name) {
            Some(rotation) => {
                if let Some(day_tasks) = rotation.tasks_for_day(day_index) {
                    tasks.extend(day_tasks.iter().cloned());
                }
            }
            None => unmatched_sections.push(name.to_string()),
        }
    }

    DailyPlan {
        day_index,
        tasks,
        unmatched_sections,
    }
}
