//! High-level engine for one user's assessment lifecycle.
//!
//! Ties the catalog, scorer, plan generator, gamification rules and the
//! store together behind a small facade:
//!
//!   submit_assessment ──> daily_plan ──> toggle_task ──> trend
//!
//! Every mutation persists before its result is handed back, so a
//! failed write never leaves the caller holding state the store does
//! not have.

use chrono::Utc;
use serde::Serialize;

use crate::catalog::{find_questionnaire, find_task_catalog, AgeGroup, Questionnaire};
use crate::collector::ResponseSet;
use crate::error::{CoreError, Result, ValidationError};
use crate::gamification::{GamificationRules, GamificationState};
use crate::plan::{cycle_day_index, generate_plan, DailyPlan};
use crate::program::{builtin_program, ChallengeProgram, ProgramState};
use crate::scoring::score;
use crate::storage::{Config, Database, StoredAssessment, StoredGamification};
use crate::trend::{build_trend, CurrentAssessment, TrendPoint};

/// A daily plan joined with that day's completion state.
#[derive(Debug, Clone, Serialize)]
pub struct PlanView {
    pub plan: DailyPlan,
    pub completed: Vec<String>,
}

impl PlanView {
    pub fn is_completed(&self, task: &str) -> bool {
        self.completed.iter().any(|t| t == task)
    }

    pub fn completion_percent(&self) -> u32 {
        self.plan.completion_percent(self.completed.len())
    }
}

/// Result of one task toggle, returned only after the store committed.
#[derive(Debug, Clone, Serialize)]
pub struct ToggleOutcome {
    pub task: String,
    /// Completion state after the toggle
    pub completed: bool,
    pub state: GamificationState,
    pub version: u64,
}

/// Facade over the store for a single user.
pub struct WellnessEngine {
    db: Database,
    rules: GamificationRules,
    user: String,
}

impl WellnessEngine {
    pub fn new(db: Database, rules: GamificationRules, user: impl Into<String>) -> Self {
        Self {
            db,
            rules,
            user: user.into(),
        }
    }

    /// Build an engine from loaded configuration.
    pub fn from_config(db: Database, config: &Config) -> Self {
        Self::new(db, config.gamification.rules(), config.profile.user.clone())
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn rules(&self) -> &GamificationRules {
        &self.rules
    }

    /// The built-in questionnaire for an age group.
    pub fn questionnaire(&self, age_group: AgeGroup) -> Result<Questionnaire> {
        find_questionnaire(age_group)
            .ok_or_else(|| ValidationError::NoQuestionnaire { age_group }.into())
    }

    /// Score a completed response set and persist it: one row appended
    /// to the submission log and the user's current report replaced,
    /// both stamped with the same instant.
    ///
    /// Validation failures (wrong response count) reject before
    /// anything is written.
    pub fn submit_assessment(
        &self,
        age_group: AgeGroup,
        responses: &ResponseSet,
    ) -> Result<StoredAssessment> {
        let questionnaire = self.questionnaire(age_group)?;
        let layout = questionnaire.section_layout();
        let report = score(age_group, &layout, responses)?;

        let recorded_at = Utc::now();
        self.db.record_submission(
            &self.user,
            age_group,
            responses,
            report.overall_percentage,
            recorded_at,
        )?;
        self.db.save_assessment(&self.user, &report, recorded_at)?;

        Ok(StoredAssessment {
            report,
            recorded_at,
        })
    }

    /// The user's current report.
    pub fn current_report(&self) -> Result<StoredAssessment> {
        self.db
            .load_assessment(&self.user)?
            .ok_or_else(|| CoreError::NotFound {
                what: "assessment",
                user: self.user.clone(),
            })
    }

    /// Build today's plan from the current report, joined with the
    /// day's completions. `day_of_month` is 1-based calendar day.
    pub fn daily_plan(&self, day_of_month: u32) -> Result<PlanView> {
        let stored = self.current_report()?;
        let age_group = stored.report.age_group;
        let catalog =
            find_task_catalog(age_group).ok_or(ValidationError::NoTaskCatalog { age_group })?;

        let day_index = cycle_day_index(day_of_month, catalog.cycle_len());
        let names: Vec<&str> = stored
            .report
            .sections
            .iter()
            .map(|s| s.section.as_str())
            .collect();
        let plan = generate_plan(&catalog, &names, day_index);
        let completed = self.db.completed_tasks(&self.user, day_of_month)?;

        Ok(PlanView { plan, completed })
    }

    /// The user's gamification state, level re-derived from XP. A user
    /// with no row yet gets the fresh default at version 0.
    pub fn gamification(&self) -> Result<StoredGamification> {
        Ok(match self.db.load_gamification(&self.user)? {
            Some(row) => StoredGamification {
                state: row.state.normalized(&self.rules),
                version: row.version,
            },
            None => StoredGamification {
                state: GamificationState::new(),
                version: 0,
            },
        })
    }

    /// Toggle one task for the day: flip its completion, apply the XP
    /// delta, and commit both in a single transaction. The new state is
    /// returned only after that commit, so a conflict or a failed write
    /// changes nothing anywhere.
    pub fn toggle_task(&self, day_of_month: u32, task: &str) -> Result<ToggleOutcome> {
        let mut completed = self.db.completed_tasks(&self.user, day_of_month)?;
        let stored = self.gamification()?;

        let currently_completed = completed.iter().any(|t| t == task);
        let next_state = stored.state.apply_toggle(&self.rules, currently_completed);
        if currently_completed {
            completed.retain(|t| t != task);
        } else {
            completed.push(task.to_string());
        }

        let version = self.db.save_toggle(
            &self.user,
            day_of_month,
            &completed,
            &next_state,
            stored.version,
        )?;

        Ok(ToggleOutcome {
            task: task.to_string(),
            completed: !currently_completed,
            state: next_state,
            version,
        })
    }

    /// Trend series over the submission log plus the current report.
    pub fn trend(&self) -> Result<Vec<TrendPoint>> {
        let history = self.db.submission_history(&self.user)?;
        let current = self
            .db
            .load_assessment(&self.user)?
            .map(|stored| CurrentAssessment {
                recorded_at: stored.recorded_at,
                overall_percentage: stored.report.overall_percentage,
            });
        Ok(build_trend(&history, current))
    }

    /// The built-in challenge program.
    pub fn program(&self) -> ChallengeProgram {
        builtin_program()
    }

    /// The user's walk state through the program, day one if they have
    /// not started.
    pub fn program_state(&self) -> Result<ProgramState> {
        match self.db.load_program_state(&self.user)? {
            Some(state) => Ok(state),
            None => Ok(ProgramState::new(&builtin_program())),
        }
    }

    /// Flip one checkbox on the program's current day and persist.
    pub fn toggle_program_task(&self, task_index: usize) -> Result<ProgramState> {
        let mut state = self.program_state()?;
        if state.toggle(task_index) {
            self.db.save_program_state(&self.user, &state)?;
        }
        Ok(state)
    }

    /// Move the program to its next day and persist. On the final day
    /// the state is returned unchanged.
    pub fn advance_program_day(&self) -> Result<ProgramState> {
        let program = builtin_program();
        let mut state = self.program_state()?;
        if state.advance_day(&program) {
            self.db.save_program_state(&self.user, &state)?;
        }
        Ok(state)
    }
}
