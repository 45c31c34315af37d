//! # Wellspring Core Library
//!
//! This library provides the core business logic for Wellspring, a
//! self-assessment and daily habit companion. It implements a CLI-first
//! philosophy where all operations are available via a standalone CLI
//! binary, with any GUI being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Catalog**: Built-in questionnaires and task catalogs per age group
//! - **Scoring**: Pure normalization of responses into banded reports
//! - **Plans & Program**: Day-rotated task plans and a fixed 21-day program
//! - **Storage**: SQLite-based submission/assessment storage and TOML-based
//!   configuration
//!
//! ## Key Components
//!
//! - [`WellnessEngine`]: Facade running the whole lifecycle for one user
//! - [`ResponseCollector`]: Cursor-based questionnaire walk
//! - [`AssessmentReport`]: Scored, banded output of one submission
//! - [`Database`]: Submission, assessment and gamification persistence
//! - [`Config`]: Application configuration management

pub mod catalog;
pub mod collector;
pub mod engine;
pub mod error;
pub mod gamification;
pub mod plan;
pub mod program;
pub mod scoring;
pub mod storage;
pub mod trend;

pub use catalog::{AgeGroup, Question, Questionnaire, Section, SectionLayout, TaskCatalog};
pub use collector::{Prompt, ResponseCollector, ResponseSet};
pub use engine::{PlanView, ToggleOutcome, WellnessEngine};
pub use error::{ConfigError, CoreError, Result, StoreError, ValidationError};
pub use gamification::{GamificationRules, GamificationState};
pub use plan::{cycle_day_index, generate_plan, DailyPlan};
pub use program::{builtin_program, ChallengeProgram, ProgramState};
pub use scoring::{score, AssessmentReport, ScoreBand, SectionScore};
pub use storage::{Config, Database, StoredAssessment, StoredGamification, Submission};
pub use trend::{build_trend, CurrentAssessment, HistoryEntry, TrendPoint};
