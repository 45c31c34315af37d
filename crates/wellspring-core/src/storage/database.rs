//! SQLite-based per-user assessment storage.
//!
//! Provides persistent storage for:
//! - Submissions: an append-only log, one row per completed assessment
//! - Assessments: the latest scored report per user (replaced on resubmit)
//! - Gamification: one versioned row per user for optimistic writes
//! - Key-value store for day-scoped completions and program state
//!
//! Submissions double as the history the trend view reads; the newest
//! row is the "current" submission a report can be rebuilt from.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::data_dir;
use crate::catalog::AgeGroup;
use crate::collector::ResponseSet;
use crate::error::StoreError;
use crate::gamification::GamificationState;
use crate::program::ProgramState;
use crate::scoring::AssessmentReport;
use crate::trend::HistoryEntry;

/// One submitted assessment, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub user_id: String,
    pub age_group: AgeGroup,
    pub responses: ResponseSet,
    pub overall_percentage: f64,
    pub recorded_at: DateTime<Utc>,
}

/// The latest scored report for a user, with its persistence timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAssessment {
    pub report: AssessmentReport,
    pub recorded_at: DateTime<Utc>,
}

/// A gamification row together with its optimistic-lock version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoredGamification {
    pub state: GamificationState,
    pub version: u64,
}

/// Parse a stored RFC3339 timestamp, falling back to now on damage.
fn parse_recorded_at(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// SQLite database holding all per-user state.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/wellspring/wellspring.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> crate::error::Result<Self> {
        let path = data_dir()?.join("wellspring.db");
        let conn = Connection::open(&path).map_err(|source| StoreError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        // Bounded wait on a locked store; expiry surfaces as Locked.
        conn.busy_timeout(std::time::Duration::from_secs(5))
            .map_err(StoreError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database, used by tests and ephemeral sessions.
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(
            "CREATE TABLE IF NOT EXISTS submissions (
                id                  TEXT PRIMARY KEY,
                user_id             TEXT NOT NULL,
                age_group           TEXT NOT NULL,
                responses           TEXT NOT NULL,
                overall_percentage  REAL NOT NULL,
                recorded_at         TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS assessments (
                user_id     TEXT PRIMARY KEY,
                age_group   TEXT NOT NULL,
                report      TEXT NOT NULL,
                recorded_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS gamification (
                user_id TEXT PRIMARY KEY,
                xp      INTEGER NOT NULL,
                level   INTEGER NOT NULL,
                streak  INTEGER NOT NULL,
                version INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_submissions_user_recorded
                ON submissions(user_id, recorded_at);",
            )
            .map_err(|e| StoreError::MigrationFailed(e.to_string()))
    }

    // === Submissions (append-only) ===

    /// Append a submission row. Every call is a new attempt; existing
    /// rows are never touched.
    pub fn record_submission(
        &self,
        user_id: &str,
        age_group: AgeGroup,
        responses: &ResponseSet,
        overall_percentage: f64,
        recorded_at: DateTime<Utc>,
    ) -> Result<Submission, StoreError> {
        let submission = Submission {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            age_group,
            responses: responses.clone(),
            overall_percentage,
            recorded_at,
        };
        let responses_json = serde_json::to_string(&submission.responses)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        self.conn.execute(
            "INSERT INTO submissions (id, user_id, age_group, responses, overall_percentage, recorded_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                submission.id,
                submission.user_id,
                submission.age_group.as_str(),
                responses_json,
                submission.overall_percentage,
                submission.recorded_at.to_rfc3339(),
            ],
        )?;
        Ok(submission)
    }

    /// The newest submission for a user, if any.
    pub fn latest_submission(&self, user_id: &str) -> Result<Option<Submission>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, age_group, responses, overall_percentage, recorded_at
                 FROM submissions
                 WHERE user_id = ?1
                 ORDER BY recorded_at DESC
                 LIMIT 1",
                params![user_id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, f64>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                },
            )
            .optional()?;

        let Some((id, age_group, responses_json, overall_percentage, recorded_at)) = row else {
            return Ok(None);
        };
        let age_group: AgeGroup = age_group.parse().map_err(StoreError::Corrupt)?;
        let responses: ResponseSet = serde_json::from_str(&responses_json)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(Some(Submission {
            id,
            user_id: user_id.to_string(),
            age_group,
            responses,
            overall_percentage,
            recorded_at: parse_recorded_at(&recorded_at),
        }))
    }

    /// All submissions for a user projected into trend history entries,
    /// oldest first, attempts numbered from 1.
    pub fn submission_history(&self, user_id: &str) -> Result<Vec<HistoryEntry>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT overall_percentage, recorded_at
             FROM submissions
             WHERE user_id = ?1
             ORDER BY recorded_at ASC",
        )?;
        let rows = stmt.query_map(params![user_id], |row| {
            Ok((row.get::<_, f64>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut history = Vec::new();
        for (index, row) in rows.enumerate() {
            let (overall_percentage, recorded_at) = row?;
            history.push(HistoryEntry {
                attempt: index as u32 + 1,
                recorded_at: parse_recorded_at(&recorded_at),
                overall_percentage,
            });
        }
        Ok(history)
    }

    // === Assessments (replace per user) ===

    /// Store the scored report for a user, replacing any previous one.
    pub fn save_assessment(
        &self,
        user_id: &str,
        report: &AssessmentReport,
        recorded_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let report_json =
            serde_json::to_string(report).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        self.conn.execute(
            "INSERT OR REPLACE INTO assessments (user_id, age_group, report, recorded_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                user_id,
                report.age_group.as_str(),
                report_json,
                recorded_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// The current report for a user, if one was ever stored.
    pub fn load_assessment(&self, user_id: &str) -> Result<Option<StoredAssessment>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT report, recorded_at FROM assessments WHERE user_id = ?1",
                params![user_id],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        let Some((report_json, recorded_at)) = row else {
            return Ok(None);
        };
        let report: AssessmentReport = serde_json::from_str(&report_json)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(Some(StoredAssessment {
            report,
            recorded_at: parse_recorded_at(&recorded_at),
        }))
    }

    // === Gamification (versioned row per user) ===

    /// The gamification row for a user, if any.
    pub fn load_gamification(&self, user_id: &str) -> Result<Option<StoredGamification>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT xp, level, streak, version FROM gamification WHERE user_id = ?1",
                params![user_id],
                |row| {
                    Ok((
                        row.get::<_, u32>(0)?,
                        row.get::<_, u32>(1)?,
                        row.get::<_, u32>(2)?,
                        row.get::<_, i64>(3)?,
                    ))
                },
            )
            .optional()?;

        Ok(row.map(|(xp, level, streak, version)| StoredGamification {
            state: GamificationState { xp, level, streak },
            version: version as u64,
        }))
    }

    /// Optimistically write a gamification row.
    ///
    /// `expected_version` 0 means "no row yet" and inserts version 1;
    /// otherwise the row is updated only while its version still
    /// matches, and bumps to `expected_version + 1`. A lost race
    /// returns [`StoreError::Conflict`] and writes nothing.
    pub fn save_gamification(
        &self,
        user_id: &str,
        state: &GamificationState,
        expected_version: u64,
    ) -> Result<u64, StoreError> {
        if expected_version == 0 {
            let inserted = self.conn.execute(
                "INSERT OR IGNORE INTO gamification (user_id, xp, level, streak, version)
                 VALUES (?1, ?2, ?3, ?4, 1)",
                params![user_id, state.xp, state.level, state.streak],
            )?;
            if inserted == 0 {
                return Err(StoreError::Conflict { expected_version });
            }
            Ok(1)
        } else {
            let next_version = expected_version + 1;
            let updated = self.conn.execute(
                "UPDATE gamification SET xp = ?2, level = ?3, streak = ?4, version = ?5
                 WHERE user_id = ?1 AND version = ?6",
                params![
                    user_id,
                    state.xp,
                    state.level,
                    state.streak,
                    next_version as i64,
                    expected_version as i64,
                ],
            )?;
            if updated == 0 {
                return Err(StoreError::Conflict { expected_version });
            }
            Ok(next_version)
        }
    }

    // === Completions (day-scoped, via kv) ===

    fn completions_key(user_id: &str, day_of_month: u32) -> String {
        format!("completed-tasks:{user_id}:{day_of_month}")
    }

    /// Completed task texts for one calendar day. The key rotates with
    /// the day of month, so yesterday's checkmarks never bleed into
    /// today.
    pub fn completed_tasks(
        &self,
        user_id: &str,
        day_of_month: u32,
    ) -> Result<Vec<String>, StoreError> {
        match self.kv_get(&Self::completions_key(user_id, day_of_month))? {
            Some(json) => {
                serde_json::from_str(&json).map_err(|e| StoreError::Corrupt(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }

    /// Overwrite the completed set for one calendar day.
    pub fn set_completed_tasks(
        &self,
        user_id: &str,
        day_of_month: u32,
        completed: &[String],
    ) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(completed).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        self.kv_set(&Self::completions_key(user_id, day_of_month), &json)
    }

    /// Persist one toggle atomically: the day's completed set and the
    /// gamification row move together or not at all.
    ///
    /// Returns the new gamification version on success. On any failure,
    /// including a version conflict, the transaction rolls back and
    /// neither write survives.
    pub fn save_toggle(
        &self,
        user_id: &str,
        day_of_month: u32,
        completed: &[String],
        state: &GamificationState,
        expected_version: u64,
    ) -> Result<u64, StoreError> {
        self.conn.execute_batch("BEGIN IMMEDIATE TRANSACTION;")?;
        let result: Result<u64, StoreError> = (|| {
            self.set_completed_tasks(user_id, day_of_month, completed)?;
            self.save_gamification(user_id, state, expected_version)
        })();
        match result {
            Ok(version) => {
                self.conn.execute_batch("COMMIT;")?;
                Ok(version)
            }
            Err(err) => {
                let _ = self.conn.execute_batch("ROLLBACK;");
                Err(err)
            }
        }
    }

    // === Program state (via kv) ===

    fn program_key(user_id: &str) -> String {
        format!("program-state:{user_id}")
    }

    /// Load a user's challenge program walk state.
    pub fn load_program_state(&self, user_id: &str) -> Result<Option<ProgramState>, StoreError> {
        match self.kv_get(&Self::program_key(user_id))? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| StoreError::Corrupt(e.to_string())),
            None => Ok(None),
        }
    }

    /// Persist a user's challenge program walk state.
    pub fn save_program_state(
        &self,
        user_id: &str,
        state: &ProgramState,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string(state).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        self.kv_set(&Self::program_key(user_id), &json)
    }

    // === Key-value store ===

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt
            .query_row(params![key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(result)
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_report(overall: f64) -> AssessmentReport {
        use crate::catalog::SectionLayout;
        use crate::scoring::score;
        // Derive a real report so stored JSON matches production shape.
        let layout = vec![SectionLayout {
            name: "Sleep".to_string(),
            question_count: 2,
        }];
        let responses = ResponseSet::from_scores(vec![4, 4]);
        let mut report = score(AgeGroup::Age18To25, &layout, &responses).unwrap();
        report.overall_percentage = overall;
        report
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn submissions_append_and_latest_wins() {
        let db = Database::open_memory().unwrap();
        let responses = ResponseSet::from_scores(vec![4, 3, 2]);

        db.record_submission("u1", AgeGroup::Under18, &responses, 55.0, at(1, 9))
            .unwrap();
        db.record_submission("u1", AgeGroup::Under18, &responses, 70.0, at(3, 9))
            .unwrap();
        db.record_submission("other", AgeGroup::Age25To40, &responses, 10.0, at(4, 9))
            .unwrap();

        let latest = db.latest_submission("u1").unwrap().unwrap();
        assert_eq!(latest.overall_percentage, 70.0);
        assert_eq!(latest.responses, responses);
        assert_eq!(latest.age_group, AgeGroup::Under18);

        assert!(db.latest_submission("nobody").unwrap().is_none());
    }

    #[test]
    fn history_numbers_attempts_in_time_order() {
        let db = Database::open_memory().unwrap();
        let responses = ResponseSet::from_scores(vec![4]);

        db.record_submission("u1", AgeGroup::Under18, &responses, 30.0, at(5, 9))
            .unwrap();
        db.record_submission("u1", AgeGroup::Under18, &responses, 60.0, at(9, 9))
            .unwrap();
        db.record_submission("u1", AgeGroup::Under18, &responses, 45.0, at(7, 9))
            .unwrap();

        let history = db.submission_history("u1").unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].attempt, 1);
        assert_eq!(history[0].overall_percentage, 30.0);
        assert_eq!(history[1].overall_percentage, 45.0);
        assert_eq!(history[2].attempt, 3);
        assert_eq!(history[2].overall_percentage, 60.0);
    }

    #[test]
    fn assessment_is_replaced_per_user() {
        let db = Database::open_memory().unwrap();

        db.save_assessment("u1", &make_report(40.0), at(1, 8)).unwrap();
        db.save_assessment("u1", &make_report(80.0), at(2, 8)).unwrap();

        let stored = db.load_assessment("u1").unwrap().unwrap();
        assert_eq!(stored.report.overall_percentage, 80.0);
        assert_eq!(stored.recorded_at, at(2, 8));

        assert!(db.load_assessment("u2").unwrap().is_none());
    }

    #[test]
    fn gamification_versioning_detects_conflicts() {
        let db = Database::open_memory().unwrap();
        let state = GamificationState {
            xp: 10,
            level: 1,
            streak: 0,
        };

        // First write inserts at version 1.
        assert_eq!(db.save_gamification("u1", &state, 0).unwrap(), 1);
        // A second "first write" loses.
        assert!(matches!(
            db.save_gamification("u1", &state, 0),
            Err(StoreError::Conflict { expected_version: 0 })
        ));

        // Update with the right version bumps it.
        let newer = GamificationState {
            xp: 20,
            level: 1,
            streak: 0,
        };
        assert_eq!(db.save_gamification("u1", &newer, 1).unwrap(), 2);

        // A stale writer is rejected and changes nothing.
        assert!(matches!(
            db.save_gamification("u1", &state, 1),
            Err(StoreError::Conflict { expected_version: 1 })
        ));
        let stored = db.load_gamification("u1").unwrap().unwrap();
        assert_eq!(stored.state.xp, 20);
        assert_eq!(stored.version, 2);
    }

    #[test]
    fn completions_are_scoped_to_the_day() {
        let db = Database::open_memory().unwrap();

        db.set_completed_tasks("u1", 12, &["walk".to_string()]).unwrap();
        assert_eq!(db.completed_tasks("u1", 12).unwrap(), vec!["walk"]);
        assert!(db.completed_tasks("u1", 13).unwrap().is_empty());
        assert!(db.completed_tasks("u2", 12).unwrap().is_empty());
    }

    #[test]
    fn save_toggle_commits_both_writes() {
        let db = Database::open_memory().unwrap();
        let state = GamificationState {
            xp: 10,
            level: 1,
            streak: 0,
        };

        let version = db
            .save_toggle("u1", 12, &["walk".to_string()], &state, 0)
            .unwrap();
        assert_eq!(version, 1);
        assert_eq!(db.completed_tasks("u1", 12).unwrap(), vec!["walk"]);
        assert_eq!(db.load_gamification("u1").unwrap().unwrap().state.xp, 10);
    }

    #[test]
    fn save_toggle_rolls_back_on_conflict() {
        let db = Database::open_memory().unwrap();
        let state = GamificationState {
            xp: 10,
            level: 1,
            streak: 0,
        };
        db.save_toggle("u1", 12, &["walk".to_string()], &state, 0)
            .unwrap();

        // Stale version: the completions write inside the same
        // transaction must not survive.
        let newer = GamificationState {
            xp: 20,
            level: 1,
            streak: 0,
        };
        let err = db
            .save_toggle(
                "u1",
                12,
                &["walk".to_string(), "stretch".to_string()],
                &newer,
                9,
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));

        assert_eq!(db.completed_tasks("u1", 12).unwrap(), vec!["walk"]);
        let stored = db.load_gamification("u1").unwrap().unwrap();
        assert_eq!(stored.state.xp, 10);
        assert_eq!(stored.version, 1);
    }

    #[test]
    fn program_state_round_trips() {
        let db = Database::open_memory().unwrap();
        assert!(db.load_program_state("u1").unwrap().is_none());

        let state = ProgramState {
            day_index: 4,
            checked: vec![true, false, true, false, false],
            streak: 5,
        };
        db.save_program_state("u1", &state).unwrap();
        assert_eq!(db.load_program_state("u1").unwrap().unwrap(), state);
    }

    #[test]
    fn kv_store() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
    }
}
