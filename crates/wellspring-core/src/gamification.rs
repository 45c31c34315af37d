//! Task-completion gamification: XP, level and streak.
//!
//! Transitions are pure: they take a state, return the next state, and
//! touch nothing else. The engine persists the returned state first and
//! only then adopts it, so an interrupted save never leaves memory and
//! store disagreeing.
//!
//! Level is always derived from XP (`xp / level_xp + 1`), never stored
//! authority. Streak is carried through toggles untouched; only the
//! challenge program advances it.

use serde::{Deserialize, Serialize};

/// Tunable progression rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamificationRules {
    /// XP granted per completed task (and removed when un-completed)
    pub xp_per_task: u32,
    /// XP required per level
    pub level_xp: u32,
}

impl Default for GamificationRules {
    fn default() -> Self {
        Self {
            xp_per_task: 10,
            level_xp: 100,
        }
    }
}

/// Persistent progression state for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamificationState {
    pub xp: u32,
    pub level: u32,
    pub streak: u32,
}

impl GamificationState {
    pub fn new() -> Self {
        Self {
            xp: 0,
            level: 1,
            streak: 0,
        }
    }

    /// Level implied by an XP total. Level 1 starts at 0 XP.
    pub fn level_for_xp(xp: u32, rules: &GamificationRules) -> u32 {
        xp / rules.level_xp.max(1) + 1
    }

    /// XP accumulated inside the current level, for progress displays.
    pub fn xp_into_level(&self, rules: &GamificationRules) -> u32 {
        self.xp % rules.level_xp.max(1)
    }

    /// Recompute the derived level from XP. Stored rows are normalized
    /// through this on load so a stale level column never wins.
    pub fn normalized(mut self, rules: &GamificationRules) -> Self {
        self.level = Self::level_for_xp(self.xp, rules);
        self
    }

    /// State after marking one task completed.
    pub fn complete_task(&self, rules: &GamificationRules) -> Self {
        let xp = self.xp + rules.xp_per_task;
        Self {
            xp,
            level: Self::level_for_xp(xp, rules),
            streak: self.streak,
        }
    }

    /// State after un-completing a task. XP never goes below zero, even
    /// when the stored total is smaller than one task's worth.
    pub fn uncomplete_task(&self, rules: &GamificationRules) -> Self {
        let xp = self.xp.saturating_sub(rules.xp_per_task);
        Self {
            xp,
            level: Self::level_for_xp(xp, rules),
            streak: self.streak,
        }
    }

    /// Dispatch a toggle: a currently completed task is being unchecked,
    /// anything else is being checked.
    pub fn apply_toggle(&self, rules: &GamificationRules, currently_completed: bool) -> Self {
        if currently_completed {
            self.uncomplete_task(rules)
        } else {
            self.complete_task(rules)
        }
    }
}

impl Default for GamificationState {
    fn default() -> Self {
        Self::new()
    }
}
