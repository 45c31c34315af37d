//! Fixed-length challenge program with per-day checklists.
//!
//! Unlike the daily plan, which is regenerated from the latest
//! assessment, the program is a fixed 21-day sequence walked one day at
//! a time. Completing a day advances the cursor, clears the checklist
//! and grows the program streak; the final day is terminal.

use serde::{Deserialize, Serialize};

/// One day of the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramDay {
    /// 1-based day number as shown to the user
    pub day: u32,
    pub tasks: Vec<String>,
}

/// A complete program definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeProgram {
    pub title: String,
    pub description: String,
    pub days: Vec<ProgramDay>,
}

impl ChallengeProgram {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Walk state for one user through a program.
///
/// Serialized as-is into the kv store; the checked vector always has
/// one slot per task of the current day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramState {
    pub day_index: usize,
    pub checked: Vec<bool>,
    pub streak: u32,
}

impl ProgramState {
    /// Start at day one with nothing checked. The streak starts at 1;
    /// showing up counts as the first day.
    pub fn new(program: &ChallengeProgram) -> Self {
        let task_count = program.days.first().map(|d| d.tasks.len()).unwrap_or(0);
        Self {
            day_index: 0,
            checked: vec![false; task_count],
            streak: 1,
        }
    }

    /// The day the cursor is on, `None` for an empty program.
    pub fn current_day<'a>(&self, program: &'a ChallengeProgram) -> Option<&'a ProgramDay> {
        program.days.get(self.day_index)
    }

    /// Flip one checkbox. Out-of-range indices are ignored; returns
    /// whether anything changed.
    pub fn toggle(&mut self, task_index: usize) -> bool {
        match self.checked.get_mut(task_index) {
            Some(slot) => {
                *slot = !*slot;
                true
            }
            None => false,
        }
    }

    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|c| **c).count()
    }

    /// Share of today's checklist done, 0 when the day has no tasks.
    pub fn progress_percent(&self) -> u32 {
        if self.checked.is_empty() {
            return 0;
        }
        ((self.checked_count() as f64 / self.checked.len() as f64) * 100.0).round() as u32
    }

    pub fn is_final_day(&self, program: &ChallengeProgram) -> bool {
        !program.is_empty() && self.day_index + 1 >= program.len()
    }

    /// Advance to the next day: cursor forward, checklist cleared and
    /// resized to the new day, streak up by one. On the final day this
    /// is a no-op; returns whether the cursor moved.
    pub fn advance_day(&mut self, program: &ChallengeProgram) -> bool {
        if self.day_index + 1 >= program.len() {
            return false;
        }
        self.day_index += 1;
        let task_count = program.days[self.day_index].tasks.len();
        self.checked = vec![false; task_count];
        self.streak += 1;
        true
    }
}

/// The built-in 21-day reset program.
///
/// Five anchors per day (waking, stillness, food, movement, reflection)
/// that tighten gradually over the three weeks.
pub fn builtin_program() -> ChallengeProgram {
    let days: [[&str; 5]; 21] = [
        [
            "Wake up by 7:30 AM",
            "Sit quietly for 5 minutes before touching your phone",
            "Drink a glass of water before any coffee or tea",
            "Walk for 10 minutes outdoors",
            "Write one sentence about how today went",
        ],
        [
            "Wake up by 7:30 AM",
            "Breathe slowly for 5 minutes",
            "Eat breakfast sitting down, no screen",
            "Stretch for 10 minutes",
            "Write down one thing you're grateful for",
        ],
        [
            "Wake up by 7:15 AM",
            "Sit quietly for 8 minutes",
            "No snacks before lunch today",
            "Walk for 15 minutes outdoors",
            "Write three lines about what occupied your mind today",
        ],
        [
            "Wake up by 7:15 AM",
            "Breathe slowly for 8 minutes",
            "Keep your phone away during every meal",
            "Do 15 minutes of bodyweight exercise",
            "Read 5 pages of any book",
        ],
        [
            "Wake up by 7:00 AM",
            "Sit quietly for 10 minutes",
            "Eat your last meal 3 hours before bed",
            "Jog or cycle for 15 minutes",
            "Write down tomorrow's single most important task",
        ],
        [
            "Wake up by 7:00 AM",
            "Gratitude journaling before breakfast",
            "No takeaway or delivery food today",
            "Do 15 minutes of stretching or yoga",
            "Read 5 pages of any book",
        ],
        [
            "Wake up by 7:00 AM",
            "Spend the first hour of the day in silence",
            "Cook one meal from scratch",
            "Take a 20-minute walk without your phone",
            "Review your first week in five sentences",
        ],
        [
            "Wake up by 6:45 AM",
            "Sit quietly for 10 minutes and picture your week going well",
            "Share a meal with someone",
            "Walk barefoot on grass or sand if you can",
            "Read 5 pages of any book",
        ],
        [
            "Wake up by 6:45 AM",
            "Follow a 10-minute guided meditation",
            "Eat fruit instead of dessert today",
            "20 minutes of light cardio",
            "Write down one urge you resisted today",
        ],
        [
            "Wake up by 6:45 AM",
            "Journal about what tempts you most, and your counter-move",
            "Cook something new and note the recipe",
            "Five rounds of sun salutation or a full-body stretch",
            "Read 5 pages of any book",
        ],
        [
            "Wake up by 6:30 AM",
            "Sit quietly for 12 minutes",
            "No social media for the whole day",
            "Do 20 squats, 20 push-ups and a 2-minute plank",
            "Write three lines about how the day felt without the feed",
        ],
        [
            "Wake up by 6:30 AM",
            "Meditate with calm music for 12 minutes",
            "Eat only two meals today, no snacking",
            "Practice a balance exercise for 10 minutes",
            "Read 5 pages of any book",
        ],
        [
            "Wake up by 6:30 AM",
            "Take a slow 10-minute walk before breakfast",
            "Help someone at home with a chore unasked",
            "Stretching plus light cardio, 20 minutes",
            "Write down one thing you did for someone else",
        ],
        [
            "Wake up by 6:30 AM",
            "No phone for the first 2 hours of the day",
            "Eat plain, simple food today",
            "Practice slow breathing for 10 minutes",
            "Review your second week in five sentences",
        ],
        [
            "Wake up by 6:15 AM",
            "Walking meditation for 15 minutes",
            "Speak only when necessary until noon",
            "Yoga and breathing practice, 30 minutes",
            "Read 5 pages of any book",
        ],
        [
            "Wake up by 6:15 AM",
            "Journal about your habits and what triggers them",
            "Cook a healthy dish you have never made",
            "15 minutes of strength training",
            "Write one sentence of advice to yourself",
        ],
        [
            "Wake up by 6:15 AM",
            "Meditate on what you want the next year to look like",
            "No added sugar today",
            "End your shower cold",
            "Read 5 pages of any book",
        ],
        [
            "Wake up by 6:00 AM",
            "Spend 15 minutes in quiet reflection",
            "No lying, gossip or complaints today",
            "Sit somewhere green in silence for 15 minutes",
            "Write down what you noticed while sitting still",
        ],
        [
            "Wake up by 6:00 AM",
            "Repeat one phrase that steadies you, slowly, for 10 minutes",
            "Finish every task you start today",
            "Full-body workout or yoga, 30 minutes",
            "Read 5 pages of any book",
        ],
        [
            "Wake up by 6:00 AM",
            "Reflect on what the last 19 days have changed",
            "Eat only home-cooked food today",
            "Breathing exercises for 20 minutes",
            "Write a short list of habits you want to keep",
        ],
        [
            "Wake up by 6:00 AM",
            "One long sit: 30 minutes of stillness",
            "Write a letter to your future self",
            "Take a long walk and plan what comes after the program",
            "Thank one person who helped you through the three weeks",
        ],
    ];

    ChallengeProgram {
        title: "21-Day Reset".to_string(),
        description: indoc::indoc! {"
            Three weeks of small daily anchors: an earlier wake-up, a few
            minutes of stillness, one deliberate meal, some movement and a
            short written reflection.

            The asks tighten week by week, so the first days are easy on
            purpose. Check off what you finish, close the day to move on,
            and the streak tracks how many days you have walked in a row.
        "}
        .to_string(),
        days: days
            .iter()
            .enumerate()
            .map(|(i, tasks)| ProgramDay {
                day: i as u32 + 1,
                tasks: tasks.iter().map(|t| t.to_string()).collect(),
            })
            .collect(),
    }
}
