//! Built-in task catalogs, one per supported age group.
//!
//! Every rotation runs on a two-day cycle; the plan generator picks the
//! day with `cycle_day_index`. Section names line up with the built-in
//! questionnaires so every scored section finds a rotation.

use super::{AgeGroup, SectionTasks, TaskCatalog};

/// Returns all built-in task catalogs.
pub fn builtin_task_catalogs() -> Vec<TaskCatalog> {
    vec![under_18_tasks(), age_18_to_25_tasks(), age_25_to_40_tasks()]
}

/// Find the built-in task catalog for an age group.
pub fn find_task_catalog(age_group: AgeGroup) -> Option<TaskCatalog> {
    builtin_task_catalogs()
        .into_iter()
        .find(|c| c.age_group == age_group)
}

// ============================================================================
// BUILT-IN TASK CATALOGS
// ============================================================================

fn under_18_tasks() -> TaskCatalog {
    TaskCatalog {
        age_group: AgeGroup::Under18,
        rotations: vec![
            SectionTasks::new(
                "Anxiety",
                vec![
                    vec![
                        "Write down one worry and one thing you can do about it",
                        "Practice box breathing for three minutes",
                        "Tell a friend or parent about something on your mind",
                    ],
                    vec![
                        "Do a five-minute body scan before homework",
                        "List three things that went fine today",
                        "Take a ten-minute walk without your phone",
                    ],
                ],
            ),
            SectionTasks::new(
                "Sleep",
                vec![
                    vec![
                        "Put your phone outside the bedroom an hour before bed",
                        "Set a fixed lights-out time for tonight",
                        "Read a few pages of a paper book before sleeping",
                    ],
                    vec![
                        "Skip caffeine after 4 PM",
                        "Dim your room 30 minutes before bed",
                        "Note tomorrow's first task so it stops circling your head",
                    ],
                ],
            ),
            SectionTasks::new(
                "Screen Time",
                vec![
                    vec![
                        "Keep your phone in another room for one homework block",
                        "Turn off non-essential notifications",
                        "Replace 20 minutes of scrolling with anything outdoors",
                    ],
                    vec![
                        "Set an app timer on your most-used app",
                        "Eat one meal today with no screen in sight",
                        "Charge your phone outside your bedroom tonight",
                    ],
                ],
            ),
            SectionTasks::new(
                "Self Esteem",
                vec![
                    vec![
                        "Write down one thing you did well today",
                        "Give a classmate a genuine compliment",
                        "Spend 15 minutes on a hobby you are good at",
                    ],
                    vec![
                        "Answer or ask one question in class",
                        "Write a kind sentence to yourself about a recent mistake",
                        "List two things you can do now that you couldn't a year ago",
                    ],
                ],
            ),
        ],
    }
}

fn age_18_to_25_tasks() -> TaskCatalog {
    TaskCatalog {
        age_group: AgeGroup::Age18To25,
        rotations: vec![
            SectionTasks::new(
                "Anxiety",
                vec![
                    vec![
                        "Do a four-minute breathing exercise between study blocks",
                        "Write the worst case, best case and likely case for one worry",
                        "Schedule tomorrow's hardest task for your best hour",
                    ],
                    vec![
                        "Take a 15-minute walk without headphones",
                        "Message someone you trust about how your week is going",
                        "Close all browser tabs you have been avoiding",
                    ],
                ],
            ),
            SectionTasks::new(
                "Sleep",
                vec![
                    vec![
                        "Pick a fixed wake-up time for the next three days",
                        "Stop screens 45 minutes before bed tonight",
                        "Get sunlight within an hour of waking",
                    ],
                    vec![
                        "No caffeine after 3 PM today",
                        "Write tomorrow's to-do list before getting into bed",
                        "Keep your last hour of the day work-free",
                    ],
                ],
            ),
            SectionTasks::new(
                "Focus",
                vec![
                    vec![
                        "Work one 25-minute block with your phone in another room",
                        "Pick tomorrow's single most important task tonight",
                        "Clear your desk down to what today's work needs",
                    ],
                    vec![
                        "Batch all messaging into two fixed windows today",
                        "Finish one small task you have postponed this week",
                        "Try 50 minutes of single-task work with a 10-minute break",
                    ],
                ],
            ),
            SectionTasks::new(
                "Self Esteem",
                vec![
                    vec![
                        "Write down three things you handled well this week",
                        "Say no to one request that would overload you",
                        "Spend 20 minutes on a skill you want to grow",
                    ],
                    vec![
                        "Note one comparison that drained you and mute its source",
                        "Ask for feedback on something you made",
                        "Write one sentence of encouragement to your future self",
                    ],
                ],
            ),
            SectionTasks::new(
                "Stress",
                vec![
                    vec![
                        "Block 30 unscheduled minutes in today's calendar",
                        "Do ten minutes of stretching or light exercise",
                        "Write down everything on your plate, then cross out one thing",
                    ],
                    vec![
                        "Cook or eat one unhurried meal",
                        "Take your next phone call while walking",
                        "End work at a time you pick now, and keep it",
                    ],
                ],
            ),
        ],
    }
}

fn age_25_to_40_tasks() -> TaskCatalog {
    TaskCatalog {
        age_group: AgeGroup::Age25To40,
        rotations: vec![
            SectionTasks::new(
                "Stress",
                vec![
                    vec![
                        "Take a real lunch break away from your desk",
                        "Write down the one thing that must happen today, and do it first",
                        "Do five minutes of slow breathing after your last meeting",
                    ],
                    vec![
                        "Go outside for 15 minutes in daylight",
                        "Delegate or drop one task from this week",
                        "Set a hard stop for work tonight and tell someone about it",
                    ],
                ],
            ),
            SectionTasks::new(
                "Sleep",
                vec![
                    vec![
                        "Write tomorrow's open loops on paper before bed",
                        "Keep screens out of the bedroom tonight",
                        "Set an alarm for going to bed, not just waking up",
                    ],
                    vec![
                        "Skip alcohol and heavy food within three hours of bed",
                        "Do a ten-minute wind-down routine tonight",
                        "Keep the same wake-up time tomorrow, even if tired",
                    ],
                ],
            ),
            SectionTasks::new(
                "Work Life Balance",
                vec![
                    vec![
                        "Leave work at the planned time today",
                        "Plan one small thing to look forward to this evening",
                        "Turn off work notifications after dinner",
                    ],
                    vec![
                        "Book one evening this week that is completely work-free",
                        "Take every call you can while standing or walking",
                        "Spend your first 30 minutes after work on something physical",
                    ],
                ],
            ),
            SectionTasks::new(
                "Relationships",
                vec![
                    vec![
                        "Have one conversation today with your phone out of reach",
                        "Message a friend you have not spoken to this month",
                        "Ask someone close how their week is actually going",
                    ],
                    vec![
                        "Plan a shared meal or walk this week",
                        "Say thank you for something specific to someone at home",
                        "Ask for help with one thing you have been carrying alone",
                    ],
                ],
            ),
        ],
    }
}
