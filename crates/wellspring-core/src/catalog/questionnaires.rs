//! Built-in questionnaires, one per supported age group.
//!
//! Question options are always ordered most favorable first so that the
//! collector's reverse scoring (option 0 -> 4 points) holds uniformly.

use super::{AgeGroup, Question, Questionnaire, Section};

/// Returns all built-in questionnaires.
pub fn builtin_questionnaires() -> Vec<Questionnaire> {
    vec![
        under_18_questionnaire(),
        age_18_to_25_questionnaire(),
        age_25_to_40_questionnaire(),
    ]
}

/// Find the built-in questionnaire for an age group.
pub fn find_questionnaire(age_group: AgeGroup) -> Option<Questionnaire> {
    builtin_questionnaires()
        .into_iter()
        .find(|q| q.age_group == age_group)
}

// ============================================================================
// BUILT-IN QUESTIONNAIRES
// ============================================================================

fn under_18_questionnaire() -> Questionnaire {
    Questionnaire {
        age_group: AgeGroup::Under18,
        sections: vec![
            Section::new(
                "Anxiety",
                vec![
                    Question::new(
                        "How often do you feel nervous or on edge during a school week?",
                        ["Rarely or never", "A few days", "More than half the days", "Nearly every day"],
                    ),
                    Question::new(
                        "When something upsets you, how quickly can you calm yourself down?",
                        ["Within minutes", "Within an hour", "It takes most of the day", "I stay upset for days"],
                    ),
                    Question::new(
                        "How often do worries stop you from enjoying time with friends?",
                        ["Never", "Occasionally", "Often", "Almost always"],
                    ),
                ],
            ),
            Section::new(
                "Sleep",
                vec![
                    Question::new(
                        "How many nights a week do you get a full night's sleep?",
                        ["Six or seven", "Four or five", "Two or three", "One or none"],
                    ),
                    Question::new(
                        "How rested do you feel on a typical school morning?",
                        ["Fully rested", "Mostly rested", "Somewhat tired", "Exhausted"],
                    ),
                    Question::new(
                        "How often do you stay up past midnight on a screen?",
                        ["Never", "Once or twice a week", "Most nights", "Every night"],
                    ),
                ],
            ),
            Section::new(
                "Screen Time",
                vec![
                    Question::new(
                        "How easily can you put your phone away while doing homework?",
                        ["Very easily", "With a little effort", "With a lot of effort", "I can't"],
                    ),
                    Question::new(
                        "How often do you lose track of time while scrolling?",
                        ["Rarely", "A few times a week", "Daily", "Several times a day"],
                    ),
                    Question::new(
                        "How often does screen time replace time outdoors or with family?",
                        ["Never", "Sometimes", "Most days", "Every day"],
                    ),
                ],
            ),
            Section::new(
                "Self Esteem",
                vec![
                    Question::new(
                        "How confident do you feel speaking up in class?",
                        ["Very confident", "Mostly confident", "Nervous", "I avoid it entirely"],
                    ),
                    Question::new(
                        "When you make a mistake, how do you usually react?",
                        ["I learn from it and move on", "It bothers me briefly", "I dwell on it for days", "I feel worthless"],
                    ),
                    Question::new(
                        "How often do you compare yourself negatively to classmates?",
                        ["Rarely", "Sometimes", "Often", "Constantly"],
                    ),
                ],
            ),
        ],
    }
}

fn age_18_to_25_questionnaire() -> Questionnaire {
    Questionnaire {
        age_group: AgeGroup::Age18To25,
        sections: vec![
            Section::new(
                "Anxiety",
                vec![
                    Question::new(
                        "How often do you feel anxious about your studies or career path?",
                        ["Rarely or never", "A few days a month", "A few days a week", "Nearly every day"],
                    ),
                    Question::new(
                        "How often does anxiety interfere with things you planned to do?",
                        ["Never", "Occasionally", "Often", "Almost always"],
                    ),
                    Question::new(
                        "How well do you manage pressure before deadlines or exams?",
                        ["Calmly", "With mild stress", "With heavy stress", "I feel overwhelmed"],
                    ),
                ],
            ),
            Section::new(
                "Sleep",
                vec![
                    Question::new(
                        "How consistent is your sleep schedule across the week?",
                        ["Very consistent", "Mostly consistent", "Irregular", "Completely erratic"],
                    ),
                    Question::new(
                        "How many hours of sleep do you get on a typical night?",
                        ["Seven or more", "Six", "Five", "Four or fewer"],
                    ),
                    Question::new(
                        "How often do you feel drowsy during the day?",
                        ["Rarely", "Sometimes", "Most days", "Every day"],
                    ),
                ],
            ),
            Section::new(
                "Focus",
                vec![
                    Question::new(
                        "How long can you work on one task before reaching for a distraction?",
                        ["An hour or more", "About thirty minutes", "About ten minutes", "A few minutes"],
                    ),
                    Question::new(
                        "How often do you finish what you start in a day?",
                        ["Almost always", "Usually", "Sometimes", "Rarely"],
                    ),
                    Question::new(
                        "How cluttered does your mind feel when you sit down to work?",
                        ["Clear", "Slightly busy", "Noisy", "Chaotic"],
                    ),
                ],
            ),
            Section::new(
                "Self Esteem",
                vec![
                    Question::new(
                        "How do you feel about your progress compared to your peers?",
                        ["Content with my own pace", "Mostly content", "Frequently behind", "Hopelessly behind"],
                    ),
                    Question::new(
                        "How comfortable are you saying no to things you don't want to do?",
                        ["Very comfortable", "Usually comfortable", "Uncomfortable", "I never say no"],
                    ),
                    Question::new(
                        "How often do you speak to yourself kindly after a setback?",
                        ["Almost always", "Usually", "Rarely", "Never"],
                    ),
                ],
            ),
            Section::new(
                "Stress",
                vec![
                    Question::new(
                        "How often do you feel there are too many demands on your time?",
                        ["Rarely", "Sometimes", "Often", "Constantly"],
                    ),
                    Question::new(
                        "How often do physical signs of stress show up (headaches, tension)?",
                        ["Rarely or never", "A few times a month", "Weekly", "Daily"],
                    ),
                    Question::new(
                        "How much time do you set aside each week purely to unwind?",
                        ["Several hours", "An hour or two", "A few minutes", "None"],
                    ),
                ],
            ),
        ],
    }
}

fn age_25_to_40_questionnaire() -> Questionnaire {
    Questionnaire {
        age_group: AgeGroup::Age25To40,
        sections: vec![
            Section::new(
                "Stress",
                vec![
                    Question::new(
                        "How often does work stress follow you home?",
                        ["Rarely", "Sometimes", "Most days", "Every day"],
                    ),
                    Question::new(
                        "How well do you recover after a demanding week?",
                        ["A weekend resets me", "It takes a few days", "It takes the whole week", "I never feel recovered"],
                    ),
                    Question::new(
                        "How often do you feel irritable over small things?",
                        ["Rarely", "Occasionally", "Often", "Constantly"],
                    ),
                ],
            ),
            Section::new(
                "Sleep",
                vec![
                    Question::new(
                        "How often do you wake up during the night thinking about obligations?",
                        ["Rarely or never", "A few times a month", "A few times a week", "Nightly"],
                    ),
                    Question::new(
                        "How refreshed do you feel when you wake up?",
                        ["Refreshed", "Mostly refreshed", "Groggy", "Drained"],
                    ),
                    Question::new(
                        "How often do you sacrifice sleep to get more done?",
                        ["Never", "Occasionally", "Weekly", "Most nights"],
                    ),
                ],
            ),
            Section::new(
                "Work Life Balance",
                vec![
                    Question::new(
                        "How often do you take a real break during the workday?",
                        ["Every day", "Most days", "Rarely", "Never"],
                    ),
                    Question::new(
                        "How many evenings a week are free of work entirely?",
                        ["Five or more", "Three or four", "One or two", "None"],
                    ),
                    Question::new(
                        "How guilty do you feel when you take time off?",
                        ["Not at all", "Slightly", "Quite guilty", "Too guilty to enjoy it"],
                    ),
                ],
            ),
            Section::new(
                "Relationships",
                vec![
                    Question::new(
                        "How often do you spend unhurried time with people close to you?",
                        ["Several times a week", "Weekly", "Monthly", "Almost never"],
                    ),
                    Question::new(
                        "How comfortable are you asking for help when you need it?",
                        ["Very comfortable", "Usually comfortable", "Reluctant", "I never ask"],
                    ),
                    Question::new(
                        "How often do conversations at home end in tension?",
                        ["Rarely", "Occasionally", "Often", "Most of the time"],
                    ),
                ],
            ),
        ],
    }
}
