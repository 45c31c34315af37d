//! Response collection over a flattened questionnaire.
//!
//! The collector walks the questionnaire one question at a time:
//!
//!   start ──> answer/advance/retreat (any order, revisits allowed) ──> submit
//!
//! Answers are reverse scored at selection time: option index `i` is
//! stored as `4 - i`, so the first (most favorable) option is worth 4
//! points and the last is worth 1. Nothing is persisted until `submit`
//! returns a complete [`ResponseSet`].

use serde::{Deserialize, Serialize};

use crate::catalog::{Question, Questionnaire};
use crate::error::{CoreError, Result, ValidationError};

/// One flattened question, with its originating section retained so the
/// UI layer can show where in the questionnaire the user is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    pub section: String,
    pub text: String,
    pub options: Vec<String>,
}

/// Positionally aligned answer scores for one submission.
///
/// Serializes as a flat array of nullable integers, the stored shape of
/// a submission's `responses` field. Entries are `None` only in legacy
/// rows; `ResponseCollector::submit` never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    entries: Vec<Option<u8>>,
}

impl ResponseSet {
    /// Wrap raw entries, typically decoded from the store.
    pub fn from_entries(entries: Vec<Option<u8>>) -> Self {
        Self { entries }
    }

    /// Build a fully answered set from plain scores.
    pub fn from_scores(scores: Vec<u8>) -> Self {
        Self {
            entries: scores.into_iter().map(Some).collect(),
        }
    }

    pub fn entries(&self) -> &[Option<u8>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cursor-based collector for one assessment run.
#[derive(Debug, Clone)]
pub struct ResponseCollector {
    prompts: Vec<Prompt>,
    answers: Vec<Option<u8>>,
    cursor: usize,
}

impl ResponseCollector {
    /// Flatten the questionnaire into a linear prompt sequence, all
    /// answers initially empty, cursor at the first question.
    pub fn new(questionnaire: &Questionnaire) -> Self {
        let prompts: Vec<Prompt> = questionnaire
            .sections
            .iter()
            .flat_map(|section| {
                section.questions.iter().map(|q| Prompt {
                    section: section.name.clone(),
                    text: q.text.clone(),
                    options: q.options.clone(),
                })
            })
            .collect();
        let answers = vec![None; prompts.len()];
        Self {
            prompts,
            answers,
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The prompt under the cursor, `None` for an empty questionnaire.
    pub fn current(&self) -> Option<&Prompt> {
        self.prompts.get(self.cursor)
    }

    /// Recorded score for a question, `None` while unanswered.
    pub fn answer_at(&self, index: usize) -> Option<u8> {
        self.answers.get(index).copied().flatten()
    }

    /// Record the answer for the question under the cursor.
    ///
    /// Selecting again overwrites the previous answer. The cursor does
    /// not move; navigation is the caller's call.
    pub fn select_answer(&mut self, option_index: usize) -> Result<(), ValidationError> {
        if self.cursor >= self.answers.len() {
            return Err(ValidationError::OutOfBounds {
                collection: "questions".to_string(),
                index: self.cursor,
                len: self.answers.len(),
            });
        }
        if option_index >= Question::OPTION_COUNT {
            return Err(ValidationError::InvalidOption {
                index: option_index,
            });
        }
        self.answers[self.cursor] = Some((Question::OPTION_COUNT - option_index) as u8);
        Ok(())
    }

    /// Move to the next question. No-op on the last one; returns
    /// whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.prompts.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous question. No-op on the first one; returns
    /// whether the cursor moved.
    pub fn retreat(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// True once every question holds an answer. An empty questionnaire
    /// is never complete; there is nothing to submit.
    pub fn is_complete(&self) -> bool {
        !self.answers.is_empty() && self.answers.iter().all(Option::is_some)
    }

    /// Produce the immutable response set, or report how far along the
    /// run is. Submission has no side effects; the collector can keep
    /// being edited afterwards.
    pub fn submit(&self) -> Result<ResponseSet> {
        if !self.is_complete() {
            return Err(CoreError::IncompleteSubmission {
                answered: self.answered_count(),
                total: self.len(),
            });
        }
        Ok(ResponseSet {
            entries: self.answers.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AgeGroup, Section};

    fn make_questionnaire() -> Questionnaire {
        Questionnaire {
            age_group: AgeGroup::Age18To25,
            sections: vec![
                Section::new(
                    "Sleep",
                    vec![
                        Question::new("s1", ["best", "good", "poor", "worst"]),
                        Question::new("s2", ["best", "good", "poor", "worst"]),
                    ],
                ),
                Section::new("Focus", vec![Question::new("f1", ["best", "good", "poor", "worst"])]),
            ],
        }
    }

    #[test]
    fn flattening_preserves_section_order() {
        let collector = ResponseCollector::new(&make_questionnaire());
        assert_eq!(collector.len(), 3);
        assert_eq!(collector.current().unwrap().section, "Sleep");
        assert_eq!(collector.current().unwrap().text, "s1");
    }

    #[test]
    fn select_answer_reverse_scores() {
        let mut collector = ResponseCollector::new(&make_questionnaire());
        collector.select_answer(0).unwrap();
        assert_eq!(collector.answer_at(0), Some(4));
        collector.select_answer(3).unwrap();
        assert_eq!(collector.answer_at(0), Some(1), "reselect overwrites");
    }

    #[test]
    fn select_answer_rejects_out_of_range_option() {
        let mut collector = ResponseCollector::new(&make_questionnaire());
        let err = collector.select_answer(4).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidOption { index: 4 }));
        assert_eq!(collector.answer_at(0), None);
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut collector = ResponseCollector::new(&make_questionnaire());
        assert!(!collector.retreat(), "already at first question");
        assert!(collector.advance());
        assert!(collector.advance());
        assert!(!collector.advance(), "already at last question");
        assert_eq!(collector.cursor(), 2);
        assert!(collector.retreat());
        assert_eq!(collector.cursor(), 1);
    }

    #[test]
    fn submit_rejects_incomplete_run() {
        let mut collector = ResponseCollector::new(&make_questionnaire());
        collector.select_answer(0).unwrap();
        collector.advance();
        collector.select_answer(1).unwrap();

        match collector.submit() {
            Err(CoreError::IncompleteSubmission { answered, total }) => {
                assert_eq!(answered, 2);
                assert_eq!(total, 3);
            }
            other => panic!("expected IncompleteSubmission, got {other:?}"),
        }
    }

    #[test]
    fn submit_yields_aligned_scores() {
        let mut collector = ResponseCollector::new(&make_questionnaire());
        collector.select_answer(0).unwrap(); // 4
        collector.advance();
        collector.select_answer(2).unwrap(); // 2
        collector.advance();
        collector.select_answer(3).unwrap(); // 1

        let set = collector.submit().unwrap();
        assert_eq!(set.entries(), &[Some(4), Some(2), Some(1)]);

        // Submission leaves the collector editable.
        assert_eq!(collector.answered_count(), 3);
    }

    #[test]
    fn empty_questionnaire_never_completes() {
        let empty = Questionnaire {
            age_group: AgeGroup::Under18,
            sections: vec![],
        };
        let collector = ResponseCollector::new(&empty);
        assert!(collector.is_empty());
        assert!(!collector.is_complete());
        assert!(matches!(
            collector.submit(),
            Err(CoreError::IncompleteSubmission { answered: 0, total: 0 })
        ));
    }

    #[test]
    fn response_set_serializes_as_nullable_array() {
        let set = ResponseSet::from_entries(vec![Some(4), None, Some(1)]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[4,null,1]");
        let back: ResponseSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
