//! Property-based tests for scoring, plans and gamification.

use proptest::prelude::*;

use wellspring_core::catalog::builtin_questionnaires;
use wellspring_core::{
    cycle_day_index, score, AgeGroup, GamificationRules, GamificationState, ResponseSet,
    SectionLayout,
};

/// Strategy: a layout of 1-5 sections with 1-5 questions each.
fn layout_strategy() -> impl Strategy<Value = Vec<SectionLayout>> {
    prop::collection::vec(1..=5usize, 1..=5).prop_map(|counts| {
        counts
            .into_iter()
            .enumerate()
            .map(|(i, question_count)| SectionLayout {
                name: format!("Section {i}"),
                question_count,
            })
            .collect()
    })
}

/// Strategy: a layout plus a response set of exactly matching length,
/// entries either missing or a valid 1-4 score.
fn scored_input() -> impl Strategy<Value = (Vec<SectionLayout>, ResponseSet)> {
    layout_strategy()
        .prop_flat_map(|layout| {
            let total: usize = layout.iter().map(|l| l.question_count).sum();
            (
                Just(layout),
                prop::collection::vec(prop::option::of(1..=4u8), total),
            )
        })
        .prop_map(|(layout, entries)| (layout, ResponseSet::from_entries(entries)))
}

proptest! {
    // 1. Every percentage stays within [0, 100]
    #[test]
    fn percentages_stay_in_bounds((layout, responses) in scored_input()) {
        let report = score(AgeGroup::Age18To25, &layout, &responses).unwrap();
        prop_assert!((0.0..=100.0).contains(&report.overall_percentage));
        for section in &report.sections {
            prop_assert!(
                (0.0..=100.0).contains(&section.percentage),
                "section {} out of bounds: {}",
                section.section,
                section.percentage
            );
        }
    }

    // 2. Scoring is deterministic
    #[test]
    fn scoring_deterministic((layout, responses) in scored_input()) {
        let first = score(AgeGroup::Under18, &layout, &responses).unwrap();
        let second = score(AgeGroup::Under18, &layout, &responses).unwrap();
        prop_assert_eq!(first, second);
    }

    // 3. Raising one answer never lowers any percentage
    #[test]
    fn raising_an_answer_is_monotonic(
        (layout, responses) in scored_input(),
        pick in any::<prop::sample::Index>(),
    ) {
        let before = score(AgeGroup::Age25To40, &layout, &responses).unwrap();

        let mut entries = responses.entries().to_vec();
        let index = pick.index(entries.len());
        entries[index] = Some(match entries[index] {
            None => 1,
            Some(v) => v.saturating_add(1).min(4),
        });
        let raised = ResponseSet::from_entries(entries);
        let after = score(AgeGroup::Age25To40, &layout, &raised).unwrap();

        prop_assert!(after.overall_percentage >= before.overall_percentage);
        for (was, is) in before.sections.iter().zip(after.sections.iter()) {
            prop_assert!(is.percentage >= was.percentage);
        }
    }

    // 4. A response set of the wrong length is always rejected
    #[test]
    fn length_mismatch_always_rejected(
        (layout, responses) in scored_input(),
        extra in 1..=3usize,
    ) {
        let mut entries = responses.entries().to_vec();
        entries.extend(std::iter::repeat(Some(1)).take(extra));
        let too_long = ResponseSet::from_entries(entries);
        prop_assert!(score(AgeGroup::Under18, &layout, &too_long).is_err());
    }

    // 5. XP never goes negative under any toggle sequence, and level
    //    always stays the derived function of XP
    #[test]
    fn xp_floor_and_derived_level_hold(ops in prop::collection::vec(any::<bool>(), 0..25)) {
        let rules = GamificationRules::default();
        let mut state = GamificationState::new();
        for uncheck in ops {
            state = state.apply_toggle(&rules, uncheck);
            prop_assert_eq!(state.level, GamificationState::level_for_xp(state.xp, &rules));
        }
    }

    // 6. Completing then un-completing is neutral for any starting XP
    #[test]
    fn toggle_round_trip_neutral(xp in 0..10_000u32, streak in 0..100u32) {
        let rules = GamificationRules::default();
        let state = GamificationState { xp, level: 1, streak }.normalized(&rules);
        let back = state
            .apply_toggle(&rules, false)
            .apply_toggle(&rules, true);
        prop_assert_eq!(back, state);
    }

    // 7. Streak is untouched by any toggle
    #[test]
    fn toggles_preserve_streak(
        streak in 0..1_000u32,
        ops in prop::collection::vec(any::<bool>(), 1..20),
    ) {
        let rules = GamificationRules::default();
        let mut state = GamificationState { xp: 500, level: 6, streak };
        for uncheck in ops {
            state = state.apply_toggle(&rules, uncheck);
        }
        prop_assert_eq!(state.streak, streak);
    }

    // 8. The rotation index is always a valid day for the cycle
    #[test]
    fn cycle_index_stays_in_range(day in 0..=31u32, cycle in 0..=10usize) {
        let index = cycle_day_index(day, cycle);
        prop_assert!(index < cycle.max(1), "index={index} cycle={cycle}");
    }
}

// 9. Every built-in questionnaire scores clean extremes (non-proptest,
//    walks the real catalog)
#[test]
fn builtin_questionnaires_score_clean_extremes() {
    for questionnaire in builtin_questionnaires() {
        let layout = questionnaire.section_layout();
        let total = questionnaire.total_questions();

        let best = score(
            questionnaire.age_group,
            &layout,
            &ResponseSet::from_scores(vec![4; total]),
        )
        .unwrap();
        assert_eq!(
            best.overall_percentage, 100.0,
            "best answers for {} should score 100",
            questionnaire.age_group
        );

        let worst = score(
            questionnaire.age_group,
            &layout,
            &ResponseSet::from_scores(vec![1; total]),
        )
        .unwrap();
        assert_eq!(
            worst.overall_percentage, 0.0,
            "worst answers for {} should score 0",
            questionnaire.age_group
        );
    }
}
