//! Integration tests for the full assessment journey.

use wellspring_core::{
    AgeGroup, CoreError, Database, GamificationRules, ResponseCollector, ScoreBand,
    ValidationError, WellnessEngine,
};

fn make_engine() -> WellnessEngine {
    WellnessEngine::new(
        Database::open_memory().unwrap(),
        GamificationRules::default(),
        "journey-user",
    )
}

#[test]
fn test_collector_to_report_journey() {
    let engine = make_engine();
    let questionnaire = engine.questionnaire(AgeGroup::Age18To25).unwrap();

    // Walk the whole questionnaire picking the second-best option
    // everywhere: each answer is worth 3 of 4 points.
    let mut collector = ResponseCollector::new(&questionnaire);
    loop {
        collector.select_answer(1).unwrap();
        if !collector.advance() {
            break;
        }
    }
    assert!(collector.is_complete());
    let responses = collector.submit().unwrap();

    let stored = engine
        .submit_assessment(AgeGroup::Age18To25, &responses)
        .unwrap();

    // 3 points per question normalizes to 2/3 of the range everywhere.
    let expected = 200.0 / 3.0;
    assert!((stored.report.overall_percentage - expected).abs() < 1e-9);
    assert_eq!(stored.report.overall_band, ScoreBand::Moderate);
    for section in &stored.report.sections {
        assert!((section.percentage - expected).abs() < 1e-9);
        assert_eq!(section.band, ScoreBand::Moderate);
    }

    // The persisted report is the one we just got back.
    assert_eq!(engine.current_report().unwrap(), stored);
}

#[test]
fn test_incomplete_run_cannot_submit() {
    let engine = make_engine();
    let questionnaire = engine.questionnaire(AgeGroup::Under18).unwrap();

    let mut collector = ResponseCollector::new(&questionnaire);
    collector.select_answer(0).unwrap();
    collector.advance();
    collector.select_answer(2).unwrap();

    match collector.submit() {
        Err(CoreError::IncompleteSubmission { answered, total }) => {
            assert_eq!(answered, 2);
            assert_eq!(total, questionnaire.total_questions());
        }
        other => panic!("expected IncompleteSubmission, got {other:?}"),
    }
}

#[test]
fn test_age_routing_matches_questionnaire_shape() {
    let engine = make_engine();

    let cases = [
        (15, AgeGroup::Under18),
        (18, AgeGroup::Age18To25),
        (25, AgeGroup::Age18To25),
        (26, AgeGroup::Age25To40),
        (40, AgeGroup::Age25To40),
    ];
    for (years, expected) in cases {
        assert_eq!(AgeGroup::from_age(years), Some(expected), "age {years}");
        let questionnaire = engine.questionnaire(expected).unwrap();
        assert_eq!(questionnaire.age_group, expected);
        assert!(questionnaire.total_questions() > 0);
    }

    assert_eq!(AgeGroup::from_age(41), None);
}

#[test]
fn test_plan_toggle_and_gamification_journey() {
    let engine = make_engine();
    let questionnaire = engine.questionnaire(AgeGroup::Under18).unwrap();

    // Worst answers everywhere: every section lands in Significant, and
    // the plan still covers every section.
    let mut collector = ResponseCollector::new(&questionnaire);
    loop {
        collector.select_answer(3).unwrap();
        if !collector.advance() {
            break;
        }
    }
    let responses = collector.submit().unwrap();
    let stored = engine
        .submit_assessment(AgeGroup::Under18, &responses)
        .unwrap();
    assert_eq!(stored.report.overall_percentage, 0.0);
    assert_eq!(stored.report.overall_band, ScoreBand::Significant);

    let view = engine.daily_plan(14).unwrap();
    assert!(!view.plan.is_empty());
    assert!(view.plan.unmatched_sections.is_empty());
    let first = view.plan.tasks[0].clone();
    let second = view.plan.tasks[1].clone();

    // Complete two tasks: XP accrues, completion tracks the day.
    let one = engine.toggle_task(14, &first).unwrap();
    assert!(one.completed);
    assert_eq!(one.state.xp, 10);
    let two = engine.toggle_task(14, &second).unwrap();
    assert_eq!(two.state.xp, 20);
    assert_eq!(two.state.level, 1);
    assert_eq!(two.version, 2);

    let view = engine.daily_plan(14).unwrap();
    assert_eq!(view.completed.len(), 2);
    assert_eq!(
        view.completion_percent(),
        view.plan.completion_percent(2)
    );

    // Un-complete one: XP comes back down, the other completion stays.
    let reverted = engine.toggle_task(14, &first).unwrap();
    assert!(!reverted.completed);
    assert_eq!(reverted.state.xp, 10);
    let view = engine.daily_plan(14).unwrap();
    assert!(!view.is_completed(&first));
    assert!(view.is_completed(&second));

    // Streak was never touched by any toggle.
    assert_eq!(engine.gamification().unwrap().state.streak, 0);
}

#[test]
fn test_plan_rotation_changes_with_the_calendar_day() {
    let engine = make_engine();
    let questionnaire = engine.questionnaire(AgeGroup::Age25To40).unwrap();
    let mut collector = ResponseCollector::new(&questionnaire);
    loop {
        collector.select_answer(0).unwrap();
        if !collector.advance() {
            break;
        }
    }
    engine
        .submit_assessment(AgeGroup::Age25To40, &collector.submit().unwrap())
        .unwrap();

    // Built-in catalogs rotate with period 2: odd and even days differ,
    // two days apart repeats.
    let day1 = engine.daily_plan(1).unwrap().plan;
    let day2 = engine.daily_plan(2).unwrap().plan;
    let day3 = engine.daily_plan(3).unwrap().plan;
    assert_ne!(day1.tasks, day2.tasks);
    assert_eq!(day1.tasks, day3.tasks);
}

#[test]
fn test_resubmission_replaces_report_and_extends_history() {
    let engine = make_engine();
    let questionnaire = engine.questionnaire(AgeGroup::Age18To25).unwrap();
    let total = questionnaire.total_questions();

    let best = wellspring_core::ResponseSet::from_scores(vec![4; total]);
    let worst = wellspring_core::ResponseSet::from_scores(vec![1; total]);

    engine.submit_assessment(AgeGroup::Age18To25, &worst).unwrap();
    engine.submit_assessment(AgeGroup::Age18To25, &best).unwrap();

    // The report is the latest; the log kept both.
    let report = engine.current_report().unwrap();
    assert_eq!(report.report.overall_percentage, 100.0);

    let points = engine.trend().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].percentage, 0.0);
    assert_eq!(points[1].percentage, 100.0);
    // The current report is the last submission, so no extra point.
    assert!(points.iter().all(|p| p.label != "Current"));
}

#[test]
fn test_validation_failure_leaves_no_trace() {
    let engine = make_engine();
    let short = wellspring_core::ResponseSet::from_scores(vec![4, 4, 4]);

    let err = engine
        .submit_assessment(AgeGroup::Age18To25, &short)
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::LengthMismatch { .. })
    ));

    assert!(engine.trend().unwrap().is_empty());
    assert!(matches!(
        engine.current_report(),
        Err(CoreError::NotFound { .. })
    ));
}

#[test]
fn test_program_journey_to_terminal_day() {
    let engine = make_engine();
    let program = engine.program();
    assert_eq!(program.len(), 21);

    let start = engine.program_state().unwrap();
    assert_eq!(start.day_index, 0);
    assert_eq!(start.streak, 1);
    assert_eq!(start.checked.len(), program.days[0].tasks.len());

    // Check three of five tasks on day one.
    engine.toggle_program_task(0).unwrap();
    engine.toggle_program_task(2).unwrap();
    let state = engine.toggle_program_task(4).unwrap();
    assert_eq!(state.checked_count(), 3);
    assert_eq!(state.progress_percent(), 60);

    // Advancing clears the checklist and grows the streak.
    let day_two = engine.advance_program_day().unwrap();
    assert_eq!(day_two.day_index, 1);
    assert_eq!(day_two.streak, 2);
    assert_eq!(day_two.checked_count(), 0);

    // Walk to the final day; one more advance is a no-op.
    let mut state = day_two;
    while !state.is_final_day(&program) {
        state = engine.advance_program_day().unwrap();
    }
    assert_eq!(state.day_index, 20);
    assert_eq!(state.streak, 21);

    let still = engine.advance_program_day().unwrap();
    assert_eq!(still, state);
    assert_eq!(engine.program_state().unwrap(), state);
}
