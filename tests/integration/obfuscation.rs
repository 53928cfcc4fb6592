use crate::support::{arbitrary_answer, ExamHarness};
use exambase::config::ExamType;
use exambase::models::QuestionKind;
use exambase::security::ActivityKind;

#[test]
fn handed_out_questions_carry_tokens_not_answers() {
    let harness = ExamHarness::new();
    let mut runner = harness.runner(60);
    let session = runner
        .start(ExamType::Micro, Some("powers-of-rationals"))
        .expect("start exam");

    for question in session.questions() {
        assert!(question
            .correct_answer
            .chars()
            .all(|c| c.is_ascii_hexdigit()));
        assert!(question.explanation.chars().all(|c| c.is_ascii_hexdigit()));
        if let Some(options) = &question.options {
            // The token never leaks into the visible options.
            assert!(!options.contains(&question.correct_answer));
        }
    }
}

#[test]
fn identical_questions_get_fresh_tokens_per_session() {
    let harness = ExamHarness::new();
    let mut first_runner = harness.runner(61);
    let first = first_runner
        .start(ExamType::Micro, Some("roots-of-rationals"))
        .expect("start exam");

    let mut second_runner = harness.runner(61);
    let second = second_runner
        .start(ExamType::Micro, Some("roots-of-rationals"))
        .expect("start exam");

    for (a, b) in first.questions().iter().zip(second.questions()) {
        // Same seed, same question; different session key, different token.
        assert_eq!(a.prompt, b.prompt);
        assert_ne!(a.correct_answer, b.correct_answer);
    }
}

#[test]
fn finish_decodes_every_review_row() {
    let harness = ExamHarness::new();
    let mut runner = harness.runner(62);
    let mut session = runner.start(ExamType::Micro, None).expect("start exam");
    let options_by_prompt: Vec<(String, Option<Vec<String>>, QuestionKind)> = session
        .questions()
        .iter()
        .map(|q| (q.prompt.clone(), q.options.clone(), q.kind))
        .collect();
    for index in 0..session.questions().len() {
        let record = arbitrary_answer(&session, index);
        runner
            .record_answer(&mut session, index, record)
            .expect("record");
    }
    let result = runner.finish(&mut session).expect("finish");

    for (review, (prompt, options, kind)) in result.details.iter().zip(&options_by_prompt) {
        assert_eq!(&review.prompt, prompt);
        let correct = review.correct_answer.as_ref().expect("decoded");
        let explanation = review.explanation.as_ref().expect("decoded");
        assert!(!explanation.is_empty());
        match kind {
            QuestionKind::MultipleChoice => {
                assert!(options.as_ref().expect("options").contains(correct));
            }
            QuestionKind::Numeric => {
                assert!(correct.parse::<f64>().is_ok());
            }
        }
    }
}

#[test]
fn suspicious_activity_is_counted_and_persisted() {
    let harness = ExamHarness::new();
    let mut runner = harness.runner(63);
    let mut session = runner.start(ExamType::Micro, None).expect("start exam");

    runner.report_activity(&mut session, ActivityKind::TabSwitch, "visibilitychange");
    runner.report_activity(&mut session, ActivityKind::BlockedShortcut, "Ctrl+C");
    runner.report_activity(&mut session, ActivityKind::ContextMenu, "contextmenu");
    assert_eq!(runner.security_event_count(), 3);

    let record = arbitrary_answer(&session, 0);
    runner.record_answer(&mut session, 0, record).expect("record");
    let result = runner.finish(&mut session).expect("finish");
    assert_eq!(result.security_events, 3);

    let events = harness.open_store().security_events().expect("events");
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].kind, ActivityKind::TabSwitch);
    assert_eq!(events[0].detail, "visibilitychange");
}

#[test]
fn the_persisted_activity_log_grows_across_attempts() {
    let harness = ExamHarness::new();
    let mut runner = harness.runner(64);

    let mut session = runner.start(ExamType::Micro, None).expect("start exam");
    runner.report_activity(&mut session, ActivityKind::FocusLoss, "blur");
    runner.abandon(&mut session);

    let mut session = runner.start(ExamType::Micro, None).expect("start exam");
    runner.report_activity(&mut session, ActivityKind::ClipboardAccess, "copy");
    runner.abandon(&mut session);

    let events = harness.open_store().security_events().expect("events");
    assert_eq!(events.len(), 2);
}
