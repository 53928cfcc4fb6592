use crate::support::{arbitrary_answer, ExamHarness};
use exambase::config::{AppConfig, ExamType};
use exambase::security::ActivityKind;

fn short_exam_config(secs: u32) -> AppConfig {
    let mut config = AppConfig::default();
    config.micro_exam.time_limit_secs = secs;
    config
}

#[test]
fn expiry_finishes_the_exam_with_unanswered_questions_scored_incorrect() {
    let harness = ExamHarness::new();
    let mut runner = harness.runner_with(short_exam_config(3), 14);
    let mut session = runner.start(ExamType::Micro, None).expect("start exam");

    // Answer one question, leave the other nine open.
    let record = arbitrary_answer(&session, 0);
    runner.record_answer(&mut session, 0, record).expect("record");

    assert!(runner.tick(&mut session).expect("tick").is_none());
    assert!(runner.tick(&mut session).expect("tick").is_none());
    let result = runner
        .tick(&mut session)
        .expect("tick")
        .expect("expiry finishes the session");

    assert_eq!(result.time_spent_secs, 3);
    assert!(result.correct_answers <= 1);
    assert!(!session.is_active());
    for review in result.details.iter().skip(1) {
        assert!(review.user_answer.is_none());
        assert!(!review.is_correct);
    }

    // The timed-out attempt is history like any other.
    let history = harness.open_store().history().expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].result_id, result.result_id);
}

#[test]
fn pausing_freezes_the_countdown() {
    let harness = ExamHarness::new();
    let mut runner = harness.runner_with(short_exam_config(10), 15);
    let mut session = runner.start(ExamType::Micro, None).expect("start exam");

    runner.tick(&mut session).expect("tick");
    runner.tick(&mut session).expect("tick");
    assert_eq!(session.time_remaining_secs(), 8);

    runner.pause(&mut session).expect("pause");
    for _ in 0..5 {
        assert!(runner.tick(&mut session).expect("tick").is_none());
    }
    assert_eq!(session.time_remaining_secs(), 8);

    assert!(runner.resume(&mut session).expect("resume").is_none());
    runner.tick(&mut session).expect("tick");
    assert_eq!(session.time_remaining_secs(), 7);
}

#[test]
fn focus_loss_pauses_the_exam_when_configured() {
    let harness = ExamHarness::new();
    let mut runner = harness.runner_with(short_exam_config(10), 16);
    let mut session = runner.start(ExamType::Micro, None).expect("start exam");

    runner.report_activity(&mut session, ActivityKind::FocusLoss, "window blur");
    assert!(session.is_paused());
    assert!(runner.tick(&mut session).expect("tick").is_none());
    assert_eq!(session.time_remaining_secs(), 10);

    runner.resume(&mut session).expect("resume");
    assert!(!session.is_paused());
}

#[test]
fn ticks_after_the_exam_ends_are_inert() {
    let harness = ExamHarness::new();
    let mut runner = harness.runner_with(short_exam_config(1), 17);
    let mut session = runner.start(ExamType::Micro, None).expect("start exam");
    assert!(runner.tick(&mut session).expect("tick").is_some());
    for _ in 0..3 {
        assert!(runner.tick(&mut session).expect("tick").is_none());
    }
    let history = harness.open_store().history().expect("history");
    assert_eq!(history.len(), 1);
}
