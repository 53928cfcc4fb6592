use crate::support::{arbitrary_answer, ExamHarness};
use exambase::config::ExamType;
use exambase::error::ExamError;
use exambase::session::AdvanceOutcome;

#[test]
fn forward_navigation_is_blocked_until_the_current_question_is_answered() {
    let harness = ExamHarness::new();
    let mut runner = harness.runner(8);
    let mut session = runner.start(ExamType::Micro, None).expect("start exam");

    for expected_index in 0..10 {
        assert_eq!(session.current_index(), expected_index);
        match runner.advance(&mut session) {
            Err(ExamError::AnswerRequired { index }) => assert_eq!(index, expected_index),
            other => panic!("expected AnswerRequired, got {other:?}"),
        }
        let record = arbitrary_answer(&session, expected_index);
        runner
            .record_answer(&mut session, expected_index, record)
            .expect("record");
        match runner.advance(&mut session).expect("advance") {
            AdvanceOutcome::Moved(next) => assert_eq!(next, expected_index + 1),
            AdvanceOutcome::Finished(result) => {
                assert_eq!(expected_index, 9);
                assert_eq!(result.total_questions, 10);
                assert!(!session.is_active());
                return;
            }
        }
    }
    panic!("session never finished");
}

#[test]
fn backward_navigation_preserves_recorded_answers() {
    let harness = ExamHarness::new();
    let mut runner = harness.runner(9);
    let mut session = runner.start(ExamType::Micro, None).expect("start exam");

    // Retreating on the first question goes nowhere.
    assert_eq!(runner.retreat(&mut session).expect("retreat"), 0);

    let record = arbitrary_answer(&session, 0);
    let recorded_value = record.value.clone();
    runner.record_answer(&mut session, 0, record).expect("record");
    runner.advance(&mut session).expect("advance");
    assert_eq!(session.current_index(), 1);

    // Going back never demands an answer for the current question.
    assert_eq!(runner.retreat(&mut session).expect("retreat"), 0);
    assert_eq!(
        session.answer_for(0).expect("answer kept").value,
        recorded_value
    );
    assert_eq!(session.answered_count(), 1);
}

#[test]
fn navigation_stops_once_the_session_is_over() {
    let harness = ExamHarness::new();
    let mut runner = harness.runner(10);
    let mut session = runner.start(ExamType::Micro, None).expect("start exam");
    runner.abandon(&mut session);

    assert!(matches!(
        runner.advance(&mut session),
        Err(ExamError::SessionInactive)
    ));
    assert!(matches!(
        runner.retreat(&mut session),
        Err(ExamError::SessionInactive)
    ));
}
