use crate::support::ExamHarness;
use exambase::config::{AppConfig, ExamType};
use exambase::error::ExamError;

fn capped_config(max: u32) -> AppConfig {
    let mut config = AppConfig::default();
    config.security.max_attempts_per_day = max;
    config
}

#[test]
fn starts_beyond_the_daily_cap_are_denied() {
    let harness = ExamHarness::new();
    let mut runner = harness.runner_with(capped_config(3), 20);
    assert_eq!(
        runner.remaining_attempts(ExamType::Micro).expect("remaining"),
        3
    );

    for expected_remaining in [2, 1, 0] {
        let mut session = runner.start(ExamType::Micro, None).expect("start exam");
        runner.abandon(&mut session);
        assert_eq!(
            runner.remaining_attempts(ExamType::Micro).expect("remaining"),
            expected_remaining
        );
    }

    match runner.start(ExamType::Micro, None) {
        Err(ExamError::AttemptLimitExceeded { exam_type }) => {
            assert_eq!(exam_type, ExamType::Micro);
        }
        Ok(_) => panic!("start admitted beyond the cap"),
        Err(other) => panic!("expected AttemptLimitExceeded, got {other:?}"),
    }

    // The cap is per exam type: macro attempts are still available.
    let mut session = runner.start(ExamType::Macro, None).expect("start exam");
    runner.abandon(&mut session);
}

#[test]
fn attempt_counts_survive_a_restart() {
    let harness = ExamHarness::new();
    {
        let mut runner = harness.runner_with(capped_config(2), 21);
        let mut session = runner.start(ExamType::Micro, None).expect("start exam");
        runner.abandon(&mut session);
        let mut session = runner.start(ExamType::Micro, None).expect("start exam");
        runner.abandon(&mut session);
    }

    // A new runner over the same data directory reads the persisted counts.
    let mut runner = harness.runner_with(capped_config(2), 22);
    assert_eq!(
        runner.remaining_attempts(ExamType::Micro).expect("remaining"),
        0
    );
    assert!(matches!(
        runner.start(ExamType::Micro, None),
        Err(ExamError::AttemptLimitExceeded { .. })
    ));
}

#[test]
fn denied_starts_do_not_consume_allowance() {
    let harness = ExamHarness::new();
    let mut runner = harness.runner_with(capped_config(1), 23);
    let mut session = runner.start(ExamType::Micro, None).expect("start exam");
    runner.abandon(&mut session);

    for _ in 0..3 {
        assert!(runner.start(ExamType::Micro, None).is_err());
    }
    let store = harness.open_store();
    let today = chrono::Local::now().date_naive();
    use exambase::storage::AttemptStore;
    assert_eq!(store.count(today, ExamType::Micro).expect("count"), 1);
}
