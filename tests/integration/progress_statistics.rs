use crate::support::{complete_exam, ExamHarness};
use exambase::config::ExamType;

#[test]
fn topic_progress_accumulates_and_rolls_up_to_macro_topics() {
    let harness = ExamHarness::new();
    let mut runner = harness.runner(40);

    complete_exam(&mut runner, ExamType::Micro, Some("powers-of-rationals"));
    complete_exam(&mut runner, ExamType::Micro, Some("powers-of-rationals"));
    complete_exam(&mut runner, ExamType::Micro, Some("roots-of-rationals"));
    // No topic: contributes to history but not to topic progress.
    complete_exam(&mut runner, ExamType::Complete, None);

    let store = harness.open_store();
    let progress = store.topic_progress().expect("progress");
    assert_eq!(progress.len(), 2);
    let powers = &progress["powers-of-rationals"];
    assert_eq!(powers.attempts, 2);
    assert_eq!(powers.questions_seen, 20);
    let roots = &progress["roots-of-rationals"];
    assert_eq!(roots.attempts, 1);

    let summaries = store.macro_topic_summaries().expect("summaries");
    assert_eq!(summaries.len(), 1);
    let numbers = &summaries[0];
    assert_eq!(numbers.topic_id, "numbers-operations");
    assert_eq!(numbers.micro_topics_attempted, 2);
    assert_eq!(numbers.attempts, 3);
    assert_eq!(
        numbers.best_score,
        powers.best_score.max(roots.best_score)
    );
}

#[test]
fn statistics_aggregate_the_full_history() {
    let harness = ExamHarness::new();
    let mut runner = harness.runner(41);

    let results = [
        complete_exam(&mut runner, ExamType::Micro, Some("powers-of-rationals")),
        complete_exam(&mut runner, ExamType::Micro, Some("roots-of-rationals")),
        complete_exam(&mut runner, ExamType::Macro, None),
    ];

    let stats = harness.open_store().statistics().expect("statistics");
    assert_eq!(stats.total_exams, 3);
    assert_eq!(
        stats.passed,
        results.iter().filter(|r| r.passed).count()
    );
    assert_eq!(
        stats.best_score,
        results.iter().map(|r| r.score).max().unwrap()
    );
    let expected_average =
        results.iter().map(|r| f64::from(r.score)).sum::<f64>() / results.len() as f64;
    assert!((stats.average_score - expected_average).abs() < 1e-9);

    let micro = &stats.by_type[&ExamType::Micro];
    assert_eq!(micro.attempts, 2);
    let macro_slice = &stats.by_type[&ExamType::Macro];
    assert_eq!(macro_slice.attempts, 1);
}

#[test]
fn an_empty_store_reads_as_empty_everything() {
    let harness = ExamHarness::new();
    let store = harness.open_store();
    assert!(store.history().expect("history").is_empty());
    assert!(store.topic_progress().expect("progress").is_empty());
    assert!(store.macro_topic_summaries().expect("summaries").is_empty());
    let stats = store.statistics().expect("statistics");
    assert_eq!(stats.total_exams, 0);
    assert_eq!(stats.pass_rate(), 0.0);
}
