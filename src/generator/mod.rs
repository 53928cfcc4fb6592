//! Procedural question generator.
//!
//! Each seeded topic owns a set of parameterized templates. Generation picks
//! a template at random, instantiates it with fresh parameters, and rejects
//! the instance if its prompt duplicates one already accepted for the batch.
//! Distractors are computed analytically from the same parameters; templates
//! re-roll their own parameters if a combination would make the options
//! degenerate. A failing template is replaced by a trivial fallback question
//! so the caller is always handed exactly `count` questions.

pub mod mathtext;
mod powers;
mod roots;

use crate::catalog::DEFAULT_TOPIC;
use crate::models::{Difficulty, Question, QuestionKind};
use anyhow::{ensure, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use uuid::Uuid;

/// A parameterized question recipe. Instantiation may fail for an invalid
/// parameter combination; the generator recovers with a fallback question.
pub(crate) type Template = fn(&mut StdRng, u32) -> Result<Question>;

fn templates_for(topic_id: &str) -> &'static [Template] {
    match topic_id {
        "powers-of-rationals" => powers::TEMPLATES,
        "roots-of-rationals" => roots::TEMPLATES,
        // Unknown topics fall back to the default topic's template set.
        _ => templates_for(DEFAULT_TOPIC),
    }
}

/// Stateless-per-call question factory with an injectable randomness source.
pub struct QuestionGenerator {
    rng: StdRng,
    points_per_question: u32,
}

impl QuestionGenerator {
    pub fn new(points_per_question: u32) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            points_per_question,
        }
    }

    /// Deterministic generator for tests and reproducible drills.
    pub fn with_seed(seed: u64, points_per_question: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            points_per_question,
        }
    }

    /// Produces exactly `count` questions for `topic_id`, pairwise distinct
    /// by prompt text. Never fails: template errors are absorbed by
    /// substituting a fallback question.
    pub fn generate(&mut self, topic_id: &str, count: usize) -> Vec<Question> {
        let templates = templates_for(topic_id);
        let mut questions = Vec::with_capacity(count);
        let mut seen_prompts: HashSet<[u8; 32]> = HashSet::new();
        // Rejection sampling bails out once duplicates dominate, so a count
        // above the template set's practical capacity still terminates.
        let mut budget = count.saturating_mul(50).max(200);

        while questions.len() < count {
            if budget == 0 {
                questions.push(self.fallback_question(questions.len()));
                continue;
            }
            budget -= 1;

            let instance = match templates.choose(&mut self.rng) {
                Some(template) => template(&mut self.rng, self.points_per_question),
                None => Ok(self.fallback_question(questions.len())),
            };
            match instance {
                Ok(question) => {
                    if seen_prompts.insert(prompt_fingerprint(&question.prompt)) {
                        questions.push(question);
                    }
                }
                Err(err) => {
                    log::debug!("question template failed, substituting fallback: {err:#}");
                    questions.push(self.fallback_question(questions.len()));
                }
            }
        }
        questions
    }

    /// Trivial question used when a template fails or the topic's variety is
    /// exhausted. The ordinal keeps prompts distinct within a batch.
    fn fallback_question(&mut self, ordinal: usize) -> Question {
        let correct = "2".to_string();
        let mut options = vec!["1".into(), correct.clone(), "3".into(), "4".into()];
        options.shuffle(&mut self.rng);
        Question {
            id: Uuid::new_v4(),
            kind: QuestionKind::MultipleChoice,
            difficulty: Difficulty::Basic,
            prompt: format!("Practice question {}: compute $1 + 1$", ordinal + 1),
            options: Some(options),
            correct_answer: correct,
            explanation: "1 + 1 = 2".into(),
            points: self.points_per_question,
        }
    }
}

fn prompt_fingerprint(prompt: &str) -> [u8; 32] {
    Sha256::digest(prompt.as_bytes()).into()
}

/// Assembles a multiple-choice question, shuffling the correct answer into a
/// uniformly random slot among the four options. Fails if the distractors
/// are not pairwise distinct from each other and the correct answer; the
/// calling template treats that as a degenerate roll and retries.
pub(crate) fn choice_question(
    rng: &mut StdRng,
    difficulty: Difficulty,
    prompt: String,
    correct: String,
    distractors: [String; 3],
    explanation: String,
    points: u32,
) -> Result<Question> {
    let mut options = vec![correct.clone()];
    options.extend(distractors);
    let distinct = options
        .iter()
        .collect::<HashSet<_>>()
        .len();
    ensure!(distinct == 4, "degenerate option set for prompt {prompt:?}");
    options.shuffle(rng);
    Ok(Question {
        id: Uuid::new_v4(),
        kind: QuestionKind::MultipleChoice,
        difficulty,
        prompt,
        options: Some(options),
        correct_answer: correct,
        explanation,
        points,
    })
}

/// Assembles a numeric-input question.
pub(crate) fn numeric_question(
    difficulty: Difficulty,
    prompt: String,
    answer: String,
    explanation: String,
    points: u32,
) -> Question {
    Question {
        id: Uuid::new_v4(),
        kind: QuestionKind::Numeric,
        difficulty,
        prompt,
        options: None,
        correct_answer: answer,
        explanation,
        points,
    }
}

/// Retries `template` with fresh parameters until the option set is
/// non-degenerate. Parameter spaces are small, so a handful of rolls always
/// suffices; the cap turns a broken template into an error the generator
/// absorbs with a fallback question instead of a livelock.
pub(crate) fn roll_until_valid(
    rng: &mut StdRng,
    mut attempt: impl FnMut(&mut StdRng) -> Result<Question>,
) -> Result<Question> {
    let mut last_err = None;
    for _ in 0..32 {
        match attempt(rng) {
            Ok(question) => return Ok(question),
            Err(err) => last_err = Some(err),
        }
    }
    Err(last_err.unwrap_or_else(|| anyhow::anyhow!("template produced no instance")))
}

/// Draws a random element from a non-empty slice.
pub(crate) fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
