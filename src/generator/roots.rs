//! Template set for the "roots-of-rationals" topic.

use super::mathtext::{frac, radical_steps, radical_string, ratio};
use super::{choice_question, numeric_question, pick, roll_until_valid, Template};
use crate::models::{Difficulty, Question};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::Rng;

pub(crate) static TEMPLATES: &[Template] = &[
    square_root_fraction,
    cube_root_fraction,
    rationalization,
    radical_simplification,
    like_radical_sum,
    radical_product,
    radical_equation,
    radical_comparison,
    radical_word_problem,
    nth_root,
];

/// √(a/b) over perfect squares.
fn square_root_fraction(rng: &mut StdRng, points: u32) -> Result<Question> {
    const SQUARES: &[i64] = &[4, 9, 16, 25, 36, 49, 64, 81, 100];
    roll_until_valid(rng, |rng| {
        let num = *pick(rng, SQUARES);
        let den = *pick(rng, SQUARES);
        if num == den {
            anyhow::bail!("trivial radicand {num}/{den}");
        }
        let res_num = (num as f64).sqrt() as i64;
        let res_den = (den as f64).sqrt() as i64;
        choice_question(
            rng,
            Difficulty::Basic,
            format!("Compute: $\\sqrt{{\\frac{{{num}}}{{{den}}}}}$"),
            ratio(res_num, res_den),
            [
                ratio(res_num + 1, res_den),
                ratio(res_num, res_den + 1),
                ratio(num, den),
            ],
            format!(
                "The root of a fraction is the fraction of the roots: \
                 $\\sqrt{{\\frac{{{num}}}{{{den}}}}} = \
                 \\frac{{\\sqrt{{{num}}}}}{{\\sqrt{{{den}}}}} = {}$",
                frac(res_num, res_den)
            ),
            points,
        )
    })
}

/// ³√(a/b) over perfect cubes.
fn cube_root_fraction(rng: &mut StdRng, points: u32) -> Result<Question> {
    const CUBES: &[(i64, i64)] = &[(8, 2), (27, 3), (64, 4), (125, 5), (216, 6)];
    roll_until_valid(rng, |rng| {
        let (num, res_num) = *pick(rng, CUBES);
        let (den, res_den) = *pick(rng, CUBES);
        if num == den {
            anyhow::bail!("trivial radicand {num}/{den}");
        }
        choice_question(
            rng,
            Difficulty::Intermediate,
            format!("Compute: $\\sqrt[3]{{\\frac{{{num}}}{{{den}}}}}$"),
            ratio(res_num, res_den),
            [
                ratio(res_num + 1, res_den),
                ratio(res_num, res_den + 1),
                ratio(num, den),
            ],
            format!(
                "$\\sqrt[3]{{\\frac{{{num}}}{{{den}}}}} = \
                 \\frac{{\\sqrt[3]{{{num}}}}}{{\\sqrt[3]{{{den}}}}} = {}$",
                frac(res_num, res_den)
            ),
            points,
        )
    })
}

/// Remove the radical from the denominator of 1/√d.
fn rationalization(rng: &mut StdRng, points: u32) -> Result<Question> {
    const DENOMINATORS: &[i64] = &[2, 3, 5, 6, 7];
    let den = *pick(rng, DENOMINATORS);
    choice_question(
        rng,
        Difficulty::Intermediate,
        format!("Rationalize: $\\frac{{1}}{{\\sqrt{{{den}}}}}$"),
        format!("√{den}/{den}"),
        [
            format!("1/√{den}"),
            format!("√{den}"),
            format!("{den}/√{den}"),
        ],
        format!(
            "Multiply numerator and denominator by $\\sqrt{{{den}}}$: \
             $\\frac{{1}}{{\\sqrt{{{den}}}}} \\times \
             \\frac{{\\sqrt{{{den}}}}}{{\\sqrt{{{den}}}}} = \
             \\frac{{\\sqrt{{{den}}}}}{{{den}}}$"
        ),
        points,
    )
}

/// Pull perfect-square factors out of a radical.
fn radical_simplification(rng: &mut StdRng, points: u32) -> Result<Question> {
    const RADICANDS: &[i64] = &[12, 18, 20, 24, 28, 32, 45, 50, 72, 98];
    let radicand = *pick(rng, RADICANDS);
    let simplified = radical_string(radicand);
    let (factor, remaining) = super::mathtext::simplify_radical(radicand);
    choice_question(
        rng,
        Difficulty::Intermediate,
        format!("Simplify: $\\sqrt{{{radicand}}}$"),
        simplified,
        [
            format!("√{radicand}"),
            format!("{}√{remaining}", factor + 1),
            format!("{factor}√{}", remaining + 1),
        ],
        format!("Look for perfect-square factors: {}", radical_steps(radicand)),
        points,
    )
}

/// Adding like radicals adds their coefficients.
fn like_radical_sum(rng: &mut StdRng, points: u32) -> Result<Question> {
    const RADICANDS: &[i64] = &[2, 3, 5, 6, 7, 10];
    roll_until_valid(rng, |rng| {
        let coeff1 = rng.gen_range(1..=4_i64);
        let coeff2 = rng.gen_range(1..=4_i64);
        let radicand = *pick(rng, RADICANDS);
        let sum = coeff1 + coeff2;
        choice_question(
            rng,
            Difficulty::Basic,
            format!("Compute: ${coeff1}\\sqrt{{{radicand}}} + {coeff2}\\sqrt{{{radicand}}}$"),
            format!("{sum}√{radicand}"),
            [
                format!("{}√{radicand}", coeff1 * coeff2),
                format!("{coeff1}√{}", radicand * coeff2),
                format!("√{}", sum * radicand),
            ],
            format!(
                "Like radicals add by their coefficients: \
                 $({coeff1} + {coeff2})\\sqrt{{{radicand}}} = {sum}\\sqrt{{{radicand}}}$"
            ),
            points,
        )
    })
}

/// √a × √b = √(ab), reduced when the product is a perfect square.
fn radical_product(rng: &mut StdRng, points: u32) -> Result<Question> {
    roll_until_valid(rng, |rng| {
        let a = rng.gen_range(2..=6_i64);
        let b = rng.gen_range(2..=6_i64);
        let product = a * b;
        let root = (product as f64).sqrt();
        let exact = root.fract() == 0.0;
        let correct = if exact {
            (root as i64).to_string()
        } else {
            format!("√{product}")
        };
        choice_question(
            rng,
            Difficulty::Intermediate,
            format!("Compute: $\\sqrt{{{a}}} \\times \\sqrt{{{b}}}$"),
            correct.clone(),
            [
                format!("√{a} + √{b}"),
                format!("√{}", a + b),
                (root.floor() as i64 + 1).to_string(),
            ],
            format!(
                "Apply $\\sqrt{{a}} \\times \\sqrt{{b}} = \\sqrt{{ab}}$: \
                 $\\sqrt{{{a}}} \\times \\sqrt{{{b}}} = \\sqrt{{{product}}}{}$",
                if exact {
                    format!(" = {correct}")
                } else {
                    String::new()
                }
            ),
            points,
        )
    })
}

/// Solve √(x + c) = k by squaring both sides.
fn radical_equation(rng: &mut StdRng, points: u32) -> Result<Question> {
    roll_until_valid(rng, |rng| {
        let k = rng.gen_range(2..=8_i64);
        let c = rng.gen_range(1..=5_i64);
        let x = k * k - c;
        if x < 1 {
            anyhow::bail!("no positive solution for k={k}, c={c}");
        }
        choice_question(
            rng,
            Difficulty::Advanced,
            format!("Solve for $x$: $\\sqrt{{x + {c}}} = {k}$"),
            x.to_string(),
            [
                (x + 1).to_string(),
                (x - 1).to_string(),
                (x + 2).to_string(),
            ],
            format!(
                "Square both sides: $x + {c} = {kk}$, so $x = {kk} - {c} = {x}$. \
                 Check: $\\sqrt{{{x} + {c}}} = \\sqrt{{{kk}}} = {k}$",
                kk = k * k
            ),
            points,
        )
    })
}

/// Compare two radical expressions by approximate value.
fn radical_comparison(rng: &mut StdRng, points: u32) -> Result<Question> {
    const VALUES: &[(&str, f64)] = &[
        ("√4", 2.0),
        ("√9", 3.0),
        ("√16", 4.0),
        ("2√2", 2.828_427),
        ("3√3", 5.196_152),
    ];
    let (expr1, value1) = *pick(rng, VALUES);
    let (expr2, value2) = *pick(rng, VALUES);
    let relation = if value1 > value2 {
        ">"
    } else if value1 < value2 {
        "<"
    } else {
        "="
    };
    let side = |rel: &str| format!("${expr1} {rel} {expr2}$");
    let correct = side(relation);
    let mut wrong: Vec<String> = [">", "<", "="]
        .iter()
        .filter(|rel| **rel != relation)
        .map(|rel| side(rel))
        .collect();
    wrong.push("Cannot be determined".into());
    let distractors = [wrong.remove(0), wrong.remove(0), wrong.remove(0)];
    choice_question(
        rng,
        Difficulty::Advanced,
        format!("Compare: ${expr1}$ and ${expr2}$"),
        correct.clone(),
        distractors,
        format!(
            "Estimate each value: ${expr1} \\approx {value1:.3}$ and \
             ${expr2} \\approx {value2:.3}$, therefore {correct}"
        ),
        points,
    )
}

struct AreaScenario {
    context: &'static str,
    question: &'static str,
    measure: i64,
    answer: i64,
}

/// Side-length recovery word problems.
fn radical_word_problem(rng: &mut StdRng, points: u32) -> Result<Question> {
    const SCENARIOS: &[AreaScenario] = &[
        AreaScenario {
            context: "A square plot has an area of",
            question: "square meters. How long is one side, in meters?",
            measure: 25,
            answer: 5,
        },
        AreaScenario {
            context: "A square window has an area of",
            question: "square decimeters. How long is one side, in decimeters?",
            measure: 49,
            answer: 7,
        },
        AreaScenario {
            context: "A square courtyard has an area of",
            question: "square meters. How long is one side, in meters?",
            measure: 81,
            answer: 9,
        },
    ];
    let scenario = pick(rng, SCENARIOS);
    let answer = scenario.answer;
    choice_question(
        rng,
        Difficulty::Advanced,
        format!(
            "{} {} {}",
            scenario.context, scenario.measure, scenario.question
        ),
        answer.to_string(),
        [
            (answer + 1).to_string(),
            (answer - 1).to_string(),
            (answer * 2).to_string(),
        ],
        format!(
            "The side of a square is the square root of its area: \
             $\\sqrt{{{}}} = {answer}$",
            scenario.measure
        ),
        points,
    )
}

/// n-th root of a perfect power, answered as a typed number.
fn nth_root(rng: &mut StdRng, points: u32) -> Result<Question> {
    const ROOTS: &[(i64, u32, i64)] = &[
        (8, 3, 2),
        (27, 3, 3),
        (64, 3, 4),
        (125, 3, 5),
        (16, 4, 2),
        (81, 4, 3),
        (32, 5, 2),
        (243, 5, 3),
    ];
    let (base, index, result) = *pick(rng, ROOTS);
    Ok(numeric_question(
        Difficulty::Advanced,
        format!("Compute: $\\sqrt[{index}]{{{base}}}$. Enter your answer as a number."),
        result.to_string(),
        format!(
            "$\\sqrt[{index}]{{{base}}} = {base}^{{1/{index}}} = {result}$ \
             (check: ${result}^{{{index}}} = {base}$)"
        ),
        points,
    ))
}
