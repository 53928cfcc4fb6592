//! Template set for the "powers-of-rationals" topic.

use super::mathtext::{decimal_string, frac, frac_pow, gcd, ipow, ratio};
use super::{choice_question, numeric_question, pick, roll_until_valid, Template};
use crate::models::{Difficulty, Question};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::Rng;

pub(crate) static TEMPLATES: &[Template] = &[
    basic_fraction_power,
    negative_exponent,
    zero_exponent,
    product_same_base,
    decimal_base,
    comparison,
    word_problem,
    simplification,
    power_of_power,
    rational_exponent,
];

/// (a/b)^n computed by raising numerator and denominator.
fn basic_fraction_power(rng: &mut StdRng, points: u32) -> Result<Question> {
    roll_until_valid(rng, |rng| {
        let num = rng.gen_range(1..=5_i64);
        let den = rng.gen_range(2..=6_i64);
        let exp = rng.gen_range(2..=5_u32);
        let res_num = ipow(num, exp);
        let res_den = ipow(den, exp);
        choice_question(
            rng,
            Difficulty::Basic,
            format!("Compute: ${}$", frac_pow(num, den, exp)),
            ratio(res_num, res_den),
            [
                ratio(res_num + 1, res_den),
                ratio(res_num, res_den + 1),
                ratio(ipow(num + 1, exp), res_den),
            ],
            format!(
                "Raising a fraction to a power raises numerator and denominator alike: \
                 ${} = \\frac{{{num}^{{{exp}}}}}{{{den}^{{{exp}}}}} = {}$",
                frac_pow(num, den, exp),
                frac(res_num, res_den)
            ),
            points,
        )
    })
}

/// (a/b)^(-n): invert the fraction and flip the exponent's sign.
fn negative_exponent(rng: &mut StdRng, points: u32) -> Result<Question> {
    roll_until_valid(rng, |rng| {
        let num = rng.gen_range(1..=4_i64);
        let den = rng.gen_range(2..=5_i64);
        let exp = rng.gen_range(2..=4_u32);
        let res_num = ipow(den, exp);
        let res_den = ipow(num, exp);
        choice_question(
            rng,
            Difficulty::Intermediate,
            format!("Compute: ${}$", frac_pow(num, den, format!("-{exp}"))),
            ratio(res_num, res_den),
            [
                ratio(res_den, res_num),
                ratio(num, den),
                ratio(ipow(den, exp - 1), ipow(num, exp - 1)),
            ],
            format!(
                "A negative exponent inverts the base: ${} = {} = \
                 \\frac{{{den}^{{{exp}}}}}{{{num}^{{{exp}}}}} = {}$",
                frac_pow(num, den, format!("-{exp}")),
                frac_pow(den, num, exp),
                frac(res_num, res_den)
            ),
            points,
        )
    })
}

/// Any nonzero base to the power zero.
fn zero_exponent(rng: &mut StdRng, points: u32) -> Result<Question> {
    roll_until_valid(rng, |rng| {
        let num = rng.gen_range(1..=9_i64);
        let mut den = rng.gen_range(1..=9_i64);
        while den == num {
            den = rng.gen_range(1..=9_i64);
        }
        choice_question(
            rng,
            Difficulty::Basic,
            format!("Compute: ${}$", frac_pow(num, den, 0)),
            "1".into(),
            ["0".into(), ratio(num, den), (num + den).to_string()],
            format!(
                "Any nonzero number raised to the power 0 equals 1: ${} = 1$",
                frac_pow(num, den, 0)
            ),
            points,
        )
    })
}

/// Product of powers with the same base: exponents add.
fn product_same_base(rng: &mut StdRng, points: u32) -> Result<Question> {
    roll_until_valid(rng, |rng| {
        let num = rng.gen_range(1..=3_i64);
        let den = rng.gen_range(2..=4_i64);
        let exp1 = rng.gen_range(1..=3_u32);
        let exp2 = rng.gen_range(1..=3_u32);
        let total = exp1 + exp2;
        let res_num = ipow(num, total);
        let res_den = ipow(den, total);
        choice_question(
            rng,
            Difficulty::Intermediate,
            format!(
                "Compute: ${} \\times {}$",
                frac_pow(num, den, exp1),
                frac_pow(num, den, exp2)
            ),
            ratio(res_num, res_den),
            [
                ratio(ipow(num, exp1), ipow(den, exp1)),
                ratio(ipow(num, exp2), ipow(den, exp2)),
                ratio(res_num + 1, res_den),
            ],
            format!(
                "Multiplying powers with the same base adds the exponents: \
                 ${} \\times {} = {} = {}$",
                frac_pow(num, den, exp1),
                frac_pow(num, den, exp2),
                frac_pow(num, den, format!("{exp1}+{exp2}")),
                frac(res_num, res_den)
            ),
            points,
        )
    })
}

/// Power of a decimal base, answered as a typed number. Exact decimal
/// arithmetic over tenths keeps the canonical answer free of float noise.
fn decimal_base(rng: &mut StdRng, points: u32) -> Result<Question> {
    let tenths = rng.gen_range(2..=9_i64);
    let exp = rng.gen_range(2..=3_u32);
    let base = decimal_string(tenths, 1);
    let result = decimal_string(ipow(tenths, exp), exp);
    let factors = vec![base.clone(); exp as usize].join(" \\times ");
    Ok(numeric_question(
        Difficulty::Intermediate,
        format!("Compute: $({base})^{{{exp}}}$. Enter your answer as a decimal."),
        result.clone(),
        format!("$({base})^{{{exp}}} = {factors} = {result}$"),
        points,
    ))
}

/// Compare two fractions raised to the same exponent.
fn comparison(rng: &mut StdRng, points: u32) -> Result<Question> {
    const FRACTIONS: &[(i64, i64)] = &[(1, 2), (1, 3), (2, 3), (1, 4), (3, 4)];
    let (num1, den1) = *pick(rng, FRACTIONS);
    let (num2, den2) = *pick(rng, FRACTIONS);
    let exp = rng.gen_range(2..=4_u32);

    // Exact comparison via cross-multiplication of the raised terms.
    let lhs = ipow(num1, exp) * ipow(den2, exp);
    let rhs = ipow(num2, exp) * ipow(den1, exp);
    let relation = match lhs.cmp(&rhs) {
        std::cmp::Ordering::Greater => ">",
        std::cmp::Ordering::Less => "<",
        std::cmp::Ordering::Equal => "=",
    };

    let side = |rel: &str| {
        format!(
            "${} {rel} {}$",
            frac_pow(num1, den1, exp),
            frac_pow(num2, den2, exp)
        )
    };
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
        format!(
            "Compare: ${}$ and ${}$",
            frac_pow(num1, den1, exp),
            frac_pow(num2, den2, exp)
        ),
        correct.clone(),
        distractors,
        format!(
            "Raise each fraction: ${} = {}$ and ${} = {}$, therefore {correct}",
            frac_pow(num1, den1, exp),
            frac(ipow(num1, exp), ipow(den1, exp)),
            frac_pow(num2, den2, exp),
            frac(ipow(num2, exp), ipow(den2, exp)),
        ),
        points,
    )
}

struct GrowthScenario {
    context: &'static str,
    question: &'static str,
    base: (i64, i64),
    exponent: u32,
}

/// Repeated-multiplication word problems.
fn word_problem(rng: &mut StdRng, points: u32) -> Result<Question> {
    const SCENARIOS: &[GrowthScenario] = &[
        GrowthScenario {
            context: "A culture shrinks to $\\frac{1}{4}$ of its size every hour",
            question: "What fraction of the original size remains after 3 hours?",
            base: (1, 4),
            exponent: 3,
        },
        GrowthScenario {
            context: "A sheet of paper keeps $\\frac{2}{3}$ of its thickness with every pressing",
            question: "What fraction of the thickness remains after 2 pressings?",
            base: (2, 3),
            exponent: 2,
        },
    ];
    let scenario = pick(rng, SCENARIOS);
    let (num, den) = scenario.base;
    let exp = scenario.exponent;
    let res_num = ipow(num, exp);
    let res_den = ipow(den, exp);
    choice_question(
        rng,
        Difficulty::Advanced,
        format!("{}. {}", scenario.context, scenario.question),
        ratio(res_num, res_den),
        [
            ratio(num * exp as i64, den),
            ratio(num, den * exp as i64),
            ratio(num + exp as i64, den + exp as i64),
        ],
        format!(
            "Each step multiplies by the same fraction, so after {exp} steps: \
             ${} = {}$",
            frac_pow(num, den, exp),
            frac(res_num, res_den)
        ),
        points,
    )
}

/// Compute a fraction power and reduce it to lowest terms.
fn simplification(rng: &mut StdRng, points: u32) -> Result<Question> {
    roll_until_valid(rng, |rng| {
        let num = rng.gen_range(2..=6_i64);
        let den = rng.gen_range(2..=6_i64);
        // A shared factor guarantees the reduced form differs from the raw
        // power; equal base terms would collapse to 1.
        if num == den || gcd(num, den) == 1 {
            anyhow::bail!("base {num}/{den} does not reduce");
        }
        let exp = rng.gen_range(2..=4_u32);
        let raw_num = ipow(num, exp);
        let raw_den = ipow(den, exp);
        let divisor = gcd(raw_num, raw_den);
        let simple_num = raw_num / divisor;
        let simple_den = raw_den / divisor;
        choice_question(
            rng,
            Difficulty::Intermediate,
            format!("Compute and simplify: ${}$", frac_pow(num, den, exp)),
            ratio(simple_num, simple_den),
            [
                ratio(raw_num, raw_den),
                ratio(num, den),
                ratio(simple_num + 1, simple_den),
            ],
            format!(
                "First raise, then reduce: ${} = {}$; dividing by \
                 gcd({raw_num}, {raw_den}) = {divisor} gives ${}$",
                frac_pow(num, den, exp),
                frac(raw_num, raw_den),
                frac(simple_num, simple_den)
            ),
            points,
        )
    })
}

/// Power of a power: exponents multiply.
fn power_of_power(rng: &mut StdRng, points: u32) -> Result<Question> {
    roll_until_valid(rng, |rng| {
        let num = rng.gen_range(1..=3_i64);
        let den = rng.gen_range(2..=4_i64);
        let exp1 = rng.gen_range(2..=3_u32);
        let exp2 = rng.gen_range(2..=3_u32);
        let total = exp1 * exp2;
        choice_question(
            rng,
            Difficulty::Advanced,
            format!(
                "Compute: $\\left[{}\\right]^{{{exp2}}}$",
                frac_pow(num, den, exp1)
            ),
            ratio(ipow(num, total), ipow(den, total)),
            [
                ratio(ipow(num, exp1), ipow(den, exp1)),
                ratio(ipow(num, exp2), ipow(den, exp2)),
                ratio(ipow(num, exp1 + exp2), ipow(den, exp1 + exp2)),
            ],
            format!(
                "Raising a power to a power multiplies the exponents: \
                 $\\left[{}\\right]^{{{exp2}}} = {} = {}$",
                frac_pow(num, den, exp1),
                frac_pow(num, den, format!("{exp1} \\times {exp2}")),
                frac(ipow(num, total), ipow(den, total))
            ),
            points,
        )
    })
}

/// A fractional exponent 1/n is the n-th root.
fn rational_exponent(rng: &mut StdRng, points: u32) -> Result<Question> {
    // (base, root index, exact result)
    const ROOTS: &[(i64, u32, i64)] = &[
        (4, 2, 2),
        (9, 2, 3),
        (16, 2, 4),
        (25, 2, 5),
        (8, 3, 2),
        (27, 3, 3),
        (64, 3, 4),
        (16, 4, 2),
        (81, 4, 3),
        (32, 5, 2),
    ];
    let (base, root, result) = *pick(rng, ROOTS);
    choice_question(
        rng,
        Difficulty::Advanced,
        format!("Compute: ${base}^{{\\frac{{1}}{{{root}}}}}$"),
        result.to_string(),
        [
            (result - 1).to_string(),
            (result + 1).to_string(),
            (result + 2).to_string(),
        ],
        format!(
            "A fractional exponent $\\frac{{1}}{{n}}$ is the n-th root: \
             ${base}^{{\\frac{{1}}{{{root}}}}} = \\sqrt[{root}]{{{base}}} = {result}$ \
             (check: ${result}^{{{root}}} = {base}$)"
        ),
        points,
    )
}
