//! Small arithmetic and LaTeX-formatting helpers shared by the question
//! templates.

/// Greatest common divisor.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Integer power for small template parameters.
pub fn ipow(base: i64, exp: u32) -> i64 {
    base.pow(exp)
}

/// `\frac{num}{den}` for display inside math mode.
pub fn frac(num: i64, den: i64) -> String {
    format!("\\frac{{{num}}}{{{den}}}")
}

/// `\left(\frac{num}{den}\right)^{exp}` for display inside math mode.
pub fn frac_pow(num: i64, den: i64, exp: impl std::fmt::Display) -> String {
    format!("\\left(\\frac{{{num}}}{{{den}}}\\right)^{{{exp}}}")
}

/// Plain `num/den` used for option strings.
pub fn ratio(num: i64, den: i64) -> String {
    format!("{num}/{den}")
}

/// Writes `mantissa / 10^scale` as an exact decimal string, trimming
/// trailing zeros ("729", 3 → "0.729"; "90", 3 → "0.09").
pub fn decimal_string(mantissa: i64, scale: u32) -> String {
    let divisor = 10_i64.pow(scale);
    let whole = mantissa / divisor;
    let mut rem = (mantissa % divisor).abs();
    if rem == 0 {
        return whole.to_string();
    }
    let mut digits = format!("{:0width$}", rem, width = scale as usize);
    while digits.ends_with('0') {
        digits.pop();
        rem /= 10;
    }
    format!("{whole}.{digits}")
}

/// Extracts the largest perfect-square factor of `n`, returning
/// `(coefficient, remaining)` such that `√n = coefficient·√remaining`.
pub fn simplify_radical(n: i64) -> (i64, i64) {
    let mut factor = 1;
    let mut remaining = n;
    let mut i = 2;
    while i * i <= remaining {
        while remaining % (i * i) == 0 {
            factor *= i;
            remaining /= i * i;
        }
        i += 1;
    }
    (factor, remaining)
}

/// Human-readable form of a simplified radical: `√n`, an integer, or `c√r`.
pub fn radical_string(n: i64) -> String {
    let (factor, remaining) = simplify_radical(n);
    if factor == 1 {
        format!("√{n}")
    } else if remaining == 1 {
        factor.to_string()
    } else {
        format!("{factor}√{remaining}")
    }
}

/// Derivation text for simplifying `√n` by its perfect-square factors.
pub fn radical_steps(n: i64) -> String {
    let (factor, remaining) = simplify_radical(n);
    if factor > 1 {
        format!(
            "{n} = {square} × {remaining}, so √{n} = {factor}√{remaining}",
            square = factor * factor
        )
    } else {
        format!("{n} has no perfect-square factors, so √{n} is already in simplest form")
    }
}
