//! Topic catalog for the placement syllabus.
//!
//! The syllabus is organized as four macro topics, each owning an ordered
//! list of micro-topic slugs. A micro topic may additionally carry study
//! material (`TopicInfo`) and, for the seeded topics, a question-template
//! set in [`crate::generator`].

use serde::Serialize;

/// Slug of the topic used when a requested topic is unknown or omitted.
pub const DEFAULT_TOPIC: &str = "powers-of-rationals";

/// One of the four top-level syllabus areas.
#[derive(Debug, Clone, Serialize)]
pub struct MacroTopic {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub micro_topics: &'static [&'static str],
}

/// Study material attached to a micro topic.
#[derive(Debug, Clone, Serialize)]
pub struct TopicInfo {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub explanation: &'static str,
    pub formulas: &'static [&'static str],
    pub examples: &'static [WorkedExample],
}

/// A worked problem/solution pair shown on the topic's study page.
#[derive(Debug, Clone, Serialize)]
pub struct WorkedExample {
    pub problem: &'static str,
    pub solution: &'static str,
}

/// The four macro topics in syllabus order.
pub fn macro_topics() -> &'static [MacroTopic] {
    MACRO_TOPICS
}

/// Looks up a macro topic by slug.
pub fn macro_topic(id: &str) -> Option<&'static MacroTopic> {
    MACRO_TOPICS.iter().find(|t| t.id == id)
}

/// Macro topic that owns the given micro topic, if any.
pub fn parent_of(micro_topic: &str) -> Option<&'static MacroTopic> {
    MACRO_TOPICS
        .iter()
        .find(|t| t.micro_topics.contains(&micro_topic))
}

/// Study material for a micro topic, where available.
pub fn topic_info(slug: &str) -> Option<&'static TopicInfo> {
    TOPIC_INFO.iter().find(|info| info.slug == slug)
}

static MACRO_TOPICS: &[MacroTopic] = &[
    MacroTopic {
        id: "numbers-operations",
        title: "Numbers and Operations",
        description: "Operations with rational numbers, scientific notation, percentages and simple interest",
        micro_topics: &[
            "powers-of-rationals",
            "roots-of-rationals",
            "combined-operations",
            "rounding-approximation",
            "scientific-notation",
            "exponential-notation",
            "fractions-ratios",
            "numeric-intervals",
            "interval-operations",
            "successive-percentages",
            "simple-interest",
            "length-conversion",
            "time-conversion",
            "unit-multiples",
            "discount-evaluation",
        ],
    },
    MacroTopic {
        id: "algebra",
        title: "Regularity, Equivalence and Change",
        description: "Algebra, functions, equations and progressions",
        micro_topics: &[
            "direct-proportionality",
            "inverse-proportionality",
            "algebraic-expressions",
            "algebraic-modeling",
            "linear-equations",
            "equation-systems",
            "first-degree-inequalities",
            "linear-functions",
            "affine-functions",
            "graphical-representation",
            "graph-interpretation",
            "quadratic-functions",
            "quadratic-equations",
            "contextual-interpretation",
            "arithmetic-progressions",
            "geometric-progressions",
            "exponential-functions",
        ],
    },
    MacroTopic {
        id: "geometry",
        title: "Shape, Movement and Location",
        description: "Geometry, trigonometry and measurement",
        micro_topics: &[
            "cylinder-volume",
            "cone-volume",
            "sphere-volume",
            "solid-capacity",
            "metric-relations",
            "notable-points",
            "notable-lines",
            "quadrilateral-properties",
            "quadrilateral-classification",
            "circle-elements",
            "circumference-length",
            "circle-angles",
            "trigonometric-ratios",
            "applied-trigonometry",
            "regular-polygons",
            "polygon-properties",
        ],
    },
    MacroTopic {
        id: "statistics",
        title: "Data Management and Uncertainty",
        description: "Statistics, probability and data analysis",
        micro_topics: &[
            "random-events",
            "certain-possible-events",
            "simple-probability",
            "frequency-tables",
            "grouped-data-tables",
            "bar-charts",
            "pie-charts",
            "line-charts",
            "pictograms",
            "discrete-variables",
            "continuous-variables",
            "arithmetic-mean",
            "median",
            "mode",
            "conclusion-validation",
        ],
    },
];

static TOPIC_INFO: &[TopicInfo] = &[
    TopicInfo {
        slug: "powers-of-rationals",
        title: "Powers of rational numbers",
        description: "Raising rational numbers to integer and rational exponents.",
        explanation: "Raising a fraction to a power raises numerator and denominator \
            alike. The core identities are a^m × a^n = a^(m+n), (a^m)^n = a^(mn) and \
            a^(-n) = 1/a^n; for fractions, (a/b)^n = a^n/b^n. Any nonzero number raised \
            to the power 0 equals 1.",
        formulas: &["(a/b)^n = a^n/b^n", "a^(-n) = 1/a^n", "a^0 = 1 (a ≠ 0)"],
        examples: &[
            WorkedExample {
                problem: "Compute (2/3)^2",
                solution: "(2/3)^2 = 2^2/3^2 = 4/9",
            },
            WorkedExample {
                problem: "Simplify (1/2)^(-3)",
                solution: "(1/2)^(-3) = 1/(1/2)^3 = 1/(1/8) = 8",
            },
            WorkedExample {
                problem: "Evaluate (3/4)^0",
                solution: "(3/4)^0 = 1",
            },
        ],
    },
    TopicInfo {
        slug: "roots-of-rationals",
        title: "Roots of rational numbers",
        description: "Radicals over rational numbers, including simplification and rationalization.",
        explanation: "Taking a root is the inverse of raising to a power. For rational \
            numbers, √(a/b) = √a/√b and ⁿ√(a^m) = a^(m/n). Rationalization removes \
            radicals from a denominator by multiplying with a suitable rationalizing \
            factor.",
        formulas: &[
            "√(a/b) = √a/√b",
            "ⁿ√(a^m) = a^(m/n)",
            "1/√a = √a/a (rationalization)",
        ],
        examples: &[
            WorkedExample {
                problem: "Compute √(9/16)",
                solution: "√(9/16) = √9/√16 = 3/4",
            },
            WorkedExample {
                problem: "Rationalize 1/√2",
                solution: "1/√2 = 1/√2 × √2/√2 = √2/2",
            },
            WorkedExample {
                problem: "Simplify ³√(8/27)",
                solution: "³√(8/27) = ³√8/³√27 = 2/3",
            },
        ],
    },
];
