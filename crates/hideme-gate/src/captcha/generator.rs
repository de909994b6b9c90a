//! Arithmetic CAPTCHA problem generation.

use hideme_common::{CaptchaDifficulty, MathProblem};
use rand::Rng;

/// Operators available to the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

const EASY_OPS: &[Operator] = &[Operator::Add, Operator::Sub];
const MEDIUM_OPS: &[Operator] = &[Operator::Add, Operator::Sub, Operator::Mul];
const HARD_OPS: &[Operator] = &[Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

/// Generate a fresh CAPTCHA problem for the given difficulty tier.
///
/// The RNG is caller-supplied so tests can seed it. The returned answer is
/// always the exact evaluation of the question: subtraction is ordered
/// larger-minus-smaller, and division is built from a product so it never
/// leaves a remainder.
pub fn generate(difficulty: CaptchaDifficulty, rng: &mut impl Rng) -> MathProblem {
    let (max_a, max_b) = difficulty.operand_bounds();
    let a = rng.random_range(1..=max_a);
    let b = rng.random_range(1..=max_b);

    let ops = match difficulty {
        CaptchaDifficulty::Easy => EASY_OPS,
        CaptchaDifficulty::Medium => MEDIUM_OPS,
        CaptchaDifficulty::Hard => HARD_OPS,
    };
    let op = ops[rng.random_range(0..ops.len())];

    let problem = build_problem(a, b, op);

    tracing::debug!(
        difficulty = ?difficulty,
        question = %problem.question,
        "Generated CAPTCHA problem"
    );

    problem
}

fn build_problem(a: i64, b: i64, op: Operator) -> MathProblem {
    match op {
        Operator::Add => MathProblem {
            question: format!("{a} + {b}"),
            answer: a + b,
        },
        Operator::Sub => {
            // Keep the result non-negative
            let (larger, smaller) = if a >= b { (a, b) } else { (b, a) };
            MathProblem {
                question: format!("{larger} - {smaller}"),
                answer: larger - smaller,
            }
        }
        Operator::Mul => MathProblem {
            question: format!("{a} × {b}"),
            answer: a * b,
        },
        Operator::Div => {
            // Divide a product by one factor so the answer is exact
            let dividend = a * b;
            MathProblem {
                question: format!("{dividend} ÷ {a}"),
                answer: b,
            }
        }
    }
}
