//! CAPTCHA answer checking.

use hideme_common::MathProblem;

/// Check a submitted answer against the current problem.
///
/// The input is trimmed and parsed as an integer; anything unparseable
/// counts as a wrong answer rather than an error. The caller decides what a
/// wrong answer means (the gate regenerates the problem).
pub fn check_answer(problem: &MathProblem, input: &str) -> bool {
    match input.trim().parse::<i64>() {
        Ok(value) => value == problem.answer,
        Err(_) => false,
    }
}
