//! CAPTCHA generation and verification.
//!
//! Problems are arithmetic questions with exact integer answers. A wrong
//! submission discards the problem; the gate draws a fresh one.

mod generator;
mod verifier;

pub use generator::generate;
pub use verifier::check_answer;
