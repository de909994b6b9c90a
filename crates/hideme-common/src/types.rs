//! Core types shared across HideMe components.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BLUR_AMOUNT, DEFAULT_MINIMUM_AGE};

/// Conceal strategy for the gate.
///
/// Controls what happens when the gate is activated:
/// - `Blur` / `Blackout`: reveal immediately, no challenge
/// - `Captcha`: open an arithmetic challenge
/// - `AgeVerification`: open a date-of-birth challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConcealMode {
    /// Visual blur, click-through reveal
    Blur,
    /// Opaque blackout, click-through reveal
    Blackout,
    /// Arithmetic CAPTCHA challenge
    Captcha,
    /// Date-of-birth age challenge
    AgeVerification,
}

impl Default for ConcealMode {
    fn default() -> Self {
        Self::Blur
    }
}

impl ConcealMode {
    /// Returns true if activating the gate opens a challenge instead of
    /// revealing directly
    pub fn requires_challenge(&self) -> bool {
        matches!(self, Self::Captcha | Self::AgeVerification)
    }
}

/// CAPTCHA difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptchaDifficulty {
    /// Operands 1-10, addition and subtraction
    Easy,
    /// Operands 1-20 and 1-10, adds multiplication
    Medium,
    /// Operands 1-50 and 1-20, adds exact division
    Hard,
}

impl Default for CaptchaDifficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl CaptchaDifficulty {
    /// Upper bounds (inclusive) for the two operands at this tier
    pub fn operand_bounds(&self) -> (i64, i64) {
        match self {
            Self::Easy => (10, 10),
            Self::Medium => (20, 10),
            Self::Hard => (50, 20),
        }
    }
}

/// Which verification challenge is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeKind {
    Captcha,
    AgeVerification,
}

/// An arithmetic CAPTCHA problem.
///
/// Invariant: `answer` equals the exact evaluation of `question`; division
/// problems never leave a remainder. Problems are single-use: a wrong answer
/// discards the problem and a fresh one is generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathProblem {
    /// Human-readable question, e.g. "12 × 4"
    pub question: String,
    /// The exact integer answer
    pub answer: i64,
}

/// Resolved visual treatment for concealed content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    /// Blur with the given intensity in pixels
    Blur(u32),
    /// Opaque blackout
    Blackout,
}

/// Caller-supplied gate configuration.
///
/// Field names on the wire match the original widget surface
/// (`blurAmount`, `blackOut`, `captchaDifficulty`, `minimumAge`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateOptions {
    /// Conceal strategy
    #[serde(default)]
    pub mode: ConcealMode,

    /// Blur intensity in pixels, passed through unexamined by the gate logic
    #[serde(default = "default_blur_amount")]
    pub blur_amount: u32,

    /// Force blackout rendering regardless of mode. Does not override
    /// challenge triggering for captcha/age-verification modes.
    #[serde(default)]
    pub black_out: bool,

    /// CAPTCHA generator tier
    #[serde(default)]
    pub captcha_difficulty: CaptchaDifficulty,

    /// Age threshold for age-verification mode
    #[serde(default = "default_minimum_age")]
    pub minimum_age: u32,
}

fn default_blur_amount() -> u32 {
    DEFAULT_BLUR_AMOUNT
}

fn default_minimum_age() -> u32 {
    DEFAULT_MINIMUM_AGE
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            mode: ConcealMode::default(),
            blur_amount: default_blur_amount(),
            black_out: false,
            captcha_difficulty: CaptchaDifficulty::default(),
            minimum_age: default_minimum_age(),
        }
    }
}

impl GateOptions {
    /// Resolve the visual treatment while concealed.
    ///
    /// `black_out` wins over everything; otherwise blackout mode blacks out
    /// and every other mode blurs at the configured intensity.
    pub fn appearance(&self) -> Appearance {
        if self.black_out || self.mode == ConcealMode::Blackout {
            Appearance::Blackout
        } else {
            Appearance::Blur(self.blur_amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_wire_names() {
        assert_eq!(
            serde_json::to_string(&ConcealMode::AgeVerification).unwrap(),
            "\"age-verification\""
        );
        assert_eq!(serde_json::to_string(&ConcealMode::Blur).unwrap(), "\"blur\"");
        assert_eq!(
            serde_json::from_str::<CaptchaDifficulty>("\"medium\"").unwrap(),
            CaptchaDifficulty::Medium
        );
    }

    #[test]
    fn test_options_defaults_from_empty_object() {
        let opts: GateOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, GateOptions::default());
        assert_eq!(opts.mode, ConcealMode::Blur);
        assert_eq!(opts.blur_amount, 5);
        assert!(!opts.black_out);
        assert_eq!(opts.captcha_difficulty, CaptchaDifficulty::Easy);
        assert_eq!(opts.minimum_age, 18);
    }

    #[test]
    fn test_options_camel_case_fields() {
        let opts: GateOptions = serde_json::from_str(
            r#"{"mode":"captcha","blurAmount":10,"blackOut":true,"captchaDifficulty":"hard","minimumAge":21}"#,
        )
        .unwrap();
        assert_eq!(opts.mode, ConcealMode::Captcha);
        assert_eq!(opts.blur_amount, 10);
        assert!(opts.black_out);
        assert_eq!(opts.captcha_difficulty, CaptchaDifficulty::Hard);
        assert_eq!(opts.minimum_age, 21);
    }

    #[test]
    fn test_black_out_forces_blackout_appearance() {
        let opts = GateOptions {
            black_out: true,
            ..Default::default()
        };
        assert_eq!(opts.appearance(), Appearance::Blackout);

        let opts = GateOptions {
            mode: ConcealMode::Captcha,
            black_out: true,
            ..Default::default()
        };
        // Still a challenge mode, but rendered blacked out
        assert_eq!(opts.appearance(), Appearance::Blackout);
        assert!(opts.mode.requires_challenge());
    }

    #[test]
    fn test_blur_appearance_carries_intensity() {
        let opts = GateOptions {
            blur_amount: 12,
            ..Default::default()
        };
        assert_eq!(opts.appearance(), Appearance::Blur(12));
    }
}
